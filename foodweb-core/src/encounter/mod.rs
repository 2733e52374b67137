//! Pairwise encounter resolution and the runners built on top of it.

mod batch;
mod resolver;
mod series;

pub use batch::encounter_batch;
pub use resolver::{can_mate, eating_each_other, encounter};
pub use series::encounter_series;

use foodweb_schemas::Organism;
use serde::Serialize;

/// Identifies one side of a pairwise encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Participant {
    First,
    Second,
}

/// The rule that decided an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EncounterKind {
    /// At least one participant was already dead.
    Inert,
    /// Same species and diet: the pair produced an offspring.
    Mating,
    /// The eater consumed a plant and gained its full vitality.
    Devoured { eater: Participant },
    /// The eater was strictly stronger and gained half the loser's vitality.
    Overpowered { eater: Participant },
    /// Equally strong and able to eat each other: both died.
    MutualKill,
    NoEffect,
}

/// The post-encounter states of both participants and the offspring, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncounterOutcome<S> {
    pub participant1: Organism<S>,
    pub participant2: Organism<S>,
    pub offspring: Option<Organism<S>>,
    pub kind: EncounterKind,
}

impl<S> EncounterOutcome<S> {
    /// Returns the participant that ate the other, if one did.
    pub fn eater(&self) -> Option<Participant> {
        match self.kind {
            EncounterKind::Devoured { eater } | EncounterKind::Overpowered { eater } => Some(eater),
            _ => None,
        }
    }

    pub fn participant(&self, side: Participant) -> &Organism<S> {
        match side {
            Participant::First => &self.participant1,
            Participant::Second => &self.participant2,
        }
    }
}

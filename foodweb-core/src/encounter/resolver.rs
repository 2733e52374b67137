//! Resolves a single meeting between two organisms.
//!
//! Rules are tried in order and the first one that applies decides the
//! outcome: a dead participant makes the encounter inert, matching organisms
//! mate, and everything else is settled by predation.

use super::{EncounterKind, EncounterOutcome, Participant};
use crate::error::FoodwebError;
use foodweb_schemas::Organism;
use tracing::{trace, warn};

/// Resolves one encounter between `o1` and `o2`.
///
/// # Errors
///
/// Returns [`FoodwebError::InvalidPairing`] when both organisms are plants.
pub fn encounter<S>(o1: &Organism<S>, o2: &Organism<S>) -> Result<EncounterOutcome<S>, FoodwebError>
where
    S: PartialEq + Clone,
{
    if o1.is_plant() && o2.is_plant() {
        warn!("rejected encounter between two plants");
        return Err(FoodwebError::InvalidPairing);
    }

    let outcome = if o1.is_dead() || o2.is_dead() {
        EncounterOutcome {
            participant1: o1.after(),
            participant2: o2.after(),
            offspring: None,
            kind: EncounterKind::Inert,
        }
    } else if can_mate(o1, o2) {
        EncounterOutcome {
            participant1: o1.after(),
            participant2: o2.after(),
            offspring: Some(o1.after_with(floor_mean(o1.vitality(), o2.vitality()))),
            kind: EncounterKind::Mating,
        }
    } else {
        let (participant1, participant2, kind) = predation(o1, o2);
        EncounterOutcome {
            participant1,
            participant2,
            offspring: None,
            kind,
        }
    };

    trace!(
        kind = ?outcome.kind,
        before = ?(o1.vitality(), o2.vitality()),
        after = ?(outcome.participant1.vitality(), outcome.participant2.vitality()),
        "encounter resolved"
    );
    Ok(outcome)
}

/// Two organisms mate when they share both species and diet.
pub fn can_mate<S: PartialEq>(o1: &Organism<S>, o2: &Organism<S>) -> bool {
    o1.species() == o2.species() && o1.diet() == o2.diet()
}

/// Settles a meeting by predation alone and returns both post-states.
///
/// Mortality and mating are not considered here; [`encounter`] handles them
/// before delegating.
pub fn eating_each_other<S: Clone>(o1: &Organism<S>, o2: &Organism<S>) -> (Organism<S>, Organism<S>) {
    let (p1, p2, _) = predation(o1, o2);
    (p1, p2)
}

fn predation<S: Clone>(o1: &Organism<S>, o2: &Organism<S>) -> (Organism<S>, Organism<S>, EncounterKind) {
    let can1eat2 = o1.can_eat(o2);
    let can2eat1 = o2.can_eat(o1);
    let (v1, v2) = (o1.vitality(), o2.vitality());

    // Organism 1 attempts to eat organism 2. Plants never attack.
    if !o1.is_plant() {
        if o2.is_plant() {
            return (
                o1.after_with(v1.saturating_add(v2)),
                o2.after_with(0),
                EncounterKind::Devoured { eater: Participant::First },
            );
        }
        if v1 > v2 {
            return (
                o1.after_with(v1.saturating_add(v2 / 2)),
                o2.after_with(0),
                EncounterKind::Overpowered { eater: Participant::First },
            );
        }
    }

    // It failed; organism 2 attempts to eat organism 1.
    if !o2.is_plant() {
        if o1.is_plant() {
            return (
                o1.after_with(0),
                o2.after_with(v1.saturating_add(v2)),
                EncounterKind::Devoured { eater: Participant::Second },
            );
        }
        if v2 > v1 {
            return (
                o1.after_with(0),
                o2.after_with((v1 / 2).saturating_add(v2)),
                EncounterKind::Overpowered { eater: Participant::Second },
            );
        }
    }

    if can1eat2 && can2eat1 {
        return (o1.after_with(0), o2.after_with(0), EncounterKind::MutualKill);
    }

    (o1.after(), o2.after(), EncounterKind::NoEffect)
}

/// `floor((a + b) / 2)` without overflowing.
fn floor_mean(a: u64, b: u64) -> u64 {
    a / 2 + b / 2 + (a & b & 1)
}

use crate::encounter::{EncounterKind, EncounterOutcome};
use foodweb_schemas::Organism;
use serde::Serialize;

/// Everything a logged series run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesReport<S> {
    pub label: String,
    pub initial: Organism<S>,
    pub final_organism: Organism<S>,
    pub steps: Vec<EncounterOutcome<S>>,
}

impl<S> SeriesReport<S> {
    pub fn survived(&self) -> bool {
        !self.final_organism.is_dead()
    }

    /// Offspring born along the way. The series itself discards them.
    pub fn offspring(&self) -> impl Iterator<Item = &Organism<S>> {
        self.steps.iter().filter_map(|step| step.offspring.as_ref())
    }

    /// Index of the step at which the focal organism died, if it did.
    pub fn fatal_step(&self) -> Option<usize> {
        self.steps
            .iter()
            .position(|step| step.kind != EncounterKind::Inert && step.participant1.is_dead())
    }
}

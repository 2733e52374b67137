use super::state::SeriesReport;
use crate::{encounter::encounter, error::FoodwebError, logger::EncounterLogger};
use foodweb_schemas::Organism;
use serde::Serialize;
use tracing::info;

/// A configured encounter series, ready to run. Built by
/// [`SeriesBuilder`](super::builder::SeriesBuilder).
pub struct SeriesRun<S> {
    pub(super) label: String,
    pub(super) focal: Organism<S>,
    pub(super) opponents: Vec<Organism<S>>,
    pub(super) logger: Option<EncounterLogger>,
}

impl<S> SeriesRun<S>
where
    S: PartialEq + Clone + Serialize,
{
    /// Folds the focal organism through every opponent, recording each step.
    ///
    /// The final organism is the same one [`encounter_series`] would return.
    ///
    /// [`encounter_series`]: crate::encounter::encounter_series
    pub fn run(mut self) -> Result<SeriesReport<S>, FoodwebError> {
        info!(label = %self.label, opponents = self.opponents.len(), "starting encounter series");

        let mut focal = self.focal.clone();
        let mut steps = Vec::with_capacity(self.opponents.len());

        for (step, opponent) in self.opponents.iter().enumerate() {
            let outcome = encounter(&focal, opponent)?;
            if let Some(logger) = &mut self.logger {
                logger.log_encounter(&self.label, step, &focal, opponent, &outcome)?;
            }
            focal = outcome.participant1.clone();
            steps.push(outcome);
        }

        info!(
            label = %self.label,
            vitality = focal.vitality(),
            survived = !focal.is_dead(),
            "encounter series complete"
        );

        Ok(SeriesReport {
            label: self.label,
            initial: self.focal,
            final_organism: focal,
            steps,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn focal(&self) -> &Organism<S> {
        &self.focal
    }

    pub fn opponents(&self) -> &[Organism<S>] {
        &self.opponents
    }
}

use crate::{error::FoodwebError, logger::EncounterLogger, simulation::engine::SeriesRun};
use foodweb_schemas::Organism;

/// A fluent builder for constructing a `SeriesRun`.
///
/// This builder collects the focal organism, its opponents in the order they
/// will be met, a label for reporting, and an optional CSV encounter log.
pub struct SeriesBuilder<S> {
    focal: Option<Organism<S>>,
    opponents: Vec<Organism<S>>,
    label: Option<String>,
    log_path: Option<String>,
}

impl<S> Default for SeriesBuilder<S> {
    fn default() -> Self {
        Self {
            focal: None,
            opponents: Vec::new(),
            label: None,
            log_path: None,
        }
    }
}

impl<S> SeriesBuilder<S> {
    /// Creates a new, empty `SeriesBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the organism carried through the series.
    pub fn with_focal(mut self, focal: Organism<S>) -> Self {
        self.focal = Some(focal);
        self
    }

    /// Sets the opponents, in the order they will be met.
    pub fn with_opponents(mut self, opponents: Vec<Organism<S>>) -> Self {
        self.opponents = opponents;
        self
    }

    /// Appends a single opponent to the end of the series.
    pub fn with_opponent(mut self, opponent: Organism<S>) -> Self {
        self.opponents.push(opponent);
        self
    }

    /// Sets the label used in logs and reports. Defaults to `"series"`.
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Configures the run to write every encounter to the specified CSV file.
    pub fn with_encounter_logging_to_file(mut self, path: &str) -> Self {
        self.log_path = Some(path.to_string());
        self
    }

    /// Consumes the builder and returns a configured `SeriesRun`.
    ///
    /// # Errors
    ///
    /// Returns a `FoodwebError` if no focal organism was provided or the log
    /// file cannot be created.
    pub fn build(self) -> Result<SeriesRun<S>, FoodwebError> {
        let focal = self.focal.ok_or(FoodwebError::NoFocalOrganism)?;

        let logger = match self.log_path {
            Some(path) => Some(
                EncounterLogger::new(&path).map_err(|e| FoodwebError::FileIO(path.clone(), e))?,
            ),
            None => None,
        };

        Ok(SeriesRun {
            label: self.label.unwrap_or_else(|| "series".to_string()),
            focal,
            opponents: self.opponents,
            logger,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_a_focal_organism() {
        let result = SeriesBuilder::<&str>::new()
            .with_opponent(Organism::herbivore("deer", 3))
            .build();
        assert!(matches!(result, Err(FoodwebError::NoFocalOrganism)));
    }

    #[test]
    fn label_defaults_when_unset() {
        let run = SeriesBuilder::new()
            .with_focal(Organism::carnivore("wolf", 5))
            .build()
            .unwrap();
        assert_eq!(run.label(), "series");
        assert!(run.opponents().is_empty());
    }

    #[test]
    fn opponents_keep_their_order() {
        let run = SeriesBuilder::new()
            .with_focal(Organism::carnivore("wolf", 5))
            .with_opponents(vec![Organism::herbivore("deer", 3)])
            .with_opponent(Organism::omnivore("bear", 9))
            .with_label("gauntlet")
            .build()
            .unwrap();
        let species: Vec<_> = run.opponents().iter().map(|o| *o.species()).collect();
        assert_eq!(species, ["deer", "bear"]);
        assert_eq!(run.focal().vitality(), 5);
    }

    #[test]
    fn unwritable_log_path_is_a_file_error() {
        let result = SeriesBuilder::new()
            .with_focal(Organism::carnivore("wolf", 5))
            .with_encounter_logging_to_file("/nonexistent-dir/encounters.csv")
            .build();
        assert!(matches!(result, Err(FoodwebError::FileIO(path, _)) if path == "/nonexistent-dir/encounters.csv"));
    }
}

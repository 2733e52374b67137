use crate::{encounter::EncounterOutcome, error::FoodwebError};
use csv::Writer;
use foodweb_schemas::Organism;
use serde::Serialize;
use std::fs;
use std::io;

#[derive(Debug, Serialize)]
struct LogEntry {
    label: String,
    step: usize,
    kind_json: String,
    participant1_before_json: String,
    participant2_before_json: String,
    participant1_after_json: String,
    participant2_after_json: String,
    offspring_json: String,
}

/// Writes one CSV row per resolved encounter.
pub struct EncounterLogger {
    writer: Writer<fs::File>,
    path: String,
}

impl EncounterLogger {
    pub fn new(path: &str) -> Result<Self, io::Error> {
        let writer = Writer::from_path(path)?;
        Ok(Self {
            writer,
            path: path.to_string(),
        })
    }

    pub fn log_encounter<S: Serialize>(
        &mut self,
        label: &str,
        step: usize,
        o1: &Organism<S>,
        o2: &Organism<S>,
        outcome: &EncounterOutcome<S>,
    ) -> Result<(), FoodwebError> {
        let entry = LogEntry {
            label: label.to_string(),
            step,
            kind_json: serde_json::to_string(&outcome.kind)?,
            participant1_before_json: serde_json::to_string(o1)?,
            participant2_before_json: serde_json::to_string(o2)?,
            participant1_after_json: serde_json::to_string(&outcome.participant1)?,
            participant2_after_json: serde_json::to_string(&outcome.participant2)?,
            offspring_json: serde_json::to_string(&outcome.offspring)?,
        };

        self.writer
            .serialize(entry)
            .map_err(|e| FoodwebError::CsvError(self.path.clone(), e))?;
        self.writer
            .flush()
            .map_err(|e| FoodwebError::FileIO(self.path.clone(), e))?;
        Ok(())
    }
}

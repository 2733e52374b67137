use thiserror::Error;

#[derive(Debug, Error)]
pub enum FoodwebError {
    #[error("Two plants cannot be paired in an encounter")]
    InvalidPairing,

    #[error("Organism '{0}' not found in roster")]
    OrganismNotFound(String),

    #[error("A focal organism must be provided for an encounter series")]
    NoFocalOrganism,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Failed to write CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}

//! Encounter resolution for food-web models.
//!
//! [`encounter`](encounter::encounter) settles a single meeting between two
//! organisms; [`encounter_series`](encounter::encounter_series) folds one
//! organism through a sequence of opponents; and
//! [`SeriesBuilder`](simulation::builder::SeriesBuilder) wraps the fold with
//! per-step reporting and an optional CSV log.

pub mod encounter;
pub mod error;
pub mod logger;
pub mod simulation;

pub use encounter::{encounter, encounter_batch, encounter_series, EncounterKind, EncounterOutcome, Participant};
pub use error::FoodwebError;

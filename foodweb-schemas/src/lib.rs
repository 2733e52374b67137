//! Data definitions shared by the foodweb crates: organisms, their diet
//! kinds, and the roster and scenario files that describe encounters.

pub mod file_formats;
pub mod organism;
pub mod scenario;

pub use organism::{Diet, Organism, OrganismSpec};

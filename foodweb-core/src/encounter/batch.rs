use super::{encounter, EncounterOutcome};
use crate::error::FoodwebError;
use foodweb_schemas::Organism;
use rayon::prelude::*;

/// Resolves independent pairs in parallel.
///
/// Outcomes come back in the order of `pairs`. Pairs must not share
/// organisms for the result to mean anything; each pair is resolved against
/// the states it was given.
///
/// # Errors
///
/// Returns [`FoodwebError::InvalidPairing`] if any pair holds two plants.
pub fn encounter_batch<S>(pairs: &[(Organism<S>, Organism<S>)]) -> Result<Vec<EncounterOutcome<S>>, FoodwebError>
where
    S: PartialEq + Clone + Send + Sync,
{
    pairs.par_iter().map(|(o1, o2)| encounter(o1, o2)).collect()
}

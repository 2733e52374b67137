use super::encounter;
use crate::error::FoodwebError;
use foodweb_schemas::Organism;
use tracing::debug;

/// Runs `initial` through each opponent in order and returns its final state.
///
/// Only the focal organism is carried forward: the opponents' post-states and
/// any offspring are dropped. The result depends on the order of `opponents`,
/// since an organism that dies early stays dead for every later encounter.
///
/// # Errors
///
/// Returns [`FoodwebError::InvalidPairing`] at the first step that pairs two
/// plants.
pub fn encounter_series<'a, S, I>(initial: Organism<S>, opponents: I) -> Result<Organism<S>, FoodwebError>
where
    S: PartialEq + Clone + 'a,
    I: IntoIterator<Item = &'a Organism<S>>,
{
    opponents
        .into_iter()
        .enumerate()
        .try_fold(initial, |focal, (step, opponent)| -> Result<_, FoodwebError> {
            let outcome = encounter(&focal, opponent)?;
            debug!(
                step,
                kind = ?outcome.kind,
                vitality = outcome.participant1.vitality(),
                "series step"
            );
            Ok(outcome.participant1)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_series_returns_the_initial_organism() {
        let wolf = Organism::carnivore("wolf", 7);
        let opponents: [Organism<&str>; 0] = [];
        let result = encounter_series(wolf.clone(), &opponents).unwrap();
        assert_eq!(result, wolf);
    }

    #[test]
    fn gains_accumulate_across_steps() {
        let deer = Organism::herbivore("deer", 4);
        let meadow = [Organism::plant("grass", 3), Organism::plant("clover", 2)];
        let result = encounter_series(deer, &meadow).unwrap();
        assert_eq!(result.vitality(), 9);
        assert_eq!(result.species(), &"deer");
    }

    #[test]
    fn order_of_opponents_matters() {
        let deer = Organism::herbivore("deer", 5);
        let wolf = Organism::carnivore("wolf", 5);
        let grass = Organism::plant("grass", 4);

        // An even standoff with the wolf changes nothing, then the deer grazes.
        let wolf_first = encounter_series(deer.clone(), [&wolf, &grass]).unwrap();
        assert_eq!(wolf_first.vitality(), 9);

        // Grazing first makes the deer strong enough to overpower the wolf.
        let grass_first = encounter_series(deer, [&grass, &wolf]).unwrap();
        assert_eq!(grass_first.vitality(), 11);
    }

    #[test]
    fn early_death_prevents_later_wins() {
        let deer = Organism::herbivore("deer", 5);
        let wolf = Organism::carnivore("wolf", 9);
        let grass = Organism::plant("grass", 10);

        let eaten_first = encounter_series(deer.clone(), [&wolf, &grass]).unwrap();
        assert!(eaten_first.is_dead());

        let grazed_first = encounter_series(deer, [&grass, &wolf]).unwrap();
        assert_eq!(grazed_first.vitality(), 15 + 4);
    }

    #[test]
    fn a_plant_series_stops_at_the_first_plant_opponent() {
        let grass = Organism::plant("grass", 5);
        let opponents = [Organism::herbivore("deer", 2), Organism::plant("moss", 1)];
        let result = encounter_series(grass, &opponents);
        assert!(matches!(result, Err(FoodwebError::InvalidPairing)));
    }

    proptest! {
        #[test]
        fn proptest_series_matches_manual_fold(
            start in 0u64..50,
            vitalities in proptest::collection::vec(0u64..50, 0..8),
        ) {
            let opponents: Vec<_> = vitalities
                .iter()
                .enumerate()
                .map(|(i, &v)| if i % 2 == 0 { Organism::herbivore(i as u32, v) } else { Organism::plant(i as u32, v) })
                .collect();
            let focal = Organism::omnivore(u32::MAX, start);

            let mut expected = focal.clone();
            for opponent in &opponents {
                expected = encounter(&expected, opponent).unwrap().participant1;
            }

            prop_assert_eq!(encounter_series(focal, &opponents).unwrap(), expected);
        }
    }
}

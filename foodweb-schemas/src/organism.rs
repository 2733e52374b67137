//! Defines the organism value used by every encounter, together with the diet
//! classification that decides who may eat whom.
//!
//! Organisms are plain values. An encounter never mutates its inputs; it builds
//! new organisms through [`Organism::after`] and [`Organism::after_with`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four diet archetypes. Each one fixes the capability pair
/// `(can_eat_meat, can_eat_plants)` for every organism of that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diet {
    Plant,
    Herbivore,
    Carnivore,
    Omnivore,
}

impl Diet {
    pub const ALL: [Diet; 4] = [Diet::Plant, Diet::Herbivore, Diet::Carnivore, Diet::Omnivore];

    /// Maps a capability pair back onto its archetype.
    pub const fn from_capability(can_eat_meat: bool, can_eat_plants: bool) -> Self {
        match (can_eat_meat, can_eat_plants) {
            (false, false) => Diet::Plant,
            (false, true) => Diet::Herbivore,
            (true, false) => Diet::Carnivore,
            (true, true) => Diet::Omnivore,
        }
    }

    /// Returns `(can_eat_meat, can_eat_plants)`.
    pub const fn capability(self) -> (bool, bool) {
        match self {
            Diet::Plant => (false, false),
            Diet::Herbivore => (false, true),
            Diet::Carnivore => (true, false),
            Diet::Omnivore => (true, true),
        }
    }

    pub const fn can_eat_meat(self) -> bool {
        self.capability().0
    }

    pub const fn can_eat_plants(self) -> bool {
        self.capability().1
    }

    /// A plant is the kind that can eat nothing at all.
    pub const fn is_plant(self) -> bool {
        !(self.can_eat_meat() || self.can_eat_plants())
    }

    /// Whether an organism of this kind is able to eat one of kind `prey`.
    ///
    /// The relation is asymmetric: a carnivore can eat a herbivore, but not
    /// the other way around.
    pub const fn can_eat(self, prey: Diet) -> bool {
        (self.can_eat_meat() && !prey.is_plant()) || (self.can_eat_plants() && prey.is_plant())
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Diet::Plant => "plant",
            Diet::Herbivore => "herbivore",
            Diet::Carnivore => "carnivore",
            Diet::Omnivore => "omnivore",
        };
        f.write_str(name)
    }
}

/// A single organism: a species identity, its remaining vitality and its
/// diet kind. A vitality of zero means the organism is dead and takes no
/// further part in encounters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Organism<S> {
    species: S,
    vitality: u64,
    diet: Diet,
}

impl<S> Organism<S> {
    pub const fn new(species: S, vitality: u64, diet: Diet) -> Self {
        Self {
            species,
            vitality,
            diet,
        }
    }

    pub const fn plant(species: S, vitality: u64) -> Self {
        Self::new(species, vitality, Diet::Plant)
    }

    pub const fn herbivore(species: S, vitality: u64) -> Self {
        Self::new(species, vitality, Diet::Herbivore)
    }

    pub const fn carnivore(species: S, vitality: u64) -> Self {
        Self::new(species, vitality, Diet::Carnivore)
    }

    pub const fn omnivore(species: S, vitality: u64) -> Self {
        Self::new(species, vitality, Diet::Omnivore)
    }

    pub fn species(&self) -> &S {
        &self.species
    }

    pub fn vitality(&self) -> u64 {
        self.vitality
    }

    pub fn diet(&self) -> Diet {
        self.diet
    }

    pub fn is_dead(&self) -> bool {
        self.vitality == 0
    }

    pub fn is_plant(&self) -> bool {
        self.diet.is_plant()
    }

    /// Whether this organism is able to eat `other`, judged by diet alone.
    pub fn can_eat<T>(&self, other: &Organism<T>) -> bool {
        self.diet.can_eat(other.diet)
    }
}

impl<S: Clone> Organism<S> {
    /// A copy of this organism as it stands after an encounter that left it
    /// untouched.
    pub fn after(&self) -> Self {
        self.after_with(self.vitality)
    }

    /// The same species and diet carrying a new vitality.
    pub fn after_with(&self, vitality: u64) -> Self {
        Self::new(self.species.clone(), vitality, self.diet)
    }
}

impl<S: fmt::Display> fmt::Display for Organism<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, vitality {})", self.species, self.diet, self.vitality)
    }
}

/// The on-disk description of a named organism in a roster file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganismSpec {
    pub organism_id: String,
    pub species: String,
    pub diet: Diet,
    pub vitality: u64,
}

impl OrganismSpec {
    pub fn to_organism(&self) -> Organism<String> {
        Organism::new(self.species.clone(), self.vitality, self.diet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_round_trips_through_archetype() {
        for diet in Diet::ALL {
            let (meat, plants) = diet.capability();
            assert_eq!(Diet::from_capability(meat, plants), diet);
        }
    }

    #[test]
    fn only_the_empty_capability_is_a_plant() {
        assert!(Diet::Plant.is_plant());
        assert!(!Diet::Herbivore.is_plant());
        assert!(!Diet::Carnivore.is_plant());
        assert!(!Diet::Omnivore.is_plant());
    }

    #[test]
    fn can_eat_is_asymmetric() {
        assert!(Diet::Carnivore.can_eat(Diet::Herbivore));
        assert!(!Diet::Herbivore.can_eat(Diet::Carnivore));

        assert!(Diet::Herbivore.can_eat(Diet::Plant));
        assert!(!Diet::Carnivore.can_eat(Diet::Plant));

        assert!(Diet::Omnivore.can_eat(Diet::Plant));
        assert!(Diet::Omnivore.can_eat(Diet::Carnivore));
        assert!(Diet::Carnivore.can_eat(Diet::Omnivore));

        for diet in Diet::ALL {
            assert!(!Diet::Plant.can_eat(diet), "plants never eat {diet}");
        }
    }

    #[test]
    fn organism_predicates_follow_its_diet() {
        let wolf = Organism::carnivore("wolf", 8);
        let grass = Organism::plant("grass", 3);
        let deer = Organism::herbivore("deer", 5);

        assert!(grass.is_plant());
        assert!(wolf.can_eat(&deer));
        assert!(!wolf.can_eat(&grass));
        assert!(deer.can_eat(&grass));
        assert!(!deer.can_eat(&wolf));
    }

    #[test]
    fn after_without_a_vitality_is_an_identical_copy() {
        let bear = Organism::omnivore("bear", 12);
        let copy = bear.after();
        assert_eq!(copy, bear);
        assert_eq!(copy.species(), bear.species());
        assert_eq!(copy.vitality(), 12);
    }

    #[test]
    fn after_with_keeps_species_and_diet() {
        let bear = Organism::omnivore("bear", 12);
        let starved = bear.after_with(0);
        assert_eq!(starved.species(), &"bear");
        assert_eq!(starved.diet(), Diet::Omnivore);
        assert!(starved.is_dead());
        assert!(!bear.is_dead());
    }

    #[test]
    fn organism_spec_deserializes_from_json() {
        let json = r#"{"organism_id":"ORG-WOLF-01","species":"wolf","diet":"carnivore","vitality":9}"#;
        let spec: OrganismSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.diet, Diet::Carnivore);
        assert_eq!(spec.to_organism(), Organism::carnivore("wolf".to_string(), 9));
    }
}

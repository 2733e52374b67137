use serde::{Deserialize, Serialize};

/// Two roster organisms meeting once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairSpec {
    pub first: String,
    pub second: String,
}

/// A focal organism run through an ordered list of opponents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub name: String,
    pub focal: String,
    pub opponents: Vec<String>,
}

impl SeriesSpec {
    /// Every roster id this series refers to, focal first.
    pub fn organism_ids(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.focal.as_str()).chain(self.opponents.iter().map(String::as_str))
    }
}

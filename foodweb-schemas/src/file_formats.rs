use crate::{
    organism::OrganismSpec,
    scenario::{PairSpec, SeriesSpec},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct OrganismFile {
    pub schema_version: String,
    pub organisms: Vec<OrganismSpec>,
}

#[derive(Debug, Deserialize)]
pub struct ScenarioFile {
    pub schema_version: String,
    #[serde(default)]
    pub pairs: Vec<PairSpec>,
    #[serde(default)]
    pub series: Vec<SeriesSpec>,
}

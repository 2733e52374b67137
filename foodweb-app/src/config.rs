use anyhow::{Context, Result};
use foodweb_core::FoodwebError;
use foodweb_schemas::{
    file_formats::{OrganismFile, ScenarioFile},
    Organism, OrganismSpec,
};
use std::{
    collections::{HashMap, HashSet},
    fs,
    path::{Path, PathBuf},
};

/// Every named organism loaded from the roster directory.
pub struct Roster {
    pub organisms: HashMap<String, OrganismSpec>,
}

impl Roster {
    /// Loads all organism files from the specified directory.
    pub fn load<P: AsRef<Path>>(base_path: P) -> Result<Self> {
        println!("Loading roster from {:?}...", base_path.as_ref());

        let organisms = load_organism_specs(base_path.as_ref())?;

        println!("Roster loaded: {} organisms.", organisms.len());
        Ok(Self { organisms })
    }

    /// Builds the organism registered under `organism_id`.
    pub fn organism(&self, organism_id: &str) -> Result<Organism<String>, FoodwebError> {
        self.organisms
            .get(organism_id)
            .map(OrganismSpec::to_organism)
            .ok_or_else(|| FoodwebError::OrganismNotFound(organism_id.to_string()))
    }
}

pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioFile> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read scenario file: {:?}", path.as_ref()))?;
    let scenario: ScenarioFile = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse YAML from {:?}", path.as_ref()))?;
    Ok(scenario)
}

/// Checks that a scenario has work to do, that its series names are unique
/// and usable as file names, and that every organism it mentions is in the
/// roster.
pub fn validate_scenario(scenario: &ScenarioFile, roster: &Roster) -> Result<(), FoodwebError> {
    if scenario.pairs.is_empty() && scenario.series.is_empty() {
        return Err(FoodwebError::ConfigError(
            "scenario defines neither pairs nor series".to_string(),
        ));
    }

    let mut names = HashSet::new();
    for series in &scenario.series {
        if !is_plain_file_stem(&series.name) {
            return Err(FoodwebError::ConfigError(format!(
                "series name '{}' cannot be used as a log file name",
                series.name
            )));
        }
        if !names.insert(series.name.as_str()) {
            return Err(FoodwebError::ConfigError(format!(
                "series name '{}' is used more than once",
                series.name
            )));
        }
    }

    let referenced = scenario
        .pairs
        .iter()
        .flat_map(|pair| [pair.first.as_str(), pair.second.as_str()])
        .chain(scenario.series.iter().flat_map(|series| series.organism_ids()));

    for id in referenced {
        if !roster.organisms.contains_key(id) {
            return Err(FoodwebError::OrganismNotFound(id.to_string()));
        }
    }
    Ok(())
}

/// Series names become `series_<name>.csv` inside the run directory.
fn is_plain_file_stem(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.chars().any(std::path::is_separator)
}

/// Roster files in `dir`, sorted so loading order never depends on `read_dir`.
fn roster_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read directory: {:?}", dir))? {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |s| s == "yaml" || s == "yml") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Reads every roster file into one map keyed by `organism_id`. An id defined
/// twice is a configuration error naming both files.
fn load_organism_specs(dir: &Path) -> Result<HashMap<String, OrganismSpec>> {
    let mut organisms = HashMap::new();
    let mut origins: HashMap<String, PathBuf> = HashMap::new();

    for path in roster_files(dir)? {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read roster file: {:?}", path))?;
        let file: OrganismFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML from {:?}", path))?;

        for spec in file.organisms {
            if let Some(first) = origins.get(&spec.organism_id) {
                return Err(FoodwebError::ConfigError(format!(
                    "organism '{}' is defined in both {:?} and {:?}",
                    spec.organism_id, first, path
                ))
                .into());
            }
            origins.insert(spec.organism_id.clone(), path.clone());
            organisms.insert(spec.organism_id.clone(), spec);
        }
    }
    Ok(organisms)
}

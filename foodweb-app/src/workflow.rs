use crate::config::Roster;
use anyhow::{Context, Result};
use foodweb_core::{
    encounter_batch,
    simulation::{builder::SeriesBuilder, state::SeriesReport},
    EncounterKind, EncounterOutcome,
};
use foodweb_schemas::{file_formats::ScenarioFile, scenario::PairSpec};
use serde::Serialize;
use std::{fs, path::Path};

/// The outcome of one scenario pair, keyed by the roster ids involved.
#[derive(Debug, Serialize)]
pub struct PairSummary {
    pub first: String,
    pub second: String,
    pub outcome: EncounterOutcome<String>,
}

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub pairs: Vec<PairSummary>,
    pub series: Vec<SeriesReport<String>>,
}

/// Resolves every scenario pair against the roster's initial states.
pub fn run_pairs(pairs: &[PairSpec], roster: &Roster) -> Result<Vec<PairSummary>> {
    println!("\n--- [Workflow] Resolving {} independent pairs ---", pairs.len());

    let organisms = pairs
        .iter()
        .map(|pair| Ok((roster.organism(&pair.first)?, roster.organism(&pair.second)?)))
        .collect::<Result<Vec<_>>>()?;

    let outcomes = encounter_batch(&organisms)?;

    Ok(pairs
        .iter()
        .zip(outcomes)
        .map(|(pair, outcome)| PairSummary {
            first: pair.first.clone(),
            second: pair.second.clone(),
            outcome,
        })
        .collect())
}

/// Runs each scenario series, logging encounters into `log_dir` when given.
pub fn run_series(
    scenario: &ScenarioFile,
    roster: &Roster,
    log_dir: Option<&Path>,
) -> Result<Vec<SeriesReport<String>>> {
    let mut reports = Vec::with_capacity(scenario.series.len());

    for series in &scenario.series {
        println!("\n--- [Workflow] Running series: {} ---", series.name);

        let opponents = series
            .opponents
            .iter()
            .map(|id| roster.organism(id))
            .collect::<Result<Vec<_>, _>>()?;

        let mut builder = SeriesBuilder::new()
            .with_focal(roster.organism(&series.focal)?)
            .with_opponents(opponents)
            .with_label(&series.name);

        if let Some(dir) = log_dir {
            let log_path = dir.join(format!("series_{}.csv", series.name));
            let log_path = log_path
                .to_str()
                .with_context(|| format!("Log path is not valid UTF-8: {:?}", log_path))?;
            builder = builder.with_encounter_logging_to_file(log_path);
        }

        let report = builder
            .build()?
            .run()
            .with_context(|| format!("Series '{}' failed", series.name))?;
        reports.push(report);
    }

    Ok(reports)
}

pub fn write_summary(summary: &RunSummary, output_dir: &Path) -> Result<()> {
    let path = output_dir.join("summary.json");
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(&path, json).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}

pub fn print_summary_report(summary: &RunSummary) {
    println!("\n--- Encounter Summary ---");
    for pair in &summary.pairs {
        println!(
            "{} vs {}: {} -> {} / {}",
            pair.first,
            pair.second,
            describe(&pair.outcome.kind),
            pair.outcome.participant1,
            pair.outcome.participant2,
        );
        if let Some(offspring) = &pair.outcome.offspring {
            println!("    offspring: {}", offspring);
        }
    }

    println!("\n--- Series Summary ---");
    for report in &summary.series {
        let fate = match report.fatal_step() {
            Some(step) => format!("died at step {}", step + 1),
            None if report.survived() => "survived".to_string(),
            None => "was already dead".to_string(),
        };
        println!(
            "{}: {} -> {} ({}, {} encounters, {} offspring discarded)",
            report.label,
            report.initial,
            report.final_organism,
            fate,
            report.steps.len(),
            report.offspring().count(),
        );
    }
}

fn describe(kind: &EncounterKind) -> &'static str {
    match kind {
        EncounterKind::Inert => "inert",
        EncounterKind::Mating => "mating",
        EncounterKind::Devoured { .. } => "devoured",
        EncounterKind::Overpowered { .. } => "overpowered",
        EncounterKind::MutualKill => "mutual kill",
        EncounterKind::NoEffect => "no effect",
    }
}

//! Match log storage and reporting

use bracket_core::{segments, MatchRecord, RoundsError, SegmentSummary};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A match log: every match of one or more tournaments, in play order.
/// Stored as a JSON array of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchLog {
    pub records: Vec<MatchRecord>,
}

#[derive(Error, Debug)]
pub enum LogError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid match log: {0}")]
    Json(#[from] serde_json::Error),
}

impl MatchLog {
    pub fn new(records: Vec<MatchRecord>) -> Self {
        Self { records }
    }

    /// Load a log from a JSON file
    pub fn load(path: &Path) -> Result<Self, LogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| LogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save the log to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), LogError> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| LogError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_json(&self) -> Result<String, LogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Generate a text report: one block per tournament, matches grouped
    /// by round.
    pub fn generate_report(&self) -> String {
        let mut report = String::new();

        for range in segments(&self.records) {
            let matches = &self.records[range];
            let first = &matches[0];
            report.push_str(&format!(
                "=== {} ({}) ===\n",
                first.tournament, first.start_date
            ));

            let mut rounds: BTreeMap<(u32, &str), Vec<&MatchRecord>> = BTreeMap::new();
            let mut unassigned = Vec::new();
            for record in matches {
                match &record.round {
                    Some(round) => rounds
                        .entry((round.number, round.name.as_str()))
                        .or_default()
                        .push(record),
                    None => unassigned.push(record),
                }
            }

            for ((number, name), records) in &rounds {
                report.push_str(&format!("{} (round {}):\n", name, number));
                for record in records {
                    report.push_str(&format!("  {} d. {}\n", record.winner, record.loser));
                }
            }
            if !unassigned.is_empty() {
                report.push_str("Unassigned:\n");
                for record in unassigned {
                    report.push_str(&format!("  {} d. {}\n", record.winner, record.loser));
                }
            }
            report.push('\n');
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        print!("{}", self.generate_report());
    }
}

/// Render one line per tournament, then one line per failure
pub fn generate_summary(assigned: &[SegmentSummary], failed: &[RoundsError]) -> String {
    let mut summary = String::new();
    summary.push_str(&format!(
        "{:<40} {:<10} {:<16} {:>7} {:>7} {:>6} {:>5}\n",
        "Tournament", "Start", "Resolver", "Players", "Matches", "Rounds", "Byes"
    ));
    summary.push_str(&"-".repeat(98));
    summary.push('\n');

    for entry in assigned {
        summary.push_str(&format!(
            "{:<40} {:<10} {:<16} {:>7} {:>7} {:>6} {:>5}\n",
            entry.tournament,
            entry.start_date.to_string(),
            entry.resolver.to_string(),
            entry.players,
            entry.matches,
            entry.rounds,
            format!("{}/{}", entry.byes_detected, entry.byes_expected)
        ));
    }

    if !failed.is_empty() {
        summary.push('\n');
        for err in failed {
            summary.push_str(&format!("FAILED {}\n", err));
        }
    }
    summary
}

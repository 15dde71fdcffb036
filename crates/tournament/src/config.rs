//! Run configuration: failure policy, data corrections and round-robin events

use bracket_core::MatchRecord;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// What to do when a tournament cannot be resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnInconsistency {
    /// Stop at the first inconsistent tournament
    #[default]
    Abort,
    /// Log it, leave it without rounds and continue
    Skip,
}

/// Configuration for a rounds run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundsConfig {
    pub on_inconsistency: OnInconsistency,
    /// Fixes for known errors in the source data
    pub corrections: Vec<Correction>,
    /// Events played as round-robin groups followed by knockouts
    pub round_robin: Vec<RoundRobinEvent>,
}

/// A fix for one match, identified by tournament and both players.
///
/// Renames carry over to winner and loser. A forced winner must be one of
/// the (renamed) players; the other becomes the loser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    pub tournament: String,
    /// Calendar year of the record's `start_date` (any year when absent).
    /// For a tournament that runs past Dec 31 this is the year it started,
    /// not the year of the data file its later matches were filed under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub player1: String,
    pub player2: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_player1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_player2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}

/// Tournament played in round-robin format in the given years (inclusive)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRobinEvent {
    pub tournament: String,
    pub from_year: i32,
    pub to_year: i32,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl RoundsConfig {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Whether `record` belongs to a configured round-robin event
    pub fn is_round_robin(&self, record: &MatchRecord) -> bool {
        self.round_robin.iter().any(|event| event.covers(record))
    }
}

impl Correction {
    pub fn matches(&self, record: &MatchRecord) -> bool {
        record.tournament == self.tournament
            && self.year.map_or(true, |year| record.start_date.year() == year)
            && record.player1 == self.player1
            && record.player2 == self.player2
    }
}

impl RoundRobinEvent {
    pub fn covers(&self, record: &MatchRecord) -> bool {
        let year = record.start_date.year();
        record.tournament == self.tournament && (self.from_year..=self.to_year).contains(&year)
    }
}

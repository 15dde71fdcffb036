//! Match records as supplied by the parsing layer

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single completed match.
///
/// Everything except `round` is supplied fully formed by the caller.
/// `round` is written once by round inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Tournament identifier (usually its name)
    pub tournament: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub player1: String,
    pub player2: String,
    pub winner: String,
    pub loser: String,
    /// Whether the tournament opens with a round-robin group stage
    #[serde(default)]
    pub round_robin: bool,
    /// Inferred round, absent until assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<Round>,
}

/// Round assigned to a match. Round 1 is the earliest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub number: u32,
    pub name: String,
}

impl MatchRecord {
    /// Build an unassigned record where `winner` beat `loser`.
    ///
    /// `player1` is the winner and `player2` the loser.
    pub fn new(tournament: &str, start_date: NaiveDate, winner: &str, loser: &str) -> Self {
        Self {
            tournament: tournament.to_string(),
            start_date,
            end_date: start_date,
            player1: winner.to_string(),
            player2: loser.to_string(),
            winner: winner.to_string(),
            loser: loser.to_string(),
            round_robin: false,
            round: None,
        }
    }

    /// Mark the record as part of a round-robin tournament
    pub fn with_round_robin(mut self, round_robin: bool) -> Self {
        self.round_robin = round_robin;
        self
    }

    /// Whether `player` took part in this match
    pub fn involves(&self, player: &str) -> bool {
        self.player1 == player || self.player2 == player
    }

    /// Round number, if assigned
    pub fn round_number(&self) -> Option<u32> {
        self.round.as_ref().map(|r| r.number)
    }

    /// Round name, if assigned
    pub fn round_name(&self) -> Option<&str> {
        self.round.as_ref().map(|r| r.name.as_str())
    }
}

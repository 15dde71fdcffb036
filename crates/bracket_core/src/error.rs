//! Structural inconsistencies raised while inferring rounds

use chrono::NaiveDate;
use thiserror::Error;

/// A tournament whose data does not fit the bracket shape inferred for it.
///
/// Every variant is fatal for the segment it was raised in.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Inconsistency {
    #[error("match schedule for {players} players did not converge to a single final")]
    ScheduleDiverged { players: usize },

    #[error("{found} matches were placed in the last two rounds instead of 4")]
    LastRoundsCount { found: usize },

    #[error("no undefeated champion")]
    NoChampion,

    #[error("no player lost twice, so the third place match cannot be found")]
    NoThirdPlaceLoser,

    #[error("champion played {found} opponents in the last two rounds instead of 2")]
    ChampionOpponents { found: usize },

    #[error(
        "last two rounds produced {semifinals} semifinals, {finals} finals and \
         {third_place} third place matches instead of 2, 1 and 1"
    )]
    LastRoundsDistribution {
        semifinals: usize,
        finals: usize,
        third_place: usize,
    },

    #[error("too many matches assigned to round {round}")]
    RoundOverbooked { round: u32 },

    #[error("{awarded} byes awarded but only {expected} expected")]
    TooManyByes { awarded: usize, expected: usize },

    #[error("{player} has no defeated opponent that fits round {round}")]
    NoOpponentForRound { player: String, round: u32 },

    #[error("{player} won more matches than rounds remain below round {round}")]
    TooManyWins { player: String, round: u32 },

    #[error("bracket walk stalled with {remaining} scheduled matches unassigned")]
    WalkStalled { remaining: u32 },

    #[error("{count} matches were left without a round")]
    Unplaced { count: usize },

    #[error("round {round} is outside the {total} rounds of the draw")]
    RoundOutOfRange { round: u32, total: u32 },

    #[error("{found} players played the maximum number of matches instead of 2")]
    RoundRobinFinalists { found: usize },

    #[error("finalists {first} and {second} never played each other")]
    FinalNotFound { first: String, second: String },

    #[error("no semifinal candidate left for finalist {finalist}")]
    MissingSemifinal { finalist: String },
}

/// Failure to assign rounds to a tournament segment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoundsError {
    #[error("{inconsistency} (tournament {tournament}, start date {start_date})")]
    Structural {
        tournament: String,
        start_date: NaiveDate,
        inconsistency: Inconsistency,
    },
}

impl RoundsError {
    /// Identifier of the tournament that failed
    pub fn tournament(&self) -> &str {
        match self {
            RoundsError::Structural { tournament, .. } => tournament,
        }
    }

    /// Start date of the tournament that failed
    pub fn start_date(&self) -> NaiveDate {
        match self {
            RoundsError::Structural { start_date, .. } => *start_date,
        }
    }

    pub fn inconsistency(&self) -> &Inconsistency {
        match self {
            RoundsError::Structural { inconsistency, .. } => inconsistency,
        }
    }
}

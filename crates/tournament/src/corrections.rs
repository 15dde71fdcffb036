//! Applying configured data fixes before round inference

use bracket_core::MatchRecord;
use tracing::{debug, warn};

use crate::config::{Correction, RoundsConfig};

/// Counts of records changed by [`prepare_records`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreparedCounts {
    pub corrected: usize,
    pub round_robin: usize,
}

/// Apply corrections and round-robin flags from `config` in place.
///
/// Existing `round_robin` flags are kept; the config only adds to them.
pub fn prepare_records(records: &mut [MatchRecord], config: &RoundsConfig) -> PreparedCounts {
    let mut counts = PreparedCounts::default();
    let mut hits = vec![0usize; config.corrections.len()];

    for record in records.iter_mut() {
        if let Some(index) = config.corrections.iter().position(|c| c.matches(record)) {
            apply_correction(record, &config.corrections[index]);
            hits[index] += 1;
            counts.corrected += 1;
        }
        if !record.round_robin && config.is_round_robin(record) {
            record.round_robin = true;
            counts.round_robin += 1;
        }
    }

    for (correction, _) in config.corrections.iter().zip(&hits).filter(|&(_, &n)| n == 0) {
        warn!(
            tournament = %correction.tournament,
            player1 = %correction.player1,
            player2 = %correction.player2,
            "correction matched no records"
        );
    }
    counts
}

fn apply_correction(record: &mut MatchRecord, correction: &Correction) {
    if let Some(name) = &correction.set_player1 {
        rename(record, Side::First, name);
    }
    if let Some(name) = &correction.set_player2 {
        rename(record, Side::Second, name);
    }
    if let Some(winner) = &correction.winner {
        if *winner == record.player1 {
            record.winner = record.player1.clone();
            record.loser = record.player2.clone();
        } else if *winner == record.player2 {
            record.winner = record.player2.clone();
            record.loser = record.player1.clone();
        } else {
            warn!(
                tournament = %record.tournament,
                winner = %winner,
                "forced winner is not a player of the match"
            );
        }
    }
    debug!(
        tournament = %record.tournament,
        winner = %record.winner,
        loser = %record.loser,
        "corrected match"
    );
}

enum Side {
    First,
    Second,
}

fn rename(record: &mut MatchRecord, side: Side, name: &str) {
    let slot = match side {
        Side::First => &mut record.player1,
        Side::Second => &mut record.player2,
    };
    let old = std::mem::replace(slot, name.to_string());
    if record.winner == old {
        record.winner = name.to_string();
    }
    if record.loser == old {
        record.loser = name.to_string();
    }
}

//! Bye-free single elimination without a third place match.
//!
//! Every surviving player plays every round, so a player's last round is
//! their total matches played and each match belongs to the last round of
//! its loser.

use crate::names::RoundNames;
use crate::placement::{Placements, Resolution};
use crate::record::MatchRecord;
use crate::tally::Tally;

pub(crate) fn resolve(matches: &[MatchRecord], tally: &Tally) -> Resolution {
    let total = tally.max_total();
    let mut placements = Placements::new(matches.len());
    place_by_loser_total(matches, tally, total, &mut placements);

    Resolution {
        placements,
        names: RoundNames::elimination(total),
        byes: 0,
    }
}

/// Place each match whose loser played at most `up_to` matches in the
/// round equal to the loser's total.
pub(crate) fn place_by_loser_total(
    matches: &[MatchRecord],
    tally: &Tally,
    up_to: u32,
    placements: &mut Placements,
) {
    for (index, record) in matches.iter().enumerate() {
        let last_round = tally.total(&record.loser);
        if last_round <= up_to {
            placements.place(index, last_round);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(winner: &str, loser: &str) -> MatchRecord {
        let date = NaiveDate::from_ymd_opt(2018, 2, 12).unwrap();
        MatchRecord::new("Open", date, winner, loser)
    }

    #[test]
    fn test_four_player_draw() {
        let matches = vec![record("A", "B"), record("C", "D"), record("A", "C")];
        let tally = Tally::from_matches(&matches);
        let resolution = resolve(&matches, &tally);

        let rounds = resolution.placements.into_rounds(&resolution.names).unwrap();
        let numbers: Vec<_> = rounds.iter().map(|r| r.number).collect();
        let names: Vec<_> = rounds.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(numbers, vec![1, 1, 2]);
        assert_eq!(names, vec!["Semifinals", "Semifinals", "Final"]);
    }

    #[test]
    fn test_partial_placement_leaves_late_rounds() {
        let matches = vec![
            record("A", "B"),
            record("C", "D"),
            record("E", "F"),
            record("G", "H"),
            record("A", "C"),
            record("E", "G"),
            record("A", "E"),
        ];
        let tally = Tally::from_matches(&matches);
        let mut placements = Placements::new(matches.len());
        place_by_loser_total(&matches, &tally, 1, &mut placements);

        let unplaced: Vec<_> = placements.unplaced().collect();
        assert_eq!(unplaced, vec![4, 5, 6]);
        assert_eq!(placements.get(0).map(|p| p.round), Some(1));
    }
}

//! Single elimination with byes and a third place match.
//!
//! The last two rounds are settled first: their matches are exactly those
//! between players who played `R` or `R - 1` matches (one side may have
//! had a bye). The rest of the bracket is then walked backward from the
//! four semifinalists.

use tracing::trace;

use crate::bye_walker::ByeWalk;
use crate::error::Inconsistency;
use crate::last_rounds;
use crate::placement::{Placements, Resolution};
use crate::record::MatchRecord;
use crate::tally::Tally;
use crate::topology::Bracket;

pub(crate) fn resolve(
    matches: &[MatchRecord],
    tally: &Tally,
    bracket: &Bracket,
) -> Result<Resolution, Inconsistency> {
    let total = bracket.schedule.rounds();
    let reached_semifinals = |player: &str| {
        let played = tally.total(player);
        played == total || played + 1 == total
    };

    let mut candidates = Vec::with_capacity(4);
    let mut semifinalists: Vec<&str> = Vec::with_capacity(4);
    let mut byes: Vec<&str> = Vec::new();
    for (index, record) in matches.iter().enumerate() {
        let players = [record.player1.as_str(), record.player2.as_str()];
        if !players.iter().all(|&p| reached_semifinals(p)) {
            continue;
        }
        candidates.push(index);
        for player in players {
            if tally.total(player) + 1 == total && !byes.contains(&player) {
                byes.push(player);
            }
            if !semifinalists.contains(&player) {
                semifinalists.push(player);
            }
        }
    }
    if candidates.len() != 4 {
        return Err(Inconsistency::LastRoundsCount {
            found: candidates.len(),
        });
    }

    let mut placements = Placements::new(matches.len());
    last_rounds::resolve(matches, tally, &candidates, total, &mut placements)?;

    let mut schedule = bracket.schedule.clone();
    schedule.consume(total, 2)?;
    schedule.consume(total - 1, 2)?;

    let mut walk = ByeWalk::new(matches, tally, placements, schedule, bracket.byes);
    walk.record_byes(byes.len())?;
    for player in semifinalists {
        walk.push(player, total - 1, total.saturating_sub(2));
    }
    walk.run()?;
    trace!(byes = walk.byes(), "walked bracket below the semifinals");

    Ok(walk.finish(total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Topology;
    use chrono::NaiveDate;

    fn record(winner: &str, loser: &str) -> MatchRecord {
        let date = NaiveDate::from_ymd_opt(2009, 11, 5).unwrap();
        MatchRecord::new("Bali", date, winner, loser)
    }

    fn bracket_for(tally: &Tally) -> Bracket {
        match Topology::classify(false, tally).unwrap() {
            Topology::Elimination(bracket) => bracket,
            Topology::RoundRobin => unreachable!(),
        }
    }

    #[test]
    fn test_six_players_with_third_place() {
        // A and B have byes; E loses the semifinal and the third place match
        let matches = vec![
            record("C", "D"),
            record("E", "F"),
            record("A", "C"),
            record("B", "E"),
            record("C", "E"),
            record("A", "B"),
        ];
        let tally = Tally::from_matches(&matches);
        let bracket = bracket_for(&tally);
        assert_eq!(bracket.schedule.as_slice(), &[2, 2, 2]);

        let resolution = resolve(&matches, &tally, &bracket).unwrap();
        assert_eq!(resolution.byes, 2);

        let rounds = resolution.placements.into_rounds(&resolution.names).unwrap();
        let got: Vec<_> = rounds.iter().map(|r| (r.number, r.name.as_str())).collect();
        assert_eq!(
            got,
            vec![
                (1, "Quarterfinals"),
                (1, "Quarterfinals"),
                (2, "Semifinals"),
                (2, "Semifinals"),
                (3, "Third Place Match"),
                (3, "Final"),
            ]
        );
    }

    #[test]
    fn test_missing_semifinal_match() {
        // Final and third place match present, one semifinal missing
        let matches = vec![
            record("C", "D"),
            record("E", "F"),
            record("A", "C"),
            record("C", "E"),
            record("A", "B"),
        ];
        let tally = Tally::from_matches(&matches);
        let bracket = Bracket {
            players: 6,
            byes: 2,
            third_place: true,
            schedule: crate::topology::Schedule::for_players(6, true).unwrap(),
        };
        let err = resolve(&matches, &tally, &bracket).unwrap_err();
        assert!(matches!(err, Inconsistency::LastRoundsCount { .. }));
    }
}

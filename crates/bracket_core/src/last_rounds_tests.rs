use super::*;
use chrono::NaiveDate;

fn record(winner: &str, loser: &str) -> MatchRecord {
    let date = NaiveDate::from_ymd_opt(2011, 10, 25).unwrap();
    MatchRecord::new("Champions", date, winner, loser)
}

fn placed(placements: &Placements, index: usize) -> (u32, bool) {
    let p = placements.get(index).expect("match should be placed");
    (p.round, p.third_place)
}

#[test]
fn test_champion_beat_third_place_loser_in_semifinal() {
    // A beats D (semi), C beats B (semi), B beats D (third), A beats C (final)
    let matches = vec![
        record("A", "D"),
        record("C", "B"),
        record("B", "D"),
        record("A", "C"),
    ];
    let tally = Tally::from_matches(&matches);
    let mut placements = Placements::new(matches.len());
    resolve(&matches, &tally, &[0, 1, 2, 3], 2, &mut placements).unwrap();

    assert_eq!(placed(&placements, 0), (1, false));
    assert_eq!(placed(&placements, 1), (1, false));
    assert_eq!(placed(&placements, 2), (2, true));
    assert_eq!(placed(&placements, 3), (2, false));
}

#[test]
fn test_champion_match_order_breaks_tie() {
    // The final is listed before the third place match
    let matches = vec![
        record("A", "B"),
        record("C", "D"),
        record("A", "C"),
        record("B", "D"),
    ];
    let tally = Tally::from_matches(&matches);
    let mut placements = Placements::new(matches.len());
    resolve(&matches, &tally, &[0, 1, 2, 3], 2, &mut placements).unwrap();

    assert_eq!(placed(&placements, 0), (1, false));
    assert_eq!(placed(&placements, 1), (1, false));
    assert_eq!(placed(&placements, 2), (2, false));
    assert_eq!(placed(&placements, 3), (2, true));
}

#[test]
fn test_rounds_offset_by_total() {
    let matches = vec![
        record("A", "B"),
        record("C", "D"),
        record("B", "D"),
        record("A", "C"),
    ];
    let tally = Tally::from_matches(&matches);
    let mut placements = Placements::new(matches.len());
    resolve(&matches, &tally, &[0, 1, 2, 3], 5, &mut placements).unwrap();

    assert_eq!(placed(&placements, 0), (4, false));
    assert_eq!(placed(&placements, 2), (5, true));
    assert_eq!(placed(&placements, 3), (5, false));
}

#[test]
fn test_wrong_candidate_count() {
    let matches = vec![record("A", "B"), record("C", "D"), record("A", "C")];
    let tally = Tally::from_matches(&matches);
    let mut placements = Placements::new(matches.len());
    let err = resolve(&matches, &tally, &[0, 1, 2], 2, &mut placements).unwrap_err();
    assert_eq!(err, Inconsistency::LastRoundsCount { found: 3 });
}

#[test]
fn test_champion_with_one_opponent() {
    // D loses twice but the champion only appears once among the candidates
    let matches = vec![
        record("B", "D"),
        record("C", "D"),
        record("C", "B"),
        record("A", "C"),
    ];
    let tally = Tally::from_matches(&matches);
    let mut placements = Placements::new(matches.len());
    let err = resolve(&matches, &tally, &[0, 1, 2, 3], 2, &mut placements).unwrap_err();
    assert_eq!(err, Inconsistency::ChampionOpponents { found: 1 });
}

use super::*;
use crate::record::MatchRecord;
use chrono::NaiveDate;

fn record(winner: &str, loser: &str) -> MatchRecord {
    let date = NaiveDate::from_ymd_opt(2019, 5, 13).unwrap();
    MatchRecord::new("Open", date, winner, loser)
}

#[test]
fn test_byes_for_powers_of_two() {
    assert_eq!(number_of_byes(2), 0);
    assert_eq!(number_of_byes(8), 0);
    assert_eq!(number_of_byes(128), 0);
}

#[test]
fn test_byes_fill_to_next_power_of_two() {
    assert_eq!(number_of_byes(3), 1);
    assert_eq!(number_of_byes(5), 3);
    assert_eq!(number_of_byes(6), 2);
    assert_eq!(number_of_byes(28), 4);
    assert_eq!(number_of_byes(56), 8);
}

#[test]
fn test_schedule_without_byes() {
    let schedule = Schedule::for_players(8, false).unwrap();
    assert_eq!(schedule.as_slice(), &[4, 2, 1]);
    assert_eq!(schedule.rounds(), 3);
    assert_eq!(schedule.remaining(), 7);
}

#[test]
fn test_schedule_with_byes() {
    assert_eq!(Schedule::for_players(5, false).unwrap().as_slice(), &[1, 2, 1]);
    assert_eq!(Schedule::for_players(6, false).unwrap().as_slice(), &[2, 2, 1]);
    assert_eq!(Schedule::for_players(28, false).unwrap().as_slice(), &[12, 8, 4, 2, 1]);
}

#[test]
fn test_schedule_three_players_keeps_second_round() {
    let schedule = Schedule::for_players(3, false).unwrap();
    assert_eq!(schedule.as_slice(), &[1, 1]);
}

#[test]
fn test_schedule_third_place_adds_match_to_last_round() {
    let schedule = Schedule::for_players(6, true).unwrap();
    assert_eq!(schedule.as_slice(), &[2, 2, 2]);
    assert_eq!(schedule.remaining(), 6);
}

#[test]
fn test_schedule_diverges_for_single_player() {
    assert_eq!(
        Schedule::for_players(1, false),
        Err(Inconsistency::ScheduleDiverged { players: 1 })
    );
    assert!(Schedule::for_players(0, false).is_err());
}

#[test]
fn test_schedule_consume_rejects_negative() {
    let mut schedule = Schedule::for_players(4, false).unwrap();
    schedule.consume(2, 1).unwrap();
    assert_eq!(schedule.expected(2), 0);
    assert_eq!(
        schedule.consume(2, 1),
        Err(Inconsistency::RoundOverbooked { round: 2 })
    );
    assert_eq!(
        schedule.consume(0, 1),
        Err(Inconsistency::RoundOverbooked { round: 0 })
    );
    assert_eq!(
        schedule.consume(3, 1),
        Err(Inconsistency::RoundOverbooked { round: 3 })
    );
}

#[test]
fn test_third_place_detection() {
    let without = vec![record("A", "B"), record("C", "D"), record("A", "C")];
    assert!(!has_third_place_match(&Tally::from_matches(&without)));

    let with = vec![
        record("A", "B"),
        record("C", "D"),
        record("B", "D"),
        record("A", "C"),
    ];
    assert!(has_third_place_match(&Tally::from_matches(&with)));
}

#[test]
fn test_classify_routes_five_player_draw_to_byes() {
    let matches = vec![
        record("D", "E"),
        record("A", "B"),
        record("C", "D"),
        record("A", "C"),
    ];
    let tally = Tally::from_matches(&matches);
    let topology = Topology::classify(false, &tally).unwrap();

    match &topology {
        Topology::Elimination(bracket) => {
            assert_eq!(bracket.players, 5);
            assert_eq!(bracket.byes, 3);
            assert!(!bracket.third_place);
        }
        Topology::RoundRobin => panic!("expected elimination"),
    }
    assert_eq!(topology.resolver(), Resolver::Byes);
}

#[test]
fn test_classify_round_robin_flag_wins() {
    let matches = vec![record("A", "B")];
    let tally = Tally::from_matches(&matches);
    assert_eq!(Topology::classify(true, &tally).unwrap(), Topology::RoundRobin);
}

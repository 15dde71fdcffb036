//! Per-player win/loss counts over one tournament segment

use std::collections::HashMap;

use crate::record::MatchRecord;

/// Wins and losses of one player within a segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WinLoss {
    pub wins: u32,
    pub losses: u32,
}

impl WinLoss {
    /// Total matches played
    pub fn total(&self) -> u32 {
        self.wins + self.losses
    }
}

/// Win/loss counts keyed by player.
///
/// Players are kept in first-seen order (winner before loser within a
/// match), so lookups such as "the undefeated player" are deterministic.
#[derive(Debug, Clone, Default)]
pub struct Tally<'a> {
    order: Vec<&'a str>,
    counts: HashMap<&'a str, WinLoss>,
}

impl<'a> Tally<'a> {
    /// Count wins and losses over `matches` in a single pass
    pub fn from_matches(matches: &'a [MatchRecord]) -> Self {
        let mut tally = Self::default();
        for record in matches {
            tally.entry(&record.winner).wins += 1;
            tally.entry(&record.loser).losses += 1;
        }
        tally
    }

    fn entry(&mut self, player: &'a str) -> &mut WinLoss {
        if !self.counts.contains_key(player) {
            self.order.push(player);
        }
        self.counts.entry(player).or_default()
    }

    /// Number of distinct players
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Counts for `player` (zero if they never played)
    pub fn get(&self, player: &str) -> WinLoss {
        self.counts.get(player).copied().unwrap_or_default()
    }

    /// Total matches played by `player`
    pub fn total(&self, player: &str) -> u32 {
        self.get(player).total()
    }

    /// Players with their counts, in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, WinLoss)> + '_ {
        self.order.iter().map(move |&p| (p, self.counts[p]))
    }

    /// Highest total matches played by any player
    pub fn max_total(&self) -> u32 {
        self.iter().map(|(_, wl)| wl.total()).max().unwrap_or(0)
    }

    /// First player (in first-seen order) with exactly `losses` losses
    pub fn first_with_losses(&self, losses: u32) -> Option<&'a str> {
        self.iter().find(|(_, wl)| wl.losses == losses).map(|(p, _)| p)
    }

    /// The undefeated player
    pub fn champion(&self) -> Option<&'a str> {
        self.first_with_losses(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(winner: &str, loser: &str) -> MatchRecord {
        let date = NaiveDate::from_ymd_opt(2020, 1, 6).unwrap();
        MatchRecord::new("Open", date, winner, loser)
    }

    #[test]
    fn test_counts_wins_and_losses() {
        let matches = vec![record("A", "B"), record("C", "D"), record("A", "C")];
        let tally = Tally::from_matches(&matches);

        assert_eq!(tally.len(), 4);
        assert_eq!(tally.get("A"), WinLoss { wins: 2, losses: 0 });
        assert_eq!(tally.get("C"), WinLoss { wins: 1, losses: 1 });
        assert_eq!(tally.total("B"), 1);
        assert_eq!(tally.max_total(), 2);
        assert_eq!(tally.champion(), Some("A"));
    }

    #[test]
    fn test_first_seen_order() {
        let matches = vec![record("B", "C"), record("A", "B")];
        let tally = Tally::from_matches(&matches);
        let players: Vec<_> = tally.iter().map(|(p, _)| p).collect();
        assert_eq!(players, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_empty_range() {
        let tally = Tally::from_matches(&[]);
        assert!(tally.is_empty());
        assert_eq!(tally.max_total(), 0);
        assert_eq!(tally.champion(), None);
        assert_eq!(tally.get("nobody"), WinLoss::default());
    }
}

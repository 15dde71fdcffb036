//! Topology classification: round-robin vs single elimination, byes, third place
//! match and the expected number of matches per round.

use serde::Serialize;
use std::fmt;

use crate::error::Inconsistency;
use crate::tally::Tally;

/// Byes awarded in a single-elimination draw of `players`.
///
/// Zero when `players` is a power of two, otherwise the gap to the next one.
pub fn number_of_byes(players: usize) -> usize {
    if players == 0 {
        return 0;
    }
    players.next_power_of_two() - players
}

/// A third place match leaves exactly one player with two losses
pub fn has_third_place_match(tally: &Tally) -> bool {
    tally.iter().any(|(_, wl)| wl.losses == 2)
}

/// Expected number of matches in each round of an elimination draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    matches: Vec<u32>,
}

impl Schedule {
    /// Compute the schedule for a draw of `players`.
    ///
    /// Round 1 pairs everyone without a bye; round 2 adds the byes back in;
    /// every later round halves. The last round must hold exactly one match
    /// (two with a third place match).
    pub fn for_players(players: usize, third_place: bool) -> Result<Self, Inconsistency> {
        let byes = number_of_byes(players);
        let first = ((players - byes) / 2) as u32;
        let mut matches = vec![first];

        // With byes the second round always exists, even after a
        // single-match first round (3 players: [1, 1]).
        if byes > 0 {
            matches.push((first + byes as u32) / 2);
        }
        while let Some(&last) = matches.last() {
            if last <= 1 {
                break;
            }
            matches.push(last / 2);
        }

        if matches.last() != Some(&1) {
            return Err(Inconsistency::ScheduleDiverged { players });
        }
        if third_place {
            if let Some(last) = matches.last_mut() {
                *last += 1;
            }
        }
        Ok(Self { matches })
    }

    /// Number of rounds
    pub fn rounds(&self) -> u32 {
        self.matches.len() as u32
    }

    /// Matches still expected in `round` (1-based)
    #[cfg(test)]
    pub fn expected(&self, round: u32) -> u32 {
        self.matches
            .get(round.wrapping_sub(1) as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Matches still expected across all rounds
    pub fn remaining(&self) -> u32 {
        self.matches.iter().sum()
    }

    /// Record `count` matches as placed in `round`
    pub fn consume(&mut self, round: u32, count: u32) -> Result<(), Inconsistency> {
        let slot = round
            .checked_sub(1)
            .and_then(|i| self.matches.get_mut(i as usize))
            .ok_or(Inconsistency::RoundOverbooked { round })?;
        *slot = slot
            .checked_sub(count)
            .ok_or(Inconsistency::RoundOverbooked { round })?;
        Ok(())
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.matches
    }
}

/// Which resolver assigns rounds for a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolver {
    Standard,
    ThirdPlace,
    Byes,
    ByesThirdPlace,
    RoundRobin,
}

impl fmt::Display for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resolver::Standard => "standard",
            Resolver::ThirdPlace => "third place",
            Resolver::Byes => "byes",
            Resolver::ByesThirdPlace => "byes + third place",
            Resolver::RoundRobin => "round robin",
        };
        f.write_str(name)
    }
}

/// Shape of a single-elimination draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bracket {
    pub players: usize,
    pub byes: usize,
    pub third_place: bool,
    pub schedule: Schedule,
}

impl Bracket {
    pub fn resolver(&self) -> Resolver {
        match (self.byes > 0, self.third_place) {
            (false, false) => Resolver::Standard,
            (false, true) => Resolver::ThirdPlace,
            (true, false) => Resolver::Byes,
            (true, true) => Resolver::ByesThirdPlace,
        }
    }
}

/// Classification of a tournament segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Topology {
    RoundRobin,
    Elimination(Bracket),
}

impl Topology {
    /// Classify a segment from its round-robin flag and tally
    pub fn classify(round_robin: bool, tally: &Tally) -> Result<Self, Inconsistency> {
        if round_robin {
            return Ok(Topology::RoundRobin);
        }
        let players = tally.len();
        let third_place = has_third_place_match(tally);
        Ok(Topology::Elimination(Bracket {
            players,
            byes: number_of_byes(players),
            third_place,
            schedule: Schedule::for_players(players, third_place)?,
        }))
    }

    pub fn resolver(&self) -> Resolver {
        match self {
            Topology::RoundRobin => Resolver::RoundRobin,
            Topology::Elimination(bracket) => bracket.resolver(),
        }
    }
}

#[cfg(test)]
#[path = "topology_tests.rs"]
mod topology_tests;

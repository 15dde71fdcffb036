//! Single elimination with byes: walk the bracket backward from the top.
//!
//! A player who received a bye skipped round 1, so their total matches no
//! longer equals their last round. The walk starts from the champion in the
//! final round and, for each player whose last round is known, places their
//! wins in descending rounds. The opponent beaten in round `r` normally
//! played `r` matches; when nobody fits, an opponent who played `r - 1`
//! matches is taken as a bye recipient (the latest such match wins the
//! tie). Each beaten opponent is then walked from the round below the one
//! they lost in.

use tracing::trace;

use crate::error::Inconsistency;
use crate::names::RoundNames;
use crate::placement::{Placements, Resolution};
use crate::record::MatchRecord;
use crate::tally::Tally;
use crate::topology::{Bracket, Schedule};

pub(crate) fn resolve(
    matches: &[MatchRecord],
    tally: &Tally,
    bracket: &Bracket,
) -> Result<Resolution, Inconsistency> {
    let total = bracket.schedule.rounds();
    let champion = tally.champion().ok_or(Inconsistency::NoChampion)?;

    let mut walk = ByeWalk::new(
        matches,
        tally,
        Placements::new(matches.len()),
        bracket.schedule.clone(),
        bracket.byes,
    );
    // The champion's final is still unplaced, so their wins start at the top
    walk.push(champion, total, total);
    walk.run()?;

    Ok(walk.finish(total))
}

/// A player waiting on the worklist
#[derive(Debug, Clone, Copy)]
struct Seed<'m> {
    player: &'m str,
    /// Round of the player's latest unplaced win
    first_round: u32,
}

/// An opponent resolved while walking a player's wins
#[derive(Debug, Clone, Copy)]
struct Eliminated<'m> {
    player: &'m str,
    round: u32,
    bye: bool,
}

/// Backward walk state: one worklist per round, the remaining schedule and
/// the byes found so far.
pub(crate) struct ByeWalk<'m> {
    matches: &'m [MatchRecord],
    tally: &'m Tally<'m>,
    placements: Placements,
    schedule: Schedule,
    /// `worklists[r - 1]` holds players whose last round is `r`
    worklists: Vec<Vec<Seed<'m>>>,
    byes: usize,
    expected_byes: usize,
}

impl<'m> ByeWalk<'m> {
    pub fn new(
        matches: &'m [MatchRecord],
        tally: &'m Tally<'m>,
        placements: Placements,
        schedule: Schedule,
        expected_byes: usize,
    ) -> Self {
        let rounds = schedule.rounds() as usize;
        Self {
            matches,
            tally,
            placements,
            schedule,
            worklists: vec![Vec::new(); rounds],
            byes: 0,
            expected_byes,
        }
    }

    /// Queue `player`, whose last round is `round`, with their latest
    /// unplaced win in `first_round`.
    pub fn push(&mut self, player: &'m str, round: u32, first_round: u32) {
        if let Some(list) = round
            .checked_sub(1)
            .and_then(|i| self.worklists.get_mut(i as usize))
        {
            list.push(Seed {
                player,
                first_round,
            });
        }
    }

    /// Count byes found outside the walk
    pub fn record_byes(&mut self, count: usize) -> Result<(), Inconsistency> {
        self.byes += count;
        self.check_byes()
    }

    fn check_byes(&self) -> Result<(), Inconsistency> {
        if self.byes > self.expected_byes {
            return Err(Inconsistency::TooManyByes {
                awarded: self.byes,
                expected: self.expected_byes,
            });
        }
        Ok(())
    }

    /// Walk until every scheduled match is placed
    pub fn run(&mut self) -> Result<(), Inconsistency> {
        while self.schedule.remaining() > 0 {
            let seed = self.pop().ok_or(Inconsistency::WalkStalled {
                remaining: self.schedule.remaining(),
            })?;

            for eliminated in self.descend(seed)? {
                self.schedule.consume(eliminated.round, 1)?;
                self.push(eliminated.player, eliminated.round, eliminated.round - 1);
                if eliminated.bye {
                    trace!(player = eliminated.player, round = eliminated.round, "bye detected");
                    self.byes += 1;
                }
            }
            self.check_byes()?;
        }
        Ok(())
    }

    /// Take a player from the highest non-empty round
    fn pop(&mut self) -> Option<Seed<'m>> {
        self.worklists.iter_mut().rev().find_map(|list| list.pop())
    }

    /// Place the unplaced wins of `seed.player` from `seed.first_round`
    /// downward, one round per win.
    fn descend(&mut self, seed: Seed<'m>) -> Result<Vec<Eliminated<'m>>, Inconsistency> {
        let matches = self.matches;

        // (match index, beaten opponent's total matches)
        let mut wins: Vec<(usize, u32)> = matches
            .iter()
            .enumerate()
            .filter(|(i, m)| m.winner == seed.player && !self.placements.is_placed(*i))
            .map(|(i, m)| (i, self.tally.total(&m.loser)))
            .collect();

        let mut eliminated = Vec::with_capacity(wins.len());
        let mut round = seed.first_round;
        while !wins.is_empty() {
            if round == 0 {
                return Err(Inconsistency::TooManyWins {
                    player: seed.player.to_string(),
                    round: seed.first_round,
                });
            }

            let (pos, bye) = match wins.iter().position(|&(_, t)| t == round) {
                Some(pos) => (pos, false),
                None => {
                    let pos = wins
                        .iter()
                        .enumerate()
                        .filter(|(_, &(_, t))| t + 1 == round)
                        .max_by_key(|(_, &(index, _))| index)
                        .map(|(pos, _)| pos)
                        .ok_or_else(|| Inconsistency::NoOpponentForRound {
                            player: seed.player.to_string(),
                            round,
                        })?;
                    (pos, true)
                }
            };

            let (index, _) = wins.remove(pos);
            self.placements.place(index, round);
            eliminated.push(Eliminated {
                player: matches[index].loser.as_str(),
                round,
                bye,
            });
            round -= 1;
        }
        Ok(eliminated)
    }

    /// Byes detected so far
    pub fn byes(&self) -> usize {
        self.byes
    }

    pub fn finish(self, total: u32) -> Resolution {
        Resolution {
            placements: self.placements,
            names: RoundNames::elimination(total),
            byes: self.byes,
        }
    }
}

#[cfg(test)]
#[path = "bye_walker_tests.rs"]
mod bye_walker_tests;

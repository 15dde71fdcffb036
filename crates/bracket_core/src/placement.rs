//! Working table of round placements for one segment

use crate::error::Inconsistency;
use crate::names::{RoundNames, THIRD_PLACE_MATCH};
use crate::record::Round;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placement {
    pub round: u32,
    pub third_place: bool,
}

/// One optional placement per match of the segment, indexed like the
/// segment's slice.
#[derive(Debug, Clone)]
pub(crate) struct Placements {
    slots: Vec<Option<Placement>>,
}

impl Placements {
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    pub fn place(&mut self, index: usize, round: u32) {
        self.slots[index] = Some(Placement {
            round,
            third_place: false,
        });
    }

    pub fn place_third_place(&mut self, index: usize, round: u32) {
        self.slots[index] = Some(Placement {
            round,
            third_place: true,
        });
    }

    pub fn is_placed(&self, index: usize) -> bool {
        self.slots[index].is_some()
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<Placement> {
        self.slots[index]
    }

    /// Indices of matches without a round yet
    pub fn unplaced(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(i, _)| i)
    }

    /// Name every placement. Fails if any match is still unplaced or
    /// sits outside the named rounds.
    pub fn into_rounds(self, names: &RoundNames) -> Result<Vec<Round>, Inconsistency> {
        let count = self.unplaced().count();
        if count > 0 {
            return Err(Inconsistency::Unplaced { count });
        }

        self.slots
            .into_iter()
            .flatten()
            .map(|placement| {
                let name = if placement.third_place {
                    Some(THIRD_PLACE_MATCH)
                } else {
                    names.name(placement.round)
                };
                let name = name.ok_or(Inconsistency::RoundOutOfRange {
                    round: placement.round,
                    total: names.total(),
                })?;
                Ok(Round {
                    number: placement.round,
                    name: name.to_string(),
                })
            })
            .collect()
    }
}

/// Output of a resolver, before naming
#[derive(Debug)]
pub(crate) struct Resolution {
    pub placements: Placements,
    pub names: RoundNames,
    /// Players found to have received a bye
    pub byes: usize,
}

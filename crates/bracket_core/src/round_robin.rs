//! Round-robin group stage followed by semifinals and a final.
//!
//! Whatever the size of the groups, the two players with the most matches
//! are the finalists. Their semifinals were wins over players with one
//! match fewer; everything else is group play.

use crate::error::Inconsistency;
use crate::names::RoundNames;
use crate::placement::{Placements, Resolution};
use crate::record::MatchRecord;
use crate::tally::Tally;

const GROUP_STAGE: u32 = 1;
const SEMIFINAL: u32 = 2;
const FINAL: u32 = 3;

pub(crate) fn resolve(
    matches: &[MatchRecord],
    tally: &Tally,
) -> Result<Resolution, Inconsistency> {
    let most = tally.max_total();
    let finalists: Vec<&str> = tally
        .iter()
        .filter(|(_, wl)| wl.total() == most)
        .map(|(player, _)| player)
        .collect();
    let [first, second] = finalists[..] else {
        return Err(Inconsistency::RoundRobinFinalists {
            found: finalists.len(),
        });
    };

    let mut placements = Placements::new(matches.len());

    // Finalists may have met in the group stage too; the later meeting is
    // the final.
    let final_match = matches
        .iter()
        .rposition(|m| m.involves(first) && m.involves(second))
        .ok_or_else(|| Inconsistency::FinalNotFound {
            first: first.to_string(),
            second: second.to_string(),
        })?;
    placements.place(final_match, FINAL);

    let mut candidates = [
        semifinal_candidates(matches, tally, first, most),
        semifinal_candidates(matches, tally, second, most),
    ];
    let mut semifinals: [Option<usize>; 2] = [None, None];

    // A finalist with a single candidate settles their semifinal, which
    // also takes that opponent away from the other finalist.
    for (this, other) in [(0, 1), (1, 0)] {
        if let [(opponent, index)] = candidates[this][..] {
            semifinals[this] = Some(index);
            candidates[other].retain(|(p, _)| *p != opponent);
        }
    }
    if semifinals[0].is_none() {
        if let [(_, index)] = candidates[0][..] {
            semifinals[0] = Some(index);
        }
    }

    for (slot, (finalist, remaining)) in semifinals
        .iter_mut()
        .zip([first, second].into_iter().zip(&candidates))
    {
        if slot.is_none() {
            let latest = remaining.iter().map(|&(_, index)| index).max().ok_or_else(|| {
                Inconsistency::MissingSemifinal {
                    finalist: finalist.to_string(),
                }
            })?;
            *slot = Some(latest);
        }
    }
    for index in semifinals.into_iter().flatten() {
        placements.place(index, SEMIFINAL);
    }

    let group_stage: Vec<usize> = placements.unplaced().collect();
    for index in group_stage {
        placements.place(index, GROUP_STAGE);
    }

    Ok(Resolution {
        placements,
        names: RoundNames::round_robin(),
        byes: 0,
    })
}

/// Wins of `finalist` over players who played one match fewer than the
/// finalists, one entry per opponent (a repeated win keeps the later index).
fn semifinal_candidates<'m>(
    matches: &'m [MatchRecord],
    tally: &Tally,
    finalist: &str,
    most: u32,
) -> Vec<(&'m str, usize)> {
    let mut candidates: Vec<(&'m str, usize)> = Vec::new();
    for (index, record) in matches.iter().enumerate() {
        if record.winner != finalist || tally.total(&record.loser) + 1 != most {
            continue;
        }
        match candidates.iter_mut().find(|(p, _)| *p == record.loser) {
            Some(entry) => entry.1 = index,
            None => candidates.push((record.loser.as_str(), index)),
        }
    }
    candidates
}

#[cfg(test)]
#[path = "round_robin_tests.rs"]
mod round_robin_tests;

//! Semifinals, final and third place match of a draw with a third place
//! match, shared by the bye and bye-free resolvers.

use crate::error::Inconsistency;
use crate::placement::Placements;
use crate::record::MatchRecord;
use crate::tally::Tally;

/// Place the four matches at `candidates` into the last two rounds.
///
/// The champion's two wins are the semifinal and the final. If the champion
/// beat the third place loser, that win was the semifinal, since both third
/// place players lost to the two finalists. Otherwise the earlier of the
/// champion's wins is the semifinal. The finalist's win is the other
/// semifinal and the remaining loss of the third place loser is the third
/// place match, played in round `total` alongside the final.
pub(crate) fn resolve(
    matches: &[MatchRecord],
    tally: &Tally,
    candidates: &[usize],
    total: u32,
    placements: &mut Placements,
) -> Result<(), Inconsistency> {
    if candidates.len() != 4 || total < 2 {
        return Err(Inconsistency::LastRoundsCount {
            found: candidates.len(),
        });
    }
    let champion = tally.champion().ok_or(Inconsistency::NoChampion)?;
    let third_place_loser = tally
        .first_with_losses(2)
        .ok_or(Inconsistency::NoThirdPlaceLoser)?;

    // One entry per opponent; a repeated meeting keeps the later index
    let mut opponents: Vec<(&str, usize)> = Vec::with_capacity(2);
    for &index in candidates {
        let record = &matches[index];
        if record.winner != champion {
            continue;
        }
        match opponents.iter_mut().find(|(p, _)| *p == record.loser) {
            Some(entry) => entry.1 = index,
            None => opponents.push((record.loser.as_str(), index)),
        }
    }
    if opponents.len() != 2 {
        return Err(Inconsistency::ChampionOpponents {
            found: opponents.len(),
        });
    }

    let (semifinal, final_match) = match opponents
        .iter()
        .position(|(p, _)| *p == third_place_loser)
    {
        Some(pos) => (opponents[pos].1, opponents[1 - pos].1),
        None => {
            let (a, b) = (opponents[0].1, opponents[1].1);
            (a.min(b), a.max(b))
        }
    };
    placements.place(semifinal, total - 1);
    placements.place(final_match, total);
    let finalist = matches[final_match].loser.as_str();

    let mut semifinals = 1;
    let mut third_place = 0;
    for &index in candidates {
        if index == semifinal || index == final_match {
            continue;
        }
        let record = &matches[index];
        if record.winner == finalist {
            placements.place(index, total - 1);
            semifinals += 1;
        } else if record.loser == third_place_loser && record.winner != champion {
            placements.place_third_place(index, total);
            third_place += 1;
        }
    }

    if semifinals != 2 || third_place != 1 {
        return Err(Inconsistency::LastRoundsDistribution {
            semifinals,
            finals: 1,
            third_place,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "last_rounds_tests.rs"]
mod last_rounds_tests;

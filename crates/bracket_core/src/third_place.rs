//! Bye-free single elimination with a third place match

use crate::error::Inconsistency;
use crate::last_rounds;
use crate::names::RoundNames;
use crate::placement::{Placements, Resolution};
use crate::record::MatchRecord;
use crate::standard::place_by_loser_total;
use crate::tally::Tally;

/// Rounds before the semifinals follow the loser's total as in a standard
/// draw; whatever is left must be the two semifinals, the final and the
/// third place match.
pub(crate) fn resolve(
    matches: &[MatchRecord],
    tally: &Tally,
) -> Result<Resolution, Inconsistency> {
    let total = tally.max_total();
    let mut placements = Placements::new(matches.len());
    place_by_loser_total(matches, tally, total.saturating_sub(2), &mut placements);

    let last_two_rounds: Vec<usize> = placements.unplaced().collect();
    if last_two_rounds.len() != 4 {
        return Err(Inconsistency::LastRoundsCount {
            found: last_two_rounds.len(),
        });
    }
    last_rounds::resolve(matches, tally, &last_two_rounds, total, &mut placements)?;

    Ok(Resolution {
        placements,
        names: RoundNames::elimination(total),
        byes: 0,
    })
}

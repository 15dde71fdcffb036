//! Splitting a match sequence into tournaments and dispatching each one
//! to its resolver.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use std::ops::Range;
use tracing::{debug, warn};

use crate::error::{Inconsistency, RoundsError};
use crate::placement::Resolution;
use crate::record::{MatchRecord, Round};
use crate::tally::Tally;
use crate::topology::{Bracket, Resolver, Topology};
use crate::{bye_third_place, bye_walker, round_robin, standard, third_place};

/// What round inference found for one tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentSummary {
    pub tournament: String,
    pub start_date: NaiveDate,
    pub players: usize,
    pub matches: usize,
    pub resolver: Resolver,
    /// Number of named rounds
    pub rounds: u32,
    /// Byes implied by the draw size
    pub byes_expected: usize,
    /// Byes the bracket walk identified (never more than expected)
    pub byes_detected: usize,
}

/// Outcome of a run that skips inconsistent tournaments
#[derive(Debug, Clone, Default)]
pub struct RoundsRun {
    pub assigned: Vec<SegmentSummary>,
    pub failed: Vec<RoundsError>,
}

/// Index ranges of the tournaments in `records`.
///
/// A tournament is a maximal run of records sharing a tournament id. Start
/// dates may differ within a run (a tournament spanning the new year). A
/// tournament that shows up again after another one breaks the contiguity
/// the resolvers rely on; it is reported and handled as a separate segment.
pub fn segments(records: &[MatchRecord]) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut start = 0;

    for i in 1..=records.len() {
        let boundary = i == records.len() || !same_tournament(&records[start], &records[i]);
        if !boundary {
            continue;
        }
        let first = &records[start];
        if !seen.insert(first.tournament.as_str()) {
            warn!(
                tournament = %first.tournament,
                start_date = %first.start_date,
                "tournament matches are not contiguous"
            );
        }
        ranges.push(start..i);
        start = i;
    }
    ranges
}

fn same_tournament(a: &MatchRecord, b: &MatchRecord) -> bool {
    a.tournament == b.tournament
}

/// The matches of one tournament.
///
/// Matches must be listed so that a match never comes after a later-round
/// match of the same depth in the bracket: when win/loss counts cannot tell
/// two matches apart, the earlier-listed one is taken as the earlier round.
/// This ordering is trusted, not checked.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    matches: &'a [MatchRecord],
}

/// Rounds for every match of a segment, in segment order
#[derive(Debug, Clone)]
pub struct ResolvedSegment {
    pub rounds: Vec<Round>,
    pub summary: SegmentSummary,
}

impl<'a> Segment<'a> {
    /// `None` for an empty slice
    pub fn new(matches: &'a [MatchRecord]) -> Option<Self> {
        if matches.is_empty() {
            None
        } else {
            Some(Self { matches })
        }
    }

    pub fn tournament(&self) -> &'a str {
        &self.matches[0].tournament
    }

    pub fn start_date(&self) -> NaiveDate {
        self.matches[0].start_date
    }

    /// Infer rounds without touching the records
    pub fn resolve(&self) -> Result<ResolvedSegment, RoundsError> {
        self.try_resolve().map_err(|inconsistency| RoundsError::Structural {
            tournament: self.tournament().to_string(),
            start_date: self.start_date(),
            inconsistency,
        })
    }

    fn try_resolve(&self) -> Result<ResolvedSegment, Inconsistency> {
        let tally = Tally::from_matches(self.matches);
        let topology = Topology::classify(self.matches[0].round_robin, &tally)?;
        let resolver = topology.resolver();
        let byes_expected = match &topology {
            Topology::RoundRobin => 0,
            Topology::Elimination(bracket) => bracket.byes,
        };
        debug!(
            tournament = self.tournament(),
            players = tally.len(),
            byes = byes_expected,
            %resolver,
            "resolving rounds"
        );

        let Resolution {
            placements,
            names,
            byes,
        } = match &topology {
            Topology::RoundRobin => round_robin::resolve(self.matches, &tally)?,
            Topology::Elimination(bracket) => resolve_elimination(self.matches, &tally, bracket)?,
        };

        let rounds = placements.into_rounds(&names)?;
        Ok(ResolvedSegment {
            rounds,
            summary: SegmentSummary {
                tournament: self.tournament().to_string(),
                start_date: self.start_date(),
                players: tally.len(),
                matches: self.matches.len(),
                resolver,
                rounds: names.total(),
                byes_expected,
                byes_detected: byes,
            },
        })
    }
}

fn resolve_elimination(
    matches: &[MatchRecord],
    tally: &Tally,
    bracket: &Bracket,
) -> Result<Resolution, Inconsistency> {
    let resolution = match bracket.resolver() {
        Resolver::Standard => standard::resolve(matches, tally),
        Resolver::ThirdPlace => third_place::resolve(matches, tally)?,
        Resolver::Byes => bye_walker::resolve(matches, tally, bracket)?,
        Resolver::ByesThirdPlace => bye_third_place::resolve(matches, tally, bracket)?,
        Resolver::RoundRobin => round_robin::resolve(matches, tally)?,
    };
    Ok(resolution)
}

/// Assign rounds to the records of one tournament.
///
/// Records are only written once the whole tournament resolved; on error
/// they are left untouched. Returns `None` for an empty slice.
pub fn assign_segment(
    records: &mut [MatchRecord],
) -> Result<Option<SegmentSummary>, RoundsError> {
    let Some(segment) = Segment::new(records) else {
        return Ok(None);
    };
    let ResolvedSegment { rounds, summary } = segment.resolve()?;
    for (record, round) in records.iter_mut().zip(rounds) {
        record.round = Some(round);
    }
    Ok(Some(summary))
}

/// Assign rounds to every tournament in `records`, stopping at the first
/// inconsistent one. Tournaments before it keep their rounds.
pub fn assign_rounds(records: &mut [MatchRecord]) -> Result<Vec<SegmentSummary>, RoundsError> {
    let mut summaries = Vec::new();
    for range in segments(records) {
        if let Some(summary) = assign_segment(&mut records[range])? {
            summaries.push(summary);
        }
    }
    Ok(summaries)
}

/// Assign rounds to every tournament in `records`, leaving inconsistent
/// tournaments unassigned and collecting their errors.
pub fn assign_rounds_skipping(records: &mut [MatchRecord]) -> RoundsRun {
    let mut run = RoundsRun::default();
    for range in segments(records) {
        match assign_segment(&mut records[range]) {
            Ok(Some(summary)) => run.assigned.push(summary),
            Ok(None) => {}
            Err(err) => {
                warn!(
                    tournament = err.tournament(),
                    start_date = %err.start_date(),
                    error = %err.inconsistency(),
                    "skipping tournament"
                );
                run.failed.push(err);
            }
        }
    }
    run
}

#[cfg(test)]
#[path = "segment_tests.rs"]
mod segment_tests;

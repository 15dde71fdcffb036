//! Runs round inference over a whole match log

use bracket_core::{assign_rounds, assign_rounds_skipping, MatchRecord, RoundsError, RoundsRun};
use tracing::info;

use crate::config::{OnInconsistency, RoundsConfig};
use crate::corrections::{prepare_records, PreparedCounts};

/// Result of a run over a match log
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub prepared: PreparedCounts,
    pub run: RoundsRun,
}

impl RunReport {
    /// Number of records that received a round
    pub fn matches_assigned(&self) -> usize {
        self.run.assigned.iter().map(|s| s.matches).sum()
    }
}

/// Applies corrections and assigns rounds according to a [`RoundsConfig`]
pub struct RoundsRunner {
    config: RoundsConfig,
}

impl RoundsRunner {
    pub fn new(config: RoundsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RoundsConfig {
        &self.config
    }

    /// Prepare `records` and assign rounds to every tournament.
    ///
    /// With [`OnInconsistency::Abort`] the first inconsistent tournament is
    /// returned as an error; tournaments before it keep their rounds.
    pub fn run(&self, records: &mut [MatchRecord]) -> Result<RunReport, RoundsError> {
        let prepared = prepare_records(records, &self.config);
        if prepared.corrected > 0 || prepared.round_robin > 0 {
            info!(
                corrected = prepared.corrected,
                round_robin = prepared.round_robin,
                "prepared match log"
            );
        }

        let run = match self.config.on_inconsistency {
            OnInconsistency::Abort => RoundsRun {
                assigned: assign_rounds(records)?,
                failed: Vec::new(),
            },
            OnInconsistency::Skip => assign_rounds_skipping(records),
        };

        let report = RunReport { prepared, run };
        info!(
            tournaments = report.run.assigned.len(),
            matches = report.matches_assigned(),
            skipped = report.run.failed.len(),
            "assigned rounds"
        );
        Ok(report)
    }
}

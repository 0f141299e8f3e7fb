//! Run-level error types.
//!
//! Per-transaction check failures are not errors: they are counted by the
//! scoreboard and reflected in the verdict. A [`RunError`] aborts the run.

use std::time::Duration;

use vigil_coverage::{CoverageError, CoverageReport};

use crate::adapter::{AdapterError, Stage};
use crate::phase::Phase;
use crate::txn::TxnId;

/// Errors that abort a verification run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Coverage closure hit its iteration cap before every bin was hit.
    #[error("coverage not reached after {iterations} iterations ({percent:.2}% covered)")]
    CoverageNotReached {
        /// Stimuli emitted before giving up.
        iterations: u64,
        /// Coverage reached when the cap was hit.
        percent: f64,
        /// Coverage at the cap, naming every bin still unhit.
        report: Box<CoverageReport>,
    },

    /// The DUT did not complete an apply or observe in time.
    #[error("transaction {txn} timed out during {stage} after {after:?}")]
    Timeout {
        /// The stalled transaction.
        txn: TxnId,
        /// Which half of the transaction stalled.
        stage: Stage,
        /// The configured limit.
        after: Duration,
    },

    /// The DUT adapter reported a failure.
    #[error("transaction {txn} failed during {stage}: {source}")]
    Adapter {
        /// The affected transaction.
        txn: TxnId,
        /// Which half of the transaction failed.
        stage: Stage,
        /// The adapter's error.
        #[source]
        source: AdapterError,
    },

    /// The bench's coverage specification is malformed.
    #[error("invalid coverage model: {0}")]
    Coverage(#[from] CoverageError),

    /// A lifecycle transition was attempted out of order.
    #[error("invalid phase transition from {from} to {to}")]
    InvalidPhase {
        /// Phase the environment was in.
        from: Phase,
        /// Phase that was requested.
        to: Phase,
    },
}

impl RunError {
    /// Returns the coverage report carried by a closure failure.
    pub fn coverage_report(&self) -> Option<&CoverageReport> {
        match self {
            RunError::CoverageNotReached { report, .. } => Some(report),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_not_reached_display() {
        let e = RunError::CoverageNotReached {
            iterations: 100,
            percent: 87.5,
            report: Box::new(CoverageReport {
                model: "mux".into(),
                samples: 100,
                total_bins: 8,
                hit_bins: 7,
                percent: 87.5,
                groups: vec![],
            }),
        };
        assert_eq!(
            e.to_string(),
            "coverage not reached after 100 iterations (87.50% covered)"
        );
        assert_eq!(e.coverage_report().map(|r| r.hit_bins), Some(7));
    }

    #[test]
    fn timeout_display() {
        let e = RunError::Timeout {
            txn: TxnId::from_raw(4),
            stage: Stage::Observe,
            after: Duration::from_millis(250),
        };
        assert_eq!(
            e.to_string(),
            "transaction #4 timed out during observe after 250ms"
        );
    }

    #[test]
    fn adapter_display_and_source() {
        use std::error::Error;
        let e = RunError::Adapter {
            txn: TxnId::FIRST,
            stage: Stage::Apply,
            source: AdapterError::Rejected("sel out of range".into()),
        };
        assert_eq!(
            e.to_string(),
            "transaction #0 failed during apply: DUT rejected input: sel out of range"
        );
        assert!(e.source().is_some());
        assert!(e.coverage_report().is_none());
    }

    #[test]
    fn coverage_error_converts() {
        let e: RunError = CoverageError::EmptyModel {
            model: "alu".into(),
        }
        .into();
        assert_eq!(
            e.to_string(),
            "invalid coverage model: coverage model `alu` declares no coverpoints"
        );
    }

    #[test]
    fn invalid_phase_display() {
        let e = RunError::InvalidPhase {
            from: Phase::Created,
            to: Phase::Checked,
        };
        assert_eq!(
            e.to_string(),
            "invalid phase transition from created to checked"
        );
    }
}

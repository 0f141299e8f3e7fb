//! The boundary between the engine and the device under test.
//!
//! The engine never touches pins or simulator time itself. It hands a fully
//! formed input record to [`DutAdapter::apply`] and then awaits the output
//! record correlated with it from [`DutAdapter::observe`]. Exactly one apply is
//! outstanding at a time.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

/// Which half of a transaction an adapter call belonged to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Driving inputs.
    Apply,
    /// Sampling outputs.
    Observe,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Apply => write!(f, "apply"),
            Stage::Observe => write!(f, "observe"),
        }
    }
}

/// Failures reported by a DUT adapter.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// The simulator or DUT connection went away.
    #[error("DUT disconnected: {0}")]
    Disconnected(String),

    /// The DUT refused the input record.
    #[error("DUT rejected input: {0}")]
    Rejected(String),

    /// `observe` was called with no input applied.
    #[error("no input has been applied")]
    NothingApplied,
}

/// Drives one circuit: applies input records and observes output records.
///
/// Implementations wrap a simulator driver/monitor pair, or an in-process
/// behavioural model. `observe` must return the output produced by the most
/// recent `apply`.
#[async_trait]
pub trait DutAdapter: Send {
    /// The input record this DUT accepts.
    type Input: Send + Sync;
    /// The output record this DUT produces.
    type Output: Send;

    /// Drives `input` onto the DUT.
    async fn apply(&mut self, input: &Self::Input) -> Result<(), AdapterError>;

    /// Samples the DUT outputs produced for the last applied input.
    async fn observe(&mut self) -> Result<Self::Output, AdapterError>;
}

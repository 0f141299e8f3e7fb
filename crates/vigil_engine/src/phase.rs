//! Environment lifecycle phases.

use serde::Serialize;
use std::fmt;

use crate::error::RunError;

/// Lifecycle phase of a verification environment.
///
/// Phases advance strictly in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Constructed, nothing validated yet.
    Created,
    /// Coverage model built and scoreboard wired.
    Built,
    /// Stimulus is flowing through the DUT.
    Running,
    /// Final verdict computed.
    Checked,
    /// Summary produced.
    Reported,
}

impl Phase {
    /// Returns the phase that legally follows this one.
    pub fn successor(self) -> Option<Phase> {
        match self {
            Phase::Created => Some(Phase::Built),
            Phase::Built => Some(Phase::Running),
            Phase::Running => Some(Phase::Checked),
            Phase::Checked => Some(Phase::Reported),
            Phase::Reported => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Created => "created",
            Phase::Built => "built",
            Phase::Running => "running",
            Phase::Checked => "checked",
            Phase::Reported => "reported",
        };
        f.write_str(name)
    }
}

/// Tracks the current phase and rejects out-of-order transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseTracker {
    current: Phase,
}

impl PhaseTracker {
    /// Starts in [`Phase::Created`].
    pub fn new() -> Self {
        Self {
            current: Phase::Created,
        }
    }

    /// Returns the current phase.
    pub fn current(&self) -> Phase {
        self.current
    }

    /// Moves to `to` if it is the successor of the current phase.
    pub fn advance(&mut self, to: Phase) -> Result<(), RunError> {
        if self.current.successor() != Some(to) {
            return Err(RunError::InvalidPhase {
                from: self.current,
                to,
            });
        }
        tracing::debug!(from = %self.current, to = %to, "phase transition");
        self.current = to;
        Ok(())
    }

    /// Fails unless the current phase is `expected`.
    pub fn require(&self, expected: Phase) -> Result<(), RunError> {
        if self.current == expected {
            Ok(())
        } else {
            Err(RunError::InvalidPhase {
                from: self.current,
                to: expected,
            })
        }
    }
}

impl Default for PhaseTracker {
    fn default() -> Self {
        Self::new()
    }
}

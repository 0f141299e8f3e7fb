//! Per-check outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The result of comparing one observed transaction against its expectation.
///
/// Ordered from benign to most severe.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Observed output equals the expected output.
    Pass,
    /// Observed output differs from the expected output.
    Mismatch,
    /// No expectation was queued, or the queued one belongs to another
    /// transaction.
    ProtocolViolation,
}

impl Outcome {
    /// Returns `true` for anything other than [`Pass`](Outcome::Pass).
    pub fn is_failure(self) -> bool {
        self != Outcome::Pass
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pass => write!(f, "PASS"),
            Outcome::Mismatch => write!(f, "FAIL"),
            Outcome::ProtocolViolation => write!(f, "PROTOCOL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        assert!(Outcome::Pass < Outcome::Mismatch);
        assert!(Outcome::Mismatch < Outcome::ProtocolViolation);
    }

    #[test]
    fn is_failure() {
        assert!(!Outcome::Pass.is_failure());
        assert!(Outcome::Mismatch.is_failure());
        assert!(Outcome::ProtocolViolation.is_failure());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Outcome::Pass), "PASS");
        assert_eq!(format!("{}", Outcome::Mismatch), "FAIL");
        assert_eq!(format!("{}", Outcome::ProtocolViolation), "PROTOCOL");
    }
}

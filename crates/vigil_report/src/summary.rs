//! End-of-run verdicts and summaries.

use serde::Serialize;
use std::fmt;
use vigil_coverage::CoverageReport;

/// The final judgement of one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// No failed checks and no expectation left unmatched.
    Pass,
    /// At least one failed check or leftover expectation.
    Fail {
        /// Checks whose output differed from the expectation.
        mismatches: usize,
        /// Checks that could not be paired with an expectation.
        protocol_violations: usize,
        /// Expectations never consumed by a check.
        unmatched: usize,
    },
}

impl Verdict {
    /// Derives the verdict from the scoreboard counters.
    pub fn from_counts(mismatches: usize, protocol_violations: usize, unmatched: usize) -> Self {
        if mismatches == 0 && protocol_violations == 0 && unmatched == 0 {
            Verdict::Pass
        } else {
            Verdict::Fail {
                mismatches,
                protocol_violations,
                unmatched,
            }
        }
    }

    /// Returns `true` for [`Verdict::Pass`].
    pub fn is_pass(self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail {
                mismatches,
                protocol_violations,
                unmatched,
            } => write!(
                f,
                "FAIL ({mismatches} mismatches, {protocol_violations} protocol violations, {unmatched} unmatched)"
            ),
        }
    }
}

/// Everything a caller needs to know about a finished run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunSummary {
    /// Bench name.
    pub bench: String,
    /// Seed the random stream was drawn from; replaying it reproduces the run.
    pub seed: u64,
    /// Stimulus policy label, e.g. `fixed(50)` or `coverage(100000)`.
    pub policy: String,
    /// Transactions driven through the DUT.
    pub transactions: u64,
    /// Checks that passed.
    pub passed: usize,
    /// Final verdict.
    pub verdict: Verdict,
    /// Coverage at the end of the run.
    pub coverage: CoverageReport,
}

impl RunSummary {
    /// Returns `true` if the verdict is a pass.
    pub fn is_pass(&self) -> bool {
        self.verdict.is_pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_counts_pass() {
        assert_eq!(Verdict::from_counts(0, 0, 0), Verdict::Pass);
        assert!(Verdict::from_counts(0, 0, 0).is_pass());
    }

    #[test]
    fn any_count_fails() {
        assert!(!Verdict::from_counts(0, 0, 1).is_pass());
        assert_eq!(
            Verdict::from_counts(2, 1, 0),
            Verdict::Fail {
                mismatches: 2,
                protocol_violations: 1,
                unmatched: 0
            }
        );
    }

    #[test]
    fn display() {
        assert_eq!(Verdict::Pass.to_string(), "PASS");
        assert_eq!(
            Verdict::from_counts(1, 0, 2).to_string(),
            "FAIL (1 mismatches, 0 protocol violations, 2 unmatched)"
        );
    }

    #[test]
    fn serializes_tagged() {
        let json = serde_json::to_value(Verdict::from_counts(1, 0, 0)).unwrap();
        assert_eq!(json["status"], "fail");
        assert_eq!(json["mismatches"], 1);
    }
}

//! Structured records of individual checks.

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// One scoreboard check: what went in, what was expected, what came out.
///
/// Field values are the `Display` renderings of the circuit's input and
/// output records, so records from different circuits share one type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRecord {
    /// Bench the transaction belongs to.
    pub bench: String,
    /// Correlation id of the observed transaction.
    pub txn: u64,
    /// Result of the check.
    pub outcome: Outcome,
    /// Rendered input record.
    pub inputs: String,
    /// Rendered expected output, absent when no expectation was available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Rendered observed output.
    pub actual: String,
    /// Extra context for protocol violations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckRecord {
    /// A passing check.
    pub fn pass(
        bench: impl Into<String>,
        txn: u64,
        inputs: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        let actual = output.into();
        Self {
            bench: bench.into(),
            txn,
            outcome: Outcome::Pass,
            inputs: inputs.into(),
            expected: Some(actual.clone()),
            actual,
            detail: None,
        }
    }

    /// A check whose observed output differs from the expectation.
    pub fn mismatch(
        bench: impl Into<String>,
        txn: u64,
        inputs: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            bench: bench.into(),
            txn,
            outcome: Outcome::Mismatch,
            inputs: inputs.into(),
            expected: Some(expected.into()),
            actual: actual.into(),
            detail: None,
        }
    }

    /// A check that could not be paired with its expectation.
    pub fn protocol_violation(
        bench: impl Into<String>,
        txn: u64,
        inputs: impl Into<String>,
        actual: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            bench: bench.into(),
            txn,
            outcome: Outcome::ProtocolViolation,
            inputs: inputs.into(),
            expected: None,
            actual: actual.into(),
            detail: Some(detail.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_echoes_output_as_expected() {
        let rec = CheckRecord::pass("half_adder", 3, "a=1 b=1", "sum=0 carry=1");
        assert_eq!(rec.outcome, Outcome::Pass);
        assert_eq!(rec.expected.as_deref(), Some("sum=0 carry=1"));
        assert_eq!(rec.actual, "sum=0 carry=1");
    }

    #[test]
    fn protocol_violation_has_no_expectation() {
        let rec = CheckRecord::protocol_violation("mux", 0, "sel=1", "y=0", "no expectation queued");
        assert!(rec.expected.is_none());
        assert_eq!(rec.detail.as_deref(), Some("no expectation queued"));
    }

    #[test]
    fn json_skips_absent_fields() {
        let rec = CheckRecord::mismatch("adder4", 7, "a=8 b=8", "sum=0 carry=1", "sum=0 carry=0");
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["outcome"], "mismatch");
        assert_eq!(json["expected"], "sum=0 carry=1");
        assert!(json.get("detail").is_none());
    }
}

//! In-order comparison of observed transactions against the golden model.

use std::collections::VecDeque;
use std::sync::Arc;

use vigil_golden::GoldenModel;
use vigil_report::{CheckRecord, Outcome, ReportSink, Verdict};

use crate::subscriber::Subscriber;
use crate::txn::{Txn, TxnId};

/// Pairs each observed transaction with the oldest queued expectation.
///
/// Expectations are computed from the input record when a transaction is
/// submitted and consumed strictly in submission order. Failed checks are
/// counted and reported, never raised.
pub struct Scoreboard<M: GoldenModel> {
    bench: String,
    model: M,
    expected: VecDeque<(TxnId, M::Output)>,
    passed: usize,
    mismatches: usize,
    protocol_violations: usize,
    sink: Arc<ReportSink>,
}

impl<M: GoldenModel> Scoreboard<M> {
    /// Creates an empty scoreboard reporting into `sink`.
    pub fn new(bench: impl Into<String>, model: M, sink: Arc<ReportSink>) -> Self {
        Self {
            bench: bench.into(),
            model,
            expected: VecDeque::new(),
            passed: 0,
            mismatches: 0,
            protocol_violations: 0,
            sink,
        }
    }

    /// Evaluates the golden model for `input` and queues the result under `id`.
    pub fn submit_expected(&mut self, id: TxnId, input: &M::Input) {
        let expected = self.model.evaluate(input);
        tracing::trace!(bench = %self.bench, txn = %id, expected = %expected, "expectation queued");
        self.expected.push_back((id, expected));
    }

    /// Checks one observed transaction against the oldest expectation.
    ///
    /// The head expectation is consumed even when its id does not match the
    /// observed one. The scoreboard never skips ahead to resynchronise, so
    /// one lost observation makes every later check a protocol violation
    /// until the stream realigns. With at most one outstanding transaction
    /// the ids only diverge when the adapter itself is broken.
    pub fn check(&mut self, txn: &Txn<M::Input, M::Output>) -> Outcome {
        let id = txn.id();
        let inputs = txn.input().to_string();
        let actual = txn.output().to_string();

        let Some((expected_id, expected)) = self.expected.pop_front() else {
            self.protocol_violations += 1;
            tracing::error!(bench = %self.bench, txn = %id, %inputs, %actual, "FAIL: no expectation queued");
            self.sink.emit(CheckRecord::protocol_violation(
                &self.bench,
                id.as_raw(),
                inputs,
                actual,
                "no expectation queued",
            ));
            return Outcome::ProtocolViolation;
        };

        if expected_id != id {
            self.protocol_violations += 1;
            let detail = format!("expected transaction {expected_id}, observed {id}");
            tracing::error!(bench = %self.bench, txn = %id, %inputs, %actual, "FAIL: {detail}");
            self.sink.emit(CheckRecord::protocol_violation(
                &self.bench,
                id.as_raw(),
                inputs,
                actual,
                detail,
            ));
            return Outcome::ProtocolViolation;
        }

        if expected == *txn.output() {
            self.passed += 1;
            tracing::info!(bench = %self.bench, txn = %id, %inputs, %actual, "PASS");
            self.sink
                .emit(CheckRecord::pass(&self.bench, id.as_raw(), inputs, actual));
            Outcome::Pass
        } else {
            self.mismatches += 1;
            let expected = expected.to_string();
            tracing::error!(bench = %self.bench, txn = %id, %inputs, %expected, %actual, "FAIL");
            self.sink.emit(CheckRecord::mismatch(
                &self.bench,
                id.as_raw(),
                inputs,
                expected,
                actual,
            ));
            Outcome::Mismatch
        }
    }

    /// Returns the number of expectations not yet consumed.
    pub fn pending(&self) -> usize {
        self.expected.len()
    }

    /// Returns the number of passing checks.
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Returns the number of mismatching checks.
    pub fn mismatches(&self) -> usize {
        self.mismatches
    }

    /// Returns the number of checks that could not be paired.
    pub fn protocol_violations(&self) -> usize {
        self.protocol_violations
    }

    /// Pass iff no check failed and every expectation was consumed.
    pub fn final_verdict(&self) -> Verdict {
        Verdict::from_counts(self.mismatches, self.protocol_violations, self.pending())
    }
}

impl<M: GoldenModel> Subscriber<Txn<M::Input, M::Output>> for Scoreboard<M> {
    fn write(&mut self, txn: &Txn<M::Input, M::Output>) {
        self.check(txn);
    }
}

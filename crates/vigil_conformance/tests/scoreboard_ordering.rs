//! In-order pairing of expectations and observations.

use std::sync::Arc;

use vigil_common::Bit::{self, One, Zero};
use vigil_engine::{PendingTxn, Scoreboard, TxnId};
use vigil_golden::{Adder4, Adder4In, GoldenModel, HalfAdder, HalfAdderIn};
use vigil_report::{Outcome, ReportSink, Verdict};

fn id(n: u64) -> TxnId {
    TxnId::from_raw(n)
}

fn half(a: Bit, b: Bit) -> HalfAdderIn {
    HalfAdderIn { a, b }
}

#[test]
fn submitted_expectations_pair_in_order() {
    let sink = Arc::new(ReportSink::new());
    let mut sb = Scoreboard::new("adder4", Adder4, sink.clone());
    let inputs = [(1, 2), (15, 15), (8, 8)].map(|(a, b)| Adder4In { a, b });

    for (n, input) in inputs.iter().enumerate() {
        sb.submit_expected(id(n as u64), input);
    }
    assert_eq!(sb.pending(), 3);

    for (n, input) in inputs.into_iter().enumerate() {
        let output = Adder4.evaluate(&input);
        let txn = PendingTxn::new(id(n as u64), input).observe(output);
        assert_eq!(sb.check(&txn), Outcome::Pass);
    }
    assert_eq!(sb.final_verdict(), Verdict::Pass);
    let txns: Vec<u64> = sink.records().iter().map(|r| r.txn).collect();
    assert_eq!(txns, [0, 1, 2]);
}

#[test]
fn out_of_order_observation_is_a_protocol_violation() {
    let sink = Arc::new(ReportSink::new());
    let mut sb = Scoreboard::new("half_adder", HalfAdder, sink.clone());
    sb.submit_expected(id(0), &half(One, One));
    sb.submit_expected(id(1), &half(Zero, One));

    let early = PendingTxn::new(id(1), half(Zero, One)).observe(HalfAdder.evaluate(&half(Zero, One)));
    assert_eq!(sb.check(&early), Outcome::ProtocolViolation);
    // The head was consumed, so the next check pairs with the second expectation.
    assert_eq!(sb.pending(), 1);

    let record = &sink.records()[0];
    assert_eq!(record.outcome, Outcome::ProtocolViolation);
    assert_eq!(
        record.detail.as_deref(),
        Some("expected transaction #0, observed #1")
    );
}

#[test]
fn check_with_empty_queue_is_a_protocol_violation() {
    let sink = Arc::new(ReportSink::new());
    let mut sb = Scoreboard::new("half_adder", HalfAdder, sink.clone());
    let txn = PendingTxn::new(id(0), half(One, Zero)).observe(HalfAdder.evaluate(&half(One, Zero)));
    assert_eq!(sb.check(&txn), Outcome::ProtocolViolation);
    assert_eq!(
        sb.final_verdict(),
        Verdict::Fail {
            mismatches: 0,
            protocol_violations: 1,
            unmatched: 0
        }
    );
    assert_eq!(sink.failure_count(), 1);
}

#[test]
fn leftover_expectations_fail_the_verdict() {
    let sink = Arc::new(ReportSink::new());
    let mut sb = Scoreboard::new("half_adder", HalfAdder, sink);
    sb.submit_expected(id(0), &half(One, One));
    sb.submit_expected(id(1), &half(One, Zero));

    let txn = PendingTxn::new(id(0), half(One, One)).observe(HalfAdder.evaluate(&half(One, One)));
    assert_eq!(sb.check(&txn), Outcome::Pass);
    assert_eq!(
        sb.final_verdict(),
        Verdict::Fail {
            mismatches: 0,
            protocol_violations: 0,
            unmatched: 1
        }
    );
}

#[test]
fn one_sink_collects_several_scoreboards() {
    let sink = Arc::new(ReportSink::new());
    let mut first = Scoreboard::new("a", HalfAdder, sink.clone());
    let mut second = Scoreboard::new("b", HalfAdder, sink.clone());
    for sb in [&mut first, &mut second] {
        sb.submit_expected(id(0), &half(Zero, Zero));
        let txn =
            PendingTxn::new(id(0), half(Zero, Zero)).observe(HalfAdder.evaluate(&half(Zero, Zero)));
        sb.check(&txn);
    }
    assert_eq!(sink.records_for("a").len(), 1);
    assert_eq!(sink.records_for("b").len(), 1);
    assert!(!sink.has_failures());
}

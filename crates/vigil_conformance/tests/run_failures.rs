//! Runs that must fail: corrupted outputs, unreachable coverage, stalled or
//! disconnected DUTs and lifecycle misuse.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::Rng;
use vigil_common::Bit;
use vigil_conformance::{run_kind, seeded, DroppingDut, StallingDut, STALL_TIMEOUT};
use vigil_coverage::{CoverageError, CoverageModel, Coverpoint};
use vigil_engine::{
    run_bench, AdapterError, Bench, BenchTxn, Environment, Phase, Policy, RunError, RunOptions,
    Stage, TxnId,
};
use vigil_golden::{AdderOut, HalfAdder, HalfAdderIn};
use vigil_report::{Outcome, ReportSink, Verdict};
use vigil_tb::dut::HalfAdderCircuit;
use vigil_tb::{Behavioural, BenchKind, Setup};

/// Half adder whose coverage asks for an operand value a bit can never take.
struct UnreachableBench;

impl Bench for UnreachableBench {
    type Model = HalfAdder;
    type Stimulus = HalfAdderIn;

    fn name(&self) -> &str {
        "unreachable"
    }

    fn model(&self) -> HalfAdder {
        HalfAdder
    }

    fn coverage(&self) -> Result<CoverageModel<BenchTxn<Self>>, CoverageError> {
        CoverageModel::builder("unreachable")
            .coverpoint(
                Coverpoint::new("a", |t: &BenchTxn<Self>| t.input().a.as_u64())
                    .bin("a_0", 0)
                    .bin("a_1", 1)
                    .bin("a_2", 2),
            )
            .build()
    }

    fn randomize(&self, rng: &mut StdRng) -> HalfAdderIn {
        HalfAdderIn {
            a: Bit::from(rng.gen::<bool>()),
            b: Bit::from(rng.gen::<bool>()),
        }
    }

    fn bind(&self, stimulus: &HalfAdderIn, _previous: Option<&AdderOut>) -> HalfAdderIn {
        *stimulus
    }
}

#[tokio::test]
async fn corrupted_outputs_fail_the_verdict() {
    for kind in BenchKind::ALL {
        let setup = Setup {
            corrupt_every: 4,
            ..Setup::default()
        };
        let run = run_kind(kind, &seeded(Policy::FixedCount { random: 20 }, 8), &setup).await;
        let summary = run.summary();
        let Verdict::Fail { mismatches, .. } = summary.verdict else {
            panic!("{kind}: corrupted run passed");
        };
        assert_eq!(mismatches as u64, summary.transactions / 4, "{kind}");
        assert!(run
            .records
            .iter()
            .filter(|r| r.outcome == Outcome::Mismatch)
            .all(|r| (r.txn + 1) % 4 == 0));
    }
}

#[tokio::test]
async fn unreachable_bin_stops_closure_at_the_cap() {
    let sink = Arc::new(ReportSink::new());
    let options = seeded(
        Policy::CoverageClosure {
            max_iterations: 200,
        },
        4,
    );
    let err = run_bench(
        UnreachableBench,
        Behavioural::new(HalfAdderCircuit),
        &options,
        sink,
    )
    .await
    .unwrap_err();
    match err {
        RunError::CoverageNotReached {
            iterations,
            percent,
            report,
        } => {
            assert_eq!(iterations, 200);
            assert!((percent - 200.0 / 3.0).abs() < 1e-9);
            assert_eq!(report.uncovered().collect::<Vec<_>>(), ["a_2"]);
            assert_eq!(report.samples, 200);
            assert!(report.to_string().contains("missing a_2"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn stalled_dut_times_out_on_first_observe() {
    let sink = Arc::new(ReportSink::new());
    let options = RunOptions {
        timeout: Some(STALL_TIMEOUT),
        ..seeded(Policy::fixed(), 1)
    };
    let dut: StallingDut<HalfAdderIn, AdderOut> = StallingDut::new();
    let err = run_bench(vigil_tb::HalfAdderBench, dut, &options, sink)
        .await
        .unwrap_err();
    match err {
        RunError::Timeout { txn, stage, after } => {
            assert_eq!(txn, TxnId::FIRST);
            assert_eq!(stage, Stage::Observe);
            assert_eq!(after, STALL_TIMEOUT);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn disconnect_aborts_with_adapter_error() {
    let sink = Arc::new(ReportSink::new());
    let dut = DroppingDut::new(Behavioural::new(HalfAdderCircuit), 3);
    let err = run_bench(vigil_tb::HalfAdderBench, dut, &seeded(Policy::fixed(), 1), sink.clone())
        .await
        .unwrap_err();
    match err {
        RunError::Adapter { txn, stage, source } => {
            assert_eq!(txn, TxnId::from_raw(3));
            assert_eq!(stage, Stage::Observe);
            assert_eq!(source, AdapterError::Disconnected("simulator exited".into()));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(sink.records().len(), 3);
}

#[tokio::test]
async fn lifecycle_steps_cannot_be_skipped() {
    let sink = Arc::new(ReportSink::new());
    let mut env = Environment::new(
        vigil_tb::HalfAdderBench,
        Behavioural::new(HalfAdderCircuit),
        &RunOptions::default(),
        sink,
    );
    assert_eq!(env.phase(), Phase::Created);
    assert!(matches!(
        env.check(),
        Err(RunError::InvalidPhase {
            from: Phase::Created,
            to: Phase::Checked
        })
    ));
    env.build().unwrap();
    assert!(matches!(env.build(), Err(RunError::InvalidPhase { .. })));
    env.run().await.unwrap();
    env.check().unwrap();
    let summary = env.report().unwrap();
    assert_eq!(env.phase(), Phase::Reported);
    assert!(summary.is_pass());
}

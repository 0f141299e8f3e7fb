//! Every bench against its behavioural DUT: closure, fixed-count runs and
//! seed determinism.

use vigil_common::Width;
use vigil_conformance::{run_kind, seeded};
use vigil_engine::Policy;
use vigil_report::Verdict;
use vigil_tb::{BenchKind, Setup};

#[tokio::test]
async fn every_bench_closes_coverage_without_mismatches() {
    for kind in BenchKind::ALL {
        let run = run_kind(kind, &seeded(Policy::closure(), 2024), &Setup::default()).await;
        let summary = run.summary();
        assert_eq!(summary.verdict, Verdict::Pass, "{kind}");
        assert!(summary.coverage.is_complete(), "{kind}: {}", summary.coverage);
        assert_eq!(summary.coverage.percent, 100.0, "{kind}");
        assert_eq!(run.failures(), 0, "{kind}");
        assert_eq!(summary.passed as u64, summary.transactions, "{kind}");
    }
}

#[tokio::test]
async fn fixed_count_drives_directed_then_random() {
    let directed = [
        (BenchKind::HalfAdder, 4),
        (BenchKind::FullAdder, 4),
        (BenchKind::Adder4, 5),
        (BenchKind::Mux, 0),
        (BenchKind::Demux, 0),
        (BenchKind::Alu, 16),
        (BenchKind::Mealy, 5),
        (BenchKind::Moore, 5),
    ];
    for (kind, count) in directed {
        let run = run_kind(kind, &seeded(Policy::FixedCount { random: 20 }, 1), &Setup::default()).await;
        assert_eq!(run.summary().transactions, count + 20, "{kind}");
        assert!(run.summary().is_pass(), "{kind}");
    }
}

#[tokio::test]
async fn half_adder_directed_vectors_alone_close_coverage() {
    let run = run_kind(
        BenchKind::HalfAdder,
        &seeded(Policy::FixedCount { random: 0 }, 0),
        &Setup::default(),
    )
    .await;
    assert!(run.summary().coverage.is_complete());
}

#[tokio::test]
async fn alu_width_comes_from_setup() {
    let setup = Setup {
        alu_width: Width::NIBBLE,
        ..Setup::default()
    };
    let run = run_kind(BenchKind::Alu, &seeded(Policy::closure(), 11), &setup).await;
    assert!(run.summary().is_pass());
    for record in &run.records {
        let a: u64 = record.inputs["a=".len()..]
            .split(' ')
            .next()
            .unwrap()
            .parse()
            .unwrap();
        assert!(a < 16, "{}", record.inputs);
    }
}

#[tokio::test]
async fn identical_seeds_give_identical_stimulus() {
    for kind in [BenchKind::Adder4, BenchKind::Alu, BenchKind::Mealy] {
        let options = seeded(Policy::FixedCount { random: 40 }, 99);
        let first = run_kind(kind, &options, &Setup::default()).await;
        let second = run_kind(kind, &options, &Setup::default()).await;
        assert_eq!(first.input_trace(), second.input_trace(), "{kind}");
        assert_eq!(first.summary().seed, 99);
    }
}

#[tokio::test]
async fn different_seeds_diverge() {
    let a = run_kind(BenchKind::Alu, &seeded(Policy::fixed(), 1), &Setup::default()).await;
    let b = run_kind(BenchKind::Alu, &seeded(Policy::fixed(), 2), &Setup::default()).await;
    assert_ne!(a.input_trace(), b.input_trace());
}

#[tokio::test]
async fn unseeded_run_reports_its_seed_for_replay() {
    let options = vigil_engine::RunOptions {
        policy: Some(Policy::FixedCount { random: 10 }),
        ..Default::default()
    };
    let first = run_kind(BenchKind::Mux, &options, &Setup::default()).await;
    let replay = run_kind(
        BenchKind::Mux,
        &seeded(Policy::FixedCount { random: 10 }, first.summary().seed),
        &Setup::default(),
    )
    .await;
    assert_eq!(first.input_trace(), replay.input_trace());
}

#[tokio::test]
async fn config_overrides_reach_the_run() {
    let config = vigil_config::load_config_from_str(
        r#"
[run]
seed = 5

[benches.demux]
policy = "fixed"
random_count = 12
"#,
    )
    .unwrap();
    let resolved = vigil_config::resolve_bench(&config, "demux").unwrap();
    let run = run_kind(BenchKind::Demux, &resolved.run_options(), &Setup::default()).await;
    assert_eq!(run.summary().transactions, 12);
    assert_eq!(run.summary().seed, 5);
    assert_eq!(run.summary().policy, "fixed(12)");
}

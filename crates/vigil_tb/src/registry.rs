//! Bench lookup by name and the one-call runner behind the CLI.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use vigil_common::Width;
use vigil_engine::{run_bench, Bench, BenchInput, BenchOutput, Policy, RunError, RunOptions};
use vigil_report::{ReportSink, RunSummary};

use crate::benches::{
    Adder4Bench, AluBench, DemuxBench, FullAdderBench, HalfAdderBench, MealyBench, MooreBench,
    MuxBench,
};
use crate::dut::{
    Adder4Circuit, AluCircuit, Behavioural, Circuit, DemuxCircuit, FullAdderCircuit,
    HalfAdderCircuit, MealyCircuit, MooreCircuit, MuxCircuit,
};
use crate::fault::{Corrupt, FaultyDut};

/// The circuits Vigil knows how to verify.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BenchKind {
    /// Half adder.
    HalfAdder,
    /// Full adder.
    FullAdder,
    /// 4-bit ripple adder.
    Adder4,
    /// 4×1 multiplexer.
    Mux,
    /// 1×4 demultiplexer.
    Demux,
    /// N-bit ALU.
    Alu,
    /// Mealy `1010` detector.
    Mealy,
    /// Moore pattern detector.
    Moore,
}

impl BenchKind {
    /// Every bench in listing order.
    pub const ALL: [BenchKind; 8] = [
        BenchKind::HalfAdder,
        BenchKind::FullAdder,
        BenchKind::Adder4,
        BenchKind::Mux,
        BenchKind::Demux,
        BenchKind::Alu,
        BenchKind::Mealy,
        BenchKind::Moore,
    ];

    /// Returns the name used on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            BenchKind::HalfAdder => "half_adder",
            BenchKind::FullAdder => "full_adder",
            BenchKind::Adder4 => "adder4",
            BenchKind::Mux => "mux",
            BenchKind::Demux => "demux",
            BenchKind::Alu => "alu",
            BenchKind::Mealy => "mealy",
            BenchKind::Moore => "moore",
        }
    }

    /// Looks a bench up by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// One-line description for `vigil list`.
    pub fn description(self) -> &'static str {
        match self {
            BenchKind::HalfAdder => "1-bit half adder",
            BenchKind::FullAdder => "1-bit full adder with carry in",
            BenchKind::Adder4 => "4-bit ripple-carry adder",
            BenchKind::Mux => "4-to-1 multiplexer",
            BenchKind::Demux => "1-to-4 demultiplexer",
            BenchKind::Alu => "N-bit ALU with 16 opcodes",
            BenchKind::Mealy => "Mealy FSM detecting 1010",
            BenchKind::Moore => "Moore FSM with registered output",
        }
    }

    /// Policy the bench runs under when none is configured.
    pub fn default_policy(self) -> Policy {
        match self {
            BenchKind::HalfAdder => HalfAdderBench.default_policy(),
            BenchKind::FullAdder => FullAdderBench.default_policy(),
            BenchKind::Adder4 => Adder4Bench.default_policy(),
            BenchKind::Mux => MuxBench.default_policy(),
            BenchKind::Demux => DemuxBench.default_policy(),
            BenchKind::Alu => AluBench::default().default_policy(),
            BenchKind::Mealy => MealyBench.default_policy(),
            BenchKind::Moore => MooreBench.default_policy(),
        }
    }
}

impl fmt::Display for BenchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A bench name that matches none of [`BenchKind::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown bench '{0}'")]
pub struct UnknownBench(pub String);

impl FromStr for BenchKind {
    type Err = UnknownBench;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownBench(s.to_string()))
    }
}

/// Bench construction knobs that are not run options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Setup {
    /// Operand width of the ALU bench.
    pub alu_width: Width,
    /// Corrupt every n-th DUT output; 0 disables fault injection.
    pub corrupt_every: u64,
}

impl Default for Setup {
    fn default() -> Self {
        Self {
            alu_width: Width::BYTE,
            corrupt_every: 0,
        }
    }
}

/// Runs one bench against its behavioural DUT through every phase.
pub async fn run(
    kind: BenchKind,
    options: &RunOptions,
    setup: &Setup,
    sink: Arc<ReportSink>,
) -> Result<RunSummary, RunError> {
    let every = setup.corrupt_every;
    match kind {
        BenchKind::HalfAdder => drive(HalfAdderBench, HalfAdderCircuit, every, options, sink).await,
        BenchKind::FullAdder => drive(FullAdderBench, FullAdderCircuit, every, options, sink).await,
        BenchKind::Adder4 => drive(Adder4Bench, Adder4Circuit, every, options, sink).await,
        BenchKind::Mux => drive(MuxBench, MuxCircuit, every, options, sink).await,
        BenchKind::Demux => drive(DemuxBench, DemuxCircuit, every, options, sink).await,
        BenchKind::Alu => {
            let bench = AluBench::new(setup.alu_width);
            drive(bench, AluCircuit::new(setup.alu_width), every, options, sink).await
        }
        BenchKind::Mealy => drive(MealyBench, MealyCircuit::default(), every, options, sink).await,
        BenchKind::Moore => drive(MooreBench, MooreCircuit::default(), every, options, sink).await,
    }
}

async fn drive<B, C>(
    bench: B,
    circuit: C,
    corrupt_every: u64,
    options: &RunOptions,
    sink: Arc<ReportSink>,
) -> Result<RunSummary, RunError>
where
    B: Bench,
    C: Circuit<Input = BenchInput<B>, Output = BenchOutput<B>>,
    BenchOutput<B>: Corrupt,
{
    tracing::debug!(bench = bench.name(), corrupt_every, "starting run");
    let dut = FaultyDut::new(Behavioural::new(circuit), corrupt_every);
    run_bench(bench, dut, options, sink).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in BenchKind::ALL {
            assert_eq!(kind.name().parse::<BenchKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "adder8".parse::<BenchKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown bench 'adder8'");
    }

    #[test]
    fn default_policies() {
        assert_eq!(BenchKind::Adder4.default_policy(), Policy::fixed());
        assert_eq!(BenchKind::Alu.default_policy(), Policy::fixed());
        assert_eq!(BenchKind::Mux.default_policy(), Policy::closure());
        assert_eq!(BenchKind::Mealy.default_policy(), Policy::closure());
        assert_eq!(BenchKind::Moore.default_policy(), Policy::closure());
    }

    #[tokio::test]
    async fn every_bench_passes_against_its_circuit() {
        for kind in BenchKind::ALL {
            let sink = Arc::new(ReportSink::new());
            let options = RunOptions {
                seed: Some(7),
                ..RunOptions::default()
            };
            let summary = run(kind, &options, &Setup::default(), sink.clone())
                .await
                .unwrap();
            assert!(summary.is_pass(), "{kind}: {:?}", summary.verdict);
            assert!(!sink.has_failures());
        }
    }

    #[tokio::test]
    async fn injected_faults_are_caught() {
        let sink = Arc::new(ReportSink::new());
        let options = RunOptions {
            seed: Some(3),
            policy: Some(Policy::fixed()),
            ..RunOptions::default()
        };
        let setup = Setup {
            corrupt_every: 5,
            ..Setup::default()
        };
        let summary = run(BenchKind::Adder4, &options, &setup, sink.clone())
            .await
            .unwrap();
        assert!(!summary.is_pass());
        // 5 directed + 50 random observations.
        assert_eq!(sink.failure_count(), 11);
    }
}

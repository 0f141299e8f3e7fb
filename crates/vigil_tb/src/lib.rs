//! Testbenches for the eight Vigil circuits.
//!
//! Each circuit gets a [`Bench`](vigil_engine::Bench) binding (golden model,
//! coverage specification, directed corner cases and random stimulus) and a
//! behavioural DUT written structurally from gates and registers, so that the
//! engine can be exercised end to end without an HDL simulator. Any DUT can be
//! wrapped in a [`FaultyDut`] to corrupt its outputs on purpose.
//!
//! [`BenchKind`] enumerates the benches by name and [`run`] drives one of them
//! against its behavioural DUT.

#![warn(missing_docs)]

pub mod benches;
pub mod dut;
pub mod fault;
pub mod registry;

pub use benches::{
    Adder4Bench, AluBench, DemuxBench, FsmStimulus, FullAdderBench, HalfAdderBench, MealyBench,
    MooreBench, MuxBench,
};
pub use dut::{Behavioural, Circuit};
pub use fault::{Corrupt, FaultyDut};
pub use registry::{run, BenchKind, Setup, UnknownBench};

//! Golden reference models for the circuits verified by Vigil.
//!
//! Each model is a pure, deterministic function from a transaction's input
//! record to the unique correct output record. Models never fail: inputs
//! outside a circuit's legal domain (an undefined FSM state, a selector
//! wider than the port) map to a defined default instead of an error.
//!
//! Stateful circuits (the Mealy and Moore FSMs) receive the state they start
//! from as part of their input record and report the state they end in as part
//! of their output record. The model itself holds no state between calls.
//!
//! # Modules
//!
//! - `half_adder`, `full_adder`, `adder4` — adders
//! - `mux`, `demux` — 4×1 multiplexer and 1×4 demultiplexer
//! - `alu` — N-bit ALU with a 4-bit opcode
//! - `mealy`, `moore` — finite-state machines

#![warn(missing_docs)]

pub mod adder4;
pub mod alu;
pub mod demux;
pub mod full_adder;
pub mod half_adder;
pub mod mealy;
pub mod moore;
pub mod mux;

use std::fmt;

pub use adder4::{Adder4, Adder4In, Adder4Out};
pub use alu::{Alu, AluIn, AluOut, Opcode};
pub use demux::{Demux, DemuxIn, DemuxOut};
pub use full_adder::{FullAdder, FullAdderIn};
pub use half_adder::{AdderOut, HalfAdder, HalfAdderIn};
pub use mealy::{MealyFsm, MealyIn, MealyOut};
pub use moore::{MooreFsm, MooreIn, MooreOut};
pub use mux::{Mux, MuxIn, MuxOut};

/// A reference implementation defining the correct behaviour of one circuit.
///
/// `evaluate` must be pure: the same input always yields the same output,
/// regardless of call order or how many times the model has been used.
pub trait GoldenModel {
    /// The input subset of a transaction (values chosen by the sequencer,
    /// plus the starting state for sequential circuits).
    type Input: Clone + fmt::Debug + fmt::Display + PartialEq;

    /// The output subset of a transaction (values observed on the DUT,
    /// plus the resulting state for sequential circuits).
    type Output: Clone + fmt::Debug + fmt::Display + PartialEq;

    /// Computes the expected output for `input`.
    fn evaluate(&self, input: &Self::Input) -> Self::Output;
}

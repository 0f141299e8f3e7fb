//! Verification engine for small digital circuits.
//!
//! This crate drives a device under test through a single-depth pipeline:
//! the [`Sequencer`] picks a stimulus, the [`Bench`] binds it into an input
//! record, the [`Scoreboard`] queues the golden model's expectation, the
//! [`DutAdapter`] applies the input and observes the output, and the completed
//! [`Txn`] fans out to the scoreboard and then the coverage model.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use vigil_engine::{run_bench, RunOptions};
//! use vigil_report::ReportSink;
//!
//! let sink = Arc::new(ReportSink::new());
//! let summary = run_bench(bench, dut, &RunOptions::default(), sink).await?;
//! println!("{}: {}", summary.bench, summary.verdict);
//! ```
//!
//! # Modules
//!
//! - `txn` — Correlation ids, pending and completed transactions
//! - `adapter` — The DUT collaborator contract
//! - `scoreboard` — In-order expected/observed comparison
//! - `sequencer` — Fixed-count and coverage-closure stimulus policies
//! - `phase` — Environment lifecycle state machine
//! - `env` — The environment and the `run_bench` entry point

#![warn(missing_docs)]

pub mod adapter;
pub mod bench;
pub mod env;
pub mod error;
pub mod phase;
pub mod scoreboard;
pub mod sequencer;
pub mod subscriber;
pub mod txn;

pub use adapter::{AdapterError, DutAdapter, Stage};
pub use bench::{Bench, BenchInput, BenchOutput, BenchTxn};
pub use env::{run_bench, Environment, RunOptions};
pub use error::RunError;
pub use phase::{Phase, PhaseTracker};
pub use scoreboard::Scoreboard;
pub use sequencer::{Policy, Sequencer};
pub use subscriber::Subscriber;
pub use txn::{PendingTxn, Txn, TxnId};

//! Conformance test helpers for the Vigil verification engine.
//!
//! Provides shared runners that drive a bench through the full environment
//! lifecycle (build → run → check → report) and collect everything the
//! integration tests assert on, plus DUT adapters that misbehave on purpose.

#![warn(missing_docs)]

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use vigil_engine::{AdapterError, DutAdapter, Policy, RunError, RunOptions};
use vigil_report::{CheckRecord, ReportSink, RunSummary};
use vigil_tb::{BenchKind, Setup};

/// Everything one run produced.
pub struct BenchRun {
    /// The run outcome: a summary, or the error that aborted it.
    pub result: Result<RunSummary, RunError>,
    /// Every check record the scoreboard emitted, in order.
    pub records: Vec<CheckRecord>,
}

impl BenchRun {
    /// Returns the summary, panicking with the run error if the run aborted.
    pub fn summary(&self) -> &RunSummary {
        match &self.result {
            Ok(summary) => summary,
            Err(e) => panic!("run aborted: {e}"),
        }
    }

    /// Returns the rendered inputs of every checked transaction.
    pub fn input_trace(&self) -> Vec<String> {
        self.records.iter().map(|r| r.inputs.clone()).collect()
    }

    /// Returns the number of failing check records.
    pub fn failures(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome.is_failure())
            .count()
    }
}

/// Options with a fixed seed and policy and the default timeout.
pub fn seeded(policy: Policy, seed: u64) -> RunOptions {
    RunOptions {
        policy: Some(policy),
        seed: Some(seed),
        ..RunOptions::default()
    }
}

/// Runs `kind` against its behavioural DUT with a private sink.
pub async fn run_kind(kind: BenchKind, options: &RunOptions, setup: &Setup) -> BenchRun {
    let sink = Arc::new(ReportSink::new());
    let result = vigil_tb::run(kind, options, setup, Arc::clone(&sink)).await;
    BenchRun {
        result,
        records: sink.take_all(),
    }
}

/// A DUT that accepts every input and never produces an output.
pub struct StallingDut<I, O> {
    applied: u64,
    _marker: PhantomData<fn(I) -> O>,
}

impl<I, O> StallingDut<I, O> {
    /// Creates a stalled DUT.
    pub fn new() -> Self {
        Self {
            applied: 0,
            _marker: PhantomData,
        }
    }

    /// Returns how many inputs were applied.
    pub fn applied(&self) -> u64 {
        self.applied
    }
}

impl<I, O> Default for StallingDut<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<I, O> DutAdapter for StallingDut<I, O>
where
    I: Send + Sync,
    O: Send,
{
    type Input = I;
    type Output = O;

    async fn apply(&mut self, _input: &I) -> Result<(), AdapterError> {
        self.applied += 1;
        Ok(())
    }

    async fn observe(&mut self) -> Result<O, AdapterError> {
        std::future::pending().await
    }
}

/// A DUT whose connection drops after `healthy` transactions.
pub struct DroppingDut<D> {
    inner: D,
    healthy: u64,
    observed: u64,
}

impl<D> DroppingDut<D> {
    /// Wraps `inner`, failing every observe after the first `healthy`.
    pub fn new(inner: D, healthy: u64) -> Self {
        Self {
            inner,
            healthy,
            observed: 0,
        }
    }
}

#[async_trait]
impl<D: DutAdapter> DutAdapter for DroppingDut<D> {
    type Input = D::Input;
    type Output = D::Output;

    async fn apply(&mut self, input: &D::Input) -> Result<(), AdapterError> {
        self.inner.apply(input).await
    }

    async fn observe(&mut self) -> Result<D::Output, AdapterError> {
        if self.observed >= self.healthy {
            return Err(AdapterError::Disconnected("simulator exited".to_string()));
        }
        self.observed += 1;
        self.inner.observe().await
    }
}

/// A short timeout for tests that expect a stall.
pub const STALL_TIMEOUT: Duration = Duration::from_millis(50);

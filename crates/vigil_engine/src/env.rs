//! The verification environment: one bench, one DUT, one run.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use vigil_coverage::CoverageModel;
use vigil_report::{ReportSink, RunSummary, Verdict};

use crate::adapter::{AdapterError, DutAdapter, Stage};
use crate::bench::{Bench, BenchInput, BenchOutput, BenchTxn};
use crate::error::RunError;
use crate::phase::{Phase, PhaseTracker};
use crate::scoreboard::Scoreboard;
use crate::sequencer::{Policy, Sequencer};
use crate::subscriber::Subscriber;
use crate::txn::{PendingTxn, TxnId};

/// Knobs of a single run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Stimulus policy; `None` uses the bench default.
    pub policy: Option<Policy>,
    /// Seed of the random stream; `None` draws one and reports it.
    pub seed: Option<u64>,
    /// Per-transaction limit on each apply and each observe; `None` waits forever.
    pub timeout: Option<Duration>,
}

impl RunOptions {
    /// Apply/observe limit used unless configured otherwise.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            policy: None,
            seed: None,
            timeout: Some(Self::DEFAULT_TIMEOUT),
        }
    }
}

/// Owns every component of one run and drives it through its phases.
///
/// Observed transactions fan out to the scoreboard first and the coverage
/// model second. Lifecycle methods must be called in order: [`build`],
/// [`run`], [`check`], [`report`]; anything else is
/// [`RunError::InvalidPhase`].
///
/// [`build`]: Environment::build
/// [`run`]: Environment::run
/// [`check`]: Environment::check
/// [`report`]: Environment::report
pub struct Environment<B: Bench, D> {
    bench: B,
    dut: D,
    scoreboard: Scoreboard<B::Model>,
    coverage: Option<CoverageModel<BenchTxn<B>>>,
    sequencer: Sequencer<B::Stimulus>,
    phase: PhaseTracker,
    timeout: Option<Duration>,
    transactions: u64,
    carried: Option<BenchOutput<B>>,
    verdict: Option<Verdict>,
}

impl<B, D> Environment<B, D>
where
    B: Bench,
    D: DutAdapter<Input = BenchInput<B>, Output = BenchOutput<B>>,
{
    /// Wires a new environment in [`Phase::Created`].
    pub fn new(bench: B, dut: D, options: &RunOptions, sink: Arc<ReportSink>) -> Self {
        let policy = options.policy.unwrap_or_else(|| bench.default_policy());
        let scoreboard = Scoreboard::new(bench.name(), bench.model(), sink);
        let sequencer = Sequencer::new(policy, options.seed, bench.directed());
        Self {
            bench,
            dut,
            scoreboard,
            coverage: None,
            sequencer,
            phase: PhaseTracker::new(),
            timeout: options.timeout,
            transactions: 0,
            carried: None,
            verdict: None,
        }
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase.current()
    }

    /// Returns the bench binding.
    pub fn bench(&self) -> &B {
        &self.bench
    }

    /// Returns the scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard<B::Model> {
        &self.scoreboard
    }

    /// Returns the coverage model once built.
    pub fn coverage(&self) -> Option<&CoverageModel<BenchTxn<B>>> {
        self.coverage.as_ref()
    }

    /// Returns the seed of this run's random stream.
    pub fn seed(&self) -> u64 {
        self.sequencer.seed()
    }

    /// Returns the number of completed transactions.
    pub fn transactions(&self) -> u64 {
        self.transactions
    }

    /// Builds the coverage model. `Created → Built`.
    pub fn build(&mut self) -> Result<(), RunError> {
        self.phase.require(Phase::Created)?;
        let coverage = self.bench.coverage()?;
        self.phase.advance(Phase::Built)?;
        tracing::debug!(
            bench = self.bench.name(),
            bins = coverage.total_bins(),
            "coverage model built"
        );
        self.coverage = Some(coverage);
        Ok(())
    }

    /// Drives stimulus until the policy is satisfied. `Built → Running`.
    ///
    /// Each transaction is submitted to the scoreboard, applied, observed,
    /// and fanned out before the next one starts.
    pub async fn run(&mut self) -> Result<(), RunError> {
        self.phase.advance(Phase::Running)?;
        let Some(coverage) = self.coverage.as_mut() else {
            return Err(RunError::InvalidPhase {
                from: Phase::Created,
                to: Phase::Running,
            });
        };

        tracing::info!(
            bench = self.bench.name(),
            seed = self.sequencer.seed(),
            policy = %self.sequencer.policy(),
            "run started"
        );

        let bench = &self.bench;
        while let Some(stimulus) = self.sequencer.next(coverage, |rng| bench.randomize(rng))? {
            let id = TxnId::from_raw(self.transactions);
            let input = bench.bind(&stimulus, self.carried.as_ref());
            self.scoreboard.submit_expected(id, &input);
            let pending = PendingTxn::new(id, input);

            within(self.timeout, id, Stage::Apply, self.dut.apply(pending.input())).await?;
            let output = within(self.timeout, id, Stage::Observe, self.dut.observe()).await?;
            let txn = pending.observe(output);
            self.transactions += 1;

            self.scoreboard.write(&txn);
            coverage.write(&txn);
            tracing::debug!(
                bench = bench.name(),
                txn = %id,
                percent = coverage.coverage_percent(),
                "transaction sampled"
            );
            self.carried = Some(txn.output().clone());
        }

        tracing::info!(
            bench = bench.name(),
            transactions = self.transactions,
            percent = coverage.coverage_percent(),
            "stimulus complete"
        );
        Ok(())
    }

    /// Computes the final verdict. `Running → Checked`.
    pub fn check(&mut self) -> Result<Verdict, RunError> {
        self.phase.advance(Phase::Checked)?;
        let verdict = self.scoreboard.final_verdict();
        if verdict.is_pass() {
            tracing::info!(bench = self.bench.name(), %verdict, "checked");
        } else {
            tracing::error!(bench = self.bench.name(), %verdict, "checked");
        }
        self.verdict = Some(verdict);
        Ok(verdict)
    }

    /// Produces the run summary. `Checked → Reported`.
    pub fn report(&mut self) -> Result<RunSummary, RunError> {
        self.phase.advance(Phase::Reported)?;
        let (Some(coverage), Some(verdict)) = (self.coverage.as_ref(), self.verdict) else {
            return Err(RunError::InvalidPhase {
                from: Phase::Created,
                to: Phase::Reported,
            });
        };
        Ok(RunSummary {
            bench: self.bench.name().to_string(),
            seed: self.sequencer.seed(),
            policy: self.sequencer.policy().to_string(),
            transactions: self.transactions,
            passed: self.scoreboard.passed(),
            verdict,
            coverage: coverage.report(),
        })
    }
}

/// Awaits one adapter call, bounded by `limit` when set.
async fn within<T>(
    limit: Option<Duration>,
    txn: TxnId,
    stage: Stage,
    call: impl Future<Output = Result<T, AdapterError>>,
) -> Result<T, RunError> {
    let result = match limit {
        Some(after) => tokio::time::timeout(after, call)
            .await
            .map_err(|_| RunError::Timeout { txn, stage, after })?,
        None => call.await,
    };
    result.map_err(|source| RunError::Adapter { txn, stage, source })
}

/// Runs `bench` against `dut` through the whole lifecycle.
pub async fn run_bench<B, D>(
    bench: B,
    dut: D,
    options: &RunOptions,
    sink: Arc<ReportSink>,
) -> Result<RunSummary, RunError>
where
    B: Bench,
    D: DutAdapter<Input = BenchInput<B>, Output = BenchOutput<B>>,
{
    let mut env = Environment::new(bench, dut, options, sink);
    env.build()?;
    env.run().await?;
    env.check()?;
    env.report()
}

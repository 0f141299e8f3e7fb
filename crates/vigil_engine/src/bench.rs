//! Per-circuit bench bindings.

use rand::rngs::StdRng;
use vigil_coverage::{CoverageError, CoverageModel};
use vigil_golden::GoldenModel;

use crate::sequencer::Policy;
use crate::txn::Txn;

/// Input record of a bench's golden model.
pub type BenchInput<B> = <<B as Bench>::Model as GoldenModel>::Input;

/// Output record of a bench's golden model.
pub type BenchOutput<B> = <<B as Bench>::Model as GoldenModel>::Output;

/// A completed transaction of a bench.
pub type BenchTxn<B> = Txn<BenchInput<B>, BenchOutput<B>>;

/// Everything the engine needs to verify one circuit: the oracle, the
/// coverage specification and the stimulus plan.
///
/// A *stimulus* is what the sequencer chooses. It becomes an input record
/// through [`bind`](Bench::bind), which may fold in state carried from the
/// previous transaction (the FSMs start each transaction in the state the
/// previous one ended in).
pub trait Bench {
    /// The circuit's golden model.
    type Model: GoldenModel;

    /// The values chosen by the sequencer for one transaction.
    type Stimulus: Clone;

    /// Short name used in logs, reports and on the command line.
    fn name(&self) -> &str;

    /// Returns the golden model instance for a new run.
    fn model(&self) -> Self::Model;

    /// Builds a fresh coverage model for a new run.
    fn coverage(
        &self,
    ) -> Result<
        CoverageModel<Txn<<Self::Model as GoldenModel>::Input, <Self::Model as GoldenModel>::Output>>,
        CoverageError,
    >;

    /// Directed corner cases driven before random stimulus under the
    /// fixed-count policy.
    fn directed(&self) -> Vec<Self::Stimulus> {
        Vec::new()
    }

    /// Draws one uniformly random stimulus.
    fn randomize(&self, rng: &mut StdRng) -> Self::Stimulus;

    /// Turns a stimulus into the input record of the next transaction.
    ///
    /// `previous` is the output observed for the previous transaction, or
    /// `None` for the first transaction of a run.
    fn bind(
        &self,
        stimulus: &Self::Stimulus,
        previous: Option<&<Self::Model as GoldenModel>::Output>,
    ) -> <Self::Model as GoldenModel>::Input;

    /// Policy used when the caller does not choose one.
    fn default_policy(&self) -> Policy {
        Policy::fixed()
    }
}

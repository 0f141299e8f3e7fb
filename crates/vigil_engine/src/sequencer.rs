//! Stimulus generation policies.

use std::collections::VecDeque;
use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use vigil_coverage::CoverageModel;

use crate::error::RunError;

/// When the sequencer stops producing stimulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Every directed stimulus, then `random` random ones.
    FixedCount {
        /// Number of random stimuli after the directed ones.
        random: u64,
    },
    /// Random stimuli until every coverage bin is hit.
    CoverageClosure {
        /// Emitted stimuli after which closure is declared failed.
        max_iterations: u64,
    },
}

impl Policy {
    /// Random transactions of the fixed-count policy unless configured.
    pub const DEFAULT_RANDOM_COUNT: u64 = 50;

    /// Iteration cap of the coverage-closure policy unless configured.
    pub const DEFAULT_MAX_ITERATIONS: u64 = 100_000;

    /// Fixed-count policy with the default random count.
    pub fn fixed() -> Self {
        Policy::FixedCount {
            random: Self::DEFAULT_RANDOM_COUNT,
        }
    }

    /// Coverage-closure policy with the default iteration cap.
    pub fn closure() -> Self {
        Policy::CoverageClosure {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::FixedCount { random } => write!(f, "fixed({random})"),
            Policy::CoverageClosure { max_iterations } => write!(f, "coverage({max_iterations})"),
        }
    }
}

/// Produces the stimulus stream of one run.
///
/// The random stream is fully determined by the seed: two sequencers with
/// the same seed, policy and directed list emit identical stimuli.
#[derive(Debug)]
pub struct Sequencer<S> {
    policy: Policy,
    seed: u64,
    rng: StdRng,
    directed: VecDeque<S>,
    random_emitted: u64,
    emitted: u64,
}

impl<S> Sequencer<S> {
    /// Creates a sequencer. Without a seed, one is drawn from the OS.
    pub fn new(policy: Policy, seed: Option<u64>, directed: Vec<S>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let directed = match policy {
            Policy::FixedCount { .. } => directed.into(),
            Policy::CoverageClosure { .. } => VecDeque::new(),
        };
        Self {
            policy,
            seed,
            rng: StdRng::seed_from_u64(seed),
            directed,
            random_emitted: 0,
            emitted: 0,
        }
    }

    /// Returns the seed of the random stream.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the active policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Returns how many stimuli have been emitted.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Produces the next stimulus, or `None` once the policy is satisfied.
    ///
    /// `randomize` draws one random stimulus from the sequencer's generator.
    /// Under coverage closure, hitting the iteration cap with `coverage`
    /// still incomplete is an error.
    pub fn next<T>(
        &mut self,
        coverage: &CoverageModel<T>,
        randomize: impl FnOnce(&mut StdRng) -> S,
    ) -> Result<Option<S>, RunError> {
        let stimulus = match self.policy {
            Policy::FixedCount { random } => {
                if let Some(directed) = self.directed.pop_front() {
                    directed
                } else if self.random_emitted < random {
                    self.random_emitted += 1;
                    randomize(&mut self.rng)
                } else {
                    return Ok(None);
                }
            }
            Policy::CoverageClosure { max_iterations } => {
                if coverage.is_complete() {
                    return Ok(None);
                }
                if self.emitted >= max_iterations {
                    return Err(RunError::CoverageNotReached {
                        iterations: self.emitted,
                        percent: coverage.coverage_percent(),
                        report: Box::new(coverage.report()),
                    });
                }
                self.random_emitted += 1;
                randomize(&mut self.rng)
            }
        };
        self.emitted += 1;
        Ok(Some(stimulus))
    }
}

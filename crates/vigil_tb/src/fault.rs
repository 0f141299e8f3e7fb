//! Deliberate output corruption for exercising the checker.

use async_trait::async_trait;
use vigil_engine::{AdapterError, DutAdapter};
use vigil_golden::{Adder4Out, AdderOut, AluOut, DemuxOut, MealyOut, MooreOut, MuxOut};

/// An output record that can be made wrong in a small, visible way.
pub trait Corrupt {
    /// Returns a copy that differs from `self` in exactly one output bit.
    fn corrupt(&self) -> Self;
}

impl Corrupt for AdderOut {
    fn corrupt(&self) -> Self {
        Self {
            carry: !self.carry,
            ..*self
        }
    }
}

impl Corrupt for Adder4Out {
    fn corrupt(&self) -> Self {
        Self {
            sum: self.sum ^ 1,
            ..*self
        }
    }
}

impl Corrupt for MuxOut {
    fn corrupt(&self) -> Self {
        Self { y: !self.y }
    }
}

impl Corrupt for DemuxOut {
    fn corrupt(&self) -> Self {
        let mut y = self.y;
        y[0] = !y[0];
        Self { y }
    }
}

impl Corrupt for AluOut {
    fn corrupt(&self) -> Self {
        Self {
            result: self.result ^ 1,
            ..*self
        }
    }
}

// The FSMs flip only the output pin so the state carried to the next
// transaction stays in step with the register.
impl Corrupt for MealyOut {
    fn corrupt(&self) -> Self {
        Self {
            output: !self.output,
            ..*self
        }
    }
}

impl Corrupt for MooreOut {
    fn corrupt(&self) -> Self {
        Self {
            output: !self.output,
            ..*self
        }
    }
}

/// Wraps a DUT and corrupts every `every`-th observed output.
///
/// `every == 0` disables injection, making the wrapper transparent.
#[derive(Debug)]
pub struct FaultyDut<D> {
    inner: D,
    every: u64,
    observed: u64,
}

impl<D> FaultyDut<D> {
    /// Wraps `inner`, corrupting observations `every`, `2 * every`, ...
    pub fn new(inner: D, every: u64) -> Self {
        Self {
            inner,
            every,
            observed: 0,
        }
    }

    /// A wrapper that never injects.
    pub fn transparent(inner: D) -> Self {
        Self::new(inner, 0)
    }

    /// Returns the number of outputs observed so far.
    pub fn observed(&self) -> u64 {
        self.observed
    }
}

#[async_trait]
impl<D> DutAdapter for FaultyDut<D>
where
    D: DutAdapter,
    D::Output: Corrupt,
{
    type Input = D::Input;
    type Output = D::Output;

    async fn apply(&mut self, input: &D::Input) -> Result<(), AdapterError> {
        self.inner.apply(input).await
    }

    async fn observe(&mut self) -> Result<D::Output, AdapterError> {
        let output = self.inner.observe().await?;
        self.observed += 1;
        if self.every != 0 && self.observed % self.every == 0 {
            tracing::warn!(observation = self.observed, "injecting output fault");
            return Ok(output.corrupt());
        }
        Ok(output)
    }
}

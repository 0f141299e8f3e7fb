//! In-process behavioural DUTs.
//!
//! Each circuit is described at gate level (NAND gates, ripple-carry adders,
//! one-hot decoders and state registers) independently of the golden models,
//! so a run compares two implementations rather than one against itself.
//! [`Behavioural`] turns any [`Circuit`] into a [`DutAdapter`].

mod alu;
mod combinational;
mod fsm;
pub(crate) mod gates;

pub use alu::AluCircuit;
pub use combinational::{
    Adder4Circuit, DemuxCircuit, FullAdderCircuit, HalfAdderCircuit, MuxCircuit,
};
pub use fsm::{MealyCircuit, MooreCircuit};

use async_trait::async_trait;
use vigil_engine::{AdapterError, DutAdapter};

/// A synchronous circuit evaluated one clock cycle at a time.
pub trait Circuit: Send {
    /// Values driven onto the input pins for one cycle.
    type Input: Send + Sync;
    /// Values sampled on the output pins after the cycle.
    type Output: Send;

    /// Evaluates one cycle, updating any internal registers.
    fn step(&mut self, input: &Self::Input) -> Self::Output;
}

/// Adapts a [`Circuit`] to the engine's apply/observe protocol.
///
/// `apply` clocks the circuit and latches its outputs; `observe` hands the
/// latched outputs back exactly once.
pub struct Behavioural<C: Circuit> {
    circuit: C,
    latched: Option<C::Output>,
}

impl<C: Circuit> Behavioural<C> {
    /// Wraps `circuit` with nothing latched.
    pub fn new(circuit: C) -> Self {
        Self {
            circuit,
            latched: None,
        }
    }

    /// Returns the wrapped circuit.
    pub fn circuit(&self) -> &C {
        &self.circuit
    }
}

#[async_trait]
impl<C: Circuit> DutAdapter for Behavioural<C> {
    type Input = C::Input;
    type Output = C::Output;

    async fn apply(&mut self, input: &C::Input) -> Result<(), AdapterError> {
        self.latched = Some(self.circuit.step(input));
        // Let the observe side run as a separate scheduling step.
        tokio::task::yield_now().await;
        Ok(())
    }

    async fn observe(&mut self) -> Result<C::Output, AdapterError> {
        self.latched.take().ok_or(AdapterError::NothingApplied)
    }
}

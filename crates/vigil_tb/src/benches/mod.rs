//! One [`Bench`](vigil_engine::Bench) binding per circuit.

mod adder4;

pub use adder4::Adder4Bench;
pub use alu::AluBench;
pub use demux::DemuxBench;
pub use full_adder::FullAdderBench;
pub use half_adder::HalfAdderBench;
pub use mealy::MealyBench;
pub use moore::MooreBench;
pub use mux::MuxBench;

use rand::rngs::StdRng;
use rand::Rng;
use vigil_common::Bit;

/// Stimulus of the sequential benches: a data bit and a reset request.
///
/// `reset` is the *asserted* state; each FSM bench maps it onto its own
/// reset polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FsmStimulus {
    /// Data input for the cycle.
    pub input: Bit,
    /// Reset asserted for the cycle.
    pub reset: Bit,
}

impl FsmStimulus {
    /// A cycle with reset released.
    pub fn run(input: Bit) -> Self {
        Self {
            input,
            reset: Bit::Zero,
        }
    }

    pub(crate) fn random(rng: &mut StdRng) -> Self {
        Self {
            input: random_bit(rng),
            reset: random_bit(rng),
        }
    }
}

pub(crate) fn random_bit(rng: &mut StdRng) -> Bit {
    Bit::from(rng.gen::<bool>())
}

/// Expands bit patterns such as `"1101"` into a list of bits.
pub(crate) fn bits(pattern: &str) -> Vec<Bit> {
    pattern.chars().filter_map(Bit::from_char).collect()
}

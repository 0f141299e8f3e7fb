//! Mealy FSM reference (4 states, active-low reset).
//!
//! The machine recognises the input pattern `1 0 1 0`. Its output is
//! combinational on (state, input): it is 1 only on the 3 → 0 transition
//! taken with input 0.
//!
//! ```text
//! state | input=0 | input=1
//!   0   |   0     |   1
//!   1   |   2     |   1
//!   2   |   0     |   3
//!   3   |   0 /1  |   1
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use vigil_common::Bit;

use crate::GoldenModel;

/// Inputs of one Mealy FSM clock cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MealyIn {
    /// State before the clock edge.
    pub current_state: u8,
    /// Data input.
    pub input: Bit,
    /// Active-low reset: the machine is held in reset while this is 0.
    pub reset_n: Bit,
}

/// Outputs of one Mealy FSM clock cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MealyOut {
    /// Combinational output for (current state, input).
    pub output: Bit,
    /// State after the clock edge.
    pub next_state: u8,
}

/// Golden model of the Mealy FSM.
#[derive(Clone, Copy, Debug, Default)]
pub struct MealyFsm;

impl MealyFsm {
    /// Number of legal states.
    pub const STATES: u8 = 4;

    /// State entered on reset.
    pub const RESET_STATE: u8 = 0;
}

impl GoldenModel for MealyFsm {
    type Input = MealyIn;
    type Output = MealyOut;

    fn evaluate(&self, input: &MealyIn) -> MealyOut {
        if input.reset_n == Bit::Zero {
            return MealyOut {
                output: Bit::Zero,
                next_state: Self::RESET_STATE,
            };
        }

        let (next_state, output) = match (input.current_state, input.input) {
            (0, Bit::Zero) => (0, Bit::Zero),
            (0, Bit::One) => (1, Bit::Zero),
            (1, Bit::Zero) => (2, Bit::Zero),
            (1, Bit::One) => (1, Bit::Zero),
            (2, Bit::Zero) => (0, Bit::Zero),
            (2, Bit::One) => (3, Bit::Zero),
            (3, Bit::Zero) => (0, Bit::One),
            (3, Bit::One) => (1, Bit::Zero),
            _ => (Self::RESET_STATE, Bit::Zero),
        };
        MealyOut { output, next_state }
    }
}

impl fmt::Display for MealyIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "state={} input={} rst_n={}",
            self.current_state, self.input, self.reset_n
        )
    }
}

impl fmt::Display for MealyOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "output={} next_state={}", self.output, self.next_state)
    }
}

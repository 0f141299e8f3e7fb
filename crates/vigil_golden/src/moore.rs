//! Moore FSM reference (5 states, active-high reset).
//!
//! The output depends only on the state the cycle starts in: it is 1 in
//! state 4 and 0 everywhere else. Reset forces both the output and the next
//! state to 0.
//!
//! ```text
//! state | input=0 | input=1 | output
//!   0   |   0     |   1     |   0
//!   1   |   2     |   1     |   0
//!   2   |   0     |   3     |   0
//!   3   |   2     |   4     |   0
//!   4   |   2     |   1     |   1
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use vigil_common::Bit;

use crate::GoldenModel;

/// Inputs of one Moore FSM clock cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MooreIn {
    /// State before the clock edge.
    pub current_state: u8,
    /// Data input.
    pub input: Bit,
    /// Active-high reset.
    pub reset: Bit,
}

/// Outputs of one Moore FSM clock cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MooreOut {
    /// Output decoded from the current state.
    pub output: Bit,
    /// State after the clock edge.
    pub next_state: u8,
}

/// Golden model of the Moore FSM.
#[derive(Clone, Copy, Debug, Default)]
pub struct MooreFsm;

impl MooreFsm {
    /// Number of legal states.
    pub const STATES: u8 = 5;

    /// State entered on reset.
    pub const RESET_STATE: u8 = 0;

    /// The only state whose output is 1.
    pub const ACCEPT_STATE: u8 = 4;
}

impl GoldenModel for MooreFsm {
    type Input = MooreIn;
    type Output = MooreOut;

    fn evaluate(&self, input: &MooreIn) -> MooreOut {
        if input.reset == Bit::One {
            return MooreOut {
                output: Bit::Zero,
                next_state: Self::RESET_STATE,
            };
        }

        let next_state = match (input.current_state, input.input) {
            (0, Bit::Zero) => 0,
            (0, Bit::One) => 1,
            (1, Bit::Zero) => 2,
            (1, Bit::One) => 1,
            (2, Bit::Zero) => 0,
            (2, Bit::One) => 3,
            (3, Bit::Zero) => 2,
            (3, Bit::One) => 4,
            (4, Bit::Zero) => 2,
            (4, Bit::One) => 1,
            _ => Self::RESET_STATE,
        };
        MooreOut {
            output: Bit::from(input.current_state == Self::ACCEPT_STATE),
            next_state,
        }
    }
}

impl fmt::Display for MooreIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "state={} input={} rst={}",
            self.current_state, self.input, self.reset
        )
    }
}

impl fmt::Display for MooreOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "output={} next_state={}", self.output, self.next_state)
    }
}

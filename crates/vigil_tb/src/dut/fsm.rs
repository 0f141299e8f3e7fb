//! State machines with their own state registers.
//!
//! The circuits keep state internally, the way the hardware does, and ignore
//! the `current_state` field of their input record. That field is what the
//! golden model starts from, so a register that drifts away from the model
//! shows up as a mismatch.

use vigil_common::Bit;
use vigil_golden::{MealyIn, MealyOut, MooreIn, MooreOut};

use super::Circuit;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum MealyState {
    #[default]
    Idle,
    Got1,
    Got10,
    Got101,
}

impl MealyState {
    fn encoding(self) -> u8 {
        match self {
            MealyState::Idle => 0,
            MealyState::Got1 => 1,
            MealyState::Got10 => 2,
            MealyState::Got101 => 3,
        }
    }
}

/// Mealy `1010` detector with an active-low synchronous reset.
#[derive(Clone, Copy, Debug, Default)]
pub struct MealyCircuit {
    state: MealyState,
}

impl Circuit for MealyCircuit {
    type Input = MealyIn;
    type Output = MealyOut;

    fn step(&mut self, input: &MealyIn) -> MealyOut {
        use MealyState::*;

        let (next, output) = if input.reset_n == Bit::Zero {
            (Idle, Bit::Zero)
        } else {
            match (self.state, input.input) {
                (Idle, Bit::Zero) => (Idle, Bit::Zero),
                (Idle, Bit::One) => (Got1, Bit::Zero),
                (Got1, Bit::Zero) => (Got10, Bit::Zero),
                (Got1, Bit::One) => (Got1, Bit::Zero),
                (Got10, Bit::Zero) => (Idle, Bit::Zero),
                (Got10, Bit::One) => (Got101, Bit::Zero),
                (Got101, Bit::Zero) => (Idle, Bit::One),
                (Got101, Bit::One) => (Got1, Bit::Zero),
            }
        };
        self.state = next;
        MealyOut {
            output,
            next_state: next.encoding(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum MooreState {
    #[default]
    S0,
    S1,
    S2,
    S3,
    Accept,
}

impl MooreState {
    fn encoding(self) -> u8 {
        match self {
            MooreState::S0 => 0,
            MooreState::S1 => 1,
            MooreState::S2 => 2,
            MooreState::S3 => 3,
            MooreState::Accept => 4,
        }
    }
}

/// Moore detector: the output is decoded from the state register alone.
/// Reset is active-high.
#[derive(Clone, Copy, Debug, Default)]
pub struct MooreCircuit {
    state: MooreState,
}

impl Circuit for MooreCircuit {
    type Input = MooreIn;
    type Output = MooreOut;

    fn step(&mut self, input: &MooreIn) -> MooreOut {
        use MooreState::*;

        if input.reset == Bit::One {
            self.state = S0;
            return MooreOut {
                output: Bit::Zero,
                next_state: S0.encoding(),
            };
        }

        let output = Bit::from(self.state == Accept);
        self.state = match (self.state, input.input) {
            (S0, Bit::Zero) => S0,
            (S0, Bit::One) => S1,
            (S1, Bit::Zero) => S2,
            (S1, Bit::One) => S1,
            (S2, Bit::Zero) => S0,
            (S2, Bit::One) => S3,
            (S3, Bit::Zero) => S2,
            (S3, Bit::One) => Accept,
            (Accept, Bit::Zero) => S2,
            (Accept, Bit::One) => S1,
        };
        MooreOut {
            output,
            next_state: self.state.encoding(),
        }
    }
}

//! 4×1 multiplexer reference.

use serde::{Deserialize, Serialize};
use std::fmt;
use vigil_common::Bit;

use crate::GoldenModel;

/// Inputs of the 4×1 multiplexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MuxIn {
    /// Data inputs `x0..x3`.
    pub x: [Bit; 4],
    /// 2-bit selector.
    pub sel: u8,
}

/// Output of the 4×1 multiplexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MuxOut {
    /// The selected data input.
    pub y: Bit,
}

/// Golden model of the 4×1 multiplexer: `y = x[sel]`.
///
/// A selector outside `0..=3` drives `y` low.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mux;

impl GoldenModel for Mux {
    type Input = MuxIn;
    type Output = MuxOut;

    fn evaluate(&self, input: &MuxIn) -> MuxOut {
        let y = input
            .x
            .get(usize::from(input.sel))
            .copied()
            .unwrap_or(Bit::Zero);
        MuxOut { y }
    }
}

impl fmt::Display for MuxIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x0={} x1={} x2={} x3={} sel={}",
            self.x[0], self.x[1], self.x[2], self.x[3], self.sel
        )
    }
}

impl fmt::Display for MuxOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y={}", self.y)
    }
}

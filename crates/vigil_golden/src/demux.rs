//! 1×4 demultiplexer reference.

use serde::{Deserialize, Serialize};
use std::fmt;
use vigil_common::Bit;

use crate::GoldenModel;

/// Inputs of the 1×4 demultiplexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DemuxIn {
    /// Data input.
    pub x: Bit,
    /// 2-bit selector.
    pub sel: u8,
}

/// Outputs of the 1×4 demultiplexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DemuxOut {
    /// Output lines `y0..y3`.
    pub y: [Bit; 4],
}

/// Golden model of the 1×4 demultiplexer: `y[sel] = x`, every other line low.
///
/// A selector outside `0..=3` drives all lines low.
#[derive(Clone, Copy, Debug, Default)]
pub struct Demux;

impl GoldenModel for Demux {
    type Input = DemuxIn;
    type Output = DemuxOut;

    fn evaluate(&self, input: &DemuxIn) -> DemuxOut {
        let mut y = [Bit::Zero; 4];
        if let Some(line) = y.get_mut(usize::from(input.sel)) {
            *line = input.x;
        }
        DemuxOut { y }
    }
}

impl fmt::Display for DemuxIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={} sel={}", self.x, self.sel)
    }
}

impl fmt::Display for DemuxOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "y0={} y1={} y2={} y3={}",
            self.y[0], self.y[1], self.y[2], self.y[3]
        )
    }
}

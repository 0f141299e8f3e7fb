//! 4-bit ripple adder reference.

use serde::{Deserialize, Serialize};
use std::fmt;
use vigil_common::{Bit, Width};

use crate::GoldenModel;

/// Inputs of the 4-bit adder. Operands are 4-bit values; upper bits are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Adder4In {
    /// First operand in `0..=15`.
    pub a: u8,
    /// Second operand in `0..=15`.
    pub b: u8,
}

/// Outputs of the 4-bit adder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Adder4Out {
    /// Sum modulo 16.
    pub sum: u8,
    /// Set when `a + b > 15`.
    pub carry: Bit,
}

/// Golden model of the 4-bit adder.
#[derive(Clone, Copy, Debug, Default)]
pub struct Adder4;

impl GoldenModel for Adder4 {
    type Input = Adder4In;
    type Output = Adder4Out;

    fn evaluate(&self, input: &Adder4In) -> Adder4Out {
        let width = Width::NIBBLE;
        let total = width.wrap(u64::from(input.a)) + width.wrap(u64::from(input.b));
        Adder4Out {
            // Masked to four bits, always fits in a u8.
            sum: width.wrap(total) as u8,
            carry: Bit::from(total > width.max_value()),
        }
    }
}

impl fmt::Display for Adder4In {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a={} b={}", self.a, self.b)
    }
}

impl fmt::Display for Adder4Out {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sum={} carry={}", self.sum, self.carry)
    }
}

//! Half adder reference: `sum = a ^ b`, `carry = a & b`.

use serde::{Deserialize, Serialize};
use std::fmt;
use vigil_common::Bit;

use crate::GoldenModel;

/// Inputs of a half adder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HalfAdderIn {
    /// First operand.
    pub a: Bit,
    /// Second operand.
    pub b: Bit,
}

/// Outputs of a single-bit adder, shared by the half and full adder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdderOut {
    /// Sum bit.
    pub sum: Bit,
    /// Carry out.
    pub carry: Bit,
}

/// Golden model of a half adder.
#[derive(Clone, Copy, Debug, Default)]
pub struct HalfAdder;

impl GoldenModel for HalfAdder {
    type Input = HalfAdderIn;
    type Output = AdderOut;

    fn evaluate(&self, input: &HalfAdderIn) -> AdderOut {
        AdderOut {
            sum: input.a ^ input.b,
            carry: input.a & input.b,
        }
    }
}

impl fmt::Display for HalfAdderIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a={} b={}", self.a, self.b)
    }
}

impl fmt::Display for AdderOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sum={} carry={}", self.sum, self.carry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_common::Bit::{One, Zero};

    fn eval(a: Bit, b: Bit) -> (Bit, Bit) {
        let out = HalfAdder.evaluate(&HalfAdderIn { a, b });
        (out.sum, out.carry)
    }

    #[test]
    fn truth_table() {
        assert_eq!(eval(Zero, Zero), (Zero, Zero));
        assert_eq!(eval(Zero, One), (One, Zero));
        assert_eq!(eval(One, Zero), (One, Zero));
        assert_eq!(eval(One, One), (Zero, One));
    }

    #[test]
    fn display() {
        let input = HalfAdderIn { a: One, b: Zero };
        assert_eq!(input.to_string(), "a=1 b=0");
        assert_eq!(HalfAdder.evaluate(&input).to_string(), "sum=1 carry=0");
    }
}

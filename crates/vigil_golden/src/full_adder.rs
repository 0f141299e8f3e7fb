//! Full adder reference.

use serde::{Deserialize, Serialize};
use std::fmt;
use vigil_common::{majority, Bit};

use crate::{AdderOut, GoldenModel};

/// Inputs of a full adder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FullAdderIn {
    /// First operand.
    pub a: Bit,
    /// Second operand.
    pub b: Bit,
    /// Carry in.
    pub cin: Bit,
}

/// Golden model of a full adder: `sum = a ^ b ^ cin`, `carry = majority(a, b, cin)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FullAdder;

impl GoldenModel for FullAdder {
    type Input = FullAdderIn;
    type Output = AdderOut;

    fn evaluate(&self, input: &FullAdderIn) -> AdderOut {
        AdderOut {
            sum: input.a ^ input.b ^ input.cin,
            carry: majority(input.a, input.b, input.cin),
        }
    }
}

impl fmt::Display for FullAdderIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a={} b={} cin={}", self.a, self.b, self.cin)
    }
}

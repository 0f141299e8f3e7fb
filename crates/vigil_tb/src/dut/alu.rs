//! Ripple-carry ALU.
//!
//! All arithmetic goes through one adder: subtraction adds the inverted
//! operand, decrement adds all-ones. Shifts are per-bit routing and the logic
//! group is bitwise over the masked operands.

use vigil_common::{Bit, Width};
use vigil_golden::{AluIn, AluOut, Opcode};

use super::gates::ripple_add;
use super::Circuit;

/// N-bit ALU datapath.
#[derive(Clone, Copy, Debug)]
pub struct AluCircuit {
    width: Width,
}

impl AluCircuit {
    /// Creates an ALU datapath of the given width.
    pub fn new(width: Width) -> Self {
        Self { width }
    }

    fn add(&self, a: u64, b: u64, cin: Bit) -> u64 {
        ripple_add(a, b, cin, self.width.bits()).0
    }

    /// Output bit `i` takes input bit `i + distance`, zero past the top.
    fn shift_right(&self, a: u64, distance: u64) -> u64 {
        (0..self.width.bits())
            .filter(|&i| u64::from(i) + distance < u64::from(self.width.bits()))
            .fold(0, |acc, i| {
                acc | (Bit::from_lsb(a >> (u64::from(i) + distance)).as_u64() << i)
            })
    }

    /// Output bit `i` takes input bit `i - distance`, zero below it.
    fn shift_left(&self, a: u64, distance: u64) -> u64 {
        (0..self.width.bits())
            .filter(|&i| u64::from(i) >= distance)
            .fold(0, |acc, i| {
                acc | (Bit::from_lsb(a >> (u64::from(i) - distance)).as_u64() << i)
            })
    }
}

impl Default for AluCircuit {
    fn default() -> Self {
        Self::new(Width::BYTE)
    }
}

impl Circuit for AluCircuit {
    type Input = AluIn;
    type Output = AluOut;

    fn step(&mut self, input: &AluIn) -> AluOut {
        let mask = self.width.mask();
        let a = input.a & mask;
        let b = input.b & mask;
        let not_b = !b & mask;

        let result = match input.opcode {
            Opcode::Inc => self.add(a, 0, Bit::One),
            Opcode::Dec => self.add(a, mask, Bit::Zero),
            Opcode::Add => self.add(a, b, Bit::Zero),
            Opcode::AddC => self.add(a, b, Bit::One),
            Opcode::SubB => self.add(a, not_b, Bit::One),
            Opcode::Sub => self.add(a, not_b, Bit::Zero),
            Opcode::ShiftR => self.shift_right(a, b),
            Opcode::ShiftL => self.shift_left(a, b),
            Opcode::And => a & b,
            Opcode::Nand => !(a & b) & mask,
            Opcode::Or => a | b,
            Opcode::Nor => !(a | b) & mask,
            Opcode::Xor => a ^ b,
            Opcode::Xnor => !(a ^ b) & mask,
            Opcode::Not => 0,
            Opcode::TrfA => a,
        };

        AluOut {
            result,
            carry: ripple_add(a, b, Bit::Zero, self.width.bits()).1,
        }
    }
}

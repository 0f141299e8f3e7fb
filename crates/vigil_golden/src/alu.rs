//! N-bit ALU reference with a 4-bit opcode.
//!
//! Every result is masked to the ALU width. Subtractions wrap in two's
//! complement under that mask; no separate borrow output exists. The carry
//! output is the unsigned overflow of `a + b` and does not depend on the
//! opcode.

use serde::{Deserialize, Serialize};
use std::fmt;
use vigil_common::{Bit, Width};

use crate::GoldenModel;

/// ALU operation select, in 4-bit encoding order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Opcode {
    /// `a + 1`
    Inc = 0b0000,
    /// `a - 1`
    Dec = 0b0001,
    /// `a + b`
    Add = 0b0010,
    /// `a + b + 1`
    AddC = 0b0011,
    /// `a - b`
    SubB = 0b0100,
    /// `a - b - 1`
    Sub = 0b0101,
    /// `a >> b`
    ShiftR = 0b0110,
    /// `a << b`
    ShiftL = 0b0111,
    /// `a & b`
    And = 0b1000,
    /// `!(a & b)`
    Nand = 0b1001,
    /// `a | b`
    Or = 0b1010,
    /// `!(a | b)`
    Nor = 0b1011,
    /// `a ^ b`
    Xor = 0b1100,
    /// `!(a ^ b)`
    Xnor = 0b1101,
    /// Encoded but not modelled: the expected result is 0.
    Not = 0b1110,
    /// `a`
    TrfA = 0b1111,
}

impl Opcode {
    /// Every opcode in encoding order.
    pub const ALL: [Opcode; 16] = [
        Opcode::Inc,
        Opcode::Dec,
        Opcode::Add,
        Opcode::AddC,
        Opcode::SubB,
        Opcode::Sub,
        Opcode::ShiftR,
        Opcode::ShiftL,
        Opcode::And,
        Opcode::Nand,
        Opcode::Or,
        Opcode::Nor,
        Opcode::Xor,
        Opcode::Xnor,
        Opcode::Not,
        Opcode::TrfA,
    ];

    /// Decodes the low four bits of `bits`.
    pub fn from_bits(bits: u8) -> Self {
        Self::ALL[usize::from(bits & 0xF)]
    }

    /// Returns the 4-bit encoding.
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Returns the mnemonic used in logs and coverage bin names.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Inc => "INC",
            Opcode::Dec => "DEC",
            Opcode::Add => "ADD",
            Opcode::AddC => "ADD_C",
            Opcode::SubB => "SUB_B",
            Opcode::Sub => "SUB",
            Opcode::ShiftR => "SHIFT_R",
            Opcode::ShiftL => "SHIFT_L",
            Opcode::And => "AND",
            Opcode::Nand => "NAND",
            Opcode::Or => "OR",
            Opcode::Nor => "NOR",
            Opcode::Xor => "XOR",
            Opcode::Xnor => "XNOR",
            Opcode::Not => "NOT",
            Opcode::TrfA => "TRF_A",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Inputs of the ALU. Operands wider than the ALU are truncated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AluIn {
    /// First operand.
    pub a: u64,
    /// Second operand.
    pub b: u64,
    /// Operation select.
    pub opcode: Opcode,
}

/// Outputs of the ALU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AluOut {
    /// Operation result masked to the ALU width.
    pub result: u64,
    /// Unsigned overflow of `a + b`.
    pub carry: Bit,
}

/// Golden model of an N-bit ALU.
#[derive(Clone, Copy, Debug, Default)]
pub struct Alu {
    width: Width,
}

impl Alu {
    /// Creates an ALU model of the given width.
    pub fn new(width: Width) -> Self {
        Self { width }
    }

    /// Returns the operand/result width.
    pub fn width(&self) -> Width {
        self.width
    }
}

impl GoldenModel for Alu {
    type Input = AluIn;
    type Output = AluOut;

    fn evaluate(&self, input: &AluIn) -> AluOut {
        let a = self.width.wrap(input.a);
        let b = self.width.wrap(input.b);

        let raw = match input.opcode {
            Opcode::Inc => a.wrapping_add(1),
            Opcode::Dec => a.wrapping_sub(1),
            Opcode::Add => a.wrapping_add(b),
            Opcode::AddC => a.wrapping_add(b).wrapping_add(1),
            Opcode::SubB => a.wrapping_sub(b),
            Opcode::Sub => a.wrapping_sub(b).wrapping_sub(1),
            Opcode::ShiftR => a.checked_shr(shift_amount(b)).unwrap_or(0),
            Opcode::ShiftL => a.checked_shl(shift_amount(b)).unwrap_or(0),
            Opcode::And => a & b,
            Opcode::Nand => !(a & b),
            Opcode::Or => a | b,
            Opcode::Nor => !(a | b),
            Opcode::Xor => a ^ b,
            Opcode::Xnor => !(a ^ b),
            Opcode::Not => 0,
            Opcode::TrfA => a,
        };

        AluOut {
            result: self.width.wrap(raw),
            carry: Bit::from(a + b > self.width.max_value()),
        }
    }
}

/// Saturates a shift distance so that `checked_sh*` rejects anything >= 64.
fn shift_amount(b: u64) -> u32 {
    u32::try_from(b).unwrap_or(u32::MAX)
}

impl fmt::Display for AluIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a={} b={} opcode={}", self.a, self.b, self.opcode)
    }
}

impl fmt::Display for AluOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "result={} carry={}", self.result, self.carry)
    }
}

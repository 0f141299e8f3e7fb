//! Two-state single-bit values with truth-table-based operators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// A single driven bit on a circuit port.
///
/// Unlike a 4-state logic value there is no unknown or high-impedance state:
/// golden models and behavioural DUTs only ever produce driven values.
/// Serializes as the integer `0` or `1`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Bit {
    /// Logic low (0).
    #[default]
    Zero = 0,
    /// Logic high (1).
    One = 1,
}

/// Error returned when converting an integer other than 0 or 1 into a [`Bit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("value {0} is not a single bit")]
pub struct InvalidBit(pub u64);

impl Bit {
    /// Both bit values in ascending order.
    pub const ALL: [Bit; 2] = [Bit::Zero, Bit::One];

    /// Returns the least significant bit of `value`.
    pub fn from_lsb(value: u64) -> Self {
        if value & 1 == 1 {
            Bit::One
        } else {
            Bit::Zero
        }
    }

    /// Returns `true` for [`Bit::One`].
    pub fn is_one(self) -> bool {
        self == Bit::One
    }

    /// Returns the bit as `0` or `1`.
    pub fn as_u64(self) -> u64 {
        self as u64
    }

    /// Converts a character to a [`Bit`]. Accepts `'0'` and `'1'`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }
}

/// Majority-of-three, the carry function of a full adder.
pub fn majority(a: Bit, b: Bit, c: Bit) -> Bit {
    (a & b) | (a & c) | (b & c)
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.is_one()
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        bit as u8
    }
}

impl TryFrom<u8> for Bit {
    type Error = InvalidBit;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Bit::try_from(u64::from(value))
    }
}

impl TryFrom<u64> for Bit {
    type Error = InvalidBit;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            other => Err(InvalidBit(other)),
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bit::Zero => write!(f, "0"),
            Bit::One => write!(f, "1"),
        }
    }
}

impl BitAnd for Bit {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Bit::One, Bit::One) => Bit::One,
            _ => Bit::Zero,
        }
    }
}

impl BitOr for Bit {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Bit::Zero, Bit::Zero) => Bit::Zero,
            _ => Bit::One,
        }
    }
}

impl BitXor for Bit {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        if self == rhs {
            Bit::Zero
        } else {
            Bit::One
        }
    }
}

impl Not for Bit {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }
}

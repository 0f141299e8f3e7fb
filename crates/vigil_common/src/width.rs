//! Port bit-widths and N-bit wraparound arithmetic helpers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The bit-width of a multi-bit circuit port.
///
/// Widths are limited to `1..=Width::MAX_BITS` so that every intermediate
/// result of the supported operations (including `a + b + 1`) fits in a `u64`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Width(u32);

/// Error returned for a width of zero or more than [`Width::MAX_BITS`] bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("width {0} is out of range (expected 1..={max})", max = Width::MAX_BITS)]
pub struct InvalidWidth(pub u32);

impl Width {
    /// The widest supported port.
    pub const MAX_BITS: u32 = 32;

    /// A 4-bit port.
    pub const NIBBLE: Width = Width(4);

    /// An 8-bit port.
    pub const BYTE: Width = Width(8);

    /// Creates a width, rejecting zero and anything wider than [`Width::MAX_BITS`].
    pub fn new(bits: u32) -> Result<Self, InvalidWidth> {
        if (1..=Self::MAX_BITS).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(InvalidWidth(bits))
        }
    }

    /// Returns the number of bits.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Returns the all-ones mask for this width (`2^N - 1`).
    pub fn mask(self) -> u64 {
        (1u64 << self.0) - 1
    }

    /// Returns the largest representable unsigned value, equal to [`mask`](Self::mask).
    pub fn max_value(self) -> u64 {
        self.mask()
    }

    /// Truncates `value` to this width.
    pub fn wrap(self, value: u64) -> u64 {
        value & self.mask()
    }

    /// Returns `true` if `value` is representable without truncation.
    pub fn contains(self, value: u64) -> bool {
        value <= self.mask()
    }
}

impl TryFrom<u32> for Width {
    type Error = InvalidWidth;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Width::new(bits)
    }
}

impl From<Width> for u32 {
    fn from(width: Width) -> Self {
        width.0
    }
}

impl Default for Width {
    fn default() -> Self {
        Width::BYTE
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.0)
    }
}

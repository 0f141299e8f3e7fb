//! Shared foundational types used across the Vigil verification crates.
//!
//! This crate provides two-state single-bit values with logic operators and a
//! bit-width helper used to mask multi-bit words to a circuit's port width.

#![warn(missing_docs)]

pub mod bit;
pub mod width;

pub use bit::{majority, Bit, InvalidBit};
pub use width::{InvalidWidth, Width};

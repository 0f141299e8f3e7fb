//! Coverage bins: named predicates over one sampled value.

use serde::Serialize;
use std::ops::RangeInclusive;

/// The predicate a bin applies to a sampled value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinKind {
    /// Matches exactly one value.
    Value(u64),
    /// Matches every value in the inclusive range.
    Range {
        /// Lowest matching value.
        lo: u64,
        /// Highest matching value.
        hi: u64,
    },
    /// Matches any listed value.
    Set(Vec<u64>),
}

impl BinKind {
    /// Returns `true` if `value` satisfies the predicate.
    pub fn matches(&self, value: u64) -> bool {
        match self {
            BinKind::Value(v) => *v == value,
            BinKind::Range { lo, hi } => (*lo..=*hi).contains(&value),
            BinKind::Set(values) => values.contains(&value),
        }
    }

    /// Returns `true` if no value can ever match.
    pub fn is_empty(&self) -> bool {
        match self {
            BinKind::Value(_) => false,
            BinKind::Range { lo, hi } => lo > hi,
            BinKind::Set(values) => values.is_empty(),
        }
    }
}

impl From<RangeInclusive<u64>> for BinKind {
    fn from(range: RangeInclusive<u64>) -> Self {
        BinKind::Range {
            lo: *range.start(),
            hi: *range.end(),
        }
    }
}

/// A named bin with its hit count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Bin {
    name: String,
    kind: BinKind,
    hits: u64,
}

impl Bin {
    /// Creates an unhit bin.
    pub fn new(name: impl Into<String>, kind: BinKind) -> Self {
        Self {
            name: name.into(),
            kind,
            hits: 0,
        }
    }

    /// Returns the bin name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the bin predicate.
    pub fn kind(&self) -> &BinKind {
        &self.kind
    }

    /// Returns how many samples landed in this bin.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Returns `true` once the bin has been hit at least once.
    pub fn is_hit(&self) -> bool {
        self.hits > 0
    }

    /// Returns `true` if `value` falls into this bin.
    pub fn matches(&self, value: u64) -> bool {
        self.kind.matches(value)
    }

    pub(crate) fn record(&mut self) -> bool {
        self.hits += 1;
        self.hits == 1
    }
}

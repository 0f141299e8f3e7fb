//! Coverpoints: one sampled dimension with its bins.

use std::fmt;
use std::ops::RangeInclusive;

use crate::bin::{Bin, BinKind};

/// Extracts the value a coverpoint classifies from a sampled item.
pub type Sampler<T> = fn(&T) -> u64;

/// A named dimension of a coverage model.
///
/// Bins are checked in declaration order and a sample lands in the first bin
/// that matches, so overlapping bins never double-count.
pub struct Coverpoint<T> {
    name: String,
    sampler: Sampler<T>,
    bins: Vec<Bin>,
}

impl<T> Coverpoint<T> {
    /// Creates a coverpoint with no bins.
    pub fn new(name: impl Into<String>, sampler: Sampler<T>) -> Self {
        Self {
            name: name.into(),
            sampler,
            bins: Vec::new(),
        }
    }

    /// Adds a bin matching exactly `value`.
    pub fn bin(self, name: impl Into<String>, value: u64) -> Self {
        self.with(Bin::new(name, BinKind::Value(value)))
    }

    /// Adds a bin matching the inclusive range.
    pub fn range(self, name: impl Into<String>, range: RangeInclusive<u64>) -> Self {
        self.with(Bin::new(name, BinKind::from(range)))
    }

    /// Adds a bin matching any of `values`.
    pub fn set(self, name: impl Into<String>, values: impl IntoIterator<Item = u64>) -> Self {
        self.with(Bin::new(name, BinKind::Set(values.into_iter().collect())))
    }

    /// Adds one bin per value, named `name[value]`.
    pub fn bin_array(mut self, name: &str, values: impl IntoIterator<Item = u64>) -> Self {
        for value in values {
            self = self.bin(format!("{name}[{value}]"), value);
        }
        self
    }

    fn with(mut self, bin: Bin) -> Self {
        self.bins.push(bin);
        self
    }

    /// Returns the coverpoint name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the bins in declaration order.
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Returns the number of bins hit at least once.
    pub fn hit_bins(&self) -> usize {
        self.bins.iter().filter(|b| b.is_hit()).count()
    }

    /// Returns the index of the bin `item` falls into, if any.
    pub fn classify(&self, item: &T) -> Option<usize> {
        let value = (self.sampler)(item);
        self.bins.iter().position(|b| b.matches(value))
    }

    /// Records a hit on bin `index`; returns `true` on its first hit.
    pub(crate) fn record(&mut self, index: usize) -> bool {
        self.bins.get_mut(index).is_some_and(Bin::record)
    }
}

impl<T> fmt::Debug for Coverpoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coverpoint")
            .field("name", &self.name)
            .field("bins", &self.bins)
            .finish_non_exhaustive()
    }
}

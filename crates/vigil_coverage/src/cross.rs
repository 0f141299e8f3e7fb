//! Cross coverage over two or more coverpoints.

use serde::Serialize;

/// The cartesian product of the bins of several coverpoints.
///
/// Hit counts are stored densely, one slot per bin combination, indexed in
/// row-major order over the constituents.
#[derive(Clone, Debug, Serialize)]
pub struct Cross {
    name: String,
    constituents: Vec<String>,
    #[serde(skip)]
    indices: Vec<usize>,
    #[serde(skip)]
    radix: Vec<usize>,
    hits: Vec<u64>,
}

impl Cross {
    pub(crate) fn new(
        name: String,
        constituents: Vec<String>,
        indices: Vec<usize>,
        radix: Vec<usize>,
    ) -> Self {
        let total = radix.iter().product();
        Self {
            name,
            constituents,
            indices,
            radix,
            hits: vec![0; total],
        }
    }

    /// Returns the cross name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the names of the crossed coverpoints, in declaration order.
    pub fn constituents(&self) -> &[String] {
        &self.constituents
    }

    /// Returns the coverpoint indices inside the owning model.
    pub(crate) fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the number of bin combinations.
    pub fn total_bins(&self) -> usize {
        self.hits.len()
    }

    /// Returns the number of combinations hit at least once.
    pub fn hit_bins(&self) -> usize {
        self.hits.iter().filter(|&&h| h > 0).count()
    }

    /// Records a hit for one bin per constituent; returns `true` on the
    /// combination's first hit.
    pub(crate) fn record(&mut self, bins: &[usize]) -> bool {
        let Some(slot) = self.slot(bins) else {
            return false;
        };
        match self.hits.get_mut(slot) {
            Some(hits) => {
                *hits += 1;
                *hits == 1
            }
            None => false,
        }
    }

    /// Returns the hit count of the combination, if it exists.
    pub fn hits(&self, bins: &[usize]) -> Option<u64> {
        self.slot(bins).and_then(|slot| self.hits.get(slot).copied())
    }

    fn slot(&self, bins: &[usize]) -> Option<usize> {
        if bins.len() != self.radix.len() {
            return None;
        }
        let mut slot = 0;
        for (&bin, &size) in bins.iter().zip(&self.radix) {
            if bin >= size {
                return None;
            }
            slot = slot * size + bin;
        }
        Some(slot)
    }

    /// Yields the bin index tuple of every combination never hit.
    pub(crate) fn unhit(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        self.hits
            .iter()
            .enumerate()
            .filter(|(_, hits)| **hits == 0)
            .map(|(slot, _)| self.decode(slot))
    }

    fn decode(&self, mut slot: usize) -> Vec<usize> {
        let mut bins = vec![0; self.radix.len()];
        for (bin, &size) in bins.iter_mut().zip(&self.radix).rev() {
            *bin = slot % size;
            slot /= size;
        }
        bins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cross_2x3() -> Cross {
        Cross::new(
            "c".into(),
            vec!["a".into(), "b".into()],
            vec![0, 1],
            vec![2, 3],
        )
    }

    #[test]
    fn total_is_product_of_constituents() {
        assert_eq!(cross_2x3().total_bins(), 6);
    }

    #[test]
    fn record_and_lookup() {
        let mut cross = cross_2x3();
        assert!(cross.record(&[1, 2]));
        assert!(!cross.record(&[1, 2]));
        assert_eq!(cross.hits(&[1, 2]), Some(2));
        assert_eq!(cross.hits(&[0, 2]), Some(0));
        assert_eq!(cross.hit_bins(), 1);
    }

    #[test]
    fn out_of_range_combination_is_ignored() {
        let mut cross = cross_2x3();
        assert!(!cross.record(&[2, 0]));
        assert!(!cross.record(&[0]));
        assert_eq!(cross.hit_bins(), 0);
    }

    #[test]
    fn unhit_decodes_row_major() {
        let mut cross = cross_2x3();
        for a in 0..2 {
            for b in 0..3 {
                if (a, b) != (1, 1) {
                    cross.record(&[a, b]);
                }
            }
        }
        let missing: Vec<Vec<usize>> = cross.unhit().collect();
        assert_eq!(missing, vec![vec![1, 1]]);
    }
}

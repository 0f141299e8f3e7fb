//! The coverage model and its builder.

use std::collections::HashSet;

use crate::coverpoint::Coverpoint;
use crate::cross::Cross;
use crate::error::CoverageError;
use crate::report::{CoverageReport, GroupKind, GroupReport};
use crate::percent;

/// A complete, fixed set of coverage bins over items of type `T`.
///
/// Built once per run. [`sample`](Self::sample) only ever increments hit
/// counts, so [`coverage_percent`](Self::coverage_percent) never decreases.
#[derive(Debug)]
pub struct CoverageModel<T> {
    name: String,
    coverpoints: Vec<Coverpoint<T>>,
    crosses: Vec<Cross>,
    samples: u64,
}

/// Collects coverpoints and crosses, validating them in [`build`](Self::build).
#[derive(Debug)]
pub struct CoverageModelBuilder<T> {
    name: String,
    coverpoints: Vec<Coverpoint<T>>,
    crosses: Vec<(String, Vec<String>)>,
}

impl<T> CoverageModel<T> {
    /// Starts building a model called `name`.
    pub fn builder(name: impl Into<String>) -> CoverageModelBuilder<T> {
        CoverageModelBuilder {
            name: name.into(),
            coverpoints: Vec::new(),
            crosses: Vec::new(),
        }
    }

    /// Returns the model name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the coverpoints in declaration order.
    pub fn coverpoints(&self) -> &[Coverpoint<T>] {
        &self.coverpoints
    }

    /// Returns the crosses in declaration order.
    pub fn crosses(&self) -> &[Cross] {
        &self.crosses
    }

    /// Returns how many items have been sampled.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Classifies `item` against every coverpoint and cross.
    ///
    /// A cross bin is hit only when each of its constituents matched a bin in
    /// this same sample.
    pub fn sample(&mut self, item: &T) {
        self.samples += 1;

        let matched: Vec<Option<usize>> =
            self.coverpoints.iter().map(|cp| cp.classify(item)).collect();

        for (cp, bin) in self.coverpoints.iter_mut().zip(&matched) {
            if let Some(index) = *bin {
                if cp.record(index) {
                    tracing::trace!(
                        model = %self.name,
                        bin = cp.bins()[index].name(),
                        "bin covered"
                    );
                }
            }
        }

        for cross in &mut self.crosses {
            let bins: Option<Vec<usize>> = cross
                .indices()
                .iter()
                .map(|&i| matched.get(i).copied().flatten())
                .collect();
            if let Some(bins) = bins {
                if cross.record(&bins) {
                    tracing::trace!(model = %self.name, cross = cross.name(), "cross bin covered");
                }
            }
        }
    }

    /// Returns the number of bins, counting every cross combination.
    pub fn total_bins(&self) -> usize {
        self.coverpoints.iter().map(|cp| cp.bins().len()).sum::<usize>()
            + self.crosses.iter().map(Cross::total_bins).sum::<usize>()
    }

    /// Returns the number of bins hit at least once.
    pub fn hit_bins(&self) -> usize {
        self.coverpoints.iter().map(Coverpoint::hit_bins).sum::<usize>()
            + self.crosses.iter().map(Cross::hit_bins).sum::<usize>()
    }

    /// Returns hit bins over total bins, as a percentage.
    pub fn coverage_percent(&self) -> f64 {
        percent(self.hit_bins(), self.total_bins())
    }

    /// Returns `true` iff every bin has been hit.
    pub fn is_complete(&self) -> bool {
        self.hit_bins() == self.total_bins()
    }

    /// Snapshots per-group totals and the names of every unhit bin.
    pub fn report(&self) -> CoverageReport {
        let mut groups = Vec::with_capacity(self.coverpoints.len() + self.crosses.len());

        for cp in &self.coverpoints {
            let uncovered = cp
                .bins()
                .iter()
                .filter(|b| !b.is_hit())
                .map(|b| b.name().to_string())
                .collect();
            groups.push(GroupReport::new(
                cp.name(),
                GroupKind::Coverpoint,
                cp.bins().len(),
                cp.hit_bins(),
                uncovered,
            ));
        }

        for cross in &self.crosses {
            let uncovered = cross
                .unhit()
                .map(|bins| self.cross_bin_name(cross, &bins))
                .collect();
            groups.push(GroupReport::new(
                cross.name(),
                GroupKind::Cross,
                cross.total_bins(),
                cross.hit_bins(),
                uncovered,
            ));
        }

        CoverageReport {
            model: self.name.clone(),
            samples: self.samples,
            total_bins: self.total_bins(),
            hit_bins: self.hit_bins(),
            percent: self.coverage_percent(),
            groups,
        }
    }

    /// Names a cross combination as `cross<bin_a,bin_b,...>`.
    fn cross_bin_name(&self, cross: &Cross, bins: &[usize]) -> String {
        let parts: Vec<&str> = cross
            .indices()
            .iter()
            .zip(bins)
            .map(|(&cp, &bin)| {
                self.coverpoints
                    .get(cp)
                    .and_then(|cp| cp.bins().get(bin))
                    .map_or("?", |b| b.name())
            })
            .collect();
        format!("{}<{}>", cross.name(), parts.join(","))
    }
}

impl<T> CoverageModelBuilder<T> {
    /// Adds a coverpoint.
    pub fn coverpoint(mut self, coverpoint: Coverpoint<T>) -> Self {
        self.coverpoints.push(coverpoint);
        self
    }

    /// Adds a cross over previously declared coverpoints.
    pub fn cross(mut self, name: impl Into<String>, coverpoints: &[&str]) -> Self {
        self.crosses.push((
            name.into(),
            coverpoints.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    /// Validates the specification and produces an unsampled model.
    pub fn build(self) -> Result<CoverageModel<T>, CoverageError> {
        if self.coverpoints.is_empty() {
            return Err(CoverageError::EmptyModel { model: self.name });
        }

        let mut names = HashSet::new();
        for cp in &self.coverpoints {
            if cp.bins().is_empty() || cp.bins().iter().any(|b| b.kind().is_empty()) {
                return Err(CoverageError::EmptyCoverpoint {
                    coverpoint: cp.name().to_string(),
                });
            }
            if !names.insert(cp.name().to_string()) {
                return Err(CoverageError::DuplicateName {
                    name: cp.name().to_string(),
                });
            }
            let mut bin_names = HashSet::new();
            for bin in cp.bins() {
                if !bin_names.insert(bin.name()) {
                    return Err(CoverageError::DuplicateName {
                        name: format!("{}.{}", cp.name(), bin.name()),
                    });
                }
            }
        }

        let mut crosses = Vec::with_capacity(self.crosses.len());
        for (name, constituents) in self.crosses {
            if constituents.len() < 2 {
                return Err(CoverageError::CrossTooNarrow {
                    cross: name,
                    count: constituents.len(),
                });
            }
            let mut indices = Vec::with_capacity(constituents.len());
            let mut radix = Vec::with_capacity(constituents.len());
            for constituent in &constituents {
                let Some(index) = self
                    .coverpoints
                    .iter()
                    .position(|cp| cp.name() == constituent)
                else {
                    return Err(CoverageError::UnknownCoverpoint {
                        cross: name,
                        coverpoint: constituent.clone(),
                    });
                };
                if indices.contains(&index) {
                    return Err(CoverageError::DuplicateName {
                        name: format!("{name}.{constituent}"),
                    });
                }
                indices.push(index);
                radix.push(self.coverpoints[index].bins().len());
            }
            if !names.insert(name.clone()) {
                return Err(CoverageError::DuplicateName { name });
            }
            crosses.push(Cross::new(name, constituents, indices, radix));
        }

        Ok(CoverageModel {
            name: self.name,
            coverpoints: self.coverpoints,
            crosses,
            samples: 0,
        })
    }
}

//! Point-in-time coverage reports.

use serde::Serialize;
use std::fmt;

use crate::percent;

/// Whether a report group is a coverpoint or a cross.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    /// A single sampled dimension.
    Coverpoint,
    /// A conjunction of coverpoints.
    Cross,
}

/// Coverage of one coverpoint or cross.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupReport {
    /// Coverpoint or cross name.
    pub name: String,
    /// Group kind.
    pub kind: GroupKind,
    /// Number of bins in the group.
    pub total: usize,
    /// Number of bins hit at least once.
    pub hit: usize,
    /// `hit / total` as a percentage.
    pub percent: f64,
    /// Names of the bins never hit.
    pub uncovered: Vec<String>,
}

impl GroupReport {
    pub(crate) fn new(
        name: &str,
        kind: GroupKind,
        total: usize,
        hit: usize,
        uncovered: Vec<String>,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind,
            total,
            hit,
            percent: percent(hit, total),
            uncovered,
        }
    }
}

/// Coverage report for a whole model.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CoverageReport {
    /// Model name.
    pub model: String,
    /// Number of sampled items.
    pub samples: u64,
    /// Total bins, counting every cross combination.
    pub total_bins: usize,
    /// Bins hit at least once.
    pub hit_bins: usize,
    /// Overall percentage.
    pub percent: f64,
    /// Per-coverpoint and per-cross detail, in declaration order.
    pub groups: Vec<GroupReport>,
}

impl CoverageReport {
    /// Returns `true` iff every bin was hit.
    pub fn is_complete(&self) -> bool {
        self.hit_bins == self.total_bins
    }

    /// Iterates over the names of every unhit bin across all groups.
    pub fn uncovered(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|g| g.uncovered.iter().map(String::as_str))
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Coverage Report: {} ===", self.model)?;
        for group in &self.groups {
            let kind = match group.kind {
                GroupKind::Coverpoint => "coverpoint",
                GroupKind::Cross => "cross",
            };
            writeln!(
                f,
                "  {kind:<10} {:<16} {:>3}/{:<3} {:>6.1}%",
                group.name, group.hit, group.total, group.percent
            )?;
            for bin in &group.uncovered {
                writeln!(f, "      missing {bin}")?;
            }
        }
        writeln!(f, "  samples: {}", self.samples)?;
        write!(
            f,
            "  overall: {}/{} bins ({:.1}%)",
            self.hit_bins, self.total_bins, self.percent
        )
    }
}

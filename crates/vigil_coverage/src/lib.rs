//! Functional coverage for transaction streams.
//!
//! A [`CoverageModel`] is a fixed set of named bins, grouped into
//! [`Coverpoint`]s (one sampled dimension each) and [`Cross`]es (the
//! conjunction of several coverpoints). The model is built once per run with
//! [`CoverageModel::builder`], sampled with every observed transaction, and
//! queried for completeness by the coverage-closure loop. The only mutable
//! state is the per-bin hit count, so coverage can only grow.
//!
//! ```
//! use vigil_coverage::{CoverageModel, Coverpoint};
//!
//! let mut model = CoverageModel::builder("pair")
//!     .coverpoint(Coverpoint::new("a", |t: &(u64, u64)| t.0).bin_array("a", [0, 1]))
//!     .coverpoint(Coverpoint::new("b", |t: &(u64, u64)| t.1).bin_array("b", [0, 1]))
//!     .cross("cross_ab", &["a", "b"])
//!     .build()
//!     .unwrap();
//!
//! model.sample(&(0, 1));
//! assert_eq!(model.hit_bins(), 3);
//! assert!(!model.is_complete());
//! ```

#![warn(missing_docs)]

pub mod bin;
pub mod coverpoint;
pub mod cross;
pub mod error;
pub mod model;
pub mod report;

pub use bin::{Bin, BinKind};
pub use coverpoint::{Coverpoint, Sampler};
pub use cross::Cross;
pub use error::CoverageError;
pub use model::{CoverageModel, CoverageModelBuilder};
pub use report::{CoverageReport, GroupKind, GroupReport};

/// Percentage of `hit` over `total`, with an empty set counting as complete.
pub(crate) fn percent(hit: usize, total: usize) -> f64 {
    if total == 0 {
        100.0
    } else {
        hit as f64 * 100.0 / total as f64
    }
}

//! Check records, verdicts, and report rendering.
//!
//! The scoreboard turns every compared transaction into a [`CheckRecord`]
//! tagged with an [`Outcome`]. Records accumulate in the thread-safe
//! [`ReportSink`], which several runs may share. At the end of a run the
//! engine condenses its counters into a [`RunSummary`] carrying the
//! [`Verdict`], and a [`ReportRenderer`] formats summaries and records as text
//! or JSON.

#![warn(missing_docs)]

pub mod outcome;
pub mod record;
pub mod renderer;
pub mod sink;
pub mod summary;

pub use outcome::Outcome;
pub use record::CheckRecord;
pub use renderer::{JsonRenderer, ReportRenderer, TextRenderer};
pub use sink::ReportSink;
pub use summary::{RunSummary, Verdict};

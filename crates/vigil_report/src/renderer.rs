//! Rendering backends for human-readable and machine-readable output.

use vigil_coverage::CoverageReport;

use crate::record::CheckRecord;
use crate::summary::RunSummary;

/// Trait for rendering run summaries and check records into strings.
pub trait ReportRenderer {
    /// Renders the end-of-run summary of one bench.
    fn render_summary(&self, summary: &RunSummary) -> String;

    /// Renders a single check record.
    fn render_record(&self, record: &CheckRecord) -> String;

    /// Renders the verdict of a bench whose run aborted with `error`.
    ///
    /// `coverage` is the coverage reached before the abort, when known.
    fn render_error(&self, bench: &str, error: &str, coverage: Option<&CoverageReport>) -> String;
}

/// Renders reports in the aligned status-line format the CLI prints.
///
/// Produces output like:
/// ```text
///    PASS  mux  seed=42 policy=coverage(100000) txns=37 coverage=100.0%
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TextRenderer {
    /// Append the full coverage table after the status line.
    pub coverage_details: bool,
}

impl TextRenderer {
    /// Creates a text renderer.
    pub fn new(coverage_details: bool) -> Self {
        Self { coverage_details }
    }
}

impl ReportRenderer for TextRenderer {
    fn render_summary(&self, summary: &RunSummary) -> String {
        let status = if summary.is_pass() { "PASS" } else { "FAIL" };
        let mut out = format!(
            "   {status}  {}  seed={} policy={} txns={} coverage={:.1}%",
            summary.bench,
            summary.seed,
            summary.policy,
            summary.transactions,
            summary.coverage.percent
        );
        if !summary.is_pass() {
            out.push_str(&format!("\n         {}", summary.verdict));
        }
        if self.coverage_details {
            out.push('\n');
            out.push_str(&summary.coverage.to_string());
        }
        out
    }

    fn render_record(&self, record: &CheckRecord) -> String {
        let mut out = format!(
            "{} [{}#{}] {} -> {}",
            record.outcome, record.bench, record.txn, record.inputs, record.actual
        );
        if record.outcome.is_failure() {
            if let Some(expected) = &record.expected {
                out.push_str(&format!(" (expected {expected})"));
            }
            if let Some(detail) = &record.detail {
                out.push_str(&format!(" ({detail})"));
            }
        }
        out
    }

    fn render_error(&self, bench: &str, error: &str, coverage: Option<&CoverageReport>) -> String {
        let mut out = format!("   FAIL  {bench}  error: {error}");
        let Some(coverage) = coverage else {
            return out;
        };
        if self.coverage_details {
            out.push('\n');
            out.push_str(&coverage.to_string());
        } else {
            let missing = coverage.total_bins - coverage.hit_bins;
            out.push_str(&format!(
                "\n         {missing} of {} bins never hit (--coverage-report lists them)",
                coverage.total_bins
            ));
        }
        out
    }
}

/// Renders reports as single-line JSON objects.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render_summary(&self, summary: &RunSummary) -> String {
        to_json(summary)
    }

    fn render_record(&self, record: &CheckRecord) -> String {
        to_json(record)
    }

    fn render_error(&self, bench: &str, error: &str, coverage: Option<&CoverageReport>) -> String {
        to_json(&serde_json::json!({
            "bench": bench,
            "verdict": { "status": "error" },
            "error": error,
            "coverage": coverage,
        }))
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|e| format!("{{\"error\":{:?}}}", e.to_string()))
}

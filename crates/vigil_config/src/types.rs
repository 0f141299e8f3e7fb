//! Configuration types deserialized from `vigil.toml`.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// The top-level configuration parsed from `vigil.toml`. Every section is
/// optional.
#[derive(Debug, Default, Deserialize)]
pub struct VigilConfig {
    /// Run knobs shared by every bench.
    #[serde(default)]
    pub run: RunConfig,
    /// Output format and logging.
    #[serde(default)]
    pub report: ReportConfig,
    /// ALU bench construction.
    #[serde(default)]
    pub alu: AluConfig,
    /// Per-bench overrides of `[run]` keys, keyed by bench name.
    #[serde(default)]
    pub benches: BTreeMap<String, BenchOverride>,
}

/// Global run knobs from the `[run]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RunConfig {
    /// Seed of the random stream; omitted means a fresh seed per run.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Stimulus policy; omitted means the bench default.
    #[serde(default)]
    pub policy: Option<PolicyKind>,
    /// Random transactions of the fixed-count policy.
    #[serde(default = "default_random_count")]
    pub random_count: u64,
    /// Iteration cap of the coverage-closure policy.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u64,
    /// Per-transaction apply/observe timeout in milliseconds; 0 disables it.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            policy: None,
            random_count: default_random_count(),
            max_iterations: default_max_iterations(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_random_count() -> u64 {
    vigil_engine::Policy::DEFAULT_RANDOM_COUNT
}

fn default_max_iterations() -> u64 {
    vigil_engine::Policy::DEFAULT_MAX_ITERATIONS
}

fn default_timeout_ms() -> u64 {
    1000
}

/// `[benches.<name>]`: any `[run]` key, overriding the global value for one
/// bench.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct BenchOverride {
    /// Overrides `run.seed`.
    pub seed: Option<u64>,
    /// Overrides `run.policy`.
    pub policy: Option<PolicyKind>,
    /// Overrides `run.random_count`.
    pub random_count: Option<u64>,
    /// Overrides `run.max_iterations`.
    pub max_iterations: Option<u64>,
    /// Overrides `run.timeout_ms`.
    pub timeout_ms: Option<u64>,
}

/// Which stimulus policy a bench runs under.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Directed stimuli then a fixed number of random ones.
    Fixed,
    /// Random stimuli until every coverage bin is hit.
    Coverage,
}

/// Output settings from the `[report]` section.
#[derive(Debug, Default, Deserialize)]
pub struct ReportConfig {
    /// How run summaries are printed.
    #[serde(default)]
    pub format: OutputFormat,
    /// Default log filter level.
    #[serde(default)]
    pub log_level: LogLevel,
    /// Print per-group coverage detail after each summary.
    #[serde(default)]
    pub coverage_details: bool,
}

/// Run summary output format.
#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines (default).
    #[default]
    Text,
    /// One JSON document per summary.
    Json,
}

/// Log verbosity names accepted by `report.log_level`.
#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-bin hits.
    Trace,
    /// Per-transaction detail.
    Debug,
    /// Run start, verdicts and coverage (default).
    #[default]
    Info,
    /// Injected faults and other oddities.
    Warn,
    /// Failures only.
    Error,
}

impl LogLevel {
    /// Returns the directive understood by an `EnvFilter`.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ALU bench settings from the `[alu]` section.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct AluConfig {
    /// Operand and result width in bits.
    #[serde(default = "default_alu_width")]
    pub width: u32,
}

impl Default for AluConfig {
    fn default() -> Self {
        Self {
            width: default_alu_width(),
        }
    }
}

fn default_alu_width() -> u32 {
    8
}

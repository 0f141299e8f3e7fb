//! Bench resolution: merging `[benches.<name>]` over the global `[run]` keys.

use crate::error::ConfigError;
use crate::types::{PolicyKind, VigilConfig};
use std::time::Duration;
use vigil_engine::{Policy, RunOptions};
use vigil_tb::BenchKind;

/// Run settings of one bench after overrides are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRun {
    /// The bench these settings apply to.
    pub bench: BenchKind,
    /// Seed, if one was configured.
    pub seed: Option<u64>,
    /// Policy kind, if one was configured.
    pub policy: Option<PolicyKind>,
    /// Random transactions of the fixed-count policy.
    pub random_count: u64,
    /// Iteration cap of the coverage-closure policy.
    pub max_iterations: u64,
    /// Apply/observe timeout in milliseconds; 0 disables it.
    pub timeout_ms: u64,
}

impl ResolvedRun {
    /// Returns the concrete policy: the configured kind, or the bench
    /// default's kind, parameterised with the configured counts.
    pub fn policy(&self) -> Policy {
        let kind = self.policy.unwrap_or(match self.bench.default_policy() {
            Policy::FixedCount { .. } => PolicyKind::Fixed,
            Policy::CoverageClosure { .. } => PolicyKind::Coverage,
        });
        match kind {
            PolicyKind::Fixed => Policy::FixedCount {
                random: self.random_count,
            },
            PolicyKind::Coverage => Policy::CoverageClosure {
                max_iterations: self.max_iterations,
            },
        }
    }

    /// Returns the per-transaction timeout, `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }

    /// Converts to engine run options.
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            policy: Some(self.policy()),
            seed: self.seed,
            timeout: self.timeout(),
        }
    }
}

/// Resolves the settings of the named bench.
///
/// Each key of the bench's override section, when present, replaces the
/// `[run]` value.
pub fn resolve_bench(config: &VigilConfig, bench_name: &str) -> Result<ResolvedRun, ConfigError> {
    let bench = BenchKind::from_name(bench_name)
        .ok_or_else(|| ConfigError::UnknownBench(bench_name.to_string()))?;
    let run = &config.run;
    let over = config.benches.get(bench_name).cloned().unwrap_or_default();

    Ok(ResolvedRun {
        bench,
        seed: over.seed.or(run.seed),
        policy: over.policy.or(run.policy),
        random_count: over.random_count.unwrap_or(run.random_count),
        max_iterations: over.max_iterations.unwrap_or(run.max_iterations),
        timeout_ms: over.timeout_ms.unwrap_or(run.timeout_ms),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    const TOML: &str = r#"
[run]
seed = 42
random_count = 80
timeout_ms = 0

[benches.mux]
policy = "fixed"
random_count = 200

[benches.alu]
seed = 9
"#;

    #[test]
    fn override_replaces_global_keys() {
        let config = load_config_from_str(TOML).unwrap();
        let mux = resolve_bench(&config, "mux").unwrap();
        assert_eq!(mux.seed, Some(42));
        assert_eq!(mux.policy(), Policy::FixedCount { random: 200 });

        let alu = resolve_bench(&config, "alu").unwrap();
        assert_eq!(alu.seed, Some(9));
        assert_eq!(alu.policy(), Policy::FixedCount { random: 80 });
    }

    #[test]
    fn bench_default_kind_uses_configured_counts() {
        let config = load_config_from_str("[run]\nmax_iterations = 500\n").unwrap();
        let moore = resolve_bench(&config, "moore").unwrap();
        assert_eq!(
            moore.policy(),
            Policy::CoverageClosure {
                max_iterations: 500
            }
        );
    }

    #[test]
    fn zero_timeout_disables() {
        let config = load_config_from_str(TOML).unwrap();
        let options = resolve_bench(&config, "half_adder").unwrap().run_options();
        assert_eq!(options.timeout, None);
        assert_eq!(options.seed, Some(42));
    }

    #[test]
    fn default_timeout() {
        let resolved = resolve_bench(&VigilConfig::default(), "adder4").unwrap();
        assert_eq!(resolved.timeout(), Some(Duration::from_millis(1000)));
    }

    #[test]
    fn unknown_bench_errors() {
        let err = resolve_bench(&VigilConfig::default(), "nonexistent").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownBench(_)));
    }
}

//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;
use vigil_config::LogLevel;

use crate::GlobalArgs;

/// Picks the default filter level: `--quiet` wins over `--verbose`, which
/// wins over the configured level.
pub fn level_for(global: &GlobalArgs, configured: LogLevel) -> LogLevel {
    if global.quiet {
        LogLevel::Error
    } else if global.verbose {
        configured.min(LogLevel::Debug)
    } else {
        configured
    }
}

/// Installs the global `fmt` subscriber writing to stderr. `RUST_LOG`, when
/// set, replaces the computed level.
pub fn init(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    // A second install (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

//! Parsing and validation of `vigil.toml` run configuration files.
//!
//! This crate reads the configuration file and produces a strongly-typed
//! [`VigilConfig`], then resolves per-bench overrides into a [`ResolvedRun`]
//! the runner can turn into engine options.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str, CONFIG_FILE};
pub use resolve::{resolve_bench, ResolvedRun};
pub use types::*;

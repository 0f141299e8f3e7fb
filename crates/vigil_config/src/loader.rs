//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::VigilConfig;
use std::path::Path;
use vigil_common::Width;
use vigil_tb::BenchKind;

/// Name of the configuration file looked up in a project directory.
pub const CONFIG_FILE: &str = "vigil.toml";

/// Loads and validates `vigil.toml` from a directory.
///
/// A directory without the file yields the default configuration.
pub fn load_config(dir: &Path) -> Result<VigilConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    match std::fs::read_to_string(&path) {
        Ok(content) => load_config_from_str(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(VigilConfig::default()),
        Err(e) => Err(e.into()),
    }
}

/// Loads and validates a configuration file at an explicit path. A missing
/// file is an error.
pub fn load_config_file(path: &Path) -> Result<VigilConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `vigil.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<VigilConfig, ConfigError> {
    let config: VigilConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Rejects zero counts, out-of-range widths and overrides of unknown benches.
fn validate_config(config: &VigilConfig) -> Result<(), ConfigError> {
    positive("run.random_count", Some(config.run.random_count))?;
    positive("run.max_iterations", Some(config.run.max_iterations))?;

    if Width::new(config.alu.width).is_err() {
        return Err(ConfigError::ValidationError(format!(
            "alu.width must be in 1..={}, got {}",
            Width::MAX_BITS,
            config.alu.width
        )));
    }

    for (name, over) in &config.benches {
        if BenchKind::from_name(name).is_none() {
            return Err(ConfigError::UnknownBench(name.clone()));
        }
        positive(&format!("benches.{name}.random_count"), over.random_count)?;
        positive(&format!("benches.{name}.max_iterations"), over.max_iterations)?;
    }
    Ok(())
}

fn positive(key: &str, value: Option<u64>) -> Result<(), ConfigError> {
    match value {
        Some(0) => Err(ConfigError::ValidationError(format!(
            "{key} must be greater than 0"
        ))),
        _ => Ok(()),
    }
}

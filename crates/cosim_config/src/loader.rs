//! Configuration file loading and validation.

use std::path::Path;

use crate::error::ConfigError;
use crate::resolve::resolve_paths;
use crate::types::CosimConfig;

/// Loads and validates a co-simulation configuration file.
///
/// Reads the JSON file, validates required fields and per-interface
/// consistency, and resolves relative paths against the file's directory.
pub fn load_config(config_path: &Path) -> Result<CosimConfig, ConfigError> {
    let content = std::fs::read_to_string(config_path)?;
    let mut config = load_config_from_str(&content)?;
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    resolve_paths(&mut config, base_dir);
    Ok(config)
}

/// Parses and validates a configuration from a JSON string.
///
/// Useful for testing without filesystem dependencies. Paths are left as
/// written; [`load_config`] resolves them against the file's directory.
pub fn load_config_from_str(content: &str) -> Result<CosimConfig, ConfigError> {
    let config: CosimConfig =
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and the per-interface maps
/// agree on which interfaces exist.
fn validate_config(config: &CosimConfig) -> Result<(), ConfigError> {
    if config.top_name.is_empty() {
        return Err(ConfigError::MissingField("top_name".to_string()));
    }
    if config.verilog_path.as_os_str().is_empty() {
        return Err(ConfigError::MissingField("verilog_path".to_string()));
    }
    for name in config.axi_to_data_file.keys() {
        if !config.axi_to_c_array_size.contains_key(name) {
            return Err(ConfigError::UnmatchedInterface { name: name.clone() });
        }
    }
    for name in config.axi_to_c_array_size.keys() {
        if !config.axi_to_data_file.contains_key(name) {
            return Err(ConfigError::UnmatchedInterface { name: name.clone() });
        }
    }
    // Surface bad scalar literals at load time rather than mid-generation.
    config.scalar_values()?;
    Ok(())
}

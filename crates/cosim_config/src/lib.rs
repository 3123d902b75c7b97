//! Parsing and validation of co-simulation configuration files.
//!
//! This crate reads the JSON configuration produced alongside an HLS kernel
//! and produces a strongly-typed [`CosimConfig`] with scalar argument values,
//! per-interface data files and element counts, and derived RTL file paths.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{CosimConfig, ScalarValue};

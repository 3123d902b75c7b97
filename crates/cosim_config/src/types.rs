//! Configuration types deserialized from the co-simulation JSON file.

use std::collections::BTreeMap;
use std::path::PathBuf;

use cosim_common::literal;
use serde::Deserialize;

use crate::error::ConfigError;

/// The co-simulation configuration produced alongside an HLS kernel.
///
/// All maps are `BTreeMap`s so iteration is name-sorted and the generated
/// artifacts are deterministic for a given configuration.
#[derive(Debug, Deserialize)]
pub struct CosimConfig {
    /// Name of the top-level RTL module.
    pub top_name: String,
    /// Directory containing the generated RTL sources.
    pub verilog_path: PathBuf,
    /// Literal values for scalar kernel arguments, keyed by argument name.
    #[serde(default)]
    pub scalar_to_val: BTreeMap<String, ScalarValue>,
    /// Backing data file for each AXI interface, keyed by interface name.
    #[serde(default)]
    pub axi_to_data_file: BTreeMap<String, PathBuf>,
    /// Element count of the C array behind each AXI interface.
    #[serde(default)]
    pub axi_to_c_array_size: BTreeMap<String, u64>,
}

/// A scalar argument value as it appears in the configuration.
///
/// The upstream tooling writes scalars either as strings (decimal or
/// `0x`-prefixed hex) or as plain JSON integers; serde's untagged enum
/// accepts both shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// A literal string, e.g. `"0x0000000a"` or `"10"`.
    Text(String),
    /// A plain JSON integer.
    Int(u64),
}

impl ScalarValue {
    /// Resolves the value to a `u64`, or `None` if the text form does not
    /// parse as a decimal or hex literal.
    pub fn to_u64(&self) -> Option<u64> {
        match self {
            ScalarValue::Text(text) => literal::parse_value(text),
            ScalarValue::Int(value) => Some(*value),
        }
    }
}

impl CosimConfig {
    /// Path to the top-level RTL file, `<verilog_path>/<top_name>.v`.
    pub fn top_rtl_path(&self) -> PathBuf {
        self.verilog_path.join(format!("{}.v", self.top_name))
    }

    /// Path to the control-interface RTL file,
    /// `<verilog_path>/<top_name>_control_s_axi.v`.
    pub fn control_rtl_path(&self) -> PathBuf {
        self.verilog_path
            .join(format!("{}_control_s_axi.v", self.top_name))
    }

    /// Resolves all scalar argument values to integers.
    pub fn scalar_values(&self) -> Result<BTreeMap<String, u64>, ConfigError> {
        let mut values = BTreeMap::new();
        for (name, value) in &self.scalar_to_val {
            let resolved = value.to_u64().ok_or_else(|| ConfigError::BadScalar {
                name: name.clone(),
                value: match value {
                    ScalarValue::Text(text) => text.clone(),
                    ScalarValue::Int(n) => n.to_string(),
                },
            })?;
            values.insert(name.clone(), resolved);
        }
        Ok(values)
    }
}

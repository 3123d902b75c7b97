//! Error types for testbench assembly.

use cosim_extract::ExtractError;

/// Errors that can occur while assembling the output artifacts.
///
/// The non-extraction variants are configuration mismatches detected at
/// assembly time: the RTL references an argument or interface the
/// configuration does not describe.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// Register-map or interface extraction failed.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// A register-map argument has no configured value and is not an AXI
    /// pointer argument.
    #[error("argument '{name}' appears in the register map but has no configured value")]
    MissingArgValue {
        /// The argument name.
        name: String,
    },

    /// An extracted AXI interface has no data file in the configuration.
    #[error("interface '{interface}' has no data file in the configuration")]
    MissingDataFile {
        /// The interface name.
        interface: String,
    },

    /// An extracted AXI interface has no element count in the configuration.
    #[error("interface '{interface}' has no array size in the configuration")]
    MissingArraySize {
        /// The interface name.
        interface: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_arg_value() {
        let err = CodegenError::MissingArgValue {
            name: "n".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "argument 'n' appears in the register map but has no configured value"
        );
    }

    #[test]
    fn display_missing_data_file() {
        let err = CodegenError::MissingDataFile {
            interface: "gmem".to_string(),
        };
        assert!(format!("{err}").contains("'gmem'"));
    }

    #[test]
    fn extract_error_passthrough() {
        let err = CodegenError::from(ExtractError::FormatMismatch {
            reason: "no 0x00 control-register line".to_string(),
        });
        assert!(format!("{err}").contains("0x00"));
    }
}

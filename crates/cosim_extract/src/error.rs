//! Error types for RTL extraction.

use std::path::PathBuf;

/// Errors that can occur while extracting structure from RTL source text.
///
/// Every variant indicates a structural mismatch between the expected and
/// actual RTL conventions; none is transient, so callers abort the whole
/// generation run rather than retry.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The RTL source file could not be read.
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The control-interface comment block violates the upstream format
    /// conventions.
    #[error("control comment format mismatch: {reason}")]
    FormatMismatch {
        /// What was violated, citing the offending line where one exists.
        reason: String,
    },

    /// An AXI interface declares only one of its address/data bus pair.
    #[error("AXI interface '{name}' declares no {missing} bus")]
    MissingInterface {
        /// The interface name.
        name: String,
        /// Which bus declaration is absent (`ARADDR` or `WDATA`).
        missing: &'static str,
    },

    /// A bus width expression did not reduce to a constant integer after
    /// parameter substitution.
    #[error("cannot resolve width expression `{expr}` for interface '{interface}': {reason}")]
    UnresolvedWidth {
        /// The interface whose width was being resolved.
        interface: String,
        /// The width expression as written in the RTL.
        expr: String,
        /// Why evaluation failed.
        reason: String,
    },
}

//! Control-register map extraction from `_control_s_axi.v` comment blocks.
//!
//! The upstream HLS generator documents the control interface's register
//! layout in a header comment block:
//!
//! ```text
//! // 0x00 : Control signals
//! //        bit 0  - ap_start (Read/Write/COH)
//! //        bit 1  - ap_done (Read/COR)
//! //        ...
//! // 0x04 : Global Interrupt Enable Register
//! // 0x10 : Data signal of n
//! // 0x1c : Data signal of a
//! // 0x20 : Data signal of a
//! ```
//!
//! The format is an external, versioned convention owned by the generator.
//! Everything the extractor relies on is checked up front against the
//! declarative tables below; any deviation is a [`FormatMismatch`] naming
//! the offending line, never a silently wrong register map.
//!
//! [`FormatMismatch`]: ExtractError::FormatMismatch

use std::path::Path;

use cosim_common::literal::hex_addr_token;
use cosim_common::RegisterMap;

use crate::error::ExtractError;

/// Address-tagged comment lines come as a group: a line mentioning any
/// member of a group must mention all of them.
const KEYWORD_GROUPS: &[&[&str]] = &[
    &["0x00", "Control signals"],
    &["0x04", "Global Interrupt Enable Register"],
    &["0x08", "IP Interrupt Enable Register"],
    &["0x0c", "IP Interrupt Status Register"],
];

/// Required bit annotations for the control/status register description
/// (the lines between the `0x00` line and the `0x04` line).
const CONTROL_BITS: &[(&str, &str)] = &[
    ("- ap_start", "bit 0"),
    ("- ap_done", "bit 1"),
    ("- ap_idle", "bit 2"),
    ("- ap_ready", "bit 3"),
    ("- auto_restart", "bit 7"),
];

/// The textual pattern of an argument register line.
const DATA_SIGNAL_MARKER: &str = " : Data signal of ";

/// Parses the register-address map out of a control-interface RTL file.
///
/// Reads the file, validates its comment block against the upstream format
/// conventions, and returns the mapping from argument name to register
/// address tokens (`'h1c` form, file order preserved per argument).
pub fn parse_register_map(path: &Path) -> Result<RegisterMap, ExtractError> {
    let source = std::fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_register_map_str(&source)
}

/// Parses the register-address map from control-interface RTL source text.
pub fn parse_register_map_str(source: &str) -> Result<RegisterMap, ExtractError> {
    let comments: Vec<&str> = source
        .lines()
        .filter(|line| line.trim_start().starts_with("//"))
        .collect();
    check_control_format(&comments)?;

    let mut map = RegisterMap::new();
    for line in &comments {
        if let Some((addr, name)) = parse_data_signal_line(line) {
            map.entry(name.to_string())
                .or_default()
                .push(hex_addr_token(addr));
        }
    }
    Ok(map)
}

/// Validates the comment block against [`KEYWORD_GROUPS`] and
/// [`CONTROL_BITS`].
fn check_control_format(comments: &[&str]) -> Result<(), ExtractError> {
    for line in comments {
        for group in KEYWORD_GROUPS {
            let hits = group.iter().filter(|kw| line.contains(*kw)).count();
            if hits != 0 && hits != group.len() {
                return Err(ExtractError::FormatMismatch {
                    reason: format!(
                        "line mentions part of the `{}` group: `{}`",
                        group[0],
                        line.trim()
                    ),
                });
            }
        }
    }

    let beg = position_of(comments, "0x00").ok_or_else(|| ExtractError::FormatMismatch {
        reason: "no 0x00 control-register line in comment block".to_string(),
    })?;
    let end = position_of(comments, "0x04").ok_or_else(|| ExtractError::FormatMismatch {
        reason: "no 0x04 global-interrupt-enable line in comment block".to_string(),
    })?;
    if end < beg {
        return Err(ExtractError::FormatMismatch {
            reason: "0x04 line precedes the 0x00 control-register line".to_string(),
        });
    }

    for line in &comments[beg..end] {
        for (signal, bit) in CONTROL_BITS {
            if line.contains(signal) && !line.contains(bit) {
                return Err(ExtractError::FormatMismatch {
                    reason: format!(
                        "`{signal}` line lacks its `{bit}` annotation: `{}`",
                        line.trim()
                    ),
                });
            }
        }
    }

    Ok(())
}

fn position_of(comments: &[&str], keyword: &str) -> Option<usize> {
    comments.iter().position(|line| line.contains(keyword))
}

/// Extracts `(address, argument)` from a `<addr> : Data signal of <name>`
/// comment line, or `None` if the line is not one.
fn parse_data_signal_line(line: &str) -> Option<(&str, &str)> {
    let pos = line.find(DATA_SIGNAL_MARKER)?;
    let addr = line[..pos].split_whitespace().last()?;
    if !addr.starts_with("0x") || addr.len() == 2 {
        return None;
    }
    if !addr[2..].chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }

    let rest = &line[pos + DATA_SIGNAL_MARKER.len()..];
    let name_end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    let name = &rest[..name_end];
    if name.is_empty() {
        return None;
    }
    Some((addr, name))
}

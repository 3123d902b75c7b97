//! AXI master interface extraction from top-level RTL.
//!
//! The upstream generator declares, per memory-mapped kernel argument, an
//! address bus and a write-data bus on the top module:
//!
//! ```text
//! output wire [63:0]                      m_axi_a_ARADDR,
//! output wire [C_M_AXI_DATA_WIDTH-1:0]    m_axi_a_WDATA,
//! ```
//!
//! Bit-range high bounds may reference `parameter` declarations from the
//! same file; they are substituted textually and the result is evaluated
//! with the restricted arithmetic evaluator in [`expr`](crate::expr),
//! never as general code.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use cosim_common::AxiInterface;

use crate::error::ExtractError;
use crate::expr::eval_const_expr;

/// Suffix of the per-interface read/write address bus.
const ADDR_SUFFIX: &str = "_ARADDR";
/// Suffix of the per-interface write data bus.
const DATA_SUFFIX: &str = "_WDATA";

/// A scanned `output [<high>:0] m_axi_<name>_<suffix>` declaration.
#[derive(Debug)]
struct BusDecl {
    name: String,
    high_expr: String,
}

/// Parses the AXI master interfaces declared by a top-level RTL file.
///
/// Returns one [`AxiInterface`] per `m_axi_<name>_WDATA` declaration, in
/// source order, with data and address widths resolved to bit counts
/// (inclusive-high range bound plus one).
pub fn parse_axi_interfaces(path: &Path) -> Result<Vec<AxiInterface>, ExtractError> {
    let source = std::fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_axi_interfaces_str(&source)
}

/// Parses the AXI master interfaces from top-level RTL source text.
pub fn parse_axi_interfaces_str(source: &str) -> Result<Vec<AxiInterface>, ExtractError> {
    let addr_decls = scan_bus_decls(source, ADDR_SUFFIX);
    let data_decls = scan_bus_decls(source, DATA_SUFFIX);
    let params = scan_parameters(source);

    let data_names: BTreeSet<&str> = data_decls.iter().map(|d| d.name.as_str()).collect();
    for decl in &addr_decls {
        if !data_names.contains(decl.name.as_str()) {
            return Err(ExtractError::MissingInterface {
                name: decl.name.clone(),
                missing: "WDATA",
            });
        }
    }

    let addr_by_name: BTreeMap<&str, &str> = addr_decls
        .iter()
        .map(|d| (d.name.as_str(), d.high_expr.as_str()))
        .collect();

    let mut interfaces = Vec::with_capacity(data_decls.len());
    for decl in &data_decls {
        let addr_expr =
            addr_by_name
                .get(decl.name.as_str())
                .ok_or_else(|| ExtractError::MissingInterface {
                    name: decl.name.clone(),
                    missing: "ARADDR",
                })?;
        let data_width = resolve_width(&decl.name, &decl.high_expr, &params)?;
        let addr_width = resolve_width(&decl.name, addr_expr, &params)?;
        interfaces.push(AxiInterface::new(&decl.name, data_width, addr_width));
    }
    Ok(interfaces)
}

/// Scans the source for `output [<expr>:0] m_axi_<name><suffix>`
/// declarations, in source order.
fn scan_bus_decls(source: &str, suffix: &str) -> Vec<BusDecl> {
    source
        .lines()
        .filter_map(|line| parse_bus_decl(line, suffix))
        .collect()
}

/// Parses a single bus declaration line, terminated by `;` or `,`.
///
/// An optional `wire` keyword between `output` and the bit range is
/// accepted; the low range bound must be a literal `0`.
fn parse_bus_decl(line: &str, suffix: &str) -> Option<BusDecl> {
    let rest = line.trim_start().strip_prefix("output")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start();
    let rest = match rest.strip_prefix("wire") {
        Some(r) if r.starts_with(char::is_whitespace) || r.starts_with('[') => r.trim_start(),
        _ => rest,
    };

    let rest = rest.strip_prefix('[')?;
    let close = rest.find(']')?;
    let (high, low) = rest[..close].split_once(':')?;
    if low.trim() != "0" {
        return None;
    }

    let after = rest[close + 1..].trim_start();
    let ident_end = after
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(after.len());
    let ident = &after[..ident_end];
    let tail = after[ident_end..].trim_start();
    if !(tail.starts_with(';') || tail.starts_with(',')) {
        return None;
    }

    let name = ident.strip_prefix("m_axi_")?.strip_suffix(suffix)?;
    if name.is_empty() {
        return None;
    }
    Some(BusDecl {
        name: name.to_string(),
        high_expr: high.trim().to_string(),
    })
}

/// Scans `parameter NAME = VALUE;` declarations. The last occurrence of a
/// name wins, matching source order.
fn scan_parameters(source: &str) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    for line in source.lines() {
        let Some(rest) = line.trim_start().strip_prefix("parameter") else {
            continue;
        };
        if !rest.starts_with(char::is_whitespace) {
            continue;
        }
        let Some((name, value)) = rest.split_once('=') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() || name.split_whitespace().count() != 1 {
            continue;
        }
        let Some(value) = value.trim().strip_suffix(';').map(str::trim) else {
            continue;
        };
        if value.is_empty() || value.split_whitespace().count() != 1 {
            continue;
        }
        params.insert(name.to_string(), value.to_string());
    }
    params
}

/// Substitutes parameters into a bit-range high-bound expression, evaluates
/// it, and converts the inclusive high bound to a width.
fn resolve_width(
    interface: &str,
    expr: &str,
    params: &BTreeMap<String, String>,
) -> Result<u32, ExtractError> {
    // Longer names first so a parameter that prefixes another cannot
    // clobber it during textual substitution.
    let mut ordered: Vec<(&String, &String)> = params.iter().collect();
    ordered.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));

    let mut substituted = expr.to_string();
    for (name, value) in ordered {
        substituted = substituted.replace(name.as_str(), value);
    }

    let unresolved = |reason: String| ExtractError::UnresolvedWidth {
        interface: interface.to_string(),
        expr: expr.to_string(),
        reason,
    };

    let high = eval_const_expr(&substituted).map_err(|e| unresolved(e.to_string()))?;
    if high < 0 {
        return Err(unresolved(format!("negative high bound {high}")));
    }
    u32::try_from(high + 1).map_err(|_| unresolved(format!("high bound {high} out of range")))
}

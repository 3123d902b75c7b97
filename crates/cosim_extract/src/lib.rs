//! Structural extraction from HLS-generated RTL source text.
//!
//! Two independent extractors pull the facts testbench generation needs out
//! of the RTL the upstream HLS generator emits:
//!
//! - **Control-register map** ([`parse_register_map`]): the comment block of
//!   the `_control_s_axi.v` file documents the register address of every
//!   kernel argument; the extractor validates the block against the
//!   generator's fixed conventions before trusting it.
//! - **AXI interfaces** ([`parse_axi_interfaces`]): the top-level RTL file
//!   declares one `m_axi_<name>_ARADDR`/`m_axi_<name>_WDATA` bus pair per
//!   memory-mapped argument; the extractor pairs them and resolves their bit
//!   widths, substituting `parameter` declarations where the widths are
//!   symbolic.
//!
//! Both extractors are pure functions over the file text (the `_str`
//! variants take the text directly) and fail loudly on any deviation from
//! the upstream conventions rather than silently mis-mapping registers.

#![warn(missing_docs)]

pub mod control;
pub mod error;
pub mod expr;
pub mod interface;

pub use control::{parse_register_map, parse_register_map_str};
pub use error::ExtractError;
pub use interface::{parse_axi_interfaces, parse_axi_interfaces_str};

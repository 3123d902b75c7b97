//! Shared value types for the fastcosim testbench generator.
//!
//! This crate provides the core data model shared by the extraction and code
//! generation crates: [`AxiInterface`] descriptions of memory-mapped master
//! interfaces, the [`RegisterMap`] from kernel argument names to control
//! register addresses, and hardware-literal parsing/formatting helpers.

#![warn(missing_docs)]

pub mod axi;
pub mod literal;
pub mod register_map;

pub use axi::AxiInterface;
pub use register_map::RegisterMap;

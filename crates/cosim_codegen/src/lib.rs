//! Testbench and memory-model RTL generation.
//!
//! Combines the extraction results (register map, AXI interface list) with
//! the co-simulation configuration into three text artifact categories:
//!
//! - the testbench module ([`generate_testbench`]), assembled by ordered
//!   concatenation of the pure block functions in [`blocks`];
//! - one behavioral AXI RAM module per interface ([`memory_models`]),
//!   pre-loaded from the caller-supplied data file;
//! - the Vivado xsim run script ([`vivado_run_script`]).
//!
//! Everything here is a pure text transformation: identical inputs produce
//! byte-identical output, and nothing is written to disk by this crate.

#![warn(missing_docs)]

pub mod axi_ram;
pub mod blocks;
pub mod error;
pub mod testbench;
pub mod vivado;

pub use axi_ram::{generate_axi_ram_module, memory_models};
pub use error::CodegenError;
pub use testbench::{assemble_testbench, generate_testbench};
pub use vivado::vivado_run_script;

//! Testbench assembly.
//!
//! The assembler composes the block functions from [`blocks`](crate::blocks)
//! by ordered concatenation: preamble, one memory-model instantiation per
//! interface, control interface, DUT instantiation, stimulus, closing. It
//! carries no formatting detail of its own.

use std::collections::BTreeMap;
use std::path::Path;

use cosim_common::{AxiInterface, RegisterMap};
use cosim_extract::parse_register_map;

use crate::blocks;
use crate::error::CodegenError;

/// Generates the testbench source for a kernel.
///
/// Parses the register map out of the control RTL file, then assembles the
/// testbench from it. Fails before producing any text if extraction fails
/// or the configuration does not cover the register map's arguments.
pub fn generate_testbench(
    top_name: &str,
    control_rtl_path: &Path,
    axi_list: &[AxiInterface],
    scalar_values: &BTreeMap<String, u64>,
) -> Result<String, CodegenError> {
    let register_map = parse_register_map(control_rtl_path)?;
    assemble_testbench(top_name, &register_map, axi_list, scalar_values)
}

/// Assembles the testbench from already-extracted inputs.
///
/// Deterministic: identical inputs yield byte-identical output.
pub fn assemble_testbench(
    top_name: &str,
    register_map: &RegisterMap,
    axi_list: &[AxiInterface],
    scalar_values: &BTreeMap<String, u64>,
) -> Result<String, CodegenError> {
    let mut tb = String::new();
    tb.push_str(&blocks::begin_block());
    tb.push('\n');
    for axi in axi_list {
        tb.push_str(&blocks::axi_ram_instance(axi));
        tb.push('\n');
    }
    tb.push_str(&blocks::control_interface_block());
    tb.push('\n');
    tb.push_str(&blocks::dut_instance(top_name, axi_list));
    tb.push('\n');
    tb.push_str(&blocks::stimulus_block(register_map, scalar_values, axi_list)?);
    tb.push_str(&blocks::end_block());
    Ok(tb)
}

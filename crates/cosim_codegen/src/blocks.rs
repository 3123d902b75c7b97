//! Testbench template blocks.
//!
//! Each block is a pure `(context) -> String` function; the assembler in
//! [`testbench`](crate::testbench) concatenates them in a fixed order. The
//! blocks themselves carry all formatting detail, so each can be checked in
//! isolation and the assembler stays free of it.

use std::collections::BTreeMap;
use std::fmt::Write;

use cosim_common::literal::word_literal;
use cosim_common::{AxiInterface, RegisterMap};

use crate::error::CodegenError;

/// Control register offset of the control/status register (`ap_start` lives
/// in bit 0, `ap_done` in bit 1).
const CTRL_ADDR: &str = "'h00";

/// Testbench preamble: timescale, module header, clock and reset drivers.
pub fn begin_block() -> String {
    r"`timescale 1 ns / 1 ps

module test ();

reg ap_clk = 1'b0;
reg ap_rst_n = 1'b0;

always #2 ap_clk = ~ap_clk;
"
    .to_string()
}

/// Wire declarations and memory-model instantiation for one AXI interface.
pub fn axi_ram_instance(axi: &AxiInterface) -> String {
    let name = &axi.name;
    let data_high = axi.data_width_bits - 1;
    let addr_high = axi.addr_width_bits - 1;
    let strb_high = axi.data_width_bytes() - 1;

    let mut out = String::new();
    writeln!(out, "// AXI master interface `{name}`").unwrap();
    for (suffix, range) in axi_signal_ranges(data_high, addr_high, strb_high) {
        writeln!(out, "wire {range:<9} m_axi_{name}_{suffix};").unwrap();
    }
    writeln!(out).unwrap();
    writeln!(out, "axi_ram_{name} u_axi_ram_{name} (").unwrap();
    writeln!(out, "  .clk(ap_clk),").unwrap();
    writeln!(out, "  .rst_n(ap_rst_n),").unwrap();
    let ports = [
        ("awid", "AWID"),
        ("awaddr", "AWADDR"),
        ("awlen", "AWLEN"),
        ("awsize", "AWSIZE"),
        ("awburst", "AWBURST"),
        ("awvalid", "AWVALID"),
        ("awready", "AWREADY"),
        ("wdata", "WDATA"),
        ("wstrb", "WSTRB"),
        ("wlast", "WLAST"),
        ("wvalid", "WVALID"),
        ("wready", "WREADY"),
        ("bid", "BID"),
        ("bresp", "BRESP"),
        ("bvalid", "BVALID"),
        ("bready", "BREADY"),
        ("arid", "ARID"),
        ("araddr", "ARADDR"),
        ("arlen", "ARLEN"),
        ("arsize", "ARSIZE"),
        ("arburst", "ARBURST"),
        ("arvalid", "ARVALID"),
        ("arready", "ARREADY"),
        ("rid", "RID"),
        ("rdata", "RDATA"),
        ("rresp", "RRESP"),
        ("rlast", "RLAST"),
        ("rvalid", "RVALID"),
        ("rready", "RREADY"),
    ];
    for (i, (port, suffix)) in ports.iter().enumerate() {
        let comma = if i + 1 == ports.len() { "" } else { "," };
        writeln!(out, "  .s_axi_{port}(m_axi_{name}_{suffix}){comma}").unwrap();
    }
    writeln!(out, ");").unwrap();
    out
}

/// The full AXI4 signal set the DUT exposes per master interface, with the
/// testbench-side range declaration for each.
fn axi_signal_ranges(
    data_high: u32,
    addr_high: u32,
    strb_high: u32,
) -> Vec<(&'static str, String)> {
    let scalar = String::new();
    vec![
        ("AWID", "[0:0]".to_string()),
        ("AWADDR", format!("[{addr_high}:0]")),
        ("AWLEN", "[7:0]".to_string()),
        ("AWSIZE", "[2:0]".to_string()),
        ("AWBURST", "[1:0]".to_string()),
        ("AWLOCK", scalar.clone()),
        ("AWCACHE", "[3:0]".to_string()),
        ("AWPROT", "[2:0]".to_string()),
        ("AWQOS", "[3:0]".to_string()),
        ("AWVALID", scalar.clone()),
        ("AWREADY", scalar.clone()),
        ("WDATA", format!("[{data_high}:0]")),
        ("WSTRB", format!("[{strb_high}:0]")),
        ("WLAST", scalar.clone()),
        ("WVALID", scalar.clone()),
        ("WREADY", scalar.clone()),
        ("BID", "[0:0]".to_string()),
        ("BRESP", "[1:0]".to_string()),
        ("BVALID", scalar.clone()),
        ("BREADY", scalar.clone()),
        ("ARID", "[0:0]".to_string()),
        ("ARADDR", format!("[{addr_high}:0]")),
        ("ARLEN", "[7:0]".to_string()),
        ("ARSIZE", "[2:0]".to_string()),
        ("ARBURST", "[1:0]".to_string()),
        ("ARLOCK", scalar.clone()),
        ("ARCACHE", "[3:0]".to_string()),
        ("ARPROT", "[2:0]".to_string()),
        ("ARQOS", "[3:0]".to_string()),
        ("ARVALID", scalar.clone()),
        ("ARREADY", scalar.clone()),
        ("RID", "[0:0]".to_string()),
        ("RDATA", format!("[{data_high}:0]")),
        ("RRESP", "[1:0]".to_string()),
        ("RLAST", scalar.clone()),
        ("RVALID", scalar.clone()),
        ("RREADY", scalar),
    ]
}

/// Control-interface signals plus the AXI4-Lite register access tasks the
/// stimulus block drives the kernel with.
pub fn control_interface_block() -> String {
    r"// s_axi_control (AXI4-Lite slave of the DUT)
reg  [11:0] s_axi_control_AWADDR = 12'h0;
reg         s_axi_control_AWVALID = 1'b0;
wire        s_axi_control_AWREADY;
reg  [31:0] s_axi_control_WDATA = 32'h0;
reg  [3:0]  s_axi_control_WSTRB = 4'hf;
reg         s_axi_control_WVALID = 1'b0;
wire        s_axi_control_WREADY;
wire [1:0]  s_axi_control_BRESP;
wire        s_axi_control_BVALID;
reg         s_axi_control_BREADY = 1'b1;
reg  [11:0] s_axi_control_ARADDR = 12'h0;
reg         s_axi_control_ARVALID = 1'b0;
wire        s_axi_control_ARREADY;
wire [31:0] s_axi_control_RDATA;
wire [1:0]  s_axi_control_RRESP;
wire        s_axi_control_RVALID;
reg         s_axi_control_RREADY = 1'b1;
wire        interrupt;

reg  [31:0] rdata = 32'h0;

task write_reg;
  input [11:0] addr;
  input [31:0] data;
  begin
    @ (posedge ap_clk);
    s_axi_control_AWADDR  = addr;
    s_axi_control_AWVALID = 1'b1;
    s_axi_control_WDATA   = data;
    s_axi_control_WVALID  = 1'b1;
    wait (s_axi_control_AWREADY && s_axi_control_WREADY);
    @ (posedge ap_clk);
    s_axi_control_AWVALID = 1'b0;
    s_axi_control_WVALID  = 1'b0;
    wait (s_axi_control_BVALID);
    @ (posedge ap_clk);
  end
endtask

task read_reg;
  input  [11:0] addr;
  output [31:0] data;
  begin
    @ (posedge ap_clk);
    s_axi_control_ARADDR  = addr;
    s_axi_control_ARVALID = 1'b1;
    wait (s_axi_control_ARREADY);
    @ (posedge ap_clk);
    s_axi_control_ARVALID = 1'b0;
    wait (s_axi_control_RVALID);
    data = s_axi_control_RDATA;
    @ (posedge ap_clk);
  end
endtask
"
    .to_string()
}

/// Device-under-test instantiation wiring the control interface and every
/// AXI master interface.
pub fn dut_instance(top_name: &str, axi_list: &[AxiInterface]) -> String {
    let mut out = String::new();
    writeln!(out, "{top_name} dut (").unwrap();
    writeln!(out, "  .ap_clk(ap_clk),").unwrap();
    writeln!(out, "  .ap_rst_n(ap_rst_n),").unwrap();
    writeln!(out, "  .interrupt(interrupt),").unwrap();
    for port in [
        "AWADDR", "AWVALID", "AWREADY", "WDATA", "WSTRB", "WVALID", "WREADY", "BRESP", "BVALID",
        "BREADY", "ARADDR", "ARVALID", "ARREADY", "RDATA", "RRESP", "RVALID", "RREADY",
    ] {
        writeln!(
            out,
            "  .s_axi_control_{port}(s_axi_control_{port}),"
        )
        .unwrap();
    }
    for (i, axi) in axi_list.iter().enumerate() {
        let name = &axi.name;
        let ranges = axi_signal_ranges(
            axi.data_width_bits - 1,
            axi.addr_width_bits - 1,
            axi.data_width_bytes() - 1,
        );
        for (j, (suffix, _)) in ranges.iter().enumerate() {
            let last = i + 1 == axi_list.len() && j + 1 == ranges.len();
            let comma = if last { "" } else { "," };
            writeln!(out, "  .m_axi_{name}_{suffix}(m_axi_{name}_{suffix}){comma}").unwrap();
        }
    }
    if axi_list.is_empty() {
        // Close the port list after the control connections.
        let trailing = out.trim_end_matches(|c| c == ',' || c == '\n').len();
        out.truncate(trailing);
        out.push('\n');
    }
    writeln!(out, ");").unwrap();
    out
}

/// Stimulus: reset, argument register writes, kernel start, completion poll.
///
/// Each argument's value is split into 32-bit words with word `i` carrying
/// bits `[32*i +: 32]`: the least-significant word goes to the first
/// (lowest) address in the argument's ascending address list. An argument
/// with neither a configured value nor a matching AXI interface (pointer
/// arguments get base address 0) is a configuration mismatch.
pub fn stimulus_block(
    register_map: &RegisterMap,
    scalar_values: &BTreeMap<String, u64>,
    axi_list: &[AxiInterface],
) -> Result<String, CodegenError> {
    let mut out = String::new();
    writeln!(out, "initial begin").unwrap();
    writeln!(out, "  ap_rst_n = 1'b0;").unwrap();
    writeln!(out, "  repeat (20) @ (posedge ap_clk);").unwrap();
    writeln!(out, "  ap_rst_n = 1'b1;").unwrap();
    writeln!(out, "  repeat (10) @ (posedge ap_clk);").unwrap();

    for (arg, addrs) in register_map {
        let value = argument_value(arg, scalar_values, axi_list)?;
        writeln!(out).unwrap();
        writeln!(out, "  // {arg} <= {value:#x}").unwrap();
        for (index, addr) in addrs.iter().enumerate() {
            let word = value_word(value, index);
            writeln!(out, "  write_reg({addr}, {});", word_literal(word)).unwrap();
        }
    }

    writeln!(out).unwrap();
    writeln!(out, "  // start the kernel and poll ap_done").unwrap();
    writeln!(out, "  write_reg({CTRL_ADDR}, 32'h00000001);").unwrap();
    writeln!(out, "  rdata = 32'h0;").unwrap();
    writeln!(out, "  while (rdata[1] !== 1'b1) begin").unwrap();
    writeln!(out, "    read_reg({CTRL_ADDR}, rdata);").unwrap();
    writeln!(out, "  end").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "  $display(\"kernel completed\");").unwrap();
    writeln!(out, "  $finish;").unwrap();
    writeln!(out, "end").unwrap();
    Ok(out)
}

/// Closing section: simulation watchdog and `endmodule`.
pub fn end_block() -> String {
    r#"
// watchdog
initial begin
  #100_000_000;
  $display("simulation timeout");
  $finish;
end

endmodule
"#
    .to_string()
}

/// Resolves the value written into an argument's registers.
///
/// Scalars come from the configuration; an argument that names an AXI
/// interface is a pointer whose base address in the memory model's address
/// space is 0.
fn argument_value(
    arg: &str,
    scalar_values: &BTreeMap<String, u64>,
    axi_list: &[AxiInterface],
) -> Result<u64, CodegenError> {
    if let Some(value) = scalar_values.get(arg) {
        return Ok(*value);
    }
    if axi_list.iter().any(|axi| axi.name == arg) {
        return Ok(0);
    }
    Err(CodegenError::MissingArgValue {
        name: arg.to_string(),
    })
}

/// Word `index` of a value under the little-endian split convention.
fn value_word(value: u64, index: usize) -> u32 {
    let shift = u32::try_from(index * 32).unwrap_or(u32::MAX);
    value.checked_shr(shift).unwrap_or(0) as u32
}

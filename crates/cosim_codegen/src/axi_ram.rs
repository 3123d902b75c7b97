//! Behavioral AXI RAM memory-model generation.
//!
//! One module is generated per AXI interface, with the interface's widths
//! baked into the parameter defaults and the backing data file baked into
//! the `$readmemh` pre-load. The model supports INCR bursts only, which is
//! all the upstream generator's kernels issue.

use std::path::Path;

use cosim_common::AxiInterface;
use cosim_config::CosimConfig;

use crate::error::CodegenError;

/// Generates the memory-model source for one interface.
///
/// `depth` is the word depth of the memory; `data_file` is read with
/// `$readmemh` at time zero. Pure text transformation, no cross-interface
/// dependency.
pub fn generate_axi_ram_module(axi: &AxiInterface, data_file: &Path, depth: u64) -> String {
    let name = &axi.name;
    let data_width = axi.data_width_bits;
    let addr_width = axi.addr_width_bits;
    let depth = depth.max(1);
    let data_file = data_file.display();

    format!(
        r#"`timescale 1 ns / 1 ps

// Behavioral AXI4 slave memory for interface `{name}`. INCR bursts only.
module axi_ram_{name} #(
    parameter DATA_WIDTH = {data_width},
    parameter ADDR_WIDTH = {addr_width},
    parameter STRB_WIDTH = DATA_WIDTH/8,
    parameter ID_WIDTH   = 1,
    parameter DEPTH      = {depth}
) (
    input  wire                    clk,
    input  wire                    rst_n,

    input  wire [ID_WIDTH-1:0]     s_axi_awid,
    input  wire [ADDR_WIDTH-1:0]   s_axi_awaddr,
    input  wire [7:0]              s_axi_awlen,
    input  wire [2:0]              s_axi_awsize,
    input  wire [1:0]              s_axi_awburst,
    input  wire                    s_axi_awvalid,
    output wire                    s_axi_awready,
    input  wire [DATA_WIDTH-1:0]   s_axi_wdata,
    input  wire [STRB_WIDTH-1:0]   s_axi_wstrb,
    input  wire                    s_axi_wlast,
    input  wire                    s_axi_wvalid,
    output wire                    s_axi_wready,
    output wire [ID_WIDTH-1:0]     s_axi_bid,
    output wire [1:0]              s_axi_bresp,
    output reg                     s_axi_bvalid,
    input  wire                    s_axi_bready,
    input  wire [ID_WIDTH-1:0]     s_axi_arid,
    input  wire [ADDR_WIDTH-1:0]   s_axi_araddr,
    input  wire [7:0]              s_axi_arlen,
    input  wire [2:0]              s_axi_arsize,
    input  wire [1:0]              s_axi_arburst,
    input  wire                    s_axi_arvalid,
    output wire                    s_axi_arready,
    output wire [ID_WIDTH-1:0]     s_axi_rid,
    output wire [DATA_WIDTH-1:0]   s_axi_rdata,
    output wire [1:0]              s_axi_rresp,
    output wire                    s_axi_rlast,
    output wire                    s_axi_rvalid,
    input  wire                    s_axi_rready
);

localparam WORD_SHIFT = $clog2(STRB_WIDTH);

reg [DATA_WIDTH-1:0] mem [0:DEPTH-1];

initial begin
  $readmemh("{data_file}", mem);
end

// write side
reg [ADDR_WIDTH-1:0] wr_addr;
reg [ID_WIDTH-1:0]   wr_id;
reg                  wr_busy;
reg [ID_WIDTH-1:0]   bid_q;
reg [DATA_WIDTH-1:0] wr_word;
integer i;

assign s_axi_awready = !wr_busy && !s_axi_bvalid;
assign s_axi_wready  = wr_busy;
assign s_axi_bid     = bid_q;
assign s_axi_bresp   = 2'b00;

always @(posedge clk) begin
  if (!rst_n) begin
    wr_busy      <= 1'b0;
    s_axi_bvalid <= 1'b0;
  end else begin
    if (s_axi_bvalid && s_axi_bready)
      s_axi_bvalid <= 1'b0;
    if (s_axi_awvalid && s_axi_awready) begin
      wr_addr <= s_axi_awaddr;
      wr_id   <= s_axi_awid;
      wr_busy <= 1'b1;
    end
    if (wr_busy && s_axi_wvalid) begin
      wr_word = mem[wr_addr >> WORD_SHIFT];
      for (i = 0; i < STRB_WIDTH; i = i + 1)
        if (s_axi_wstrb[i])
          wr_word[8*i +: 8] = s_axi_wdata[8*i +: 8];
      mem[wr_addr >> WORD_SHIFT] <= wr_word;
      wr_addr <= wr_addr + STRB_WIDTH;
      if (s_axi_wlast) begin
        wr_busy      <= 1'b0;
        bid_q        <= wr_id;
        s_axi_bvalid <= 1'b1;
      end
    end
  end
end

// read side
reg [ADDR_WIDTH-1:0] rd_addr;
reg [7:0]            rd_remain;
reg [ID_WIDTH-1:0]   rd_id;
reg                  rd_busy;

assign s_axi_arready = !rd_busy;
assign s_axi_rvalid  = rd_busy;
assign s_axi_rdata   = mem[rd_addr >> WORD_SHIFT];
assign s_axi_rlast   = (rd_remain == 8'd0);
assign s_axi_rid     = rd_id;
assign s_axi_rresp   = 2'b00;

always @(posedge clk) begin
  if (!rst_n) begin
    rd_busy <= 1'b0;
  end else begin
    if (s_axi_arvalid && s_axi_arready) begin
      rd_addr   <= s_axi_araddr;
      rd_remain <= s_axi_arlen;
      rd_id     <= s_axi_arid;
      rd_busy   <= 1'b1;
    end
    if (rd_busy && s_axi_rready) begin
      if (rd_remain == 8'd0)
        rd_busy <= 1'b0;
      else begin
        rd_remain <= rd_remain - 8'd1;
        rd_addr   <= rd_addr + STRB_WIDTH;
      end
    end
  end
end

endmodule
"#
    )
}

/// Generates `(file name, module source)` for every interface's memory
/// model, looking up each interface's data file and word depth in the
/// configuration.
pub fn memory_models(
    axi_list: &[AxiInterface],
    config: &CosimConfig,
) -> Result<Vec<(String, String)>, CodegenError> {
    let mut models = Vec::with_capacity(axi_list.len());
    for axi in axi_list {
        let data_file = config.axi_to_data_file.get(&axi.name).ok_or_else(|| {
            CodegenError::MissingDataFile {
                interface: axi.name.clone(),
            }
        })?;
        let depth = config.axi_to_c_array_size.get(&axi.name).ok_or_else(|| {
            CodegenError::MissingArraySize {
                interface: axi.name.clone(),
            }
        })?;
        let source = generate_axi_ram_module(axi, data_file, *depth);
        models.push((format!("axi_ram_{}.v", axi.name), source));
    }
    Ok(models)
}

//! The generation pipeline.
//!
//! Loads the configuration, runs both extractors, assembles every artifact
//! in memory, and only then writes the output directory: a failed
//! extraction or assembly leaves the filesystem untouched, so a run either
//! produces the full artifact set or none of it.

use std::fs;
use std::path::Path;

use cosim_codegen::{generate_testbench, memory_models, vivado_run_script};
use cosim_config::load_config;
use cosim_extract::parse_axi_interfaces;

use crate::{launch, Cli};

/// Runs the `fastcosim` generation pipeline. Returns the process exit code.
pub fn run(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_config(&cli.config_path)?;

    let axi_list = parse_axi_interfaces(&config.top_rtl_path())?;
    let scalar_values = config.scalar_values()?;
    let tb = generate_testbench(
        &config.top_name,
        &config.control_rtl_path(),
        &axi_list,
        &scalar_values,
    )?;
    let models = memory_models(&axi_list, &config)?;
    let script = vivado_run_script(&config, &cli.tb_output_dir, cli.save_waveform);

    let run_dir = cli.tb_output_dir.join("run");
    write_artifacts(&cli.tb_output_dir, &run_dir, &tb, &models, &script)?;

    if !cli.quiet {
        eprintln!("  Generated {}", cli.tb_output_dir.join("tb.v").display());
        for (file_name, _) in &models {
            eprintln!("  Generated {}", cli.tb_output_dir.join(file_name).display());
        }
        eprintln!("  Generated {}", run_dir.join("run_cosim.tcl").display());
        if cli.save_waveform {
            eprintln!(
                "  Waveform will be saved under {}",
                run_dir.join("vivado").display()
            );
        } else {
            eprintln!("  Waveform is not saved; pass --save-waveform to record it");
        }
    }

    if cli.launch_simulation {
        let code = launch::run_simulation(&run_dir, cli.print_debug_info)?;
        return Ok(code);
    }
    Ok(0)
}

/// Writes the fully-assembled artifact set to the output directory.
fn write_artifacts(
    output_dir: &Path,
    run_dir: &Path,
    tb: &str,
    models: &[(String, String)],
    script: &[String],
) -> std::io::Result<()> {
    fs::create_dir_all(output_dir)?;
    fs::write(output_dir.join("tb.v"), tb)?;
    for (file_name, source) in models {
        fs::write(output_dir.join(file_name), source)?;
    }
    fs::create_dir_all(run_dir)?;
    let mut script_text = script.join("\n");
    script_text.push('\n');
    fs::write(run_dir.join("run_cosim.tcl"), script_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    const CONTROL_RTL: &str = r#"
// 0x00 : Control signals
//        bit 0  - ap_start (Read/Write/COH)
//        bit 1  - ap_done (Read/COR)
//        bit 2  - ap_idle (Read)
//        bit 3  - ap_ready (Read)
//        bit 7  - auto_restart (Read/Write)
// 0x04 : Global Interrupt Enable Register
// 0x08 : IP Interrupt Enable Register (Read/Write)
// 0x0c : IP Interrupt Status Register (Read/TOW)
// 0x10 : Data signal of n
// 0x1c : Data signal of a
// 0x20 : Data signal of a
module VecAdd_control_s_axi ();
endmodule
"#;

    const TOP_RTL: &str = "\
module VecAdd (
  output [63:0] m_axi_a_ARADDR,
  output [63:0] m_axi_a_WDATA,
);
endmodule
";

    /// Writes a complete kernel fixture (RTL + data + config) into `dir`
    /// and returns the config path.
    fn write_fixture(dir: &Path) -> PathBuf {
        let rtl_dir = dir.join("rtl");
        fs::create_dir_all(&rtl_dir).unwrap();
        fs::write(rtl_dir.join("VecAdd.v"), TOP_RTL).unwrap();
        fs::write(rtl_dir.join("VecAdd_control_s_axi.v"), CONTROL_RTL).unwrap();
        fs::write(dir.join("a.txt"), "deadbeef\n").unwrap();

        let config_path = dir.join("cosim.json");
        fs::write(
            &config_path,
            r#"{
                "top_name": "VecAdd",
                "verilog_path": "rtl",
                "scalar_to_val": {"n": "0x0000000a"},
                "axi_to_data_file": {"a": "a.txt"},
                "axi_to_c_array_size": {"a": 16}
            }"#,
        )
        .unwrap();
        config_path
    }

    fn cli_for(config_path: &Path, output_dir: &Path) -> Cli {
        Cli::parse_from([
            "fastcosim",
            "--config-path",
            config_path.to_str().unwrap(),
            "--tb-output-dir",
            output_dir.to_str().unwrap(),
            "--quiet",
        ])
    }

    #[test]
    fn pipeline_writes_all_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_fixture(dir.path());
        let output_dir = dir.path().join("out");

        let code = run(&cli_for(&config_path, &output_dir)).unwrap();
        assert_eq!(code, 0);

        let tb = fs::read_to_string(output_dir.join("tb.v")).unwrap();
        assert!(tb.contains("VecAdd dut ("));
        assert!(tb.contains("write_reg('h10, 32'h0000000a);"));

        let ram = fs::read_to_string(output_dir.join("axi_ram_a.v")).unwrap();
        assert!(ram.contains("module axi_ram_a #("));
        // Data file path resolved against the config's directory.
        assert!(ram.contains(&dir.path().join("a.txt").display().to_string()));

        let script = fs::read_to_string(output_dir.join("run/run_cosim.tcl")).unwrap();
        assert!(script.contains("launch_simulation"));
    }

    #[test]
    fn extraction_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_fixture(dir.path());
        // Break the control comment conventions.
        fs::write(
            dir.path().join("rtl/VecAdd_control_s_axi.v"),
            "// 0x00 : something unexpected\n",
        )
        .unwrap();
        let output_dir = dir.path().join("out");

        let err = run(&cli_for(&config_path, &output_dir)).unwrap_err();
        assert!(err.to_string().contains("format mismatch"));
        assert!(!output_dir.exists());
    }

    #[test]
    fn missing_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("out");
        let err = run(&cli_for(&dir.path().join("absent.json"), &output_dir)).unwrap_err();
        assert!(err.to_string().contains("failed to read configuration"));
        assert!(!output_dir.exists());
    }

    #[test]
    fn unconfigured_interface_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_fixture(dir.path());
        // Config that names no interfaces at all.
        fs::write(
            &config_path,
            r#"{
                "top_name": "VecAdd",
                "verilog_path": "rtl",
                "scalar_to_val": {"n": "0x0000000a"}
            }"#,
        )
        .unwrap();
        let output_dir = dir.path().join("out");

        let err = run(&cli_for(&config_path, &output_dir)).unwrap_err();
        assert!(err.to_string().contains("'a'"), "{err}");
        assert!(!output_dir.exists());
    }
}

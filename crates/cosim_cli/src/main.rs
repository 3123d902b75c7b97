//! The fastcosim CLI generates Vivado xsim co-simulation testbenches for
//! HLS-generated RTL kernels.
//!
//! Reads the kernel's co-simulation configuration, extracts the control
//! register map and AXI interfaces from the generated RTL, and writes the
//! testbench, one memory model per interface, and the simulator run script.

#![warn(missing_docs)]

mod generate;
mod launch;

use std::path::PathBuf;
use std::process;

use clap::Parser;

/// Co-simulation testbench generator for HLS kernels.
#[derive(Parser, Debug)]
#[command(name = "fastcosim", version, about = "Co-simulation testbench generator")]
pub struct Cli {
    /// Path to the co-simulation configuration JSON file.
    #[arg(long)]
    pub config_path: PathBuf,

    /// Directory to write the generated testbench files into.
    #[arg(long)]
    pub tb_output_dir: PathBuf,

    /// Launch the Vivado simulation after generating the testbench.
    #[arg(long)]
    pub launch_simulation: bool,

    /// Record the simulation waveform for later inspection.
    #[arg(long)]
    pub save_waveform: bool,

    /// Show the simulator's debug output instead of filtering it.
    #[arg(long)]
    pub print_debug_info: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    pub quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    match generate::run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_required_args() {
        let cli = Cli::parse_from([
            "fastcosim",
            "--config-path",
            "cosim.json",
            "--tb-output-dir",
            "out",
        ]);
        assert_eq!(cli.config_path, PathBuf::from("cosim.json"));
        assert_eq!(cli.tb_output_dir, PathBuf::from("out"));
        assert!(!cli.launch_simulation);
        assert!(!cli.save_waveform);
        assert!(!cli.print_debug_info);
        assert!(!cli.quiet);
    }

    #[test]
    fn parse_all_flags() {
        let cli = Cli::parse_from([
            "fastcosim",
            "--config-path",
            "cosim.json",
            "--tb-output-dir",
            "out",
            "--launch-simulation",
            "--save-waveform",
            "--print-debug-info",
            "--quiet",
        ]);
        assert!(cli.launch_simulation);
        assert!(cli.save_waveform);
        assert!(cli.print_debug_info);
        assert!(cli.quiet);
    }

    #[test]
    fn parse_quiet_short_flag() {
        let cli = Cli::parse_from([
            "fastcosim",
            "--config-path",
            "c.json",
            "--tb-output-dir",
            "out",
            "-q",
        ]);
        assert!(cli.quiet);
    }

    #[test]
    fn missing_required_args_rejected() {
        assert!(Cli::try_parse_from(["fastcosim"]).is_err());
        assert!(Cli::try_parse_from(["fastcosim", "--config-path", "c.json"]).is_err());
    }
}

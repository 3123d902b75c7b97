//! Launching the external simulator.
//!
//! Thin glue around `vivado -mode batch`: the run script carries all the
//! simulation detail, this module only spawns the process from the run
//! directory and relays its output.

use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs `vivado -mode batch -source run_cosim.tcl` in `run_dir`.
///
/// The simulator's stdout is relayed line by line; DEBUG chatter is
/// suppressed unless `print_debug_info` is set. Returns the simulator's
/// exit code.
pub fn run_simulation(run_dir: &Path, print_debug_info: bool) -> io::Result<i32> {
    let mut child = Command::new("vivado")
        .args(["-mode", "batch", "-source", "run_cosim.tcl"])
        .current_dir(run_dir)
        .stdout(Stdio::piped())
        .spawn()?;

    if let Some(stdout) = child.stdout.take() {
        let reader = BufReader::new(stdout);
        let mut out = io::stdout().lock();
        for line in reader.lines() {
            let line = line?;
            if print_debug_info || !is_debug_line(&line) {
                writeln!(out, "{line}")?;
            }
        }
    }

    let status = child.wait()?;
    Ok(status.code().unwrap_or(1))
}

/// Whether a simulator output line is debug chatter.
fn is_debug_line(line: &str) -> bool {
    line.contains("DEBUG")
}

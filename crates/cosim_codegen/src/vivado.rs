//! Vivado xsim run-script generation.
//!
//! Builds the batch-mode TCL script that registers the kernel RTL and the
//! generated testbench files, then launches the behavioral simulation.

use std::path::Path;

use cosim_config::CosimConfig;

/// Builds the simulator run script as a list of TCL lines.
///
/// `output_dir` is the directory the generated `tb.v` and `axi_ram_*.v`
/// files were written to. With `save_waveform` the script logs every signal
/// so the waveform database can be inspected after the run.
pub fn vivado_run_script(
    config: &CosimConfig,
    output_dir: &Path,
    save_waveform: bool,
) -> Vec<String> {
    let mut script = vec![
        "# auto-generated by fastcosim".to_string(),
        "create_project -force cosim ./vivado".to_string(),
        format!("add_files {}", config.verilog_path.display()),
        format!("add_files {}/tb.v", output_dir.display()),
    ];
    for name in config.axi_to_data_file.keys() {
        script.push(format!("add_files {}/axi_ram_{name}.v", output_dir.display()));
    }
    script.push("set_property top test [get_filesets sim_1]".to_string());
    script.push(
        "set_property -name {xsim.simulate.runtime} -value {all} -objects [get_filesets sim_1]"
            .to_string(),
    );
    if save_waveform {
        script.push(
            "set_property -name {xsim.simulate.log_all_signals} -value {true} -objects [get_filesets sim_1]"
                .to_string(),
        );
    }
    script.push("launch_simulation".to_string());
    script.push("exit".to_string());
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosim_config::load_config_from_str;

    fn config() -> CosimConfig {
        load_config_from_str(
            r#"{
                "top_name": "VecAdd",
                "verilog_path": "/rtl",
                "axi_to_data_file": {"a": "/data/a.txt", "b": "/data/b.txt"},
                "axi_to_c_array_size": {"a": 16, "b": 16}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn registers_all_sources() {
        let script = vivado_run_script(&config(), Path::new("/out"), false);
        assert!(script.contains(&"add_files /rtl".to_string()));
        assert!(script.contains(&"add_files /out/tb.v".to_string()));
        assert!(script.contains(&"add_files /out/axi_ram_a.v".to_string()));
        assert!(script.contains(&"add_files /out/axi_ram_b.v".to_string()));
    }

    #[test]
    fn sets_testbench_top_and_runtime() {
        let script = vivado_run_script(&config(), Path::new("/out"), false);
        assert!(script.contains(&"set_property top test [get_filesets sim_1]".to_string()));
        assert!(script.iter().any(|l| l.contains("xsim.simulate.runtime")));
        assert_eq!(script.last().map(String::as_str), Some("exit"));
    }

    #[test]
    fn waveform_logging_is_opt_in() {
        let without = vivado_run_script(&config(), Path::new("/out"), false);
        assert!(!without.iter().any(|l| l.contains("log_all_signals")));

        let with = vivado_run_script(&config(), Path::new("/out"), true);
        assert!(with.iter().any(|l| l.contains("log_all_signals")));
    }

    #[test]
    fn launch_before_exit() {
        let script = vivado_run_script(&config(), Path::new("/out"), true);
        let launch = script.iter().position(|l| l == "launch_simulation").unwrap();
        let exit = script.iter().position(|l| l == "exit").unwrap();
        assert!(launch < exit);
    }
}

//! Post-parse path resolution.
//!
//! The configuration file may reference the RTL directory and the interface
//! data files with paths relative to its own location; resolution happens
//! once after parsing, so every downstream consumer sees absolute-or-anchored
//! paths and never has to know where the configuration file lived.

use std::path::{Path, PathBuf};

use crate::types::CosimConfig;

/// Resolves relative paths in the configuration against `base_dir`.
///
/// `verilog_path` and every entry in `axi_to_data_file` are rewritten;
/// absolute paths are left untouched.
pub fn resolve_paths(config: &mut CosimConfig, base_dir: &Path) {
    config.verilog_path = anchor(base_dir, &config.verilog_path);
    for path in config.axi_to_data_file.values_mut() {
        *path = anchor(base_dir, path);
    }
}

fn anchor(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    fn config_with_paths(verilog: &str, data: &str) -> CosimConfig {
        load_config_from_str(&format!(
            r#"{{
                "top_name": "VecAdd",
                "verilog_path": "{verilog}",
                "axi_to_data_file": {{"a": "{data}"}},
                "axi_to_c_array_size": {{"a": 16}}
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn relative_paths_anchored() {
        let mut config = config_with_paths("rtl", "data/a.txt");
        resolve_paths(&mut config, Path::new("/project"));
        assert_eq!(config.verilog_path, PathBuf::from("/project/rtl"));
        assert_eq!(
            config.axi_to_data_file["a"],
            PathBuf::from("/project/data/a.txt")
        );
    }

    #[test]
    fn absolute_paths_untouched() {
        let mut config = config_with_paths("/abs/rtl", "/abs/a.txt");
        resolve_paths(&mut config, Path::new("/project"));
        assert_eq!(config.verilog_path, PathBuf::from("/abs/rtl"));
        assert_eq!(config.axi_to_data_file["a"], PathBuf::from("/abs/a.txt"));
    }
}

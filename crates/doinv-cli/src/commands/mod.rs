//! CLI subcommands.

pub mod config;
pub mod extract;
pub mod run;

use doinv_core::DoinvConfig;

/// Load the configuration from an explicit path, or fall back to the
/// defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<DoinvConfig> {
    Ok(match config_path {
        Some(path) => DoinvConfig::from_file(std::path::Path::new(path))?,
        None => DoinvConfig::default(),
    })
}

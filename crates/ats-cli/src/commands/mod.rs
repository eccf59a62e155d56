//! Subcommand implementations.

pub mod analyze;
pub mod batch;
pub mod catalog;
pub mod config;
mod report;

use std::path::{Path, PathBuf};

use ats_core::AtsConfig;
use tracing::debug;

/// `~/.config/ats/config.json` (platform equivalent).
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ats")
        .join("config.json")
}

/// Config file in effect: the `--config` flag, else the default location.
pub fn config_path(explicit: Option<&str>) -> PathBuf {
    explicit.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load the configuration named by `--config`, falling back to the default
/// file when it exists and to built-in defaults otherwise.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<AtsConfig> {
    if let Some(path) = explicit {
        return AtsConfig::from_file(Path::new(path))
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path, e));
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Using config from {}", path.display());
        return AtsConfig::from_file(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e));
    }

    Ok(AtsConfig::default())
}

//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate. The cache directory is created on
//! demand; the config file path is only probed.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/clawgate/`, `~/.cache/clawgate/`
//! - macOS: `~/Library/Application Support/clawgate/`, `~/Library/Caches/clawgate/`
//! - Windows: `%APPDATA%\clawgate\`, `%LOCALAPPDATA%\clawgate\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "clawgate";

/// Get the application cache directory
/// Returns ~/.cache/clawgate/ on Linux, ~/Library/Caches/clawgate/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Get path to app config file, e.g. ~/.config/clawgate/config.toml
///
/// Only builds the path; the directory is not created.
pub fn app_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME).join("config.toml"))
}

//! Configuration and cache directory paths
//!
//! Uses platform directories via `dirs`:
//! - Linux: `~/.config/mfe-portal/`, `~/.cache/mfe-portal/`
//! - macOS: `~/Library/Application Support/mfe-portal/`, `~/Library/Caches/mfe-portal/`
//! - Windows: `%APPDATA%\mfe-portal\`, `%LOCALAPPDATA%\mfe-portal\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "mfe-portal";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
///
/// Release builds write their log files here.
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

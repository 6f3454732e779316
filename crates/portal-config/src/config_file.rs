use anyhow::{Context, Result};
use std::{
    env,
    path::{Path, PathBuf},
};

const CONFIG_FILE: &str = ".mfe-portal.toml";

/// Load config file content from CWD first, then home directory
///
/// Searches for `.mfe-portal.toml` in:
/// 1. Current working directory
/// 2. Home directory
/// 3. The platform config directory as `config.toml`
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    if let Some(home_config) = get_home_config_path() {
        if let Ok(content) = std::fs::read_to_string(&home_config) {
            log::debug!("Loaded config from {}", home_config.display());
            return Some(content);
        }
    }

    if let Ok(path) = crate::paths::app_config_path() {
        if let Ok(content) = std::fs::read_to_string(&path) {
            log::debug!("Loaded config from {}", path.display());
            return Some(content);
        }
    }

    None
}

/// Read an explicitly requested config file
///
/// Unlike [`load_config_file`], a missing file is an error here: the user
/// asked for this path on the command line.
pub fn read_config_file(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(content)
}

/// Returns ~/.mfe-portal.toml if HOME is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}

//! Application configuration
//!
//! Configuration loaded from `.mfe-portal.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration loaded from `.mfe-portal.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Organization that owns both the workflow repository and the created repositories
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Repository hosting the repository-creation workflow
    #[serde(default = "default_workflow_repository")]
    pub workflow_repository: String,

    /// Workflow file name (or numeric id) to dispatch
    #[serde(default = "default_workflow_file")]
    pub workflow_file: String,

    /// Git ref the workflow is dispatched on
    #[serde(default = "default_workflow_ref")]
    pub workflow_ref: String,

    /// Visibility requested for new repositories
    #[serde(default = "default_repository_visibility")]
    pub repository_visibility: String,

    /// How long a toast stays on screen
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u64,

    /// Offsets (seconds after the trigger) at which the progress display advances
    #[serde(default = "default_progress_offsets_secs")]
    pub progress_offsets_secs: Vec<u64>,
}

fn default_owner() -> String {
    "mfepocautomation".to_string()
}

fn default_workflow_repository() -> String {
    "mfe-repository-factory".to_string()
}

fn default_workflow_file() -> String {
    "create-mfe-repository.yml".to_string()
}

fn default_workflow_ref() -> String {
    "main".to_string()
}

fn default_repository_visibility() -> String {
    "private".to_string()
}

fn default_toast_seconds() -> u64 {
    5
}

fn default_progress_offsets_secs() -> Vec<u64> {
    vec![3, 6, 12, 18, 20]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            workflow_repository: default_workflow_repository(),
            workflow_file: default_workflow_file(),
            workflow_ref: default_workflow_ref(),
            repository_visibility: default_repository_visibility(),
            toast_seconds: default_toast_seconds(),
            progress_offsets_secs: default_progress_offsets_secs(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Load config from an explicit path; parse errors are reported, not defaulted
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = crate::read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

//! Configuration and file management for mfe-portal
//!
//! This crate provides:
//! - File path utilities for config and cache directories
//! - Configuration file discovery (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::{load_config_file, read_config_file};
pub use paths::{cache_dir, config_dir};

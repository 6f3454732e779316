//! Command line arguments

use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mfe-portal")]
#[command(about = "Developer portal for creating micro frontend repositories")]
#[command(version)]
pub struct Cli {
    /// Read configuration from this file instead of searching for .mfe-portal.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Organization that owns the workflow and the created repositories
    #[arg(long, value_name = "ORG")]
    pub owner: Option<String>,

    /// Panel shown at startup: dashboard, create-mfe, repositories, packages or settings
    #[arg(long, value_name = "ID")]
    pub panel: Option<String>,

    /// Log level, overrides RUST_LOG
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

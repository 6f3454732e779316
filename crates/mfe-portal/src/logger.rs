//! File-based logging using simplelog
//!
//! Log file location depends on build type:
//! - Debug builds: current working directory
//! - Release builds: cache directory (~/.cache/mfe-portal/ on Linux)

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

fn log_file_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("debug-{}.log", timestamp);

    if cfg!(debug_assertions) {
        PathBuf::from(filename)
    } else {
        portal_config::cache_dir()
            .map(|dir| dir.join(&filename))
            .unwrap_or_else(|_| PathBuf::from(filename))
    }
}

/// Level from `RUST_LOG`, Debug when unset, Info when unrecognized
fn level_from_env(value: Option<&str>) -> LevelFilter {
    match value.map(str::to_lowercase).as_deref() {
        None => LevelFilter::Debug,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        Some(_) => LevelFilter::Info,
    }
}

/// Initialize file-based logging, returning the log file path
///
/// `level` wins over `RUST_LOG`.
pub fn init(level: Option<LevelFilter>) -> io::Result<PathBuf> {
    let log_file = log_file_path();
    let level = level.unwrap_or_else(|| level_from_env(std::env::var("RUST_LOG").ok().as_deref()));

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c)
        .build();

    let file = File::create(&log_file)?;
    WriteLogger::init(level, config, file).map_err(io::Error::other)?;

    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_env() {
        assert_eq!(level_from_env(None), LevelFilter::Debug);
        assert_eq!(level_from_env(Some("WARN")), LevelFilter::Warn);
        assert_eq!(level_from_env(Some("trace")), LevelFilter::Trace);
        assert_eq!(level_from_env(Some("mfe_portal=debug")), LevelFilter::Info);
    }
}

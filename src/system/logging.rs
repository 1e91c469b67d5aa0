//! Logging system initialization
//!
//! The terminal belongs to the UI while it runs, so logs never go to
//! stdout/stderr: they go to a file, or nowhere.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;

/// Initialize logging based on configuration
///
/// Returns `None` when `logging.file` is empty (logging disabled). The
/// returned guard must be kept alive for the duration of the program so
/// buffered log lines get flushed.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    if config.file.trim().is_empty() {
        return Ok(None);
    }

    let log_path = Path::new(&config.file);
    let writer: Box<dyn std::io::Write + Send + Sync> = if config.enable_rotation {
        let dir = log_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let filename = log_path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("linkform.log");
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(config.max_backups as usize)
            .build(dir)
            .context("Failed to create rolling log appender")?;
        Box::new(appender)
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", config.file))?;
        Box::new(file)
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .with_context(|| format!("Invalid log level filter '{}'", config.level))?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(false);

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_disables_logging() {
        let config = LoggingConfig {
            file: String::new(),
            ..Default::default()
        };
        assert!(init_logging(&config).unwrap().is_none());
    }
}

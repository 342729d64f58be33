//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so it only logs when a file is configured.
//! CLI subcommands fall back to stderr.

use std::fs::{self, OpenOptions};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::model::LogConfig;

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Interactive session: file only
    Tui,
    /// One-shot command: file if configured, else stderr
    Cli,
}

/// Build the env filter: `RUST_LOG` wins, then the configured level.
pub fn build_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Keep the returned guard alive until exit so
/// buffered lines are flushed.
pub fn init(config: &LogConfig, target: LogTarget) -> Option<WorkerGuard> {
    let filter = build_filter(config);

    if let Some(path) = &config.file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            let _ = fs::create_dir_all(parent);
        }
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                let (writer, guard) = tracing_appender::non_blocking(file);
                let _ = tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().with_ansi(false).with_writer(writer))
                    .try_init();
                return Some(guard);
            }
            Err(e) => {
                eprintln!("warning: could not open log file {}: {}", path.display(), e);
                if target == LogTarget::Tui {
                    return None;
                }
            }
        }
    }

    if target == LogTarget::Cli {
        let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(writer))
            .try_init();
        return Some(guard);
    }

    None
}

//! Logging infrastructure for movmux.
//!
//! All library code logs through `tracing`. The binary calls
//! [`init_tracing`] once at startup, which:
//! - Respects the RUST_LOG environment variable
//! - Falls back to the configured level
//! - Writes to stderr, and optionally to a timestamped file

mod types;

pub use types::LogLevel;

use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize global tracing subscriber for application-wide logging.
///
/// When `log_dir` is given, logs are also written to
/// `movmux_<timestamp>.log` in that directory. The returned guard must be
/// kept alive until exit so the file writer is flushed.
pub fn init_tracing(
    default_level: LogLevel,
    log_dir: Option<&Path>,
) -> io::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_filter_str()));

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time();

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::never(dir, log_file_name());
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

/// File name for a new log file.
fn log_file_name() -> PathBuf {
    PathBuf::from(format!(
        "movmux_{}.log",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_name_is_timestamped() {
        let name = log_file_name();
        let name = name.to_string_lossy();
        assert!(name.starts_with("movmux_"));
        assert!(name.ends_with(".log"));
        // movmux_YYYYmmdd_HHMMSS.log
        assert_eq!(name.len(), "movmux_".len() + 15 + ".log".len());
    }

    #[test]
    fn level_to_filter_works() {
        assert_eq!(LogLevel::Debug.as_filter_str(), "debug");
        assert_eq!(LogLevel::Info.as_filter_str(), "info");
    }
}

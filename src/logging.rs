// Logging
// File-backed tracing subscriber; stdout belongs to the terminal UI

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "info";
const LOG_FILE_ENV: &str = "PORTFOLIO_LOG_FILE";

static LOGGING_INITIALIZED: OnceLock<PathBuf> = OnceLock::new();

/// Where log output goes: `$PORTFOLIO_LOG_FILE`, or `portfolio-tui.log` in the temp dir
pub fn log_file_path() -> PathBuf {
    std::env::var_os(LOG_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("portfolio-tui.log"))
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

/// Initialize the process-wide tracing subscriber
///
/// `RUST_LOG` takes precedence over the default filter. Safe to call more
/// than once; later calls return the path chosen by the first. If the log
/// file cannot be opened the app runs without logging and `None` is returned.
pub fn init_logging() -> Option<PathBuf> {
    init_logging_at(log_file_path())
}

fn init_logging_at(path: PathBuf) -> Option<PathBuf> {
    if let Some(path) = LOGGING_INITIALIZED.get() {
        return Some(path.clone());
    }

    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(err) => {
            // The terminal is not in raw mode yet
            eprintln!("Warning: {:#}, continuing without logs", err);
            return None;
        }
    };

    let path = LOGGING_INITIALIZED.get_or_init(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = fmt()
            .with_env_filter(env_filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init();
        path
    });
    Some(path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_file_is_named() {
        if std::env::var_os(LOG_FILE_ENV).is_none() {
            assert!(log_file_path().ends_with("portfolio-tui.log"));
        }
    }

    #[test]
    fn test_init_logging_can_be_called_multiple_times() {
        let first = init_logging();
        let second = init_logging();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unwritable_log_file_disables_logging_instead_of_failing() {
        let bad = std::env::temp_dir().join("portfolio-tui-no-such-dir").join("nested").join("log.txt");
        assert!(open_log_file(&bad).is_err());

        // Either no subscriber, or the one another test already installed
        assert_ne!(init_logging_at(bad.clone()), Some(bad));
    }
}

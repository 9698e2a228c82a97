//! Tracing subscriber initialization.
//!
//! codepane owns the terminal, so logs go to a file; watch them with
//! `tail -f` in another terminal. Respects `RUST_LOG`, defaulting to
//! "info".

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Could not create the log directory.
    #[error("failed to create log directory {path:?}: {source}")]
    DirectoryCreation {
        /// Directory that failed to be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The log path has no usable file name component.
    #[error("invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// A global subscriber was already installed.
    #[error("tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Install a file-backed tracing subscriber.
///
/// Creates the log directory on demand and writes without ANSI escapes.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;
    let directory = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn temp_log(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join("codepane_logging_tests")
            .join(name)
            .join("codepane.log")
    }

    #[test]
    #[serial(tracing_init)]
    fn init_creates_missing_log_directory() {
        let log_path = temp_log("creates_dir");
        let _ = std::fs::remove_dir_all(log_path.parent().unwrap());

        // First init in the process wins; later ones report the
        // subscriber as already set. Either way the directory must
        // exist afterwards.
        match init(&log_path) {
            Ok(()) | Err(LoggingError::SubscriberAlreadySet) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
        assert!(log_path.parent().unwrap().exists());
    }

    #[test]
    #[serial(tracing_init)]
    fn second_init_reports_already_set() {
        let first = init(&temp_log("first"));
        let second = init(&temp_log("second"));
        // At least one of the two must hit the already-set path.
        assert!(
            matches!(first, Err(LoggingError::SubscriberAlreadySet))
                || matches!(second, Err(LoggingError::SubscriberAlreadySet))
        );
    }

    #[test]
    fn rejects_path_without_file_name() {
        let result = init(Path::new("/"));
        assert!(matches!(result, Err(LoggingError::InvalidPath(_))));
    }
}

//! Error taxonomy for the codepane application.
//!
//! Errors are hierarchical and built with `thiserror` so they compose via
//! `?` and `From`. The split mirrors how failures are recovered:
//!
//! - [`InputError`] — the file given on the command line cannot be read.
//!   Fatal at startup; codepane cannot open an editor on nothing.
//! - [`AppError`] — top-level wrapper for everything the event loop can
//!   surface, including terminal I/O failures.
//!
//! Everything else in the system is deliberately *not* an error: a style key
//! missing from a theme, a registry offset with no element, or a trigger
//! substring absent from a line are all ordinary `None` results routed to
//! fallbacks. A malformed theme color is coerced to a miss and logged at
//! `warn`. A completion/overload provider failure opens an empty overlay.
//! None of these may abort a keystroke or crash the editing session.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// Returned from the event loop and from startup. Domain errors convert into
/// this via `From`, so call sites propagate with `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// The file to edit could not be read.
    #[error("failed to read input: {0}")]
    Input(#[from] InputError),

    /// Terminal setup, draw, or teardown failed in the crossterm/ratatui
    /// layer.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failure to load the file named on the command line.
#[derive(Debug, Error)]
pub enum InputError {
    /// The path does not exist or is not readable.
    #[error("cannot open {path:?}: {source}")]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not valid UTF-8 text.
    #[error("{path:?} is not UTF-8 text")]
    NotText {
        /// Path with non-text content.
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_displays_path() {
        let err = InputError::NotText {
            path: PathBuf::from("/tmp/blob.bin"),
        };
        assert!(err.to_string().contains("blob.bin"));
    }

    #[test]
    fn input_error_converts_to_app_error() {
        fn fails() -> Result<(), AppError> {
            Err(InputError::NotText {
                path: PathBuf::from("x"),
            })?;
            Ok(())
        }
        assert!(matches!(fails(), Err(AppError::Input(_))));
    }

    #[test]
    fn io_error_converts_to_terminal_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let app: AppError = io.into();
        assert!(matches!(app, AppError::Terminal(_)));
    }
}

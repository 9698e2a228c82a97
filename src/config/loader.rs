//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read the config file (permissions, not a file, ...).
    #[error("failed to read config file at {path}: {reason}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// The config file is not valid TOML for this schema.
    #[error("invalid TOML in {path}: {reason}")]
    Parse {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; anything not specified falls back to the
/// built-in default. Lives at `~/.config/codepane/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Theme name (e.g. "dark-plus", "gruvbox-dark").
    #[serde(default)]
    pub theme: Option<String>,

    /// Path to a user theme JSON file, added to the store at startup.
    #[serde(default)]
    pub theme_file: Option<PathBuf>,

    /// Path to the tracing log file.
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Zero-based line indices the range decorator scans.
    #[serde(default)]
    pub decorated_lines: Option<Vec<usize>>,

    /// Whether the status bar is rendered.
    #[serde(default)]
    pub show_status_bar: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Active theme name.
    pub theme: String,
    /// Optional user theme JSON file.
    pub theme_file: Option<PathBuf>,
    /// Tracing log file path.
    pub log_file: PathBuf,
    /// Lines scanned by the range decorator.
    pub decorated_lines: Vec<usize>,
    /// Whether the status bar is rendered.
    pub show_status_bar: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            theme: "dark-plus".to_string(),
            theme_file: None,
            log_file: default_log_path(),
            decorated_lines: vec![1],
            show_status_bar: true,
        }
    }
}

/// Default log file path: `~/.local/state/codepane/codepane.log` on
/// Unix-like systems, the platform equivalent elsewhere, the current
/// directory when no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("codepane").join("codepane.log"),
        None => PathBuf::from("codepane.log"),
    }
}

/// Default config file path: `~/.config/codepane/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("codepane").join("config.toml"))
}

/// Load a config file from a specific path.
///
/// A missing file is not an error; defaults apply. A file that exists
/// but cannot be read or parsed is.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with path precedence: explicit `--config` path,
/// then `CODEPANE_CONFIG`, then the default path.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }
    if let Ok(env_path) = std::env::var("CODEPANE_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }
    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }
    Ok(None)
}

/// Merge an optional config file over the built-in defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();
    let Some(config) = config_file else {
        return defaults;
    };
    ResolvedConfig {
        theme: config.theme.unwrap_or(defaults.theme),
        theme_file: config.theme_file.or(defaults.theme_file),
        log_file: config.log_file.unwrap_or(defaults.log_file),
        decorated_lines: config.decorated_lines.unwrap_or(defaults.decorated_lines),
        show_status_bar: config.show_status_bar.unwrap_or(defaults.show_status_bar),
    }
}

/// Apply environment overrides: `CODEPANE_THEME` replaces the theme.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(theme) = std::env::var("CODEPANE_THEME") {
        config.theme = theme;
    }
    config
}

/// Apply CLI argument overrides (highest precedence).
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    theme: Option<String>,
    theme_file: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(theme) = theme {
        config.theme = theme;
    }
    if let Some(theme_file) = theme_file {
        config.theme_file = Some(theme_file);
    }
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

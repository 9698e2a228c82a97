//! codepane - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use codepane::state::EditorState;
use codepane::theme::ThemeStore;
use codepane::view::ColorConfig;

/// TUI code-editing pane with inline elements, decorations, themes, and
/// completion/overload overlays.
#[derive(Parser, Debug)]
#[command(name = "codepane")]
#[command(version)]
#[command(about = "TUI code-editing pane with inline augmentation")]
pub struct Args {
    /// Path to a text file to open (a built-in sample buffer if not
    /// provided)
    pub file: Option<PathBuf>,

    /// Theme name (e.g. dark-plus, light, gruvbox-dark, nord)
    #[arg(long)]
    pub theme: Option<String>,

    /// Path to a user theme JSON file, added to the theme store
    #[arg(long)]
    pub theme_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Precedence chain: defaults, config file, env vars, CLI args.
    let config = {
        let config_file = codepane::config::load_config_with_precedence(args.config.clone())?;
        let merged = codepane::config::merge_config(config_file);
        let with_env = codepane::config::apply_env_overrides(merged);
        codepane::config::apply_cli_overrides(with_env, args.theme.clone(), args.theme_file.clone())
    };

    codepane::logging::init(&config.log_file)?;
    info!(config = ?config, "configuration loaded and resolved");

    let editor = match &args.file {
        Some(path) => EditorState::open(path)?,
        None => EditorState::sample(),
    };

    let mut store = ThemeStore::builtin();
    if let Some(theme_file) = &config.theme_file {
        match store.load_json(theme_file) {
            Ok(name) => info!(theme = name, path = %theme_file.display(), "user theme loaded"),
            Err(e) => warn!(path = %theme_file.display(), error = %e, "user theme rejected"),
        }
    }

    let color = ColorConfig::from_env_and_args(args.no_color);
    codepane::view::run(editor, store, &config, color)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn help_does_not_error() {
        let result = Args::try_parse_from(["codepane", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn version_does_not_error() {
        let result = Args::try_parse_from(["codepane", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn no_args_defaults() {
        let args = Args::parse_from(["codepane"]);
        assert_eq!(args.file, None);
        assert_eq!(args.theme, None);
        assert_eq!(args.theme_file, None);
        assert_eq!(args.config, None);
        assert!(!args.no_color);
    }

    #[test]
    fn file_path_populates_file_field() {
        let args = Args::parse_from(["codepane", "main.rs"]);
        assert_eq!(args.file, Some(PathBuf::from("main.rs")));
    }

    #[test]
    fn theme_flag() {
        let args = Args::parse_from(["codepane", "--theme", "nord"]);
        assert_eq!(args.theme, Some("nord".to_string()));
    }

    #[test]
    fn theme_file_flag() {
        let args = Args::parse_from(["codepane", "--theme-file", "mytheme.json"]);
        assert_eq!(args.theme_file, Some(PathBuf::from("mytheme.json")));
    }

    #[test]
    fn config_path_flag() {
        let args = Args::parse_from(["codepane", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn no_color_flag() {
        let args = Args::parse_from(["codepane", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn combined_flags() {
        let args = Args::parse_from([
            "codepane",
            "lib.rs",
            "--theme",
            "gruvbox-dark",
            "--no-color",
        ]);
        assert_eq!(args.file, Some(PathBuf::from("lib.rs")));
        assert_eq!(args.theme, Some("gruvbox-dark".to_string()));
        assert!(args.no_color);
    }

    #[test]
    fn theme_flows_through_config_precedence_chain() {
        use codepane::config::{apply_cli_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            theme: Some("light".to_string()),
            ..ConfigFile::default()
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(merged.theme, "light");

        let with_cli = apply_cli_overrides(merged, Some("nord".to_string()), None);
        assert_eq!(with_cli.theme, "nord");
    }

    #[test]
    fn theme_default_is_dark_plus() {
        use codepane::config::ResolvedConfig;

        let config = ResolvedConfig::default();
        assert_eq!(config.theme, "dark-plus");
    }
}

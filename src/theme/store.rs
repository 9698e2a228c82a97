//! Theme store - named StyleKey-to-raw-color dictionaries.
//!
//! Built-in themes use VS Code-style key names. A theme may omit any key;
//! the resolver's fallback chain covers the gap. User themes can be added
//! from JSON files (flat `key: "#rrggbb"` map, or an object with a
//! `colors` map as VS Code themes are shaped).

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

/// A named dictionary from style keys to raw color strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    name: String,
    /// Name of the syntax-highlighting theme the tokenizer collaborator
    /// should use alongside this UI theme.
    syntax_theme: String,
    colors: HashMap<String, String>,
}

impl Theme {
    /// Build a theme from static (key, raw color) pairs.
    pub fn from_pairs(
        name: impl Into<String>,
        syntax_theme: impl Into<String>,
        pairs: &[(&str, &str)],
    ) -> Self {
        Self {
            name: name.into(),
            syntax_theme: syntax_theme.into(),
            colors: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Theme name shown in the picker.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Syntax theme identifier for the tokenizer collaborator.
    pub fn syntax_theme(&self) -> &str {
        &self.syntax_theme
    }

    /// The raw (unparsed) color string stored for a key, if present.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.colors.get(key).map(String::as_str)
    }

    /// Parse a theme from JSON.
    ///
    /// Accepts either a flat `{ "editor.background": "#112233", ... }` map
    /// or an object carrying `name`, `syntaxTheme`, and a `colors` map.
    pub fn from_json_str(default_name: &str, json: &str) -> Result<Self, ThemeLoadError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ThemeLoadError::Json(e.to_string()))?;
        let object = value
            .as_object()
            .ok_or_else(|| ThemeLoadError::Shape("top-level value is not an object".into()))?;

        let name = object
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or(default_name)
            .to_string();
        let syntax_theme = object
            .get("syntaxTheme")
            .and_then(|v| v.as_str())
            .unwrap_or("base16-ocean-dark")
            .to_string();

        let color_map = match object.get("colors") {
            Some(colors) => colors
                .as_object()
                .ok_or_else(|| ThemeLoadError::Shape("\"colors\" is not an object".into()))?,
            None => object,
        };

        let colors = color_map
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
            .collect();

        Ok(Self {
            name,
            syntax_theme,
            colors,
        })
    }
}

/// Failure to load a user theme file.
#[derive(Debug, Error)]
pub enum ThemeLoadError {
    /// The file could not be read.
    #[error("cannot read theme file: {0}")]
    Read(String),
    /// The file is not valid JSON.
    #[error("theme file is not valid JSON: {0}")]
    Json(String),
    /// The JSON is valid but not theme-shaped.
    #[error("theme file has unexpected shape: {0}")]
    Shape(String),
}

/// Owns the named themes and the active selection.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    themes: Vec<Theme>,
    active: usize,
}

impl ThemeStore {
    /// Store preloaded with the built-in themes; the first is active.
    pub fn builtin() -> Self {
        Self {
            themes: vec![dark_plus(), light(), gruvbox_dark(), nord()],
            active: 0,
        }
    }

    /// Names of all themes, in picker order.
    pub fn names(&self) -> Vec<&str> {
        self.themes.iter().map(Theme::name).collect()
    }

    /// Number of themes in the store.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether the store holds no themes. Never true for [`builtin`].
    ///
    /// [`builtin`]: ThemeStore::builtin
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Look up a theme by name.
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.name == name)
    }

    /// The currently active theme.
    pub fn active(&self) -> &Theme {
        &self.themes[self.active]
    }

    /// Index of the currently active theme in picker order.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Switch the active theme by name. Returns false (and keeps the
    /// current selection) when no theme has that name.
    pub fn set_active(&mut self, name: &str) -> bool {
        match self.themes.iter().position(|t| t.name == name) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    /// Switch the active theme by picker index, clamped to the store.
    pub fn set_active_index(&mut self, index: usize) {
        debug_assert!(index < self.themes.len(), "theme index {index} out of range");
        self.active = index.min(self.themes.len().saturating_sub(1));
    }

    /// Add a theme, replacing any existing theme with the same name.
    pub fn add(&mut self, theme: Theme) {
        match self.themes.iter().position(|t| t.name == theme.name) {
            Some(index) => self.themes[index] = theme,
            None => self.themes.push(theme),
        }
    }

    /// Load a user theme from a JSON file and add it to the store.
    /// Returns the loaded theme's name.
    pub fn load_json(&mut self, path: &Path) -> Result<String, ThemeLoadError> {
        let json =
            std::fs::read_to_string(path).map_err(|e| ThemeLoadError::Read(e.to_string()))?;
        let default_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("custom");
        let theme = Theme::from_json_str(default_name, &json)?;
        let name = theme.name().to_string();
        self.add(theme);
        Ok(name)
    }
}

// ===== Built-in themes =====

fn dark_plus() -> Theme {
    Theme::from_pairs(
        "dark-plus",
        "visual-studio-dark-plus",
        &[
            ("editor.background", "#1e1e1e"),
            ("editor.foreground", "#d4d4d4"),
            ("editor.selectionBackground", "#264f78"),
            ("editor.lineHighlightBackground", "#2a2d2e"),
            ("editorLineNumber.foreground", "#858585"),
            ("statusBar.background", "#007acc"),
            ("statusBar.foreground", "#ffffff"),
            ("sideBar.background", "#252526"),
            ("window.background", "#1e1e1e"),
            ("window.foreground", "#cccccc"),
        ],
    )
}

fn light() -> Theme {
    // Deliberately sparse: no status bar or window keys, exercising the
    // fixed and copy-from fallback chains.
    Theme::from_pairs(
        "light",
        "inspired-github",
        &[
            ("editor.background", "#ffffff"),
            ("editor.foreground", "#1f1f1f"),
            ("editor.selectionBackground", "#add6ff"),
            ("editor.lineHighlightBackground", "#f3f3f3"),
            ("editorLineNumber.foreground", "#6e7681"),
            ("sideBar.background", "#f8f8f8"),
        ],
    )
}

fn gruvbox_dark() -> Theme {
    Theme::from_pairs(
        "gruvbox-dark",
        "gruvbox-dark",
        &[
            ("editor.background", "#282828"),
            ("editor.foreground", "#ebdbb2"),
            ("editor.selectionBackground", "#504945"),
            ("editor.lineHighlightBackground", "#3c3836"),
            ("editorLineNumber.foreground", "#7c6f64"),
            ("statusBar.background", "#3c3836"),
            ("statusBar.foreground", "#ebdbb2"),
            ("sideBar.background", "#32302f"),
        ],
    )
}

fn nord() -> Theme {
    Theme::from_pairs(
        "nord",
        "nord",
        &[
            ("editor.background", "#2e3440"),
            ("editor.foreground", "#d8dee9"),
            ("editor.selectionBackground", "#434c5e"),
            ("editor.lineHighlightBackground", "#3b4252"),
            ("editorLineNumber.foreground", "#4c566a"),
            ("statusBar.background", "#3b4252"),
            ("statusBar.foreground", "#d8dee9"),
            ("sideBar.background", "#2e3440"),
            ("window.background", "#2e3440"),
            ("window.foreground", "#eceff4"),
        ],
    )
}

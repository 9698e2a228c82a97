//! ThemeStyleResolver - semantic key resolution with fallback.
//!
//! Every themed surface is declared once in [`BINDINGS`], an explicit
//! registration table mapping each [`Surface`] to its style key and a
//! [`Fallback`]. A theme change runs [`apply_theme`], which walks the
//! whole table synchronously and rebuilds [`SurfaceStyles`] in full, so
//! there is no frame where only some surfaces reflect the new theme, and
//! no surface is ever left unstyled.
//!
//! Fallbacks are either a fixed application default or a copy of another
//! surface resolved earlier in the same pass. The table is ordered so
//! producers (editor background/foreground) come before their consumers
//! (window background/foreground); a `CopyFrom` may only reference a
//! surface declared above it.

use ratatui::style::Color;
use tracing::warn;

use super::color::parse_color;
use super::store::Theme;

// ===== Surfaces =====

/// Every themeable UI surface, in resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Text area background.
    EditorBackground,
    /// Text area default foreground.
    EditorForeground,
    /// Selection highlight background.
    SelectionHighlight,
    /// Background of the caret's line.
    CurrentLine,
    /// Line-number column foreground.
    GutterForeground,
    /// Status bar background.
    StatusBarBackground,
    /// Status bar foreground.
    StatusBarForeground,
    /// Side margin (left rail) background.
    SideMarginBackground,
    /// Outermost frame background.
    WindowBackground,
    /// Outermost frame foreground (chrome text).
    WindowForeground,
}

impl Surface {
    /// All surfaces, in resolution order.
    pub const ALL: [Surface; 10] = [
        Surface::EditorBackground,
        Surface::EditorForeground,
        Surface::SelectionHighlight,
        Surface::CurrentLine,
        Surface::GutterForeground,
        Surface::StatusBarBackground,
        Surface::StatusBarForeground,
        Surface::SideMarginBackground,
        Surface::WindowBackground,
        Surface::WindowForeground,
    ];

    fn slot(self) -> usize {
        Self::ALL
            .iter()
            .position(|&s| s == self)
            .unwrap_or_default()
    }
}

/// What to use when the theme omits a surface's key (or stores a value
/// that does not parse as a color).
#[derive(Debug, Clone, Copy)]
pub enum Fallback {
    /// A fixed application default.
    Fixed(Color),
    /// Copy the value resolved for another surface earlier in this pass.
    CopyFrom(Surface),
}

/// One row of the registration table.
#[derive(Debug, Clone, Copy)]
pub struct StyleBinding {
    /// The surface being styled.
    pub surface: Surface,
    /// Theme dictionary key consulted first.
    pub key: &'static str,
    /// Used when the key is absent or malformed.
    pub fallback: Fallback,
}

/// The registration table. Order matters: `CopyFrom` reads surfaces
/// resolved earlier in the same pass, so editor surfaces precede the
/// window surfaces that copy from them.
pub const BINDINGS: [StyleBinding; 10] = [
    StyleBinding {
        surface: Surface::EditorBackground,
        key: "editor.background",
        fallback: Fallback::Fixed(Color::Rgb(0x1e, 0x1e, 0x1e)),
    },
    StyleBinding {
        surface: Surface::EditorForeground,
        key: "editor.foreground",
        fallback: Fallback::Fixed(Color::Rgb(0xd4, 0xd4, 0xd4)),
    },
    StyleBinding {
        surface: Surface::SelectionHighlight,
        key: "editor.selectionBackground",
        fallback: Fallback::Fixed(Color::Rgb(0x26, 0x4f, 0x78)),
    },
    StyleBinding {
        surface: Surface::CurrentLine,
        key: "editor.lineHighlightBackground",
        fallback: Fallback::CopyFrom(Surface::EditorBackground),
    },
    StyleBinding {
        surface: Surface::GutterForeground,
        key: "editorLineNumber.foreground",
        fallback: Fallback::CopyFrom(Surface::EditorForeground),
    },
    StyleBinding {
        surface: Surface::StatusBarBackground,
        key: "statusBar.background",
        fallback: Fallback::Fixed(Color::Rgb(0x00, 0x7a, 0xcc)),
    },
    StyleBinding {
        surface: Surface::StatusBarForeground,
        key: "statusBar.foreground",
        fallback: Fallback::Fixed(Color::Rgb(0xff, 0xff, 0xff)),
    },
    StyleBinding {
        surface: Surface::SideMarginBackground,
        key: "sideBar.background",
        fallback: Fallback::CopyFrom(Surface::EditorBackground),
    },
    StyleBinding {
        surface: Surface::WindowBackground,
        key: "window.background",
        fallback: Fallback::CopyFrom(Surface::EditorBackground),
    },
    StyleBinding {
        surface: Surface::WindowForeground,
        key: "window.foreground",
        fallback: Fallback::CopyFrom(Surface::EditorForeground),
    },
];

// ===== Resolution =====

/// Resolve one style key against a theme.
///
/// Returns `None` when the key is absent or the stored value fails to
/// parse as a color; a malformed value is additionally logged, since it
/// means the theme file has a bug the user may want to know about.
pub fn resolve(theme: &Theme, key: &str) -> Option<Color> {
    let raw = theme.raw(key)?;
    match parse_color(raw) {
        Some(color) => Some(color),
        None => {
            warn!(theme = theme.name(), key, raw, "malformed theme color, using fallback");
            None
        }
    }
}

/// Fully-resolved colors for every surface.
///
/// Rebuilt in full by [`apply_theme`] on every theme change; never
/// partially invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceStyles {
    colors: [Color; Surface::ALL.len()],
}

impl SurfaceStyles {
    /// The resolved color for a surface.
    pub fn get(&self, surface: Surface) -> Color {
        self.colors[surface.slot()]
    }

    /// All-default styles, used when colors are disabled (`--no-color`,
    /// `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            colors: [Color::Reset; Surface::ALL.len()],
        }
    }
}

/// Run the full registration table against a theme.
///
/// Synchronous and total: every surface in [`BINDINGS`] is resolved, in
/// declaration order, before this returns. Each surface takes its theme
/// value when present and parseable, otherwise its registered fallback.
pub fn apply_theme(theme: &Theme) -> SurfaceStyles {
    let mut colors = [Color::Reset; Surface::ALL.len()];
    for binding in &BINDINGS {
        let resolved = match resolve(theme, binding.key) {
            Some(color) => color,
            None => match binding.fallback {
                Fallback::Fixed(color) => color,
                // Table order guarantees the source surface was already
                // resolved in this pass.
                Fallback::CopyFrom(source) => {
                    debug_assert!(
                        source.slot() < binding.surface.slot(),
                        "CopyFrom must reference an earlier surface"
                    );
                    colors[source.slot()]
                }
            },
        };
        colors[binding.surface.slot()] = resolved;
    }
    SurfaceStyles { colors }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

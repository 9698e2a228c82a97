//! Tokenizer/grammar collaborator glue (syntect + two-face).
//!
//! Tokenization itself is out of this crate's hands: syntect supplies
//! grammars, two-face supplies embedded themes. This module resolves a
//! grammar scope from a file extension, highlights buffer lines against
//! the active theme's syntax theme, and is rebuilt whenever the UI theme
//! changes (the "applied theme" notification). Highlighting failure
//! degrades to a plain unstyled line.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use std::sync::LazyLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::FontStyle;
use syntect::parsing::SyntaxSet;
use two_face::theme::{EmbeddedLazyThemeSet, EmbeddedThemeName};

/// Grammar definitions, loaded once.
static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(two_face::syntax::extra_newlines);

/// Embedded syntax themes, loaded once.
static THEME_SET: LazyLock<EmbeddedLazyThemeSet> = LazyLock::new(two_face::theme::extra);

/// Map a UI theme's syntax-theme identifier to an embedded theme.
fn embedded_theme(name: &str) -> EmbeddedThemeName {
    match name {
        "visual-studio-dark-plus" => EmbeddedThemeName::VisualStudioDarkPlus,
        "inspired-github" => EmbeddedThemeName::InspiredGithub,
        "gruvbox-dark" => EmbeddedThemeName::GruvboxDark,
        "gruvbox-light" => EmbeddedThemeName::GruvboxLight,
        "nord" => EmbeddedThemeName::Nord,
        "dracula" => EmbeddedThemeName::Dracula,
        "monokai" => EmbeddedThemeName::MonokaiExtended,
        "solarized-dark" => EmbeddedThemeName::SolarizedDark,
        "solarized-light" => EmbeddedThemeName::SolarizedLight,
        _ => EmbeddedThemeName::Base16OceanDark,
    }
}

/// Per-buffer line highlighter bound to one grammar and one syntax
/// theme.
///
/// Rebuild with [`LineHighlighter::for_extension`] on every theme change
/// so token colors track the active theme.
#[derive(Debug, Clone)]
pub struct LineHighlighter {
    theme: EmbeddedThemeName,
    /// Grammar name resolved from the file extension; `None` renders
    /// plain text.
    syntax_name: Option<String>,
}

impl LineHighlighter {
    /// Resolve the grammar scope for a file extension (e.g. `"rs"`)
    /// under the given syntax theme. Unknown extensions fall back to
    /// plain text.
    pub fn for_extension(extension: Option<&str>, syntax_theme: &str) -> Self {
        let syntax_name = extension
            .and_then(|ext| SYNTAX_SET.find_syntax_by_extension(ext))
            .map(|s| s.name.clone());
        Self {
            theme: embedded_theme(syntax_theme),
            syntax_name,
        }
    }

    /// Whether a real grammar was resolved (false means plain text).
    pub fn has_grammar(&self) -> bool {
        self.syntax_name.is_some()
    }

    /// Highlight a whole buffer, one styled `Line` per input line.
    ///
    /// Lines that fail to highlight come back unstyled; the pass never
    /// fails as a whole.
    pub fn highlight(&self, lines: &[String]) -> Vec<Line<'static>> {
        let syntax = self
            .syntax_name
            .as_deref()
            .and_then(|name| SYNTAX_SET.find_syntax_by_name(name))
            .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());
        let theme = THEME_SET.get(self.theme);
        let mut highlighter = HighlightLines::new(syntax, theme);

        lines
            .iter()
            .map(|text| {
                // Grammars expect the trailing newline they were compiled
                // with; strip it back out of the rendered spans.
                let with_newline = format!("{text}\n");
                match highlighter.highlight_line(&with_newline, &SYNTAX_SET) {
                    Ok(regions) => {
                        let spans: Vec<Span<'static>> = regions
                            .into_iter()
                            .map(|(style, chunk)| {
                                Span::styled(
                                    chunk.trim_end_matches('\n').to_string(),
                                    syntect_style(style),
                                )
                            })
                            .filter(|span| !span.content.is_empty())
                            .collect();
                        Line::from(spans)
                    }
                    Err(_) => Line::from(text.clone()),
                }
            })
            .collect()
    }
}

/// Convert a syntect style to a ratatui style (foreground + font style;
/// backgrounds come from the theme surface pass, not the tokenizer).
fn syntect_style(style: syntect::highlighting::Style) -> Style {
    let mut out = Style::default().fg(Color::Rgb(
        style.foreground.r,
        style.foreground.g,
        style.foreground.b,
    ));
    if style.font_style.contains(FontStyle::BOLD) {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        out = out.add_modifier(Modifier::UNDERLINED);
    }
    out
}

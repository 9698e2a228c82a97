//! RangeDecorator - substring-triggered text decorations.
//!
//! Operates per rendered line, independently of syntax highlighting. A rule
//! table maps trigger substrings to decoration kinds; a line filter selects
//! which lines are scanned at all. For each rule the first occurrence of
//! the trigger (case-sensitive) yields a [`DecorationRange`] over the exact
//! character span. A trigger that does not occur is a no-op, never an
//! error.
//!
//! Applying ranges to an already-styled line is non-destructive: the
//! decoration's modifier is added to whatever colors and modifiers each
//! affected character already carries, so overlapping decorations of
//! different kinds both render. Modifiers are a bit set, so applying the
//! same range twice is idempotent.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::model::{DecorationKind, DecorationRange};

// ===== Rules and line selection =====

/// One trigger-substring-to-decoration mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecorationRule {
    /// Substring that triggers the decoration (case-sensitive).
    pub needle: String,
    /// Decoration applied over the first occurrence.
    pub kind: DecorationKind,
}

impl DecorationRule {
    /// Create a rule.
    pub fn new(needle: impl Into<String>, kind: DecorationKind) -> Self {
        Self {
            needle: needle.into(),
            kind,
        }
    }
}

/// Which lines the decorator scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineFilter {
    /// Scan every line.
    All,
    /// Scan only the listed zero-based line indices.
    Lines(Vec<usize>),
}

impl LineFilter {
    /// Whether the given line index is selected for scanning.
    pub fn selects(&self, line_index: usize) -> bool {
        match self {
            LineFilter::All => true,
            LineFilter::Lines(lines) => lines.contains(&line_index),
        }
    }
}

// ===== RangeDecorator =====

/// Scans selected lines for trigger substrings and emits decoration
/// ranges.
#[derive(Debug, Clone)]
pub struct RangeDecorator {
    rules: Vec<DecorationRule>,
    filter: LineFilter,
}

impl RangeDecorator {
    /// Create a decorator from a rule table and a line filter.
    pub fn new(rules: Vec<DecorationRule>, filter: LineFilter) -> Self {
        Self { rules, filter }
    }

    /// Default policy: underline "underline" and strike "strike", scanning
    /// only the second line of the buffer.
    pub fn default_policy() -> Self {
        Self::new(
            vec![
                DecorationRule::new("underline", DecorationKind::Underline),
                DecorationRule::new("strike", DecorationKind::Strikethrough),
            ],
            LineFilter::Lines(vec![1]),
        )
    }

    /// Replace the line filter, keeping the rule table.
    pub fn with_filter(mut self, filter: LineFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The decoration ranges for one line of text.
    ///
    /// Returns an empty vector when the line is not selected by the filter
    /// or no trigger occurs. Offsets are character offsets into `text`.
    pub fn ranges_for(&self, line_index: usize, text: &str) -> Vec<DecorationRange> {
        if !self.filter.selects(line_index) {
            return Vec::new();
        }
        self.rules
            .iter()
            .filter_map(|rule| first_occurrence(text, &rule.needle).map(|(start, len)| {
                DecorationRange::new(start, start + len, rule.kind)
            }))
            .collect()
    }
}

/// First occurrence of `needle` in `text` as (char offset, char length).
fn first_occurrence(text: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    let byte_start = text.find(needle)?;
    let char_start = text[..byte_start].chars().count();
    Some((char_start, needle.chars().count()))
}

// ===== Application to styled lines =====

/// Merge decoration ranges into an already-styled line.
///
/// The line's spans are split at range boundaries; characters inside a
/// range gain the range's modifier on top of their existing style. Spans
/// with identical styles are re-merged afterwards, so undecorated lines
/// come back unchanged.
pub fn apply_to_line(line: Line<'static>, ranges: &[DecorationRange]) -> Line<'static> {
    if ranges.is_empty() {
        return line;
    }

    // Explode into per-character styles, compose, and rebuild runs.
    let mut chars: Vec<(char, Style)> = Vec::new();
    for span in &line.spans {
        for ch in span.content.chars() {
            chars.push((ch, span.style));
        }
    }
    for (offset, (_, style)) in chars.iter_mut().enumerate() {
        for range in ranges {
            if range.contains(offset) {
                *style = style.add_modifier(range.kind.modifier());
            }
        }
    }

    let mut spans: Vec<Span<'static>> = Vec::new();
    for (ch, style) in chars {
        match spans.last_mut() {
            Some(last) if last.style == style => last.content.to_mut().push(ch),
            _ => spans.push(Span::styled(ch.to_string(), style)),
        }
    }
    Line::from(spans).style(line.style)
}

#[cfg(test)]
#[path = "decor_tests.rs"]
mod tests;

//! Text-run decoration types.
//!
//! A decoration is a visual modifier (underline, strikethrough) over a span
//! of characters in one rendered line. Decorations are independent of syntax
//! highlighting and compose with it: applying a decoration never replaces
//! colors or modifiers already on the affected run.

use ratatui::style::Modifier;

/// The kind of visual modifier a decoration applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    /// Underline the affected characters.
    Underline,
    /// Strike through the affected characters.
    Strikethrough,
}

impl DecorationKind {
    /// The ratatui modifier bit this decoration contributes.
    pub fn modifier(self) -> Modifier {
        match self {
            DecorationKind::Underline => Modifier::UNDERLINED,
            DecorationKind::Strikethrough => Modifier::CROSSED_OUT,
        }
    }
}

/// A decoration over `[start, end)` character offsets within one line.
///
/// Ranges may overlap; overlapping ranges of different kinds both render.
/// Ranges are recomputed on every line render pass and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecorationRange {
    /// First decorated character (inclusive, char offset in the line).
    pub start: usize,
    /// One past the last decorated character (exclusive).
    pub end: usize,
    /// Which modifier to apply.
    pub kind: DecorationKind,
}

impl DecorationRange {
    /// Construct a range. `start <= end` is the caller's invariant.
    pub fn new(start: usize, end: usize, kind: DecorationKind) -> Self {
        debug_assert!(start <= end, "decoration range reversed: {start}..{end}");
        Self { start, end, kind }
    }

    /// Whether the given character offset falls inside this range.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

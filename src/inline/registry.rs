//! InlineElementRegistry - offset-anchored inline widgets.
//!
//! The registry owns the (offset, element) collection. It is pure state:
//! the renderer polls it once per visible line per layout pass via
//! [`InlineElementRegistry::first_offset_from`] and
//! [`InlineElementRegistry::element_at`]; nothing here touches rendering.

use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

use super::offset_index::{Entry, OffsetIndex};

/// A non-text widget rendered inline with text at a buffer offset.
///
/// In a terminal the widget is a styled glyph run (a badge, a pill, an
/// icon). Elements are never mutated in place; replace by remove + insert.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineElement {
    /// The glyph run to splice into the text flow.
    pub glyph: String,
    /// Style applied to the glyph run.
    pub style: Style,
}

impl InlineElement {
    /// Create an element from a glyph run and style.
    pub fn new(glyph: impl Into<String>, style: Style) -> Self {
        Self {
            glyph: glyph.into(),
            style,
        }
    }

    /// Display columns the element occupies.
    pub fn width(&self) -> usize {
        self.glyph.width()
    }
}

/// Collection of inline elements keyed by buffer offset.
#[derive(Debug, Clone, Default)]
pub struct InlineElementRegistry {
    index: OffsetIndex<InlineElement>,
}

impl InlineElementRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            index: OffsetIndex::new(),
        }
    }

    /// Anchor an element at `offset`.
    pub fn insert(&mut self, offset: usize, element: InlineElement) {
        self.index.insert(offset, element);
    }

    /// Remove the first-inserted element at exactly `offset`.
    pub fn remove(&mut self, offset: usize) -> Option<InlineElement> {
        self.index.remove(offset)
    }

    /// Smallest anchored offset ≥ `start`, if any.
    ///
    /// The renderer calls this to find the next interesting offset in the
    /// line it is laying out; `None` means the rest of the line is plain
    /// text.
    pub fn first_offset_from(&self, start: usize) -> Option<usize> {
        self.index.first_offset_from(start)
    }

    /// The element anchored exactly at `offset`.
    ///
    /// Duplicate offsets resolve to the first-inserted element.
    pub fn element_at(&self, offset: usize) -> Option<&InlineElement> {
        self.index.get(offset)
    }

    /// Elements anchored in `[start, end)`, in offset order.
    pub fn elements_in(&self, start: usize, end: usize) -> &[Entry<InlineElement>] {
        self.index.range(start, end)
    }

    /// Number of anchored elements.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the registry has no elements.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

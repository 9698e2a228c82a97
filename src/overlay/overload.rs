//! Call-overload hint state and providers.

use tracing::warn;

use super::completion::ProviderError;

/// One overload: a signature header and a description body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverloadItem {
    /// Signature line shown in bold.
    pub header: String,
    /// Description shown under the header.
    pub content: String,
}

impl OverloadItem {
    /// Create an item.
    pub fn new(header: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            content: content.into(),
        }
    }
}

/// Pluggable source of overload items.
pub trait OverloadProvider {
    /// The ordered (header, content) list for the call site.
    fn items(&self) -> Result<Vec<OverloadItem>, ProviderError>;
}

/// Demo provider with a fixed signature set.
#[derive(Debug, Clone)]
pub struct SignatureListProvider {
    items: Vec<OverloadItem>,
}

impl SignatureListProvider {
    /// Provider over an explicit item list.
    pub fn new(items: Vec<OverloadItem>) -> Self {
        Self { items }
    }

    /// The demo set: three overloads of a write call.
    pub fn demo() -> Self {
        Self::new(vec![
            OverloadItem::new(
                "write(text: &str)",
                "Write a string at the caret position.",
            ),
            OverloadItem::new(
                "write(text: &str, offset: usize)",
                "Write a string at an explicit buffer offset.",
            ),
            OverloadItem::new(
                "write(bytes: &[u8], offset: usize)",
                "Write raw bytes at an explicit buffer offset.",
            ),
        ])
    }
}

impl OverloadProvider for SignatureListProvider {
    fn items(&self) -> Result<Vec<OverloadItem>, ProviderError> {
        Ok(self.items.clone())
    }
}

/// Open overload hint: ordered items plus a zero-based selection.
#[derive(Debug, Clone, Default)]
pub struct OverloadHintState {
    items: Vec<OverloadItem>,
    selected: usize,
}

impl OverloadHintState {
    /// Open a hint over a provider's items.
    ///
    /// Provider failure degrades to an empty hint; the keystroke that
    /// opened the overlay is never lost.
    pub fn open(provider: &dyn OverloadProvider) -> Self {
        let items = match provider.items() {
            Ok(items) => items,
            Err(err) => {
                warn!(%err, "opening overload hint with empty item list");
                Vec::new()
            }
        };
        Self { items, selected: 0 }
    }

    /// Number of overloads.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// The item at an index.
    pub fn item_at(&self, index: usize) -> Option<&OverloadItem> {
        self.items.get(index)
    }

    /// Zero-based selected index.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Change the selection.
    ///
    /// Out-of-range is a programming error: asserted in debug builds,
    /// clamped in release. Header, content, and position text all read
    /// the new selection as soon as this returns.
    pub fn set_selected_index(&mut self, index: usize) {
        debug_assert!(
            self.items.is_empty() || index < self.items.len(),
            "overload index {index} out of range 0..{}",
            self.items.len()
        );
        self.selected = index.min(self.items.len().saturating_sub(1));
    }

    /// Select the next overload, wrapping past the end.
    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    /// Select the previous overload, wrapping past the start.
    pub fn select_prev(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + self.items.len() - 1) % self.items.len();
        }
    }

    /// Header of the selected overload.
    pub fn header(&self) -> Option<&str> {
        self.items.get(self.selected).map(|i| i.header.as_str())
    }

    /// Content of the selected overload.
    pub fn content(&self) -> Option<&str> {
        self.items.get(self.selected).map(|i| i.content.as_str())
    }

    /// Position text in the form `"{index+1} of {count}"`, or
    /// `"0 of 0"` when the provider returned nothing.
    pub fn current_index_text(&self) -> String {
        if self.items.is_empty() {
            return "0 of 0".to_string();
        }
        format!("{} of {}", self.selected + 1, self.items.len())
    }
}

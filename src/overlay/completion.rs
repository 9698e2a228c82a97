//! Completion list state and candidate providers.

use thiserror::Error;
use tracing::warn;

use crate::model::CompletionItem;

/// A candidate data source failed to produce candidates.
///
/// Never fatal: the overlay opens with an empty list and the keystroke
/// proceeds.
#[derive(Debug, Error)]
#[error("completion provider unavailable: {0}")]
pub struct ProviderError(pub String);

/// Pluggable candidate source for the completion list.
///
/// Production behavior is a language-analysis collaborator; the shipped
/// [`WordListProvider`] serves a fixed ordered demo set.
pub trait CompletionProvider {
    /// The full candidate list, in provider order.
    fn candidates(&self) -> Result<Vec<CompletionItem>, ProviderError>;
}

/// Demo provider backed by a fixed ordered word list.
#[derive(Debug, Clone)]
pub struct WordListProvider {
    items: Vec<CompletionItem>,
}

impl WordListProvider {
    /// Provider over an explicit item list.
    pub fn new(items: Vec<CompletionItem>) -> Self {
        Self { items }
    }

    /// The demo set: a large ordered list of plausible member names.
    pub fn demo() -> Self {
        let words: &[(&str, &str)] = &[
            ("append", "append a value to the end"),
            ("as_bytes", "view the contents as bytes"),
            ("capacity", "allocated capacity"),
            ("chars", "iterator over characters"),
            ("clear", "remove all contents"),
            ("clone", "duplicate the value"),
            ("contains", "test for a substring"),
            ("drain", "remove and yield a range"),
            ("ends_with", "test the suffix"),
            ("find", "first index of a pattern"),
            ("insert", "insert at an index"),
            ("is_empty", "whether there is no content"),
            ("iter", "iterator over elements"),
            ("join", "concatenate with a separator"),
            ("len", "number of elements"),
            ("lines", "iterator over lines"),
            ("parse", "convert to another type"),
            ("pop", "remove the last element"),
            ("push", "append one element"),
            ("remove", "remove at an index"),
            ("replace", "replace pattern matches"),
            ("retain", "keep matching elements"),
            ("reverse", "reverse in place"),
            ("sort", "sort in place"),
            ("split", "iterator over separated parts"),
            ("starts_with", "test the prefix"),
            ("to_lowercase", "lowercased copy"),
            ("to_string", "owned string copy"),
            ("to_uppercase", "uppercased copy"),
            ("trim", "strip surrounding whitespace"),
            ("truncate", "shorten to a length"),
        ];
        Self::new(
            words
                .iter()
                .map(|(w, d)| CompletionItem::word(*w, *d))
                .collect(),
        )
    }
}

impl CompletionProvider for WordListProvider {
    fn candidates(&self) -> Result<Vec<CompletionItem>, ProviderError> {
        Ok(self.items.clone())
    }
}

/// Open completion list: full candidate set, typed-prefix filter, and
/// selection cursor over the filtered view.
#[derive(Debug, Clone, Default)]
pub struct CompletionListState {
    items: Vec<CompletionItem>,
    filter: String,
    selected: usize,
}

impl CompletionListState {
    /// Open a list over a provider's candidates.
    ///
    /// Provider failure degrades to an empty list; the keystroke that
    /// opened the overlay is never lost.
    pub fn open(provider: &dyn CompletionProvider) -> Self {
        let items = match provider.candidates() {
            Ok(items) => items,
            Err(err) => {
                warn!(%err, "opening completion with empty candidate list");
                Vec::new()
            }
        };
        Self {
            items,
            filter: String::new(),
            selected: 0,
        }
    }

    /// Candidates whose display text starts with the typed filter, in
    /// provider order.
    pub fn visible(&self) -> Vec<&CompletionItem> {
        self.items
            .iter()
            .filter(|item| item.display_text.starts_with(&self.filter))
            .collect()
    }

    /// The typed prefix filter.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Selection cursor within [`visible`](Self::visible).
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The currently selected candidate, if the filtered view is
    /// non-empty.
    pub fn selected_item(&self) -> Option<&CompletionItem> {
        self.visible().get(self.selected).copied()
    }

    /// Narrow the filter by one typed character, resetting the cursor to
    /// the first remaining candidate.
    pub fn push_filter_char(&mut self, c: char) {
        self.filter.push(c);
        self.selected = 0;
    }

    /// Widen the filter by one character (backspace), resetting the
    /// cursor.
    pub fn pop_filter_char(&mut self) {
        self.filter.pop();
        self.selected = 0;
    }

    /// Move the selection cursor down, clamping at the last visible
    /// candidate.
    pub fn select_next(&mut self) {
        let visible = self.visible().len();
        if visible > 0 {
            self.selected = (self.selected + 1).min(visible - 1);
        }
    }

    /// Move the selection cursor up, clamping at zero.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// The text a commit would insert, if anything is selected.
    pub fn commit(&self) -> Option<String> {
        self.selected_item().map(|item| item.insert_text.clone())
    }
}

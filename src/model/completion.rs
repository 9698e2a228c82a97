//! Completion candidate type.

/// A single entry in the completion list.
///
/// `display_text` is what the list shows; `insert_text` is what a commit
/// inserts at the caret (they differ for e.g. snippet-style candidates).
/// Candidate order is the provider's order unless the host re-sorts by
/// `priority`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionItem {
    /// Text shown in the completion list.
    pub display_text: String,
    /// Text inserted into the buffer when the candidate is committed.
    pub insert_text: String,
    /// Host-defined sort weight. Higher sorts earlier when re-sorting.
    pub priority: i32,
    /// One-line description shown next to the selected candidate.
    pub description: String,
}

impl CompletionItem {
    /// Candidate whose display and insert text are the same word.
    pub fn word(text: impl Into<String>, description: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            insert_text: text.clone(),
            display_text: text,
            priority: 0,
            description: description.into(),
        }
    }
}

//! EditorState - the text buffer host.
//!
//! Owns the line-addressed buffer, the caret, and the augmentation
//! components the renderer polls: the inline element registry, the range
//! decorator, and the overlay controller. Character insertion mutates
//! the buffer first and then feeds the character to the overlay state
//! machine; commit events coming back from the machine are applied to
//! the buffer before the keystroke handler returns.

use std::path::Path;

use ratatui::style::{Color, Modifier, Style};
use tracing::info;

use crate::decor::{LineFilter, RangeDecorator};
use crate::inline::{InlineElement, InlineElementRegistry};
use crate::model::InputError;
use crate::overlay::{OverlayController, OverlayEvent};

/// Embedded sample buffer, shown when no file is given (the second line
/// carries the default decoration triggers).
const SAMPLE: &str = "\
// codepane sample buffer
// try to underline this line, or strike this part of it
fn main() {
    let greeting = String::from(\"hello\");
    println!(\"{greeting}, world\");
}

struct Caret {
    line: usize,
    column: usize,
}
";

/// Caret position: zero-based line and character column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Caret {
    /// Zero-based buffer line.
    pub line: usize,
    /// Zero-based character column within the line.
    pub column: usize,
}

/// The text buffer host and its augmentation components.
#[derive(Debug)]
pub struct EditorState {
    lines: Vec<String>,
    caret: Caret,
    file_name: Option<String>,
    extension: Option<String>,
    /// Top visible line for the render pass.
    scroll: usize,
    overlay: OverlayController,
    registry: InlineElementRegistry,
    decorator: RangeDecorator,
}

impl EditorState {
    /// Editor over explicit text content.
    pub fn from_text(text: &str, file_name: Option<String>) -> Self {
        let extension = file_name
            .as_deref()
            .and_then(|name| Path::new(name).extension()?.to_str().map(str::to_string));
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            caret: Caret::default(),
            file_name,
            extension,
            scroll: 0,
            overlay: OverlayController::default(),
            registry: InlineElementRegistry::new(),
            decorator: RangeDecorator::default_policy(),
        }
    }

    /// Editor over the embedded sample buffer, with demo inline
    /// elements anchored into it.
    pub fn sample() -> Self {
        let mut editor = Self::from_text(SAMPLE, Some("sample.rs".to_string()));
        editor.seed_demo_elements();
        editor
    }

    /// Editor over a file read from disk.
    pub fn open(path: &Path) -> Result<Self, InputError> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::InvalidData {
                InputError::NotText {
                    path: path.to_path_buf(),
                }
            } else {
                InputError::Open {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string);
        info!(?path, "opened file");
        Ok(Self::from_text(&text, file_name))
    }

    /// Anchor a few demo badges at fixed offsets of the sample buffer.
    fn seed_demo_elements(&mut self) {
        let badge = |text: &str, color: Color| {
            InlineElement::new(
                text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        };
        // End of the first line and just before main's opening brace.
        let first_line_end = self.line_start_offset(1).saturating_sub(1);
        self.registry.insert(first_line_end, badge("◆", Color::Yellow));
        let main_line = self.line_start_offset(2);
        self.registry.insert(main_line + 3, badge("[fn]", Color::Cyan));
    }

    // ===== Buffer access =====

    /// All buffer lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// One line's text, if the index is in range.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Number of buffer lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Display name of the buffer.
    pub fn file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("[scratch]")
    }

    /// File extension used to resolve the grammar scope.
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Global character offset where a line starts (newlines count one
    /// character each).
    pub fn line_start_offset(&self, line: usize) -> usize {
        self.lines
            .iter()
            .take(line)
            .map(|l| l.chars().count() + 1)
            .sum()
    }

    /// Global character offset of the caret.
    pub fn caret_offset(&self) -> usize {
        self.line_start_offset(self.caret.line) + self.caret.column
    }

    // ===== Caret =====

    /// Current caret position.
    pub fn caret(&self) -> Caret {
        self.caret
    }

    /// Top visible line for rendering.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Keep the caret inside a viewport of `visible_rows` lines.
    pub fn adjust_scroll(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        if self.caret.line < self.scroll {
            self.scroll = self.caret.line;
        } else if self.caret.line >= self.scroll + visible_rows {
            self.scroll = self.caret.line - visible_rows + 1;
        }
    }

    /// Move the caret one column left, stopping at the line start.
    pub fn move_left(&mut self) {
        self.caret.column = self.caret.column.saturating_sub(1);
    }

    /// Move the caret one column right, stopping at the line end.
    pub fn move_right(&mut self) {
        let len = self.current_line_len();
        self.caret.column = (self.caret.column + 1).min(len);
    }

    /// Move the caret up a line, clamping the column.
    pub fn move_up(&mut self) {
        self.caret.line = self.caret.line.saturating_sub(1);
        self.clamp_column();
    }

    /// Move the caret down a line, clamping the column.
    pub fn move_down(&mut self) {
        self.caret.line = (self.caret.line + 1).min(self.lines.len() - 1);
        self.clamp_column();
    }

    fn current_line_len(&self) -> usize {
        self.lines
            .get(self.caret.line)
            .map(|l| l.chars().count())
            .unwrap_or(0)
    }

    fn clamp_column(&mut self) {
        self.caret.column = self.caret.column.min(self.current_line_len());
    }

    // ===== Editing =====

    /// Insert one character at the caret and feed it to the overlay
    /// state machine. Commit events are applied to the buffer before
    /// this returns; all events are passed back for observers.
    ///
    /// A commit replaces the typed filter prefix with the candidate's
    /// insert text, keeping the committing character after it: typing
    /// `x.le ` yields `x.len `, not `x.le len`.
    pub fn insert_char(&mut self, c: char) -> Vec<OverlayEvent> {
        let filter_len = self
            .overlay
            .completion_mut()
            .map(|list| list.filter().chars().count())
            .unwrap_or(0);
        self.insert_at_caret(&c.to_string());
        let events = self.overlay.on_char(c);
        for event in &events {
            if let OverlayEvent::CompletionCommitted(text) = event {
                self.replace_typed_prefix(filter_len, 1, text);
            }
        }
        events
    }

    /// Commit the completion selection explicitly (Enter), replacing the
    /// typed filter prefix with the candidate's insert text.
    pub fn commit_completion(&mut self) -> Vec<OverlayEvent> {
        use crate::overlay::OverlayKind;
        let (filter_len, committed) = match self.overlay.completion_mut() {
            Some(list) => (list.filter().chars().count(), list.commit()),
            None => (0, None),
        };
        match committed {
            Some(text) => {
                self.replace_typed_prefix(filter_len, 0, &text);
                let mut events = self.overlay.notify_closed(OverlayKind::Completion);
                events.insert(0, OverlayEvent::CompletionCommitted(text));
                events
            }
            None => self.overlay.notify_closed(OverlayKind::Completion),
        }
    }

    /// Replace the `filter_len` typed filter characters sitting
    /// `trailing` columns before the caret with the committed text.
    /// `trailing` is 1 when a committing character was just inserted
    /// after the filter, 0 for an explicit commit.
    fn replace_typed_prefix(&mut self, filter_len: usize, trailing: usize, text: &str) {
        let start_col = self.caret.column.saturating_sub(trailing + filter_len);
        let line = &mut self.lines[self.caret.line];
        let start = byte_of(line, start_col);
        let end = byte_of(line, start_col + filter_len);
        line.replace_range(start..end, text);
        self.caret.column = self.caret.column.saturating_sub(filter_len) + text.chars().count();
    }

    /// Delete the character before the caret. While the completion list
    /// is open, backspace also widens its filter.
    pub fn backspace(&mut self) {
        if let Some(list) = self.overlay.completion_mut() {
            list.pop_filter_char();
        }
        if self.caret.column == 0 {
            if self.caret.line > 0 {
                let removed = self.lines.remove(self.caret.line);
                self.caret.line -= 1;
                self.caret.column = self.current_line_len();
                self.lines[self.caret.line].push_str(&removed);
            }
            return;
        }
        let column = self.caret.column - 1;
        let byte = byte_of(&self.lines[self.caret.line], column);
        self.lines[self.caret.line].remove(byte);
        self.caret.column = column;
    }

    /// Split the current line at the caret.
    pub fn newline(&mut self) {
        let byte = byte_of(&self.lines[self.caret.line], self.caret.column);
        let rest = self.lines[self.caret.line].split_off(byte);
        self.lines.insert(self.caret.line + 1, rest);
        self.caret.line += 1;
        self.caret.column = 0;
    }

    fn insert_at_caret(&mut self, text: &str) {
        let line = &mut self.lines[self.caret.line];
        let byte = byte_of(line, self.caret.column);
        line.insert_str(byte, text);
        self.caret.column += text.chars().count();
    }

    // ===== Augmentation components =====

    /// The overlay state machine.
    pub fn overlay(&self) -> &OverlayController {
        &self.overlay
    }

    /// Mutable overlay access for selection keys and dismissal.
    pub fn overlay_mut(&mut self) -> &mut OverlayController {
        &mut self.overlay
    }

    /// The inline element registry the renderer polls.
    pub fn registry(&self) -> &InlineElementRegistry {
        &self.registry
    }

    /// Mutable registry access for the host.
    pub fn registry_mut(&mut self) -> &mut InlineElementRegistry {
        &mut self.registry
    }

    /// The range decorator the renderer polls.
    pub fn decorator(&self) -> &RangeDecorator {
        &self.decorator
    }

    /// Replace the decorator's line selection policy.
    pub fn set_decorated_lines(&mut self, lines: Vec<usize>) {
        self.decorator = self.decorator.clone().with_filter(LineFilter::Lines(lines));
    }
}

/// Byte index of a character column within a line (line length when the
/// column is at or past the end).
fn byte_of(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(byte, _)| byte)
        .unwrap_or(line.len())
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;

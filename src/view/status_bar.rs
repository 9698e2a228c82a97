//! Single-row status bar: file name, caret position, active theme.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::EditorState;
use crate::theme::{Surface, SurfaceStyles, ThemeStore};

/// Render the status bar into `area` (expected height 1).
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    editor: &EditorState,
    store: &ThemeStore,
    surfaces: &SurfaceStyles,
) {
    let style = Style::default()
        .bg(surfaces.get(Surface::StatusBarBackground))
        .fg(surfaces.get(Surface::StatusBarForeground));

    let caret = editor.caret();
    let position = format!("Ln {}, Col {}", caret.line + 1, caret.column + 1);
    let right = format!("{}  {} ", position, store.active().name());

    let width = area.width as usize;
    let left = format!(" {}", editor.file_name());
    let pad = width
        .saturating_sub(left.chars().count())
        .saturating_sub(right.chars().count());

    let line = Line::from(vec![
        Span::raw(left),
        Span::raw(" ".repeat(pad)),
        Span::raw(right),
    ]);
    frame.render_widget(Paragraph::new(line).style(style), area);
}

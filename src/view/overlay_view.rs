//! Completion list and overload hint popup rendering.
//!
//! Popups anchor to the caret: below it when the rows fit, above it
//! otherwise. The background under a popup is cleared so the editor text
//! does not bleed through.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::overlay::{CompletionListState, OverlayState, OverloadHintState};
use crate::state::EditorState;
use crate::theme::{Surface, SurfaceStyles};

/// Widest the completion popup gets, borders included.
const COMPLETION_WIDTH: u16 = 44;
/// Visible candidate rows before the list scrolls.
const COMPLETION_ROWS: u16 = 8;
/// Widest the overload hint gets, borders included.
const OVERLOAD_WIDTH: u16 = 52;

/// Render whichever overlay is open, anchored at the caret.
pub fn render_overlays(
    frame: &mut Frame,
    area: Rect,
    editor: &EditorState,
    surfaces: &SurfaceStyles,
    caret_screen: Option<(u16, u16)>,
) {
    let Some((caret_x, caret_y)) = caret_screen else {
        return;
    };
    match editor.overlay().state() {
        OverlayState::Closed => {}
        OverlayState::Completion(list) => {
            render_completion(frame, area, list, surfaces, caret_x, caret_y);
        }
        OverlayState::OverloadHint(hint) => {
            render_overload(frame, area, hint, surfaces, caret_x, caret_y);
        }
    }
}

fn render_completion(
    frame: &mut Frame,
    area: Rect,
    list: &CompletionListState,
    surfaces: &SurfaceStyles,
    caret_x: u16,
    caret_y: u16,
) {
    let visible = list.visible();
    // Empty is still a valid open overlay (provider failure, filter with
    // no matches); show the frame so the user sees the list is open.
    let rows = (visible.len() as u16).clamp(1, COMPLETION_ROWS);
    let popup = anchored_rect(area, caret_x, caret_y, COMPLETION_WIDTH, rows + 2);
    if popup.height < 3 {
        return;
    }
    frame.render_widget(Clear, popup);

    let base = Style::default()
        .bg(surfaces.get(Surface::EditorBackground))
        .fg(surfaces.get(Surface::EditorForeground));
    let selected_style = Style::default()
        .bg(surfaces.get(Surface::SelectionHighlight))
        .fg(surfaces.get(Surface::EditorForeground))
        .add_modifier(Modifier::BOLD);

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mut spans = vec![Span::raw(item.display_text.clone())];
            if i == list.selected_index() && !item.description.is_empty() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    item.description.clone(),
                    Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = if list.filter().is_empty() {
        " completion ".to_string()
    } else {
        format!(" completion: {} ", list.filter())
    };
    let widget = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(base),
        )
        .highlight_style(selected_style);
    let mut state = ListState::default().with_selected(Some(list.selected_index()));
    frame.render_stateful_widget(widget, popup, &mut state);
}

fn render_overload(
    frame: &mut Frame,
    area: Rect,
    hint: &OverloadHintState,
    surfaces: &SurfaceStyles,
    caret_x: u16,
    caret_y: u16,
) {
    let popup = anchored_rect(area, caret_x, caret_y, OVERLOAD_WIDTH, 4);
    if popup.height < 4 {
        return;
    }
    frame.render_widget(Clear, popup);

    let base = Style::default()
        .bg(surfaces.get(Surface::EditorBackground))
        .fg(surfaces.get(Surface::EditorForeground));
    let header = Line::from(Span::styled(
        hint.header().unwrap_or("").to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    let content = Line::from(hint.content().unwrap_or("").to_string());

    let widget = Paragraph::new(vec![header, content]).block(
        Block::default()
            .title(format!(" {} ", hint.current_index_text()))
            .borders(Borders::ALL)
            .style(base),
    );
    frame.render_widget(widget, popup);
}

/// Place a `width` x `height` popup next to the caret, below when it
/// fits and above otherwise, clamped to `area`.
fn anchored_rect(area: Rect, caret_x: u16, caret_y: u16, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = caret_x.min(area.right().saturating_sub(width)).max(area.x);
    let below = caret_y + 1;
    let y = if below + height <= area.bottom() {
        below
    } else if caret_y >= area.y + height {
        caret_y - height
    } else {
        area.y
    };
    Rect::new(x, y, width, height)
}

//! Theme picker modal rendering.
//!
//! A centered list of installed themes. The active theme carries an
//! `[ACTIVE]` marker; the selected row gets a `> ` prefix and the
//! selection highlight.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::state::ThemePickerState;
use crate::theme::{Surface, SurfaceStyles, ThemeStore};

const PICKER_WIDTH: u16 = 44;

/// Render the theme picker when it is open.
pub fn render_theme_picker(
    frame: &mut Frame,
    picker: &mut ThemePickerState,
    store: &ThemeStore,
    surfaces: &SurfaceStyles,
) {
    if !picker.is_visible() {
        return;
    }

    let area = frame.area();
    let modal = centered_rect(PICKER_WIDTH, store.len(), area);
    frame.render_widget(Clear, modal);

    let visible_rows = modal.height.saturating_sub(4).max(1) as usize;
    picker.adjust_scroll(visible_rows);

    let base = Style::default()
        .bg(surfaces.get(Surface::WindowBackground))
        .fg(surfaces.get(Surface::WindowForeground));
    let selected_style = Style::default()
        .bg(surfaces.get(Surface::SelectionHighlight))
        .add_modifier(Modifier::BOLD);

    let active = store.active_index();
    let items: Vec<ListItem> = store
        .names()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let mut spans = Vec::new();
            if i == picker.selected_index() {
                spans.push(Span::raw("> "));
            } else {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::raw(name.to_string()));
            if i == active {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    "[ACTIVE]",
                    Style::default().add_modifier(Modifier::ITALIC),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(Line::from(" Themes ").centered())
                .borders(Borders::ALL)
                .style(base),
        )
        .highlight_style(selected_style);
    let mut list_state = ListState::default()
        .with_selected(Some(picker.selected_index()))
        .with_offset(picker.scroll_offset());
    frame.render_stateful_widget(list, modal, &mut list_state);

    let footer = Rect {
        x: modal.x + 1,
        y: modal.y + modal.height.saturating_sub(2),
        width: modal.width.saturating_sub(2),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new("↑/↓: Navigate  Enter: Apply  Esc: Cancel")
            .style(Style::default().add_modifier(Modifier::DIM))
            .centered(),
        footer,
    );
}

fn centered_rect(width_cols: u16, item_count: usize, area: Rect) -> Rect {
    let width = width_cols.min(area.width);
    let height = (item_count as u16 + 4).min(area.height.saturating_sub(2));
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_is_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let modal = centered_rect(44, 4, area);
        assert_eq!(modal.width, 44);
        assert_eq!(modal.height, 8);
        assert_eq!(modal.x, 18);
        assert_eq!(modal.y, 8);
    }

    #[test]
    fn modal_shrinks_on_small_terminals() {
        let area = Rect::new(0, 0, 30, 6);
        let modal = centered_rect(44, 10, area);
        assert!(modal.width <= 30);
        assert!(modal.height <= 6);
    }
}

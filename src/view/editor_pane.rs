//! Editor pane rendering: margin, gutter, and augmented text lines.
//!
//! Per visible line the renderer asks the tokenizer for the highlighted
//! line, the range decorator for decoration ranges, and the inline
//! element registry for anchored elements, then composes all three into
//! the visual run. Anchored elements come from one `elements_in` range
//! query per line, so co-anchored elements all take part in the splice.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::decor::apply_to_line;
use crate::inline::{InlineElement, InlineElementRegistry};
use crate::state::EditorState;
use crate::syntax::LineHighlighter;
use crate::theme::{Surface, SurfaceStyles};

/// Width of the blank side margin column.
const MARGIN_WIDTH: u16 = 1;

/// Render the editor pane into `area`.
///
/// Returns the caret's screen position when it is inside the viewport.
pub fn render_editor(
    frame: &mut Frame,
    area: Rect,
    editor: &mut EditorState,
    surfaces: &SurfaceStyles,
    highlighter: &LineHighlighter,
) -> Option<(u16, u16)> {
    let (margin, gutter, text) = pane_layout(area, editor.line_count())?;
    let gutter_width = gutter.width;

    editor.adjust_scroll(area.height as usize);
    let top = editor.scroll();
    let caret = editor.caret();

    let editor_style = Style::default()
        .bg(surfaces.get(Surface::EditorBackground))
        .fg(surfaces.get(Surface::EditorForeground));
    let current_line_style = Style::default().bg(surfaces.get(Surface::CurrentLine));

    // Side margin.
    frame.render_widget(
        Paragraph::new("").style(Style::default().bg(surfaces.get(Surface::SideMarginBackground))),
        margin,
    );

    // Gutter: one right-aligned line number per visible row.
    let gutter_style = Style::default()
        .fg(surfaces.get(Surface::GutterForeground))
        .bg(surfaces.get(Surface::EditorBackground));
    let mut numbers: Vec<Line> = Vec::new();
    for row in 0..area.height as usize {
        let index = top + row;
        let mut line = if index < editor.line_count() {
            Line::from(format!("{:>width$} ", index + 1, width = gutter_width as usize - 1))
        } else {
            Line::from("")
        };
        if index == caret.line {
            line = line.style(current_line_style);
        }
        numbers.push(line);
    }
    frame.render_widget(Paragraph::new(numbers).style(gutter_style), gutter);

    // Text lines: highlight, decorate, splice inline elements.
    let highlighted = highlighter.highlight(editor.lines());
    let mut rendered: Vec<Line<'static>> = Vec::new();
    for row in 0..area.height as usize {
        let index = top + row;
        let Some(source) = editor.line(index) else {
            rendered.push(Line::from(""));
            continue;
        };
        let base = highlighted
            .get(index)
            .cloned()
            .unwrap_or_else(|| Line::from(source.to_string()));
        let ranges = editor.decorator().ranges_for(index, source);
        let decorated = apply_to_line(base, &ranges);

        let line_start = editor.line_start_offset(index);
        let line_len = source.chars().count();
        let mut line = splice_inline(decorated, editor.registry(), line_start, line_len);
        if index == caret.line {
            line = line.style(current_line_style);
        }
        rendered.push(line);
    }
    frame.render_widget(Paragraph::new(rendered).style(editor_style), text);

    // Caret position, shifted right past inline elements spliced before
    // it on its own line.
    if caret.line < top || caret.line >= top + area.height as usize {
        return None;
    }
    let line_start = editor.line_start_offset(caret.line);
    let shift: usize = anchors(editor.registry(), line_start, editor.line(caret.line)?.chars().count())
        .iter()
        .filter(|(column, _)| *column <= caret.column)
        .map(|(_, element)| element.width())
        .sum();
    let x = text.x + (caret.column + shift).min(text.width.saturating_sub(1) as usize) as u16;
    let y = text.y + (caret.line - top) as u16;
    Some((x, y))
}

/// Split `area` into margin, gutter, and text rects. Returns `None`
/// when the area is too small to hold all three.
fn pane_layout(area: Rect, line_count: usize) -> Option<(Rect, Rect, Rect)> {
    if area.height == 0 {
        return None;
    }
    let gutter_width = (digits(line_count) + 1) as u16;
    let text_width = area
        .width
        .checked_sub(MARGIN_WIDTH + gutter_width)
        .filter(|w| *w > 0)?;
    let margin = Rect::new(area.x, area.y, MARGIN_WIDTH, area.height);
    let gutter = Rect::new(area.x + MARGIN_WIDTH, area.y, gutter_width, area.height);
    let text = Rect::new(
        area.x + MARGIN_WIDTH + gutter_width,
        area.y,
        text_width,
        area.height,
    );
    Some((margin, gutter, text))
}

/// Collect (column, element) anchors for one line, in offset order with
/// co-anchored elements kept in insertion order.
fn anchors<'a>(
    registry: &'a InlineElementRegistry,
    line_start: usize,
    line_len: usize,
) -> Vec<(usize, &'a InlineElement)> {
    // The offset one past the last character (the newline slot) still
    // belongs to this line's visual run.
    registry
        .elements_in(line_start, line_start + line_len + 1)
        .iter()
        .map(|entry| (entry.offset - line_start, &entry.payload))
        .collect()
}

/// Splice inline elements into a styled line at their anchor columns.
fn splice_inline(
    line: Line<'static>,
    registry: &InlineElementRegistry,
    line_start: usize,
    line_len: usize,
) -> Line<'static> {
    let found = anchors(registry, line_start, line_len);
    if found.is_empty() {
        return line;
    }

    let chars: Vec<(char, Style)> = line
        .spans
        .iter()
        .flat_map(|span| span.content.chars().map(move |c| (c, span.style)))
        .collect();

    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut push_char = |spans: &mut Vec<Span<'static>>, ch: char, style: Style| match spans
        .last_mut()
    {
        Some(last) if last.style == style => last.content.to_mut().push(ch),
        _ => spans.push(Span::styled(ch.to_string(), style)),
    };

    let mut anchor_iter = found.iter().peekable();
    for column in 0..=chars.len() {
        while anchor_iter
            .peek()
            .is_some_and(|(anchor, _)| *anchor == column)
        {
            if let Some((_, element)) = anchor_iter.next() {
                spans.push(Span::styled(element.glyph.clone(), element.style));
            }
        }
        if let Some(&(ch, style)) = chars.get(column) {
            push_char(&mut spans, ch, style);
        }
    }
    Line::from(spans).style(line.style)
}

fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

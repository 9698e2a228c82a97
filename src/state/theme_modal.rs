//! State for the theme picker modal.

/// State for the theme picker modal.
///
/// Closed by default; when open it tracks a selected row over the theme
/// store's picker order and a scroll offset for long lists.
#[derive(Debug, Clone, Default)]
pub struct ThemePickerState {
    visible: bool,
    selected_index: usize,
    scroll_offset: usize,
}

impl ThemePickerState {
    /// New picker state (closed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the picker is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Open the picker, pre-selecting the active theme.
    pub fn open(&mut self, active_theme_index: usize) {
        self.visible = true;
        self.selected_index = active_theme_index;
        self.scroll_offset = 0;
    }

    /// Close the picker.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Toggle visibility.
    pub fn toggle(&mut self, active_theme_index: usize) {
        if self.visible {
            self.close();
        } else {
            self.open(active_theme_index);
        }
    }

    /// Currently selected row.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Move selection up, clamping at 0.
    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down, clamping at the last theme.
    pub fn select_next(&mut self, theme_count: usize) {
        if theme_count > 0 {
            self.selected_index = (self.selected_index + 1).min(theme_count - 1);
        }
    }

    /// Scroll offset for rendering.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Keep the selection inside the visible rows.
    pub fn adjust_scroll(&mut self, visible_rows: usize) {
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if visible_rows > 0 && self.selected_index >= self.scroll_offset + visible_rows {
            self.scroll_offset = self.selected_index - visible_rows + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_picker_starts_closed() {
        assert!(!ThemePickerState::new().is_visible());
    }

    #[test]
    fn open_preselects_active_theme() {
        let mut picker = ThemePickerState::new();
        picker.open(2);
        assert!(picker.is_visible());
        assert_eq!(picker.selected_index(), 2);
        assert_eq!(picker.scroll_offset(), 0);
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut picker = ThemePickerState::new();
        picker.toggle(0);
        assert!(picker.is_visible());
        picker.toggle(0);
        assert!(!picker.is_visible());
    }

    #[test]
    fn selection_clamps_at_both_ends() {
        let mut picker = ThemePickerState::new();
        picker.open(0);
        picker.select_prev();
        assert_eq!(picker.selected_index(), 0);
        picker.select_next(3);
        picker.select_next(3);
        picker.select_next(3);
        assert_eq!(picker.selected_index(), 2);
    }

    #[test]
    fn select_next_with_no_themes_does_nothing() {
        let mut picker = ThemePickerState::new();
        picker.open(0);
        picker.select_next(0);
        assert_eq!(picker.selected_index(), 0);
    }

    #[test]
    fn adjust_scroll_keeps_selection_visible() {
        let mut picker = ThemePickerState::new();
        picker.open(0);
        for _ in 0..6 {
            picker.select_next(10);
        }
        picker.adjust_scroll(3);
        assert_eq!(picker.scroll_offset(), 4);
        picker.select_prev();
        picker.select_prev();
        picker.select_prev();
        picker.adjust_scroll(3);
        assert_eq!(picker.scroll_offset(), 3);
    }
}

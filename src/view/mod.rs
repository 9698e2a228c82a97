//! TUI rendering and terminal management (impure shell).
//!
//! All handlers run synchronously on the event-loop thread: a keystroke
//! is fully processed (including any overlay commits it causes) before
//! the next event is read, and a theme switch re-resolves every surface
//! before the next draw, so no frame ever mixes two themes.

mod editor_pane;
mod overlay_view;
mod status_bar;
mod theme_picker;

pub use editor_pane::render_editor;
pub use overlay_view::render_overlays;
pub use status_bar::render_status_bar;
pub use theme_picker::render_theme_picker;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::ResolvedConfig;
use crate::model::AppError;
use crate::overlay::{OverlayKind, OverlayState};
use crate::state::{EditorState, ThemePickerState};
use crate::syntax::LineHighlighter;
use crate::theme::{apply_theme, SurfaceStyles, ThemeStore};

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error.
    #[error("application error: {0}")]
    App(#[from] AppError),
}

/// Whether colors are enabled.
///
/// Disabled by `--no-color` or any value in the `NO_COLOR` environment
/// variable; disabled means every surface renders with terminal default
/// colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Resolve from the CLI flag and environment.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        Self {
            enabled: !no_color_flag && std::env::var("NO_COLOR").is_err(),
        }
    }

    /// Whether colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

/// Main TUI application.
///
/// Generic over the backend so tests can drive it with `TestBackend`.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    editor: EditorState,
    store: ThemeStore,
    surfaces: SurfaceStyles,
    highlighter: LineHighlighter,
    picker: ThemePickerState,
    color: ColorConfig,
    show_status_bar: bool,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize the application on the real terminal.
    pub fn new(
        editor: EditorState,
        store: ThemeStore,
        config: &ResolvedConfig,
        color: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self::with_terminal(terminal, editor, store, config, color))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the application over an existing terminal (tests pass a
    /// `TestBackend` terminal here).
    pub fn with_terminal(
        terminal: Terminal<B>,
        mut editor: EditorState,
        mut store: ThemeStore,
        config: &ResolvedConfig,
        color: ColorConfig,
    ) -> Self {
        editor.set_decorated_lines(config.decorated_lines.clone());
        if !store.set_active(&config.theme) {
            warn!(theme = %config.theme, "unknown theme, keeping default");
        }
        let surfaces = resolve_surfaces(&store, color);
        let highlighter =
            LineHighlighter::for_extension(editor.extension(), store.active().syntax_theme());
        Self {
            terminal,
            editor,
            store,
            surfaces,
            highlighter,
            picker: ThemePickerState::new(),
            color,
            show_status_bar: config.show_status_bar,
        }
    }

    /// The editor state (tests).
    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    /// The underlying terminal (tests inspect the buffer through it).
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Name of the active theme.
    pub fn active_theme(&self) -> &str {
        self.store.active().name()
    }

    /// The resolved surface styles (tests).
    pub fn surfaces(&self) -> &SurfaceStyles {
        &self.surfaces
    }

    /// Switch the active theme and synchronously re-resolve every
    /// surface and the syntax highlighter before returning.
    pub fn switch_theme(&mut self, name: &str) {
        if !self.store.set_active(name) {
            warn!(theme = name, "theme not in store");
            return;
        }
        self.surfaces = resolve_surfaces(&self.store, self.color);
        self.highlighter = LineHighlighter::for_extension(
            self.editor.extension(),
            self.store.active().syntax_theme(),
        );
        info!(theme = name, "theme applied");
    }

    /// Draw one frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        // Split borrows: rendering reads editor/store/picker while the
        // terminal is mutably borrowed.
        let editor = &mut self.editor;
        let store = &self.store;
        let surfaces = &self.surfaces;
        let highlighter = &self.highlighter;
        let picker = &mut self.picker;
        let show_status_bar = self.show_status_bar;
        self.terminal.draw(|frame| {
            let area = frame.area();
            let (content, status) = if show_status_bar && area.height > 1 {
                let status = ratatui::layout::Rect::new(
                    area.x,
                    area.y + area.height - 1,
                    area.width,
                    1,
                );
                let content = ratatui::layout::Rect::new(
                    area.x,
                    area.y,
                    area.width,
                    area.height - 1,
                );
                (content, Some(status))
            } else {
                (area, None)
            };

            let caret_screen = render_editor(frame, content, editor, surfaces, highlighter);
            if let Some(status) = status {
                render_status_bar(frame, status, editor, store, surfaces);
            }
            render_overlays(frame, content, editor, surfaces, caret_screen);
            render_theme_picker(frame, picker, store, surfaces);

            if let Some(position) = caret_screen {
                if !overlay_or_picker_open(editor, picker) {
                    frame.set_cursor_position(position);
                }
            }
        })?;
        Ok(())
    }

    /// Run the event loop until quit.
    pub fn run(&mut self) -> Result<(), TuiError> {
        loop {
            self.draw()?;
            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Resize(..) => {}
                _ => {}
            }
        }
    }

    /// Handle one key event. Returns true to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Global chords first.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') => return true,
                KeyCode::Char('t') => {
                    self.picker.toggle(self.store.active_index());
                    return false;
                }
                _ => {}
            }
        }

        if self.picker.is_visible() {
            self.handle_picker_key(key);
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.editor.insert_char(c);
            }
            KeyCode::Backspace => self.editor.backspace(),
            KeyCode::Enter => self.handle_enter(),
            KeyCode::Esc => self.dismiss_overlay(),
            KeyCode::Up => self.handle_up(),
            KeyCode::Down => self.handle_down(),
            KeyCode::Left => self.editor.move_left(),
            KeyCode::Right => self.editor.move_right(),
            _ => {}
        }
        false
    }

    fn handle_enter(&mut self) {
        match self.editor.overlay().state() {
            OverlayState::Completion(_) => {
                self.editor.commit_completion();
            }
            OverlayState::OverloadHint(_) => {
                self.editor.overlay_mut().notify_closed(OverlayKind::OverloadHint);
            }
            OverlayState::Closed => self.editor.newline(),
        }
    }

    fn handle_up(&mut self) {
        let overlay = self.editor.overlay_mut();
        if let Some(list) = overlay.completion_mut() {
            list.select_prev();
        } else if let Some(hint) = overlay.overload_mut() {
            hint.select_prev();
        } else {
            self.editor.move_up();
        }
    }

    fn handle_down(&mut self) {
        let overlay = self.editor.overlay_mut();
        if let Some(list) = overlay.completion_mut() {
            list.select_next();
        } else if let Some(hint) = overlay.overload_mut() {
            hint.select_next();
        } else {
            self.editor.move_down();
        }
    }

    fn dismiss_overlay(&mut self) {
        let overlay = self.editor.overlay_mut();
        match overlay.state() {
            OverlayState::Completion(_) => {
                overlay.notify_closed(OverlayKind::Completion);
            }
            OverlayState::OverloadHint(_) => {
                overlay.notify_closed(OverlayKind::OverloadHint);
            }
            OverlayState::Closed => {}
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.picker.select_prev(),
            KeyCode::Down => self.picker.select_next(self.store.len()),
            KeyCode::Enter => {
                let names = self.store.names();
                if let Some(name) = names.get(self.picker.selected_index()) {
                    let name = name.to_string();
                    self.switch_theme(&name);
                }
                self.picker.close();
            }
            KeyCode::Esc => self.picker.close(),
            _ => {}
        }
    }
}

fn overlay_or_picker_open(editor: &EditorState, picker: &ThemePickerState) -> bool {
    picker.is_visible() || !matches!(editor.overlay().state(), OverlayState::Closed)
}

/// Resolve all surface styles for the store's active theme, honoring
/// color disablement.
pub fn resolve_surfaces(store: &ThemeStore, color: ColorConfig) -> SurfaceStyles {
    if color.colors_enabled() {
        apply_theme(store.active())
    } else {
        SurfaceStyles::plain()
    }
}

/// Run the application on the real terminal, restoring it on exit.
pub fn run(
    editor: EditorState,
    store: ThemeStore,
    config: &ResolvedConfig,
    color: ColorConfig,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(editor, store, config, color)?;
    let result = app.run();
    restore_terminal();
    result
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = io::stdout().execute(LeaveAlternateScreen);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(codepane_env)]
    fn no_color_flag_disables_colors() {
        std::env::remove_var("NO_COLOR");
        assert!(ColorConfig::from_env_and_args(false).colors_enabled());
        assert!(!ColorConfig::from_env_and_args(true).colors_enabled());
    }

    #[test]
    #[serial(codepane_env)]
    fn no_color_env_disables_colors() {
        std::env::set_var("NO_COLOR", "1");
        assert!(!ColorConfig::from_env_and_args(false).colors_enabled());
        std::env::remove_var("NO_COLOR");
    }
}

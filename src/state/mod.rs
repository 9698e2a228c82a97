//! Editor-side application state (pure core).

pub mod editor;
pub mod theme_modal;

pub use editor::{Caret, EditorState};
pub use theme_modal::ThemePickerState;

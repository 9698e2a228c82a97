//! codepane
//!
//! TUI code-editing pane with offset-anchored inline elements,
//! text-match range decorations, semantic theme resolution, and
//! character-triggered completion/overload overlays.
//!
//! Pure Core / Impure Shell: everything outside [`view`] is pure state
//! and logic that tests drive directly; [`view`] owns the terminal and
//! the event loop.

pub mod config;
pub mod decor;
pub mod inline;
pub mod logging;
pub mod model;
pub mod overlay;
pub mod state;
pub mod syntax;
pub mod theme;
pub mod view;

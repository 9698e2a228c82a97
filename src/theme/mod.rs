//! Semantic theme-to-style resolution.
//!
//! A theme is a dictionary from namespaced style keys
//! (`editor.background`, `statusBar.foreground`, ...) to raw color
//! strings. [`store::ThemeStore`] owns the named themes and the active
//! selection; [`resolver`] turns the active theme into a fully-resolved
//! [`resolver::SurfaceStyles`] table in one synchronous pass, applying a
//! registered fallback wherever the theme omits a key or carries a value
//! that does not parse.

pub mod color;
pub mod resolver;
pub mod store;

pub use color::parse_color;
pub use resolver::{apply_theme, resolve, Fallback, Surface, SurfaceStyles};
pub use store::{Theme, ThemeStore};

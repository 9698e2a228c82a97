//! Domain types shared across the crate (pure, no I/O).

pub mod completion;
pub mod decoration;
pub mod error;

pub use completion::CompletionItem;
pub use decoration::{DecorationKind, DecorationRange};
pub use error::{AppError, InputError};

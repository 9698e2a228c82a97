//! Inline visual elements anchored to buffer offsets.
//!
//! [`OffsetIndex`] is the sorted leaf structure; [`InlineElementRegistry`]
//! owns the (offset, element) collection the renderer polls per visible
//! line.

pub mod offset_index;
pub mod registry;

pub use offset_index::OffsetIndex;
pub use registry::{InlineElement, InlineElementRegistry};

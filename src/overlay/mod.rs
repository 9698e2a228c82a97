//! Transient input-triggered overlays.
//!
//! [`controller::OverlayController`] is a state machine over exactly one
//! of {no overlay, completion list, call-overload hint}, driven by
//! character-insertion events. State changes are reported as explicit
//! [`OverlayEvent`] messages returned from each handler, in the order
//! they occurred.

pub mod completion;
pub mod controller;
pub mod overload;

pub use completion::{CompletionListState, CompletionProvider, ProviderError, WordListProvider};
pub use controller::{OverlayController, OverlayState};
pub use overload::{OverloadHintState, OverloadItem, OverloadProvider, SignatureListProvider};

/// Which overlay a close notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// The completion list.
    Completion,
    /// The call-overload hint.
    OverloadHint,
}

/// A state change emitted by the overlay controller.
///
/// Events are returned synchronously from the handler that caused them,
/// in occurrence order, so observers see selection changes before the
/// handler's caller regains control.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayEvent {
    /// The completion list opened.
    CompletionOpened,
    /// The selected candidate was committed; insert this text at the
    /// caret.
    CompletionCommitted(String),
    /// The completion list closed without inserting anything.
    CompletionDismissed,
    /// The overload hint opened.
    OverloadOpened,
    /// The overload hint closed.
    OverloadDismissed,
    /// The overload hint's selected index changed.
    OverloadSelectionChanged(usize),
}

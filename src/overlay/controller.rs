//! OverlayController - the character-driven overlay state machine.
//!
//! Exactly one of {closed, completion, overload hint} is active. Each
//! character-insertion event runs to completion and returns the state
//! changes it caused as [`OverlayEvent`] messages, in order.
//!
//! Close rules are deliberately asymmetric per overlay kind: the
//! completion list persists through alphanumeric keystrokes (they narrow
//! its filter) and commits on the first non-word character, while the
//! overload hint closes on the next keystroke of any kind. The asymmetry
//! is kept configurable per kind by keeping the two policies in separate
//! arms rather than a shared rule.

use tracing::debug;

use super::completion::{CompletionListState, CompletionProvider, WordListProvider};
use super::overload::{OverloadHintState, OverloadProvider, SignatureListProvider};
use super::{OverlayEvent, OverlayKind};

/// The active overlay, if any.
#[derive(Debug, Clone, Default)]
pub enum OverlayState {
    /// No overlay is open.
    #[default]
    Closed,
    /// The completion list is open.
    Completion(CompletionListState),
    /// The call-overload hint is open.
    OverloadHint(OverloadHintState),
}

impl OverlayState {
    fn kind(&self) -> Option<OverlayKind> {
        match self {
            OverlayState::Closed => None,
            OverlayState::Completion(_) => Some(OverlayKind::Completion),
            OverlayState::OverloadHint(_) => Some(OverlayKind::OverloadHint),
        }
    }
}

/// Owns the overlay state and the pluggable candidate/signature
/// providers.
pub struct OverlayController {
    state: OverlayState,
    completion_provider: Box<dyn CompletionProvider>,
    overload_provider: Box<dyn OverloadProvider>,
}

impl std::fmt::Debug for OverlayController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayController")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Default for OverlayController {
    fn default() -> Self {
        Self::new(
            Box::new(WordListProvider::demo()),
            Box::new(SignatureListProvider::demo()),
        )
    }
}

impl OverlayController {
    /// Controller with explicit providers.
    pub fn new(
        completion_provider: Box<dyn CompletionProvider>,
        overload_provider: Box<dyn OverloadProvider>,
    ) -> Self {
        Self {
            state: OverlayState::Closed,
            completion_provider,
            overload_provider,
        }
    }

    /// The current overlay state.
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    /// Mutable access to an open completion list (selection keys).
    pub fn completion_mut(&mut self) -> Option<&mut CompletionListState> {
        match &mut self.state {
            OverlayState::Completion(list) => Some(list),
            _ => None,
        }
    }

    /// Mutable access to an open overload hint (selection keys).
    pub fn overload_mut(&mut self) -> Option<&mut OverloadHintState> {
        match &mut self.state {
            OverlayState::OverloadHint(hint) => Some(hint),
            _ => None,
        }
    }

    /// Feed one inserted character through the state machine.
    pub fn on_char(&mut self, c: char) -> Vec<OverlayEvent> {
        let mut events = Vec::new();

        // An open completion list consumes word characters for its
        // filter; anything else commits the current selection (or closes
        // gracefully with nothing selected) before the character is
        // considered as a trigger.
        if let OverlayState::Completion(list) = &mut self.state {
            if c.is_alphanumeric() {
                list.push_filter_char(c);
                return events;
            }
            match list.commit() {
                Some(text) => events.push(OverlayEvent::CompletionCommitted(text)),
                None => events.push(OverlayEvent::CompletionDismissed),
            }
            self.state = OverlayState::Closed;
        }

        match c {
            '.' => {
                self.close_current(&mut events);
                debug!("member-access trigger: opening completion");
                self.state = OverlayState::Completion(CompletionListState::open(
                    self.completion_provider.as_ref(),
                ));
                events.push(OverlayEvent::CompletionOpened);
            }
            '(' => {
                self.close_current(&mut events);
                debug!("call-start trigger: opening overload hint");
                self.state = OverlayState::OverloadHint(OverloadHintState::open(
                    self.overload_provider.as_ref(),
                ));
                events.push(OverlayEvent::OverloadOpened);
            }
            _ => {
                // The overload hint does not survive any further
                // keystroke once shown.
                if matches!(self.state, OverlayState::OverloadHint(_)) {
                    self.state = OverlayState::Closed;
                    events.push(OverlayEvent::OverloadDismissed);
                }
            }
        }
        events
    }

    /// Change the overload hint selection, emitting the change event
    /// before returning.
    pub fn set_overload_selection(&mut self, index: usize) -> Vec<OverlayEvent> {
        match &mut self.state {
            OverlayState::OverloadHint(hint) => {
                hint.set_selected_index(index);
                vec![OverlayEvent::OverloadSelectionChanged(hint.selected_index())]
            }
            _ => Vec::new(),
        }
    }

    /// The active overlay reported that it closed out-of-band (user
    /// cancel, focus loss, commit race). Last writer wins: the
    /// notification is ignored unless the named overlay is still the
    /// open one.
    pub fn notify_closed(&mut self, kind: OverlayKind) -> Vec<OverlayEvent> {
        if self.state.kind() == Some(kind) {
            self.state = OverlayState::Closed;
            match kind {
                OverlayKind::Completion => vec![OverlayEvent::CompletionDismissed],
                OverlayKind::OverloadHint => vec![OverlayEvent::OverloadDismissed],
            }
        } else {
            Vec::new()
        }
    }

    fn close_current(&mut self, events: &mut Vec<OverlayEvent>) {
        match std::mem::take(&mut self.state) {
            OverlayState::Closed => {}
            OverlayState::Completion(_) => events.push(OverlayEvent::CompletionDismissed),
            OverlayState::OverloadHint(_) => events.push(OverlayEvent::OverloadDismissed),
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;

//! Unit tests for the overlay state machine.

use super::{OverlayController, OverlayState};
use crate::model::CompletionItem;
use crate::overlay::completion::{CompletionProvider, ProviderError, WordListProvider};
use crate::overlay::overload::SignatureListProvider;
use crate::overlay::{OverlayEvent, OverlayKind};

fn controller() -> OverlayController {
    OverlayController::default()
}

fn type_str(controller: &mut OverlayController, text: &str) -> Vec<OverlayEvent> {
    text.chars().flat_map(|c| controller.on_char(c)).collect()
}

fn is_completion(controller: &OverlayController) -> bool {
    matches!(controller.state(), OverlayState::Completion(_))
}

fn is_overload(controller: &OverlayController) -> bool {
    matches!(controller.state(), OverlayState::OverloadHint(_))
}

fn is_closed(controller: &OverlayController) -> bool {
    matches!(controller.state(), OverlayState::Closed)
}

// ===== Triggers =====

#[test]
fn starts_closed() {
    assert!(is_closed(&controller()));
}

#[test]
fn dot_opens_completion() {
    let mut c = controller();
    let events = type_str(&mut c, "foo.");
    assert!(is_completion(&c));
    assert_eq!(events, vec![OverlayEvent::CompletionOpened]);
}

#[test]
fn open_paren_opens_overload_hint() {
    let mut c = controller();
    let events = c.on_char('(');
    assert!(is_overload(&c));
    assert_eq!(events, vec![OverlayEvent::OverloadOpened]);
    match c.state() {
        OverlayState::OverloadHint(hint) => {
            assert_eq!(hint.selected_index(), 0);
            assert_eq!(hint.current_index_text(), "1 of 3");
        }
        _ => unreachable!(),
    }
}

// ===== Completion lifecycle =====

#[test]
fn alphanumeric_keeps_completion_open_and_narrows() {
    let mut c = controller();
    type_str(&mut c, "foo.");
    let events = c.on_char('a');
    assert!(is_completion(&c));
    assert!(events.is_empty());
    match c.state() {
        OverlayState::Completion(list) => assert_eq!(list.filter(), "a"),
        _ => unreachable!(),
    }
}

#[test]
fn non_word_character_commits_selected_candidate() {
    let mut c = controller();
    type_str(&mut c, "foo.le");
    let events = c.on_char(' ');
    assert!(is_closed(&c));
    assert_eq!(events, vec![OverlayEvent::CompletionCommitted("len".into())]);
}

#[test]
fn non_word_character_with_no_candidate_closes_gracefully() {
    let mut c = controller();
    // Filter down to nothing selectable, then hit a non-word key.
    type_str(&mut c, ".zzzz");
    let events = c.on_char(' ');
    assert!(is_closed(&c));
    assert_eq!(events, vec![OverlayEvent::CompletionDismissed]);
}

#[test]
fn typed_sequence_scenario_from_dot_to_space() {
    // "foo." opens, "a" keeps open, " " commits or discards.
    let mut c = controller();
    type_str(&mut c, "foo.");
    assert!(is_completion(&c));
    c.on_char('a');
    assert!(is_completion(&c));
    c.on_char(' ');
    assert!(is_closed(&c));
}

#[test]
fn dot_while_completion_open_reopens_fresh_list() {
    let mut c = controller();
    type_str(&mut c, ".le");
    let events = c.on_char('.');
    // The old list commits on the non-word '.', then a fresh one opens.
    assert_eq!(
        events,
        vec![
            OverlayEvent::CompletionCommitted("len".into()),
            OverlayEvent::CompletionOpened,
        ]
    );
    match c.state() {
        OverlayState::Completion(list) => assert_eq!(list.filter(), ""),
        _ => unreachable!(),
    }
}

// ===== Overload lifecycle =====

#[test]
fn paren_while_completion_open_switches_to_overload() {
    let mut c = controller();
    type_str(&mut c, "foo.");
    assert!(is_completion(&c));
    let events = c.on_char('(');
    assert!(is_overload(&c));
    // Scenario: completion closes (commit path), overload opens at 0.
    assert!(events.contains(&OverlayEvent::OverloadOpened));
    match c.state() {
        OverlayState::OverloadHint(hint) => {
            assert_eq!(hint.selected_index(), 0);
            assert_eq!(hint.current_index_text(), "1 of 3");
        }
        _ => unreachable!(),
    }
}

#[test]
fn overload_hint_closes_on_any_next_keystroke() {
    let mut c = controller();
    c.on_char('(');
    assert!(is_overload(&c));
    let events = c.on_char('x');
    assert!(is_closed(&c));
    assert_eq!(events, vec![OverlayEvent::OverloadDismissed]);
}

#[test]
fn dot_while_overload_open_switches_to_completion() {
    let mut c = controller();
    c.on_char('(');
    let events = c.on_char('.');
    assert!(is_completion(&c));
    assert_eq!(
        events,
        vec![OverlayEvent::OverloadDismissed, OverlayEvent::CompletionOpened]
    );
}

#[test]
fn overload_selection_change_emits_event_synchronously() {
    let mut c = controller();
    c.on_char('(');
    let events = c.set_overload_selection(1);
    assert_eq!(events, vec![OverlayEvent::OverloadSelectionChanged(1)]);
    match c.state() {
        OverlayState::OverloadHint(hint) => {
            assert_eq!(hint.current_index_text(), "2 of 3")
        }
        _ => unreachable!(),
    }
}

// ===== Out-of-band close =====

#[test]
fn notify_closed_resets_matching_overlay() {
    let mut c = controller();
    type_str(&mut c, ".");
    let events = c.notify_closed(OverlayKind::Completion);
    assert!(is_closed(&c));
    assert_eq!(events, vec![OverlayEvent::CompletionDismissed]);
}

#[test]
fn stale_close_notification_is_ignored() {
    // Race: completion's close notification arrives after a '(' already
    // replaced it with the overload hint. Last writer wins.
    let mut c = controller();
    type_str(&mut c, ".");
    c.on_char('(');
    assert!(is_overload(&c));
    let events = c.notify_closed(OverlayKind::Completion);
    assert!(events.is_empty());
    assert!(is_overload(&c));
}

#[test]
fn notify_closed_when_already_closed_is_a_no_op() {
    let mut c = controller();
    assert!(c.notify_closed(OverlayKind::OverloadHint).is_empty());
    assert!(is_closed(&c));
}

// ===== Provider failure =====

struct FailingProvider;
impl CompletionProvider for FailingProvider {
    fn candidates(&self) -> Result<Vec<CompletionItem>, ProviderError> {
        Err(ProviderError("backend gone".into()))
    }
}

#[test]
fn provider_failure_still_opens_overlay() {
    let mut c = OverlayController::new(
        Box::new(FailingProvider),
        Box::new(SignatureListProvider::demo()),
    );
    let events = c.on_char('.');
    assert!(is_completion(&c));
    assert_eq!(events, vec![OverlayEvent::CompletionOpened]);
    match c.state() {
        OverlayState::Completion(list) => assert!(list.visible().is_empty()),
        _ => unreachable!(),
    }
}

#[test]
fn keystrokes_survive_provider_failure() {
    let mut c = OverlayController::new(
        Box::new(FailingProvider),
        Box::new(SignatureListProvider::demo()),
    );
    // open empty, type through it, close: no panic, sane events.
    c.on_char('.');
    c.on_char('a');
    let events = c.on_char(' ');
    assert_eq!(events, vec![OverlayEvent::CompletionDismissed]);
    assert!(is_closed(&c));
}

#[test]
fn word_list_provider_is_usable_directly() {
    let provider = WordListProvider::demo();
    let candidates = provider.candidates().unwrap();
    assert!(candidates.iter().any(|i| i.display_text == "len"));
}

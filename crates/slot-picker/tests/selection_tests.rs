//! Tests for single- and multi-select selection state.

use slot_picker::{SelectionState, TimeSlot};

fn slot(s: &str) -> TimeSlot {
    TimeSlot::parse(s).unwrap()
}

#[test]
fn single_select_first_toggle_selects() {
    let mut selection = SelectionState::new(false);
    let nine = slot("2024-01-10T09:00");

    let event = selection.toggle(nine);

    assert!(event.is_new_select);
    assert_eq!(event.slot, nine);
    assert_eq!(selection.snapshot(), vec![nine]);
}

#[test]
fn single_select_replaces_previous_selection() {
    let mut selection = SelectionState::new(false);
    let nine = slot("2024-01-10T09:00");
    let two = slot("2024-01-12T14:00");

    selection.toggle(nine);
    let event = selection.toggle(two);

    assert!(event.is_new_select);
    assert!(!selection.is_selected(nine));
    assert_eq!(selection.snapshot(), vec![two]);
}

#[test]
fn toggling_twice_restores_prior_state() {
    let mut selection = SelectionState::new(true);
    let nine = slot("2024-01-10T09:00");
    selection.toggle(slot("2024-01-11T10:00"));
    let before = selection.clone();

    let first = selection.toggle(nine);
    let second = selection.toggle(nine);

    assert!(first.is_new_select);
    assert!(!second.is_new_select);
    assert_eq!(selection, before);
}

#[test]
fn multi_select_keeps_insertion_order() {
    let mut selection = SelectionState::new(true);
    let a = slot("2024-01-12T14:00");
    let b = slot("2024-01-10T09:00");
    let c = slot("2024-01-11T11:00");

    selection.toggle(a);
    selection.toggle(b);
    selection.toggle(c);
    selection.toggle(b);

    assert_eq!(selection.snapshot(), vec![a, c]);
    assert_eq!(selection.len(), 2);
}

#[test]
fn unselecting_in_single_select_leaves_nothing() {
    let mut selection = SelectionState::new(false);
    let nine = slot("2024-01-10T09:00");

    selection.toggle(nine);
    selection.toggle(nine);

    assert!(selection.is_empty());
}

#[test]
fn initial_selection_is_truncated_in_single_select() {
    let a = slot("2024-01-10T09:00");
    let b = slot("2024-01-10T10:00");

    let single = SelectionState::with_initial(false, [a, b]);
    let multi = SelectionState::with_initial(true, [a, b]);

    assert_eq!(single.snapshot(), vec![a]);
    assert_eq!(multi.snapshot(), vec![a, b]);
}

#[test]
fn identity_is_the_instant_not_the_text() {
    let mut selection = SelectionState::new(false);
    selection.toggle(slot("2024-01-10T09:00"));
    assert!(selection.is_selected(slot("2024-01-10T09:00:00")));
    assert!(selection.is_selected(slot("2024-01-10T09:00:00+02:00")));
}

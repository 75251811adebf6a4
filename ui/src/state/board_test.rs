use board::engine::EngineConfig;
use board::filter::SlotFilter;
use board::input::Phase;
use board::roster::{Roster, RosterConfig};
use leptos::reactive::owner::Owner;

use super::*;

fn handle() -> (Owner, BoardHandle) {
    let owner = Owner::new();
    owner.set();
    let core = EngineCore::new(Roster::from_config(&RosterConfig::default()).unwrap(), EngineConfig::default());
    (owner, BoardHandle::new(core))
}

fn worker() -> ItemId {
    ItemId::from("1")
}

fn kitchen() -> SlotId {
    SlotId::from("kitchen")
}

// =============================================================
// BoardHandle
// =============================================================

#[test]
fn handle_starts_idle_with_default_cursor() {
    let (_owner, board) = handle();
    let snap = board.snapshot();
    assert_eq!(snap.phase, Phase::Idle);
    assert_eq!(board.cursor(), DEFAULT_CURSOR);
}

#[test]
fn handle_drag_sets_grabbing_cursor() {
    let (_owner, board) = handle();
    board.begin_drag(worker());
    assert_eq!(board.snapshot().phase, Phase::Dragging);
    assert_eq!(board.cursor(), "grabbing");
}

#[test]
fn handle_drop_assigns_and_restores_cursor() {
    let (_owner, board) = handle();
    board.begin_drag(worker());
    board.complete_drop(worker(), kitchen());
    let snap = board.snapshot();
    assert_eq!(snap.items_in(&SlotFilter::Slot(kitchen())).len(), 1);
    assert!(snap.drop_complete);
    assert_eq!(board.cursor(), DEFAULT_CURSOR);
}

#[test]
fn handle_cancel_leaves_roster_unchanged() {
    let (_owner, board) = handle();
    board.begin_drag(worker());
    board.cancel_drag(worker());
    let snap = board.snapshot();
    assert_eq!(snap.items_in(&SlotFilter::Unassigned).len(), 1);
    assert!(!snap.drop_complete);
}

#[test]
fn handle_release_and_reset() {
    let (_owner, board) = handle();
    board.begin_drag(worker());
    board.complete_drop(worker(), kitchen());
    board.release_slot(kitchen());
    assert!(!board.snapshot().drop_complete);

    board.begin_drag(worker());
    board.reset();
    let snap = board.snapshot();
    assert_eq!(snap.phase, Phase::Idle);
    assert!(snap.selected_item.is_none());
    assert_eq!(board.cursor(), DEFAULT_CURSOR);
}

#[test]
fn handle_escape_cancels_drag() {
    let (_owner, board) = handle();
    board.begin_drag(worker());
    board.key_down(Key("Escape".into()));
    assert_eq!(board.snapshot().phase, Phase::Idle);
}

#[test]
fn handle_is_copy() {
    let (_owner, board) = handle();
    let other = board;
    other.begin_drag(worker());
    assert_eq!(board.snapshot().selected_item, Some(worker()));
}

// =============================================================
// Lost pointer
// =============================================================

#[test]
fn lost_pointer_cancels_drag_and_frees_the_next_press() {
    let (_owner, board) = handle();
    let on_card = Point::new(50.0, 190.0);
    board.pointer_down(on_card, Button::Primary);
    board.pointer_move(Point::new(400.0, 40.0));
    assert_eq!(board.snapshot().phase, Phase::Dragging);

    board.cancel_active_drag();
    let snap = board.snapshot();
    assert_eq!(snap.phase, Phase::Idle);
    assert_eq!(snap.items_in(&SlotFilter::Unassigned).len(), 1);
    assert_eq!(board.cursor(), DEFAULT_CURSOR);

    board.pointer_down(on_card, Button::Primary);
    board.pointer_up(on_card, Button::Primary);
    assert_eq!(board.snapshot().selected_item, Some(worker()));
}

#[test]
fn lost_pointer_after_drop_keeps_assignment() {
    let (_owner, board) = handle();
    board.begin_drag(worker());
    board.complete_drop(worker(), kitchen());
    board.cancel_active_drag();
    let snap = board.snapshot();
    assert_eq!(snap.item(&worker()).and_then(|item| item.assigned_slot.clone()), Some(kitchen()));
    assert!(snap.drop_complete);
}

#[test]
fn lost_pointer_when_idle_is_quiet() {
    let (_owner, board) = handle();
    let before = board.snapshot();
    board.cancel_active_drag();
    assert_eq!(board.snapshot(), before);
}

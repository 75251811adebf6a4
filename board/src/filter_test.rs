use serde_json::json;

use super::*;
use crate::roster::ItemId;

fn item(id: &str, slot: Option<&str>) -> Item {
    Item {
        id: ItemId::from(id),
        label: id.to_owned(),
        badge: String::new(),
        note: String::new(),
        assigned_slot: slot.map(SlotId::from),
    }
}

fn ids(items: &[&Item]) -> Vec<String> {
    items.iter().map(|item| item.id.to_string()).collect()
}

// =============================================================
// items_in
// =============================================================

#[test]
fn unassigned_returns_everything_initially() {
    let items = vec![item("1", None), item("2", None), item("3", None)];
    assert_eq!(ids(&unassigned(&items)), ["1", "2", "3"]);
}

#[test]
fn any_slot_is_empty_initially() {
    let items = vec![item("1", None), item("2", None)];
    assert!(items_in(&items, &SlotFilter::Slot(SlotId::from("X"))).is_empty());
}

#[test]
fn slot_filter_keeps_original_order() {
    let items = vec![item("1", Some("X")), item("2", None), item("3", Some("X")), item("4", Some("Y"))];
    assert_eq!(ids(&items_in(&items, &SlotFilter::Slot(SlotId::from("X")))), ["1", "3"]);
    assert_eq!(ids(&items_in(&items, &SlotFilter::Slot(SlotId::from("Y")))), ["4"]);
    assert_eq!(ids(&unassigned(&items)), ["2"]);
}

#[test]
fn groups_partition_the_list() {
    let items = vec![item("1", Some("X")), item("2", None), item("3", Some("Y"))];
    let total = unassigned(&items).len()
        + items_in(&items, &SlotFilter::Slot(SlotId::from("X"))).len()
        + items_in(&items, &SlotFilter::Slot(SlotId::from("Y"))).len();
    assert_eq!(total, items.len());
}

#[test]
fn unknown_slot_matches_nothing() {
    let items = vec![item("1", Some("X"))];
    assert!(items_in(&items, &SlotFilter::Slot(SlotId::from("nope"))).is_empty());
}

#[test]
fn empty_list_yields_empty() {
    assert!(unassigned(&[]).is_empty());
}

// =============================================================
// SlotFilter
// =============================================================

#[test]
fn filter_serde_shape() {
    assert_eq!(serde_json::to_value(SlotFilter::Unassigned).unwrap(), json!({ "kind": "unassigned" }));
    let back: SlotFilter = serde_json::from_value(json!({ "kind": "slot", "slot": "X" })).unwrap();
    assert_eq!(back, SlotFilter::Slot(SlotId::from("X")));
}

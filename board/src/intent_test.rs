#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

// =============================================================
// Wire shape
// =============================================================

#[test]
fn begin_drag_from_json() {
    let intent: Intent = serde_json::from_value(json!({ "op": "begin_drag", "item": "1" })).unwrap();
    assert_eq!(intent, Intent::BeginDrag { item: ItemId::from("1") });
}

#[test]
fn complete_drop_from_json() {
    let intent: Intent = serde_json::from_value(json!({ "op": "complete_drop", "item": "1", "slot": "X" })).unwrap();
    assert_eq!(intent, Intent::CompleteDrop { item: ItemId::from("1"), slot: SlotId::from("X") });
}

#[test]
fn reset_is_bare_tag() {
    assert_eq!(serde_json::to_value(Intent::Reset).unwrap(), json!({ "op": "reset" }));
}

#[test]
fn pointer_button_defaults_to_primary() {
    let intent: Intent = serde_json::from_value(json!({ "op": "pointer_down", "x": 1.0, "y": 2.0 })).unwrap();
    assert_eq!(intent, Intent::PointerDown { x: 1.0, y: 2.0, button: Button::Primary });
}

#[test]
fn key_down_carries_key_name() {
    let intent: Intent = serde_json::from_value(json!({ "op": "key_down", "key": "Escape" })).unwrap();
    assert_eq!(intent, Intent::KeyDown { key: Key("Escape".into()) });
}

#[test]
fn unknown_op_rejects() {
    assert!(serde_json::from_value::<Intent>(json!({ "op": "teleport" })).is_err());
}

#[test]
fn missing_field_rejects() {
    assert!(serde_json::from_value::<Intent>(json!({ "op": "complete_drop", "item": "1" })).is_err());
}

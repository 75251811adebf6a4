use board::engine::{EngineConfig, EngineCore};
use board::roster::{ItemId, Roster, RosterConfig, SlotId};

use super::*;

fn engine() -> EngineCore {
    let config: RosterConfig = serde_json::from_str(
        r#"{ "items": [{ "id": "1", "label": "A" }, { "id": "2", "label": "B" }], "slots": [{ "id": "X", "label": "Wash" }] }"#,
    )
    .unwrap();
    EngineCore::new(Roster::from_config(&config).unwrap(), EngineConfig::default())
}

// =============================================================
// render_snapshot
// =============================================================

#[test]
fn initial_board_lists_everything_unassigned() {
    let text = render_snapshot(&engine().snapshot());
    assert_eq!(
        text,
        "phase=idle selected=- slot=- hover=- drop_complete=false\n[X] Wash: -\nunassigned: 1 A, 2 B"
    );
}

#[test]
fn dragging_shows_selection() {
    let mut engine = engine();
    let snapshot = engine.begin_drag(&ItemId::from("2"));
    let first = render_snapshot(&snapshot).lines().next().unwrap().to_owned();
    assert_eq!(first, "phase=dragging selected=2 slot=- hover=- drop_complete=false");
}

#[test]
fn assignment_moves_item_under_its_slot() {
    let mut engine = engine();
    engine.begin_drag(&ItemId::from("1"));
    let snapshot = engine.complete_drop(&ItemId::from("1"), &SlotId::from("X"));
    let text = render_snapshot(&snapshot);
    assert!(text.contains("[X] Wash: 1 A"));
    assert!(text.ends_with("unassigned: 2 B"));
    assert!(text.contains("drop_complete=true"));
}

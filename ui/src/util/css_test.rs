use board::engine::{EngineConfig, EngineCore};
use board::roster::{Roster, RosterConfig};

use super::*;

fn core() -> EngineCore {
    EngineCore::new(Roster::from_config(&RosterConfig::default()).unwrap(), EngineConfig::default())
}

fn worker() -> ItemId {
    ItemId::from("1")
}

fn kitchen() -> SlotId {
    SlotId::from("kitchen")
}

// =============================================================
// card_css
// =============================================================

#[test]
fn idle_card_sits_at_first_row() {
    let css = card_css(&core().snapshot(), &worker());
    assert!(css.contains("left: 30px; top: 171px; width: 202px; height: 68px;"));
    assert!(css.contains("translate(0px, 0px)"));
    assert!(css.contains("background: #FFFFFF"));
    assert!(css.contains("opacity: 1;"));
}

#[test]
fn dragged_card_is_offset_and_translucent() {
    let mut core = core();
    core.on_pointer_down(Point::new(40.0, 180.0), board::input::Button::Primary);
    core.on_pointer_move(Point::new(60.0, 230.0));
    let css = card_css(&core.snapshot(), &worker());
    assert!(css.contains("translate(20px, 50px)"));
    assert!(css.contains("background: #EDF4F7"));
    assert!(css.contains("opacity: 0.5;"));
}

// =============================================================
// zone_css
// =============================================================

#[test]
fn empty_zone_uses_init_palette() {
    let css = zone_css(&core().snapshot(), &kitchen());
    assert!(css.contains("left: 867px; top: 429px;"));
    assert!(css.contains("background: #939393"));
}

#[test]
fn filled_zone_uses_dropped_palette() {
    let mut core = core();
    core.begin_drag(&worker());
    let snap = core.complete_drop(&worker(), &kitchen());
    assert!(zone_css(&snap, &kitchen()).contains("background: #E57C73"));
}

#[test]
fn unknown_zone_has_no_style() {
    assert_eq!(zone_css(&core().snapshot(), &SlotId::from("nowhere")), "");
}

// =============================================================
// Card parts
// =============================================================

#[test]
fn badge_and_note_colours() {
    assert_eq!(badge_css(), "background: #0065A5; color: #FFFFFF;");
    assert_eq!(note_css(), "color: #959595;");
}

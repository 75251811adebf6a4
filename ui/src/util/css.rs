//! Inline style strings for cards and zones.
//!
//! Positions come from the engine's layout and colours from
//! `board::style`, so what is drawn always matches what is hit-tested.

#[cfg(test)]
#[path = "css_test.rs"]
mod css_test;

use board::engine::Snapshot;
use board::filter::SlotFilter;
use board::geometry::{Point, Rect, card_rect};
use board::roster::{ItemId, SlotId};
use board::style::{BADGE, NOTE_TEXT, card_opacity, card_style, zone_style};

fn rect_css(rect: Rect) -> String {
    format!("left: {}px; top: {}px; width: {}px; height: {}px;", rect.x, rect.y, rect.width, rect.height)
}

/// Style for the card of `item`: its row in the unassigned column, shifted
/// by the drag offset while it is being dragged.
#[must_use]
pub fn card_css(snap: &Snapshot, item: &ItemId) -> String {
    let row = snap
        .items_in(&SlotFilter::Unassigned)
        .iter()
        .position(|entry| &entry.id == item)
        .unwrap_or_default();
    let offset = if snap.is_dragging() && snap.selected_item.as_ref() == Some(item) {
        snap.drag_offset
    } else {
        Point::default()
    };
    let palette = card_style(snap, item).palette();
    format!(
        "{} transform: translate({}px, {}px); background: {}; border: 1px solid {}; color: {}; opacity: {};",
        rect_css(card_rect(row)),
        offset.x,
        offset.y,
        palette.background,
        palette.border,
        palette.text,
        card_opacity(snap, item),
    )
}

/// Style for the zone of `slot`. Empty for an unknown slot.
#[must_use]
pub fn zone_css(snap: &Snapshot, slot: &SlotId) -> String {
    let Some(view) = snap.slot(slot) else {
        return String::new();
    };
    let palette = zone_style(snap, slot).palette();
    format!(
        "{} background: {}; border: 1px solid {}; color: {};",
        rect_css(view.rect),
        palette.background,
        palette.border,
        palette.text,
    )
}

/// Style for a card's badge pill.
#[must_use]
pub fn badge_css() -> String {
    format!("background: {}; color: {};", BADGE.background, BADGE.text)
}

/// Style for a card's note line.
#[must_use]
pub fn note_css() -> String {
    format!("color: {NOTE_TEXT};")
}

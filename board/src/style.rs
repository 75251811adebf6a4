//! Visual states for cards and zones, derived from a [`Snapshot`].
//!
//! The view layer never decides colours itself: it asks this module which
//! state a card or zone is in and paints the matching [`Palette`]. Keeping the
//! derivation here makes it testable without a DOM.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::engine::Snapshot;
use crate::roster::{ItemId, SlotId};

/// Colours for one visual state, as CSS colour strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

/// Badge pill on a card.
pub const BADGE: Palette = Palette { background: "#0065A5", border: "#0065A5", text: "#FFFFFF" };

/// Secondary line on a card.
pub const NOTE_TEXT: &str = "#959595";

/// Card opacity while the card is being dragged.
pub const DRAGGING_OPACITY: f64 = 0.5;

/// Visual state of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    Selected,
    Unselected,
}

impl CardStyle {
    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Self::Selected => Palette { background: "#EDF4F7", border: "#006BB5", text: "#383838" },
            Self::Unselected => Palette { background: "#FFFFFF", border: "#CACACA", text: "#383838" },
        }
    }
}

/// Visual state of a drop zone.
///
/// When several states apply the highest wins: `Dropped > Hover > Selected > Init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneStyle {
    /// Empty and not interacted with.
    Init,
    /// Tapped with no item selected.
    Selected,
    /// The dragged item is over the zone.
    Hover,
    /// Holds an item.
    Dropped,
}

impl ZoneStyle {
    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Self::Init => Palette { background: "#939393", border: "#939393", text: "#FFFFFF" },
            Self::Selected => Palette { background: "#EDF4F7", border: "#006BB5", text: "#006BB5" },
            Self::Hover => Palette { background: "#FFFFFF", border: "#CACACA", text: "#383838" },
            Self::Dropped => Palette { background: "#E57C73", border: "#E57C73", text: "#FFFFFF" },
        }
    }

    /// BEM modifier used by the UI stylesheet.
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Selected => "selected",
            Self::Hover => "hover",
            Self::Dropped => "dropped",
        }
    }
}

/// Style of the card for `item`.
#[must_use]
pub fn card_style(snap: &Snapshot, item: &ItemId) -> CardStyle {
    if snap.selected_item.as_ref() == Some(item) { CardStyle::Selected } else { CardStyle::Unselected }
}

/// Opacity of the card for `item`: translucent while it is being dragged.
#[must_use]
pub fn card_opacity(snap: &Snapshot, item: &ItemId) -> f64 {
    if snap.is_dragging() && snap.selected_item.as_ref() == Some(item) { DRAGGING_OPACITY } else { 1.0 }
}

/// Style of the zone for `slot`.
#[must_use]
pub fn zone_style(snap: &Snapshot, slot: &SlotId) -> ZoneStyle {
    let Some(view) = snap.slot(slot) else {
        return ZoneStyle::Init;
    };
    if view.occupant.is_some() {
        return ZoneStyle::Dropped;
    }
    if snap.hover_slot.as_ref() == Some(slot) {
        return ZoneStyle::Hover;
    }
    if snap.selected_slot.as_ref() == Some(slot) {
        return ZoneStyle::Selected;
    }
    ZoneStyle::Init
}

/// Text shown inside the zone: the occupant's label when filled, otherwise
/// the slot's own label. Empty for an unknown slot.
#[must_use]
pub fn zone_caption(snap: &Snapshot, slot: &SlotId) -> String {
    let Some(view) = snap.slot(slot) else {
        return String::new();
    };
    view.occupant
        .as_ref()
        .and_then(|id| snap.item(id))
        .map_or_else(|| view.label.clone(), |item| item.label.clone())
}

//! Input model: mouse buttons, keys, and the gesture state machine.
//!
//! `Interaction` is the persistent selection state that outlives a single
//! gesture and is visible to the view layer. `InputState` is the active
//! gesture being tracked between pointer-down and pointer-up, carrying the
//! context needed to tell a tap from a drag and to find the drop target on
//! release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::roster::{ItemId, SlotId};

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button, pen contact, or a single-finger touch.
    #[default]
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(pub String);

impl Key {
    /// Whether this is the Escape key.
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape" || self.0 == "Esc"
    }
}

/// Selection state that persists between gestures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interaction {
    /// The item currently selected (by tap or by dragging it). At most one.
    pub selected_item: Option<ItemId>,
    /// The slot selected by tapping it with no item selected.
    pub selected_slot: Option<SlotId>,
    /// Set when a drop (or tap-assign) lands; cleared by reset, or when the
    /// last filled slot is released.
    pub drop_complete: bool,
}

/// Coarse phase reported to the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No drag in progress.
    #[default]
    Idle,
    /// An item is being dragged.
    Dragging,
}

/// Internal state for the gesture state machine.
///
/// Each active variant carries the context needed on pointer-up.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The pointer went down on a card but has not yet moved past the drag
    /// threshold. Releasing here is a tap.
    PressingItem {
        /// Card under the pointer at press time.
        id: ItemId,
        /// Screen position of the press.
        origin: Point,
    },
    /// The pointer went down on a slot. Releasing here is a tap on the slot.
    PressingSlot {
        id: SlotId,
    },
    /// An item is being dragged.
    Dragging {
        /// Item being dragged.
        id: ItemId,
        /// Screen position of the press; the card is drawn offset from its
        /// resting place by `pointer - origin`.
        origin: Point,
        /// Current pointer delta from `origin`. Render-only.
        offset: Point,
        /// Slot under the pointer, if any.
        hover: Option<SlotId>,
    },
}

impl InputState {
    /// The coarse phase of this gesture.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Self::Dragging { .. } => Phase::Dragging,
            _ => Phase::Idle,
        }
    }

    /// The item being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<&ItemId> {
        match self {
            Self::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }
}

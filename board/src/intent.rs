//! Serializable intents: every way a host can drive the engine.
//!
//! Hosts that own their own gesture handling call the engine's named
//! operations directly. Hosts that record or script interactions (the
//! terminal driver's replay files, the UI's dispatch handle) send `Intent`
//! values through [`crate::engine::EngineCore::dispatch`] instead.
//!
//! On the wire an intent is a JSON object tagged by `op`:
//!
//! ```json
//! { "op": "begin_drag", "item": "1" }
//! { "op": "complete_drop", "item": "1", "slot": "X" }
//! { "op": "pointer_move", "x": 120.0, "y": 300.0 }
//! ```

#[cfg(test)]
#[path = "intent_test.rs"]
mod intent_test;

use serde::{Deserialize, Serialize};

use crate::input::{Button, Key};
use crate::roster::{ItemId, SlotId};

/// A single request to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Intent {
    /// Start dragging an item.
    BeginDrag { item: ItemId },
    /// Finish dragging `item` over `slot`.
    CompleteDrop { item: ItemId, slot: SlotId },
    /// Finish dragging `item` away from any slot.
    CancelDrag { item: ItemId },
    /// Restore the initial state.
    Reset,
    /// Select an item without dragging it.
    SelectItem { item: ItemId },
    /// Tap a slot: assigns the selected item, or selects the slot.
    TapSlot { slot: SlotId },
    /// Return a slot's occupant to the unassigned pool.
    ReleaseSlot { slot: SlotId },
    /// Raw pointer press in board coordinates.
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Button,
    },
    /// Raw pointer movement in board coordinates.
    PointerMove { x: f64, y: f64 },
    /// Raw pointer release in board coordinates.
    PointerUp {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Button,
    },
    /// Key press.
    KeyDown { key: Key },
}

//! The board engine: owns the roster and the interaction state machine.
//!
//! DESIGN
//! ======
//! `EngineCore` is the single writer of board state. Hosts drive it in one of
//! three ways: the named drag operations (`begin_drag`, `complete_drop`,
//! `cancel_drag`, `reset`) which each return a fresh [`Snapshot`]; raw pointer
//! and key handlers which hit-test and return host [`Action`]s; or
//! [`EngineCore::dispatch`] with a serialized [`Intent`]. Every entry point is
//! synchronous and total: unknown ids and out-of-order requests are logged at
//! debug level and otherwise ignored.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::{Deserialize, Serialize};

use crate::consts::DRAG_THRESHOLD_PX;
use crate::filter::{SlotFilter, items_in};
use crate::geometry::{Point, Rect};
use crate::hit::{Hit, hit_test, slot_at};
use crate::input::{Button, InputState, Interaction, Key, Phase};
use crate::intent::Intent;
use crate::roster::{Item, ItemId, Roster, SlotId};

/// What happens when an item is dropped onto a slot that already holds a
/// different item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropPolicy {
    /// Last drop wins: the previous occupant returns to the unassigned pool.
    #[default]
    Replace,
    /// A filled slot stops accepting drops; the drag ends as cancelled.
    Reject,
}

/// Engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub policy: DropPolicy,
}

/// Actions returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// The selected item changed.
    Selected { item: Option<ItemId> },
    /// The selected slot changed.
    SlotSelected { slot: Option<SlotId> },
    /// A drag began on `item`.
    DragStarted { item: ItemId },
    /// The slot under the dragged item changed.
    HoverChanged { slot: Option<SlotId> },
    /// `item` now occupies `slot`; `displaced` went back to the unassigned pool.
    Assigned { item: ItemId, slot: SlotId, displaced: Option<ItemId> },
    /// A drag ended without an assignment.
    DropCancelled { item: ItemId },
    /// `item` was removed from `slot`.
    Released { slot: SlotId, item: ItemId },
    /// Everything went back to the initial state.
    Reset,
    /// The host should switch the pointer cursor.
    SetCursor { cursor: String },
    /// Something visible changed.
    RenderNeeded,
}

/// A slot as the view layer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotView {
    pub id: SlotId,
    pub label: String,
    pub rect: Rect,
    /// The item currently assigned here.
    pub occupant: Option<ItemId>,
    /// Whether dropping the selected item here would assign it.
    pub accepts: bool,
}

/// Immutable picture of the board the view re-renders from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub selected_item: Option<ItemId>,
    pub selected_slot: Option<SlotId>,
    /// Slot under the pointer while dragging.
    pub hover_slot: Option<SlotId>,
    /// Pointer delta since the drag began. Zero when idle.
    pub drag_offset: Point,
    pub drop_complete: bool,
    pub items: Vec<Item>,
    pub slots: Vec<SlotView>,
}

impl Snapshot {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    /// Items matching `filter`, in roster order.
    #[must_use]
    pub fn items_in(&self, filter: &SlotFilter) -> Vec<&Item> {
        items_in(&self.items, filter)
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    #[must_use]
    pub fn slot(&self, id: &SlotId) -> Option<&SlotView> {
        self.slots.iter().find(|slot| &slot.id == id)
    }
}

/// Core engine state: the roster plus the interaction state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineCore {
    pub roster: Roster,
    pub ui: Interaction,
    pub input: InputState,
    pub config: EngineConfig,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(Roster::default(), EngineConfig::default())
    }
}

impl EngineCore {
    /// Create an engine with every item unassigned and nothing selected.
    #[must_use]
    pub fn new(mut roster: Roster, config: EngineConfig) -> Self {
        roster.clear_assignments();
        Self { roster, ui: Interaction::default(), input: InputState::Idle, config }
    }

    // --- Drag contract ---

    /// Start dragging `item` and mark it selected.
    pub fn begin_drag(&mut self, item: &ItemId) -> Snapshot {
        self.start_drag(item, Point::default());
        self.snapshot()
    }

    /// End the drag of `item` over `slot`: assign if the slot accepts it,
    /// otherwise cancel. Ignored unless `item` is being dragged and `slot`
    /// exists.
    pub fn complete_drop(&mut self, item: &ItemId, slot: &SlotId) -> Snapshot {
        self.finish_drop(item, slot);
        self.snapshot()
    }

    /// End the drag of `item` without an assignment.
    pub fn cancel_drag(&mut self, item: &ItemId) -> Snapshot {
        self.abort_drag(item);
        self.snapshot()
    }

    /// Unassign everything and clear all interaction state.
    pub fn reset(&mut self) -> Snapshot {
        self.reset_all();
        self.snapshot()
    }

    // --- Selection ---

    /// Select `item` without dragging. Ignored while a drag is in progress.
    pub fn select_item(&mut self, item: &ItemId) -> Vec<Action> {
        if self.roster.item(item).is_none() {
            tracing::debug!(%item, "select_item ignored: unknown item");
            return vec![];
        }
        if self.input.phase() == Phase::Dragging {
            tracing::debug!(%item, "select_item ignored: drag in progress");
            return vec![];
        }
        if self.ui.selected_item.as_ref() == Some(item) {
            return vec![];
        }
        self.ui.selected_item = Some(item.clone());
        vec![Action::Selected { item: Some(item.clone()) }, Action::RenderNeeded]
    }

    /// Tap `slot`: assign the selected item to it when one is selected,
    /// otherwise mark the slot selected.
    pub fn tap_slot(&mut self, slot: &SlotId) -> Vec<Action> {
        if self.roster.slot(slot).is_none() {
            tracing::debug!(%slot, "tap_slot ignored: unknown slot");
            return vec![];
        }
        if self.input.phase() == Phase::Dragging {
            tracing::debug!(%slot, "tap_slot ignored: drag in progress");
            return vec![];
        }

        let Some(item) = self.ui.selected_item.clone() else {
            if self.ui.selected_slot.as_ref() == Some(slot) {
                return vec![];
            }
            self.ui.selected_slot = Some(slot.clone());
            return vec![Action::SlotSelected { slot: Some(slot.clone()) }, Action::RenderNeeded];
        };

        if !self.accepts(slot, &item) {
            tracing::debug!(%item, %slot, "tap_slot ignored: slot is filled");
            return vec![];
        }
        let mut actions = self.assign(&item, slot);
        self.ui.selected_item = None;
        actions.push(Action::Selected { item: None });
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Return the occupant of `slot` to the unassigned pool.
    pub fn release_slot(&mut self, slot: &SlotId) -> Vec<Action> {
        let Some(item) = self.roster.occupant(slot).map(|item| item.id.clone()) else {
            tracing::debug!(%slot, "release_slot ignored: slot is empty or unknown");
            return vec![];
        };
        self.roster.unassign(&item);
        if !self.roster.has_assignments() {
            self.ui.drop_complete = false;
        }
        tracing::info!(%item, %slot, "slot released");
        vec![Action::Released { slot: slot.clone(), item }, Action::RenderNeeded]
    }

    // --- Input events ---

    /// Pointer pressed at `pt`. Only the primary button starts gestures.
    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return vec![];
        }
        if let Some(id) = self.input.dragging() {
            tracing::debug!(item = %id, "pointer down ignored: drag in progress");
            return vec![];
        }
        self.input = match hit_test(pt, &self.roster) {
            Some(Hit::Item(id)) => InputState::PressingItem { id, origin: pt },
            Some(Hit::Slot(id)) => InputState::PressingSlot { id },
            None => InputState::Idle,
        };
        vec![]
    }

    /// Pointer moved to `pt`.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        match self.input.clone() {
            InputState::PressingItem { id, origin } => {
                if pt.delta_from(origin).length() < DRAG_THRESHOLD_PX {
                    return vec![];
                }
                let mut actions = self.start_drag(&id, origin);
                actions.extend(self.track_drag(pt));
                actions
            }
            InputState::Dragging { .. } => self.track_drag(pt),
            InputState::Idle | InputState::PressingSlot { .. } => vec![],
        }
    }

    /// Pointer released at `pt`.
    pub fn on_pointer_up(&mut self, pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return vec![];
        }
        match self.input.clone() {
            InputState::PressingItem { id, .. } => {
                self.input = InputState::Idle;
                self.select_item(&id)
            }
            InputState::PressingSlot { id } => {
                self.input = InputState::Idle;
                if slot_at(pt, &self.roster) == Some(&id) { self.tap_slot(&id) } else { vec![] }
            }
            InputState::Dragging { id, .. } => match slot_at(pt, &self.roster).cloned() {
                Some(slot) => self.finish_drop(&id, &slot),
                None => self.abort_drag(&id),
            },
            InputState::Idle => vec![],
        }
    }

    /// Key pressed. Escape cancels a drag, or clears the selection when idle.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if !key.is_escape() {
            return vec![];
        }
        if let Some(id) = self.input.dragging().cloned() {
            return self.abort_drag(&id);
        }
        self.input = InputState::Idle;

        let mut actions = Vec::new();
        if self.ui.selected_item.take().is_some() {
            actions.push(Action::Selected { item: None });
        }
        if self.ui.selected_slot.take().is_some() {
            actions.push(Action::SlotSelected { slot: None });
        }
        if !actions.is_empty() {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    // --- Dispatch ---

    /// Apply a serialized intent.
    pub fn dispatch(&mut self, intent: Intent) -> Vec<Action> {
        match intent {
            Intent::BeginDrag { item } => self.start_drag(&item, Point::default()),
            Intent::CompleteDrop { item, slot } => self.finish_drop(&item, &slot),
            Intent::CancelDrag { item } => self.abort_drag(&item),
            Intent::Reset => self.reset_all(),
            Intent::SelectItem { item } => self.select_item(&item),
            Intent::TapSlot { slot } => self.tap_slot(&slot),
            Intent::ReleaseSlot { slot } => self.release_slot(&slot),
            Intent::PointerDown { x, y, button } => self.on_pointer_down(Point::new(x, y), button),
            Intent::PointerMove { x, y } => self.on_pointer_move(Point::new(x, y)),
            Intent::PointerUp { x, y, button } => self.on_pointer_up(Point::new(x, y), button),
            Intent::KeyDown { key } => self.on_key_down(&key),
        }
    }

    // --- Queries ---

    /// Whether dropping `item` onto `slot` would assign it under the current policy.
    #[must_use]
    pub fn accepts(&self, slot: &SlotId, item: &ItemId) -> bool {
        if self.roster.slot(slot).is_none() {
            return false;
        }
        match self.roster.occupant(slot) {
            None => true,
            Some(occupant) if &occupant.id == item => true,
            Some(_) => self.config.policy == DropPolicy::Replace,
        }
    }

    /// Build the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let (hover_slot, drag_offset) = match &self.input {
            InputState::Dragging { hover, offset, .. } => (hover.clone(), *offset),
            _ => (None, Point::default()),
        };
        let slots = self
            .roster
            .slots()
            .iter()
            .map(|slot| SlotView {
                id: slot.id.clone(),
                label: slot.label.clone(),
                rect: slot.rect,
                occupant: self.roster.occupant(&slot.id).map(|item| item.id.clone()),
                accepts: self.ui.selected_item.as_ref().is_some_and(|item| self.accepts(&slot.id, item)),
            })
            .collect();

        Snapshot {
            phase: self.input.phase(),
            selected_item: self.ui.selected_item.clone(),
            selected_slot: self.ui.selected_slot.clone(),
            hover_slot,
            drag_offset,
            drop_complete: self.ui.drop_complete,
            items: self.roster.items().to_vec(),
            slots,
        }
    }

    // --- Transitions ---

    fn start_drag(&mut self, item: &ItemId, origin: Point) -> Vec<Action> {
        if self.roster.item(item).is_none() {
            tracing::debug!(%item, "begin_drag ignored: unknown item");
            return vec![];
        }
        if let Some(current) = self.input.dragging() {
            if current != item {
                tracing::debug!(%item, dragging = %current, "begin_drag ignored: another drag in progress");
            }
            return vec![];
        }

        tracing::debug!(%item, "drag started");
        self.input = InputState::Dragging { id: item.clone(), origin, offset: Point::default(), hover: None };
        self.ui.selected_item = Some(item.clone());
        vec![
            Action::DragStarted { item: item.clone() },
            Action::Selected { item: Some(item.clone()) },
            Action::SetCursor { cursor: "grabbing".into() },
            Action::RenderNeeded,
        ]
    }

    fn track_drag(&mut self, pt: Point) -> Vec<Action> {
        let next_hover = slot_at(pt, &self.roster).cloned();
        let InputState::Dragging { origin, offset, hover, .. } = &mut self.input else {
            return vec![];
        };
        *offset = pt.delta_from(*origin);

        let mut actions = Vec::new();
        if *hover != next_hover {
            hover.clone_from(&next_hover);
            actions.push(Action::HoverChanged { slot: next_hover });
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    fn finish_drop(&mut self, item: &ItemId, slot: &SlotId) -> Vec<Action> {
        if self.input.dragging() != Some(item) {
            tracing::debug!(%item, %slot, "complete_drop ignored: item is not being dragged");
            return vec![];
        }
        if self.roster.slot(slot).is_none() {
            tracing::debug!(%item, %slot, "complete_drop ignored: unknown slot");
            return vec![];
        }
        if !self.accepts(slot, item) {
            tracing::debug!(%item, %slot, "drop rejected: slot is filled");
            return self.abort_drag(item);
        }

        let mut actions = self.assign(item, slot);
        self.input = InputState::Idle;
        self.ui.selected_item = None;
        actions.extend([
            Action::Selected { item: None },
            Action::SetCursor { cursor: "default".into() },
            Action::RenderNeeded,
        ]);
        actions
    }

    fn abort_drag(&mut self, item: &ItemId) -> Vec<Action> {
        if self.input.dragging() != Some(item) {
            tracing::debug!(%item, "cancel_drag ignored: item is not being dragged");
            return vec![];
        }
        tracing::debug!(%item, "drag cancelled");
        self.input = InputState::Idle;
        self.ui.selected_item = None;
        vec![
            Action::DropCancelled { item: item.clone() },
            Action::Selected { item: None },
            Action::SetCursor { cursor: "default".into() },
            Action::RenderNeeded,
        ]
    }

    /// Assign `item` to `slot`, displacing a different occupant. The caller
    /// has already checked [`Self::accepts`].
    fn assign(&mut self, item: &ItemId, slot: &SlotId) -> Vec<Action> {
        let displaced = self
            .roster
            .occupant(slot)
            .map(|occupant| occupant.id.clone())
            .filter(|occupant| occupant != item);
        if let Some(previous) = &displaced {
            self.roster.unassign(previous);
        }
        self.roster.assign(item, slot);
        self.ui.drop_complete = true;
        if self.ui.selected_slot.as_ref() == Some(slot) {
            self.ui.selected_slot = None;
        }
        tracing::info!(%item, %slot, displaced = ?displaced, "item assigned");
        vec![Action::Assigned { item: item.clone(), slot: slot.clone(), displaced }]
    }

    fn reset_all(&mut self) -> Vec<Action> {
        self.roster.clear_assignments();
        self.ui = Interaction::default();
        self.input = InputState::Idle;
        tracing::info!("board reset");
        vec![Action::Reset, Action::SetCursor { cursor: "default".into() }, Action::RenderNeeded]
    }
}

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use board::engine::{Action, EngineCore, Snapshot};
use board::geometry::Point;
use board::input::{Button, Key};
use board::intent::Intent;
use board::roster::{ItemId, SlotId};
use leptos::prelude::*;

/// Cursor shown over the board when no gesture asks for another.
pub const DEFAULT_CURSOR: &str = "default";

/// Owner of the board engine for one page.
///
/// Readers call [`BoardHandle::snapshot`] inside a reactive closure; writers
/// call one of the intent methods. Every write goes through
/// [`BoardHandle::dispatch`], which runs the engine synchronously and then
/// applies the host actions it returns.
#[derive(Clone, Copy)]
pub struct BoardHandle {
    core: RwSignal<EngineCore>,
    cursor: RwSignal<String>,
}

impl BoardHandle {
    #[must_use]
    pub fn new(core: EngineCore) -> Self {
        Self { core: RwSignal::new(core), cursor: RwSignal::new(DEFAULT_CURSOR.to_owned()) }
    }

    // --- Read accessors ---

    /// Current snapshot. Tracks the engine signal when called reactively.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.core.with(EngineCore::snapshot)
    }

    /// Current pointer cursor for the board surface.
    #[must_use]
    pub fn cursor(&self) -> String {
        self.cursor.get()
    }

    // --- Intents ---

    /// Run one intent through the engine and apply the resulting actions.
    pub fn dispatch(&self, intent: Intent) {
        log::debug!("dispatch {intent:?}");
        let actions = self.core.try_update(|core| core.dispatch(intent)).unwrap_or_default();
        for action in actions {
            self.apply(action);
        }
    }

    pub fn begin_drag(&self, item: ItemId) {
        self.dispatch(Intent::BeginDrag { item });
    }

    pub fn complete_drop(&self, item: ItemId, slot: SlotId) {
        self.dispatch(Intent::CompleteDrop { item, slot });
    }

    pub fn cancel_drag(&self, item: ItemId) {
        self.dispatch(Intent::CancelDrag { item });
    }

    pub fn reset(&self) {
        self.dispatch(Intent::Reset);
    }

    /// Cancel the drag in progress, if any. Used when the browser takes the
    /// pointer away before a release is seen.
    pub fn cancel_active_drag(&self) {
        let dragging = self.core.with_untracked(|core| core.input.dragging().cloned());
        if let Some(item) = dragging {
            self.cancel_drag(item);
        }
    }

    pub fn release_slot(&self, slot: SlotId) {
        self.dispatch(Intent::ReleaseSlot { slot });
    }

    pub fn pointer_down(&self, pt: Point, button: Button) {
        self.dispatch(Intent::PointerDown { x: pt.x, y: pt.y, button });
    }

    pub fn pointer_move(&self, pt: Point) {
        self.dispatch(Intent::PointerMove { x: pt.x, y: pt.y });
    }

    pub fn pointer_up(&self, pt: Point, button: Button) {
        self.dispatch(Intent::PointerUp { x: pt.x, y: pt.y, button });
    }

    pub fn key_down(&self, key: Key) {
        self.dispatch(Intent::KeyDown { key });
    }

    fn apply(&self, action: Action) {
        match action {
            Action::SetCursor { cursor } => self.cursor.set(cursor),
            // The engine signal already changed; dependents re-render on their own.
            Action::RenderNeeded => {}
            Action::Assigned { item, slot, displaced } => {
                log::info!("assigned {item} to {slot} (displaced: {displaced:?})");
            }
            Action::Reset => log::info!("board reset"),
            other => log::debug!("{other:?}"),
        }
    }
}

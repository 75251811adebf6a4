//! Draggable card for one unassigned person.

use board::engine::Snapshot;
use board::roster::ItemId;
use leptos::ev::PointerEvent;
use leptos::prelude::*;

use crate::state::board::BoardHandle;
use crate::util::css::{badge_css, card_css, note_css};
use crate::util::dom::{event_button, event_point};

/// A card the user presses to select or drags onto a zone.
///
/// The press is forwarded to the engine, which hit-tests it. The card then
/// captures the pointer so movement and release bubble to the enclosing board
/// surface wherever the pointer goes.
#[component]
pub fn DragCard(board: BoardHandle, snapshot: Memo<Snapshot>, id: ItemId) -> impl IntoView {
    let item = {
        let id = id.clone();
        move || snapshot.with(|snap| snap.item(&id).cloned())
    };
    let style = move || snapshot.with(|snap| card_css(snap, &id));

    let badge = {
        let item = item.clone();
        move || item().map(|item| item.badge).unwrap_or_default()
    };
    let label = {
        let item = item.clone();
        move || item().map(|item| item.label).unwrap_or_default()
    };
    let note = move || item().map(|item| item.note).unwrap_or_default();

    let on_down = move |ev: PointerEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        crate::util::dom::capture_pointer(&ev);
        board.pointer_down(event_point(&ev), event_button(&ev));
    };

    view! {
        <div class="drag-card" style=style on:pointerdown=on_down>
            <div class="drag-card__head">
                <span class="drag-card__badge" style=badge_css()>{badge}</span>
                <span class="drag-card__label">{label}</span>
            </div>
            <span class="drag-card__note" style=note_css()>{note}</span>
        </div>
    }
}

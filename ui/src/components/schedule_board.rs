//! Board surface: the root container for cards and zones.

use board::filter::SlotFilter;
use board::input::Key;
use board::roster::{ItemId, SlotId};
use leptos::ev::{KeyboardEvent, PointerEvent};
use leptos::prelude::*;

use crate::components::drag_card::DragCard;
use crate::components::drop_zone::DropZone;
use crate::components::reset_button::ResetButton;
use crate::components::status_bar::StatusBar;
use crate::state::board::BoardHandle;
use crate::util::dom::{event_button, event_point};

/// The board surface.
///
/// Cards and zones forward presses; the surface itself tracks movement and
/// release, which the pressed card's pointer capture routes here even when the
/// pointer leaves the board. If the browser cancels the pointer or drops the
/// capture before a release (an interrupted touch, say), the drag is cancelled.
#[component]
pub fn ScheduleBoard(board: BoardHandle) -> impl IntoView {
    let snapshot = Memo::new(move |_| board.snapshot());

    let open_items = move || {
        snapshot.with(|snap| {
            snap.items_in(&SlotFilter::Unassigned)
                .into_iter()
                .map(|item| item.id.clone())
                .collect::<Vec<ItemId>>()
        })
    };
    let slots = move || snapshot.with(|snap| snap.slots.iter().map(|slot| slot.id.clone()).collect::<Vec<SlotId>>());

    let on_move = move |ev: PointerEvent| board.pointer_move(event_point(&ev));
    let on_up = move |ev: PointerEvent| board.pointer_up(event_point(&ev), event_button(&ev));
    let on_cancel = move |_: PointerEvent| board.cancel_active_drag();
    let on_lost = move |_: PointerEvent| board.cancel_active_drag();
    // Presses call prevent_default, which also suppresses focus; focus by hand
    // so Escape reaches the surface.
    let surface = NodeRef::<leptos::html::Div>::new();
    let on_down = move |_: PointerEvent| {
        if let Some(el) = surface.get_untracked() {
            if let Err(err) = el.focus() {
                log::debug!("board focus failed: {err:?}");
            }
        }
    };
    let on_key = move |ev: KeyboardEvent| board.key_down(Key(ev.key()));

    view! {
        <div
            class="schedule-board"
            tabindex="0"
            node_ref=surface
            style=move || format!("cursor: {};", board.cursor())
            on:pointermove=on_move
            on:pointerup=on_up
            on:pointerdown=on_down
            on:pointercancel=on_cancel
            on:lostpointercapture=on_lost
            on:keydown=on_key
        >
            <For
                each=open_items
                key=|id| id.clone()
                children=move |id| view! { <DragCard board=board snapshot=snapshot id=id/> }
            />
            <For
                each=slots
                key=|id| id.clone()
                children=move |id| view! { <DropZone board=board snapshot=snapshot id=id/> }
            />
            <ResetButton board=board/>
            <StatusBar snapshot=snapshot/>
        </div>
    }
}

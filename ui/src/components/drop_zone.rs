//! Drop zone for one task or shift.

use board::engine::Snapshot;
use board::roster::SlotId;
use board::style::{zone_caption, zone_style};
use leptos::ev::PointerEvent;
use leptos::prelude::*;

use crate::state::board::BoardHandle;
use crate::util::css::zone_css;
use crate::util::dom::{event_button, event_point};

/// A zone that shows its task label when empty and its occupant's name when
/// filled. A filled zone offers a clear button that releases the occupant.
#[component]
pub fn DropZone(board: BoardHandle, snapshot: Memo<Snapshot>, id: SlotId) -> impl IntoView {
    let class = {
        let id = id.clone();
        move || snapshot.with(|snap| format!("drop-zone drop-zone--{}", zone_style(snap, &id).modifier()))
    };
    let style = {
        let id = id.clone();
        move || snapshot.with(|snap| zone_css(snap, &id))
    };
    let caption = {
        let id = id.clone();
        move || snapshot.with(|snap| zone_caption(snap, &id))
    };
    let filled = {
        let id = id.clone();
        move || snapshot.with(|snap| snap.slot(&id).is_some_and(|view| view.occupant.is_some()))
    };

    let on_down = move |ev: PointerEvent| {
        ev.prevent_default();
        board.pointer_down(event_point(&ev), event_button(&ev));
    };

    view! {
        <div class=class style=style on:pointerdown=on_down>
            <span class="drop-zone__caption">{caption}</span>
            <Show when=filled>
                {
                    let id = id.clone();
                    view! {
                        <button
                            class="drop-zone__clear"
                            title="Clear"
                            on:pointerdown=|ev: PointerEvent| ev.stop_propagation()
                            on:pointerup=|ev: PointerEvent| ev.stop_propagation()
                            on:click=move |_| board.release_slot(id.clone())
                        >
                            "x"
                        </button>
                    }
                }
            </Show>
        </div>
    }
}

//! Bottom status bar showing the gesture phase and assignment counts.

use board::engine::Snapshot;
use board::filter::SlotFilter;
use board::input::Phase;
use leptos::prelude::*;

/// Status bar at the bottom of the board.
#[component]
pub fn StatusBar(snapshot: Memo<Snapshot>) -> impl IntoView {
    let phase_label = move || match snapshot.with(|snap| snap.phase) {
        Phase::Idle => "Idle",
        Phase::Dragging => "Dragging",
    };
    let selected = move || {
        snapshot.with(|snap| {
            snap.selected_item
                .as_ref()
                .and_then(|id| snap.item(id))
                .map_or_else(String::new, |item| item.label.clone())
        })
    };
    let assigned = move || {
        snapshot.with(|snap| {
            let open = snap.items_in(&SlotFilter::Unassigned).len();
            format!("{}/{} assigned", snap.items.len() - open, snap.items.len())
        })
    };

    view! {
        <div class="status-bar">
            <span class="status-bar__phase">{phase_label}</span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__selected">{selected}</span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__assigned">{assigned}</span>
        </div>
    }
}

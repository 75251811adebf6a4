//! Button that restores the board to its initial state.

use leptos::ev::PointerEvent;
use leptos::prelude::*;

use crate::state::board::BoardHandle;

#[component]
pub fn ResetButton(board: BoardHandle) -> impl IntoView {
    view! {
        <button
            class="reset-button"
            on:pointerdown=|ev: PointerEvent| ev.stop_propagation()
            on:pointerup=|ev: PointerEvent| ev.stop_propagation()
            on:click=move |_| board.reset()
        >
            "Reset"
        </button>
    }
}

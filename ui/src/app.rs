//! Root application component.

use board::engine::EngineCore;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::schedule_board::ScheduleBoard;
use crate::state::board::BoardHandle;

/// Root application component.
///
/// Creates the board's single state holder and passes it down explicitly.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let board = BoardHandle::new(EngineCore::default());

    view! {
        <Title text="Shift Board"/>
        <ScheduleBoard board=board/>
    }
}

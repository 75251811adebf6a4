//! Conversions from DOM event values into engine input types.
//!
//! The board surface is pinned to the top-left of the viewport, so client
//! coordinates are already board coordinates.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use board::geometry::Point;
use board::input::Button;
use leptos::ev::PointerEvent;

/// Map `MouseEvent.button` to an engine button. Back/forward buttons and any
/// other code count as secondary so they never start a gesture.
#[must_use]
pub fn button_from_code(code: i16) -> Button {
    match code {
        0 => Button::Primary,
        1 => Button::Middle,
        _ => Button::Secondary,
    }
}

/// Board-space position of a pointer event.
#[must_use]
pub fn event_point(ev: &PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Send the rest of this pointer's events to the pressed element, so a
/// release outside the board still reaches the surface handlers.
#[cfg(feature = "csr")]
pub fn capture_pointer(ev: &PointerEvent) {
    use wasm_bindgen::JsCast;

    let Some(target) = ev.target().and_then(|target| target.dyn_into::<web_sys::Element>().ok()) else {
        return;
    };
    if let Err(err) = target.set_pointer_capture(ev.pointer_id()) {
        log::debug!("pointer capture failed: {err:?}");
    }
}

/// Engine button of a pointer event.
#[must_use]
pub fn event_button(ev: &PointerEvent) -> Button {
    button_from_code(ev.button())
}

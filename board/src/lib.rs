//! Interaction engine for the drag-and-drop shift board.
//!
//! This crate owns everything about the board that is not pixels: the roster
//! of assignable people and the slots they can be scheduled into, the gesture
//! state machine that turns pointer input into selections and assignments,
//! and the pure style derivation the view layer renders from. It has no DOM
//! or gesture-library dependency; hosts feed it screen coordinates or
//! [`intent::Intent`]s and re-render from [`engine::Snapshot`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EngineCore`]: intents, pointer handlers, snapshots |
//! | [`roster`] | Items, slots, and the roster store built from config |
//! | [`filter`] | Pure helpers that group items by assigned slot |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`intent`] | Serializable intents dispatched by hosts |
//! | [`hit`] | Hit-testing cards and slots under the pointer |
//! | [`geometry`] | Points, rectangles, and the fixed board layout |
//! | [`style`] | Card and zone visual states |
//! | [`consts`] | Shared numeric constants (layout, drag threshold) |

pub mod consts;
pub mod engine;
pub mod filter;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod intent;
pub mod roster;
pub mod style;

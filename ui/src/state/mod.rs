//! Client-side state.
//!
//! DESIGN
//! ======
//! The board has exactly one writer: the [`board::BoardHandle`] created by the
//! root component. It is `Copy`, so it is passed to children as an ordinary
//! prop rather than provided through context.

pub mod board;

//! Small helpers shared by components.

pub mod css;
pub mod dom;

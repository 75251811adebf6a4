pub mod drag_card;
pub mod drop_zone;
pub mod reset_button;
pub mod schedule_board;
pub mod status_bar;

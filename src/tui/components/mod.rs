//! Reusable widgets of the button panel.

pub mod button_grid;
pub mod performance_panel;
pub mod status_bar;

//! Reusable UI components.

mod tab_bar;

pub use tab_bar::TabBar;

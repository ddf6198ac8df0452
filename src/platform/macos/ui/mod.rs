//! Status bar UI for macOS.

pub mod controller;
pub mod status_bar;

pub use controller::create_controller;
pub use status_bar::{install_status_item, rebuild_menu, set_title};

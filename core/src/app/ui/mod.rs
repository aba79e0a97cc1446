//! Settings dialogs shared by every frontend

pub mod mouse_panning;

pub use mouse_panning::{MousePanningAction, MousePanningDialog};

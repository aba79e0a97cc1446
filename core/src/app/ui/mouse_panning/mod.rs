//! Mouse panning configuration dialog
//!
//! Lets the user edit [`MousePanningConfig`](crate::app::input::MousePanningConfig)
//! in a popup window. The dialog works on a copy: accepting returns the edited
//! values to the caller, cancelling leaves the caller's settings untouched.

mod state;
mod types;
mod ui;

#[cfg(test)]
mod tests;

pub use state::{MousePanningDialog, advisory_message, transition};
pub use types::{DialogCommand, DialogError, DialogOutcome, DialogPhase, MousePanningAction};

//! Commands, phases and results of the mouse panning dialog

use thiserror::Error;

use crate::app::input::MousePanningConfig;

/// User intents the dialog reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogCommand {
    /// Overwrite the tuning values with their defaults
    ResetToDefaults,
    /// Hand the edited values back to the caller and close
    Accept,
    /// Discard edits and close
    Reject,
}

/// Where the dialog is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    /// Values are being edited
    Editing,
    /// Defaults were just restored and nothing was edited since
    DefaultsApplied,
    /// Closed with OK
    Accepted,
    /// Closed with Cancel or the window close button
    Rejected,
}

impl DialogPhase {
    pub fn is_closed(self) -> bool {
        matches!(self, DialogPhase::Accepted | DialogPhase::Rejected)
    }
}

/// Result of dispatching a command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogOutcome {
    /// Dialog is still open
    Pending,
    /// Settings to write back into the store
    Accepted(MousePanningConfig),
    /// Store must stay as it was
    Rejected,
}

/// Actions returned from the mouse panning window each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MousePanningAction {
    /// No action this frame
    None,
    /// Store these settings and close the window
    Apply(MousePanningConfig),
    /// Close the window without touching the settings
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DialogError {
    #[error("dialog is already closed")]
    Closed,
}

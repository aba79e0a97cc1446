//! Dialog state and command handling, independent of any rendering

use crate::app::input::{MousePanningConfig, StickCalibration};

use super::types::{DialogCommand, DialogError, DialogOutcome, DialogPhase};

/// Editable snapshot of the mouse panning settings.
///
/// The dialog never sees the settings store. It starts from a copy and hands
/// the edited copy back on [`DialogCommand::Accept`].
#[derive(Debug, Clone)]
pub struct MousePanningDialog {
    phase: DialogPhase,
    /// Values shown in the widgets
    fields: MousePanningConfig,
    /// Values restored by [`DialogCommand::ResetToDefaults`]
    defaults: MousePanningConfig,
    /// Right stick calibration warning, hidden when `None`
    advisory: Option<String>,
}

impl MousePanningDialog {
    /// Open the dialog on the current settings.
    ///
    /// `right_stick` is only used to decide whether to show the calibration
    /// advisory.
    pub fn open(settings: &MousePanningConfig, right_stick: &StickCalibration) -> Self {
        Self::open_with_defaults(settings, &MousePanningConfig::default(), right_stick)
    }

    /// Open the dialog with an explicit set of defaults.
    pub fn open_with_defaults(
        settings: &MousePanningConfig,
        defaults: &MousePanningConfig,
        right_stick: &StickCalibration,
    ) -> Self {
        let advisory = advisory_message(right_stick);
        tracing::info!(
            "Mouse panning dialog opened (advisory {})",
            if advisory.is_some() { "shown" } else { "hidden" }
        );

        Self {
            phase: DialogPhase::Editing,
            fields: *settings,
            defaults: *defaults,
            advisory,
        }
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        !self.phase.is_closed()
    }

    /// Current widget values.
    pub fn fields(&self) -> &MousePanningConfig {
        &self.fields
    }

    pub fn advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }

    /// Apply a user edit to the widget values.
    ///
    /// Leaves [`DialogPhase::DefaultsApplied`] for [`DialogPhase::Editing`]
    /// when the edit actually changed something.
    pub fn edit(&mut self, f: impl FnOnce(&mut MousePanningConfig)) -> Result<(), DialogError> {
        if self.phase.is_closed() {
            return Err(DialogError::Closed);
        }

        let before = self.fields;
        f(&mut self.fields);
        if self.fields != before {
            self.phase = DialogPhase::Editing;
        }
        Ok(())
    }

    /// Run a command through the state machine.
    pub fn dispatch(&mut self, command: DialogCommand) -> Result<DialogOutcome, DialogError> {
        let next = transition(self.phase, command).inspect_err(|_| {
            tracing::warn!("Ignoring {:?}: mouse panning dialog is closed", command);
        })?;

        if command == DialogCommand::ResetToDefaults {
            self.fields.restore_tuning(&self.defaults);
            tracing::debug!("Mouse panning values reset to defaults");
        }
        self.phase = next;

        Ok(match next {
            DialogPhase::Accepted => {
                tracing::info!("Mouse panning settings accepted: {:?}", self.fields);
                DialogOutcome::Accepted(self.fields)
            }
            DialogPhase::Rejected => {
                tracing::info!("Mouse panning dialog cancelled");
                DialogOutcome::Rejected
            }
            DialogPhase::Editing | DialogPhase::DefaultsApplied => DialogOutcome::Pending,
        })
    }
}

/// Next phase for `command`, or an error once the dialog is closed.
pub fn transition(phase: DialogPhase, command: DialogCommand) -> Result<DialogPhase, DialogError> {
    if phase.is_closed() {
        return Err(DialogError::Closed);
    }

    Ok(match command {
        DialogCommand::ResetToDefaults => DialogPhase::DefaultsApplied,
        DialogCommand::Accept => DialogPhase::Accepted,
        DialogCommand::Reject => DialogPhase::Rejected,
    })
}

/// Warning shown when the right stick is not calibrated to 0% deadzone and
/// 100% range. Percentages are truncated, not rounded.
pub fn advisory_message(right_stick: &StickCalibration) -> Option<String> {
    if right_stick.is_neutral() {
        return None;
    }

    Some(format!(
        "Mouse panning works better with a deadzone of 0% and a range of 100%.\n\
         Current values are {}% and {}% respectively.",
        (right_stick.deadzone * 100.0) as i32,
        (right_stick.range * 100.0) as i32,
    ))
}

//! egui rendering for the mouse panning dialog

use egui::{Context, Slider, Ui};

use crate::app::input::{MousePanningConfig, PERCENT_RANGE, SENSITIVITY_RANGE};

use super::state::MousePanningDialog;
use super::types::{DialogCommand, DialogOutcome, MousePanningAction};

impl MousePanningDialog {
    /// Show as a popup window.
    /// Returns an action once the user closes the dialog.
    pub fn show(&mut self, ctx: &Context) -> MousePanningAction {
        if !self.is_open() {
            return MousePanningAction::None;
        }

        let mut action = MousePanningAction::None;
        let mut window_open = true;

        egui::Window::new("Configure Mouse Panning")
            .open(&mut window_open)
            .collapsible(false)
            .resizable(false)
            .default_width(380.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                action = self.render_content(ui);
            });

        self.finish_frame(window_open, action)
    }

    /// Title bar close button behaves like Cancel.
    pub(super) fn finish_frame(
        &mut self,
        window_open: bool,
        action: MousePanningAction,
    ) -> MousePanningAction {
        if !window_open && self.is_open() {
            return self.run_command(DialogCommand::Reject);
        }
        action
    }

    fn render_content(&mut self, ui: &mut Ui) -> MousePanningAction {
        let mut action = MousePanningAction::None;
        let mut fields = *self.fields();

        ui.checkbox(&mut fields.enabled, "Enable mouse panning");
        ui.label("   Moving the mouse deflects the right stick");
        ui.add_space(10.0);

        ui.group(|ui| {
            ui.heading("Sensitivity");
            ui.add_space(5.0);
            percent_slider(ui, &mut fields.x_sensitivity, SENSITIVITY_RANGE, "Horizontal");
            percent_slider(ui, &mut fields.y_sensitivity, SENSITIVITY_RANGE, "Vertical");
        });

        ui.add_space(10.0);

        ui.group(|ui| {
            ui.heading("Deadzone Counterweight");
            ui.add_space(5.0);
            percent_slider(ui, &mut fields.deadzone_x_counterweight, PERCENT_RANGE, "Horizontal");
            percent_slider(ui, &mut fields.deadzone_y_counterweight, PERCENT_RANGE, "Vertical");
            ui.label("   Boosts small movements past the game's stick deadzone");
        });

        ui.add_space(10.0);

        ui.group(|ui| {
            ui.heading("Stick Decay");
            ui.add_space(5.0);
            percent_slider(ui, &mut fields.decay_strength, PERCENT_RANGE, "Strength");
            percent_slider(ui, &mut fields.min_decay, PERCENT_RANGE, "Minimum");
        });

        if let Some(advisory) = self.advisory() {
            ui.add_space(10.0);
            ui.colored_label(egui::Color32::YELLOW, advisory);
        }

        self.apply_edits(fields);

        ui.add_space(15.0);
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("Restore Defaults").clicked() {
                action = self.run_command(DialogCommand::ResetToDefaults);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Cancel").clicked() {
                    action = self.run_command(DialogCommand::Reject);
                }
                if ui.button("OK").clicked() {
                    action = self.run_command(DialogCommand::Accept);
                }
            });
        });

        action
    }

    fn apply_edits(&mut self, fields: MousePanningConfig) {
        if fields == *self.fields() {
            return;
        }
        if let Err(e) = self.edit(|current| *current = fields) {
            tracing::warn!("Dropped mouse panning edit: {}", e);
        }
    }

    pub(super) fn run_command(&mut self, command: DialogCommand) -> MousePanningAction {
        match self.dispatch(command) {
            Ok(DialogOutcome::Accepted(settings)) => MousePanningAction::Apply(settings),
            Ok(DialogOutcome::Rejected) => MousePanningAction::Cancel,
            Ok(DialogOutcome::Pending) | Err(_) => MousePanningAction::None,
        }
    }
}

fn percent_slider(
    ui: &mut Ui,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    text: &str,
) {
    ui.add(
        Slider::new(value, range)
            .text(text)
            .suffix("%")
            .step_by(1.0)
            // Out-of-range values from a hand-edited file stay as they are
            .clamping(egui::SliderClamping::Edits)
            .custom_formatter(|n, _| format!("{:.0}", n)),
    );
}

//! Main window UI
//!
//! Shows the current mouse panning state, the right stick calibration that
//! the panning dialog checks against, and a drag area that previews the
//! stick deflection produced by mouse motion.

use eframe::egui::{self, Color32, Slider, Stroke};
use glam::Vec2;
use std::collections::VecDeque;
use stickpan_core::app::{Config, StickCalibration};

/// Side length of the preview square in points.
const PREVIEW_SIZE: f32 = 180.0;

/// Number of past stick positions kept for the trail.
const TRAIL_LEN: usize = 60;

/// Main window state and rendering.
pub struct MainUi {
    /// Whether to draw the stick trail in the preview
    pub show_trail: bool,
    trail: VecDeque<Vec2>,
}

impl Default for MainUi {
    fn default() -> Self {
        Self::new()
    }
}

impl MainUi {
    pub fn new() -> Self {
        Self {
            show_trail: true,
            trail: VecDeque::with_capacity(TRAIL_LEN + 1),
        }
    }

    /// Renders the main window and returns any user action.
    ///
    /// `stick` is the right stick position produced by the panner last frame.
    pub fn show(&mut self, ctx: &egui::Context, config: &Config, stick: Vec2) -> Option<UiAction> {
        let mut action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Mouse Panning");
            ui.separator();

            let panning = &config.input.mouse_panning;
            ui.label(format!(
                "Status: {}",
                if panning.enabled { "Enabled" } else { "Disabled" }
            ));
            ui.label(format!(
                "Sensitivity: {:.0}% / {:.0}%   Counterweight: {:.0}% / {:.0}%",
                panning.x_sensitivity,
                panning.y_sensitivity,
                panning.deadzone_x_counterweight,
                panning.deadzone_y_counterweight
            ));
            ui.label(format!(
                "Decay: {:.0}% (minimum {:.0}%)",
                panning.decay_strength, panning.min_decay
            ));
            ui.add_space(5.0);

            if ui.button("Configure Mouse Panning...").clicked() {
                action = Some(UiAction::OpenMousePanning);
            }

            ui.add_space(15.0);
            ui.heading("Right Stick");
            ui.add_space(5.0);

            let mut calibration = config.input.right_stick;
            ui.add(
                Slider::new(&mut calibration.deadzone, 0.0..=0.5)
                    .text("Deadzone")
                    .suffix("%")
                    .clamping(egui::SliderClamping::Edits)
                    .custom_formatter(|n, _| format!("{:.0}", n * 100.0)),
            );
            ui.add(
                Slider::new(&mut calibration.range, 0.5..=1.5)
                    .text("Range")
                    .suffix("%")
                    .clamping(egui::SliderClamping::Edits)
                    .custom_formatter(|n, _| format!("{:.0}", n * 100.0)),
            );
            if calibration != config.input.right_stick {
                action = Some(UiAction::SetRightStick(calibration));
            }

            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    action = Some(UiAction::SaveConfig);
                }
                if ui.button("Reset Stick").clicked() {
                    action = Some(UiAction::SetRightStick(StickCalibration::default()));
                }
            });

            ui.add_space(15.0);
            ui.separator();
            ui.heading("Preview");
            if panning.enabled {
                ui.label("Drag inside the box to move the mouse");
            } else {
                ui.colored_label(Color32::GRAY, "Enable mouse panning to preview it");
            }
            ui.checkbox(&mut self.show_trail, "Show trail");

            if let Some(motion) = self.render_preview(ui, stick) {
                action = Some(UiAction::PanMotion(motion));
            }
        });

        action
    }

    /// Draws the stick preview. Returns the pointer motion while dragging.
    fn render_preview(&mut self, ui: &mut egui::Ui, stick: Vec2) -> Option<Vec2> {
        let (response, painter) =
            ui.allocate_painter(egui::vec2(PREVIEW_SIZE, PREVIEW_SIZE), egui::Sense::drag());
        let rect = response.rect;
        let center = rect.center();
        let radius = PREVIEW_SIZE * 0.5 - 4.0;
        let to_screen = |v: Vec2| center + egui::vec2(v.x, -v.y) * radius;

        painter.circle_stroke(center, radius, Stroke::new(1.0, Color32::GRAY));
        painter.line_segment(
            [center - egui::vec2(radius, 0.0), center + egui::vec2(radius, 0.0)],
            Stroke::new(1.0, Color32::DARK_GRAY),
        );
        painter.line_segment(
            [center - egui::vec2(0.0, radius), center + egui::vec2(0.0, radius)],
            Stroke::new(1.0, Color32::DARK_GRAY),
        );

        if self.show_trail {
            self.record_trail(stick);
            for (from, to) in self.trail.iter().zip(self.trail.iter().skip(1)) {
                painter.line_segment(
                    [to_screen(*from), to_screen(*to)],
                    Stroke::new(1.0, Color32::LIGHT_BLUE),
                );
            }
        } else {
            self.trail.clear();
        }

        painter.circle_filled(to_screen(stick), 6.0, Color32::YELLOW);

        let delta = response.drag_delta();
        (delta != egui::Vec2::ZERO).then(|| Vec2::new(delta.x, delta.y))
    }

    fn record_trail(&mut self, stick: Vec2) {
        self.trail.push_back(stick);
        if self.trail.len() > TRAIL_LEN {
            self.trail.pop_front();
        }
    }
}

/// Actions the user can trigger from the main window.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// Open the mouse panning dialog
    OpenMousePanning,
    /// Change the right stick calibration (kept in memory until saved)
    SetRightStick(StickCalibration),
    /// Write the current configuration to disk
    SaveConfig,
    /// Pointer moved inside the preview area
    PanMotion(Vec2),
    /// Dismiss the current error message
    DismissError,
}

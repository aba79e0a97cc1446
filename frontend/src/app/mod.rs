//! Frontend application state and main loop

mod init;

pub use init::AppError;

use eframe::egui;
use glam::Vec2;
use std::path::PathBuf;

use crate::ui::{MainUi, UiAction};
use stickpan_core::app::config::{self, Config};
use stickpan_core::app::{MousePanner, MousePanningAction, MousePanningDialog};

/// Frontend application state
pub struct App {
    /// User configuration (the settings store)
    config: Config,
    /// Explicit config file, or `None` for the platform config directory
    config_path: Option<PathBuf>,
    /// Main window UI state
    main_ui: MainUi,
    /// Mouse panning dialog, present while open
    mouse_panning_dialog: Option<MousePanningDialog>,
    /// Applies the current mouse panning settings to preview motion
    panner: MousePanner,
    /// Right stick position produced last frame
    stick: Vec2,
    /// Last error message (for displaying in UI)
    last_error: Option<String>,
}

impl App {
    /// Create the application, loading configuration from `config_path` or
    /// the platform config directory.
    pub fn new(config_path: Option<PathBuf>) -> Self {
        let config = match &config_path {
            Some(path) => config::load_from(path),
            None => config::load(),
        };

        Self {
            panner: MousePanner::new(&config.input.mouse_panning),
            config,
            config_path,
            main_ui: MainUi::new(),
            mouse_panning_dialog: None,
            stick: Vec2::ZERO,
            last_error: None,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn save_config(&mut self) {
        let result = match &self.config_path {
            Some(path) => config::save_to(path, &self.config).map(|()| path.clone()),
            None => config::save(&self.config),
        };

        match result {
            Ok(path) => {
                tracing::info!("Settings saved to {}", path.display());
                self.last_error = None;
            }
            Err(e) => {
                tracing::error!("Failed to save config: {}", e);
                self.last_error = Some(format!("Failed to save settings: {}", e));
            }
        }
    }

    /// Handle main window actions
    fn handle_ui_action(&mut self, action: UiAction) {
        match action {
            UiAction::OpenMousePanning => {
                if self.mouse_panning_dialog.is_none() {
                    self.mouse_panning_dialog = Some(MousePanningDialog::open(
                        &self.config.input.mouse_panning,
                        &self.config.input.right_stick,
                    ));
                }
            }
            UiAction::SetRightStick(calibration) => {
                self.config.input.right_stick = calibration;
            }
            UiAction::SaveConfig => {
                self.save_config();
            }
            UiAction::PanMotion(delta) => {
                self.panner.push_motion(delta);
            }
            UiAction::DismissError => {
                self.last_error = None;
            }
        }
    }

    /// Handle the outcome of the mouse panning dialog
    fn handle_mouse_panning_action(&mut self, action: MousePanningAction) {
        match action {
            MousePanningAction::None => {}
            MousePanningAction::Apply(settings) => {
                self.config.input.mouse_panning = settings;
                self.panner.set_config(&settings);
                self.mouse_panning_dialog = None;
                self.save_config();
            }
            MousePanningAction::Cancel => {
                self.mouse_panning_dialog = None;
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut ui_action = None;

        // Show error panel if there's an error
        if let Some(ref error) = self.last_error {
            egui::TopBottomPanel::top("error_panel").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::RED, format!("Error: {}", error));
                    if ui.button("Dismiss").clicked() {
                        ui_action = Some(UiAction::DismissError);
                    }
                });
            });
        }

        if let Some(action) = self.main_ui.show(ctx, &self.config, self.stick) {
            ui_action = Some(action);
        }

        // Dialog renders on top of the main window
        if let Some(ref mut dialog) = self.mouse_panning_dialog {
            let action = dialog.show(ctx);
            self.handle_mouse_panning_action(action);
        }

        if let Some(action) = ui_action {
            self.handle_ui_action(action);
        }

        self.stick = self.panner.update();
        if self.panner.is_enabled() {
            // Keep animating the decay
            ctx.request_repaint();
        }
    }
}

/// Run the frontend application
pub fn run(config_path: Option<PathBuf>) -> Result<(), AppError> {
    tracing::info!("Starting Stickpan");

    eframe::run_native(
        "Stickpan",
        init::native_options(),
        Box::new(move |_cc| Ok(Box::new(App::new(config_path)))),
    )
    .map_err(|e| AppError::EventLoop(format!("eframe error: {}", e)))?;

    Ok(())
}

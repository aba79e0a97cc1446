//! Window setup and startup error types

use eframe::egui;
use thiserror::Error;

/// Initial window size in points.
const WINDOW_SIZE: [f32; 2] = [520.0, 640.0];

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(String),
}

/// Native window options for the frontend.
pub(super) fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Stickpan")
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    }
}

//! Application framework types and utilities
//!
//! Configuration, input settings and the dialogs that edit them. Frontends
//! own the [`Config`] and drive the dialogs from their event loop.

pub mod config;
pub mod input;
pub mod ui;

pub use config::{Config, ConfigError};
pub use input::{InputConfig, MousePanner, MousePanningConfig, StickCalibration};
pub use ui::{MousePanningAction, MousePanningDialog};

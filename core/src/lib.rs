//! Stickpan Core - mouse panning settings and input
//!
//! This crate holds everything a frontend needs to let users configure mouse
//! panning and to apply it to the emulated right stick.
//!
//! # Architecture
//!
//! - [`app::config`] - Settings store and `config.toml` persistence
//! - [`app::input::MousePanner`] - Turns mouse motion into stick deflection
//! - [`app::ui::MousePanningDialog`] - Edit/accept/cancel dialog over the settings

pub mod app;

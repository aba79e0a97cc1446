//! Stickpan desktop frontend
//!
//! Owns the live configuration, opens the mouse panning dialog, writes
//! accepted settings back to disk and previews the resulting stick motion.

pub mod app;
pub mod ui;

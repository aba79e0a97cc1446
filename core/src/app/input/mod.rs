//! Input configuration and mouse panning

mod panning;

pub use panning::MousePanner;

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Valid range for the per-axis sensitivity, in percent.
pub const SENSITIVITY_RANGE: RangeInclusive<f32> = 1.0..=100.0;
/// Valid range for counterweight and decay values, in percent.
pub const PERCENT_RANGE: RangeInclusive<f32> = 0.0..=100.0;

/// Input configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InputConfig {
    /// Mouse panning (mouse motion drives the right stick)
    #[serde(default)]
    pub mouse_panning: MousePanningConfig,

    /// Calibration of the right analog stick
    #[serde(default)]
    pub right_stick: StickCalibration,
}

/// Mouse panning settings.
///
/// All numeric values are percentages. Field defaults double as the values
/// restored by "Restore Defaults" in the mouse panning dialog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MousePanningConfig {
    /// Whether mouse motion drives the right stick (default: false)
    #[serde(default)]
    pub enabled: bool,
    /// Horizontal sensitivity (default: 50, range: 1-100)
    #[serde(default = "default_sensitivity")]
    pub x_sensitivity: f32,
    /// Vertical sensitivity (default: 50, range: 1-100)
    #[serde(default = "default_sensitivity")]
    pub y_sensitivity: f32,
    /// Boost applied to small horizontal inputs (default: 20, range: 0-100)
    #[serde(default = "default_counterweight")]
    pub deadzone_x_counterweight: f32,
    /// Boost applied to small vertical inputs (default: 20, range: 0-100)
    #[serde(default = "default_counterweight")]
    pub deadzone_y_counterweight: f32,
    /// How quickly accumulated motion fades (default: 18, range: 0-100)
    #[serde(default = "default_decay_strength")]
    pub decay_strength: f32,
    /// Decay applied every frame regardless of speed (default: 6, range: 0-100)
    #[serde(default = "default_min_decay")]
    pub min_decay: f32,
}

/// Analog stick calibration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StickCalibration {
    /// Deadzone as a fraction of full deflection (default: 0.0, range: 0.0-1.0)
    #[serde(default)]
    pub deadzone: f32,
    /// Output range multiplier (default: 1.0, range: 0.0-1.5)
    #[serde(default = "default_range")]
    pub range: f32,
}

fn default_sensitivity() -> f32 {
    50.0
}
fn default_counterweight() -> f32 {
    20.0
}
fn default_decay_strength() -> f32 {
    18.0
}
fn default_min_decay() -> f32 {
    6.0
}
fn default_range() -> f32 {
    1.0
}

impl Default for MousePanningConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            x_sensitivity: default_sensitivity(),
            y_sensitivity: default_sensitivity(),
            deadzone_x_counterweight: default_counterweight(),
            deadzone_y_counterweight: default_counterweight(),
            decay_strength: default_decay_strength(),
            min_decay: default_min_decay(),
        }
    }
}

impl MousePanningConfig {
    /// Copy every tunable value from `defaults`, keeping `enabled` as is.
    pub fn restore_tuning(&mut self, defaults: &MousePanningConfig) {
        *self = MousePanningConfig {
            enabled: self.enabled,
            ..*defaults
        };
    }

    /// Returns a copy with every numeric value clamped to its valid range.
    pub fn clamped(&self) -> Self {
        let pct = |v: f32| v.clamp(*PERCENT_RANGE.start(), *PERCENT_RANGE.end());
        let sens = |v: f32| v.clamp(*SENSITIVITY_RANGE.start(), *SENSITIVITY_RANGE.end());
        Self {
            enabled: self.enabled,
            x_sensitivity: sens(self.x_sensitivity),
            y_sensitivity: sens(self.y_sensitivity),
            deadzone_x_counterweight: pct(self.deadzone_x_counterweight),
            deadzone_y_counterweight: pct(self.deadzone_y_counterweight),
            decay_strength: pct(self.decay_strength),
            min_decay: pct(self.min_decay),
        }
    }
}

impl Default for StickCalibration {
    fn default() -> Self {
        Self {
            deadzone: 0.0,
            range: default_range(),
        }
    }
}

impl StickCalibration {
    /// True when the stick is calibrated the way mouse panning expects.
    pub fn is_neutral(&self) -> bool {
        self.deadzone <= 0.0 && self.range == 1.0
    }
}

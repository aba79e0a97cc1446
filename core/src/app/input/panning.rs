//! Mouse panning: relative mouse motion mapped onto the right stick
//!
//! Motion accumulates into a virtual stick position that decays every frame,
//! so a flick of the mouse turns into a brief stick deflection.

use glam::Vec2;

use super::MousePanningConfig;

/// Stick units per pixel at 1% sensitivity.
const SENSITIVITY_SCALE: f32 = 0.001;

/// Accumulated motion may overshoot full deflection by this much, which makes
/// sustained panning easier to hold.
const MAX_MOTION: f32 = 1.2;

/// Below this length accumulated motion is dropped and the stick recenters.
const REST_THRESHOLD: f32 = 0.01;

/// Converts mouse deltas into right stick values.
#[derive(Debug, Clone)]
pub struct MousePanner {
    config: MousePanningConfig,
    motion: Vec2,
}

impl MousePanner {
    pub fn new(config: &MousePanningConfig) -> Self {
        Self {
            config: config.clamped(),
            motion: Vec2::ZERO,
        }
    }

    /// Replace the settings. Accumulated motion is dropped when panning
    /// gets disabled.
    pub fn set_config(&mut self, config: &MousePanningConfig) {
        self.config = config.clamped();
        if !self.config.enabled {
            self.reset();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Clear accumulated motion.
    pub fn reset(&mut self) {
        self.motion = Vec2::ZERO;
    }

    /// Feed a relative mouse movement in screen pixels (y grows downwards).
    pub fn push_motion(&mut self, delta: Vec2) {
        if !self.config.enabled {
            return;
        }
        let sensitivity = Vec2::new(self.config.x_sensitivity, self.config.y_sensitivity)
            * SENSITIVITY_SCALE;
        self.motion += delta * sensitivity;
    }

    /// Advance one frame and return the stick position (y up, each axis in
    /// -1.0..=1.0).
    pub fn update(&mut self) -> Vec2 {
        if !self.config.enabled {
            return Vec2::ZERO;
        }

        let length = self.motion.length();
        if length < REST_THRESHOLD {
            self.motion = Vec2::ZERO;
            return Vec2::ZERO;
        }
        if length > MAX_MOTION {
            self.motion *= MAX_MOTION / length;
        }

        let mut stick = self.motion;
        if length < 1.0 {
            // Push small inputs past the game's own deadzone
            let counterweight = Vec2::new(
                self.config.deadzone_x_counterweight,
                self.config.deadzone_y_counterweight,
            ) / 100.0;
            let boosted = (Vec2::splat(length) + counterweight).min(Vec2::ONE);
            stick = stick / length * boosted;
        }
        let output = Vec2::new(stick.x, -stick.y).clamp(Vec2::NEG_ONE, Vec2::ONE);

        let clamped_length = length.min(1.0);
        let decay = 1.0 - clamped_length * clamped_length * self.config.decay_strength / 100.0;
        let decay = decay.min(1.0 - self.config.min_decay / 100.0).max(0.0);
        self.motion *= decay;

        output
    }
}

//! Gameplay tuning knobs, defaulting to the shared constants.

use crate::types::{
    FIRE_RANGE, FIRE_TOLERANCE_RAD, FOV, KEY_TURN_SPEED, MAX_TICK_SECS, POINTER_SENSITIVITY,
    SPRINT_SPEED, WALK_SPEED,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub fov: f32,
    pub walk_speed: f32,
    pub sprint_speed: f32,
    /// Radians per unit of pointer motion.
    pub pointer_sensitivity: f32,
    /// Radians per second while a turn key is held.
    pub key_turn_speed: f32,
    pub fire_tolerance: f32,
    pub fire_range: f32,
    pub max_tick_secs: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            fov: FOV,
            walk_speed: WALK_SPEED,
            sprint_speed: SPRINT_SPEED,
            pointer_sensitivity: POINTER_SENSITIVITY,
            key_turn_speed: KEY_TURN_SPEED,
            fire_tolerance: FIRE_TOLERANCE_RAD,
            fire_range: FIRE_RANGE,
            max_tick_secs: MAX_TICK_SECS,
        }
    }
}

impl Tuning {
    pub fn with_pointer_sensitivity(mut self, sensitivity: f32) -> Self {
        self.pointer_sensitivity = sensitivity;
        self
    }

    /// Clamp a measured frame time into the integration window.
    #[inline]
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        dt.clamp(0.0, self.max_tick_secs)
    }
}

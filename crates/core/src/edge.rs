//! Rising-edge detection over per-tick button snapshots.

use crate::types::{Button, Buttons};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeDetector {
    previous: Buttons,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this tick's held buttons; returns the ones that went down since
    /// the previous call.
    pub fn update(&mut self, held: Buttons) -> Buttons {
        let rising = held.pressed_since(self.previous);
        self.previous = held;
        rising
    }
}

/// Fires at most once per press of any button in a group, re-arming only once
/// every button in the group is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latch {
    armed: bool,
}

impl Default for Latch {
    fn default() -> Self {
        Self { armed: true }
    }
}

impl Latch {
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Consume the latch if it is armed.
    pub fn fire(&mut self) -> bool {
        std::mem::replace(&mut self.armed, false)
    }

    /// Re-arm once nothing in `group` is held.
    pub fn rearm(&mut self, held: Buttons, group: &[Button]) {
        if !held.any_of(group) {
            self.armed = true;
        }
    }
}

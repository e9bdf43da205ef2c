//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and mouse events into logical [`crate::types::Button`]s
//! and a horizontal pointer delta. The tracker works in terminals without
//! key-release events by expiring presses after a short timeout.

pub mod map;
pub mod tracker;

pub use tui_raycaster_types as types;

pub use map::{button_for, sprint_held};
pub use tracker::{InputTracker, DEFAULT_KEY_RELEASE_TIMEOUT_MS};

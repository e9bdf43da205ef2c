//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, input mapping).
//!
//! # World Units
//!
//! Positions are measured in map cells: the cell `(x, y)` covers
//! `[x, x + 1) × [y, y + 1)`. Angles are radians; facing `0` looks down `+y`.
//!
//! # Simulation Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_TICK_SECS` | 0.1 | Upper clamp on per-tick elapsed time |
//! | `WALK_SPEED` | 2.5 | Player speed in cells per second |
//! | `SPRINT_SPEED` | 5.5 | Player speed while sprint is held |
//! | `FIRE_TOLERANCE_RAD` | 0.25 | Angular half-width of the hit-scan cone |
//! | `FIRE_RANGE` | 12.0 | Maximum hit-scan distance |
//! | `NPC_SPEED` | 2.0 | Enemy wander speed |
//! | `MENU_COOLDOWN_SECS` | 0.2 | Menu input lockout after returning to it |
//!
//! # Ray Marching
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `RAY_STEP` | 0.08 | Distance advanced per march step |
//! | `MAX_RAY_DISTANCE` | 16.0 | Distance reported when nothing is hit |
//! | `SPRITE_MIN_DISTANCE` | 0.4 | Billboards closer than this are skipped |
//! | `HUD_ROWS` | 45 | Logical rows reserved for the weapon HUD |
//!
//! # Examples
//!
//! ```
//! use tui_raycaster_types::{Button, Buttons, MenuEntry};
//!
//! let mut held = Buttons::empty();
//! held.insert(Button::Forward);
//! held.insert(Button::Sprint);
//! assert!(held.contains(Button::Forward));
//! assert!(!held.contains(Button::Fire));
//!
//! assert_eq!(MenuEntry::from_index(1), MenuEntry::Controls);
//! assert_eq!(MenuEntry::Exit.label(), "EXIT GAME");
//! ```

use std::f32::consts::PI;

/// Width of the built-in map in cells.
pub const DEFAULT_MAP_WIDTH: usize = 32;

/// Height of the built-in map in cells.
pub const DEFAULT_MAP_HEIGHT: usize = 16;

/// Player field of view (60°).
pub const FOV: f32 = PI / 3.0;

/// Player spawn position.
pub const PLAYER_START: (f32, f32) = (4.0, 4.0);

/// Upper clamp on the elapsed time fed into one simulation tick.
pub const MAX_TICK_SECS: f32 = 0.1;

/// Walking speed in cells per second.
pub const WALK_SPEED: f32 = 2.5;

/// Sprinting speed in cells per second.
pub const SPRINT_SPEED: f32 = 5.5;

/// Radians of yaw per terminal column of pointer motion.
pub const POINTER_SENSITIVITY: f32 = 0.0096;

/// Radians per second of yaw while a turn key is held.
pub const KEY_TURN_SPEED: f32 = 2.4;

/// Angular half-width of the hit-scan cone.
pub const FIRE_TOLERANCE_RAD: f32 = 0.25;

/// Maximum distance at which a shot registers.
pub const FIRE_RANGE: f32 = 12.0;

/// Enemy wander speed in cells per second.
pub const NPC_SPEED: f32 = 2.0;

/// Walk-cycle frames advanced per second of enemy movement.
pub const NPC_WALK_FRAME_RATE: f32 = 10.0;

/// Lower bound of the enemy re-decision timer (seconds, inclusive).
pub const NPC_TIMER_MIN: f32 = 1.0;

/// Upper bound of the enemy re-decision timer (seconds, exclusive).
pub const NPC_TIMER_MAX: f32 = 3.0;

/// Menu input lockout after leaving Controls or Play.
pub const MENU_COOLDOWN_SECS: f32 = 0.2;

/// Distance advanced per ray-march step.
pub const RAY_STEP: f32 = 0.08;

/// Distance reported for rays that leave the map or hit nothing.
pub const MAX_RAY_DISTANCE: f32 = 16.0;

/// Billboards closer than this are not projected.
pub const SPRITE_MIN_DISTANCE: f32 = 0.4;

/// Logical (half-block) rows reserved for the weapon HUD at the bottom.
pub const HUD_ROWS: usize = 45;

/// Fraction of the HUD texture height cropped away from the top.
pub const HUD_CROP_TOP: f32 = 0.42;

/// Flat sky colour above the wall span.
pub const SKY_COLOR: Rgb = Rgb::new(135, 206, 235);

/// Wall colour used when the wall texture is unavailable.
pub const WALL_FALLBACK: Rgb = Rgb::new(96, 96, 96);

/// Floor colour used when the floor texture is unavailable.
pub const FLOOR_FALLBACK: Rgb = Rgb::new(48, 48, 48);

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Magenta-ish key used by sprite sheets for "no paint".
    ///
    /// Sprites and the HUD use different thresholds, so the caller supplies it.
    #[inline]
    pub fn is_key(self, threshold: u8) -> bool {
        self.r > threshold && self.b > threshold
    }
}

/// Transparency threshold for enemy sprites.
pub const SPRITE_KEY_THRESHOLD: u8 = 240;

/// Transparency threshold for the weapon HUD.
pub const HUD_KEY_THRESHOLD: u8 = 250;

/// Top-level game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    #[default]
    Menu,
    Controls,
    Play,
}

/// The three entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuEntry {
    Play,
    Controls,
    Exit,
}

impl MenuEntry {
    pub const COUNT: usize = 3;

    pub const ALL: [MenuEntry; Self::COUNT] = [MenuEntry::Play, MenuEntry::Controls, MenuEntry::Exit];

    /// Entry at a (wrapped) selection index.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::Play => "PLAY GAME",
            MenuEntry::Controls => "CONTROLS",
            MenuEntry::Exit => "EXIT GAME",
        }
    }
}

/// Logical input buttons, independent of the physical key that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Button {
    /// Walk forward in Play, move selection up in Menu.
    Forward,
    /// Walk backward in Play, move selection down in Menu.
    Backward,
    StrafeLeft,
    StrafeRight,
    TurnLeft,
    TurnRight,
    Sprint,
    /// Commit the menu selection; also fires in Play.
    Confirm,
    Fire,
    /// Leave the Controls screen.
    Back,
    /// Leave Play for the Menu.
    Escape,
}

impl Button {
    pub const COUNT: usize = 11;

    pub const ALL: [Button; Button::COUNT] = [
        Button::Forward,
        Button::Backward,
        Button::StrafeLeft,
        Button::StrafeRight,
        Button::TurnLeft,
        Button::TurnRight,
        Button::Sprint,
        Button::Confirm,
        Button::Fire,
        Button::Back,
        Button::Escape,
    ];
}

/// Set of currently held [`Button`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Buttons(u16);

impl Buttons {
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    const fn bit(button: Button) -> u16 {
        1 << (button as u8)
    }

    #[inline]
    pub fn contains(self, button: Button) -> bool {
        self.0 & Self::bit(button) != 0
    }

    #[inline]
    pub fn insert(&mut self, button: Button) {
        self.0 |= Self::bit(button);
    }

    #[inline]
    pub fn remove(&mut self, button: Button) {
        self.0 &= !Self::bit(button);
    }

    pub fn set(&mut self, button: Button, held: bool) {
        if held {
            self.insert(button);
        } else {
            self.remove(button);
        }
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn any_of(self, buttons: &[Button]) -> bool {
        buttons.iter().any(|&b| self.contains(b))
    }

    /// Buttons held now that were not held in `previous`.
    pub fn pressed_since(self, previous: Buttons) -> Buttons {
        Buttons(self.0 & !previous.0)
    }
}

impl FromIterator<Button> for Buttons {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        let mut out = Buttons::empty();
        for b in iter {
            out.insert(b);
        }
        out
    }
}

/// Input state sampled once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputFrame {
    pub held: Buttons,
    /// Horizontal pointer motion since the last recenter, in terminal columns.
    pub pointer_dx: f32,
}

impl InputFrame {
    pub fn new(held: Buttons, pointer_dx: f32) -> Self {
        Self { held, pointer_dx }
    }
}

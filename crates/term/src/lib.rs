//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is flushed to the terminal with crossterm.
//!
//! - [`scene_view`]: the 3D view, two logical pixels per cell via `▀`
//! - [`menu_view`]: menu and controls screens
//! - [`renderer`]: diffing terminal output behind [`DisplaySink`]

pub mod fb;
pub mod menu_view;
pub mod renderer;
pub mod scene_view;

pub use tui_raycaster_core as core;
pub use tui_raycaster_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use menu_view::{ControlsView, MenuView};
pub use renderer::{encode_diff_into, encode_full_into, DisplaySink, TerminalRenderer};
pub use scene_view::{SceneView, HALF_BLOCK};

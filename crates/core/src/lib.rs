//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the simulation and the per-pixel scene model. It has no
//! dependency on the terminal, audio devices or image decoding, which makes it:
//!
//! - **Deterministic**: the session owns a seeded RNG, so the same seed and
//!   input sequence reproduce the same NPC wandering
//! - **Testable**: every rule (collision, firing, menu latch) runs headless
//! - **Thread friendly**: [`FrameContext`] is an immutable snapshot that render
//!   workers share by reference
//!
//! # Module Structure
//!
//! - [`world`]: tile grid, map parsing and the built-in level
//! - [`player`]: turning, axis-separated sliding collision and hitscan firing
//! - [`enemy`]: NPC wandering, walk cycle and death sequence
//! - [`weapon`]: HUD fire animation state
//! - [`raycast`]: fixed-step ray marching and wall face classification
//! - [`sprite`]: NPC billboard projection
//! - [`frame`]: render snapshot and pixel priority (HUD, sprite, sky/wall/floor)
//! - [`session`]: Menu / Controls / Play state machine
//! - [`texture`], [`audio`]: the seams to asset loading and sound output
//!
//! # Example
//!
//! ```
//! use tui_raycaster_core::{AnimationLengths, NullAudio, Session, Tuning, WorldMap};
//! use tui_raycaster_core::types::{Button, GameMode, InputFrame};
//!
//! let parsed = WorldMap::builtin().unwrap();
//! let mut session = Session::new(parsed, AnimationLengths::default(), Tuning::default(), 7);
//! let mut audio = NullAudio;
//!
//! let confirm = InputFrame::new([Button::Confirm].into_iter().collect(), 0.0);
//! session.tick(&confirm, 0.016, &mut audio);
//! assert_eq!(session.mode(), GameMode::Play);
//! ```

pub mod audio;
pub mod edge;
pub mod enemy;
pub mod error;
pub mod frame;
pub mod player;
pub mod raycast;
pub mod session;
pub mod sprite;
pub mod texture;
pub mod tuning;
pub mod weapon;
pub mod world;

pub use tui_raycaster_types as types;

pub use audio::{AudioSink, Effect, NullAudio, RecordingAudio};
pub use edge::{EdgeDetector, Latch};
pub use enemy::{Heading, Npc};
pub use error::{MapError, TextureError};
pub use frame::{Column, FrameContext, Layer};
pub use player::Player;
pub use raycast::{Face, RayHit};
pub use session::{Session, TickOutcome, TickReport};
pub use sprite::{Billboard, Pose};
pub use texture::{AnimationLengths, Texture, TextureProvider, TextureSet};
pub use tuning::Tuning;
pub use weapon::WeaponAnimator;
pub use world::{ParsedMap, Tile, WorldMap, DEFAULT_MAP};

//! Asset loading: PNG textures via `image`, sound via `rodio`.
//!
//! Nothing here is fatal. Missing files and absent audio devices are logged
//! and degrade to empty textures or silence.

pub mod audio;
pub mod textures;

pub use tui_raycaster_core as core;

pub use audio::RodioAudio;
pub use textures::{load_texture_set, ImageTextureProvider};

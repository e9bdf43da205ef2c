//! PNG texture loading.
//!
//! A missing or undecodable file is logged and leaves an empty slot; the
//! renderer treats empty textures as "nothing to draw".

use std::path::Path;

use crate::core::{Texture, TextureError, TextureProvider, TextureSet};

pub const WALL_FILE: &str = "walls.png";
pub const FLOOR_FILE: &str = "floor.png";
pub const HUD_IDLE_FILE: &str = "gui.png";
pub const NPC_IDLE_FILE: &str = "soldier-before4.png";

/// Decodes image files with the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageTextureProvider;

impl TextureProvider for ImageTextureProvider {
    fn load(&self, path: &Path) -> Result<Texture, TextureError> {
        let img = image::open(path).map_err(|e| TextureError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        Texture::from_rgb(width, height, rgb.into_raw())
    }
}

/// `first`, then `{stem}2.png` .. `{stem}{last}.png`.
fn numbered(first: &str, stem: &str, last: usize) -> Vec<String> {
    let mut names = vec![first.to_string()];
    names.extend((2..=last).map(|i| format!("{stem}{i}.png")));
    names
}

/// HUD firing frames: `gui2.png` .. `gui14.png`.
pub fn fire_frame_files() -> Vec<String> {
    (2..=14).map(|i| format!("gui{i}.png")).collect()
}

pub fn walk_frame_files() -> Vec<String> {
    numbered("soldier-before.png", "soldier-before", 4)
}

pub fn death_frame_files() -> Vec<String> {
    numbered("soldier-die.png", "soldier-die", 5)
}

fn load_one(provider: &dyn TextureProvider, dir: &Path, name: &str) -> Option<Texture> {
    match provider.load(&dir.join(name)) {
        Ok(tex) => Some(tex),
        Err(e) => {
            log::warn!("texture {name} unavailable: {e}");
            None
        }
    }
}

fn load_sequence(provider: &dyn TextureProvider, dir: &Path, names: &[String]) -> Vec<Texture> {
    names
        .iter()
        .filter_map(|name| load_one(provider, dir, name))
        .collect()
}

/// Load every texture the game samples from `dir`.
pub fn load_texture_set(provider: &dyn TextureProvider, dir: &Path) -> TextureSet {
    let single = |name: &str| load_one(provider, dir, name).unwrap_or_default();
    let set = TextureSet {
        wall: single(WALL_FILE),
        floor: single(FLOOR_FILE),
        hud_idle: single(HUD_IDLE_FILE),
        hud_fire: load_sequence(provider, dir, &fire_frame_files()),
        npc_idle: single(NPC_IDLE_FILE),
        npc_walk: load_sequence(provider, dir, &walk_frame_files()),
        npc_death: load_sequence(provider, dir, &death_frame_files()),
    };
    let lengths = set.lengths();
    log::info!(
        "textures loaded from {}: fire {}, walk {}, death {}",
        dir.display(),
        lengths.fire,
        lengths.walk,
        lengths.death
    );
    set
}

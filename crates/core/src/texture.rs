//! Texture store - owned RGB pixel buffers and the animation sets sampled by
//! the renderer.
//!
//! Decoding lives behind [`TextureProvider`]; this module only validates and
//! samples. An empty texture (failed load) samples as `None` everywhere so the
//! renderer can fall through to the next candidate.

use std::path::Path;

use crate::error::TextureError;
use crate::types::Rgb;

/// Row-major RGB8 image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Texture {
    /// Wrap a decoded buffer, checking that it holds `width * height * 3` bytes.
    pub fn from_rgb(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, TextureError> {
        if pixels.len() != (width as usize) * (height as usize) * 3 {
            return Err(TextureError::BadBuffer {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A texture filled with one colour.
    pub fn solid(width: u32, height: u32, color: Rgb) -> Self {
        let len = (width as usize) * (height as usize);
        let mut pixels = Vec::with_capacity(len * 3);
        for _ in 0..len {
            pixels.extend_from_slice(&[color.r, color.g, color.b]);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Placeholder for a texture that failed to load.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Texel at integer coordinates, clamped into the image.
    #[inline]
    pub fn texel(&self, tx: i64, ty: i64) -> Option<Rgb> {
        if self.is_empty() {
            return None;
        }
        let x = tx.clamp(0, self.width as i64 - 1) as usize;
        let y = ty.clamp(0, self.height as i64 - 1) as usize;
        let i = (y * self.width as usize + x) * 3;
        let p = self.pixels.get(i..i + 3)?;
        Some(Rgb::new(p[0], p[1], p[2]))
    }

    /// Texel at normalised coordinates (`0..=1` spans the full image).
    #[inline]
    pub fn sample_uv(&self, u: f32, v: f32) -> Option<Rgb> {
        if self.is_empty() {
            return None;
        }
        let tx = (u * (self.width - 1) as f32) as i64;
        let ty = (v * (self.height - 1) as f32) as i64;
        self.texel(tx, ty)
    }
}

/// Loads decoded textures from storage.
pub trait TextureProvider {
    fn load(&self, path: &Path) -> Result<Texture, TextureError>;
}

/// Everything the renderer samples, loaded once before the main loop.
///
/// Sequences may be shorter than expected, or empty, when files are missing.
#[derive(Debug, Clone, Default)]
pub struct TextureSet {
    pub wall: Texture,
    pub floor: Texture,
    pub hud_idle: Texture,
    pub hud_fire: Vec<Texture>,
    pub npc_idle: Texture,
    pub npc_walk: Vec<Texture>,
    pub npc_death: Vec<Texture>,
}

impl TextureSet {
    /// Frame counts the simulation needs to sequence animations.
    pub fn lengths(&self) -> AnimationLengths {
        AnimationLengths {
            fire: self.hud_fire.len(),
            walk: self.npc_walk.len(),
            death: self.npc_death.len(),
        }
    }
}

/// Animation sequence lengths, decoupled from the pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationLengths {
    pub fire: usize,
    pub walk: usize,
    pub death: usize,
}

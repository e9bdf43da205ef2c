//! Sprite projector: NPC billboards in screen space.
//!
//! Billboards are projected once per frame and tested per pixel against the
//! column's wall distance (a direct distance comparison, no depth buffer).

use crate::enemy::Npc;
use crate::player::Player;
use crate::texture::{Texture, TextureSet};
use crate::types::{Rgb, SPRITE_KEY_THRESHOLD, SPRITE_MIN_DISTANCE};

/// Which sprite sequence a billboard samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pose {
    Idle,
    Walk(usize),
    Dying(usize),
}

/// Screen-space rectangle for one NPC, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Billboard {
    pub distance: f32,
    pub left: f32,
    pub top: f32,
    /// Width and height (billboards are square).
    pub size: f32,
    pub pose: Pose,
}

impl Billboard {
    /// Project `npc` for a `width × height` logical screen.
    ///
    /// Returns `None` outside half the field of view, or closer than
    /// [`SPRITE_MIN_DISTANCE`].
    pub fn project(npc: &Npc, player: &Player, width: usize, height: usize, walk_len: usize) -> Option<Self> {
        let offset = player.bearing_to(npc.x, npc.y);
        let half_fov = player.fov * 0.5;
        if offset.abs() >= half_fov || npc.distance <= SPRITE_MIN_DISTANCE {
            return None;
        }

        let (w, h) = (width as f32, height as f32);
        let ceiling = h / 2.0 - h / npc.distance;
        let floor = h / 2.0 + h / npc.distance;
        let size = floor - ceiling;
        let mid = (0.5 * (offset / half_fov) + 0.5) * w;

        let (pose, drop) = match npc.death_frame() {
            Some(frame) => (Pose::Dying(frame), frame as f32 * (size / 8.0)),
            None if npc.moving => match npc.walk_index(walk_len) {
                Some(i) => (Pose::Walk(i), 0.0),
                None => (Pose::Idle, 0.0),
            },
            None => (Pose::Idle, 0.0),
        };

        Some(Self {
            distance: npc.distance,
            left: mid - size / 2.0,
            top: ceiling + drop,
            size,
            pose,
        })
    }

    #[inline]
    pub fn covers(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.left + self.size && y >= self.top && y < self.top + self.size
    }

    /// Texture for this billboard's pose. `None` when the sequence is too
    /// short or the texture failed to load.
    pub fn texture<'a>(&self, textures: &'a TextureSet) -> Option<&'a Texture> {
        let tex = match self.pose {
            Pose::Idle => &textures.npc_idle,
            Pose::Walk(i) => textures.npc_walk.get(i)?,
            Pose::Dying(i) => textures.npc_death.get(i)?,
        };
        (!tex.is_empty()).then_some(tex)
    }

    /// Opaque colour at logical pixel `(x, y)`, or `None` when outside the
    /// rectangle, transparent, or unsampleable.
    pub fn sample(&self, x: f32, y: f32, textures: &TextureSet) -> Option<Rgb> {
        if !self.covers(x, y) {
            return None;
        }
        let tex = self.texture(textures)?;
        let u = (x - self.left) / self.size;
        let v = (y - self.top) / self.size;
        tex.sample_uv(u, v).filter(|c| !c.is_key(SPRITE_KEY_THRESHOLD))
    }
}

/// Project every NPC, nearest first.
pub fn project_all(npcs: &[Npc], player: &Player, width: usize, height: usize, walk_len: usize) -> Vec<Billboard> {
    let mut out: Vec<Billboard> = npcs
        .iter()
        .filter_map(|n| Billboard::project(n, player, width, height, walk_len))
        .collect();
    out.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    out
}

//! Per-tick immutable render snapshot and per-pixel colour resolution.
//!
//! A [`FrameContext`] borrows the session state for one frame. Columns are cast
//! and billboards projected when it is built; afterwards it is read-only and
//! `Sync`, so rows can be resolved from any number of threads.
//!
//! Pixel priority, top to bottom: HUD, NPC billboards, sky / wall / floor.
//! Transparent or unsampleable HUD and sprite pixels fall through.

use crate::player::Player;
use crate::raycast::{self, RayHit};
use crate::sprite::{self, Billboard};
use crate::texture::{Texture, TextureSet};
use crate::types::{
    Rgb, FLOOR_FALLBACK, HUD_CROP_TOP, HUD_KEY_THRESHOLD, SKY_COLOR, WALL_FALLBACK,
};
use crate::weapon::WeaponAnimator;
use crate::world::WorldMap;

/// One screen column's ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub dir_x: f32,
    pub dir_y: f32,
    pub hit: RayHit,
    /// First logical row of the wall span.
    pub ceiling: i64,
    /// First logical row below the wall span.
    pub floor: i64,
}

/// What a logical pixel resolved to, before colour lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Hud,
    Sprite,
    Sky,
    Wall,
    Floor,
}

pub struct FrameContext<'a> {
    map: &'a WorldMap,
    player: Player,
    textures: &'a TextureSet,
    weapon: WeaponAnimator,
    width: usize,
    height: usize,
    hud_rows: usize,
    columns: Vec<Column>,
    billboards: Vec<Billboard>,
}

impl<'a> FrameContext<'a> {
    /// Build the snapshot for a `width × height` logical screen.
    ///
    /// NPC distances must be current (see `Session::prepare_frame`).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        map: &'a WorldMap,
        player: Player,
        npcs: &[crate::enemy::Npc],
        weapon: WeaponAnimator,
        textures: &'a TextureSet,
        width: usize,
        height: usize,
        hud_rows: usize,
    ) -> Self {
        let h = height as f32;
        let columns = (0..width)
            .map(|x| {
                let angle = raycast::column_angle(player.angle, player.fov, x, width);
                let hit = raycast::cast(map, player.x, player.y, angle);
                let ceiling = (h / 2.0 - h / hit.distance) as i64;
                Column {
                    dir_x: angle.sin(),
                    dir_y: angle.cos(),
                    hit,
                    ceiling,
                    floor: height as i64 - ceiling,
                }
            })
            .collect();
        let billboards = sprite::project_all(npcs, &player, width, height, textures.npc_walk.len());

        Self {
            map,
            player,
            textures,
            weapon,
            width,
            height,
            hud_rows,
            columns,
            billboards,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn map(&self) -> &WorldMap {
        self.map
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn billboards(&self) -> &[Billboard] {
        &self.billboards
    }

    /// Colour of logical pixel `(x, py)`.
    pub fn pixel(&self, x: usize, py: usize) -> Rgb {
        self.resolve(x, py).1
    }

    /// Layer and colour of logical pixel `(x, py)`.
    pub fn resolve(&self, x: usize, py: usize) -> (Layer, Rgb) {
        if let Some(c) = self.hud_pixel(x, py) {
            return (Layer::Hud, c);
        }

        let Some(col) = self.columns.get(x) else {
            return (Layer::Sky, SKY_COLOR);
        };

        let (fx, fy) = (x as f32, py as f32);
        for b in self.billboards.iter().filter(|b| b.distance < col.hit.distance) {
            if let Some(c) = b.sample(fx, fy, self.textures) {
                return (Layer::Sprite, c);
            }
        }

        let row = py as i64;
        if row < col.ceiling {
            (Layer::Sky, SKY_COLOR)
        } else if row < col.floor {
            (Layer::Wall, self.wall_pixel(col, row))
        } else {
            (Layer::Floor, self.floor_pixel(col, py))
        }
    }

    fn active_hud(&self) -> &Texture {
        match self.weapon.active_frame() {
            Some(i) => self.textures.hud_fire.get(i).unwrap_or(&self.textures.hud_idle),
            None => &self.textures.hud_idle,
        }
    }

    fn hud_pixel(&self, x: usize, py: usize) -> Option<Rgb> {
        let band_top = self.height.checked_sub(self.hud_rows)?;
        if py < band_top || self.hud_rows == 0 {
            return None;
        }
        let tex = self.active_hud();
        if tex.is_empty() {
            return None;
        }
        let th = tex.height() as f32;
        let tx = (x as f32 / self.width as f32 * (tex.width() - 1) as f32) as i64;
        let t = (py - band_top) as f32 / self.hud_rows as f32;
        let ty = (th * HUD_CROP_TOP + t * th * (1.0 - HUD_CROP_TOP)) as i64;
        tex.texel(tx, ty).filter(|c| !c.is_key(HUD_KEY_THRESHOLD))
    }

    fn wall_pixel(&self, col: &Column, row: i64) -> Rgb {
        let span = (col.floor - col.ceiling).max(1) as f32;
        let v = (row - col.ceiling) as f32 / span;
        self.textures
            .wall
            .sample_uv(col.hit.tex_u, v)
            .unwrap_or(WALL_FALLBACK)
    }

    fn floor_pixel(&self, col: &Column, py: usize) -> Rgb {
        let tex = &self.textures.floor;
        if tex.is_empty() {
            return FLOOR_FALLBACK;
        }
        let half = self.height as f32 / 2.0;
        let below = py as f32 - half;
        if below <= 0.0 {
            return FLOOR_FALLBACK;
        }
        let dist = half / below;
        let wx = (self.player.x + col.dir_x * dist).abs();
        let wy = (self.player.y + col.dir_y * dist).abs();
        let (tw, th) = (tex.width() as i64, tex.height() as i64);
        let tx = ((wx * (tw - 1) as f32) as i64).rem_euclid(tw);
        let ty = ((wy * (th - 1) as f32) as i64).rem_euclid(th);
        tex.texel(tx, ty).unwrap_or(FLOOR_FALLBACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::Npc;
    use crate::types::FOV;

    fn room() -> WorldMap {
        let rows = [
            "########", "#......#", "#......#", "#......#", "#......#", "#......#", "#......#",
            "########",
        ];
        WorldMap::from_rows(8, 8, &rows).unwrap().map
    }

    fn textured() -> TextureSet {
        TextureSet {
            wall: Texture::solid(4, 4, Rgb::new(200, 0, 0)),
            floor: Texture::solid(4, 4, Rgb::new(0, 200, 0)),
            ..Default::default()
        }
    }

    #[test]
    fn sky_wall_floor_bands() {
        let map = room();
        let textures = textured();
        let player = Player::new(3.5, 3.5, 0.0, FOV);
        let ctx = FrameContext::new(&map, player, &[], WeaponAnimator::new(), &textures, 40, 40, 0);
        let col = ctx.columns()[20];
        assert!(col.ceiling > 0);
        assert_eq!(ctx.resolve(20, 0), (Layer::Sky, SKY_COLOR));
        assert_eq!(ctx.resolve(20, 20), (Layer::Wall, Rgb::new(200, 0, 0)));
        assert_eq!(ctx.resolve(20, 39), (Layer::Floor, Rgb::new(0, 200, 0)));
    }

    #[test]
    fn missing_textures_use_fallbacks() {
        let map = room();
        let textures = TextureSet::default();
        let player = Player::new(3.5, 3.5, 0.0, FOV);
        let ctx = FrameContext::new(&map, player, &[], WeaponAnimator::new(), &textures, 40, 40, 10);
        assert_eq!(ctx.resolve(20, 20), (Layer::Wall, WALL_FALLBACK));
        // Empty HUD falls through to the floor.
        assert_eq!(ctx.resolve(20, 39), (Layer::Floor, FLOOR_FALLBACK));
    }

    #[test]
    fn hud_overrides_scene_unless_transparent() {
        let map = room();
        let mut textures = textured();
        textures.hud_idle = Texture::solid(8, 8, Rgb::new(1, 2, 3));
        let player = Player::new(3.5, 3.5, 0.0, FOV);
        let ctx = FrameContext::new(&map, player, &[], WeaponAnimator::new(), &textures, 40, 40, 10);
        assert_eq!(ctx.resolve(5, 35), (Layer::Hud, Rgb::new(1, 2, 3)));
        assert_eq!(ctx.resolve(5, 29).0, Layer::Wall);

        textures.hud_idle = Texture::solid(8, 8, Rgb::new(255, 0, 255));
        let ctx = FrameContext::new(&map, player, &[], WeaponAnimator::new(), &textures, 40, 40, 10);
        assert_eq!(ctx.resolve(5, 35).0, Layer::Floor);
    }

    #[test]
    fn firing_hud_uses_animation_frame() {
        let map = room();
        let mut textures = textured();
        textures.hud_idle = Texture::solid(8, 8, Rgb::new(1, 1, 1));
        textures.hud_fire = vec![Texture::solid(8, 8, Rgb::new(9, 9, 9))];
        let mut weapon = WeaponAnimator::new();
        weapon.trigger();
        let player = Player::new(3.5, 3.5, 0.0, FOV);
        let ctx = FrameContext::new(&map, player, &[], weapon, &textures, 40, 40, 10);
        assert_eq!(ctx.resolve(5, 35), (Layer::Hud, Rgb::new(9, 9, 9)));
    }

    #[test]
    fn sprite_in_front_of_wall_is_drawn() {
        let map = room();
        let mut textures = textured();
        textures.npc_idle = Texture::solid(4, 4, Rgb::new(7, 7, 7));
        let player = Player::new(3.5, 1.5, 0.0, FOV);
        let mut npc = Npc::new(3.5, 4.5);
        npc.distance = npc.distance_to(player.x, player.y);
        let ctx = FrameContext::new(&map, player, &[npc], WeaponAnimator::new(), &textures, 40, 40, 0);
        assert_eq!(ctx.resolve(20, 20), (Layer::Sprite, Rgb::new(7, 7, 7)));
    }

    #[test]
    fn sprite_behind_wall_is_hidden() {
        let map = room();
        let mut textures = textured();
        textures.npc_idle = Texture::solid(4, 4, Rgb::new(7, 7, 7));
        let player = Player::new(3.5, 1.5, 0.0, FOV);
        let mut npc = Npc::new(3.5, 12.0);
        npc.distance = npc.distance_to(player.x, player.y);
        let ctx = FrameContext::new(&map, player, &[npc], WeaponAnimator::new(), &textures, 40, 40, 0);
        assert_ne!(ctx.resolve(20, 20).0, Layer::Sprite);
    }
}

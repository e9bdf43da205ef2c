//! SceneView: composites a [`FrameContext`] into half-block terminal cells.
//!
//! This module is pure (no I/O). Each terminal row covers two logical pixel
//! rows: the cell glyph is `▀`, its foreground the upper pixel and its
//! background the lower one. Rows are filled in parallel; every worker reads
//! the shared snapshot and writes only its own row.

use rayon::prelude::*;

use crate::core::{FrameContext, Session, TextureSet};
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::HUD_ROWS;

pub const HALF_BLOCK: char = '▀';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneView {
    hud_rows: usize,
}

impl Default for SceneView {
    fn default() -> Self {
        Self { hud_rows: HUD_ROWS }
    }
}

impl SceneView {
    pub fn new(hud_rows: usize) -> Self {
        Self { hud_rows }
    }

    /// Logical pixel size for a framebuffer.
    pub fn logical_size(fb: &FrameBuffer) -> (usize, usize) {
        (fb.width() as usize, fb.height() as usize * 2)
    }

    /// HUD band height for a screen `logical_height` pixels tall.
    pub fn hud_rows_for(&self, logical_height: usize) -> usize {
        self.hud_rows.min(logical_height)
    }

    /// Snapshot `session` at the framebuffer's resolution and draw it.
    pub fn render_session(&self, session: &mut Session, textures: &TextureSet, fb: &mut FrameBuffer) {
        let (width, height) = Self::logical_size(fb);
        let ctx = session.prepare_frame(textures, width, height, self.hud_rows_for(height));
        self.render_into(&ctx, fb);
    }

    /// Fill every cell of `fb` from `ctx`.
    pub fn render_into(&self, ctx: &FrameContext<'_>, fb: &mut FrameBuffer) {
        let width = fb.width() as usize;
        if width == 0 {
            return;
        }
        fb.cells_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                let top = y * 2;
                for (x, cell) in row.iter_mut().enumerate() {
                    *cell = Cell {
                        ch: HALF_BLOCK,
                        style: CellStyle::colors(ctx.pixel(x, top), ctx.pixel(x, top + 1)),
                    };
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, Texture, WeaponAnimator, WorldMap};
    use crate::types::{Rgb, FOV, SKY_COLOR};

    #[test]
    fn rows_pack_two_logical_pixels() {
        let rows = [
            "#########", "#.......#", "#.......#", "#.......#", "#.......#", "#.......#",
            "#.......#", "#.......#", "#########",
        ];
        let map = WorldMap::from_rows(9, 9, &rows).unwrap().map;
        let textures = TextureSet {
            wall: Texture::solid(2, 2, Rgb::new(90, 0, 0)),
            floor: Texture::solid(2, 2, Rgb::new(0, 90, 0)),
            ..Default::default()
        };
        let mut fb = FrameBuffer::new(16, 12);
        let (w, h) = SceneView::logical_size(&fb);
        assert_eq!((w, h), (16, 24));

        let player = Player::new(4.5, 1.5, 0.0, FOV);
        let ctx = FrameContext::new(&map, player, &[], WeaponAnimator::new(), &textures, w, h, 0);
        SceneView::new(0).render_into(&ctx, &mut fb);

        for y in 0..fb.height() {
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap();
                assert_eq!(cell.ch, HALF_BLOCK);
                assert_eq!(cell.style.fg, ctx.pixel(x as usize, y as usize * 2));
                assert_eq!(cell.style.bg, ctx.pixel(x as usize, y as usize * 2 + 1));
            }
        }
        // Top row is sky, bottom row is floor.
        assert_eq!(fb.get(8, 0).unwrap().style.fg, SKY_COLOR);
        assert_eq!(fb.get(8, 11).unwrap().style.bg, Rgb::new(0, 90, 0));
    }

    #[test]
    fn hud_band_never_exceeds_screen() {
        let view = SceneView::default();
        assert_eq!(view.hud_rows_for(100), HUD_ROWS);
        assert_eq!(view.hud_rows_for(20), 20);
    }
}

//! Raycaster: per-column wall distance and texture coordinate.
//!
//! Rays march in fixed [`RAY_STEP`] increments from the player until they
//! enter a wall cell or reach [`MAX_RAY_DISTANCE`]. Leaving the grid counts as
//! a hit at max range.

use std::f32::consts::{FRAC_PI_4, PI};

use crate::types::{MAX_RAY_DISTANCE, RAY_STEP};
use crate::world::{Tile, WorldMap};

const THREE_FRAC_PI_4: f32 = 3.0 * PI / 4.0;

/// Which side of a wall cell a ray struck, judged from the cell centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    East,
    South,
    West,
    North,
    /// The ray left the map or ran out of range.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance travelled along the ray, in `[0, MAX_RAY_DISTANCE]`.
    pub distance: f32,
    /// Horizontal texture coordinate in `[0, 1)`.
    pub tex_u: f32,
    pub face: Face,
    /// Number of march steps taken.
    pub steps: u32,
}

/// Ray angle for screen column `x` of `width`.
#[inline]
pub fn column_angle(player_angle: f32, fov: f32, x: usize, width: usize) -> f32 {
    (player_angle - fov / 2.0) + (x as f32 / width.max(1) as f32) * fov
}

/// Classify the struck face and derive the texture U coordinate.
pub fn face_and_u(hit_x: f32, hit_y: f32, cell_x: i64, cell_y: i64) -> (Face, f32) {
    let mid_x = cell_x as f32 + 0.5;
    let mid_y = cell_y as f32 + 0.5;
    let a = (hit_y - mid_y).atan2(hit_x - mid_x);

    let along_y = hit_y - cell_y as f32;
    let along_x = hit_x - cell_x as f32;
    let (face, u) = if (-FRAC_PI_4..FRAC_PI_4).contains(&a) {
        (Face::East, along_y)
    } else if (FRAC_PI_4..THREE_FRAC_PI_4).contains(&a) {
        (Face::South, along_x)
    } else if (-THREE_FRAC_PI_4..-FRAC_PI_4).contains(&a) {
        (Face::North, along_x)
    } else {
        (Face::West, along_y)
    };
    (face, u.rem_euclid(1.0))
}

/// Upper bound on march steps for any ray.
pub fn max_steps() -> u32 {
    (MAX_RAY_DISTANCE / RAY_STEP).ceil() as u32
}

/// March a ray from `(ox, oy)` along `angle` (direction `(sin, cos)`).
pub fn cast(map: &WorldMap, ox: f32, oy: f32, angle: f32) -> RayHit {
    let (dx, dy) = (angle.sin(), angle.cos());

    for steps in 1..=max_steps() {
        let distance = (steps as f32 * RAY_STEP).min(MAX_RAY_DISTANCE);
        let hx = ox + dx * distance;
        let hy = oy + dy * distance;
        let (cx, cy) = (hx.floor() as i64, hy.floor() as i64);
        match map.tile(cx, cy) {
            None => return miss(steps),
            Some(Tile::Wall) => {
                let (face, tex_u) = face_and_u(hx, hy, cx, cy);
                return RayHit {
                    distance,
                    tex_u,
                    face,
                    steps,
                };
            }
            Some(Tile::Floor) => {}
        }
    }

    miss(max_steps())
}

fn miss(steps: u32) -> RayHit {
    RayHit {
        distance: MAX_RAY_DISTANCE,
        tex_u: 0.0,
        face: Face::None,
        steps,
    }
}

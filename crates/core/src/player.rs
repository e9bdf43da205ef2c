//! Player state and controller: turning, movement with per-axis collision,
//! and hit-scan firing.

use std::f32::consts::{PI, TAU};

use crate::enemy::Npc;
use crate::tuning::Tuning;
use crate::types::{Button, Buttons, InputFrame, PLAYER_START};
use crate::world::WorldMap;

/// Wrap an angle into `[-PI, PI)`.
#[inline]
pub fn wrap_angle(a: f32) -> f32 {
    (a + PI).rem_euclid(TAU) - PI
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Facing in radians; `0` looks down `+y`.
    pub angle: f32,
    pub fov: f32,
}

impl Player {
    pub fn new(x: f32, y: f32, angle: f32, fov: f32) -> Self {
        Self { x, y, angle, fov }
    }

    pub fn spawn(tuning: &Tuning) -> Self {
        Self::new(PLAYER_START.0, PLAYER_START.1, 0.0, tuning.fov)
    }

    /// Facing as a unit vector `(sin a, cos a)`.
    #[inline]
    pub fn facing(&self) -> (f32, f32) {
        (self.angle.sin(), self.angle.cos())
    }

    /// Apply pointer and key turning for one tick.
    pub fn turn(&mut self, input: &InputFrame, dt: f32, tuning: &Tuning) {
        self.angle += input.pointer_dx * tuning.pointer_sensitivity;
        if input.held.contains(Button::TurnLeft) {
            self.angle -= tuning.key_turn_speed * dt;
        }
        if input.held.contains(Button::TurnRight) {
            self.angle += tuning.key_turn_speed * dt;
        }
    }

    /// Position the held movement buttons would reach, before collision.
    ///
    /// Directions compose additively; diagonals are not normalised.
    pub fn tentative_position(&self, held: Buttons, step: f32) -> (f32, f32) {
        let (s, c) = self.facing();
        let (mut nx, mut ny) = (self.x, self.y);
        if held.contains(Button::Forward) {
            nx += s * step;
            ny += c * step;
        }
        if held.contains(Button::Backward) {
            nx -= s * step;
            ny -= c * step;
        }
        if held.contains(Button::StrafeLeft) {
            nx -= c * step;
            ny += s * step;
        }
        if held.contains(Button::StrafeRight) {
            nx += c * step;
            ny -= s * step;
        }
        (nx, ny)
    }

    /// Move towards `(nx, ny)`, resolving X then Y independently so the
    /// player slides along walls.
    pub fn slide_to(&mut self, nx: f32, ny: f32, map: &WorldMap) {
        if map.is_floor_at(nx, self.y) {
            self.x = nx;
        }
        if map.is_floor_at(self.x, ny) {
            self.y = ny;
        }
    }

    /// Walk for one tick using walk/sprint speed.
    pub fn walk(&mut self, held: Buttons, dt: f32, map: &WorldMap, tuning: &Tuning) {
        let speed = if held.contains(Button::Sprint) {
            tuning.sprint_speed
        } else {
            tuning.walk_speed
        };
        let (nx, ny) = self.tentative_position(held, speed * dt);
        self.slide_to(nx, ny, map);
    }

    /// Signed angle from the facing direction to a world point.
    #[inline]
    pub fn bearing_to(&self, x: f32, y: f32) -> f32 {
        wrap_angle((x - self.x).atan2(y - self.y) - self.angle)
    }

    /// Hit-scan against every living NPC. Returns how many were killed.
    ///
    /// Uses each NPC's stored distance from the last render pass.
    pub fn fire(&self, npcs: &mut [Npc], tuning: &Tuning) -> usize {
        let mut kills = 0;
        for npc in npcs.iter_mut().filter(|n| !n.is_dead()) {
            let diff = self.bearing_to(npc.x, npc.y);
            if diff.abs() < tuning.fire_tolerance && npc.distance < tuning.fire_range {
                npc.kill();
                kills += 1;
            }
        }
        kills
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::WorldMap;

    fn open_map() -> WorldMap {
        let rows = ["....", "....", "....", "...."];
        WorldMap::from_rows(4, 4, &rows).unwrap().map
    }

    #[test]
    fn wrap_angle_stays_in_range() {
        for a in [-10.0f32, -PI, 0.0, PI, 7.0, 100.0] {
            let w = wrap_angle(a);
            assert!((-PI..PI).contains(&w), "{a} -> {w}");
        }
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn strafe_is_perpendicular_to_facing() {
        let p = Player::new(2.0, 2.0, 0.0, 1.0);
        let mut held = Buttons::empty();
        held.insert(Button::StrafeRight);
        let (nx, ny) = p.tentative_position(held, 1.0);
        assert!((nx - 3.0).abs() < 1e-6);
        assert!((ny - 2.0).abs() < 1e-6);
    }

    #[test]
    fn diagonal_is_not_normalised() {
        let p = Player::new(0.0, 0.0, 0.0, 1.0);
        let held: Buttons = [Button::Forward, Button::StrafeRight].into_iter().collect();
        let (nx, ny) = p.tentative_position(held, 1.0);
        let len = (nx * nx + ny * ny).sqrt();
        assert!((len - 2f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn pointer_turns_by_sensitivity() {
        let mut p = Player::new(1.0, 1.0, 0.0, 1.0);
        let tuning = Tuning::default().with_pointer_sensitivity(0.5);
        p.turn(&InputFrame::new(Buttons::empty(), 2.0), 0.016, &tuning);
        assert!((p.angle - 1.0).abs() < 1e-6);
    }

    #[test]
    fn slide_keeps_free_axis() {
        let rows = ["....", "....", "####", "...."];
        let map = WorldMap::from_rows(4, 4, &rows).unwrap().map;
        let mut p = Player::new(1.5, 1.5, 0.0, 1.0);
        p.slide_to(2.5, 2.5, &map);
        assert_eq!((p.x, p.y), (2.5, 1.5));
    }

    #[test]
    fn walk_uses_sprint_speed() {
        let map = open_map();
        let tuning = Tuning::default();
        let mut p = Player::new(1.5, 0.5, 0.0, 1.0);
        let held: Buttons = [Button::Forward, Button::Sprint].into_iter().collect();
        p.walk(held, 0.1, &map, &tuning);
        assert!((p.y - (0.5 + tuning.sprint_speed * 0.1)).abs() < 1e-5);
    }
}

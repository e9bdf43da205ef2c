//! Enemy simulation - timer-driven wander AI and death sequencing.

use rand::Rng;

use crate::types::{NPC_SPEED, NPC_TIMER_MAX, NPC_TIMER_MIN, NPC_WALK_FRAME_RATE};
use crate::world::WorldMap;

/// Wander decision. West is deliberately not part of the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    South,
    North,
    East,
    Idle,
}

impl Heading {
    pub const CHOICES: [Heading; 4] = [Heading::South, Heading::North, Heading::East, Heading::Idle];

    pub fn vector(self) -> Option<(f32, f32)> {
        match self {
            Heading::South => Some((0.0, 1.0)),
            Heading::North => Some((0.0, -1.0)),
            Heading::East => Some((1.0, 0.0)),
            Heading::Idle => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Npc {
    pub x: f32,
    pub y: f32,
    pub dir_x: f32,
    pub dir_y: f32,
    /// `Some(frame)` once dead.
    death_frame: Option<usize>,
    /// Monotonic walk-cycle accumulator.
    pub walk_frame: f32,
    /// Seconds until the next wander decision.
    pub move_timer: f32,
    pub moving: bool,
    /// Distance to the player as of the last render preparation.
    pub distance: f32,
}

impl Npc {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            dir_x: 0.0,
            dir_y: 1.0,
            death_frame: None,
            walk_frame: 0.0,
            move_timer: 0.0,
            moving: false,
            distance: 0.0,
        }
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.death_frame.is_some()
    }

    pub fn death_frame(&self) -> Option<usize> {
        self.death_frame
    }

    /// Mark dead at death frame 0. No effect on an already dead NPC.
    pub fn kill(&mut self) {
        if self.death_frame.is_none() {
            self.death_frame = Some(0);
        }
    }

    /// Index into a walk cycle of `len` frames.
    pub fn walk_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.walk_frame as usize % len)
    }

    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        let (dx, dy) = (self.x - x, self.y - y);
        (dx * dx + dy * dy).sqrt()
    }

    fn choose(&mut self, rng: &mut impl Rng) {
        self.move_timer = rng.gen_range(NPC_TIMER_MIN..NPC_TIMER_MAX);
        let heading = Heading::CHOICES[rng.gen_range(0..Heading::CHOICES.len())];
        match heading.vector() {
            Some((dx, dy)) => {
                self.dir_x = dx;
                self.dir_y = dy;
                self.moving = true;
            }
            None => self.moving = false,
        }
    }

    /// Advance one tick.
    ///
    /// `death_frames` is the number of loaded death sprites; the death frame
    /// stops at the last one.
    pub fn update(&mut self, dt: f32, map: &WorldMap, death_frames: usize, rng: &mut impl Rng) {
        if let Some(frame) = self.death_frame.as_mut() {
            if *frame + 1 < death_frames {
                *frame += 1;
            }
            return;
        }

        self.move_timer -= dt;
        if self.move_timer <= 0.0 {
            self.choose(rng);
        }

        if self.moving {
            let nx = self.x + self.dir_x * NPC_SPEED * dt;
            let ny = self.y + self.dir_y * NPC_SPEED * dt;
            if map.is_floor_at(nx, ny) {
                self.x = nx;
                self.y = ny;
                self.walk_frame += dt * NPC_WALK_FRAME_RATE;
            } else {
                self.move_timer = 0.0;
            }
        }
    }
}

/// Spawn one NPC per spawn point.
pub fn spawn_all(spawns: &[(f32, f32)]) -> Vec<Npc> {
    spawns.iter().map(|&(x, y)| Npc::new(x, y)).collect()
}

/// Update every NPC for one tick.
pub fn update_all(
    npcs: &mut [Npc],
    dt: f32,
    map: &WorldMap,
    death_frames: usize,
    rng: &mut impl Rng,
) {
    for npc in npcs.iter_mut() {
        npc.update(dt, map, death_frames, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn corridor() -> WorldMap {
        WorldMap::from_rows(5, 3, &["#####", "#...#", "#####"]).unwrap().map
    }

    #[test]
    fn kill_is_idempotent() {
        let mut npc = Npc::new(1.5, 1.5);
        npc.kill();
        assert_eq!(npc.death_frame(), Some(0));
        npc.kill();
        assert_eq!(npc.death_frame(), Some(0));
    }

    #[test]
    fn death_frame_holds_at_last_sprite() {
        let map = corridor();
        let mut rng = StdRng::seed_from_u64(7);
        let mut npc = Npc::new(1.5, 1.5);
        npc.kill();
        for _ in 0..10 {
            npc.update(0.016, &map, 5, &mut rng);
        }
        assert_eq!(npc.death_frame(), Some(4));
    }

    #[test]
    fn death_frame_stays_zero_without_sprites() {
        let map = corridor();
        let mut rng = StdRng::seed_from_u64(7);
        let mut npc = Npc::new(1.5, 1.5);
        npc.kill();
        npc.update(0.016, &map, 0, &mut rng);
        assert_eq!(npc.death_frame(), Some(0));
    }

    #[test]
    fn expired_timer_reseeds_within_bounds() {
        let map = corridor();
        let mut rng = StdRng::seed_from_u64(42);
        let mut npc = Npc::new(2.5, 1.5);
        for _ in 0..50 {
            npc.move_timer = 0.0;
            npc.update(0.0, &map, 0, &mut rng);
            assert!((NPC_TIMER_MIN..NPC_TIMER_MAX).contains(&npc.move_timer));
        }
    }

    #[test]
    fn blocked_step_forces_redecision() {
        let map = corridor();
        let mut rng = StdRng::seed_from_u64(1);
        let mut npc = Npc::new(1.5, 1.1);
        npc.move_timer = 2.0;
        npc.moving = true;
        npc.dir_x = 0.0;
        npc.dir_y = -1.0;
        npc.update(0.1, &map, 0, &mut rng);
        assert_eq!((npc.x, npc.y), (1.5, 1.1));
        assert_eq!(npc.move_timer, 0.0);
        assert_eq!(npc.walk_frame, 0.0);
    }

    #[test]
    fn accepted_step_advances_walk_cycle() {
        let map = corridor();
        let mut rng = StdRng::seed_from_u64(1);
        let mut npc = Npc::new(1.5, 1.5);
        npc.move_timer = 2.0;
        npc.moving = true;
        npc.dir_x = 1.0;
        npc.dir_y = 0.0;
        npc.update(0.1, &map, 0, &mut rng);
        assert!((npc.x - 1.7).abs() < 1e-5);
        assert!((npc.walk_frame - 1.0).abs() < 1e-5);
        assert_eq!(npc.walk_index(4), Some(1));
        assert_eq!(npc.walk_index(0), None);
    }

    #[test]
    fn never_heads_west() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut npc = Npc::new(1.5, 1.5);
        for _ in 0..200 {
            npc.choose(&mut rng);
            if npc.moving {
                assert!(npc.dir_x >= 0.0);
            }
        }
    }
}

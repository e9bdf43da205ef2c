//! Session: the per-run context object and the Menu / Controls / Play state
//! machine.
//!
//! Everything the simulation mutates lives here and is passed explicitly into
//! update and render calls; there is no process-wide state.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::audio::{AudioSink, Effect};
use crate::edge::{EdgeDetector, Latch};
use crate::enemy::{self, Npc};
use crate::frame::FrameContext;
use crate::player::Player;
use crate::texture::{AnimationLengths, TextureSet};
use crate::tuning::Tuning;
use crate::types::{Button, GameMode, InputFrame, MenuEntry, MENU_COOLDOWN_SECS};
use crate::weapon::WeaponAnimator;
use crate::world::{ParsedMap, WorldMap};

const MENU_KEYS: [Button; 3] = [Button::Forward, Button::Backward, Button::Confirm];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Exit,
}

/// Side effects of one tick the caller must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub outcome: TickOutcome,
    /// The pointer delta was consumed; the input layer should recenter.
    pub recenter_pointer: bool,
    pub kills: usize,
}

impl TickReport {
    fn idle() -> Self {
        Self {
            outcome: TickOutcome::Continue,
            recenter_pointer: false,
            kills: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    map: WorldMap,
    player: Player,
    npcs: Vec<Npc>,
    weapon: WeaponAnimator,
    mode: GameMode,
    selection: usize,
    menu_latch: Latch,
    cooldown: f32,
    edges: EdgeDetector,
    rng: StdRng,
    tuning: Tuning,
    lengths: AnimationLengths,
    clear_requested: bool,
}

impl Session {
    pub fn new(parsed: ParsedMap, lengths: AnimationLengths, tuning: Tuning, seed: u64) -> Self {
        let ParsedMap { map, spawns } = parsed;
        let mut session = Self {
            map,
            player: Player::spawn(&tuning),
            npcs: enemy::spawn_all(&spawns),
            weapon: WeaponAnimator::new(),
            mode: GameMode::Menu,
            selection: 0,
            menu_latch: Latch::default(),
            cooldown: 0.0,
            edges: EdgeDetector::new(),
            rng: StdRng::seed_from_u64(seed),
            tuning,
            lengths,
            clear_requested: true,
        };
        session.refresh_distances();
        session
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Highlighted menu entry index, always in `0..3`.
    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn selected_entry(&self) -> MenuEntry {
        MenuEntry::from_index(self.selection)
    }

    pub fn map(&self) -> &WorldMap {
        &self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    pub fn weapon(&self) -> WeaponAnimator {
        self.weapon
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Whether the display should clear before the next frame. Resets the
    /// request.
    pub fn take_clear_request(&mut self) -> bool {
        std::mem::take(&mut self.clear_requested)
    }

    fn switch_mode(&mut self, mode: GameMode) {
        log::debug!("mode {:?} -> {:?}", self.mode, mode);
        if mode == GameMode::Menu {
            self.cooldown = MENU_COOLDOWN_SECS;
        }
        self.mode = mode;
        self.clear_requested = true;
    }

    /// Advance one tick with the measured elapsed time `dt` (seconds).
    pub fn tick(&mut self, input: &InputFrame, dt: f32, audio: &mut dyn AudioSink) -> TickReport {
        let dt = self.tuning.clamp_dt(dt);
        let rising = self.edges.update(input.held);

        match self.mode {
            GameMode::Menu => self.tick_menu(input, dt),
            GameMode::Controls => {
                if rising.contains(Button::Back) {
                    self.switch_mode(GameMode::Menu);
                }
                TickReport::idle()
            }
            GameMode::Play => {
                if rising.contains(Button::Escape) {
                    self.switch_mode(GameMode::Menu);
                    return TickReport::idle();
                }
                let trigger = rising.contains(Button::Confirm) || rising.contains(Button::Fire);
                self.tick_play(input, dt, trigger, audio)
            }
        }
    }

    fn tick_menu(&mut self, input: &InputFrame, dt: f32) -> TickReport {
        let mut report = TickReport::idle();
        if self.cooldown > 0.0 {
            self.cooldown = (self.cooldown - dt).max(0.0);
            return report;
        }

        let held = input.held;
        if self.menu_latch.is_armed() {
            if held.contains(Button::Forward) {
                self.menu_latch.fire();
                self.selection = (self.selection + MenuEntry::COUNT - 1) % MenuEntry::COUNT;
            } else if held.contains(Button::Backward) {
                self.menu_latch.fire();
                self.selection = (self.selection + 1) % MenuEntry::COUNT;
            } else if held.contains(Button::Confirm) {
                self.menu_latch.fire();
                match self.selected_entry() {
                    MenuEntry::Play => self.switch_mode(GameMode::Play),
                    MenuEntry::Controls => self.switch_mode(GameMode::Controls),
                    MenuEntry::Exit => report.outcome = TickOutcome::Exit,
                }
            }
        }
        self.menu_latch.rearm(held, &MENU_KEYS);
        report
    }

    fn tick_play(
        &mut self,
        input: &InputFrame,
        dt: f32,
        trigger: bool,
        audio: &mut dyn AudioSink,
    ) -> TickReport {
        self.weapon.advance(self.lengths.fire);

        self.player.turn(input, dt, &self.tuning);
        self.player.walk(input.held, dt, &self.map, &self.tuning);

        let mut kills = 0;
        if trigger && self.weapon.trigger() {
            audio.play_effect(Effect::Shotgun);
            kills = self.player.fire(&mut self.npcs, &self.tuning);
            if kills > 0 {
                log::debug!("shot killed {kills}");
            }
        }

        enemy::update_all(
            &mut self.npcs,
            dt,
            &self.map,
            self.lengths.death,
            &mut self.rng,
        );

        TickReport {
            outcome: TickOutcome::Continue,
            recenter_pointer: true,
            kills,
        }
    }

    /// Recompute every NPC's distance to the player.
    pub fn refresh_distances(&mut self) {
        let (px, py) = (self.player.x, self.player.y);
        for npc in &mut self.npcs {
            npc.distance = npc.distance_to(px, py);
        }
    }

    /// Refresh derived state and snapshot the world for rendering a
    /// `width × height` logical screen.
    pub fn prepare_frame<'a>(
        &'a mut self,
        textures: &'a TextureSet,
        width: usize,
        height: usize,
        hud_rows: usize,
    ) -> FrameContext<'a> {
        self.refresh_distances();
        let this: &'a Session = self;
        FrameContext::new(
            &this.map,
            this.player,
            &this.npcs,
            this.weapon,
            textures,
            width,
            height,
            hud_rows,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::RecordingAudio;
    use crate::types::Buttons;

    fn session() -> Session {
        let parsed = WorldMap::builtin().unwrap();
        let lengths = AnimationLengths {
            fire: 13,
            walk: 4,
            death: 5,
        };
        Session::new(parsed, lengths, Tuning::default(), 1)
    }

    fn press(buttons: &[Button]) -> InputFrame {
        InputFrame::new(buttons.iter().copied().collect(), 0.0)
    }

    fn idle() -> InputFrame {
        InputFrame::new(Buttons::empty(), 0.0)
    }

    #[test]
    fn starts_in_menu_with_clear_request() {
        let mut s = session();
        assert_eq!(s.mode(), GameMode::Menu);
        assert!(s.take_clear_request());
        assert!(!s.take_clear_request());
    }

    #[test]
    fn holding_down_moves_selection_once() {
        let mut s = session();
        let mut audio = RecordingAudio::default();
        for _ in 0..5 {
            s.tick(&press(&[Button::Backward]), 0.01, &mut audio);
        }
        assert_eq!(s.selection(), 1);
        s.tick(&idle(), 0.01, &mut audio);
        s.tick(&press(&[Button::Backward]), 0.01, &mut audio);
        assert_eq!(s.selection(), 2);
    }

    #[test]
    fn exit_entry_ends_the_loop() {
        let mut s = session();
        let mut audio = RecordingAudio::default();
        s.tick(&press(&[Button::Forward]), 0.01, &mut audio);
        s.tick(&idle(), 0.01, &mut audio);
        let report = s.tick(&press(&[Button::Confirm]), 0.01, &mut audio);
        assert_eq!(report.outcome, TickOutcome::Exit);
    }
}

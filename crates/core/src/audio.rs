//! Audio seam. The simulation only emits fire-and-forget requests.

/// One-shot sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    Shotgun,
}

pub trait AudioSink {
    fn play_effect(&mut self, effect: Effect);
    fn start_music(&mut self);
    fn stop_music(&mut self);
}

/// Discards every request. Used when muted or when no device is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_effect(&mut self, _effect: Effect) {}
    fn start_music(&mut self) {}
    fn stop_music(&mut self) {}
}

/// Records requests in order; handy for asserting on side effects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingAudio {
    pub effects: Vec<Effect>,
    pub music_playing: bool,
}

impl AudioSink for RecordingAudio {
    fn play_effect(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    fn start_music(&mut self) {
        self.music_playing = true;
    }

    fn stop_music(&mut self) {
        self.music_playing = false;
    }
}

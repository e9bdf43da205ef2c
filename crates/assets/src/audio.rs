//! Sound output through rodio.

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::core::{AudioSink, Effect};

pub const SHOTGUN_FILE: &str = "doom-shotgun.wav";
pub const MUSIC_FILE: &str = "doom-music.wav";

fn load_bytes(path: &Path) -> Option<Arc<[u8]>> {
    match std::fs::read(path) {
        Ok(bytes) => Some(bytes.into()),
        Err(e) => {
            log::warn!("sound {} unavailable: {e}", path.display());
            None
        }
    }
}

pub struct RodioAudio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    shotgun: Option<Arc<[u8]>>,
    music: Option<Arc<[u8]>>,
    music_sink: Option<Sink>,
}

impl RodioAudio {
    /// Open the default output device and read the sound files in `dir`.
    /// `None` when no device is available.
    pub fn open(dir: &Path) -> Option<Self> {
        let (_stream, handle) = match OutputStream::try_default() {
            Ok(pair) => pair,
            Err(e) => {
                log::warn!("no audio output: {e}");
                return None;
            }
        };
        Some(Self {
            _stream,
            handle,
            shotgun: load_bytes(&dir.join(SHOTGUN_FILE)),
            music: load_bytes(&dir.join(MUSIC_FILE)),
            music_sink: None,
        })
    }
}

impl AudioSink for RodioAudio {
    fn play_effect(&mut self, effect: Effect) {
        let data = match effect {
            Effect::Shotgun => self.shotgun.clone(),
        };
        let Some(bytes) = data else { return };
        match Decoder::new(Cursor::new(bytes)) {
            Ok(dec) => {
                if let Ok(sink) = Sink::try_new(&self.handle) {
                    sink.append(dec);
                    sink.detach();
                }
            }
            Err(e) => log::warn!("cannot decode {effect:?}: {e}"),
        }
    }

    fn start_music(&mut self) {
        if self.music_sink.is_some() {
            return;
        }
        let Some(bytes) = self.music.clone() else { return };
        match Decoder::new_looped(Cursor::new(bytes)) {
            Ok(dec) => {
                if let Ok(sink) = Sink::try_new(&self.handle) {
                    sink.append(dec);
                    self.music_sink = Some(sink);
                }
            }
            Err(e) => log::warn!("cannot decode music: {e}"),
        }
    }

    fn stop_music(&mut self) {
        if let Some(sink) = self.music_sink.take() {
            sink.stop();
        }
    }
}

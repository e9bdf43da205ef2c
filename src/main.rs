//! Terminal raycaster (default binary).
//!
//! Loads configuration, map, textures and audio, then runs the fixed loop:
//! poll input, tick the session, render the current mode, present.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_raycaster::assets::{load_texture_set, ImageTextureProvider, RodioAudio};
use tui_raycaster::config::GameConfig;
use tui_raycaster::core::{AudioSink, NullAudio, Session, TextureSet, TickOutcome};
use tui_raycaster::input::InputTracker;
use tui_raycaster::logging;
use tui_raycaster::term::{
    ControlsView, DisplaySink, FrameBuffer, MenuView, SceneView, TerminalRenderer,
};
use tui_raycaster::types::GameMode;

const MENU_FRAME_SLEEP: Duration = Duration::from_millis(10);

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    // Map errors are fatal before the terminal is touched.
    let parsed = config.load_map()?;
    let textures = load_texture_set(&ImageTextureProvider, &config.assets_dir);

    let mut audio: Box<dyn AudioSink> = if config.mute {
        Box::new(NullAudio)
    } else {
        match RodioAudio::open(&config.assets_dir) {
            Some(audio) => Box::new(audio),
            None => Box::new(NullAudio),
        }
    };

    let seed = config.seed_or_random();
    log::info!("starting with seed {seed}");
    let mut session = Session::new(parsed, textures.lengths(), config.tuning(), seed);

    audio.start_music();

    let mut term = TerminalRenderer::new();
    let result = term
        .enter()
        .and_then(|()| run(&mut term, &mut session, &textures, audio.as_mut()));

    // Always try to restore terminal state.
    let _ = term.exit();
    audio.stop_music();
    result
}

fn run(
    display: &mut dyn DisplaySink,
    session: &mut Session,
    textures: &TextureSet,
    audio: &mut dyn AudioSink,
) -> Result<()> {
    let scene = SceneView::default();
    let mut input = InputTracker::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let Event::Resize(..) = ev {
                display.invalidate();
            }
            input.handle_event(&ev, Instant::now());
        }

        let now = Instant::now();
        let dt = now.duration_since(last_tick).as_secs_f32();
        last_tick = now;

        let frame = input.frame(now);
        let report = session.tick(&frame, dt, audio);
        if report.outcome == TickOutcome::Exit {
            return Ok(());
        }
        // Pointer motion only turns the view during play.
        if report.recenter_pointer || session.mode() != GameMode::Play {
            input.recenter_pointer();
        }
        if session.take_clear_request() {
            display.invalidate();
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        fb.resize(w, h);
        match session.mode() {
            GameMode::Menu => MenuView.render_into(session.selection(), &mut fb),
            GameMode::Controls => ControlsView.render_into(&mut fb),
            GameMode::Play => scene.render_session(session, textures, &mut fb),
        }
        display.present(&mut fb)?;

        if session.mode() != GameMode::Play {
            thread::sleep(MENU_FRAME_SLEEP);
        }
    }
}

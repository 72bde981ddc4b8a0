//! Platformer entry point
//!
//! No window backend is linked, so the native binary drives the game loop
//! headlessly with a scripted demo run.
//!
//! Usage:
//! - `platformer [settings.json]` runs the platformer demo
//! - `platformer fern [seed]` draws the Barnsley fern once

use std::path::Path;

use platformer::fern::{FERN_ITERATIONS, Fern};
use platformer::platform::{InputEvent, Key, RecordingCanvas, ScriptedEvents, SystemClock};
use platformer::{App, Settings};

/// Frames the demo runs before quitting (ten seconds at 60 FPS)
const DEMO_FRAMES: usize = 600;

fn main() {
    env_logger::init();
    log::info!("Platformer (native, headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("fern") => run_fern(args.get(1).map(String::as_str)),
        path => run_platformer(path.map(Path::new)),
    }
}

fn run_platformer(settings_path: Option<&Path>) {
    let settings = Settings::load(settings_path);
    let mut app = App::new(&settings);

    let mut events = demo_script();
    let mut canvas = RecordingCanvas::default();
    let mut clock = SystemClock::new();

    let frames = app.run(&mut events, &mut canvas, &mut clock, None);

    let state = app.state();
    log::info!(
        "Demo finished after {} frames: player at ({:.1}, {:.1}), camera at ({:.1}, {:.1}) zoom {:.2}",
        frames,
        state.player.pos.x,
        state.player.pos.y,
        state.camera.pos.x,
        state.camera.pos.y,
        state.camera.zoom()
    );
}

/// Walk right, hop onto the first platform, zoom, drag the view, then quit
fn demo_script() -> ScriptedEvents {
    ScriptedEvents::default()
        .at(30, [InputEvent::KeyDown(Key::Right)])
        .at(45, [InputEvent::KeyDown(Key::Jump)])
        .at(50, [InputEvent::KeyUp(Key::Jump)])
        .at(90, [InputEvent::KeyUp(Key::Right)])
        .at(150, [InputEvent::Scroll(3.0)])
        .at(
            240,
            [
                InputEvent::PointerDown,
                InputEvent::PointerMotion { dx: -120.0, dy: 40.0 },
            ],
        )
        .at(260, [InputEvent::PointerUp])
        .at(300, [InputEvent::Scroll(-3.0)])
        .at(360, [InputEvent::KeyDown(Key::Left)])
        .at(420, [InputEvent::KeyUp(Key::Left)])
        .at(DEMO_FRAMES, [InputEvent::KeyDown(Key::Quit)])
}

fn run_fern(seed: Option<&str>) {
    let seed = match seed.map(str::parse::<u64>) {
        Some(Ok(seed)) => seed,
        Some(Err(err)) => {
            log::warn!("Invalid fern seed: {err}; using 0");
            0
        }
        None => 0,
    };

    let mut fern = Fern::new(seed);
    let mut canvas = RecordingCanvas::default();
    fern.draw(&mut canvas, FERN_ITERATIONS);
    fern.scroll(20.0);
    fern.draw(&mut canvas, FERN_ITERATIONS);
    log::info!(
        "Fern (seed {}) drawn {} times, {} points at zoom {}",
        seed,
        canvas.frames_presented,
        canvas.last_frame.len(),
        fern.zoom()
    );
}

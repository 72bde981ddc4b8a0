//! Main loop
//!
//! Per frame: poll events, tick the simulation, render, then sleep out the
//! rest of the frame period. Everything runs on the calling thread.

use crate::platform::{Canvas, Clock, EventSource, FramePacer, InputEvent, InputState};
use crate::renderer;
use crate::settings::Settings;
use crate::sim::{SimulationState, TickReport, tick};

/// Game instance holding all loop state
pub struct App {
    state: SimulationState,
    input: InputState,
    pacer: FramePacer,
    /// Reused event buffer
    events: Vec<InputEvent>,
    fps: u32,
    frames: u64,
    running: bool,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: SimulationState::new(settings),
            input: InputState::new(),
            pacer: FramePacer::new(settings.frame_delay_ms()),
            events: Vec::new(),
            fps: settings.fps.max(1),
            frames: 0,
            running: true,
        }
    }

    #[inline]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run one frame. Returns the tick report, or `None` once quit has been
    /// requested (the frame is then skipped entirely).
    pub fn frame<E, C, K>(
        &mut self,
        events: &mut E,
        canvas: &mut C,
        clock: &mut K,
    ) -> Option<TickReport>
    where
        E: EventSource + ?Sized,
        C: Canvas + ?Sized,
        K: Clock + ?Sized,
    {
        if !self.running {
            return None;
        }
        self.pacer.begin(&*clock);

        self.events.clear();
        events.poll(&mut self.events);
        for event in &self.events {
            self.input.handle(event);
        }
        if self.input.quit_requested() {
            log::info!("Quit requested after {} frames", self.frames);
            self.running = false;
            return None;
        }

        let input = self.input.take_tick_input();
        let report = tick(&mut self.state, &input);

        renderer::submit(canvas, &renderer::frame(&self.state));

        self.frames += 1;
        if self.frames % u64::from(self.fps) == 0 {
            let player = &self.state.player;
            log::debug!(
                "Frame {}: player at ({:.1}, {:.1}) vel ({:.2}, {:.2}), zoom {:.2}",
                self.frames,
                player.pos.x,
                player.pos.y,
                player.vel.x,
                player.vel.y,
                self.state.camera.zoom()
            );
        }

        self.pacer.finish(clock);
        Some(report)
    }

    /// Run until quit, or until `max_frames` frames have run
    pub fn run<E, C, K>(
        &mut self,
        events: &mut E,
        canvas: &mut C,
        clock: &mut K,
        max_frames: Option<u64>,
    ) -> u64
    where
        E: EventSource + ?Sized,
        C: Canvas + ?Sized,
        K: Clock + ?Sized,
    {
        while max_frames.is_none_or(|max| self.frames < max) {
            if self.frame(events, canvas, clock).is_none() {
                break;
            }
        }
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Key, ManualClock, RecordingCanvas, ScriptedEvents};
    use crate::renderer::colors;

    #[test]
    fn test_quit_event_stops_loop() {
        let mut app = App::new(&Settings::default());
        let mut events = ScriptedEvents::default().at(3, [InputEvent::Quit]);
        let mut canvas = RecordingCanvas::default();
        let mut clock = ManualClock::default();

        let frames = app.run(&mut events, &mut canvas, &mut clock, Some(100));
        assert_eq!(frames, 3);
        assert!(!app.is_running());
        assert_eq!(canvas.frames_presented, 3);
        assert_eq!(app.state().time_ticks, 3);
    }

    #[test]
    fn test_quit_key_stops_loop() {
        let mut app = App::new(&Settings::default());
        let mut events = ScriptedEvents::default().at(0, [InputEvent::KeyDown(Key::Quit)]);
        let mut canvas = RecordingCanvas::default();
        let mut clock = ManualClock::default();

        assert!(app.frame(&mut events, &mut canvas, &mut clock).is_none());
        assert_eq!(app.frames(), 0);
        assert!(app.frame(&mut events, &mut canvas, &mut clock).is_none());
    }

    #[test]
    fn test_frames_are_paced() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        let mut events = ScriptedEvents::default();
        let mut canvas = RecordingCanvas::default();
        let mut clock = ManualClock::default();

        app.run(&mut events, &mut canvas, &mut clock, Some(10));
        // Nothing takes time on the manual clock, so every frame sleeps fully
        assert_eq!(clock.slept_ms(), 10 * settings.frame_delay_ms());
    }

    #[test]
    fn test_player_lands_and_renders() {
        let mut app = App::new(&Settings::default());
        let mut events = ScriptedEvents::default();
        let mut canvas = RecordingCanvas::default();
        let mut clock = ManualClock::default();

        app.run(&mut events, &mut canvas, &mut clock, Some(120));
        assert_eq!(app.state().player.pos.y, 555.0);
        assert_eq!(canvas.clear_color, colors::BACKGROUND);
        let player = canvas.last_frame.last().expect("player drawn");
        assert_eq!(player.color, colors::PLAYER);
    }

    #[test]
    fn test_walks_after_camera_settles() {
        let mut app = App::new(&Settings::default());
        let mut events = ScriptedEvents::default()
            .at(30, [InputEvent::KeyDown(Key::Right)])
            .at(40, [InputEvent::KeyUp(Key::Right)]);
        let mut canvas = RecordingCanvas::default();
        let mut clock = ManualClock::default();

        app.run(&mut events, &mut canvas, &mut clock, Some(80));
        assert!(app.state().player.pos.x > 100.0);
    }
}

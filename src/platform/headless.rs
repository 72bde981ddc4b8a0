//! Headless platform: scripted input, recording canvas, manual clock
//!
//! Lets the full loop run without a window.

use super::{Canvas, Clock, EventSource, InputEvent};
use crate::renderer::DrawRect;

/// Replays a fixed per-frame event script. Frames past the end of the
/// script produce no events.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    frames: Vec<Vec<InputEvent>>,
    cursor: usize,
}

impl ScriptedEvents {
    /// Queue `events` at frame `frame`, padding the script as needed
    pub fn at(mut self, frame: usize, events: impl IntoIterator<Item = InputEvent>) -> Self {
        if self.frames.len() <= frame {
            self.frames.resize_with(frame + 1, Vec::new);
        }
        self.frames[frame].extend(events);
        self
    }

    /// Frames polled so far
    #[inline]
    pub fn frames_polled(&self) -> usize {
        self.cursor
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self, out: &mut Vec<InputEvent>) {
        if let Some(events) = self.frames.get(self.cursor) {
            out.extend_from_slice(events);
        }
        self.cursor += 1;
    }
}

/// Keeps the most recent frame's draw calls
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pending: Vec<DrawRect>,
    /// Draw calls of the last presented frame
    pub last_frame: Vec<DrawRect>,
    pub clear_color: [f32; 4],
    pub frames_presented: u64,
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: [f32; 4]) {
        self.clear_color = color;
        self.pending.clear();
    }

    fn fill_rect(&mut self, rect: &DrawRect) {
        self.pending.push(*rect);
    }

    fn present(&mut self) {
        std::mem::swap(&mut self.last_frame, &mut self.pending);
        self.pending.clear();
        self.frames_presented += 1;
        log::trace!(
            "Frame {} presented with {} rects",
            self.frames_presented,
            self.last_frame.len()
        );
    }
}

/// Clock that only moves when told to; sleeping advances it
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: u64,
    slept: u64,
}

impl ManualClock {
    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }

    /// Total time spent in `sleep_ms`
    #[inline]
    pub fn slept_ms(&self) -> u64 {
        self.slept
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn sleep_ms(&mut self, ms: u64) {
        self.now += ms;
        self.slept += ms;
    }
}

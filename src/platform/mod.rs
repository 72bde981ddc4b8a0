//! Platform abstraction layer
//!
//! Thin seams over the windowing/rendering library:
//! - Input events
//! - Filled-rectangle canvas
//! - Millisecond clock and frame pacing

pub mod headless;
pub mod input;
pub mod pacing;

pub use headless::{ManualClock, RecordingCanvas, ScriptedEvents};
pub use input::InputState;
pub use pacing::{FramePacer, SystemClock};

use crate::renderer::DrawRect;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Jump,
    Quit,
    Other,
}

/// Discrete window events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window close request
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    PointerDown,
    PointerUp,
    /// Relative pointer motion in screen pixels
    PointerMotion { dx: f32, dy: f32 },
    /// Signed wheel notches
    Scroll(f32),
}

/// Source of queued input events
pub trait EventSource {
    /// Append every event queued since the last poll to `out`
    fn poll(&mut self, out: &mut Vec<InputEvent>);
}

/// Screen-space filled-rectangle renderer
pub trait Canvas {
    fn clear(&mut self, color: [f32; 4]);
    fn fill_rect(&mut self, rect: &DrawRect);
    /// Flush the frame to the display
    fn present(&mut self);
}

/// Monotonic millisecond clock with a blocking sleep
pub trait Clock {
    fn now_ms(&self) -> u64;
    fn sleep_ms(&mut self, ms: u64);
}


//! Folds window events into per-tick input

use glam::Vec2;

use super::{InputEvent, Key};
use crate::sim::TickInput;

/// Held-key state plus pointer/scroll accumulators
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    jump: bool,
    pointer_down: bool,
    pointer_delta: Vec2,
    scroll: f32,
    quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event
    pub fn handle(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Quit) => self.quit = true,
            InputEvent::KeyDown(key) => self.set_key(key, true),
            InputEvent::KeyUp(key) => self.set_key(key, false),
            InputEvent::PointerDown => self.pointer_down = true,
            InputEvent::PointerUp => self.pointer_down = false,
            InputEvent::PointerMotion { dx, dy } => {
                if self.pointer_down {
                    self.pointer_delta += Vec2::new(dx, dy);
                }
            }
            InputEvent::Scroll(delta) => self.scroll += delta,
        }
    }

    fn set_key(&mut self, key: Key, down: bool) {
        match key {
            Key::Left => self.left = down,
            Key::Right => self.right = down,
            Key::Jump => self.jump = down,
            Key::Quit | Key::Other => {}
        }
    }

    /// Whether a quit was requested
    #[inline]
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Input for the coming tick. Clears the per-frame accumulators.
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            left: self.left,
            right: self.right,
            jump: self.jump,
            dragging: self.pointer_down,
            pointer_delta: self.pointer_delta,
            scroll: self.scroll,
        };
        self.pointer_delta = Vec2::ZERO;
        self.scroll = 0.0;
        input
    }
}

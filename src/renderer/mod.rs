//! Rendering module
//!
//! Builds screen-space draw lists and submits them to a [`Canvas`].

pub mod instance;
pub mod shapes;

pub use instance::{DrawRect, colors};
pub use shapes::frame;

use crate::platform::Canvas;

/// Clear, draw every rectangle, then present
pub fn submit<C: Canvas + ?Sized>(canvas: &mut C, draws: &[DrawRect]) {
    canvas.clear(colors::BACKGROUND);
    for draw in draws {
        canvas.fill_rect(draw);
    }
    canvas.present();
}

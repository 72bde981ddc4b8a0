//! Draw-list generation
//!
//! Converts world geometry to screen space through the camera:
//! `screen = zoom * (world - camera.pos)`.

use glam::Vec2;

use super::instance::{DrawRect, colors};
use crate::sim::{Camera, Rect, SimulationState};

/// Project a world rectangle through the camera
pub fn world_rect(camera: &Camera, rect: &Rect, color: [f32; 4]) -> DrawRect {
    let origin = camera.to_screen(rect.origin());
    let size = rect.size() * camera.zoom();
    DrawRect::new(origin.x, origin.y, size.x, size.y, color)
}

/// Draw list for one frame: obstacles first, player on top
///
/// Rectangles entirely off screen are culled.
pub fn frame(state: &SimulationState) -> Vec<DrawRect> {
    let camera = &state.camera;
    let viewport = camera.viewport();

    let mut draws = Vec::with_capacity(state.obstacles.len() + 1);
    draws.extend(
        state
            .obstacles
            .iter()
            .map(|o| world_rect(camera, o, colors::OBSTACLE))
            .filter(|d| d.is_visible(viewport)),
    );

    let player = world_rect(camera, &state.player.rect(), colors::PLAYER);
    if player.is_visible(viewport) {
        draws.push(player);
    }
    draws
}

/// One-pixel rectangles for already-projected points
pub fn points(points: &[Vec2], color: [f32; 4]) -> Vec<DrawRect> {
    points
        .iter()
        .map(|p| DrawRect::new(p.x, p.y, 1.0, 1.0, color))
        .collect()
}

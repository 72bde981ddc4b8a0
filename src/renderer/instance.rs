//! Instance types for filled-rectangle rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// One filled rectangle in screen-space pixels
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct DrawRect {
    /// x, y, width, height
    pub rect: [f32; 4],
    pub color: [f32; 4],
}

impl DrawRect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Self {
        Self {
            rect: [x, y, w, h],
            color,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.rect[0], self.rect[1])
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.rect[2], self.rect[3])
    }

    /// Whether any part of the rectangle lands inside a viewport of `size`
    pub fn is_visible(&self, viewport: Vec2) -> bool {
        let min = self.origin();
        let max = min + self.size();
        max.x > 0.0 && max.y > 0.0 && min.x < viewport.x && min.y < viewport.y
    }
}

/// Opaque color from 8-bit channels
const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements
pub mod colors {
    use super::rgb;

    pub const BACKGROUND: [f32; 4] = rgb(0x12, 0x0c, 0x36);
    pub const OBSTACLE: [f32; 4] = rgb(0xf7, 0xc1, 0x2d);
    pub const PLAYER: [f32; 4] = rgb(0x3c, 0xd6, 0x65);
    pub const FERN: [f32; 4] = rgb(0x00, 0xff, 0x00);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_gpu_ready() {
        assert_eq!(std::mem::size_of::<DrawRect>(), 32);
        let draws = [DrawRect::new(1.0, 2.0, 3.0, 4.0, colors::PLAYER)];
        let bytes: &[u8] = bytemuck::cast_slice(&draws);
        assert_eq!(bytes.len(), 32);
    }

    #[test]
    fn test_visibility() {
        let viewport = Vec2::new(800.0, 600.0);
        assert!(DrawRect::new(10.0, 10.0, 5.0, 5.0, colors::PLAYER).is_visible(viewport));
        assert!(DrawRect::new(-4.0, 10.0, 5.0, 5.0, colors::PLAYER).is_visible(viewport));
        assert!(!DrawRect::new(-5.0, 10.0, 5.0, 5.0, colors::PLAYER).is_visible(viewport));
        assert!(!DrawRect::new(800.0, 10.0, 5.0, 5.0, colors::PLAYER).is_visible(viewport));
    }
}

//! Axis-aligned rectangle geometry
//!
//! World coordinates with a top-left origin; y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner plus extent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `size` at `pos`
    #[inline]
    pub fn square(pos: Vec2, size: f32) -> Self {
        Self::new(pos.x, pos.y, size, size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    /// Open-interval overlap on both axes. Touching edges do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }

    /// Open-interval overlap on the x axis only
    ///
    /// Compares `x` against `other.x - w` rather than `x + w` against
    /// `other.x`, so a rect placed at exactly `other.left() - w` (or
    /// `other.right()`) tests clear under f32 rounding.
    #[inline]
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.x > other.left() - self.w && self.x < other.right()
    }

    /// Open-interval overlap on the y axis only
    #[inline]
    pub fn overlaps_y(&self, other: &Rect) -> bool {
        self.y > other.top() - self.h && self.y < other.bottom()
    }

    /// Copy shifted by `offset`
    #[inline]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }
}

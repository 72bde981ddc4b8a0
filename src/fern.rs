//! Barnsley fern point generator
//!
//! Iterates four affine maps chosen by a seeded roll in `0..100`. The same
//! seed always yields the same fern, so redraws on zoom are stable.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::platform::Canvas;
use crate::renderer::{self, colors};

/// Points generated per draw
pub const FERN_ITERATIONS: usize = 1000;
/// Pixels per fern unit
pub const FERN_DEFAULT_ZOOM: f32 = 60.0;
/// Screen position of the fern's base (bottom centre of a 610x610 view)
pub const FERN_ORIGIN: Vec2 = Vec2::new(305.0, 610.0);

/// Apply the affine map selected by `roll`
///
/// Each map computes the new x first and feeds it into the new y.
pub fn step(p: Vec2, roll: u32) -> Vec2 {
    if roll == 1 {
        // Stem
        Vec2::new(0.0, p.y * 0.16)
    } else if roll <= 86 {
        // Successively smaller leaflets
        let x = 0.85 * p.x + 0.04 * p.y;
        Vec2::new(x, -0.04 * x + 0.85 * p.y + 1.6)
    } else if roll <= 93 {
        // Largest left leaflet
        let x = 0.2 * p.x - 0.26 * p.y;
        Vec2::new(x, 0.23 * x + 0.22 * p.y + 1.6)
    } else {
        // Largest right leaflet
        let x = -0.15 * p.x + 0.28 * p.y;
        Vec2::new(x, 0.26 * x + 0.24 * p.y + 0.44)
    }
}

/// A zoomable fern
#[derive(Debug, Clone)]
pub struct Fern {
    seed: u64,
    zoom: f32,
}

impl Fern {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            zoom: FERN_DEFAULT_ZOOM,
        }
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Wheel zoom: one pixel-per-unit per notch, never below 1
    pub fn scroll(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta).max(1.0);
    }

    /// Fern-space points, starting at the origin
    pub fn points(&self, iterations: usize) -> Vec<Vec2> {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        let mut point = Vec2::ZERO;
        let mut points = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            points.push(point);
            point = step(point, rng.random_range(0..100));
        }
        points
    }

    /// Fern-space point to screen space (y flipped, base at the bottom)
    #[inline]
    pub fn to_screen(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x * self.zoom + FERN_ORIGIN.x, -p.y * self.zoom + FERN_ORIGIN.y)
    }

    /// Draw the fern as single-pixel rectangles
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, iterations: usize) {
        let screen: Vec<Vec2> = self
            .points(iterations)
            .into_iter()
            .map(|p| self.to_screen(p))
            .collect();
        renderer::submit(canvas, &renderer::shapes::points(&screen, colors::FERN));
        log::debug!("Drew {} fern points at zoom {}", screen.len(), self.zoom);
    }
}

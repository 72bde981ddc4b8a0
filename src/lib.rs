//! Platformer - a 2D side-on prototype with a zooming camera
//!
//! Core modules:
//! - `sim`: Single-threaded simulation (integrator, collision resolver, camera)
//! - `renderer`: Screen-space draw list construction
//! - `platform`: Event source, canvas, clock and frame pacing abstractions
//! - `settings`: Data-driven tuning and level layout
//! - `fern`: Barnsley fern point generator

pub mod app;
pub mod fern;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Target frame rate; one simulation tick per frame
    pub const FPS: u32 = 60;

    /// Viewport dimensions in pixels
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    /// Side length of the (square) player
    pub const PLAYER_SIZE: f32 = 20.0;
    /// Downward acceleration per tick
    pub const ACCELERATION: f32 = 1.0;
    /// Horizontal speed while a direction key is held
    pub const MOVE_SPEED: f32 = 5.0;
    /// Upward velocity given by a jump
    pub const JUMP_VEL: f32 = 15.0;
    /// Per-tick horizontal velocity decay factor
    pub const FRICTION: f32 = 0.8;

    /// Upper bound on snap corrections per axis per tick
    pub const MAX_RESOLVE_ITERATIONS: u32 = 32;

    /// Fraction of remaining camera distance closed per tick while following
    pub const CAMERA_FOLLOW_SPEED: f32 = 0.1;
    /// Fraction closed per tick right after a perturbation
    pub const CAMERA_SETTLE_SPEED: f32 = 0.5;
    /// Zoom multiplier per scroll notch
    pub const ZOOM_STEP: f32 = 1.1;
    pub const MIN_ZOOM: f32 = 0.25;
    pub const MAX_ZOOM: f32 = 4.0;
}

/// Viewport size as a vector
#[inline]
pub fn viewport(width: f32, height: f32) -> Vec2 {
    Vec2::new(width, height)
}

/// Map a world point to screen space: `zoom * (world - origin)`
#[inline]
pub fn world_to_screen(world: Vec2, origin: Vec2, zoom: f32) -> Vec2 {
    (world - origin) * zoom
}

/// Inverse of [`world_to_screen`]
#[inline]
pub fn screen_to_world(screen: Vec2, origin: Vec2, zoom: f32) -> Vec2 {
    screen / zoom + origin
}

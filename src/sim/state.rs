//! Simulation state and core types
//!
//! Everything the loop mutates lives in [`SimulationState`], owned by the
//! main loop and handed to each tick by `&mut`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::rect::Rect;
use crate::consts::*;
use crate::settings::Settings;

/// Physics tuning (all quantities per tick)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Side length of the square player
    pub player_size: f32,
    /// Downward acceleration added to yvel each tick
    pub gravity: f32,
    /// Horizontal speed while a direction is held
    pub move_speed: f32,
    /// Upward velocity applied by a grounded jump
    pub jump_vel: f32,
    /// Horizontal velocity multiplier applied after each move
    pub friction: f32,
    /// Snap corrections allowed per axis before the move is rejected
    pub max_resolve_iterations: u32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            player_size: PLAYER_SIZE,
            gravity: ACCELERATION,
            move_speed: MOVE_SPEED,
            jump_vel: JUMP_VEL,
            friction: FRICTION,
            max_resolve_iterations: MAX_RESOLVE_ITERATIONS,
        }
    }
}

/// Static level layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Level {
    /// Player spawn (top-left corner, world coordinates)
    pub spawn: Vec2,
    /// Obstacles in resolution order
    pub obstacles: Vec<Rect>,
}

impl Default for Level {
    fn default() -> Self {
        Self {
            spawn: Vec2::new(100.0, 440.0),
            obstacles: vec![
                Rect::new(0.0, 575.0, 500.0, 25.0),
                Rect::new(200.0, 460.0, 100.0, 25.0),
                Rect::new(425.0, 500.0, 25.0, 75.0),
                Rect::new(300.0, 360.0, 100.0, 25.0),
                Rect::new(400.0, 260.0, 100.0, 25.0),
                Rect::new(300.0, 160.0, 100.0, 25.0),
            ],
        }
    }
}

/// The player: a square with constant extent
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner in world coordinates
    pub pos: Vec2,
    /// (xvel, yvel) per tick
    pub vel: Vec2,
    size: f32,
}

impl Player {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
        }
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Current bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub player: Player,
    /// Read-only after construction
    pub obstacles: Vec<Rect>,
    pub camera: Camera,
    pub physics: PhysicsTuning,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl SimulationState {
    /// Build the initial state from settings. The camera starts settling
    /// onto the player.
    pub fn new(settings: &Settings) -> Self {
        let camera = Camera::new(settings.viewport(), settings.camera);
        Self::with_level(&settings.level, settings.physics, camera)
    }

    pub fn with_level(level: &Level, physics: PhysicsTuning, mut camera: Camera) -> Self {
        log::info!(
            "Level loaded: {} obstacles, spawn at ({}, {})",
            level.obstacles.len(),
            level.spawn.x,
            level.spawn.y
        );
        camera.perturb();
        Self {
            player: Player::new(level.spawn, physics.player_size),
            obstacles: level.obstacles.clone(),
            camera,
            physics,
            time_ticks: 0,
        }
    }

    /// World point the camera tracks
    #[inline]
    pub fn focus(&self) -> Vec2 {
        self.player.center()
    }
}

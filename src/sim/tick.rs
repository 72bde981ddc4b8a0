//! Simulation tick
//!
//! One tick per rendered frame, in fixed order:
//! camera input, integrator, horizontal then vertical resolution, camera.

use glam::Vec2;

use super::camera::Camera;
use super::collision::{Resolution, is_grounded, resolve_horizontal, resolve_vertical};
use super::state::SimulationState;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
    /// Jump held
    pub jump: bool,
    /// Pointer button held (camera drag)
    pub dragging: bool,
    /// Pointer motion since last tick, in screen pixels
    pub pointer_delta: Vec2,
    /// Scroll notches since last tick (positive zooms in)
    pub scroll: f32,
}

impl TickInput {
    /// Copy with the gameplay controls released
    fn without_controls(&self) -> Self {
        Self {
            left: false,
            right: false,
            jump: false,
            ..*self
        }
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Grounded before the jump check
    pub grounded: bool,
    pub jumped: bool,
    pub horizontal: Resolution,
    pub vertical: Resolution,
}

/// Advance the simulation by one tick
pub fn tick(state: &mut SimulationState, input: &TickInput) -> TickReport {
    state.time_ticks += 1;

    apply_camera_input(&mut state.camera, input);

    // The fast camera regime swallows gameplay input
    let input = if state.camera.is_settling() {
        input.without_controls()
    } else {
        *input
    };

    let physics = state.physics;
    let player = &mut state.player;

    let grounded = is_grounded(player, &state.obstacles);
    let jumped = input.jump && grounded;
    if jumped {
        player.vel.y = -physics.jump_vel;
        log::debug!("Jump at tick {} from y={}", state.time_ticks, player.pos.y);
    }

    match (input.left, input.right) {
        (false, true) => player.vel.x = physics.move_speed,
        (true, false) => player.vel.x = -physics.move_speed,
        (true, true) => player.vel.x = 0.0,
        (false, false) => {}
    }

    let dx = player.vel.x;
    let horizontal = resolve_horizontal(
        player,
        &state.obstacles,
        dx,
        physics.max_resolve_iterations,
    );
    player.vel.x *= physics.friction;

    let vertical = resolve_vertical(
        player,
        &state.obstacles,
        physics.gravity,
        physics.max_resolve_iterations,
    );

    let focus = state.focus();
    state.camera.update(focus);

    TickReport {
        grounded,
        jumped,
        horizontal,
        vertical,
    }
}

fn apply_camera_input(camera: &mut Camera, input: &TickInput) {
    match (input.dragging, camera.is_dragging()) {
        (true, false) => camera.begin_drag(),
        (false, true) => camera.end_drag(),
        _ => {}
    }
    if input.dragging {
        camera.drag(input.pointer_delta);
    }
    if input.scroll != 0.0 {
        camera.scroll(input.scroll);
    }
}

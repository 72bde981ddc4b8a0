//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per rendered frame
//! - Stable obstacle order (first match wins)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use camera::{Camera, CameraMode, CameraTuning, settle_ticks};
pub use collision::{Resolution, detect, is_grounded, resolve_horizontal, resolve_vertical};
pub use rect::Rect;
pub use state::{Level, PhysicsTuning, Player, SimulationState};
pub use tick::{TickInput, TickReport, tick};

//! Collision detection and per-axis resolution
//!
//! The player is resolved one axis at a time: the move is applied, then the
//! player is snapped to the near edge of whatever it hit until it overlaps
//! nothing. Horizontal always runs before vertical, which decides who wins a
//! corner hit.

use glam::Vec2;

use super::rect::Rect;
use super::state::Player;

/// Outcome of resolving one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The player is clear after `corrections` snaps
    Clear { corrections: u32 },
    /// The iteration cap was hit; the move on this axis was undone
    Rejected,
}

impl Resolution {
    /// Whether the player hit anything on this axis
    pub fn collided(&self) -> bool {
        !matches!(self, Resolution::Clear { corrections: 0 })
    }
}

/// First obstacle (in level order) that strictly overlaps `rect`
///
/// Edge contact is not a collision.
pub fn detect<'a>(rect: &Rect, obstacles: &'a [Rect]) -> Option<&'a Rect> {
    obstacles.iter().find(|o| rect.overlaps(o))
}

/// True when the player is resting on something: the rectangle one unit
/// below the player overlaps an obstacle. Does not move the player.
pub fn is_grounded(player: &Player, obstacles: &[Rect]) -> bool {
    detect(&player.rect().translated(Vec2::Y), obstacles).is_some()
}

/// Move the player horizontally by `dx` and push it back out of obstacles
///
/// Each hit zeroes `xvel` and snaps to the near edge: `left - size` when
/// moving right, `right` when moving left.
pub fn resolve_horizontal(
    player: &mut Player,
    obstacles: &[Rect],
    dx: f32,
    max_iterations: u32,
) -> Resolution {
    let start_x = player.pos.x;
    player.pos.x += dx;

    let mut corrections = 0;
    while let Some(hit) = detect(&player.rect(), obstacles) {
        if corrections >= max_iterations {
            log::warn!(
                "Horizontal resolution exceeded {} corrections; rejecting move of {}",
                max_iterations,
                dx
            );
            player.pos.x = start_x;
            player.vel.x = 0.0;
            return Resolution::Rejected;
        }

        player.vel.x = 0.0;
        player.pos.x = if dx > 0.0 {
            hit.left() - player.size()
        } else {
            hit.right()
        };
        corrections += 1;
    }

    Resolution::Clear { corrections }
}

/// Move the player vertically by its `yvel`, apply gravity, then push it
/// back out of obstacles
///
/// The snap direction follows the sign of `yvel` after gravity: positive
/// means falling (land on top), otherwise rising (hit the ceiling). Each hit
/// zeroes `yvel`.
pub fn resolve_vertical(
    player: &mut Player,
    obstacles: &[Rect],
    gravity: f32,
    max_iterations: u32,
) -> Resolution {
    let start_y = player.pos.y;
    player.pos.y += player.vel.y;
    player.vel.y += gravity;

    let mut corrections = 0;
    while let Some(hit) = detect(&player.rect(), obstacles) {
        if corrections >= max_iterations {
            log::warn!(
                "Vertical resolution exceeded {} corrections; rejecting move",
                max_iterations
            );
            player.pos.y = start_y;
            player.vel.y = 0.0;
            return Resolution::Rejected;
        }

        player.pos.y = if player.vel.y > 0.0 {
            hit.top() - player.size()
        } else {
            hit.bottom()
        };
        player.vel.y = 0.0;
        corrections += 1;
    }

    Resolution::Clear { corrections }
}

//! Smoothing camera with zoom and pointer panning
//!
//! Position and zoom both chase their targets with a single-pole filter:
//! each tick closes a fixed fraction of the remaining distance. After a
//! perturbation the camera runs a short fast regime before dropping back to
//! the steady follow speed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Deviation fraction at which a settle is considered complete
const SETTLE_RESIDUAL: f32 = 0.01;

/// Camera tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Fraction of remaining distance closed per tick while following, in (0, 1]
    pub follow_speed: f32,
    /// Fraction closed per tick at the start of a settle, in (0, 1]
    pub settle_speed: f32,
    /// Zoom multiplier per scroll notch
    pub zoom_step: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            follow_speed: CAMERA_FOLLOW_SPEED,
            settle_speed: CAMERA_SETTLE_SPEED,
            zoom_step: ZOOM_STEP,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

/// Interpolation regime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// Fast catch-up after a perturbation; gameplay input is ignored
    Settling {
        remaining_ticks: u32,
        elapsed_ticks: u32,
    },
    /// Steady tracking at the follow speed
    Following,
}

/// Ticks of geometric decay at `speed` needed to shrink a deviation to 1%
pub fn settle_ticks(speed: f32) -> u32 {
    if speed >= 1.0 {
        return 1;
    }
    let ticks = (SETTLE_RESIDUAL.ln() / (1.0 - speed).ln()).ceil();
    if ticks.is_finite() && ticks >= 1.0 {
        ticks as u32
    } else {
        1
    }
}

/// The camera: top-left corner in world space plus a zoom factor
#[derive(Debug, Clone)]
pub struct Camera {
    /// World coordinates of the viewport's top-left corner
    pub pos: Vec2,
    zoom: f32,
    target_zoom: f32,
    mode: CameraMode,
    dragging: bool,
    viewport: Vec2,
    tuning: CameraTuning,
}

impl Camera {
    pub fn new(viewport: Vec2, tuning: CameraTuning) -> Self {
        Self {
            pos: Vec2::ZERO,
            zoom: 1.0,
            target_zoom: 1.0,
            mode: CameraMode::Following,
            dragging: false,
            viewport,
            tuning,
        }
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[inline]
    pub fn target_zoom(&self) -> f32 {
        self.target_zoom
    }

    #[inline]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    #[inline]
    pub fn is_settling(&self) -> bool {
        matches!(self.mode, CameraMode::Settling { .. })
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Camera origin that puts `point` at the centre of the viewport
    #[inline]
    pub fn focus_target(&self, point: Vec2) -> Vec2 {
        point - self.viewport / (2.0 * self.zoom)
    }

    /// World point currently at the centre of the viewport
    #[inline]
    pub fn center(&self) -> Vec2 {
        crate::screen_to_world(self.viewport / 2.0, self.pos, self.zoom)
    }

    /// Project a world point to screen space
    #[inline]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        crate::world_to_screen(world, self.pos, self.zoom)
    }

    /// Change zoom immediately, keeping the viewport centre fixed in world
    /// space. The shift is derived from the old/new ratio.
    pub fn set_zoom(&mut self, zoom: f32) {
        let zoom = zoom.max(f32::MIN_POSITIVE);
        let old = self.zoom;
        let scale = (1.0 - old / zoom) / (2.0 * old);
        self.pos += self.viewport * scale;
        self.zoom = zoom;
    }

    /// Enter the fast regime, restarting the settle window
    pub fn perturb(&mut self) {
        self.mode = CameraMode::Settling {
            remaining_ticks: settle_ticks(self.tuning.settle_speed),
            elapsed_ticks: 0,
        };
    }

    /// Scroll-wheel zoom by `delta` notches
    pub fn scroll(&mut self, delta: f32) {
        let target = self.target_zoom * self.tuning.zoom_step.powf(delta);
        self.target_zoom = target.clamp(self.tuning.min_zoom, self.tuning.max_zoom);
        self.perturb();
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Pan with the pointer: the world follows the cursor
    pub fn drag(&mut self, delta: Vec2) {
        if self.dragging {
            self.pos -= delta / self.zoom;
        }
    }

    /// Release the pointer; the camera eases back onto its focus
    pub fn end_drag(&mut self) {
        if self.dragging {
            self.dragging = false;
            self.perturb();
        }
    }

    /// Interpolation speed for the current tick
    ///
    /// While settling the speed decays geometrically from the settle speed
    /// to the follow speed across the settle window.
    pub fn speed(&self) -> f32 {
        let follow = self.tuning.follow_speed;
        match self.mode {
            CameraMode::Following => follow,
            CameraMode::Settling {
                remaining_ticks,
                elapsed_ticks,
            } => {
                let settle = self.tuning.settle_speed;
                let total = (remaining_ticks + elapsed_ticks).max(1) as f32;
                let t = elapsed_ticks as f32 / total;
                settle * (follow / settle).powf(t)
            }
        }
    }

    /// Advance one tick toward `focus`
    pub fn update(&mut self, focus: Vec2) {
        let speed = self.speed();

        if self.zoom != self.target_zoom {
            let zoom = self.zoom + (self.target_zoom - self.zoom) * speed;
            self.set_zoom(zoom);
        }

        if !self.dragging {
            let target = self.focus_target(focus);
            self.pos += (target - self.pos) * speed;
        }

        self.mode = match self.mode {
            CameraMode::Settling {
                remaining_ticks,
                elapsed_ticks,
            } if remaining_ticks > 1 => CameraMode::Settling {
                remaining_ticks: remaining_ticks - 1,
                elapsed_ticks: elapsed_ticks + 1,
            },
            _ => CameraMode::Following,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(tuning: CameraTuning) -> Camera {
        Camera::new(Vec2::new(WIDTH, HEIGHT), tuning)
    }

    fn instant() -> CameraTuning {
        CameraTuning {
            follow_speed: 1.0,
            settle_speed: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_focus() {
        let mut cam = camera(instant());
        cam.update(Vec2::new(250.0, 350.0));

        // No zoom change, so the recenter term is zero
        let scale = 0.0;
        assert_eq!(cam.pos.x, (250.0 + scale * WIDTH) - WIDTH / 2.0);
        assert_eq!(cam.pos.y, (350.0 + scale * HEIGHT) - HEIGHT / 2.0);
        assert_eq!(cam.center(), Vec2::new(250.0, 350.0));
    }

    #[test]
    fn test_zoom_recenter_preserves_center_projection() {
        let mut cam = camera(CameraTuning::default());
        cam.pos = Vec2::new(-150.0, 50.0);
        let center = cam.center();
        let before = cam.to_screen(center);

        for zoom in [2.0, 0.5, 3.7, 1.0] {
            cam.set_zoom(zoom);
            let after = cam.to_screen(center);
            assert!((after - before).length() < 1e-3, "zoom {zoom}: {after:?} vs {before:?}");
            assert!((cam.center() - center).length() < 1e-3);
        }
    }

    #[test]
    fn test_set_zoom_uses_ratio() {
        let mut cam = camera(CameraTuning::default());
        cam.set_zoom(2.0);
        // scale = (1 - 1/2) / 2 = 0.25
        assert_eq!(cam.pos, Vec2::new(0.25 * WIDTH, 0.25 * HEIGHT));
        assert_eq!(cam.zoom(), 2.0);
    }

    #[test]
    fn test_settle_ticks() {
        assert_eq!(settle_ticks(1.0), 1);
        assert_eq!(settle_ticks(0.5), 7);
        assert_eq!(settle_ticks(0.6), 6);
        // 0.99^n <= 0.01 needs n >= 459
        assert_eq!(settle_ticks(0.01), 459);
    }

    #[test]
    fn test_settling_returns_to_following() {
        let mut cam = camera(CameraTuning::default());
        cam.perturb();
        let n = settle_ticks(CAMERA_SETTLE_SPEED);
        assert_eq!(
            cam.mode(),
            CameraMode::Settling {
                remaining_ticks: n,
                elapsed_ticks: 0
            }
        );
        assert_eq!(cam.speed(), CAMERA_SETTLE_SPEED);

        let mut last_speed = cam.speed();
        for _ in 0..n - 1 {
            cam.update(Vec2::ZERO);
            assert!(cam.is_settling());
            assert!(cam.speed() < last_speed);
            last_speed = cam.speed();
        }
        cam.update(Vec2::ZERO);
        assert_eq!(cam.mode(), CameraMode::Following);
        assert_eq!(cam.speed(), CAMERA_FOLLOW_SPEED);
    }

    #[test]
    fn test_follow_closes_fraction_of_distance() {
        let mut cam = camera(CameraTuning::default());
        let focus = Vec2::new(400.0, 300.0);
        // Focus already centred from the origin
        cam.update(focus);
        assert_eq!(cam.pos, Vec2::ZERO);

        let focus = Vec2::new(500.0, 300.0);
        cam.update(focus);
        assert!((cam.pos.x - 100.0 * CAMERA_FOLLOW_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_scroll_clamps_and_perturbs() {
        let mut cam = camera(CameraTuning::default());
        cam.scroll(1.0);
        assert!((cam.target_zoom() - ZOOM_STEP).abs() < 1e-6);
        assert!(cam.is_settling());

        cam.scroll(1000.0);
        assert_eq!(cam.target_zoom(), MAX_ZOOM);
        cam.scroll(-1000.0);
        assert_eq!(cam.target_zoom(), MIN_ZOOM);
        assert!(cam.zoom() > 0.0);
    }

    #[test]
    fn test_zoom_converges_and_stays_positive() {
        let mut cam = camera(CameraTuning::default());
        cam.scroll(-1000.0);
        for _ in 0..500 {
            cam.update(Vec2::new(100.0, 100.0));
            assert!(cam.zoom() > 0.0);
        }
        assert!((cam.zoom() - MIN_ZOOM).abs() < 1e-3);
        assert!((cam.center() - Vec2::new(100.0, 100.0)).length() < 1e-2);
    }

    #[test]
    fn test_drag_suspends_tracking() {
        let mut cam = camera(instant());
        cam.begin_drag();
        cam.drag(Vec2::new(10.0, -20.0));
        assert_eq!(cam.pos, Vec2::new(-10.0, 20.0));

        cam.update(Vec2::new(1000.0, 1000.0));
        assert_eq!(cam.pos, Vec2::new(-10.0, 20.0));

        cam.end_drag();
        assert!(!cam.is_dragging());
        assert!(cam.is_settling());
        cam.update(Vec2::new(1000.0, 1000.0));
        assert_eq!(cam.center(), Vec2::new(1000.0, 1000.0));
    }

    #[test]
    fn test_drag_ignored_without_button() {
        let mut cam = camera(CameraTuning::default());
        cam.drag(Vec2::new(10.0, 10.0));
        assert_eq!(cam.pos, Vec2::ZERO);
        cam.end_drag();
        assert!(!cam.is_settling());
    }
}

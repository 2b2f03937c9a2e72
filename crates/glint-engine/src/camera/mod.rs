//! First-person camera.
//!
//! State is continuous (position, yaw/pitch, fov); there are no discrete
//! modes. Each frame the runtime-polled input is folded in:
//! cursor delta → orientation, held keys → translation, wheel → fov zoom.
//! View and projection matrices are pure functions of the current state.

use glam::{Mat4, Vec3};

use crate::input::{InputFrame, InputState, Key};

/// Pitch is clamped short of ±90° to keep the look-at basis well defined.
const PITCH_LIMIT: f32 = 89.0 * (std::f32::consts::PI / 180.0);

/// Field-of-view bounds, radians. Scroll zoom stays inside these.
const FOV_MIN: f32 = 1.0 * (std::f32::consts::PI / 180.0);
const FOV_MAX: f32 = 45.0 * (std::f32::consts::PI / 180.0);

/// Zoom step per scroll line, radians.
const ZOOM_STEP: f32 = 1.0 * (std::f32::consts::PI / 180.0);

/// First-person camera state.
///
/// Yaw 0 / pitch 0 looks down -Z with +Y up; positive yaw turns right.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,

    /// Movement speed in world units per second.
    pub speed: f32,
    /// Look sensitivity in radians per logical pixel.
    pub sensitivity: f32,

    /// Baseline for cursor-delta computation. `None` until the first cursor
    /// sample is observed, so the first frame applies no rotation.
    last_cursor: Option<(f32, f32)>,
}

impl Camera {
    pub fn new(position: Vec3, aspect: f32) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            fov_y: FOV_MAX,
            aspect,
            near: 0.1,
            far: 100.0,
            speed: 2.5,
            sensitivity: 0.002,
            last_cursor: None,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Updates the projection aspect ratio. Called every frame so window
    /// resizes are picked up without a separate resize path.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Folds one frame of input into the camera state.
    ///
    /// Order matters: orientation first, so translation this frame already
    /// uses the updated basis vectors.
    pub fn update(&mut self, input: &InputState, frame: &InputFrame, dt: f32) {
        match input.pointer_pos {
            Some((x, y)) => {
                if let Some((px, py)) = self.last_cursor {
                    self.look(x - px, y - py);
                }
                self.last_cursor = Some((x, y));
            }
            // Cursor left the window: drop the baseline so re-entry does not
            // apply the accumulated off-window travel as one large delta.
            None => self.last_cursor = None,
        }

        self.zoom(frame.wheel.1);

        let mut wish = Vec3::ZERO;
        let (forward, right, up) = self.basis();
        if input.key_down(Key::W) {
            wish += forward;
        }
        if input.key_down(Key::S) {
            wish -= forward;
        }
        if input.key_down(Key::D) {
            wish += right;
        }
        if input.key_down(Key::A) {
            wish -= right;
        }
        if input.key_down(Key::Space) {
            wish += up;
        }
        if input.key_down(Key::Shift) {
            wish -= up;
        }

        if wish != Vec3::ZERO {
            self.position += wish.normalize() * self.speed * dt;
        }
    }

    /// Applies a cursor delta (logical pixels) to yaw/pitch.
    ///
    /// Positive `dx` turns right, positive `dy` (cursor moving down) pitches
    /// down. Pitch is clamped to ±89°.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch - dy * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Applies a scroll delta (line units) to the field of view.
    ///
    /// Scrolling up narrows the fov (zoom in); the result stays in [1°, 45°].
    pub fn zoom(&mut self, lines: f32) {
        self.fov_y = (self.fov_y - lines * ZOOM_STEP).clamp(FOV_MIN, FOV_MAX);
    }

    /// Orthonormal basis derived from yaw/pitch.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        let forward = Vec3::new(sy * cp, sp, -cy * cp);
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        (forward, right, up)
    }

    /// Look-at view matrix from the current position and orientation.
    pub fn view_matrix(&self) -> Mat4 {
        let (forward, _, up) = self.basis();
        Mat4::look_at_rh(self.position, self.position + forward, up)
    }

    /// Perspective projection with 0..1 depth, matching wgpu clip space.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, KeyState, PointerMoveEvent};
    use glam::Vec4;

    const EPS: f32 = 1e-5;

    fn camera() -> Camera {
        Camera::new(Vec3::ZERO, 800.0 / 600.0)
    }

    fn held(keys: &[Key]) -> InputState {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        for &key in keys {
            state.apply_event(
                &mut frame,
                InputEvent::Key {
                    key,
                    state: KeyState::Pressed,
                    repeat: false,
                },
            );
        }
        state
    }

    // ── orientation ───────────────────────────────────────────────────────

    #[test]
    fn horizontal_delta_changes_yaw_only() {
        let mut cam = camera();
        cam.look(10.0, 0.0);
        assert!((cam.yaw() - 10.0 * cam.sensitivity).abs() < EPS);
        assert_eq!(cam.pitch(), 0.0);
    }

    #[test]
    fn pitch_clamped_under_extreme_single_delta() {
        let mut cam = camera();
        cam.look(0.0, -1.0e9);
        assert!((cam.pitch() - PITCH_LIMIT).abs() < EPS);
        cam.look(0.0, 1.0e9);
        assert!((cam.pitch() + PITCH_LIMIT).abs() < EPS);
    }

    #[test]
    fn pitch_clamped_under_accumulated_deltas() {
        let mut cam = camera();
        for _ in 0..10_000 {
            cam.look(0.0, -37.0);
        }
        assert!(cam.pitch() <= PITCH_LIMIT + EPS);
    }

    #[test]
    fn first_cursor_sample_is_baseline_only() {
        let mut cam = camera();
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(
            &mut frame,
            InputEvent::PointerMoved(PointerMoveEvent { x: 400.0, y: 300.0 }),
        );

        cam.update(&state, &frame, 0.016);
        assert_eq!(cam.yaw(), 0.0);
        assert_eq!(cam.pitch(), 0.0);

        // Second sample produces the delta.
        state.apply_event(
            &mut frame,
            InputEvent::PointerMoved(PointerMoveEvent { x: 410.0, y: 300.0 }),
        );
        cam.update(&state, &frame, 0.016);
        assert!((cam.yaw() - 10.0 * cam.sensitivity).abs() < EPS);
        assert_eq!(cam.pitch(), 0.0);
    }

    #[test]
    fn pointer_leave_resets_baseline() {
        let mut cam = camera();
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(
            &mut frame,
            InputEvent::PointerMoved(PointerMoveEvent { x: 100.0, y: 100.0 }),
        );
        cam.update(&state, &frame, 0.016);

        state.apply_event(&mut frame, InputEvent::PointerLeft);
        cam.update(&state, &frame, 0.016);

        // Re-entry far from the old position must not snap the view.
        state.apply_event(
            &mut frame,
            InputEvent::PointerMoved(PointerMoveEvent { x: 700.0, y: 500.0 }),
        );
        cam.update(&state, &frame, 0.016);
        assert_eq!(cam.yaw(), 0.0);
    }

    // ── zoom ──────────────────────────────────────────────────────────────

    #[test]
    fn fov_stays_in_bounds_under_any_scroll() {
        let mut cam = camera();
        cam.zoom(1.0e6);
        assert!((cam.fov_y() - FOV_MIN).abs() < EPS);
        cam.zoom(-1.0e6);
        assert!((cam.fov_y() - FOV_MAX).abs() < EPS);
        for _ in 0..1000 {
            cam.zoom(17.0);
            assert!(cam.fov_y() >= FOV_MIN - EPS && cam.fov_y() <= FOV_MAX + EPS);
        }
    }

    #[test]
    fn scroll_up_zooms_in() {
        let mut cam = camera();
        let before = cam.fov_y();
        cam.zoom(1.0);
        assert!(cam.fov_y() < before);
        assert!((before - cam.fov_y() - ZOOM_STEP).abs() < EPS);
    }

    // ── basis / matrices ──────────────────────────────────────────────────

    #[test]
    fn basis_is_orthonormal_across_orientation_grid() {
        let mut cam = camera();
        for yaw_deg in (-180..=180).step_by(30) {
            for pitch_deg in (-85..=85).step_by(17) {
                cam.yaw = (yaw_deg as f32).to_radians();
                cam.pitch = (pitch_deg as f32).to_radians();
                let (f, r, u) = cam.basis();
                assert!((f.length() - 1.0).abs() < 1e-4, "forward not unit");
                assert!((r.length() - 1.0).abs() < 1e-4, "right not unit");
                assert!((u.length() - 1.0).abs() < 1e-4, "up not unit");
                assert!(f.dot(r).abs() < 1e-4, "forward/right not perpendicular");
                assert!(f.dot(u).abs() < 1e-4, "forward/up not perpendicular");
                assert!(r.dot(u).abs() < 1e-4, "right/up not perpendicular");
            }
        }
    }

    #[test]
    fn identity_orientation_looks_down_negative_z() {
        let (f, r, u) = camera().basis();
        assert!((f - Vec3::NEG_Z).length() < EPS);
        assert!((r - Vec3::X).length() < EPS);
        assert!((u - Vec3::Y).length() < EPS);
    }

    #[test]
    fn projection_depth_range_matches_wgpu_convention() {
        let cam = camera();
        let proj = cam.projection_matrix();

        // Points on the view -Z axis at the near and far planes.
        let near_clip = proj * Vec4::new(0.0, 0.0, -cam.near, 1.0);
        let far_clip = proj * Vec4::new(0.0, 0.0, -cam.far, 1.0);

        assert!((near_clip.z / near_clip.w).abs() < 1e-4);
        assert!((far_clip.z / far_clip.w - 1.0).abs() < 1e-4);
        // Perspective divide uses w = -z_view.
        assert!((near_clip.w - cam.near).abs() < 1e-4);
        assert!((far_clip.w - cam.far).abs() < 1e-4);
    }

    // ── movement ──────────────────────────────────────────────────────────

    #[test]
    fn forward_key_moves_speed_times_dt() {
        let mut cam = camera();
        let state = held(&[Key::W]);
        let frame = InputFrame::default();

        cam.update(&state, &frame, 0.5);
        let expected = Vec3::NEG_Z * cam.speed * 0.5;
        assert!((cam.position - expected).length() < EPS);
    }

    #[test]
    fn opposed_keys_cancel() {
        let mut cam = camera();
        let state = held(&[Key::W, Key::S]);
        let frame = InputFrame::default();

        cam.update(&state, &frame, 0.5);
        assert_eq!(cam.position, Vec3::ZERO);
    }

    #[test]
    fn diagonal_movement_is_normalized() {
        let mut cam = camera();
        let state = held(&[Key::W, Key::D]);
        let frame = InputFrame::default();

        cam.update(&state, &frame, 1.0);
        assert!((cam.position.length() - cam.speed).abs() < 1e-4);
    }

    #[test]
    fn vertical_movement_uses_up_axis() {
        let mut cam = camera();
        let state = held(&[Key::Space]);
        let frame = InputFrame::default();

        cam.update(&state, &frame, 1.0);
        assert!((cam.position - Vec3::Y * cam.speed).length() < EPS);
    }
}

use anyhow::{ensure, Result};
use glam::{Mat4, Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

/// First-person free camera: a world-space position, a yaw/pitch pair, and a
/// cached view-projection ("clip space") matrix.
///
/// Rotation is stored as a `Vec2` with `x` = yaw and `y` = pitch, both in
/// radians. Pitch is clamped to `[-π/2, π/2]` after every update, so the
/// camera never looks past straight up or straight down. Projection
/// parameters are fixed at construction.
pub struct Camera {
    fov: f32,
    aspect_ratio: f32,
    near_plane: f32,
    far_plane: f32,

    position: Vec3,
    rotation: Vec2,
    clip_space: Mat4,
}

impl Camera {
    /// Create a camera at the origin with zero rotation.
    ///
    /// `fov` is the vertical field of view in radians. Rejects non-finite or
    /// degenerate projection parameters rather than producing a broken
    /// matrix.
    pub fn new(fov: f32, aspect_ratio: f32, near_plane: f32, far_plane: f32) -> Result<Self> {
        ensure!(
            fov.is_finite()
                && aspect_ratio.is_finite()
                && near_plane.is_finite()
                && far_plane.is_finite(),
            "projection parameters must be finite"
        );
        ensure!(fov > 0.0, "field of view must be positive, got {fov}");
        ensure!(aspect_ratio > 0.0, "aspect ratio must be positive, got {aspect_ratio}");
        ensure!(near_plane > 0.0, "near plane must be positive, got {near_plane}");
        ensure!(
            far_plane > near_plane,
            "far plane ({far_plane}) must be beyond near plane ({near_plane})"
        );

        let mut camera = Self {
            fov,
            aspect_ratio,
            near_plane,
            far_plane,
            position: Vec3::ZERO,
            rotation: Vec2::ZERO,
            clip_space: Mat4::IDENTITY,
        };
        camera.calculate_clip_space();
        Ok(camera)
    }

    /// Unit forward vector derived from the current yaw/pitch.
    pub fn look_direction(&self) -> Vec3 {
        let yaw = self.rotation.x;
        let pitch = self.rotation.y;
        Vec3::new(
            (yaw + FRAC_PI_2).cos() * pitch.cos(),
            pitch.sin(),
            (yaw + FRAC_PI_2).sin() * pitch.cos(),
        )
    }

    /// Apply one frame's movement and look deltas, then refresh the cached
    /// clip-space matrix.
    ///
    /// Translation uses the look direction of the rotation as it was BEFORE
    /// this call, so movement follows last frame's orientation. Only the `z`
    /// component of `delta_position` drives translation; `x` and `y` are
    /// accepted for strafe/vertical motion but currently unused.
    pub fn update_transform(&mut self, delta_position: Vec3, delta_rotation: Vec2) {
        let look = self.look_direction();
        self.position += delta_position.z * look;

        self.rotation += delta_rotation;
        self.rotation.y = self.rotation.y.clamp(-FRAC_PI_2, FRAC_PI_2);

        self.calculate_clip_space();
    }

    /// The cached view-projection matrix, as of the last `update_transform`.
    pub fn clip_space_matrix(&self) -> Mat4 {
        self.clip_space
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    // view = translate(-position), then pitch about -X, then yaw about +Y.
    // Translation is composed first so the camera rotates about its own
    // position instead of the world origin.
    fn calculate_clip_space(&mut self) {
        let view = Mat4::from_translation(-self.position)
            * Mat4::from_axis_angle(Vec3::new(-1.0, 0.0, 0.0), self.rotation.y)
            * Mat4::from_axis_angle(Vec3::Y, self.rotation.x);
        let projection =
            Mat4::perspective_rh(self.fov, self.aspect_ratio, self.near_plane, self.far_plane);

        self.clip_space = projection * view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPSILON: f32 = 1e-5;

    fn test_camera() -> Camera {
        Camera::new(45.0_f32.to_radians(), 1.0, 0.1, 100.0).unwrap()
    }

    #[test]
    fn test_rejects_bad_projection_parameters() {
        assert!(Camera::new(0.0, 1.0, 0.1, 100.0).is_err(), "zero fov");
        assert!(Camera::new(-1.0, 1.0, 0.1, 100.0).is_err(), "negative fov");
        assert!(Camera::new(1.0, 0.0, 0.1, 100.0).is_err(), "zero aspect");
        assert!(Camera::new(1.0, 1.0, 0.0, 100.0).is_err(), "zero near");
        assert!(Camera::new(1.0, 1.0, 0.1, 0.05).is_err(), "far before near");
        assert!(Camera::new(f32::NAN, 1.0, 0.1, 100.0).is_err(), "nan fov");
        assert!(Camera::new(1.0, 1.0, 0.1, f32::INFINITY).is_err(), "infinite far");
    }

    #[test]
    fn test_starts_at_origin_with_zero_rotation() {
        let camera = test_camera();
        assert_eq!(camera.position(), Vec3::ZERO);
        assert_eq!(camera.rotation(), Vec2::ZERO);
    }

    #[test]
    fn test_look_direction_is_unit_length() {
        let mut camera = test_camera();
        for yaw_step in -8..=8 {
            for pitch_step in -4..=4 {
                camera.rotation = Vec2::new(
                    yaw_step as f32 * PI / 4.0,
                    pitch_step as f32 * FRAC_PI_2 / 4.0,
                );
                let len = camera.look_direction().length();
                assert!(
                    (len - 1.0).abs() < EPSILON,
                    "look direction should be unit length, got {} at rotation {:?}",
                    len,
                    camera.rotation
                );
            }
        }
    }

    #[test]
    fn test_forward_move_follows_look_direction() {
        let mut camera = test_camera();
        // at zero rotation the formula gives (cos(π/2), 0, sin(π/2)) = (0, 0, 1)
        let expected = camera.look_direction();
        camera.update_transform(Vec3::new(0.0, 0.0, 1.0), Vec2::ZERO);

        assert!((camera.position() - expected).length() < EPSILON);
        assert!((camera.position().z - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_translation_uses_pre_update_rotation() {
        let mut camera = test_camera();
        let before = camera.look_direction();

        // move and turn in the same update; displacement must follow the
        // orientation from before the turn
        camera.update_transform(Vec3::new(0.0, 0.0, 1.0), Vec2::new(FRAC_PI_2, 0.0));
        assert!((camera.position() - before).length() < EPSILON);
    }

    #[test]
    fn test_delta_position_xy_are_inert() {
        let mut camera = test_camera();
        camera.update_transform(Vec3::new(5.0, -3.0, 0.0), Vec2::ZERO);
        assert_eq!(camera.position(), Vec3::ZERO);
    }

    #[test]
    fn test_pitch_clamps_instead_of_wrapping() {
        let mut camera = test_camera();
        camera.update_transform(Vec3::ZERO, Vec2::new(0.0, 100.0));
        assert_eq!(camera.rotation().y, FRAC_PI_2);

        camera.update_transform(Vec3::ZERO, Vec2::new(0.0, -1000.0));
        assert_eq!(camera.rotation().y, -FRAC_PI_2);
    }

    #[test]
    fn test_yaw_is_unclamped() {
        let mut camera = test_camera();
        camera.update_transform(Vec3::ZERO, Vec2::new(10.0 * PI, 0.0));
        assert!((camera.rotation().x - 10.0 * PI).abs() < EPSILON);
    }

    #[test]
    fn test_null_update_is_idempotent() {
        let mut camera = test_camera();
        camera.update_transform(Vec3::new(0.0, 0.0, 2.0), Vec2::new(0.3, -0.2));
        let position = camera.position();
        let rotation = camera.rotation();
        let matrix = camera.clip_space_matrix();

        camera.update_transform(Vec3::ZERO, Vec2::ZERO);
        assert_eq!(camera.position(), position);
        assert_eq!(camera.rotation(), rotation);
        assert_eq!(camera.clip_space_matrix(), matrix);
    }

    #[test]
    fn test_matrix_reflects_movement() {
        let mut camera = test_camera();
        let initial = camera.clip_space_matrix();
        camera.update_transform(Vec3::new(0.0, 0.0, 1.0), Vec2::ZERO);
        assert_ne!(camera.clip_space_matrix(), initial);
    }

    #[test]
    fn test_matrix_is_finite() {
        let mut camera = test_camera();
        camera.update_transform(Vec3::new(0.0, 0.0, 3.0), Vec2::new(1.2, 0.7));
        let matrix = camera.clip_space_matrix();
        for column in 0..4 {
            assert!(matrix.col(column).is_finite());
        }
    }
}

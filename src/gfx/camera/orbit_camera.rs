use super::camera_utils::{convert_matrix4_to_array, Camera, CameraUniform};
use cgmath::*;

use crate::config::{CameraConfig, ControlsConfig};

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Pending rotation below this magnitude is dropped instead of decayed further
const DAMPING_EPSILON: f32 = 1e-6;

/// Perspective camera orbiting a target point, Y up
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub bounds: OrbitCameraBounds,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub uniform: CameraUniform,
    /// Fraction of pending rotation applied per frame; `None` applies it at once
    pub damping_factor: Option<f32>,
    pending_yaw: f32,
    pending_pitch: f32,
}

impl Camera for OrbitCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * self.projection_matrix() * self.view_matrix()
    }
}

impl OrbitCamera {
    pub fn new(distance: f32, pitch: f32, yaw: f32, target: Vector3<f32>, aspect: f32) -> Self {
        let mut camera = Self {
            distance,
            pitch,
            yaw,
            eye: Vector3::zero(), // Will be auto-calculated in `update()` nevertheless.
            target,
            up: Vector3::unit_y(),
            bounds: OrbitCameraBounds::default(),
            aspect,
            fovy: Rad(std::f32::consts::PI / 4.0),
            znear: 0.1,
            zfar: 1000.0,
            uniform: CameraUniform::default(),
            damping_factor: None,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
        };
        camera.update();
        camera
    }

    /// Builds the camera described by the scene configuration, looking down -Z
    pub fn from_config(camera: &CameraConfig, controls: &ControlsConfig, aspect: f32) -> Self {
        let mut orbit = Self::new(camera.distance, 0.0, 0.0, camera.target, aspect);
        orbit.fovy = Deg(camera.fov_degrees).into();
        orbit.znear = camera.znear;
        orbit.zfar = camera.zfar;
        orbit.bounds.min_distance = Some(controls.min_distance);
        orbit.bounds.max_distance = Some(controls.max_distance);
        orbit.damping_factor = controls.damping_factor.map(|f| f.clamp(0.0, 1.0));
        orbit.set_distance(camera.distance);
        orbit
    }

    pub fn reset_to_default(&mut self) {
        self.distance = 5.0;
        self.pitch = 0.0;
        self.yaw = 0.0;
        self.target = Vector3::zero();
        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;

        self.update(); // Recalculate eye position
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(
            self.bounds.min_distance.unwrap_or(f32::EPSILON),
            self.bounds.max_distance.unwrap_or(f32::MAX),
        );
        self.update();
    }

    pub fn add_distance(&mut self, delta: f32) {
        let corrected_zoom = f32::log10(self.distance.max(1.0 + f32::EPSILON)) * delta;
        self.set_distance(self.distance + corrected_zoom);
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(self.bounds.min_pitch, self.bounds.max_pitch);
        self.update();
    }

    pub fn add_pitch(&mut self, delta: f32) {
        self.set_pitch(self.pitch + delta);
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        let mut bounded_yaw = yaw;
        if let Some(min_yaw) = self.bounds.min_yaw {
            bounded_yaw = bounded_yaw.max(min_yaw);
        }
        if let Some(max_yaw) = self.bounds.max_yaw {
            bounded_yaw = bounded_yaw.min(max_yaw);
        }
        self.yaw = bounded_yaw;
        self.update();
    }

    pub fn add_yaw(&mut self, delta: f32) {
        self.set_yaw(self.yaw + delta);
    }

    /// Queues an orbit rotation; it is applied by [`Self::update_controls`]
    pub fn queue_rotation(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.pending_yaw += yaw_delta;
        self.pending_pitch += pitch_delta;
    }

    /// Rotation still waiting to be applied, as `(yaw, pitch)`
    pub fn pending_rotation(&self) -> (f32, f32) {
        (self.pending_yaw, self.pending_pitch)
    }

    /// Integrates queued rotation for one frame.
    ///
    /// With damping, each frame applies `pending * factor` and keeps
    /// `pending * (1 - factor)` for the next frame, so the orbit glides to a
    /// stop. Returns true if the camera moved.
    pub fn update_controls(&mut self) -> bool {
        if self.pending_yaw == 0.0 && self.pending_pitch == 0.0 {
            return false;
        }

        let factor = self.damping_factor.unwrap_or(1.0);
        let yaw_step = self.pending_yaw * factor;
        let pitch_step = self.pending_pitch * factor;

        self.pending_yaw -= yaw_step;
        self.pending_pitch -= pitch_step;
        if self.pending_yaw.abs() < DAMPING_EPSILON {
            self.pending_yaw = 0.0;
        }
        if self.pending_pitch.abs() < DAMPING_EPSILON {
            self.pending_pitch = 0.0;
        }

        self.yaw += yaw_step;
        self.set_pitch(self.pitch + pitch_step);
        self.set_yaw(self.yaw);
        true
    }

    /// Pans the camera relative to the current view direction
    /// delta.0 = horizontal pan (left/right relative to camera view)
    /// delta.1 = vertical pan (up/down relative to camera view)
    pub fn pan(&mut self, delta: (f32, f32)) {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward).normalize(); // True "up" relative to camera

        // Scale pan movement by distance for consistent feel at all zoom levels
        let pan_scale = self.distance * 0.1;

        let total_movement = right * delta.0 * pan_scale + up * delta.1 * pan_scale;

        // Move both eye and target to maintain the view direction
        self.eye += total_movement;
        self.target += total_movement;
    }

    /// Updates the camera after changing `distance`, `pitch` or `yaw`.
    fn update(&mut self) {
        self.eye =
            calculate_cartesian_eye_position(self.pitch, self.yaw, self.distance, self.target);
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(
            Point3::from_vec(self.eye),
            Point3::from_vec(self.target),
            self.up,
        )
    }

    /// OpenGL-convention projection (clip z in -1..1)
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }

    /// Projects a world-space point to pixel coordinates, or `None` if it lies
    /// behind the camera
    pub fn project_to_screen(
        &self,
        point: Vector3<f32>,
        screen_size: (f32, f32),
    ) -> Option<(f32, f32)> {
        let clip = self.projection_matrix() * self.view_matrix() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }

        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        Some((
            (ndc_x + 1.0) * 0.5 * screen_size.0,
            (1.0 - ndc_y) * 0.5 * screen_size.1,
        ))
    }

    pub fn update_view_proj(&mut self) {
        self.uniform.view_position = [self.eye.x, self.eye.y, self.eye.z, 1.0];
        self.uniform.view_proj = convert_matrix4_to_array(self.build_view_projection_matrix());
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OrbitCameraBounds {
    pub min_distance: Option<f32>,
    pub max_distance: Option<f32>,
    pub min_pitch: f32,
    pub max_pitch: f32,
    pub min_yaw: Option<f32>,
    pub max_yaw: Option<f32>,
}

impl Default for OrbitCameraBounds {
    fn default() -> Self {
        Self {
            min_distance: None,
            max_distance: Some(16.0),
            min_pitch: -std::f32::consts::PI / 2.0 + 0.01,
            max_pitch: std::f32::consts::PI / 2.0 - 0.01,
            min_yaw: None,
            max_yaw: None,
        }
    }
}

fn calculate_cartesian_eye_position(
    pitch: f32,
    yaw: f32,
    distance: f32,
    target: Vector3<f32>,
) -> Vector3<f32> {
    Vector3::new(
        distance * yaw.sin() * pitch.cos(),
        distance * pitch.sin(),
        distance * yaw.cos() * pitch.cos(),
    ) + target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock_camera() -> OrbitCamera {
        OrbitCamera::from_config(&CameraConfig::default(), &ControlsConfig::default(), 800.0 / 600.0)
    }

    #[test]
    fn test_stock_camera_position() {
        let camera = stock_camera();
        assert!((camera.eye - Vector3::new(0.0, 0.0, 5.0)).magnitude() < 1e-5);
        assert!((camera.fovy.0 - 75f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_origin_projects_to_screen_center() {
        let camera = stock_camera();
        let (x, y) = camera
            .project_to_screen(Vector3::zero(), (800.0, 600.0))
            .unwrap();
        assert!((x - 400.0).abs() < 1e-3);
        assert!((y - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_point_behind_camera_not_projected() {
        let camera = stock_camera();
        assert!(camera
            .project_to_screen(Vector3::new(0.0, 0.0, 10.0), (800.0, 600.0))
            .is_none());
    }

    #[test]
    fn test_distance_clamped_to_bounds() {
        let mut camera = stock_camera();
        camera.set_distance(100.0);
        assert_eq!(camera.distance, 15.0);
        camera.set_distance(0.5);
        assert_eq!(camera.distance, 2.0);
    }

    #[test]
    fn test_damped_rotation_decays() {
        let mut camera = stock_camera();
        camera.queue_rotation(1.0, 0.0);

        assert!(camera.update_controls());
        assert!((camera.yaw - 0.05).abs() < 1e-6);
        assert!((camera.pending_rotation().0 - 0.95).abs() < 1e-6);

        assert!(camera.update_controls());
        assert!((camera.yaw - (0.05 + 0.95 * 0.05)).abs() < 1e-6);

        for _ in 0..2000 {
            camera.update_controls();
        }
        assert_eq!(camera.pending_rotation(), (0.0, 0.0));
        assert!((camera.yaw - 1.0).abs() < 1e-4);
        assert!(!camera.update_controls());
    }

    #[test]
    fn test_undamped_rotation_applies_at_once() {
        let mut camera = stock_camera();
        camera.damping_factor = None;
        camera.queue_rotation(0.5, 0.25);
        camera.update_controls();
        assert!((camera.yaw - 0.5).abs() < 1e-6);
        assert!((camera.pitch - 0.25).abs() < 1e-6);
        assert_eq!(camera.pending_rotation(), (0.0, 0.0));
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut camera = stock_camera();
        camera.resize_projection(1000, 500);
        assert_eq!(camera.aspect, 2.0);
        camera.resize_projection(0, 500);
        assert_eq!(camera.aspect, 2.0);
    }
}

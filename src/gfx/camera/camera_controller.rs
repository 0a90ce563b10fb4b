use winit::{
    dpi::PhysicalPosition,
    event::{DeviceEvent, ElementState, KeyEvent, MouseScrollDelta},
    keyboard::{KeyCode, PhysicalKey},
};

use super::orbit_camera::OrbitCamera;

/// Translates raw mouse and keyboard input into orbit camera motion
///
/// Drag rotates (queued, so the camera's damping smooths it), shift-drag pans,
/// the wheel zooms and shift+C resets the view.
pub struct CameraController {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    is_shift_held: bool,
    is_mouse_pressed: bool,
}

impl CameraController {
    pub fn new(rotate_speed: f32, zoom_speed: f32) -> Self {
        Self {
            rotate_speed,
            zoom_speed,
            pan_speed: 0.01,
            is_shift_held: false,
            is_mouse_pressed: false,
        }
    }

    /// Applies a device event to the camera. Returns true if the view changed.
    pub fn process_events(&mut self, event: &DeviceEvent, camera: &mut OrbitCamera) -> bool {
        match event {
            DeviceEvent::Button {
                button: 0, // Left Mouse Button
                state,
            } => {
                self.is_mouse_pressed = *state == ElementState::Pressed;
                false
            }
            DeviceEvent::MouseWheel { delta } => {
                let scroll_amount = -match delta {
                    MouseScrollDelta::LineDelta(_, scroll) => *scroll,
                    MouseScrollDelta::PixelDelta(PhysicalPosition { y: scroll, .. }) => {
                        *scroll as f32
                    }
                };
                camera.add_distance(scroll_amount * self.zoom_speed);
                true
            }
            DeviceEvent::MouseMotion { delta } if self.is_mouse_pressed => {
                self.apply_drag((delta.0 as f32, delta.1 as f32), camera);
                true
            }
            _ => false,
        }
    }

    /// Routes a pointer drag to panning or orbiting depending on shift
    pub fn apply_drag(&self, delta: (f32, f32), camera: &mut OrbitCamera) {
        if self.is_shift_held {
            camera.pan((-delta.0 * self.pan_speed, delta.1 * self.pan_speed));
        } else {
            camera.queue_rotation(-delta.0 * self.rotate_speed, delta.1 * self.rotate_speed);
        }
    }

    pub fn process_keyed_events(&mut self, event: &KeyEvent, camera: &mut OrbitCamera) {
        match event {
            KeyEvent {
                physical_key: PhysicalKey::Code(KeyCode::ShiftLeft | KeyCode::ShiftRight),
                state,
                ..
            } => {
                self.is_shift_held = *state == ElementState::Pressed;
            }
            KeyEvent {
                physical_key: PhysicalKey::Code(KeyCode::KeyC),
                state: ElementState::Pressed,
                ..
            } if self.is_shift_held => {
                log::info!("Resetting camera to default position");
                camera.reset_to_default();
            }
            _ => (),
        }
    }

    /// Adjust panning sensitivity
    pub fn set_pan_speed(&mut self, speed: f32) {
        self.pan_speed = speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    #[test]
    fn test_drag_queues_rotation() {
        let controller = CameraController::new(0.005, 0.1);
        let mut camera = OrbitCamera::new(5.0, 0.0, 0.0, Vector3::new(0.0, 0.0, 0.0), 1.0);

        controller.apply_drag((10.0, -4.0), &mut camera);
        let (yaw, pitch) = camera.pending_rotation();
        assert!((yaw + 0.05).abs() < 1e-6);
        assert!((pitch + 0.02).abs() < 1e-6);
        // Nothing moves until the frame integrates the controls
        assert_eq!(camera.yaw, 0.0);
    }

    #[test]
    fn test_motion_ignored_without_button() {
        let mut controller = CameraController::new(0.005, 0.1);
        let mut camera = OrbitCamera::new(5.0, 0.0, 0.0, Vector3::new(0.0, 0.0, 0.0), 1.0);

        let moved = controller.process_events(
            &DeviceEvent::MouseMotion { delta: (5.0, 5.0) },
            &mut camera,
        );
        assert!(!moved);
        assert_eq!(camera.pending_rotation(), (0.0, 0.0));
    }
}

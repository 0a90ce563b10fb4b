//! Scene configuration
//!
//! All tunables of the portfolio scene live here. [`SceneConfig::default`]
//! reproduces the stock scene; the `with_*` methods adjust individual values.

use cgmath::Vector3;

use crate::catalog::hex_rgb;

/// Orbit control tuning
#[derive(Debug, Clone, Copy)]
pub struct ControlsConfig {
    /// Fraction of the pending rotation applied per frame; `None` disables damping
    pub damping_factor: Option<f32>,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            damping_factor: Some(0.05),
            min_distance: 2.0,
            max_distance: 15.0,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
            pan_speed: 0.01,
        }
    }
}

/// Perspective camera parameters
#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Initial distance from the orbit target along +Z
    pub distance: f32,
    pub target: Vector3<f32>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            distance: 5.0,
            target: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}

/// Ambient plus one directional light
#[derive(Debug, Clone, Copy)]
pub struct LightingConfig {
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    pub directional_color: [f32; 3],
    pub directional_intensity: f32,
    pub directional_position: [f32; 3],
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_color: [1.0, 1.0, 1.0],
            ambient_intensity: 0.5,
            directional_color: [1.0, 1.0, 1.0],
            directional_intensity: 1.0,
            directional_position: [5.0, 10.0, 7.5],
        }
    }
}

/// Top level configuration for a portfolio scene
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub window_title: String,
    pub window_size: (u32, u32),
    pub background: [f32; 3],
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
    pub lighting: LightingConfig,
    /// Radians added to every object's Y rotation each frame
    pub rotation_step: f32,
    /// Emissive color applied to the selected object
    pub highlight_color: [f32; 3],
    /// Maximum pointer travel, in pixels, between press and release for a click
    pub click_tolerance: f32,
    pub metalness: f32,
    pub roughness: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            window_title: "Portfolio".to_string(),
            window_size: (1200, 800),
            background: hex_rgb(0x1a1a1a),
            camera: CameraConfig::default(),
            controls: ControlsConfig::default(),
            lighting: LightingConfig::default(),
            rotation_step: 0.005,
            highlight_color: hex_rgb(0x555555),
            click_tolerance: 4.0,
            metalness: 0.3,
            roughness: 0.6,
        }
    }
}

impl SceneConfig {
    pub fn with_title(mut self, title: &str) -> Self {
        self.window_title = title.to_string();
        self
    }

    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width.max(1), height.max(1));
        self
    }

    pub fn with_background(mut self, hex: u32) -> Self {
        self.background = hex_rgb(hex);
        self
    }

    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_controls(mut self, controls: ControlsConfig) -> Self {
        self.controls = controls;
        self
    }

    pub fn with_lighting(mut self, lighting: LightingConfig) -> Self {
        self.lighting = lighting;
        self
    }

    pub fn with_rotation_step(mut self, radians: f32) -> Self {
        self.rotation_step = radians;
        self
    }

    pub fn with_highlight(mut self, hex: u32) -> Self {
        self.highlight_color = hex_rgb(hex);
        self
    }

    pub fn with_click_tolerance(mut self, pixels: f32) -> Self {
        self.click_tolerance = pixels.max(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_scene() {
        let config = SceneConfig::default();
        assert_eq!(config.rotation_step, 0.005);
        assert_eq!(config.controls.damping_factor, Some(0.05));
        assert_eq!(config.controls.min_distance, 2.0);
        assert_eq!(config.controls.max_distance, 15.0);
        assert_eq!(config.camera.fov_degrees, 75.0);
        assert_eq!(config.camera.distance, 5.0);
    }

    #[test]
    fn test_builder_clamps() {
        let config = SceneConfig::default()
            .with_window_size(0, 0)
            .with_click_tolerance(-3.0)
            .with_highlight(0xffffff);
        assert_eq!(config.window_size, (1, 1));
        assert_eq!(config.click_tolerance, 0.0);
        assert_eq!(config.highlight_color, [1.0, 1.0, 1.0]);
    }
}

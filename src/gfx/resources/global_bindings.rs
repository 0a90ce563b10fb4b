//! Global uniform bindings for camera and lighting
//!
//! Everything shared by all objects in a frame lives in one uniform buffer
//! bound at group 0: the camera matrices, the ambient light and the single
//! directional light.

use cgmath::{InnerSpace, Vector3};

use crate::{
    config::LightingConfig,
    gfx::camera::camera_utils::CameraUniform,
    wgpu_utils::{binding_types, BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc, UniformBuffer},
};

/// Global uniform buffer content
///
/// MUST match the `GlobalUniform` struct in `shader.wgsl` exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUniform {
    view_position: [f32; 4],  // Camera position (homogeneous coordinates)
    view_proj: [[f32; 4]; 4], // Camera view-projection matrix

    // Light colors are premultiplied by their intensity; w is unused
    ambient: [f32; 4],
    light_direction: [f32; 4], // Unit vector pointing towards the light
    light_color: [f32; 4],
}
// Total: 16 + 64 + 16 + 16 + 16 = 128 bytes

impl GlobalUniform {
    pub fn new(camera: &CameraUniform, lighting: &LightingConfig) -> Self {
        let scale = |[r, g, b]: [f32; 3], intensity: f32| [r * intensity, g * intensity, b * intensity, 1.0];

        // A directional light shines from its position towards the origin
        let direction = Vector3::from(lighting.directional_position);
        let direction = if direction.magnitude2() > 0.0 {
            direction.normalize()
        } else {
            Vector3::unit_y()
        };

        Self {
            view_position: camera.view_position,
            view_proj: camera.view_proj,
            ambient: scale(lighting.ambient_color, lighting.ambient_intensity),
            light_direction: direction.extend(0.0).into(),
            light_color: scale(lighting.directional_color, lighting.directional_intensity),
        }
    }
}

/// Type alias for the global uniform buffer
pub type GlobalUBO = UniformBuffer<GlobalUniform>;

/// The global uniform buffer together with its bind group at slot 0
pub struct GlobalBindings {
    ubo: GlobalUBO,
    bind_group_layout: BindGroupLayoutWithDesc,
    bind_group: wgpu::BindGroup,
    lighting: LightingConfig,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device, lighting: LightingConfig) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_rendering(binding_types::uniform()) // Global uniforms (camera + lights)
            .create(device, "Globals Bind Group Layout");

        let ubo = GlobalUBO::new_with_data(
            device,
            &GlobalUniform::new(&CameraUniform::default(), &lighting),
        );
        let bind_group = BindGroupBuilder::new(&bind_group_layout)
            .resource(ubo.binding_resource())
            .create(device, "Global Bind Group");

        Self {
            ubo,
            bind_group_layout,
            bind_group,
            lighting,
        }
    }

    /// Uploads the camera for this frame along with the fixed lights
    pub fn update(&mut self, queue: &wgpu::Queue, camera: &CameraUniform) {
        self.ubo
            .update_content(queue, GlobalUniform::new(camera, &self.lighting));
    }

    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_layout_size() {
        assert_eq!(std::mem::size_of::<GlobalUniform>(), 128);
    }

    #[test]
    fn test_stock_lights() {
        let uniform = GlobalUniform::new(&CameraUniform::default(), &LightingConfig::default());
        assert_eq!(uniform.ambient, [0.5, 0.5, 0.5, 1.0]);
        assert_eq!(uniform.light_color, [1.0, 1.0, 1.0, 1.0]);

        let [x, y, z, w] = uniform.light_direction;
        assert!(((x * x + y * y + z * z).sqrt() - 1.0).abs() < 1e-6);
        assert_eq!(w, 0.0);
        // (5, 10, 7.5) keeps its proportions once normalized
        assert!((y / x - 2.0).abs() < 1e-5);
        assert!((z / x - 1.5).abs() < 1e-5);
    }
}

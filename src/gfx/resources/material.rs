//! Material definitions for the lit shape pipeline
//!
//! Each scene object owns one [`Material`]. The base appearance comes from the
//! catalog entry; only the emissive term changes at runtime, when the object is
//! highlighted or un-highlighted by the selection state machine.

use cgmath::Matrix4;

/// Per-object GPU uniform: model transform followed by material parameters
///
/// MUST match the `ObjectUniform` struct in `shader.wgsl` exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub base_color: [f32; 4],
    pub emissive: [f32; 3],
    pub metallic: f32,
    pub roughness: f32,
    _padding: [f32; 3],
}

/// Standard material with a color, metalness, roughness and an emissive override
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub base_color: [f32; 3],
    pub metallic: f32,
    pub roughness: f32,
    pub emissive: [f32; 3],
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: [0.8, 0.8, 0.8],
            metallic: 0.0,
            roughness: 0.5,
            emissive: [0.0, 0.0, 0.0],
        }
    }
}

impl Material {
    /// Creates a new material
    ///
    /// # Arguments
    /// * `base_color` - RGB base color
    /// * `metallic` - Metallic factor (0.0 = dielectric, 1.0 = metallic)
    /// * `roughness` - Surface roughness (0.0 = mirror, 1.0 = rough)
    pub fn new(base_color: [f32; 3], metallic: f32, roughness: f32) -> Self {
        Self {
            base_color,
            metallic: metallic.clamp(0.0, 1.0),
            roughness: roughness.clamp(0.0, 1.0),
            emissive: [0.0, 0.0, 0.0],
        }
    }

    /// Builder pattern: Set emissive color
    pub fn with_emission(mut self, r: f32, g: f32, b: f32) -> Self {
        self.emissive = [r, g, b];
        self
    }

    pub fn set_emissive(&mut self, emissive: [f32; 3]) {
        self.emissive = emissive;
    }

    pub fn clear_emissive(&mut self) {
        self.emissive = [0.0, 0.0, 0.0];
    }

    /// True when the emissive override is active
    pub fn is_emissive(&self) -> bool {
        self.emissive.iter().any(|c| *c != 0.0)
    }

    /// Packs this material and a model matrix into the GPU layout
    pub fn to_uniform(&self, model: Matrix4<f32>) -> ObjectUniform {
        let [r, g, b] = self.base_color;
        ObjectUniform {
            model: model.into(),
            base_color: [r, g, b, 1.0],
            emissive: self.emissive,
            metallic: self.metallic,
            roughness: self.roughness,
            _padding: [0.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::SquareMatrix;

    #[test]
    fn test_uniform_layout_size() {
        // mat4 + vec4 + vec3/f32 + f32 with padding to a 16 byte multiple
        assert_eq!(std::mem::size_of::<ObjectUniform>(), 112);
    }

    #[test]
    fn test_emissive_toggle() {
        let mut material = Material::new([1.0, 0.0, 0.0], 0.3, 0.6);
        assert!(!material.is_emissive());

        material.set_emissive([0.3, 0.3, 0.3]);
        assert!(material.is_emissive());

        material.clear_emissive();
        assert!(!material.is_emissive());
    }

    #[test]
    fn test_parameters_clamped() {
        let material = Material::new([0.0; 3], 2.0, -1.0);
        assert_eq!(material.metallic, 1.0);
        assert_eq!(material.roughness, 0.0);

        let uniform = material.with_emission(0.1, 0.2, 0.3).to_uniform(Matrix4::identity());
        assert_eq!(uniform.emissive, [0.1, 0.2, 0.3]);
        assert_eq!(uniform.base_color[3], 1.0);
    }
}

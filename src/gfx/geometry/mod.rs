//! # Procedural Geometry Generation
//!
//! This module generates the primitive shapes used by the portfolio scene, so
//! the scene never needs external model files.
//!
//! ## Supported Primitives
//!
//! - **Box**: Axis-aligned box with equal sides
//! - **Sphere**: UV sphere with configurable resolution
//! - **Cone**: Y-up cone with a closed base
//!
//! ## Usage
//!
//! ```rust
//! use folio::gfx::geometry::{generate_box, generate_cone, generate_sphere};
//!
//! let cube = generate_box(1.0);
//! let sphere = generate_sphere(0.6, 32, 16);
//! let cone = generate_cone(0.6, 1.2, 32);
//! assert!(cube.triangle_count() > 0 && sphere.triangle_count() > 0 && cone.triangle_count() > 0);
//! ```

pub mod primitives;

pub use primitives::*;

use crate::gfx::scene::vertex::Vertex3D;

/// Represents generated geometry data ready for GPU upload and ray tests
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over the triangles as vertex position triples
    pub fn triangles(&self) -> impl Iterator<Item = [[f32; 3]; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }

    /// Interleave positions and normals into the renderer's vertex format
    pub fn to_vertices(&self) -> Vec<Vertex3D> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, position)| Vertex3D {
                position: *position,
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
            })
            .collect()
    }
}

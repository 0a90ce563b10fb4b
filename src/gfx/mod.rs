//! # Graphics Module
//!
//! Camera, procedural geometry, the scene object registry, picking and the
//! renderer.
//!
//! ## Architecture Overview
//!
//! - **Camera System** ([`camera`]) - Orbit camera with damped controls
//! - **Geometry** ([`geometry`]) - Box, sphere and cone meshes
//! - **Scene Management** ([`scene`]) - One shape per catalog entry
//! - **Picking** ([`picking`]) - Which shape is under the pointer
//! - **Rendering Pipeline** ([`rendering`]) - Lit shapes plus the UI overlay
//! - **Resource Management** ([`resources`]) - Materials, uniforms and depth buffer

pub mod camera;
pub mod geometry;
pub mod picking;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::orbit_camera::OrbitCamera;
pub use rendering::render_engine::RenderEngine;

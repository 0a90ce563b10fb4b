// src/gfx/resources/mod.rs
//! GPU resource management
//!
//! Uniform layouts, materials and the depth buffer used by the renderer.

pub mod global_bindings;
pub mod material;
pub mod texture_resource;

// Re-export main types
pub use global_bindings::{GlobalBindings, GlobalUniform};
pub use material::{Material, ObjectUniform};
pub use texture_resource::TextureResource;

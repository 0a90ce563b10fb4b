// src/gfx/rendering/mod.rs
//! Core rendering functionality
//!
//! A single lit pipeline draws every scene object; the UI overlay is painted
//! on top in the same frame.

pub mod render_engine;

// Re-export main types
pub use render_engine::RenderEngine;

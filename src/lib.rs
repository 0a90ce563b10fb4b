// src/lib.rs
//! Folio
//!
//! An interactive 3D portfolio: each catalog entry is drawn as a slowly
//! spinning shape, and clicking a shape highlights it and shows its details in
//! an information panel. Built on wgpu, winit and Dear ImGui.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gfx;
pub mod interaction;
pub mod loading;
pub mod ui;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::FolioApp;
pub use error::{FolioError, Result};

/// Creates the portfolio viewer with the built-in catalog and stock settings
pub fn default() -> Result<FolioApp> {
    FolioApp::new(config::SceneConfig::default())
}

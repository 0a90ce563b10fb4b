//! # User Interface Module
//!
//! Dear ImGui overlay for the portfolio scene.
//!
//! ## Key Components
//!
//! - [`PresentationSink`] - Where selection changes are reported
//! - [`InfoPanel`] - The on-screen sink showing the selected entry
//! - [`UiManager`] - ImGui integration with winit and wgpu
//! - [`status_overlay`] - "Loading..." and load failure messages
//!
//! ## Input Handling
//!
//! Clicks that land on an overlay window are consumed by [`UiManager`] and never
//! reach the picker, so pressing the panel's close button cannot also select
//! whatever lies behind it.

pub mod manager;
pub mod panel;
pub mod sink;

// Re-export main types
pub use manager::UiManager;
pub use panel::{open_link, status_overlay, InfoPanel, PanelAction, PanelContent};
pub use sink::PresentationSink;

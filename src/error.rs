//! Error types for the folio scene
//!
//! Picking and selection never fail; every pointer event resolves to a hit or a
//! miss. Errors only come from catalog validation and from bringing up the
//! window and GPU.

use thiserror::Error;

/// Errors surfaced while building the catalog or starting the renderer
#[derive(Debug, Error)]
pub enum FolioError {
    /// Two catalog entries share the same identifier
    #[error("duplicate catalog entry id `{0}`")]
    DuplicateEntryId(String),

    /// A catalog entry has an empty identifier
    #[error("catalog entry at index {0} has an empty id")]
    EmptyEntryId(usize),

    #[error("failed to create rendering surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible graphics adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to open graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
}

pub type Result<T> = std::result::Result<T, FolioError>;

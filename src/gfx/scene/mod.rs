//! # Scene Object Registry
//!
//! This module turns the item catalog into renderable shapes and keeps them for
//! the lifetime of the application.
//!
//! ## Key Components
//!
//! - [`Scene`] - Registry of objects plus the camera that views them
//! - [`SceneObject`] - One shape with its material, transform and catalog index
//! - [`ShapeKind`] - Box, sphere or cone, chosen from the catalog id
//! - [`Vertex3D`] - GPU vertex layout
//!
//! ## Usage
//!
//! ```no_run
//! use folio::{catalog::Catalog, config::SceneConfig};
//! use folio::gfx::{camera::CameraManager, scene::Scene};
//!
//! let config = SceneConfig::default();
//! let scene = Scene::from_catalog(Catalog::builtin(), CameraManager::from_config(&config), &config);
//! assert_eq!(scene.objects().len(), 4);
//! ```

pub mod object;
pub mod scene;
pub mod shape;
pub mod vertex;

// Re-export main types
pub use object::{DrawObject, ObjectId, SceneObject};
pub use scene::Scene;
pub use shape::ShapeKind;
pub use vertex::Vertex3D;

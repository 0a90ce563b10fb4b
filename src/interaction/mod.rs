//! # Interaction
//!
//! [`Showcase`] is the single context object that ties the scene registry, the
//! picker and the selection state machine together. The application owns one
//! and routes pointer clicks, panel dismissals and frame ticks through it.
//!
//! ```no_run
//! use folio::{catalog::Catalog, config::SceneConfig, interaction::Showcase, ui::InfoPanel};
//!
//! let mut showcase = Showcase::new(Catalog::builtin(), SceneConfig::default());
//! let mut panel = InfoPanel::new();
//! showcase.click((600.0, 400.0), (1200.0, 800.0), &mut panel);
//! showcase.advance_frame();
//! ```

pub mod selection;

pub use selection::{Selection, SelectionState, Transition};

use crate::{
    catalog::Catalog,
    config::SceneConfig,
    gfx::{camera::CameraManager, picking::ObjectPicker, scene::Scene},
    ui::PresentationSink,
};

/// The scene together with everything needed to interact with it
pub struct Showcase {
    pub scene: Scene,
    selection: SelectionState,
    picker: ObjectPicker,
    config: SceneConfig,
}

impl Showcase {
    pub fn new(catalog: Catalog, config: SceneConfig) -> Self {
        let scene = Scene::from_catalog(catalog, CameraManager::from_config(&config), &config);
        let stats = scene.get_statistics();
        log::info!(
            "Scene built: {} objects, {} triangles",
            stats.object_count,
            stats.total_triangles
        );

        Self {
            scene,
            selection: SelectionState::new(config.highlight_color),
            picker: ObjectPicker::new(),
            config,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn selection(&self) -> Selection {
        self.selection.current()
    }

    /// Picks at a pixel position and updates the selection with the result
    pub fn click(
        &mut self,
        screen_pos: (f32, f32),
        screen_size: (f32, f32),
        sink: &mut dyn PresentationSink,
    ) -> Transition {
        let hit = self.picker.pick(
            screen_pos,
            screen_size,
            &self.scene.camera_manager.camera,
            self.scene.objects(),
        );
        self.selection
            .apply_pick(hit.map(|hit| hit.object), &mut self.scene, sink)
    }

    /// Clears the selection, e.g. from the panel's close button
    pub fn dismiss(&mut self, sink: &mut dyn PresentationSink) -> Transition {
        self.selection.dismiss(&mut self.scene, sink)
    }

    /// One animation tick: spin every object, then apply camera damping.
    /// The selection is left alone.
    pub fn advance_frame(&mut self) {
        self.scene.advance_rotation(self.config.rotation_step);
        self.scene.camera_manager.update();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.scene
            .camera_manager
            .camera
            .resize_projection(width, height);
    }
}

/// Tells clicks apart from drags
///
/// A press followed by a release counts as a click only when the pointer
/// stayed within `tolerance` pixels of where it was pressed.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    tolerance: f32,
    position: (f32, f32),
    pressed_at: Option<(f32, f32)>,
}

impl PointerTracker {
    pub fn new(tolerance: f32) -> Self {
        Self {
            tolerance: tolerance.max(0.0),
            position: (0.0, 0.0),
            pressed_at: None,
        }
    }

    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    pub fn moved(&mut self, position: (f32, f32)) {
        self.position = position;
    }

    pub fn press(&mut self) {
        self.pressed_at = Some(self.position);
    }

    /// Forgets a pending press, e.g. when the overlay took the release
    pub fn cancel(&mut self) {
        self.pressed_at = None;
    }

    /// Returns the click position if this release completes a click
    pub fn release(&mut self) -> Option<(f32, f32)> {
        let (x, y) = self.pressed_at.take()?;
        let travel = ((self.position.0 - x).powi(2) + (self.position.1 - y).powi(2)).sqrt();
        (travel <= self.tolerance).then_some(self.position)
    }
}

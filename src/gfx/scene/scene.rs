use wgpu::Device;

use super::{
    object::{ObjectId, SceneObject},
    shape::ShapeKind,
};
use crate::{
    catalog::{Catalog, CatalogEntry},
    config::SceneConfig,
    gfx::{camera::camera_utils::CameraManager, resources::material::Material},
    wgpu_utils::BindGroupLayoutWithDesc,
};

/// The scene object registry together with the camera viewing it
///
/// Objects are created once from the catalog, one per entry and in catalog
/// order, so `ObjectId(i)` always stands for entry `i`. Nothing is added or
/// removed afterwards.
pub struct Scene {
    pub camera_manager: CameraManager,
    catalog: Catalog,
    objects: Vec<SceneObject>,
}

impl Scene {
    /// Builds one shape per catalog entry
    pub fn from_catalog(catalog: Catalog, camera_manager: CameraManager, config: &SceneConfig) -> Self {
        let objects = catalog
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let shape = ShapeKind::classify(&entry.id);
                let material = Material::new(entry.color, config.metalness, config.roughness);
                log::debug!("Placing {} `{}` at {:?}", shape, entry.id, entry.position);
                SceneObject::new(shape, material, entry.position, index)
            })
            .collect();

        Self {
            camera_manager,
            catalog,
            objects,
        }
    }

    /// Updates the scene (camera matrices, etc.)
    pub fn update(&mut self) {
        self.camera_manager.camera.update_view_proj();
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0)
    }

    pub fn object_ids(&self) -> impl Iterator<Item = ObjectId> {
        (0..self.objects.len()).map(ObjectId)
    }

    /// Looks up the object standing for the catalog entry with `entry_id`
    pub fn find(&self, entry_id: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .position(|object| self.catalog.get(object.entry_index()).is_some_and(|e| e.id == entry_id))
            .map(ObjectId)
    }

    /// The catalog entry an object represents
    pub fn entry_for(&self, id: ObjectId) -> Option<&CatalogEntry> {
        self.object(id)
            .and_then(|object| self.catalog.get(object.entry_index()))
    }

    /// Sets the emissive override of one object
    pub fn set_emissive(&mut self, id: ObjectId, color: [f32; 3]) {
        if let Some(object) = self.objects.get_mut(id.0) {
            object.material.set_emissive(color);
        }
    }

    /// Removes the emissive override from every object
    pub fn clear_highlights(&mut self) {
        for object in &mut self.objects {
            object.material.clear_emissive();
        }
    }

    /// Highlights `id` and clears every other object in one pass
    pub fn highlight_only(&mut self, id: ObjectId, color: [f32; 3]) {
        for (index, object) in self.objects.iter_mut().enumerate() {
            if index == id.0 {
                object.material.set_emissive(color);
            } else {
                object.material.clear_emissive();
            }
        }
    }

    /// Objects whose emissive override is currently active
    pub fn highlighted(&self) -> Vec<ObjectId> {
        self.objects
            .iter()
            .enumerate()
            .filter(|(_, object)| object.is_highlighted())
            .map(|(index, _)| ObjectId(index))
            .collect()
    }

    /// Adds a fixed angle to every object's Y rotation
    pub fn advance_rotation(&mut self, radians: f32) {
        for object in &mut self.objects {
            object.rotate_y(radians);
        }
    }

    /// Initializes GPU resources for all objects
    ///
    /// Must be called after the GPU context is available and before rendering.
    pub fn init_gpu_resources(&mut self, device: &Device, layout: &BindGroupLayoutWithDesc) {
        for object in self.objects.iter_mut() {
            object.init_gpu_resources(device, layout);
        }
    }

    /// Pushes transforms and materials that changed since the last sync
    pub fn sync_gpu(&mut self, queue: &wgpu::Queue) {
        for object in &mut self.objects {
            object.update_gpu(queue);
        }
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        SceneStatistics {
            object_count: self.objects.len(),
            total_triangles: self
                .objects
                .iter()
                .map(|obj| obj.geometry().triangle_count())
                .sum(),
            total_vertices: self
                .objects
                .iter()
                .map(|obj| obj.geometry().vertex_count())
                .sum(),
        }
    }
}

/// Scene statistics for logging
#[derive(Debug)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub total_triangles: usize,
    pub total_vertices: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_scene() -> Scene {
        let config = SceneConfig::default();
        Scene::from_catalog(Catalog::builtin(), CameraManager::from_config(&config), &config)
    }

    #[test]
    fn test_registry_is_index_aligned() {
        let scene = builtin_scene();
        assert_eq!(scene.objects().len(), scene.catalog().len());

        for id in scene.object_ids() {
            let entry = scene.entry_for(id).unwrap();
            let object = scene.object(id).unwrap();
            assert_eq!(object.entry_index(), id.0);
            assert_eq!(object.position, entry.position);
            assert_eq!(object.material.base_color, entry.color);
            assert_eq!(object.shape, ShapeKind::classify(&entry.id));
        }
    }

    #[test]
    fn test_builtin_shapes() {
        let scene = builtin_scene();
        let shape = |id: &str| scene.object(scene.find(id).unwrap()).unwrap().shape;
        assert_eq!(shape("project1"), ShapeKind::Box);
        assert_eq!(shape("skill1"), ShapeKind::Sphere);
        assert_eq!(shape("project2"), ShapeKind::Box);
        assert_eq!(shape("contact"), ShapeKind::Cone);
        assert_eq!(scene.find("missing"), None);
    }

    #[test]
    fn test_material_defaults() {
        let scene = builtin_scene();
        for object in scene.objects() {
            assert_eq!(object.material.metallic, 0.3);
            assert_eq!(object.material.roughness, 0.6);
            assert!(!object.is_highlighted());
        }
    }

    #[test]
    fn test_highlight_only_clears_others() {
        let mut scene = builtin_scene();
        scene.set_emissive(ObjectId(0), [0.5; 3]);
        scene.set_emissive(ObjectId(2), [0.5; 3]);
        assert_eq!(scene.highlighted(), vec![ObjectId(0), ObjectId(2)]);

        scene.highlight_only(ObjectId(3), [0.5; 3]);
        assert_eq!(scene.highlighted(), vec![ObjectId(3)]);

        scene.clear_highlights();
        assert!(scene.highlighted().is_empty());
    }

    #[test]
    fn test_rotation_advances_every_object() {
        let mut scene = builtin_scene();
        for _ in 0..10 {
            scene.advance_rotation(0.005);
        }
        for object in scene.objects() {
            assert!((object.rotation_y - 0.05).abs() < 1e-6);
        }
    }

    #[test]
    fn test_statistics() {
        let stats = builtin_scene().get_statistics();
        assert_eq!(stats.object_count, 4);
        assert_eq!(stats.total_triangles, 12 * 2 + 32 * 16 * 2 + 32 * 2);
    }
}

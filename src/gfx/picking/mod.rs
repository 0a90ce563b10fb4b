//! # Object Picking System
//!
//! This module finds the scene object under the mouse pointer using ray-casting.
//!
//! ## How it works
//!
//! 1. **Mouse to Ray**: Normalize the pixel position to device coordinates and
//!    unproject it through the camera into a world-space ray
//! 2. **Broad phase**: Test the ray against each object's world-space bounding box
//! 3. **Narrow phase**: Test the surviving objects triangle by triangle
//! 4. **Selection**: Return the closest hit
//!
//! When two objects report the same distance the one that comes first in the
//! candidate list wins.
//!
//! ## Usage
//!
//! ```no_run
//! use folio::gfx::picking::ObjectPicker;
//! # fn demo(scene: &folio::gfx::scene::Scene) {
//! let picker = ObjectPicker::new();
//! let camera = &scene.camera_manager.camera;
//! if let Some(hit) = picker.pick((400.0, 300.0), (800.0, 600.0), camera, scene.objects()) {
//!     println!("Selected object: {}", hit.object);
//! }
//! # }
//! ```

use cgmath::{ElementWise, InnerSpace, Matrix4, SquareMatrix, Vector3, Vector4};

use crate::gfx::{
    camera::orbit_camera::OrbitCamera,
    scene::{ObjectId, SceneObject},
};

/// Minimum ray parameter accepted as a hit, rejects self-intersections at the origin
const HIT_EPSILON: f32 = 1e-6;

/// Converts a pixel position into normalized device coordinates.
///
/// Both axes map to `-1..=1`; the vertical axis is flipped so that the top of
/// the viewport is `+1`.
pub fn normalized_device_coords(screen_pos: (f32, f32), screen_size: (f32, f32)) -> (f32, f32) {
    let (px, py) = screen_pos;
    let (width, height) = screen_size;
    ((px / width) * 2.0 - 1.0, -(py / height) * 2.0 + 1.0)
}

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized)
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Create a new ray
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box for intersection testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl AABB {
    /// Create a new AABB
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Create AABB from a set of vertices
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Self {
        let (min, max) = crate::gfx::geometry::bounds(vertices);
        Self::new(min.into(), max.into())
    }

    /// Test ray-AABB intersection
    /// Returns the distance to intersection point, or None if no intersection
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let inv_dir = Vector3::new(
            1.0 / ray.direction.x,
            1.0 / ray.direction.y,
            1.0 / ray.direction.z,
        );

        let t_min = (self.min - ray.origin).mul_element_wise(inv_dir);
        let t_max = (self.max - ray.origin).mul_element_wise(inv_dir);

        let t1 = Vector3::new(
            t_min.x.min(t_max.x),
            t_min.y.min(t_max.y),
            t_min.z.min(t_max.z),
        );
        let t2 = Vector3::new(
            t_min.x.max(t_max.x),
            t_min.y.max(t_max.y),
            t_min.z.max(t_max.z),
        );

        let t_near = t1.x.max(t1.y.max(t1.z));
        let t_far = t2.x.min(t2.y.min(t2.z));

        if t_near <= t_far && t_far >= 0.0 {
            Some(if t_near >= 0.0 { t_near } else { t_far })
        } else {
            None
        }
    }

    /// Apply a transformation matrix to the AABB
    pub fn transform(&self, matrix: &Matrix4<f32>) -> Self {
        // Transform all 8 corners of the AABB and compute new bounds
        let corners = [
            Vector3::new(self.min.x, self.min.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.min.z),
            Vector3::new(self.min.x, self.max.y, self.min.z),
            Vector3::new(self.min.x, self.min.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.max.z),
            Vector3::new(self.min.x, self.max.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.max.z),
        ];

        let transformed_corners: Vec<[f32; 3]> = corners
            .iter()
            .map(|corner| {
                let t = matrix * corner.extend(1.0);
                [t.x / t.w, t.y / t.w, t.z / t.w]
            })
            .collect();

        Self::from_vertices(&transformed_corners)
    }
}

/// Möller–Trumbore ray/triangle test, both faces. Returns the ray parameter.
fn intersect_triangle(
    origin: Vector3<f32>,
    direction: Vector3<f32>,
    [a, b, c]: [[f32; 3]; 3],
) -> Option<f32> {
    let a = Vector3::from(a);
    let edge1 = Vector3::from(b) - a;
    let edge2 = Vector3::from(c) - a;

    let p = direction.cross(edge2);
    let det = edge1.dot(p);
    if det.abs() < f32::EPSILON {
        return None; // Parallel to the triangle plane
    }
    let inv_det = 1.0 / det;

    let s = origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(q) * inv_det;
    (t > HIT_EPSILON).then_some(t)
}

/// Distance along `ray` to the nearest surface of `object`, if it is hit
pub fn intersect_object(ray: &Ray, object: &SceneObject) -> Option<f32> {
    let model = object.model_matrix();
    let (min, max) = object.local_bounds();

    AABB::new(min.into(), max.into())
        .transform(&model)
        .intersect_ray(ray)?;

    let inverse = model.invert()?;
    // Affine maps preserve the ray parameter, so object-space t is world-space t
    let local_origin = (inverse * ray.origin.extend(1.0)).truncate();
    let local_direction = (inverse * ray.direction.extend(0.0)).truncate();

    object
        .geometry()
        .triangles()
        .filter_map(|triangle| intersect_triangle(local_origin, local_direction, triangle))
        .min_by(f32::total_cmp)
}

/// Result of an object picking operation
#[derive(Debug, Clone, Copy)]
pub struct PickResult {
    /// Registry handle of the picked object
    pub object: ObjectId,
    /// Distance from the ray origin to the intersection point
    pub distance: f32,
    /// World space intersection point
    pub intersection_point: Vector3<f32>,
}

/// Object picker for 3D mouse selection
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjectPicker;

impl ObjectPicker {
    /// Create a new object picker
    pub fn new() -> Self {
        Self
    }

    /// Convert screen coordinates to a world-space ray
    pub fn screen_to_ray(
        &self,
        screen_pos: (f32, f32),
        screen_size: (f32, f32),
        camera: &OrbitCamera,
    ) -> Ray {
        let (ndc_x, ndc_y) = normalized_device_coords(screen_pos, screen_size);

        let view_proj_matrix = camera.projection_matrix() * camera.view_matrix();
        let Some(inv_view_proj) = view_proj_matrix.invert() else {
            return Ray::new(camera.eye, camera.target - camera.eye);
        };

        // Transform near and far points from NDC to world space
        let world_near = inv_view_proj * Vector4::new(ndc_x, ndc_y, -1.0, 1.0);
        let world_far = inv_view_proj * Vector4::new(ndc_x, ndc_y, 1.0, 1.0);

        let near_3d = world_near.truncate() / world_near.w;
        let far_3d = world_far.truncate() / world_far.w;

        Ray::new(near_3d, far_3d - near_3d)
    }

    /// Pick the nearest candidate under the pointer.
    ///
    /// `ObjectId(i)` in the result refers to `candidates[i]`. Ties keep the
    /// earlier candidate.
    pub fn pick(
        &self,
        screen_pos: (f32, f32),
        screen_size: (f32, f32),
        camera: &OrbitCamera,
        candidates: &[SceneObject],
    ) -> Option<PickResult> {
        if screen_size.0 <= 0.0 || screen_size.1 <= 0.0 {
            return None;
        }

        let ray = self.screen_to_ray(screen_pos, screen_size, camera);
        self.pick_with_ray(&ray, candidates)
    }

    /// Nearest candidate along an explicit ray
    pub fn pick_with_ray(&self, ray: &Ray, candidates: &[SceneObject]) -> Option<PickResult> {
        let mut closest_result: Option<PickResult> = None;

        for (i, object) in candidates.iter().enumerate() {
            let Some(distance) = intersect_object(ray, object) else {
                continue;
            };

            // Strict comparison keeps the earliest candidate on equal distance
            if closest_result
                .as_ref()
                .map_or(true, |result| distance < result.distance)
            {
                closest_result = Some(PickResult {
                    object: ObjectId(i),
                    distance,
                    intersection_point: ray.point_at(distance),
                });
            }
        }

        if let Some(result) = &closest_result {
            log::debug!(
                "Picked object {} at distance {:.3}",
                result.object,
                result.distance
            );
        }
        closest_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Zero;
    use crate::{
        config::{CameraConfig, ControlsConfig},
        gfx::{resources::material::Material, scene::ShapeKind},
    };

    fn camera() -> OrbitCamera {
        OrbitCamera::from_config(&CameraConfig::default(), &ControlsConfig::default(), 800.0 / 600.0)
    }

    fn object(shape: ShapeKind, position: Vector3<f32>) -> SceneObject {
        SceneObject::new(shape, Material::default(), position, 0)
    }

    // Slightly off center so rays never graze a shared triangle edge
    const NEAR_CENTER: (f32, f32) = (415.0, 290.0);

    #[test]
    fn test_device_coordinate_mapping() {
        assert_eq!(normalized_device_coords((400.0, 300.0), (800.0, 600.0)), (0.0, 0.0));
        assert_eq!(normalized_device_coords((0.0, 0.0), (800.0, 600.0)), (-1.0, 1.0));
        assert_eq!(normalized_device_coords((800.0, 600.0), (800.0, 600.0)), (1.0, -1.0));
    }

    #[test]
    fn test_aabb_creation() {
        let vertices = vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [-1.0, -1.0, -1.0]];
        let aabb = AABB::from_vertices(&vertices);

        assert_eq!(aabb.min, Vector3::new(-1.0, -1.0, -1.0));
        assert_eq!(aabb.max, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_ray_aabb_intersection() {
        let aabb = AABB::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));

        // Ray hitting the box
        let ray = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(aabb.intersect_ray(&ray), Some(4.0));

        // Ray missing the box
        let ray_miss = Ray::new(Vector3::new(5.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(aabb.intersect_ray(&ray_miss).is_none());
    }

    #[test]
    fn test_center_ray_points_down_view_axis() {
        let ray = ObjectPicker::new().screen_to_ray((400.0, 300.0), (800.0, 600.0), &camera());
        assert!((ray.direction - Vector3::new(0.0, 0.0, -1.0)).magnitude() < 1e-4);
        assert!(ray.origin.x.abs() < 1e-4 && ray.origin.y.abs() < 1e-4);
    }

    #[test]
    fn test_pick_hits_centered_box() {
        let candidates = vec![object(ShapeKind::Box, Vector3::zero())];
        let hit = ObjectPicker::new()
            .pick(NEAR_CENTER, (800.0, 600.0), &camera(), &candidates)
            .unwrap();
        assert_eq!(hit.object, ObjectId(0));
        // Front face sits at z = 0.5, the camera at z = 5
        assert!((hit.intersection_point.z - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_pick_misses_empty_background() {
        let candidates = vec![object(ShapeKind::Box, Vector3::zero())];
        assert!(ObjectPicker::new()
            .pick((5.0, 5.0), (800.0, 600.0), &camera(), &candidates)
            .is_none());
        assert!(ObjectPicker::new()
            .pick((400.0, 300.0), (800.0, 600.0), &camera(), &[])
            .is_none());
    }

    #[test]
    fn test_nearest_object_wins() {
        let candidates = vec![
            object(ShapeKind::Box, Vector3::new(0.0, 0.0, -3.0)),
            object(ShapeKind::Box, Vector3::new(0.0, 0.0, 0.0)),
        ];
        let hit = ObjectPicker::new()
            .pick(NEAR_CENTER, (800.0, 600.0), &camera(), &candidates)
            .unwrap();
        assert_eq!(hit.object, ObjectId(1));
    }

    #[test]
    fn test_equal_distance_keeps_first_candidate() {
        let candidates = vec![
            object(ShapeKind::Box, Vector3::zero()),
            object(ShapeKind::Box, Vector3::zero()),
        ];
        let picker = ObjectPicker::new();
        for _ in 0..3 {
            let hit = picker
                .pick(NEAR_CENTER, (800.0, 600.0), &camera(), &candidates)
                .unwrap();
            assert_eq!(hit.object, ObjectId(0));
        }
    }

    #[test]
    fn test_sphere_corner_is_not_a_hit() {
        let sphere = object(ShapeKind::Sphere, Vector3::zero());

        // Inside the bounding box but outside the sphere itself
        let corner = Ray::new(Vector3::new(0.55, 0.55, 5.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(intersect_object(&corner, &sphere).is_none());

        let center = Ray::new(Vector3::new(0.01, 0.013, 5.0), Vector3::new(0.0, 0.0, -1.0));
        let distance = intersect_object(&center, &sphere).unwrap();
        // Facets sit inside the true sphere, so the hit is a little farther
        assert!(distance >= 4.4 - 1e-4);
        assert!((distance - 4.4).abs() < 5e-3);
    }

    #[test]
    fn test_rotation_is_respected() {
        let mut cube = object(ShapeKind::Box, Vector3::zero());
        // Straight on, the face is 0.5 away from the center
        let ray = Ray::new(Vector3::new(0.1, 0.07, 5.0), Vector3::new(0.0, 0.0, -1.0));
        assert!((intersect_object(&ray, &cube).unwrap() - 4.5).abs() < 1e-4);

        // Turned 45 degrees, the front edge sits at 0.5 * sqrt(2) and the
        // faces fall away from it at 45 degrees
        cube.rotate_y(std::f32::consts::FRAC_PI_4);
        let expected = 5.0 - (0.5 * std::f32::consts::SQRT_2 - 0.1);
        assert!((intersect_object(&ray, &cube).unwrap() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_zero_sized_viewport_never_hits() {
        let candidates = vec![object(ShapeKind::Box, Vector3::zero())];
        assert!(ObjectPicker::new()
            .pick((0.0, 0.0), (0.0, 0.0), &camera(), &candidates)
            .is_none());
    }
}

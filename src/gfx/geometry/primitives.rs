//! # Primitive Shape Generation
//!
//! Box, sphere and cone generators. All shapes are centered on the origin, use
//! a Y-up convention and carry per-vertex normals.

use super::GeometryData;
use std::f32::consts::PI;

/// Generate a cube with edge length `size` centered at the origin
///
/// Each face has its own four vertices so normals stay flat.
pub fn generate_box(size: f32) -> GeometryData {
    let mut data = GeometryData::new();
    let h = size * 0.5;

    #[rustfmt::skip]
    let positions = [
        // Front face
        [-h, -h,  h], [ h, -h,  h], [ h,  h,  h], [-h,  h,  h],
        // Back face
        [-h, -h, -h], [-h,  h, -h], [ h,  h, -h], [ h, -h, -h],
        // Left face
        [-h, -h, -h], [-h, -h,  h], [-h,  h,  h], [-h,  h, -h],
        // Right face
        [ h, -h,  h], [ h, -h, -h], [ h,  h, -h], [ h,  h,  h],
        // Top face
        [-h,  h,  h], [ h,  h,  h], [ h,  h, -h], [-h,  h, -h],
        // Bottom face
        [-h, -h, -h], [ h, -h, -h], [ h, -h,  h], [-h, -h,  h],
    ];

    let face_normals = [
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
        [-1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
    ];

    data.vertices = positions.to_vec();
    data.normals = face_normals
        .iter()
        .flat_map(|normal| std::iter::repeat(*normal).take(4))
        .collect();

    for face in 0..6u32 {
        let base = face * 4;
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a UV sphere
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `width_segments` - Number of longitude segments (min 3)
/// * `height_segments` - Number of latitude segments (min 2)
pub fn generate_sphere(radius: f32, width_segments: u32, height_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let long_segs = width_segments.max(3);
    let lat_segs = height_segments.max(2);

    for lat in 0..=lat_segs {
        let theta = lat as f32 * PI / lat_segs as f32; // 0 to PI
        let (sin_theta, cos_theta) = theta.sin_cos();

        for long in 0..=long_segs {
            let phi = long as f32 * 2.0 * PI / long_segs as f32; // 0 to 2*PI
            let (sin_phi, cos_phi) = phi.sin_cos();

            let normal = [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi];
            data.vertices
                .push([normal[0] * radius, normal[1] * radius, normal[2] * radius]);
            data.normals.push(normal);
        }
    }

    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let first = lat * (long_segs + 1) + long;
            let second = first + long_segs + 1;

            data.indices.extend_from_slice(&[first, second, first + 1]);
            data.indices.extend_from_slice(&[second, second + 1, first + 1]);
        }
    }

    data
}

/// Generate a cone standing on the XZ plane
///
/// The apex sits at `+height / 2` on the Y axis and the closed circular base at
/// `-height / 2`.
///
/// # Arguments
/// * `radius` - Base radius
/// * `height` - Apex to base distance
/// * `radial_segments` - Number of segments around the axis (min 3)
pub fn generate_cone(radius: f32, height: f32, radial_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let segs = radial_segments.max(3);
    let half_height = height * 0.5;
    // Side normals tilt upward by the slope of the mantle
    let slope = if height > 0.0 { radius / height } else { 0.0 };

    // Side: one apex vertex per segment so each strip gets its own normal
    for i in 0..=segs {
        let angle = i as f32 * 2.0 * PI / segs as f32;
        let (sin_a, cos_a) = angle.sin_cos();
        let len = (1.0 + slope * slope).sqrt();
        let normal = [cos_a / len, slope / len, sin_a / len];

        data.vertices.push([0.0, half_height, 0.0]);
        data.normals.push(normal);

        data.vertices
            .push([radius * cos_a, -half_height, radius * sin_a]);
        data.normals.push(normal);
    }

    for i in 0..segs {
        let apex = i * 2;
        let base_current = apex + 1;
        let base_next = base_current + 2;

        data.indices.extend_from_slice(&[apex, base_next, base_current]);
    }

    // Base cap
    let center = data.vertices.len() as u32;
    data.vertices.push([0.0, -half_height, 0.0]);
    data.normals.push([0.0, -1.0, 0.0]);

    let rim_start = data.vertices.len() as u32;
    for i in 0..=segs {
        let angle = i as f32 * 2.0 * PI / segs as f32;
        let (sin_a, cos_a) = angle.sin_cos();
        data.vertices
            .push([radius * cos_a, -half_height, radius * sin_a]);
        data.normals.push([0.0, -1.0, 0.0]);
    }

    for i in 0..segs {
        let current = rim_start + i;
        data.indices.extend_from_slice(&[center, current, current + 1]);
    }

    data
}

/// Axis-aligned extents `(min, max)` of a set of positions
pub fn bounds(vertices: &[[f32; 3]]) -> ([f32; 3], [f32; 3]) {
    let Some(first) = vertices.first() else {
        return ([0.0; 3], [0.0; 3]);
    };

    vertices.iter().skip(1).fold((*first, *first), |(mut min, mut max), v| {
        for axis in 0..3 {
            min[axis] = min[axis].min(v[axis]);
            max[axis] = max[axis].max(v[axis]);
        }
        (min, max)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: [f32; 3], b: [f32; 3]) {
        for axis in 0..3 {
            assert!((a[axis] - b[axis]).abs() < 1e-5, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn test_box_generation() {
        let cube = generate_box(1.0);
        assert_eq!(cube.vertices.len(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.normals.len(), 24);
        assert_eq!(cube.indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cube.triangle_count(), 12);

        let (min, max) = bounds(&cube.vertices);
        assert_close(min, [-0.5, -0.5, -0.5]);
        assert_close(max, [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_sphere_generation() {
        let sphere = generate_sphere(0.6, 32, 16);
        assert_eq!(sphere.vertices.len(), 33 * 17);
        assert_eq!(sphere.triangle_count(), 32 * 16 * 2);
        assert_eq!(sphere.vertices.len(), sphere.normals.len());

        for v in &sphere.vertices {
            let r = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            assert!((r - 0.6).abs() < 1e-4);
        }
    }

    #[test]
    fn test_cone_generation() {
        let cone = generate_cone(0.6, 1.2, 32);
        assert_eq!(cone.triangle_count(), 32 * 2);
        assert!(cone.indices.iter().all(|&i| (i as usize) < cone.vertices.len()));

        let (min, max) = bounds(&cone.vertices);
        assert_close(min, [-0.6, -0.6, -0.6]);
        assert_close(max, [0.6, 0.6, 0.6]);
    }

    #[test]
    fn test_bounds_of_empty_set() {
        assert_eq!(bounds(&[]), ([0.0; 3], [0.0; 3]));
    }
}

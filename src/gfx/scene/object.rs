use std::fmt;

use cgmath::{Matrix4, Rad, Vector3};
use wgpu::{util::DeviceExt, Device};

use super::shape::ShapeKind;
use crate::{
    gfx::{
        geometry::{bounds, GeometryData},
        resources::material::{Material, ObjectUniform},
    },
    wgpu_utils::{BindGroupBuilder, BindGroupLayoutWithDesc, UniformBuffer},
};

/// Handle of an object in the scene registry, equal to its catalog index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// GPU resources struct to hold buffers and the per-object bind group
pub struct ObjectGpuResources {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform: UniformBuffer<ObjectUniform>,
    bind_group: wgpu::BindGroup,
}

/// A renderable shape standing for one catalog entry
///
/// The object keeps rendering state only. The descriptive data lives in the
/// catalog and is reached through [`SceneObject::entry_index`].
pub struct SceneObject {
    pub shape: ShapeKind,
    pub material: Material,
    pub position: Vector3<f32>,
    /// Rotation about the Y axis in radians
    pub rotation_y: f32,
    entry: usize,
    geometry: GeometryData,
    local_bounds: ([f32; 3], [f32; 3]),
    gpu_resources: Option<ObjectGpuResources>, // None until init_gpu_resources called
}

impl SceneObject {
    pub fn new(shape: ShapeKind, material: Material, position: Vector3<f32>, entry: usize) -> Self {
        let geometry = shape.geometry();
        let local_bounds = bounds(&geometry.vertices);
        Self {
            shape,
            material,
            position,
            rotation_y: 0.0,
            entry,
            geometry,
            local_bounds,
            gpu_resources: None,
        }
    }

    /// Index of the catalog entry this object represents
    pub fn entry_index(&self) -> usize {
        self.entry
    }

    pub fn geometry(&self) -> &GeometryData {
        &self.geometry
    }

    /// Object-space bounding box as `(min, max)`
    pub fn local_bounds(&self) -> ([f32; 3], [f32; 3]) {
        self.local_bounds
    }

    /// Translation followed by the Y rotation: `T * R`
    pub fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position) * Matrix4::from_angle_y(Rad(self.rotation_y))
    }

    /// Apply rotation around Y axis
    pub fn rotate_y(&mut self, radians: f32) {
        self.rotation_y += radians;
    }

    pub fn is_highlighted(&self) -> bool {
        self.material.is_emissive()
    }

    pub fn uniform(&self) -> ObjectUniform {
        self.material.to_uniform(self.model_matrix())
    }

    pub fn has_gpu_resources(&self) -> bool {
        self.gpu_resources.is_some()
    }

    pub fn init_gpu_resources(&mut self, device: &Device, layout: &BindGroupLayoutWithDesc) {
        let vertices = self.geometry.to_vertices();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Index Buffer"),
            contents: bytemuck::cast_slice(&self.geometry.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let uniform = UniformBuffer::new_with_data(device, &self.uniform());
        let bind_group = BindGroupBuilder::new(layout)
            .resource(uniform.binding_resource())
            .create(device, "Object Bind Group");

        log::debug!(
            "Uploaded {} for entry {}: {} vertices, {} triangles",
            self.shape,
            self.entry,
            vertices.len(),
            self.geometry.triangle_count()
        );

        self.gpu_resources = Some(ObjectGpuResources {
            vertex_buffer,
            index_buffer,
            index_count: self.geometry.indices.len() as u32,
            uniform,
            bind_group,
        });
    }

    /// Sync transform and material to the GPU; unchanged uniforms are skipped
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        let uniform = self.uniform();
        if let Some(gpu_resources) = &mut self.gpu_resources {
            gpu_resources.uniform.update_content(queue, uniform);
        }
    }
}

pub trait DrawObject<'a> {
    fn draw_object(&mut self, object: &'a SceneObject);
}

impl<'a, 'b> DrawObject<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_object(&mut self, object: &'b SceneObject) {
        let Some(gpu) = &object.gpu_resources else {
            return; // Skip drawing if not uploaded
        };

        self.set_bind_group(1, &gpu.bind_group, &[]);
        self.set_vertex_buffer(0, gpu.vertex_buffer.slice(..));
        self.set_index_buffer(gpu.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..gpu.index_count, 0, 0..1);
    }
}

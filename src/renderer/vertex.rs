//! Vertex and uniform types for the quad pipeline

use bytemuck::{Pod, Zeroable};

/// A bare position vertex; all shading comes from the per-entity uniform.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            }],
        }
    }
}

/// The shared unit quad (two triangles, six vertices), edge length 1,
/// centered on the origin. Entity world matrices do the rest.
pub const QUAD_VERTICES: [Vertex; 6] = [
    Vertex::new(-0.5, -0.5, 0.0),
    Vertex::new(0.5, -0.5, 0.0),
    Vertex::new(-0.5, 0.5, 0.0),
    Vertex::new(-0.5, 0.5, 0.0),
    Vertex::new(0.5, -0.5, 0.0),
    Vertex::new(0.5, 0.5, 0.0),
];

/// Per-entity uniform: world matrix plus flat color. Matches the
/// `EntityUniform` struct in shader.wgsl.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct EntityUniform {
    pub world: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl EntityUniform {
    pub fn new(world: glam::Mat4, color: [f32; 4]) -> Self {
        Self {
            world: world.to_cols_array_2d(),
            color,
        }
    }
}

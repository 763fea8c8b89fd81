//! GPU data layouts: mesh vertices, per-object instances, projection uniform

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::sim::GameState;

/// Mesh vertex in unit space
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Per-object placement: screen-space center and full size in pixels
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Instance {
    pub offset: [f32; 2],
    pub size: [f32; 2],
}

impl Instance {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Instance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Paddle instances (left, right) and the ball instance for the current state
pub fn instances(state: &GameState) -> ([Instance; 2], Instance) {
    let paddles = state.paddles.map(|p| Instance {
        offset: p.pos.to_array(),
        size: p.size().to_array(),
    });
    let ball = Instance {
        offset: state.ball.pos.to_array(),
        size: state.ball.size().to_array(),
    };
    (paddles, ball)
}

/// Projection uniform (must match `main.vs`)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ProjectionUniform {
    pub matrix: [[f32; 4]; 4],
}

impl ProjectionUniform {
    pub fn for_screen(width: f32, height: f32) -> Self {
        Self {
            matrix: orthographic_projection(width, height).to_cols_array_2d(),
        }
    }
}

/// Pixel coordinates (origin bottom-left, y up) to clip space
pub fn orthographic_projection(width: f32, height: f32) -> Mat4 {
    Mat4::orthographic_rh(0.0, width, 0.0, height, 0.0, 1.0)
}

//! Mesh generation for 2D primitives
//!
//! Meshes are unit-sized around the origin; each instance scales and offsets them.

use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Indexed triangle mesh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Triangle-fan disc: a center vertex plus `num_triangles` rim vertices
///
/// Triangle `i` is `(0, i + 1, i + 2)`; the last one wraps back to vertex 1.
pub fn disc(num_triangles: u32, radius: f32) -> Mesh {
    let step = TAU / num_triangles as f32;

    let mut vertices = Vec::with_capacity(num_triangles as usize + 1);
    vertices.push(Vertex::new(0.0, 0.0));

    let mut indices = Vec::with_capacity(num_triangles as usize * 3);

    for i in 0..num_triangles {
        let theta = i as f32 * step;
        vertices.push(Vertex::new(radius * theta.cos(), radius * theta.sin()));
        indices.extend_from_slice(&[0, i + 1, i + 2]);
    }

    // Close the fan
    if let Some(last) = indices.last_mut() {
        *last = 1;
    }

    Mesh { vertices, indices }
}

/// Unit square centered on the origin, two triangles
pub fn unit_quad() -> Mesh {
    Mesh {
        vertices: vec![
            Vertex::new(0.5, 0.5),
            Vertex::new(-0.5, 0.5),
            Vertex::new(-0.5, -0.5),
            Vertex::new(0.5, -0.5),
        ],
        indices: vec![0, 1, 2, 2, 3, 0],
    }
}

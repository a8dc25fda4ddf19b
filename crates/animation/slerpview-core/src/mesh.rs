//! CPU-side geometry for the cursor gizmo and the ground grid. Hosts upload
//! these once and draw them by [`crate::render::MeshKind`].

use std::f32::consts::TAU;

use crate::pose::Vec3;

pub const CURSOR_RADIUS: f32 = 0.02;
pub const CURSOR_LENGTH: f32 = 0.2;
pub const CURSOR_SEGMENTS: u16 = 16;
/// Two triangles per side segment.
pub const CURSOR_INDEX_COUNT: u32 = CURSOR_SEGMENTS as u32 * 6;

pub const GRID_HALF_SIZE: f32 = 10.0;
pub const GRID_GAP: f32 = 1.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    /// Empty for non-indexed meshes.
    pub indices: Vec<u32>,
}

impl Mesh {
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Open cylinder of radius [`CURSOR_RADIUS`] running from z = 0 to
/// z = [`CURSOR_LENGTH`]. Two rings of `segments + 1` vertices (the seam
/// vertex is duplicated) stitched by `segments * 2` triangles.
pub fn cursor_mesh() -> Mesh {
    let ring = CURSOR_SEGMENTS as u32 + 1;
    let mut vertices = Vec::with_capacity(ring as usize * 2);
    for i in 0..2 {
        let z = CURSOR_LENGTH * i as f32;
        for j in 0..=CURSOR_SEGMENTS {
            let angle = TAU * j as f32 / CURSOR_SEGMENTS as f32;
            vertices.push([CURSOR_RADIUS * angle.cos(), CURSOR_RADIUS * angle.sin(), z]);
        }
    }

    let mut indices = Vec::with_capacity(CURSOR_INDEX_COUNT as usize);
    for j in 0..CURSOR_SEGMENTS as u32 {
        let first = j;
        let second = first + ring;
        indices.extend_from_slice(&[first, second, first + 1]);
        indices.extend_from_slice(&[second, second + 1, first + 1]);
    }

    Mesh { vertices, indices }
}

/// Line-list grid on the y = 0 plane spanning ±[`GRID_HALF_SIZE`] with lines
/// every [`GRID_GAP`] units along both X and Z.
pub fn ground_grid() -> Mesh {
    let steps = grid_steps();
    let mut vertices = Vec::with_capacity(grid_vertex_count() as usize);
    for k in 0..=steps {
        let i = -GRID_HALF_SIZE + k as f32 * GRID_GAP;
        vertices.push([i, 0.0, -GRID_HALF_SIZE]);
        vertices.push([i, 0.0, GRID_HALF_SIZE]);
        vertices.push([-GRID_HALF_SIZE, 0.0, i]);
        vertices.push([GRID_HALF_SIZE, 0.0, i]);
    }
    Mesh {
        vertices,
        indices: Vec::new(),
    }
}

/// Vertices in [`ground_grid`], without building it.
#[inline]
pub fn grid_vertex_count() -> u32 {
    (grid_steps() + 1) * 4
}

fn grid_steps() -> u32 {
    (2.0 * GRID_HALF_SIZE / GRID_GAP).round() as u32
}

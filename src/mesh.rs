//! Geometric description of a ribbon mesh.

use glamx::{Pose3, Vec3};

/// A triangle mesh of extruded line quads.
///
/// Positions and a unified triangle index buffer, ready for upload to a
/// GPU vertex/index buffer pair.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineMesh {
    /// Coordinates of the mesh vertices.
    pub coords: Vec<Vec3>,
    /// Index buffer of the mesh.
    pub indices: Vec<[u32; 3]>,
}

impl LineMesh {
    /// Creates a new `LineMesh`.
    pub fn new(coords: Vec<Vec3>, indices: Vec<[u32; 3]>) -> LineMesh {
        LineMesh { coords, indices }
    }

    /// Whether this mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The number of triangles on this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Returns the index buffer flattened to a plain `u32` list.
    #[inline]
    pub fn flat_indices(&self) -> Vec<u32> {
        let mut res = Vec::with_capacity(self.num_triangles() * 3);

        for i in &self.indices {
            res.push(i[0]);
            res.push(i[1]);
            res.push(i[2]);
        }

        res
    }

    /// Translates each vertex of this mesh.
    #[inline]
    pub fn translate_by(&mut self, t: Vec3) {
        for c in self.coords.iter_mut() {
            *c += t;
        }
    }

    /// Transforms each vertex of this mesh.
    #[inline]
    pub fn transform_by(&mut self, t: Pose3) {
        for c in self.coords.iter_mut() {
            *c = t * *c;
        }
    }

    /// The vertex coordinates viewed as raw bytes, for buffer upload.
    #[inline]
    pub fn coord_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.coords[..])
    }

    /// The index buffer viewed as raw bytes, for buffer upload.
    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices[..])
    }
}

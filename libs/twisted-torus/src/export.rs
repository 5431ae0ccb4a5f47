//! Mesh buffer export for GPU rendering.
//!
//! Flat shading needs one normal per face, so each triangle gets its own
//! three vertices carrying the normal of the quad it came from. Positions
//! and normals are converted to `f32` for WebGL/WebGPU.

use crate::mesh::QuadMesh;

/// Flat-shaded mesh buffers suitable for GPU rendering.
///
/// # Examples
/// ```
/// use twisted_torus::{generate, QuadMesh};
///
/// let (vertices, faces) = generate(1.0, 0.25, 4, 4, 0);
/// let mesh = QuadMesh::from_buffers(&vertices, &faces).unwrap();
/// let buffers = mesh.to_flat_buffers();
///
/// assert_eq!(buffers.triangle_count(), 16 * 2);
/// assert_eq!(buffers.vertex_count(), 16 * 2 * 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatBuffers {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...].
    /// Uses `f32` for GPU compatibility.
    pub positions: Vec<f32>,

    /// Per-vertex normals as flat array, equal for the three corners of a
    /// triangle.
    pub normals: Vec<f32>,

    /// Triangle indices as flat array [i0, i1, i2, i0, i1, i2, ...].
    pub indices: Vec<u32>,
}

impl FlatBuffers {
    /// Creates empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl QuadMesh {
    /// Exports the mesh to flat-shaded GPU buffers.
    ///
    /// Each quad is split into two triangles that both carry the quad's
    /// Newell normal.
    pub fn to_flat_buffers(&self) -> FlatBuffers {
        let triangle_count = self.face_count() * 2;
        let mut buffers = FlatBuffers {
            positions: Vec::with_capacity(triangle_count * 9),
            normals: Vec::with_capacity(triangle_count * 9),
            indices: Vec::with_capacity(triangle_count * 3),
        };

        for (&[a, b, c, d], normal) in self.quads().iter().zip(self.face_normals()) {
            for corner in [a, b, c, a, c, d] {
                let position = self.vertex(corner);
                let index = buffers.vertex_count() as u32;
                buffers.indices.push(index);
                buffers
                    .positions
                    .extend([position.x as f32, position.y as f32, position.z as f32]);
                buffers
                    .normals
                    .extend([normal.x as f32, normal.y as f32, normal.z as f32]);
            }
        }

        buffers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;

    fn torus_buffers() -> (QuadMesh, FlatBuffers) {
        let (vertices, faces) = generate(1.0, 0.25, 8, 6, 2);
        let mesh = QuadMesh::from_buffers(&vertices, &faces).unwrap();
        let buffers = mesh.to_flat_buffers();
        (mesh, buffers)
    }

    #[test]
    fn test_flat_buffers_creation() {
        let buffers = FlatBuffers::new();
        assert_eq!(buffers.vertex_count(), 0);
        assert_eq!(buffers.triangle_count(), 0);
    }

    #[test]
    fn test_flat_buffer_sizes() {
        let (mesh, buffers) = torus_buffers();
        let triangles = mesh.face_count() * 2;
        assert_eq!(buffers.triangle_count(), triangles);
        assert_eq!(buffers.vertex_count(), triangles * 3);
        assert_eq!(buffers.normals.len(), buffers.positions.len());
    }

    #[test]
    fn test_indices_in_range() {
        let (_, buffers) = torus_buffers();
        let vertex_count = buffers.vertex_count() as u32;
        for &idx in &buffers.indices {
            assert!(idx < vertex_count, "Index {} out of range", idx);
        }
    }

    #[test]
    fn test_triangles_carry_their_face_normal() {
        let (mesh, buffers) = torus_buffers();
        for (normal, pair) in mesh.face_normals().iter().zip(buffers.normals.chunks_exact(18)) {
            let expected = [normal.x as f32, normal.y as f32, normal.z as f32];
            for corner in pair.chunks_exact(3) {
                assert_eq!(corner, expected);
            }
        }
    }

    #[test]
    fn test_triangle_corners_share_normal() {
        let (_, buffers) = torus_buffers();
        for triangle in buffers.normals.chunks_exact(9) {
            assert_eq!(triangle[0..3], triangle[3..6]);
            assert_eq!(triangle[0..3], triangle[6..9]);
        }
    }

    #[test]
    fn test_normals_are_unit_length() {
        let (_, buffers) = torus_buffers();
        for n in buffers.normals.chunks_exact(3) {
            let length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((length - 1.0).abs() < 1e-5);
        }
    }
}

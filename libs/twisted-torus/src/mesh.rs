//! # Quad Mesh
//!
//! Indexed quad mesh built from the generator's flat buffers.

use crate::error::{MeshError, MeshResult};
use glam::DVec3;
use std::collections::HashMap;

/// A quad mesh with vertices and 4-index faces.
///
/// All geometry is kept in f64. Export to f32 only happens at the GPU
/// boundary.
///
/// # Example
///
/// ```rust
/// use twisted_torus::{generate, QuadMesh};
///
/// let (vertices, faces) = generate(1.0, 0.25, 8, 6, 1);
/// let mesh = QuadMesh::from_buffers(&vertices, &faces).unwrap();
/// assert_eq!(mesh.vertex_count(), 48);
/// assert_eq!(mesh.face_count(), 48);
/// assert!(mesh.is_closed());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuadMesh {
    vertices: Vec<DVec3>,
    quads: Vec<[u32; 4]>,
}

impl QuadMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            quads: Vec::with_capacity(face_count),
        }
    }

    /// Builds a mesh from flat `[x, y, z, ...]` and `[a, b, c, d, ...]` buffers.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidBuffer`] when a buffer length is not a
    /// multiple of its stride or a face references a missing vertex.
    pub fn from_buffers(vertices: &[f64], faces: &[u32]) -> MeshResult<Self> {
        if vertices.len() % 3 != 0 {
            return Err(MeshError::invalid_buffer(format!(
                "vertex buffer length {} is not a multiple of 3",
                vertices.len()
            )));
        }
        if faces.len() % 4 != 0 {
            return Err(MeshError::invalid_buffer(format!(
                "face buffer length {} is not a multiple of 4",
                faces.len()
            )));
        }

        let vertex_count = vertices.len() / 3;
        if let Some(&index) = faces.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::invalid_buffer(format!(
                "face index {index} out of range for {vertex_count} vertices"
            )));
        }

        Ok(Self {
            vertices: vertices
                .chunks_exact(3)
                .map(|v| DVec3::new(v[0], v[1], v[2]))
                .collect(),
            quads: faces
                .chunks_exact(4)
                .map(|f| [f[0], f[1], f[2], f[3]])
                .collect(),
        })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of quad faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.quads.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a quad by vertex indices.
    pub fn add_quad(&mut self, quad: [u32; 4]) {
        self.quads.push(quad);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the quads.
    #[inline]
    pub fn quads(&self) -> &[[u32; 4]] {
        &self.quads
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((&first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Unit normal of a quad using Newell's method.
    ///
    /// Robust for slightly non-planar quads, which twisted rings produce.
    /// Returns zero for a degenerate quad.
    pub fn face_normal(&self, face: usize) -> DVec3 {
        let quad = self.quads[face];
        let mut normal = DVec3::ZERO;
        for k in 0..4 {
            let current = self.vertices[quad[k] as usize];
            let next = self.vertices[quad[(k + 1) % 4] as usize];
            normal.x += (current.y - next.y) * (current.z + next.z);
            normal.y += (current.z - next.z) * (current.x + next.x);
            normal.z += (current.x - next.x) * (current.y + next.y);
        }
        normal.normalize_or_zero()
    }

    /// Computes one unit normal per face.
    pub fn face_normals(&self) -> Vec<DVec3> {
        (0..self.quads.len()).map(|f| self.face_normal(f)).collect()
    }

    /// Centroid of a quad's four corners.
    pub fn face_center(&self, face: usize) -> DVec3 {
        let quad = self.quads[face];
        quad.iter()
            .map(|&i| self.vertices[i as usize])
            .sum::<DVec3>()
            / 4.0
    }

    /// Splits every quad `(a, b, c, d)` into `(a, b, c)` and `(a, c, d)`.
    ///
    /// Winding is preserved, so triangle normals face the same way as the
    /// quad's.
    pub fn triangulate(&self) -> Vec<[u32; 3]> {
        self.quads
            .iter()
            .flat_map(|&[a, b, c, d]| [[a, b, c], [a, c, d]])
            .collect()
    }

    /// Number of faces using each vertex.
    pub fn vertex_valence(&self) -> Vec<usize> {
        let mut valence = vec![0; self.vertices.len()];
        for quad in &self.quads {
            for &index in quad {
                valence[index as usize] += 1;
            }
        }
        valence
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All quad indices are valid
    /// - No quad repeats a vertex
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        self.quads.iter().all(|quad| {
            quad.iter().all(|&i| i < vertex_count)
                && (0..4).all(|a| (a + 1..4).all(|b| quad[a] != quad[b]))
        })
    }

    /// True if every undirected edge is shared by exactly two faces.
    ///
    /// A closed surface has no boundary edges.
    pub fn is_closed(&self) -> bool {
        let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
        for (a, b) in self.directed_edges() {
            *edges.entry((a.min(b), a.max(b))).or_default() += 1;
        }
        !edges.is_empty() && edges.values().all(|&count| count == 2)
    }

    /// True if every directed edge occurs once and its reverse occurs once.
    ///
    /// Holds when all faces agree on their front side.
    pub fn is_oriented(&self) -> bool {
        let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
        for edge in self.directed_edges() {
            *edges.entry(edge).or_default() += 1;
        }
        edges
            .iter()
            .all(|(&(a, b), &count)| count == 1 && edges.get(&(b, a)) == Some(&1))
    }

    fn directed_edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.quads
            .iter()
            .flat_map(|quad| (0..4).map(move |k| (quad[k], quad[(k + 1) % 4])))
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports vertices as the generator's flat f64 layout.
    pub fn vertices_f64(&self) -> Vec<f64> {
        self.vertices.iter().flat_map(|v| v.to_array()).collect()
    }

    /// Exports quad indices as a flat u32 array.
    pub fn quad_indices_u32(&self) -> Vec<u32> {
        self.quads.iter().flatten().copied().collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangulate().into_iter().flatten().collect()
    }
}

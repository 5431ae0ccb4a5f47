//! # Mesh Handle
//!
//! WASM-friendly wrapper for a generated object that can be transferred to
//! JavaScript.

use twisted_torus::MeshObject;
use wasm_bindgen::prelude::*;

/// A handle to generated mesh data that can be accessed from JavaScript.
///
/// Carries both the indexed quad mesh (for editing or export) and
/// flat-shaded triangle buffers (for rendering).
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = generate_twisted_torus(1.0, 0.25, 48, 12, 3);
///
/// // Flat-shaded BufferGeometry
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.flat_positions(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.flat_normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.flat_indices(), 1));
///
/// const object = new THREE.Mesh(geometry, material);
/// object.position.fromArray(mesh.location());
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Quad indices as [a, b, c, d, ...]
    quads: Vec<u32>,
    /// Triangle indices into `vertices`
    indices: Vec<u32>,
    /// Unshared triangle corners for flat shading
    flat_positions: Vec<f32>,
    /// One normal per flat corner
    flat_normals: Vec<f32>,
    /// Triangle indices into `flat_positions`
    flat_indices: Vec<u32>,
    /// Object origin as [x, y, z]
    location: Vec<f64>,
    vertex_count: u32,
    face_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of quad faces.
    #[wasm_bindgen(getter)]
    pub fn face_count(&self) -> u32 {
        self.face_count
    }

    /// Returns the number of triangles after splitting each quad.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.face_count * 2
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the quad indices as a Uint32Array.
    ///
    /// Length: face_count * 4
    pub fn quads(&self) -> Vec<u32> {
        self.quads.clone()
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns flat-shaded corner positions as a Float32Array.
    pub fn flat_positions(&self) -> Vec<f32> {
        self.flat_positions.clone()
    }

    /// Returns flat-shaded corner normals as a Float32Array.
    pub fn flat_normals(&self) -> Vec<f32> {
        self.flat_normals.clone()
    }

    /// Returns triangle indices into the flat-shaded corners.
    pub fn flat_indices(&self) -> Vec<u32> {
        self.flat_indices.clone()
    }

    /// Returns the object origin as a Float64Array `[x, y, z]`.
    pub fn location(&self) -> Vec<f64> {
        self.location.clone()
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Creates a MeshHandle from a built object.
    pub fn from_object(object: &MeshObject) -> Self {
        let mesh = &object.mesh;
        let flat = mesh.to_flat_buffers();

        Self {
            vertices: mesh.vertices_f32(),
            quads: mesh.quad_indices_u32(),
            indices: mesh.indices_u32(),
            flat_positions: flat.positions,
            flat_normals: flat.normals,
            flat_indices: flat.indices,
            location: object.location.to_array().to_vec(),
            vertex_count: mesh.vertex_count() as u32,
            face_count: mesh.face_count() as u32,
        }
    }
}

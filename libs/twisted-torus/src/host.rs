//! # Host Boundary
//!
//! The generator knows nothing about scenes or objects. A host implements
//! [`ObjectBuilder`] to turn the two flat buffers into whatever it displays,
//! and [`add_twisted_torus`] runs the add-mesh flow against it:
//!
//! ```text
//! TorusRequest → resolve radii → validate → generate → build_object(flat, origin)
//! ```

use crate::error::MeshResult;
use crate::generator::generate_with;
use crate::generator::Execution;
use crate::mesh::QuadMesh;
use crate::params::TorusRequest;
use config::constants::DEFAULT_OBJECT_NAME;
use glam::DVec3;
use tracing::{info, warn};

/// Consumer of generated buffers.
///
/// Implementations own the buffers once `build_object` is called.
pub trait ObjectBuilder {
    /// Whatever the host hands back for a built object.
    type Handle;

    /// Builds a displayable object from flat vertex and quad buffers.
    ///
    /// `flat_shaded` asks for per-face shading on every face; `origin` is
    /// where the object is placed.
    fn build_object(
        &mut self,
        vertices: Vec<f64>,
        faces: Vec<u32>,
        flat_shaded: bool,
        origin: DVec3,
    ) -> Self::Handle;
}

/// Runs the add-mesh flow: resolve, validate, generate, then build.
///
/// Every face of the built object is flat shaded.
///
/// # Errors
///
/// Returns the error from [`TorusRequest::resolve`]; the builder is not
/// called in that case.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use twisted_torus::{add_twisted_torus, MeshObjectBuilder, TorusRequest};
///
/// let mut builder = MeshObjectBuilder::default();
/// let object = add_twisted_torus(&mut builder, &TorusRequest::default(), DVec3::ZERO).unwrap();
/// assert_eq!(object.name, "TwistedTorus");
/// assert!(object.flat_shaded);
/// ```
pub fn add_twisted_torus<B: ObjectBuilder>(
    builder: &mut B,
    request: &TorusRequest,
    origin: DVec3,
) -> MeshResult<B::Handle> {
    let params = request.resolve().inspect_err(|err| {
        warn!(%err, "rejected twisted torus request");
    })?;

    let (vertices, faces) = generate_with(&params, Execution::Auto);
    info!(
        vertices = vertices.len() / 3,
        faces = faces.len() / 4,
        origin = ?origin,
        "adding twisted torus"
    );

    Ok(builder.build_object(vertices, faces, true, origin))
}

/// A generated object, positioned but not yet part of any scene.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshObject {
    /// Object name
    pub name: String,
    /// Geometry in object space
    pub mesh: QuadMesh,
    /// Object origin in world space
    pub location: DVec3,
    /// Per-face shading requested for every face
    pub flat_shaded: bool,
}

impl MeshObject {
    /// Geometry moved to the object's location.
    pub fn world_mesh(&self) -> QuadMesh {
        let mut mesh = self.mesh.clone();
        mesh.translate(self.location);
        mesh
    }
}

/// Builds [`MeshObject`]s.
#[derive(Debug, Clone)]
pub struct MeshObjectBuilder {
    name: String,
}

impl Default for MeshObjectBuilder {
    fn default() -> Self {
        Self::named(DEFAULT_OBJECT_NAME)
    }
}

impl MeshObjectBuilder {
    /// Builder whose objects carry `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ObjectBuilder for MeshObjectBuilder {
    type Handle = MeshObject;

    fn build_object(
        &mut self,
        vertices: Vec<f64>,
        faces: Vec<u32>,
        flat_shaded: bool,
        origin: DVec3,
    ) -> MeshObject {
        let mut mesh = QuadMesh::with_capacity(vertices.len() / 3, faces.len() / 4);
        for v in vertices.chunks_exact(3) {
            mesh.add_vertex(DVec3::new(v[0], v[1], v[2]));
        }
        for f in faces.chunks_exact(4) {
            mesh.add_quad([f[0], f[1], f[2], f[3]]);
        }

        MeshObject {
            name: self.name.clone(),
            mesh,
            location: origin,
            flat_shaded,
        }
    }
}

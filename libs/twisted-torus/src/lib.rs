//! # Twisted Torus
//!
//! Browser-safe generation of a parametric twisted torus: a torus whose
//! cross section rotates an extra `twists` full turns while it sweeps once
//! around the main ring.
//!
//! ## Architecture
//!
//! ```text
//! TorusRequest ──resolve──▶ GenerationParameters ──generate──▶ (vertices, faces)
//!                                                               │
//!                              ObjectBuilder::build_object ◀────┤
//!                              QuadMesh / FlatBuffers ◀─────────┘
//! ```
//!
//! ## Output
//!
//! - `vertices`: `3 * major_segments * minor_segments` floats, row-major by
//!   major index
//! - `faces`: `4 * major_segments * minor_segments` indices, one quad
//!   anchored at each vertex
//!
//! The surface is closed (genus 1) for every twist count.
//!
//! ## Usage
//!
//! ```rust
//! use twisted_torus::{generate_mesh, GenerationParameters};
//!
//! let params = GenerationParameters::new(1.0, 0.25, 48, 12, 3);
//! let mesh = generate_mesh(&params)?;
//! assert_eq!(mesh.vertex_count(), 576);
//! assert!(mesh.is_closed());
//! # Ok::<(), twisted_torus::MeshError>(())
//! ```

pub mod error;
pub mod export;
pub mod generator;
pub mod host;
pub mod mesh;
pub mod params;

pub use error::{MeshError, MeshResult};
pub use export::FlatBuffers;
pub use generator::{generate, generate_checked, generate_with, Execution, TorusBuffers};
pub use host::{add_twisted_torus, MeshObject, MeshObjectBuilder, ObjectBuilder};
pub use mesh::QuadMesh;
pub use params::{GenerationParameters, RadiusInput, TorusRequest};

/// Validates parameters and generates a [`QuadMesh`].
///
/// # Errors
///
/// Returns the error from [`GenerationParameters::validate`].
pub fn generate_mesh(params: &GenerationParameters) -> MeshResult<QuadMesh> {
    let (vertices, faces) = generate_checked(params)?;
    QuadMesh::from_buffers(&vertices, &faces)
}

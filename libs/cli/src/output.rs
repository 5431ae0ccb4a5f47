//! Text serializations of a built object.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use twisted_torus::MeshObject;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Wavefront OBJ with quad faces
    Obj,
    /// JSON with the raw flat buffers
    Json,
}

#[derive(Serialize)]
struct JsonObject<'a> {
    name: &'a str,
    location: [f64; 3],
    flat_shaded: bool,
    vertices: Vec<f64>,
    faces: Vec<u32>,
}

/// Writes `object` as Wavefront OBJ, one `f` line per quad.
///
/// Vertices are written in world space and face indices are 1-based.
pub fn object_to_obj(object: &MeshObject) -> String {
    let mesh = object.world_mesh();
    let mut out = String::with_capacity(mesh.vertex_count() * 40 + mesh.face_count() * 24);

    out.push_str(&format!("o {}\n", object.name));
    for v in mesh.vertices() {
        out.push_str(&format!("v {} {} {}\n", v.x, v.y, v.z));
    }
    if object.flat_shaded {
        out.push_str("s off\n");
    }
    for [a, b, c, d] in mesh.quads() {
        out.push_str(&format!("f {} {} {} {}\n", a + 1, b + 1, c + 1, d + 1));
    }

    out
}

/// Writes `object` as JSON holding the object-space buffers and origin.
pub fn object_to_json(object: &MeshObject) -> Result<String> {
    let doc = JsonObject {
        name: &object.name,
        location: object.location.to_array(),
        flat_shaded: object.flat_shaded,
        vertices: object.mesh.vertices_f64(),
        faces: object.mesh.quad_indices_u32(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Serializes `object` in `format`.
pub fn render(object: &MeshObject, format: Format) -> Result<String> {
    match format {
        Format::Obj => Ok(object_to_obj(object)),
        Format::Json => object_to_json(object),
    }
}

/// Writes the serialized object to `path`.
pub fn write_file(path: &Path, object: &MeshObject, format: Format) -> Result<()> {
    let text = render(object, format)?;
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

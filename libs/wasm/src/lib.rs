//! WASM-facing entry points for the twisted torus generator.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the `*_internal` helpers to
//! avoid depending on a JS host.
//!
//! ```
//! let mesh = twisted_torus_wasm::generate_twisted_torus_internal(1.0, 0.25, 4, 4, 0).unwrap();
//! assert_eq!(mesh.vertex_count(), 16);
//! ```

use glam::DVec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use twisted_torus::{add_twisted_torus, MeshError, MeshObjectBuilder, TorusRequest};
use wasm_bindgen::prelude::*;

mod mesh_handle;

pub use mesh_handle::MeshHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "twisted-torus-wasm";
/// // init_panic_hook();
/// ```
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Errors surfaced to JavaScript as strings.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The request JSON could not be parsed.
    #[error("Invalid request: {0}")]
    Request(#[from] serde_json::Error),

    /// The parameters were rejected.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// JSON request accepted by [`generate_twisted_torus_json`].
///
/// Every field is optional; missing fields take the operator defaults.
///
/// ```json
/// {
///   "radii": { "mode": "exterior_interior", "exterior_radius": 2.0, "interior_radius": 1.0 },
///   "major_segments": 64,
///   "minor_segments": 16,
///   "twists": 3,
///   "origin": [0.0, 0.0, 1.0]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderRequest {
    /// Torus parameters
    #[serde(flatten)]
    pub torus: TorusRequest,
    /// Object origin
    pub origin: [f64; 3],
}

/// Returns the operator defaults as a JSON request.
///
/// # Examples
/// ```no_run
/// // In JavaScript: const defaults = JSON.parse(default_request());
/// ```
#[wasm_bindgen]
pub fn default_request() -> String {
    default_request_internal()
}

/// Host-only helper behind [`default_request`].
pub fn default_request_internal() -> String {
    serde_json::to_string(&RenderRequest::default()).unwrap_or_default()
}

/// Generates a twisted torus at the origin from the five generator scalars.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when a parameter is rejected.
///
/// # Examples
/// ```no_run
/// // In JavaScript: const mesh = generate_twisted_torus(1.0, 0.25, 48, 12, 2);
/// ```
#[wasm_bindgen]
pub fn generate_twisted_torus(
    major_radius: f64,
    minor_radius: f64,
    major_segments: u32,
    minor_segments: u32,
    twists: u32,
) -> Result<MeshHandle, JsValue> {
    generate_twisted_torus_internal(
        major_radius,
        minor_radius,
        major_segments,
        minor_segments,
        twists,
    )
    .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper behind [`generate_twisted_torus`].
pub fn generate_twisted_torus_internal(
    major_radius: f64,
    minor_radius: f64,
    major_segments: u32,
    minor_segments: u32,
    twists: u32,
) -> Result<MeshHandle, RenderError> {
    let request = RenderRequest {
        torus: TorusRequest {
            radii: twisted_torus::RadiusInput::major_minor(major_radius, minor_radius),
            major_segments,
            minor_segments,
            twists,
        },
        origin: [0.0; 3],
    };
    render(&request)
}

/// Generates a twisted torus from a JSON [`RenderRequest`].
///
/// # Errors
/// Returns a JavaScript error when the JSON is malformed or a parameter is
/// rejected.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = generate_twisted_torus_json(JSON.stringify({ twists: 2, origin: [0, 0, 1] }));
/// ```
#[wasm_bindgen]
pub fn generate_twisted_torus_json(request: &str) -> Result<MeshHandle, JsValue> {
    generate_twisted_torus_json_internal(request)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper behind [`generate_twisted_torus_json`].
pub fn generate_twisted_torus_json_internal(request: &str) -> Result<MeshHandle, RenderError> {
    let request: RenderRequest = serde_json::from_str(request)?;
    render(&request)
}

fn render(request: &RenderRequest) -> Result<MeshHandle, RenderError> {
    let mut builder = MeshObjectBuilder::default();
    let object = add_twisted_torus(
        &mut builder,
        &request.torus,
        DVec3::from_array(request.origin),
    )?;
    Ok(MeshHandle::from_object(&object))
}

#[cfg(test)]
mod tests;

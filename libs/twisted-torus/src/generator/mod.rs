//! # Twisted Torus Generator
//!
//! Sweeps a circular cross section around the z axis while rotating the
//! cross section's phase, producing a flat vertex buffer and a flat quad
//! index buffer.
//!
//! ## Algorithm
//!
//! ```text
//! for major_index in 0..major_segments:
//!     θ        = 2π · major_index / major_segments
//!     twist    = θ · twists
//!     for minor_index in 0..minor_segments:
//!         angle = 2π · minor_index / minor_segments + twist
//!         p     = (R + cos(angle)·r, 0, sin(angle)·r)
//!         emit  rotate_z(θ) · p
//!         emit  quad anchored at (major_index, minor_index)
//! ```
//!
//! Vertices are laid out row-major: `major_index * minor_segments + minor_index`.
//! Each major row owns a disjoint slice of both output buffers, so rows can
//! be filled in any order (or in parallel) without changing the result.

use crate::error::MeshResult;
use crate::params::GenerationParameters;
use config::constants::PARALLEL_THRESHOLD;
use glam::{DQuat, DVec3};
use rayon::prelude::*;
use std::f64::consts::PI;
use tracing::debug;

/// Flat `(vertices, faces)` buffers.
///
/// `vertices` holds `[x, y, z, x, y, z, ...]`; `faces` holds four vertex
/// indices per quad.
pub type TorusBuffers = (Vec<f64>, Vec<u32>);

/// How rows are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// Parallel above `PARALLEL_THRESHOLD` vertices, sequential below.
    #[default]
    Auto,
    /// Always fill rows on the calling thread.
    Sequential,
    /// Always fill rows on the rayon pool.
    Parallel,
}

/// Generates the twisted torus buffers.
///
/// This is the raw generator: it performs no validation and propagates
/// whatever it is given. Zero segments in either direction yields empty
/// buffers. Use [`generate_checked`] to have preconditions enforced.
///
/// # Example
///
/// ```rust
/// use twisted_torus::generate;
///
/// let (vertices, faces) = generate(1.0, 0.25, 4, 4, 0);
/// assert_eq!(vertices.len(), 3 * 16);
/// assert_eq!(faces.len(), 4 * 16);
/// assert_eq!(&vertices[..3], &[1.25, 0.0, 0.0]);
/// ```
pub fn generate(
    major_radius: f64,
    minor_radius: f64,
    major_segments: u32,
    minor_segments: u32,
    twists: u32,
) -> TorusBuffers {
    let params = GenerationParameters::new(
        major_radius,
        minor_radius,
        major_segments,
        minor_segments,
        twists,
    );
    generate_with(&params, Execution::Auto)
}

/// Generates buffers after checking the parameters.
///
/// # Errors
///
/// Returns the error from [`GenerationParameters::validate`].
pub fn generate_checked(params: &GenerationParameters) -> MeshResult<TorusBuffers> {
    params.validate()?;
    Ok(generate_with(params, Execution::Auto))
}

/// Generates buffers with an explicit row schedule.
///
/// Every schedule produces bit-identical output.
pub fn generate_with(params: &GenerationParameters, execution: Execution) -> TorusBuffers {
    let tot_verts = params.vertex_count();
    if tot_verts == 0 {
        return (Vec::new(), Vec::new());
    }

    let parallel = match execution {
        Execution::Auto => tot_verts >= PARALLEL_THRESHOLD,
        Execution::Sequential => false,
        Execution::Parallel => true,
    };

    debug!(
        major_segments = params.major_segments,
        minor_segments = params.minor_segments,
        twists = params.twists,
        tot_verts,
        parallel,
        "generating twisted torus"
    );

    let minor = params.minor_segments as usize;
    let mut vertices = vec![0.0; tot_verts * 3];
    let mut faces = vec![0u32; tot_verts * 4];

    if parallel {
        vertices
            .par_chunks_mut(minor * 3)
            .zip(faces.par_chunks_mut(minor * 4))
            .enumerate()
            .for_each(|(major_index, (row_vertices, row_faces))| {
                fill_row(params, major_index, row_vertices, row_faces);
            });
    } else {
        vertices
            .chunks_mut(minor * 3)
            .zip(faces.chunks_mut(minor * 4))
            .enumerate()
            .for_each(|(major_index, (row_vertices, row_faces))| {
                fill_row(params, major_index, row_vertices, row_faces);
            });
    }

    (vertices, faces)
}

/// Sweep angle of a major row about the z axis.
#[inline]
pub fn sweep_angle(major_index: u32, major_segments: u32) -> f64 {
    2.0 * PI * major_index as f64 / major_segments as f64
}

/// Extra phase added to every minor angle of a major row.
///
/// At `major_index == major_segments` this is `2π · twists`, so the last row
/// connects to the first without a seam.
///
/// # Example
///
/// ```rust
/// use std::f64::consts::PI;
/// use twisted_torus::generator::twist_phase;
///
/// assert_eq!(twist_phase(0, 48, 3), 0.0);
/// assert!((twist_phase(48, 48, 3) - 6.0 * PI).abs() < 1e-12);
/// ```
#[inline]
pub fn twist_phase(major_index: u32, major_segments: u32, twists: u32) -> f64 {
    sweep_angle(major_index, major_segments) * twists as f64
}

/// Position of the grid vertex `(major_index, minor_index)`.
///
/// Indices past the last row or column are evaluated on the continuous
/// surface, which is how the seam closure is checked.
pub fn vertex_position(params: &GenerationParameters, major_index: u32, minor_index: u32) -> DVec3 {
    let rotation = DQuat::from_axis_angle(
        DVec3::Z,
        sweep_angle(major_index, params.major_segments),
    );
    let rot_twist = twist_phase(major_index, params.major_segments, params.twists);
    rotation * cross_section_point(params, minor_index, rot_twist)
}

/// Untransformed point of the cross section in the x-z plane.
#[inline]
fn cross_section_point(params: &GenerationParameters, minor_index: u32, rot_twist: f64) -> DVec3 {
    let angle = 2.0 * PI * minor_index as f64 / params.minor_segments as f64 + rot_twist;
    DVec3::new(
        params.major_radius + angle.cos() * params.minor_radius,
        0.0,
        angle.sin() * params.minor_radius,
    )
}

/// Quad anchored at grid vertex `(major_index, minor_index)`.
///
/// The neighbours are `i2` (next minor, wrapping to the start of the *same*
/// row), `i3` (next major) and `i4` (next in both). Each neighbour wraps past
/// `tot_verts` on its own. The candidate quad is `(i1, i3, i4, i2)`; when
/// `i2` is zero the quad is stored rotated as `(i2, i1, i3, i4)` so the last
/// slot never holds index 0.
pub(crate) fn quad_indices(
    major_index: usize,
    minor_index: usize,
    minor_segments: usize,
    tot_verts: usize,
) -> [u32; 4] {
    let row_start = major_index * minor_segments;
    let i1 = row_start + minor_index;

    let (i2, i3, i4) = if minor_index + 1 == minor_segments {
        (row_start, i1 + minor_segments, row_start + minor_segments)
    } else {
        (i1 + 1, i1 + minor_segments, i1 + minor_segments + 1)
    };

    let wrap = |index: usize| {
        if index >= tot_verts {
            index - tot_verts
        } else {
            index
        }
    };
    let (i2, i3, i4) = (wrap(i2), wrap(i3), wrap(i4));

    let quad = if i2 != 0 {
        [i1, i3, i4, i2]
    } else {
        [i2, i1, i3, i4]
    };
    quad.map(|index| index as u32)
}

/// Fills one major row of both buffers.
fn fill_row(
    params: &GenerationParameters,
    major_index: usize,
    vertices: &mut [f64],
    faces: &mut [u32],
) {
    let minor_segments = params.minor_segments as usize;
    let tot_verts = params.vertex_count();

    let rotation = DQuat::from_axis_angle(
        DVec3::Z,
        sweep_angle(major_index as u32, params.major_segments),
    );
    let rot_twist = twist_phase(major_index as u32, params.major_segments, params.twists);

    for (minor_index, (vertex, face)) in vertices
        .chunks_exact_mut(3)
        .zip(faces.chunks_exact_mut(4))
        .enumerate()
    {
        let point = rotation * cross_section_point(params, minor_index as u32, rot_twist);
        vertex.copy_from_slice(&point.to_array());
        face.copy_from_slice(&quad_indices(
            major_index,
            minor_index,
            minor_segments,
            tot_verts,
        ));
    }
}

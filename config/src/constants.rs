//! # Configuration Constants
//!
//! Centralized constants for the twisted torus generator. Operator defaults,
//! parameter limits and safety bounds are defined here.
//!
//! ## Categories
//!
//! - **Defaults**: Values the add-mesh operator starts from
//! - **Limits**: Parameter bounds and mesh size safety limits
//! - **Execution**: Parallel generation threshold

// =============================================================================
// OPERATOR DEFAULTS
// =============================================================================

/// Default distance from the origin to the centre of the cross section.
pub const DEFAULT_MAJOR_RADIUS: f64 = 1.0;

/// Default radius of the torus cross section.
pub const DEFAULT_MINOR_RADIUS: f64 = 0.25;

/// Default number of segments around the main ring.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_MAJOR_SEGMENTS, DEFAULT_MINOR_SEGMENTS};
///
/// let vertex_count = DEFAULT_MAJOR_SEGMENTS * DEFAULT_MINOR_SEGMENTS;
/// assert_eq!(vertex_count, 576);
/// ```
pub const DEFAULT_MAJOR_SEGMENTS: u32 = 48;

/// Default number of segments around the cross section.
pub const DEFAULT_MINOR_SEGMENTS: u32 = 12;

/// Default number of extra cross-section turns along the main ring.
///
/// Zero twists produces a plain torus.
pub const DEFAULT_TWISTS: u32 = 0;

/// Default total exterior radius used by the exterior/interior input mode.
pub const DEFAULT_EXTERIOR_RADIUS: f64 = 1.0;

/// Default interior (hole) radius used by the exterior/interior input mode.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_EXTERIOR_RADIUS, DEFAULT_INTERIOR_RADIUS};
///
/// // halfWidth = (exterior - interior) / 2
/// let half_width = (DEFAULT_EXTERIOR_RADIUS - DEFAULT_INTERIOR_RADIUS) * 0.5;
/// assert_eq!(half_width, 0.25);
/// ```
pub const DEFAULT_INTERIOR_RADIUS: f64 = 0.5;

/// Name given to objects built from a generated mesh.
pub const DEFAULT_OBJECT_NAME: &str = "TwistedTorus";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum segment count in either direction.
///
/// Fewer than three segments cannot close a ring, so the generator's
/// precondition is `segments >= MIN_SEGMENTS`.
pub const MIN_SEGMENTS: u32 = 3;

/// Maximum segment count accepted by the operator in either direction.
pub const MAX_SEGMENTS: u32 = 256;

/// Smallest radius the operator accepts for any radius input.
pub const MIN_RADIUS: f64 = 0.01;

/// Largest radius the operator accepts for any radius input.
pub const MAX_RADIUS: f64 = 100.0;

/// Largest twist count the operator accepts.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_TWISTS;
///
/// let requested = 25u32;
/// assert_eq!(requested.min(MAX_TWISTS), 10);
/// ```
pub const MAX_TWISTS: u32 = 10;

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extreme segment counts
/// passed to the validated entry points.
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_SEGMENTS, MAX_VERTICES};
///
/// let largest_operator_mesh = (MAX_SEGMENTS * MAX_SEGMENTS) as usize;
/// assert!(largest_operator_mesh < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of quad faces in a single mesh.
pub const MAX_FACES: usize = 10_000_000;

// =============================================================================
// EXECUTION CONSTANTS
// =============================================================================

/// Vertex count at which generation switches to the rayon thread pool.
///
/// Small meshes are faster to build on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 16_384;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps a radius into the operator range `[MIN_RADIUS, MAX_RADIUS]`.
///
/// # Example
///
/// ```rust
/// use config::constants::{clamp_radius, MAX_RADIUS, MIN_RADIUS};
///
/// assert_eq!(clamp_radius(0.0), MIN_RADIUS);
/// assert_eq!(clamp_radius(250.0), MAX_RADIUS);
/// assert_eq!(clamp_radius(2.5), 2.5);
/// ```
#[inline]
pub fn clamp_radius(radius: f64) -> f64 {
    radius.clamp(MIN_RADIUS, MAX_RADIUS)
}

/// Clamps a segment count into the operator range `[MIN_SEGMENTS, MAX_SEGMENTS]`.
///
/// # Example
///
/// ```rust
/// use config::constants::clamp_segments;
///
/// assert_eq!(clamp_segments(1), 3);
/// assert_eq!(clamp_segments(1024), 256);
/// ```
#[inline]
pub fn clamp_segments(segments: u32) -> u32 {
    segments.clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

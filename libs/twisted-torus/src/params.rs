//! # Generation Parameters
//!
//! The five scalars the generator consumes, and the host-facing request type
//! that can describe the radii either directly or as exterior/interior
//! extents.
//!
//! ## Radius Modes
//!
//! ```text
//! MajorMinor        → major_radius, minor_radius used as given
//! ExteriorInterior  → half_width   = (exterior - interior) / 2
//!                     major_radius = interior + half_width
//!                     minor_radius = half_width
//! ```
//!
//! The exterior/interior conversion always runs in [`TorusRequest::resolve`],
//! before any vertex is generated.

use crate::error::{MeshError, MeshResult};
use config::constants::{
    clamp_radius, clamp_segments, DEFAULT_EXTERIOR_RADIUS, DEFAULT_INTERIOR_RADIUS,
    DEFAULT_MAJOR_RADIUS, DEFAULT_MAJOR_SEGMENTS, DEFAULT_MINOR_RADIUS, DEFAULT_MINOR_SEGMENTS,
    DEFAULT_TWISTS, MAX_FACES, MAX_TWISTS, MAX_VERTICES, MIN_SEGMENTS,
};
use serde::{Deserialize, Serialize};

/// Parameters consumed by the generator.
///
/// # Example
///
/// ```rust
/// use twisted_torus::GenerationParameters;
///
/// let params = GenerationParameters::new(1.0, 0.25, 4, 4, 0);
/// assert_eq!(params.vertex_count(), 16);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParameters {
    /// Distance from the origin to the centre of the cross section
    pub major_radius: f64,
    /// Radius of the cross section
    pub minor_radius: f64,
    /// Segments around the main ring
    pub major_segments: u32,
    /// Segments around the cross section
    pub minor_segments: u32,
    /// Extra full turns of the cross section over one trip around the ring
    pub twists: u32,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            major_radius: DEFAULT_MAJOR_RADIUS,
            minor_radius: DEFAULT_MINOR_RADIUS,
            major_segments: DEFAULT_MAJOR_SEGMENTS,
            minor_segments: DEFAULT_MINOR_SEGMENTS,
            twists: DEFAULT_TWISTS,
        }
    }
}

impl GenerationParameters {
    /// Creates parameters from the five generator scalars.
    pub fn new(
        major_radius: f64,
        minor_radius: f64,
        major_segments: u32,
        minor_segments: u32,
        twists: u32,
    ) -> Self {
        Self {
            major_radius,
            minor_radius,
            major_segments,
            minor_segments,
            twists,
        }
    }

    /// Number of grid points, computed without overflow on any target.
    #[inline]
    pub fn grid_size(&self) -> u64 {
        u64::from(self.major_segments) * u64::from(self.minor_segments)
    }

    /// Number of vertices the generator will emit.
    ///
    /// Saturates at `usize::MAX` when the grid does not fit the target's
    /// address space; [`validate`](Self::validate) rejects such grids.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        usize::try_from(self.grid_size()).unwrap_or(usize::MAX)
    }

    /// Number of quad faces the generator will emit.
    ///
    /// One quad is anchored at every vertex, so this equals the vertex count.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.vertex_count()
    }

    /// Checks the generator preconditions.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidParameter`] for a non-finite or
    /// non-positive radius or a segment count below three, and
    /// [`MeshError::TooManyVertices`] / [`MeshError::TooManyFaces`] when the
    /// grid exceeds the configured safety limits.
    pub fn validate(&self) -> MeshResult<()> {
        check_radius("major_radius", self.major_radius)?;
        check_radius("minor_radius", self.minor_radius)?;
        check_segments("major_segments", self.major_segments)?;
        check_segments("minor_segments", self.minor_segments)?;

        // Compared in u64 so a 32-bit usize cannot wrap under the limit.
        let grid = self.grid_size();
        if grid > MAX_VERTICES as u64 {
            return Err(MeshError::TooManyVertices {
                count: self.vertex_count(),
                max: MAX_VERTICES,
            });
        }
        if grid > MAX_FACES as u64 {
            return Err(MeshError::TooManyFaces {
                count: self.face_count(),
                max: MAX_FACES,
            });
        }
        Ok(())
    }

    /// Returns a copy with every field pulled into the operator's ranges.
    ///
    /// Radii are clamped to `[0.01, 100]`, segments to `[3, 256]` and twists
    /// to `[0, 10]`. NaN radii are not repaired; [`validate`](Self::validate)
    /// still rejects them.
    pub fn clamp_to_limits(self) -> Self {
        Self {
            major_radius: clamp_radius(self.major_radius),
            minor_radius: clamp_radius(self.minor_radius),
            major_segments: clamp_segments(self.major_segments),
            minor_segments: clamp_segments(self.minor_segments),
            twists: self.twists.min(MAX_TWISTS),
        }
    }
}

fn check_radius(name: &'static str, value: f64) -> MeshResult<()> {
    if !value.is_finite() {
        return Err(MeshError::invalid_parameter(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(MeshError::invalid_parameter(name, value, "must be positive"));
    }
    Ok(())
}

fn check_segments(name: &'static str, value: u32) -> MeshResult<()> {
    if value < MIN_SEGMENTS {
        return Err(MeshError::invalid_parameter(
            name,
            value,
            format!("must be at least {MIN_SEGMENTS}"),
        ));
    }
    Ok(())
}

/// How the host describes the torus radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RadiusInput {
    /// Radii given directly.
    MajorMinor {
        /// Distance from the origin to the centre of the cross section
        major_radius: f64,
        /// Radius of the cross section
        minor_radius: f64,
    },
    /// Radii derived from the overall extents of the ring.
    ExteriorInterior {
        /// Distance from the origin to the outermost point of the tube
        exterior_radius: f64,
        /// Distance from the origin to the innermost point of the tube
        interior_radius: f64,
    },
}

impl Default for RadiusInput {
    fn default() -> Self {
        Self::major_minor(DEFAULT_MAJOR_RADIUS, DEFAULT_MINOR_RADIUS)
    }
}

impl RadiusInput {
    /// Major/minor radius input.
    pub fn major_minor(major_radius: f64, minor_radius: f64) -> Self {
        Self::MajorMinor {
            major_radius,
            minor_radius,
        }
    }

    /// Exterior/interior radius input.
    pub fn exterior_interior(exterior_radius: f64, interior_radius: f64) -> Self {
        Self::ExteriorInterior {
            exterior_radius,
            interior_radius,
        }
    }

    /// Operator defaults for the exterior/interior mode.
    pub fn default_exterior_interior() -> Self {
        Self::exterior_interior(DEFAULT_EXTERIOR_RADIUS, DEFAULT_INTERIOR_RADIUS)
    }

    /// Returns `(major_radius, minor_radius)`.
    pub fn resolve(&self) -> (f64, f64) {
        match *self {
            Self::MajorMinor {
                major_radius,
                minor_radius,
            } => (major_radius, minor_radius),
            Self::ExteriorInterior {
                exterior_radius,
                interior_radius,
            } => {
                let half_width = (exterior_radius - interior_radius) * 0.5;
                (interior_radius + half_width, half_width)
            }
        }
    }
}

/// A host request to add a twisted torus.
///
/// # Example
///
/// ```rust
/// use twisted_torus::{RadiusInput, TorusRequest};
///
/// let request = TorusRequest {
///     radii: RadiusInput::exterior_interior(2.0, 1.0),
///     ..TorusRequest::default()
/// };
/// let params = request.resolve().unwrap();
/// assert_eq!(params.major_radius, 1.5);
/// assert_eq!(params.minor_radius, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusRequest {
    /// Radius input in either mode
    pub radii: RadiusInput,
    /// Segments around the main ring
    pub major_segments: u32,
    /// Segments around the cross section
    pub minor_segments: u32,
    /// Extra full turns of the cross section
    pub twists: u32,
}

impl Default for TorusRequest {
    fn default() -> Self {
        Self {
            radii: RadiusInput::default(),
            major_segments: DEFAULT_MAJOR_SEGMENTS,
            minor_segments: DEFAULT_MINOR_SEGMENTS,
            twists: DEFAULT_TWISTS,
        }
    }
}

impl From<GenerationParameters> for TorusRequest {
    fn from(params: GenerationParameters) -> Self {
        Self {
            radii: RadiusInput::major_minor(params.major_radius, params.minor_radius),
            major_segments: params.major_segments,
            minor_segments: params.minor_segments,
            twists: params.twists,
        }
    }
}

impl TorusRequest {
    /// Converts the request into generator parameters.
    ///
    /// The exterior/interior conversion is applied here, so the generator
    /// only ever sees major/minor radii.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidParameter`] when the exterior radius does
    /// not exceed the interior radius, or when the resolved parameters fail
    /// [`GenerationParameters::validate`].
    pub fn resolve(&self) -> MeshResult<GenerationParameters> {
        if let RadiusInput::ExteriorInterior {
            exterior_radius,
            interior_radius,
        } = self.radii
        {
            if !exterior_radius.is_finite()
                || !interior_radius.is_finite()
                || exterior_radius <= interior_radius
            {
                return Err(MeshError::invalid_parameter(
                    "exterior_radius",
                    exterior_radius,
                    format!("must exceed interior_radius ({interior_radius})"),
                ));
            }
        }

        let (major_radius, minor_radius) = self.radii.resolve();
        let params = GenerationParameters::new(
            major_radius,
            minor_radius,
            self.major_segments,
            self.minor_segments,
            self.twists,
        );
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_match_operator() {
        let params = GenerationParameters::default();
        assert_eq!(params.major_radius, 1.0);
        assert_eq!(params.minor_radius, 0.25);
        assert_eq!(params.major_segments, 48);
        assert_eq!(params.minor_segments, 12);
        assert_eq!(params.twists, 0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_exterior_interior_derivation() {
        let (major, minor) = RadiusInput::exterior_interior(3.0, 1.0).resolve();
        assert_relative_eq!(major, 2.0);
        assert_relative_eq!(minor, 1.0);
    }

    #[test]
    fn test_major_minor_passthrough() {
        let (major, minor) = RadiusInput::major_minor(2.5, 0.1).resolve();
        assert_eq!(major, 2.5);
        assert_eq!(minor, 0.1);
    }

    #[test]
    fn test_validate_rejects_small_segments() {
        let err = GenerationParameters::new(1.0, 0.25, 2, 12, 0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            MeshError::InvalidParameter {
                name: "major_segments",
                ..
            }
        ));

        let err = GenerationParameters::new(1.0, 0.25, 12, 0, 0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            MeshError::InvalidParameter {
                name: "minor_segments",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_rejects_bad_radii() {
        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = GenerationParameters::new(radius, 0.25, 8, 8, 0)
                .validate()
                .unwrap_err();
            assert!(matches!(
                err,
                MeshError::InvalidParameter {
                    name: "major_radius",
                    ..
                }
            ));

            let err = GenerationParameters::new(1.0, radius, 8, 8, 0)
                .validate()
                .unwrap_err();
            assert!(matches!(
                err,
                MeshError::InvalidParameter {
                    name: "minor_radius",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_validate_rejects_oversized_grid() {
        let err = GenerationParameters::new(1.0, 0.25, 100_000, 1_000, 0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, MeshError::TooManyVertices { .. }));
    }

    #[test]
    fn test_validate_rejects_grid_past_u32_range() {
        // 65536 * 65537 wraps to 65536 in 32-bit arithmetic.
        let params = GenerationParameters::new(1.0, 0.25, 65_536, 65_537, 0);
        assert_eq!(params.grid_size(), 65_536 * 65_537);
        assert!(params.grid_size() > u64::from(u32::MAX));

        let err = params.validate().unwrap_err();
        match err {
            MeshError::TooManyVertices { count, max } => {
                assert_eq!(max, MAX_VERTICES);
                assert!(count > MAX_VERTICES);
            }
            other => panic!("expected TooManyVertices, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_accepts_any_twist_count() {
        let params = GenerationParameters::new(1.0, 0.25, 3, 3, u32::MAX);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_clamp_to_limits() {
        let params = GenerationParameters::new(0.0, 500.0, 1, 1000, 99).clamp_to_limits();
        assert_eq!(params.major_radius, 0.01);
        assert_eq!(params.minor_radius, 100.0);
        assert_eq!(params.major_segments, 3);
        assert_eq!(params.minor_segments, 256);
        assert_eq!(params.twists, 10);
    }

    #[test]
    fn test_request_resolves_exterior_interior_before_validation() {
        let request = TorusRequest {
            radii: RadiusInput::default_exterior_interior(),
            ..TorusRequest::default()
        };
        let params = request.resolve().unwrap();
        assert_relative_eq!(params.major_radius, 0.75);
        assert_relative_eq!(params.minor_radius, 0.25);
    }

    #[test]
    fn test_request_rejects_inverted_extents() {
        let request = TorusRequest {
            radii: RadiusInput::exterior_interior(0.5, 1.0),
            ..TorusRequest::default()
        };
        let err = request.resolve().unwrap_err();
        assert!(matches!(
            err,
            MeshError::InvalidParameter {
                name: "exterior_radius",
                ..
            }
        ));
    }

    #[test]
    fn test_request_from_parameters() {
        let params = GenerationParameters::new(2.0, 0.5, 6, 5, 3);
        let request = TorusRequest::from(params);
        assert_eq!(request.resolve().unwrap(), params);
    }

    #[test]
    fn test_request_json_defaults() {
        let request: TorusRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, TorusRequest::default());
    }

    #[test]
    fn test_request_json_exterior_interior() {
        let json = r#"{
            "radii": { "mode": "exterior_interior", "exterior_radius": 2.0, "interior_radius": 1.0 },
            "major_segments": 24,
            "twists": 2
        }"#;
        let request: TorusRequest = serde_json::from_str(json).unwrap();
        let params = request.resolve().unwrap();
        assert_relative_eq!(params.major_radius, 1.5);
        assert_relative_eq!(params.minor_radius, 0.5);
        assert_eq!(params.major_segments, 24);
        assert_eq!(params.minor_segments, 12);
        assert_eq!(params.twists, 2);
    }
}

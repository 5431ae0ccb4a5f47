//! # Mesh Errors
//!
//! Error types for twisted torus generation.
//!
//! ## Error Policy
//!
//! - The raw generator never fails; it propagates whatever it is given
//! - Validated entry points report precondition violations explicitly
//! - Errors carry the offending value for debugging

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// A generation parameter violates its precondition.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name as the host knows it
        name: &'static str,
        /// Offending value, formatted
        value: String,
        /// Which precondition failed
        reason: String,
    },

    /// Flat vertex or face buffers are malformed.
    #[error("Invalid buffer: {message}")]
    InvalidBuffer {
        /// What is wrong with the buffer
        message: String,
    },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Requested vertex count
        count: usize,
        /// Configured limit
        max: usize,
    },

    /// Too many faces
    #[error("Too many faces: {count} (max: {max})")]
    TooManyFaces {
        /// Requested face count
        count: usize,
        /// Configured limit
        max: usize,
    },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid buffer error.
    pub fn invalid_buffer(message: impl Into<String>) -> Self {
        Self::InvalidBuffer {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

//! # Config Crate
//!
//! Centralized configuration constants for the twisted torus generator.
//! Operator defaults, parameter limits and mesh safety bounds are defined
//! here so every crate in the workspace agrees on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_MAJOR_RADIUS, DEFAULT_MINOR_RADIUS, MIN_SEGMENTS};
//!
//! assert!(DEFAULT_MAJOR_RADIUS > DEFAULT_MINOR_RADIUS);
//! assert_eq!(MIN_SEGMENTS, 3);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Operator Compatible**: Defaults and limits match the add-mesh operator

pub mod constants;

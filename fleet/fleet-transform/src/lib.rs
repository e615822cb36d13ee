//! 2D frame transforms for fleet coordination.
//!
//! Robots localize in their own navigation frame while the fleet manager
//! plans in a shared map frame. This crate converts poses between the two:
//!
//! - [`Transformation`] - Rotation, uniform scale and translation between two frames
//! - [`transform`] - Maps a pose `(x, y, θ)` through a [`Transformation`]
//! - [`transform_position`] / [`transform_heading`] - The positional and heading halves
//! - [`normalize_angle`] - Wraps a heading into `[-π, π)` for callers that need it
//!
//! # Conventions
//!
//! - Angles are radians, counter-clockwise positive.
//! - Positions are rotated, then scaled, then translated. Scale is uniform,
//!   so rotating and scaling commute.
//! - Headings pick up the rotation and are never wrapped by [`transform`].
//!
//! # Layer 0 Crate
//!
//! Pure math with no I/O. Where the parameters come from (config file,
//! calibration routine) is the caller's business.
//!
//! # Example
//!
//! ```
//! use fleet_transform::{Transformation, transform};
//! use nalgebra::{Vector2, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let robot_to_map = Transformation::new(FRAC_PI_2, 1.0, Vector2::new(0.0, 0.0)).unwrap();
//! let pose = transform(&robot_to_map, &Vector3::new(1.0, 0.0, 0.0));
//!
//! assert!(pose.x.abs() < 1e-12);
//! assert!((pose.y - 1.0).abs() < 1e-12);
//! assert!((pose.z - FRAC_PI_2).abs() < 1e-12);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod pose;
mod transformation;

pub use error::{TransformError, TransformResult};
pub use pose::{normalize_angle, transform, transform_heading, transform_position};
pub use transformation::Transformation;

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        TransformError, TransformResult, Transformation, normalize_angle, transform,
        transform_heading, transform_position,
    };
}

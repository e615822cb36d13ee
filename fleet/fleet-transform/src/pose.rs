//! Applying a [`Transformation`] to poses, positions and headings.
//!
//! A pose is `(x, y, θ)` packed into a [`Vector3`], with the heading `θ` in
//! radians. Headings are never wrapped here; use [`normalize_angle`] when a
//! canonical range is needed.

use std::f64::consts::{PI, TAU};

use nalgebra::{Point2, Rotation2, Vector3};

use crate::transformation::Transformation;

/// Maps a pose `(x, y, θ)` from the source frame into the target frame.
///
/// The position becomes `scale * R(rotation) * (x, y) + translation` and the
/// heading becomes `θ + rotation`. The heading is not normalized, so repeated
/// application accumulates rotation without wraparound.
///
/// Converting in the other direction means passing the transformation that
/// describes that direction.
///
/// # Example
///
/// ```
/// use fleet_transform::{Transformation, transform};
/// use nalgebra::{Vector2, Vector3};
///
/// let robot_to_map = Transformation::new(0.0, 2.0, Vector2::new(10.0, 0.0)).unwrap();
/// let pose = transform(&robot_to_map, &Vector3::new(3.0, 4.0, 0.25));
/// assert_eq!(pose, Vector3::new(16.0, 8.0, 0.25));
/// ```
#[must_use]
pub fn transform(transformation: &Transformation, pose: &Vector3<f64>) -> Vector3<f64> {
    let position = transform_position(transformation, &Point2::new(pose.x, pose.y));
    let heading = transform_heading(transformation, pose.z);
    Vector3::new(position.x, position.y, heading)
}

/// Maps a bare position from the source frame into the target frame.
///
/// This is the positional half of [`transform`].
#[must_use]
pub fn transform_position(
    transformation: &Transformation,
    position: &Point2<f64>,
) -> Point2<f64> {
    debug_assert!(
        transformation.scale() != 0.0,
        "transformation with zero scale"
    );

    let rotated = Rotation2::new(transformation.rotation()) * position.coords;
    Point2::from(rotated * transformation.scale() + transformation.translation())
}

/// Maps a heading (radians) from the source frame into the target frame.
///
/// This is the heading half of [`transform`]: `heading + rotation`, unwrapped.
#[must_use]
pub fn transform_heading(transformation: &Transformation, heading: f64) -> f64 {
    heading + transformation.rotation()
}

/// Normalize angle to [-π, π).
///
/// # Example
///
/// ```
/// use fleet_transform::normalize_angle;
/// use std::f64::consts::PI;
///
/// assert!((normalize_angle(PI / 2.0) - PI / 2.0).abs() < 1e-12);
/// assert!((normalize_angle(2.5 * PI) - PI / 2.0).abs() < 1e-12);
/// assert!((normalize_angle(PI) + PI).abs() < 1e-12);
/// ```
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle % TAU;
    if a >= PI {
        a -= TAU;
    } else if a < -PI {
        a += TAU;
    }
    a
}

//! Similarity transform between two 2D Cartesian frames.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TransformError, TransformResult};

/// Rotation, uniform scale and translation relating two 2D frames.
///
/// A position `p` in the source frame maps to `scale * R(rotation) * p + translation`
/// in the target frame, and a heading `θ` maps to `θ + rotation`.
///
/// The same type describes either direction (robot frame to fleet map or the
/// reverse); which one is up to the caller that builds it. Once built it never
/// changes.
///
/// # Example
///
/// ```
/// use fleet_transform::Transformation;
/// use nalgebra::Vector2;
///
/// let t = Transformation::new(0.5, 2.0, Vector2::new(1.0, -3.0)).unwrap();
/// assert_eq!(t.rotation(), 0.5);
/// assert_eq!(t.scale(), 2.0);
/// assert_eq!(t.translation(), Vector2::new(1.0, -3.0));
///
/// // Zero scale collapses every position onto the translation and is rejected.
/// assert!(Transformation::new(0.5, 0.0, Vector2::zeros()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TransformationData", into = "TransformationData")]
pub struct Transformation {
    rotation: f64,
    scale: f64,
    translation: Vector2<f64>,
}

/// Plain field layout used for (de)serialization.
#[derive(Serialize, Deserialize)]
struct TransformationData {
    rotation: f64,
    scale: f64,
    translation: TranslationData,
}

#[derive(Serialize, Deserialize)]
struct TranslationData {
    x: f64,
    y: f64,
}

impl From<Transformation> for TransformationData {
    fn from(t: Transformation) -> Self {
        Self {
            rotation: t.rotation,
            scale: t.scale,
            translation: TranslationData {
                x: t.translation.x,
                y: t.translation.y,
            },
        }
    }
}

impl TryFrom<TransformationData> for Transformation {
    type Error = TransformError;

    fn try_from(data: TransformationData) -> TransformResult<Self> {
        Self::new(
            data.rotation,
            data.scale,
            Vector2::new(data.translation.x, data.translation.y),
        )
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transformation {
    /// Creates a transformation from its rotation (radians), uniform scale
    /// and translation.
    ///
    /// `rotation` is stored as given, without wrapping. A negative `scale`
    /// is accepted and acts as a point reflection combined with scaling.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameter`] if `scale` is zero.
    pub fn new(rotation: f64, scale: f64, translation: Vector2<f64>) -> TransformResult<Self> {
        if scale == 0.0 {
            debug!(rotation, "rejecting transformation with zero scale");
            return Err(TransformError::invalid_parameter("scale must be non-zero"));
        }

        Ok(Self {
            rotation,
            scale,
            translation,
        })
    }

    /// Creates the identity transformation (no rotation, unit scale, no offset).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            rotation: 0.0,
            scale: 1.0,
            translation: Vector2::zeros(),
        }
    }

    /// Creates a transformation with only translation.
    #[must_use]
    pub fn from_translation(translation: Vector2<f64>) -> Self {
        Self {
            rotation: 0.0,
            scale: 1.0,
            translation,
        }
    }

    /// Creates a transformation with only rotation.
    #[must_use]
    pub fn from_rotation(rotation: f64) -> Self {
        Self {
            rotation,
            scale: 1.0,
            translation: Vector2::zeros(),
        }
    }

    /// Rotation between the two frames, in radians.
    #[must_use]
    pub const fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Scale factor from source-frame lengths to target-frame lengths.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Offset added after rotating and scaling, in target-frame units.
    #[must_use]
    pub const fn translation(&self) -> Vector2<f64> {
        self.translation
    }

    /// Returns true if this is approximately the identity transformation.
    ///
    /// The rotation is compared as stored, so a full turn of `2π` is not
    /// treated as identity: it still shifts headings by `2π`.
    #[must_use]
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.rotation.abs() < epsilon
            && (self.scale - 1.0).abs() < epsilon
            && self.translation.norm() < epsilon
    }
}

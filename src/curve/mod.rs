mod hermite;

pub use hermite::{point, resample, resample_offset, segment_points, tangent};

use crate::error::{CurveError, Result};
use crate::math::{try_normalize, Point3, Vector2, Vector3};

/// An oriented control node anchoring one end of a Hermite segment.
///
/// Each node carries a position, a unit `forward` direction scaled by
/// `tangent_scale` to form the Hermite tangent vector, and a local
/// `up`/`right` basis used for frame construction and lateral offsets.
#[derive(Debug, Clone)]
pub struct ControlNode {
    /// Anchor position of the node.
    pub position: Point3,
    /// Unit tangent direction at the node.
    pub forward: Vector3,
    /// Length of the Hermite tangent vector (`forward * tangent_scale`).
    pub tangent_scale: f64,
    /// Unit up reference, used for the offset-curve normal derivation.
    pub up: Vector3,
    /// Unit right direction, `up x forward`.
    pub right: Vector3,
    /// Per-axis scale applied to lateral instance offsets.
    pub lateral_scale: Vector2,
}

impl ControlNode {
    /// Creates a control node from a position, forward direction, tangent
    /// scale, and up reference.
    ///
    /// `forward` and `up` are normalized; `right` is derived as
    /// `up x forward`. Lateral scale defaults to `(1, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::ZeroVector`] if `forward` or `up` has
    /// near-zero length, or if they are parallel (degenerate basis).
    pub fn new(
        position: Point3,
        forward: Vector3,
        tangent_scale: f64,
        up: Vector3,
    ) -> Result<Self> {
        let forward = try_normalize(forward).ok_or(CurveError::ZeroVector)?;
        let up = try_normalize(up).ok_or(CurveError::ZeroVector)?;
        let right = try_normalize(up.cross(&forward)).ok_or(CurveError::ZeroVector)?;

        Ok(Self {
            position,
            forward,
            tangent_scale,
            up,
            right,
            lateral_scale: Vector2::new(1.0, 1.0),
        })
    }

    /// Sets the lateral scale applied to instance offsets.
    #[must_use]
    pub fn with_lateral_scale(mut self, lateral_scale: Vector2) -> Self {
        self.lateral_scale = lateral_scale;
        self
    }

    /// Returns the Hermite tangent vector, `forward * tangent_scale`.
    #[must_use]
    pub fn tangent_vector(&self) -> Vector3 {
        self.forward * self.tangent_scale
    }

    /// Returns the node position displaced laterally by `offset` in the
    /// node's right/up plane, scaled per axis by `lateral_scale`.
    #[must_use]
    pub fn offset_position(&self, offset: Vector2) -> Point3 {
        self.position
            + self.right * (self.lateral_scale.x * offset.x)
            + self.up * (self.lateral_scale.y * offset.y)
    }
}

/// One resampled point on the curve with its orthonormal frame directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    /// Position on the curve.
    pub position: Point3,
    /// Unit tangent (zero if the curve is degenerate at this parameter).
    pub tangent: Vector3,
    /// Unit normal (zero if the frame is degenerate at this parameter).
    pub normal: Vector3,
}

impl CurveSample {
    /// Returns the binormal completing the frame, `tangent x normal`.
    #[must_use]
    pub fn binormal(&self) -> Vector3 {
        self.tangent.cross(&self.normal)
    }
}

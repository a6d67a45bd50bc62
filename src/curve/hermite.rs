use crate::error::{CurveError, Result};
use crate::math::{try_normalize, Point3, Vector2, Vector3};

use super::{ControlNode, CurveSample};

/// Evaluates the cubic Hermite basis at `t` for anchors `p0`, `p1` and
/// tangent vectors `m0`, `m1`.
fn hermite_point(p0: Point3, p1: Point3, m0: Vector3, m1: Vector3, t: f64) -> Point3 {
    let t2 = t * t;
    let t3 = t2 * t;
    Point3::from(
        p0.coords * (2.0 * t3 - 3.0 * t2 + 1.0)
            + m0 * (t3 - 2.0 * t2 + t)
            + p1.coords * (-2.0 * t3 + 3.0 * t2)
            + m1 * (t3 - t2),
    )
}

/// First derivative of the cubic Hermite basis. Not normalized.
fn hermite_tangent(p0: Point3, p1: Point3, m0: Vector3, m1: Vector3, t: f64) -> Vector3 {
    let t2 = t * t;
    p0.coords * (6.0 * t2 - 6.0 * t)
        + m0 * (3.0 * t2 - 4.0 * t + 1.0)
        + p1.coords * (-6.0 * t2 + 6.0 * t)
        + m1 * (3.0 * t2 - 2.0 * t)
}

/// Splits a global curve parameter into a segment index and local parameter.
///
/// `global_t` spans `[0, n-1]`; the integer part selects the segment
/// (clamped to `[0, n-2]`), the fractional part is the local Hermite `t`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn split_parameter(node_count: usize, global_t: f64) -> (usize, f64) {
    let max_segment = (node_count - 2) as f64;
    let idx = global_t.floor().clamp(0.0, max_segment);
    (idx as usize, global_t - idx)
}

/// Evaluates the piecewise Hermite curve position at `global_t`.
///
/// # Errors
///
/// Returns [`CurveError::TooFewNodes`] if fewer than 2 nodes are given.
pub fn point(nodes: &[ControlNode], global_t: f64) -> Result<Point3> {
    if nodes.len() < 2 {
        return Err(CurveError::TooFewNodes { count: nodes.len() }.into());
    }
    let (idx, t) = split_parameter(nodes.len(), global_t);
    let (a, b) = (&nodes[idx], &nodes[idx + 1]);
    Ok(hermite_point(
        a.position,
        b.position,
        a.tangent_vector(),
        b.tangent_vector(),
        t,
    ))
}

/// Evaluates the curve's first derivative at `global_t`.
///
/// The result is not normalized; callers normalize when a unit tangent is
/// needed for frame construction.
///
/// # Errors
///
/// Returns [`CurveError::TooFewNodes`] if fewer than 2 nodes are given.
pub fn tangent(nodes: &[ControlNode], global_t: f64) -> Result<Vector3> {
    if nodes.len() < 2 {
        return Err(CurveError::TooFewNodes { count: nodes.len() }.into());
    }
    let (idx, t) = split_parameter(nodes.len(), global_t);
    let (a, b) = (&nodes[idx], &nodes[idx + 1]);
    Ok(hermite_tangent(
        a.position,
        b.position,
        a.tangent_vector(),
        b.tangent_vector(),
        t,
    ))
}

/// Resamples the curve into `subdivisions + 1` samples with frames.
///
/// Samples are uniform in the global parameter over `[0, n-1)`; the final
/// sample is taken exactly at the last node (position, forward, right) so
/// the endpoint carries no floating-point accumulation drift.
///
/// # Errors
///
/// Returns an error if fewer than 2 nodes or fewer than 1 subdivision are
/// given.
pub fn resample(nodes: &[ControlNode], subdivisions: usize) -> Result<Vec<CurveSample>> {
    resample_offset(nodes, Vector2::zeros(), subdivisions)
}

/// Resamples the curve displaced laterally by `offset`.
///
/// Every node anchor is moved by `right * lateral_scale.x * offset.x +
/// up * lateral_scale.y * offset.y` before interpolation; tangent and up
/// vectors are unchanged. This is how parallel tube instances are derived
/// from a single node sequence.
///
/// # Errors
///
/// Returns an error if fewer than 2 nodes or fewer than 1 subdivision are
/// given.
#[allow(clippy::cast_precision_loss)]
pub fn resample_offset(
    nodes: &[ControlNode],
    offset: Vector2,
    subdivisions: usize,
) -> Result<Vec<CurveSample>> {
    if nodes.len() < 2 {
        return Err(CurveError::TooFewNodes { count: nodes.len() }.into());
    }
    if subdivisions < 1 {
        return Err(CurveError::TooFewSubdivisions { subdivisions }.into());
    }

    let span = (nodes.len() - 1) as f64;
    let mut samples = Vec::with_capacity(subdivisions + 1);

    for i in 0..subdivisions {
        let global_t = i as f64 / subdivisions as f64 * span;
        let (idx, t) = split_parameter(nodes.len(), global_t);
        let (a, b) = (&nodes[idx], &nodes[idx + 1]);

        let p0 = a.offset_position(offset);
        let p1 = b.offset_position(offset);
        let m0 = a.tangent_vector();
        let m1 = b.tangent_vector();

        let position = hermite_point(p0, p1, m0, m1, t);
        let tangent =
            try_normalize(hermite_tangent(p0, p1, m0, m1, t)).unwrap_or_else(Vector3::zeros);

        // Frame transport: interpolate a second curve whose anchors are
        // displaced by the node up vectors; the difference to the position
        // curve is the up direction at t.
        let up_point = hermite_point(p0 + a.up, p1 + b.up, m0, m1, t);
        let up_dir = up_point - position;
        let normal = try_normalize(up_dir.cross(&tangent)).unwrap_or_else(Vector3::zeros);

        samples.push(CurveSample {
            position,
            tangent,
            normal,
        });
    }

    // Exact endpoint: last node's anchor and frame, no accumulated t.
    let last = &nodes[nodes.len() - 1];
    samples.push(CurveSample {
        position: last.offset_position(offset),
        tangent: last.forward,
        normal: last.right,
    });

    Ok(samples)
}

/// Evaluates positions along the single Hermite segment between two nodes.
///
/// Returns `subdivisions + 1` points, the last one exactly at `to`.
///
/// # Errors
///
/// Returns [`CurveError::TooFewSubdivisions`] if `subdivisions < 1`.
#[allow(clippy::cast_precision_loss)]
pub fn segment_points(
    from: &ControlNode,
    to: &ControlNode,
    subdivisions: usize,
) -> Result<Vec<Point3>> {
    if subdivisions < 1 {
        return Err(CurveError::TooFewSubdivisions { subdivisions }.into());
    }

    let m0 = from.tangent_vector();
    let m1 = to.tangent_vector();

    let mut points = Vec::with_capacity(subdivisions + 1);
    for i in 0..subdivisions {
        let t = i as f64 / subdivisions as f64;
        points.push(hermite_point(from.position, to.position, m0, m1, t));
    }
    points.push(to.position);
    Ok(points)
}

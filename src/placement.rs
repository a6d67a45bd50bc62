use rand::Rng;

use crate::curve::{resample_offset, ControlNode, CurveSample};
use crate::error::Result;
use crate::math::Vector2;
use crate::params::TubeParams;
use crate::sampling::poisson_disc;

/// Generates per-instance lateral offsets inside a disc of
/// `params.region_radius`.
///
/// Runs the Poisson-disc sampler over the disc's bounding square, re-centers
/// the points around the origin, drops those outside the disc, and truncates
/// to `params.max_instances`. The cap is an explicit post-filter; the
/// sampler itself stays general-purpose.
///
/// # Errors
///
/// Propagates sampler errors for invalid radii.
pub fn instance_offsets<R: Rng>(params: &TubeParams, rng: &mut R) -> Result<Vec<Vector2>> {
    let region = params.region_radius;
    let points = poisson_disc(
        params.distribute_radius,
        region * 2.0,
        region * 2.0,
        params.rejection_limit,
        rng,
    )?;

    let mut offsets: Vec<Vector2> = points
        .into_iter()
        .map(|p| Vector2::new(p.x - region, p.y - region))
        .filter(|offset| offset.norm() < region)
        .collect();
    offsets.truncate(params.max_instances);
    Ok(offsets)
}

/// Resamples the curve once per instance offset.
///
/// Returns one `segments + 1` sample strip per offset, in offset order,
/// ready for a rendering collaborator to deform the tube template with.
///
/// # Errors
///
/// Propagates curve evaluation errors.
pub fn swarm_samples(
    nodes: &[ControlNode],
    offsets: &[Vector2],
    segments: usize,
) -> Result<Vec<Vec<CurveSample>>> {
    let mut strips = Vec::with_capacity(offsets.len());
    for &offset in offsets {
        strips.push(resample_offset(nodes, offset, segments)?);
    }
    Ok(strips)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn params() -> TubeParams {
        TubeParams {
            distribute_radius: 0.4,
            region_radius: 2.0,
            ..TubeParams::default()
        }
    }

    #[test]
    fn offsets_lie_inside_the_disc() {
        let mut rng = Pcg64::seed_from_u64(9);
        let offsets = instance_offsets(&params(), &mut rng).unwrap();
        assert!(!offsets.is_empty());
        for (i, offset) in offsets.iter().enumerate() {
            assert!(offset.norm() < 2.0, "offset {i} at {}", offset.norm());
        }
    }

    #[test]
    fn offsets_keep_minimum_separation() {
        let mut rng = Pcg64::seed_from_u64(21);
        let offsets = instance_offsets(&params(), &mut rng).unwrap();
        for i in 0..offsets.len() {
            for j in (i + 1)..offsets.len() {
                let d = (offsets[i] - offsets[j]).norm();
                assert!(d >= 0.4 - 1e-9, "offsets {i} and {j} are {d} apart");
            }
        }
    }

    #[test]
    fn instance_cap_is_honored() {
        let mut config = params();
        config.max_instances = 3;
        let mut rng = Pcg64::seed_from_u64(9);
        let offsets = instance_offsets(&config, &mut rng).unwrap();
        assert!(offsets.len() <= 3);
    }

    #[test]
    fn swarm_produces_one_strip_per_offset() {
        let nodes = vec![
            ControlNode::new(
                Point3::new(0.0, 0.0, 0.0),
                Vector3::new(0.0, 0.0, 1.0),
                10.0,
                Vector3::new(0.0, 1.0, 0.0),
            )
            .unwrap(),
            ControlNode::new(
                Point3::new(0.0, 0.0, 10.0),
                Vector3::new(0.0, 0.0, 1.0),
                10.0,
                Vector3::new(0.0, 1.0, 0.0),
            )
            .unwrap(),
        ];
        let offsets = [Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.5)];
        let strips = swarm_samples(&nodes, &offsets, 8).unwrap();
        assert_eq!(strips.len(), 2);
        for strip in &strips {
            assert_eq!(strip.len(), 9);
        }
        // The offset strip is laterally displaced from the centered one.
        let delta = strips[1][0].position - strips[0][0].position;
        assert!((delta - Vector3::new(1.0, 0.5, 0.0)).norm() < 1e-9);
    }
}

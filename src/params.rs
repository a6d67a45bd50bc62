use crate::sampling::DEFAULT_REJECTION_LIMIT;

/// Smallest radius the clamping boundary will hand to the sampler.
pub const MIN_SAMPLING_RADIUS: f64 = 1e-6;

/// Hard cap on parallel tube instances.
pub const MAX_INSTANCES: usize = 64;

/// Validated scalar parameters for tube generation.
///
/// This is the configuration boundary: [`TubeParams::clamped`] applies the
/// documented ranges before values reach the core, which assumes in-range
/// inputs and does not re-validate beyond its hard minimums.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeParams {
    /// Ring vertex count, clamped to `[2, 64]`.
    pub subdivisions: usize,
    /// Ring count along the tube, clamped to `[4, 1024]`.
    pub segments: usize,
    /// Tube surface radius around the curve.
    pub radius: f64,
    /// Minimum separation between instance offsets (Poisson-disc radius).
    pub distribute_radius: f64,
    /// Radius of the circular region instances are confined to.
    pub region_radius: f64,
    /// Candidate attempts per active point in the sampler.
    pub rejection_limit: usize,
    /// Maximum number of tube instances after spatial filtering.
    pub max_instances: usize,
}

impl Default for TubeParams {
    fn default() -> Self {
        Self {
            subdivisions: 6,
            segments: 256,
            radius: 1.0,
            distribute_radius: 1.0,
            region_radius: 1.0,
            rejection_limit: DEFAULT_REJECTION_LIMIT,
            max_instances: MAX_INSTANCES,
        }
    }
}

impl TubeParams {
    /// Returns a copy with every field forced into its documented range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            subdivisions: self.subdivisions.clamp(2, 64),
            segments: self.segments.clamp(4, 1024),
            radius: self.radius.max(0.0),
            distribute_radius: self.distribute_radius.max(MIN_SAMPLING_RADIUS),
            region_radius: self.region_radius.max(MIN_SAMPLING_RADIUS),
            rejection_limit: self.rejection_limit,
            max_instances: self.max_instances.min(MAX_INSTANCES),
        }
    }
}

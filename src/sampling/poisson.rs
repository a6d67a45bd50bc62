use std::f64::consts::TAU;

use rand::Rng;

use crate::error::{Result, SamplingError};
use crate::math::{Point2, Vector2};

/// Default number of candidate placements attempted around an active point
/// before it is retired.
pub const DEFAULT_REJECTION_LIMIT: usize = 30;

/// Uniform acceleration grid over the sampling region.
///
/// Cell size is `radius / sqrt(2)` so each cell can hold at most one
/// accepted point; cells store 1-based point indices, 0 means empty.
struct CellGrid {
    cell_size: f64,
    cols: usize,
    rows: usize,
    cells: Vec<u32>,
}

impl CellGrid {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn new(radius: f64, width: f64, height: f64) -> Self {
        let cell_size = radius / std::f64::consts::SQRT_2;
        let cols = (width / cell_size).ceil().max(1.0) as usize;
        let rows = (height / cell_size).ceil().max(1.0) as usize;
        Self {
            cell_size,
            cols,
            rows,
            cells: vec![0; cols * rows],
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn cell_of(&self, p: Point2) -> (usize, usize) {
        let x = ((p.x / self.cell_size) as usize).min(self.cols - 1);
        let y = ((p.y / self.cell_size) as usize).min(self.rows - 1);
        (x, y)
    }

    fn insert(&mut self, p: Point2, point_index: u32) {
        let (x, y) = self.cell_of(p);
        self.cells[y * self.cols + x] = point_index + 1;
    }

    /// Checks the candidate against accepted points in the 5x5 cell
    /// neighborhood. The grid only prunes; rejection is by exact distance.
    fn is_clear(&self, candidate: Point2, radius: f64, points: &[Point2]) -> bool {
        let (cx, cy) = self.cell_of(candidate);
        let x_start = cx.saturating_sub(2);
        let x_end = (cx + 2).min(self.cols - 1);
        let y_start = cy.saturating_sub(2);
        let y_end = (cy + 2).min(self.rows - 1);

        let radius_sq = radius * radius;
        for y in y_start..=y_end {
            for x in x_start..=x_end {
                let slot = self.cells[y * self.cols + x];
                if slot == 0 {
                    continue;
                }
                let point = points[slot as usize - 1];
                if (point - candidate).norm_squared() < radius_sq {
                    return false;
                }
            }
        }
        true
    }
}

/// Generates a blue-noise point set in `[0, width) x [0, height)` with no
/// two points closer than `radius`, using Bridson's dart-throwing scheme.
///
/// Each round picks a random active point and tries up to `rejection_limit`
/// candidates in the annulus `[radius, 2*radius]` around it; a point that
/// produces no valid candidate is retired. The set is maximal under this
/// bounded attempt budget, not globally maximal.
///
/// The generator is caller-supplied so runs can be made reproducible with a
/// seeded source such as `rand_pcg::Pcg64`.
///
/// # Errors
///
/// Returns [`SamplingError::InvalidRadius`] for a non-positive or
/// non-finite radius, and [`SamplingError::InvalidRegion`] for non-positive
/// region dimensions.
#[allow(clippy::cast_possible_truncation)]
pub fn poisson_disc<R: Rng>(
    radius: f64,
    region_width: f64,
    region_height: f64,
    rejection_limit: usize,
    rng: &mut R,
) -> Result<Vec<Point2>> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(SamplingError::InvalidRadius { radius }.into());
    }
    if !(region_width.is_finite() && region_width > 0.0)
        || !(region_height.is_finite() && region_height > 0.0)
    {
        return Err(SamplingError::InvalidRegion {
            width: region_width,
            height: region_height,
        }
        .into());
    }

    let mut grid = CellGrid::new(radius, region_width, region_height);
    let mut points: Vec<Point2> = Vec::new();
    let mut active: Vec<Point2> = vec![Point2::new(region_width / 2.0, region_height / 2.0)];

    // Each round either accepts a point (at most one per grid cell) or
    // retires an active point, so the round count is bounded by the cell
    // count. The cap makes that bound explicit.
    let max_rounds = 4 * (grid.cells.len() + 2);

    for _ in 0..max_rounds {
        if active.is_empty() {
            break;
        }
        let spawn_index = rng.gen_range(0..active.len());
        let center = active[spawn_index];

        let mut accepted = false;
        for _ in 0..rejection_limit {
            let angle = rng.gen::<f64>() * TAU;
            let distance = rng.gen_range(radius..radius * 2.0);
            let candidate = center + Vector2::new(angle.cos(), angle.sin()) * distance;

            let inside = candidate.x >= 0.0
                && candidate.x < region_width
                && candidate.y >= 0.0
                && candidate.y < region_height;
            if inside && grid.is_clear(candidate, radius, &points) {
                points.push(candidate);
                grid.insert(candidate, points.len() as u32 - 1);
                active.push(candidate);
                accepted = true;
                break;
            }
        }

        if !accepted {
            active.swap_remove(spawn_index);
        }
    }

    Ok(points)
}

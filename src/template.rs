use std::f64::consts::TAU;

use crate::error::{Result, TemplateError};
use crate::math::Point3;

/// Static topology for a capped tube mesh, independent of any curve.
///
/// Body vertices are stored in local topological coordinates, not world
/// space: `(ring_angle_radians, 0, ring_index)`. The deforming consumer maps
/// `(angle, ring)` onto an evaluated curve as
/// `position + radius * (cos(angle) * normal + sin(angle) * binormal)` at the
/// ring's parameter. The two apex vertices use `y = -1` (head) and `y = +1`
/// (tail) as cap markers.
#[derive(Debug, Clone, PartialEq)]
pub struct TubeTemplate {
    /// Vertex list: head apex, `segments + 1` rings of `subdivisions`
    /// vertices, tail apex.
    pub vertices: Vec<Point3>,
    /// Triangle list with outward-facing winding.
    pub indices: Vec<[u32; 3]>,
    subdivisions: usize,
    segments: usize,
}

impl TubeTemplate {
    /// Builds the template for the given ring vertex count (`subdivisions`)
    /// and ring count along the tube (`segments`).
    ///
    /// Output is a closed manifold surface: a head fan, `segments` quad
    /// strips with wraparound, and a tail fan. Identical inputs produce
    /// bit-identical output.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if `subdivisions < 2` or `segments < 1`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn build(subdivisions: usize, segments: usize) -> Result<Self> {
        if subdivisions < 2 {
            return Err(TemplateError::TooFewSubdivisions { subdivisions }.into());
        }
        if segments < 1 {
            return Err(TemplateError::TooFewSegments { segments }.into());
        }

        let sub = subdivisions as u32;

        let mut vertices = Vec::with_capacity(Self::expected_vertex_count(subdivisions, segments));
        vertices.push(Point3::new(0.0, -1.0, 0.0)); // head apex
        for ring in 0..=segments {
            for j in 0..subdivisions {
                let phi = TAU * j as f64 / subdivisions as f64;
                vertices.push(Point3::new(phi, 0.0, ring as f64));
            }
        }
        vertices.push(Point3::new(0.0, 1.0, segments as f64)); // tail apex

        let mut indices =
            Vec::with_capacity(Self::expected_triangle_count(subdivisions, segments));

        // Head fan: apex to ring 0, closing the ring with a wraparound
        // triangle.
        for j in 0..sub - 1 {
            indices.push([0, j + 2, j + 1]);
        }
        indices.push([0, 1, sub]);

        // Body: one quad (two triangles) per subdivision step per segment,
        // wrapping the last-to-first edge of each ring.
        let mut idx = 1;
        for _ in 0..segments {
            for _ in 0..sub - 1 {
                indices.push([idx, idx + 1, idx + sub]);
                indices.push([idx + 1, idx + 1 + sub, idx + sub]);
                idx += 1;
            }
            indices.push([idx, idx + 1 - sub, idx + sub]);
            indices.push([idx + 1 - sub, idx + 1, idx + sub]);
            idx += 1;
        }

        // Tail fan mirrors the head; `idx` now points at the last ring's
        // first vertex and `idx + sub` at the tail apex.
        for j in 0..sub - 1 {
            indices.push([idx + j, idx + j + 1, idx + sub]);
        }
        indices.push([idx + sub - 1, idx, idx + sub]);

        Ok(Self {
            vertices,
            indices,
            subdivisions,
            segments,
        })
    }

    /// Returns the ring vertex count.
    #[must_use]
    pub fn subdivisions(&self) -> usize {
        self.subdivisions
    }

    /// Returns the ring count along the tube.
    #[must_use]
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Vertex count for the given parameters: two apices plus
    /// `(segments + 1) * subdivisions` body vertices.
    #[must_use]
    pub fn expected_vertex_count(subdivisions: usize, segments: usize) -> usize {
        1 + (segments + 1) * subdivisions + 1
    }

    /// Triangle count for the given parameters: two fans plus two triangles
    /// per body quad.
    #[must_use]
    pub fn expected_triangle_count(subdivisions: usize, segments: usize) -> usize {
        2 * subdivisions + 2 * segments * subdivisions
    }
}

/// Explicit single-slot cache for the tube template, keyed by
/// `(subdivisions, segments)`.
///
/// Owned by whoever drives the rendering; rebuilds only when the key
/// changes.
#[derive(Debug, Default)]
pub struct TemplateCache {
    entry: Option<((usize, usize), TubeTemplate)>,
}

impl TemplateCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached template, rebuilding if the parameters changed.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] for invalid parameters; the previous
    /// entry is left untouched in that case.
    pub fn get_or_build(&mut self, subdivisions: usize, segments: usize) -> Result<&TubeTemplate> {
        let key = (subdivisions, segments);
        if !matches!(&self.entry, Some((cached, _)) if *cached == key) {
            let template = TubeTemplate::build(subdivisions, segments)?;
            self.entry = Some((key, template));
        }
        match &self.entry {
            Some((_, template)) => Ok(template),
            None => unreachable!("entry was just populated"),
        }
    }

    /// Drops the cached template, forcing a rebuild on the next request.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

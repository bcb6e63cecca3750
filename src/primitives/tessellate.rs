//! Adaptive arc tessellation.
//!
//! The number of segments in an arc follows its apparent size on screen: the
//! center and a point offset by the radii are pushed through the current
//! transform, and the distance between them drives the subdivision count
//!
//! ```text
//! acc = clamp(floor(2π × size / factor), min, max)
//! ```
//!
//! Vertices are then read from a precomputed sine/cosine table, stepping
//! `table_len / acc` entries at a time.

use std::f64::consts::TAU;
use std::sync::Arc;

use glam::DMat4;

use super::defaults;
use super::shapes::{ArcGeometry, ArcMode};
use crate::errors::ShapeError;
use crate::log::debug;
use crate::types::{NumericError, Point, check_finite, check_positive};

/// `(sin, cos)` for evenly spaced angles over one full turn
#[derive(Debug, Clone, PartialEq)]
pub struct SinCosTable {
    entries: Vec<(f64, f64)>,
}

impl SinCosTable {
    /// Build a table with `len` entries. `len` must be non-zero.
    pub fn new(len: usize) -> Result<Self, ShapeError> {
        if len == 0 {
            return Err(ShapeError::invalid("table length", 0.0, NumericError::Zero));
        }
        Ok(Self::build(len))
    }

    fn build(len: usize) -> Self {
        let entries = (0..len)
            .map(|i| (i as f64 / len as f64 * TAU).sin_cos())
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, wrapping in both directions
    #[inline]
    pub fn get(&self, index: i64) -> (f64, f64) {
        let i = index.rem_euclid(self.entries.len() as i64) as usize;
        self.entries[i]
    }

    /// Table index for an angle in radians (floored, not wrapped)
    pub fn index_of(&self, angle: f64) -> i64 {
        (angle / TAU * self.entries.len() as f64).floor() as i64
    }
}

impl Default for SinCosTable {
    fn default() -> Self {
        Self::build(defaults::SINCOS_LENGTH)
    }
}

/// Bounds and density of arc subdivision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcAccuracy {
    /// Screen-space length per segment
    pub factor: f64,
    pub min: usize,
    pub max: usize,
}

impl Default for ArcAccuracy {
    fn default() -> Self {
        Self {
            factor: defaults::POINT_ACCURACY_FACTOR,
            min: defaults::MIN_POINT_ACCURACY,
            max: defaults::MAX_POINT_ACCURACY,
        }
    }
}

impl ArcAccuracy {
    pub fn new(factor: f64, min: usize, max: usize) -> Result<Self, ShapeError> {
        let factor =
            check_positive(factor).map_err(|e| ShapeError::invalid("accuracy factor", factor, e))?;
        if min == 0 {
            return Err(ShapeError::invalid("minimum accuracy", 0.0, NumericError::Zero));
        }
        if max < min {
            return Err(ShapeError::invalid(
                "maximum accuracy",
                max as f64,
                NumericError::Negative,
            ));
        }
        Ok(Self { factor, min, max })
    }
}

/// Turns arc descriptions into vertex lists
#[derive(Debug, Clone)]
pub struct ArcTessellator {
    table: Arc<SinCosTable>,
    accuracy: ArcAccuracy,
}

impl Default for ArcTessellator {
    fn default() -> Self {
        Self::new(Arc::new(SinCosTable::default()), ArcAccuracy::default())
    }
}

impl ArcTessellator {
    pub fn new(table: Arc<SinCosTable>, accuracy: ArcAccuracy) -> Self {
        Self { table, accuracy }
    }

    /// Same table, different accuracy
    pub fn with_accuracy(&self, accuracy: ArcAccuracy) -> Self {
        Self::new(Arc::clone(&self.table), accuracy)
    }

    pub fn table(&self) -> &SinCosTable {
        &self.table
    }

    pub fn accuracy(&self) -> ArcAccuracy {
        self.accuracy
    }

    /// Apparent radius of an arc: the distance between the projected center
    /// and the projected `center + (rx, ry)`.
    pub fn projected_size(transform: &DMat4, center: Point, rx: f64, ry: f64) -> f64 {
        let s1 = *transform * center.to_homogeneous();
        let s2 = *transform * center.offset(rx, ry).to_homogeneous();
        (s2 - s1).length()
    }

    /// Subdivision count for a given projected size
    pub fn subdivisions_for_size(&self, size: f64) -> usize {
        let raw = (TAU * size / self.accuracy.factor).floor();
        let raw = if raw.is_finite() && raw > 0.0 { raw as usize } else { 0 };
        raw.clamp(self.accuracy.min, self.accuracy.max)
    }

    /// Subdivision count for an arc under `transform`
    pub fn subdivisions(&self, transform: &DMat4, center: Point, rx: f64, ry: f64) -> usize {
        self.subdivisions_for_size(Self::projected_size(transform, center, rx, ry))
    }

    fn vertex(&self, center: Point, rx: f64, ry: f64, index: i64) -> Point {
        let (sin, cos) = self.table.get(index);
        Point::new(center.x + rx * cos, center.y + ry * sin, center.z)
    }

    /// Tessellate `arc` as seen through `transform`.
    ///
    /// A span with `stop <= start` yields no vertices. Angles outside
    /// `[0, 2π)` wrap through the table, and spans longer than one full turn
    /// are folded to exactly one turn.
    pub fn tessellate(&self, arc: &ArcGeometry, transform: &DMat4) -> Result<Vec<Point>, ShapeError> {
        let center = arc.center.checked("arc center")?;
        let (rx, ry) = arc.radii;
        for (what, v) in [
            ("arc radius", rx),
            ("arc radius", ry),
            ("start angle", arc.start),
            ("stop angle", arc.stop),
        ] {
            check_finite(v).map_err(|e| ShapeError::invalid(what, v, e))?;
        }

        if arc.stop <= arc.start {
            debug!(start = arc.start, stop = arc.stop, "empty arc span");
            return Ok(Vec::new());
        }

        let acc = self.subdivisions(transform, center, rx, ry);
        let inc = (self.table.len() / acc).max(1);
        let turn = self.table.len() as i64;
        let raw_start = self.table.index_of(arc.start);
        let span = self.table.index_of(arc.stop).saturating_sub(raw_start).min(turn);
        let start_index = raw_start.rem_euclid(turn);
        let stop_index = start_index + span;
        debug!(acc, inc, start_index, stop_index, "tessellating arc");

        let fan = matches!(arc.mode, None | Some(ArcMode::Pie));
        // span <= turn, so the walk is at most one turn long
        let steps = (span as usize).div_ceil(inc);
        let mut vertices = Vec::with_capacity(steps + 3);
        if fan {
            vertices.push(center);
        }
        vertices.extend(
            (start_index..stop_index)
                .step_by(inc)
                .map(|idx| self.vertex(center, rx, ry, idx)),
        );
        vertices.push(self.vertex(center, rx, ry, stop_index));

        if matches!(arc.mode, Some(ArcMode::Chord | ArcMode::Pie)) {
            vertices.push(vertices[0]);
        }
        Ok(vertices)
    }
}

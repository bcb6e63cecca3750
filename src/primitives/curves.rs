//! Bezier and Catmull-Rom evaluation.
//!
//! Curves are sampled at a fixed resolution taken from [`CurveConfig`]; unlike
//! arcs they do not adapt to their projected size.

use glam::{DMat4, DVec3, DVec4};

use super::defaults;
use crate::errors::ShapeError;
use crate::types::{Point, check_finite};

/// Sampling resolution and tightness for curves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveConfig {
    bezier_detail: usize,
    curve_detail: usize,
    curve_tightness: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            bezier_detail: defaults::BEZIER_DETAIL,
            curve_detail: defaults::CURVE_DETAIL,
            curve_tightness: defaults::CURVE_TIGHTNESS,
        }
    }
}

impl CurveConfig {
    pub fn bezier_detail(&self) -> usize {
        self.bezier_detail
    }

    pub fn curve_detail(&self) -> usize {
        self.curve_detail
    }

    pub fn curve_tightness(&self) -> f64 {
        self.curve_tightness
    }

    /// Set the number of segments used to draw beziers
    pub fn set_bezier_detail(&mut self, steps: usize) -> Result<(), ShapeError> {
        self.bezier_detail = check_detail(steps)?;
        Ok(())
    }

    /// Set the number of segments used to draw Catmull-Rom curves
    pub fn set_curve_detail(&mut self, steps: usize) -> Result<(), ShapeError> {
        self.curve_detail = check_detail(steps)?;
        Ok(())
    }

    /// Set the Catmull-Rom tightness. 0 is the classic spline, 1 connects
    /// the points with straight lines.
    pub fn set_curve_tightness(&mut self, tightness: f64) -> Result<(), ShapeError> {
        self.curve_tightness =
            check_finite(tightness).map_err(|e| ShapeError::invalid("curve tightness", tightness, e))?;
        Ok(())
    }
}

fn check_detail(steps: usize) -> Result<usize, ShapeError> {
    if steps == 0 {
        return Err(ShapeError::invalid(
            "curve detail",
            0.0,
            crate::types::NumericError::Zero,
        ));
    }
    Ok(steps)
}

/// Point on a cubic bezier at parameter `t`
pub fn bezier_point(start: Point, c1: Point, c2: Point, stop: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let (a, b, c, d) = (mt * mt * mt, 3.0 * mt * mt * t, 3.0 * mt * t * t, t * t * t);
    Point::from(
        DVec3::from(start) * a + DVec3::from(c1) * b + DVec3::from(c2) * c + DVec3::from(stop) * d,
    )
}

/// Tangent (first derivative) of a cubic bezier at parameter `t`
pub fn bezier_tangent(start: Point, c1: Point, c2: Point, stop: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let d1 = DVec3::from(c1) - DVec3::from(start);
    let d2 = DVec3::from(c2) - DVec3::from(c1);
    let d3 = DVec3::from(stop) - DVec3::from(c2);
    Point::from(3.0 * mt * mt * d1 + 6.0 * mt * t * d2 + 3.0 * t * t * d3)
}

/// Catmull-Rom basis for a given tightness. Rows multiply `[t³ t² t 1]`.
fn curve_basis(s: f64) -> DMat4 {
    // glam matrices are column-major, so each DVec4 here is one column
    DMat4::from_cols(
        DVec4::new((s - 1.0) / 2.0, 1.0 - s, (s - 1.0) / 2.0, 0.0),
        DVec4::new((s + 3.0) / 2.0, (-5.0 - s) / 2.0, 0.0, 1.0),
        DVec4::new((-3.0 - s) / 2.0, s + 2.0, (1.0 - s) / 2.0, 0.0),
        DVec4::new((1.0 - s) / 2.0, (s - 1.0) / 2.0, 0.0, 0.0),
    )
}

fn blend(weights: DVec4, p: [Point; 4]) -> Point {
    Point::from(
        DVec3::from(p[0]) * weights.x
            + DVec3::from(p[1]) * weights.y
            + DVec3::from(p[2]) * weights.z
            + DVec3::from(p[3]) * weights.w,
    )
}

/// Point on a Catmull-Rom segment at parameter `t`.
///
/// `p0` and `p3` only shape the tangents; the segment runs from `p1` to `p2`.
pub fn curve_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64, tightness: f64) -> Point {
    let powers = DVec4::new(t * t * t, t * t, t, 1.0);
    // row vector times matrix == transpose(matrix) times column vector
    let weights = curve_basis(tightness).transpose() * powers;
    blend(weights, [p0, p1, p2, p3])
}

/// Tangent of a Catmull-Rom segment at parameter `t`
pub fn curve_tangent(p0: Point, p1: Point, p2: Point, p3: Point, t: f64, tightness: f64) -> Point {
    let powers = DVec4::new(3.0 * t * t, 2.0 * t, 1.0, 0.0);
    let weights = curve_basis(tightness).transpose() * powers;
    blend(weights, [p0, p1, p2, p3])
}

/// Sample a bezier at `t = i / steps` for `i` in `0..=steps`
pub fn sample_bezier(points: [Point; 4], steps: usize) -> Vec<Point> {
    let [start, c1, c2, stop] = points;
    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            bezier_point(start, c1, c2, stop, t)
        })
        .collect()
}

/// Sample a Catmull-Rom segment at `t = i / steps` for `i` in `0..=steps`
pub fn sample_curve(points: [Point; 4], steps: usize, tightness: f64) -> Vec<Point> {
    let [p0, p1, p2, p3] = points;
    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            curve_point(p0, p1, p2, p3, t, tightness)
        })
        .collect()
}

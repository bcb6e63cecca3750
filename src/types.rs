//! Value types shared by the normalizer, the evaluators and the tessellator.
//!
//! Points are plain `f64` triples; everything that needs matrix math goes
//! through `glam` via the `DVec3` conversions below.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use glam::{DVec3, DVec4};

use crate::errors::ShapeError;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinities.
#[inline]
pub fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Reject NaN, infinities, zero and negative values.
#[inline]
pub fn check_positive(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// A 3D coordinate. 2D input leaves `z` at zero.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z }
    }

    /// A point on the z = 0 plane
    pub const fn xy(x: f64, y: f64) -> Self {
        Point { x, y, z: 0.0 }
    }

    /// Translate in the xy plane, keeping z
    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Point { x: self.x + dx, y: self.y + dy, z: self.z }
    }

    /// Homogeneous coordinate with w = 1, for projecting through a transform
    #[inline]
    pub fn to_homogeneous(self) -> DVec4 {
        DVec4::new(self.x, self.y, self.z, 1.0)
    }

    pub fn distance(self, other: Point) -> f64 {
        DVec3::from(self).distance(DVec3::from(other))
    }

    /// Check that every component is finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Validate the components, naming the offending input on failure
    pub fn checked(self, what: &'static str) -> Result<Point, ShapeError> {
        for c in [self.x, self.y, self.z] {
            check_finite(c).map_err(|err| ShapeError::invalid(what, c, err))?;
        }
        Ok(self)
    }
}

impl From<DVec3> for Point {
    fn from(v: DVec3) -> Self {
        Point { x: v.x, y: v.y, z: v.z }
    }
}

impl From<Point> for DVec3 {
    fn from(p: Point) -> Self {
        DVec3::new(p.x, p.y, p.z)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::xy(x, y)
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Point::new(x, y, z)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::xy(x, y)
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Point::new(x, y, z)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;
    fn mul(self, rhs: Point) -> Point {
        rhs * self
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        *self = *self - rhs;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Simple color model; resolution to GPU colors is the renderer's job.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({},{},{},{})", r, g, b, a),
        }
    }
}

/// Treatment of line endpoints. Also decides how `point` is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StrokeCap {
    /// Flat end exactly at the endpoint; points stay single vertices.
    Square,
    /// Flat end extended by half the stroke weight; points become squares.
    Project,
    /// Rounded end; points become circles.
    #[default]
    Round,
}

impl FromStr for StrokeCap {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SQUARE" => Ok(StrokeCap::Square),
            "PROJECT" => Ok(StrokeCap::Project),
            "ROUND" => Ok(StrokeCap::Round),
            _ => Err(ShapeError::UnknownStrokeCap { value: s.to_string() }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Bevel,
    Round,
}

/// Stroke settings as currently configured on the renderer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub cap: StrokeCap,
    pub join: StrokeJoin,
    pub weight: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Stroke {
            cap: StrokeCap::Round,
            join: StrokeJoin::Miter,
            weight: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_finite_rejects_nan_and_infinity() {
        assert_eq!(check_finite(1.5), Ok(1.5));
        assert_eq!(check_finite(f64::NAN), Err(NumericError::NaN));
        assert_eq!(check_finite(f64::NEG_INFINITY), Err(NumericError::Infinite));
    }

    #[test]
    fn check_positive_rejects_zero_and_negative() {
        assert_eq!(check_positive(2.0), Ok(2.0));
        assert_eq!(check_positive(0.0), Err(NumericError::Zero));
        assert_eq!(check_positive(-1.0), Err(NumericError::Negative));
    }

    #[test]
    fn point_from_2d_tuple_has_zero_z() {
        let p = Point::from((3.0, 4.0));
        assert_eq!(p, Point::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1.0, 2.0, 3.0);
        let b = Point::new(4.0, 6.0, 8.0);

        assert_eq!(a + b, Point::new(5.0, 8.0, 11.0));
        assert_eq!(b - a, Point::new(3.0, 4.0, 5.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0, 6.0));
        assert_eq!(0.5 * b, Point::new(2.0, 3.0, 4.0));
        assert_eq!(-a, Point::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn point_offset_keeps_z() {
        let p = Point::new(1.0, 1.0, 7.0).offset(2.0, -1.0);
        assert_eq!(p, Point::new(3.0, 0.0, 7.0));
    }

    #[test]
    fn point_glam_roundtrip_and_distance() {
        let p = Point::new(3.0, 4.0, 0.0);
        assert_eq!(Point::from(DVec3::from(p)), p);
        assert_eq!(p.distance(Point::ORIGIN), 5.0);
    }

    #[test]
    fn point_checked_names_the_input() {
        let err = Point::new(0.0, f64::NAN, 0.0).checked("center").unwrap_err();
        assert!(matches!(err, ShapeError::InvalidValue { what: "center", .. }));
    }

    #[test]
    fn stroke_cap_parses_case_insensitively() {
        assert_eq!("round".parse::<StrokeCap>().unwrap(), StrokeCap::Round);
        assert_eq!("PROJECT".parse::<StrokeCap>().unwrap(), StrokeCap::Project);
        assert_eq!("Square".parse::<StrokeCap>().unwrap(), StrokeCap::Square);
    }

    #[test]
    fn stroke_cap_rejects_unknown() {
        let err = "butt".parse::<StrokeCap>().unwrap_err();
        assert!(matches!(err, ShapeError::UnknownStrokeCap { ref value } if value == "butt"));
    }
}

//! Coordinate modes and their canonical forms
//!
//! Rectangles normalize to a corner plus width/height; ellipses normalize to a
//! center plus radii. Both forms can be projected back into any mode, which is
//! what the round-trip tests rely on.

use std::fmt;
use std::str::FromStr;

use crate::errors::ShapeError;
use crate::types::{Point, check_finite};

/// Which part of a shape's bounding geometry a coordinate refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeMode {
    /// Coordinate is a corner; the sizes are width and height.
    Corner,
    /// Coordinate is a corner; the sizes are the opposite corner's x and y.
    Corners,
    /// Coordinate is the center; the sizes are width and height.
    Center,
    /// Coordinate is the center; the sizes are half-extents.
    Radius,
}

impl ShapeMode {
    pub fn name(self) -> &'static str {
        match self {
            ShapeMode::Corner => "CORNER",
            ShapeMode::Corners => "CORNERS",
            ShapeMode::Center => "CENTER",
            ShapeMode::Radius => "RADIUS",
        }
    }
}

impl fmt::Display for ShapeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeMode {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CORNER" => Ok(ShapeMode::Corner),
            "CORNERS" => Ok(ShapeMode::Corners),
            "CENTER" => Ok(ShapeMode::Center),
            "RADIUS" => Ok(ShapeMode::Radius),
            _ => Err(ShapeError::UnknownMode { mode: s.to_string() }),
        }
    }
}

/// Canonical rectangle: a corner plus signed width and height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectExtent {
    pub corner: Point,
    pub width: f64,
    pub height: f64,
}

impl RectExtent {
    /// The four corners in quad order, starting at `corner`
    pub fn corners(&self) -> [Point; 4] {
        let p1 = self.corner;
        let p2 = p1.offset(self.width, 0.0);
        let p3 = p2.offset(0.0, self.height);
        let p4 = p1.offset(0.0, self.height);
        [p1, p2, p3, p4]
    }

    pub fn center(&self) -> Point {
        self.corner.offset(self.width / 2.0, self.height / 2.0)
    }

    /// Express this rectangle as `(coordinate, a, b)` arguments in `mode`
    pub fn to_mode(&self, mode: ShapeMode) -> (Point, f64, f64) {
        match mode {
            ShapeMode::Corner => (self.corner, self.width, self.height),
            ShapeMode::Corners => (
                self.corner,
                self.corner.x + self.width,
                self.corner.y + self.height,
            ),
            ShapeMode::Center => (self.center(), self.width, self.height),
            ShapeMode::Radius => (self.center(), self.width / 2.0, self.height / 2.0),
        }
    }
}

/// Canonical ellipse: a center plus radii
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseExtent {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
}

impl EllipseExtent {
    /// Express this ellipse as `(coordinate, a, b)` arguments in `mode`
    pub fn to_mode(&self, mode: ShapeMode) -> (Point, f64, f64) {
        let corner = self.center.offset(-self.rx, -self.ry);
        match mode {
            ShapeMode::Corner => (corner, self.rx * 2.0, self.ry * 2.0),
            ShapeMode::Corners => (corner, self.center.x + self.rx, self.center.y + self.ry),
            ShapeMode::Center => (self.center, self.rx * 2.0, self.ry * 2.0),
            ShapeMode::Radius => (self.center, self.rx, self.ry),
        }
    }
}

fn check_sizes(a: f64, b: f64) -> Result<(), ShapeError> {
    check_finite(a).map_err(|e| ShapeError::invalid("size", a, e))?;
    check_finite(b).map_err(|e| ShapeError::invalid("size", b, e))?;
    Ok(())
}

/// Resolve rectangle arguments into a corner plus width/height.
///
/// For `Corners`, `(a, b)` is the opposite corner; width and height come out
/// negative when it lies left of or below `coordinate`.
pub fn normalize_rect(
    mode: ShapeMode,
    coordinate: Point,
    a: f64,
    b: f64,
) -> Result<RectExtent, ShapeError> {
    let coordinate = coordinate.checked("coordinate")?;
    check_sizes(a, b)?;

    let extent = match mode {
        ShapeMode::Corner => RectExtent { corner: coordinate, width: a, height: b },
        ShapeMode::Center => RectExtent {
            corner: coordinate.offset(-a / 2.0, -b / 2.0),
            width: a,
            height: b,
        },
        ShapeMode::Radius => RectExtent {
            corner: coordinate.offset(-a, -b),
            width: 2.0 * a,
            height: 2.0 * b,
        },
        ShapeMode::Corners => RectExtent {
            corner: coordinate,
            width: a - coordinate.x,
            height: b - coordinate.y,
        },
    };
    Ok(extent)
}

/// Resolve ellipse arguments into a center plus radii.
pub fn normalize_ellipse(
    mode: ShapeMode,
    coordinate: Point,
    a: f64,
    b: f64,
) -> Result<EllipseExtent, ShapeError> {
    let coordinate = coordinate.checked("coordinate")?;
    check_sizes(a, b)?;

    let extent = match mode {
        ShapeMode::Corner => EllipseExtent {
            center: coordinate.offset(a / 2.0, b / 2.0),
            rx: a / 2.0,
            ry: b / 2.0,
        },
        ShapeMode::Center => EllipseExtent { center: coordinate, rx: a / 2.0, ry: b / 2.0 },
        ShapeMode::Radius => EllipseExtent { center: coordinate, rx: a, ry: b },
        ShapeMode::Corners => {
            return normalize_ellipse(
                ShapeMode::Corner,
                coordinate,
                a - coordinate.x,
                b - coordinate.y,
            );
        }
    };
    Ok(extent)
}

/// Reject `Corners` for shapes whose single size has no opposite corner.
pub(crate) fn forbid_corners(primitive: &'static str, mode: ShapeMode) -> Result<(), ShapeError> {
    if mode == ShapeMode::Corners {
        return Err(ShapeError::UnsupportedMode { primitive, mode: mode.name() });
    }
    Ok(())
}

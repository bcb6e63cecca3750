//! Default accuracy and resolution settings

use super::normalize::ShapeMode;

/// Lower bound on arc subdivisions, so tiny shapes still look round.
pub const MIN_POINT_ACCURACY: usize = 20;
/// Upper bound on arc subdivisions, so huge shapes don't waste vertices.
pub const MAX_POINT_ACCURACY: usize = 200;
/// Screen-space length covered by one arc segment. Smaller is smoother.
pub const POINT_ACCURACY_FACTOR: f64 = 10.0;

/// Entries in the sine/cosine table (0.1 degree resolution).
pub const SINCOS_LENGTH: usize = 3600;

/// Segments per bezier.
pub const BEZIER_DETAIL: usize = 20;
/// Segments per Catmull-Rom curve.
pub const CURVE_DETAIL: usize = 20;
/// Catmull-Rom tightness; 0 is the classic spline.
pub const CURVE_TIGHTNESS: f64 = 0.0;

pub const DEFAULT_RECT_MODE: ShapeMode = ShapeMode::Corner;
pub const DEFAULT_ELLIPSE_MODE: ShapeMode = ShapeMode::Center;

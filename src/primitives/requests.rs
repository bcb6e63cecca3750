//! Typed primitive requests
//!
//! Each primitive resolves its positional [`Args`] once into a request struct,
//! then builds a [`Shape`] from it. Composite primitives delegate: rect and
//! square become quads, ellipse and circle become arcs, and a point becomes a
//! square or circle depending on the stroke cap.

use std::f64::consts::TAU;

use enum_dispatch::enum_dispatch;
use glam::DMat4;

use super::context::ShapeContext;
use super::curves::{sample_bezier, sample_curve};
use super::dispatch::Renderer;
use super::normalize::{ShapeMode, forbid_corners, normalize_ellipse, normalize_rect};
use super::shapes::{ArcGeometry, ArcMode, Shape, Topology};
use crate::args::Args;
use crate::errors::ShapeError;
use crate::types::{Point, Stroke, StrokeCap};

/// Renderer state read while building: a snapshot, never tracked afterwards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    pub transform: DMat4,
    pub stroke: Stroke,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            transform: DMat4::IDENTITY,
            stroke: Stroke::default(),
        }
    }
}

impl RenderState {
    pub fn of<R: Renderer + ?Sized>(renderer: &R) -> Self {
        Self {
            transform: renderer.transform_matrix(),
            stroke: renderer.stroke(),
        }
    }
}

/// A resolved primitive that knows how to build itself
#[enum_dispatch]
pub trait Primitive {
    /// Name used in error messages and by the registry
    fn name(&self) -> &'static str;

    /// Build the shape. Fails before producing any vertex.
    fn build(&self, ctx: &ShapeContext, state: &RenderState) -> Result<Shape, ShapeError>;
}

/// Any primitive request
#[enum_dispatch(Primitive)]
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    PointRequest,
    LineRequest,
    TriangleRequest,
    QuadRequest,
    BezierRequest,
    CurveRequest,
    RectRequest,
    SquareRequest,
    EllipseRequest,
    CircleRequest,
    ArcRequest,
}

impl Request {
    /// Resolve a primitive by name, as the registry does.
    ///
    /// `mode` is a rect mode for rect/square, an ellipse mode for
    /// ellipse/circle and a closure mode for arc.
    pub fn parse(name: &str, args: &Args, mode: Option<&str>) -> Result<Request, ShapeError> {
        let request: Request = match name {
            "point" => PointRequest::from_args(args)?.into(),
            "line" => LineRequest::from_args(args)?.into(),
            "triangle" => TriangleRequest::from_args(args)?.into(),
            "quad" => QuadRequest::from_args(args)?.into(),
            "bezier" => BezierRequest::from_args(args)?.into(),
            "curve" => CurveRequest::from_args(args)?.into(),
            "rect" => {
                let mut r = RectRequest::from_args(args)?;
                r.mode = merge_mode("rect", r.mode, mode, args)?;
                return Ok(r.into());
            }
            "square" => {
                let mut r = SquareRequest::from_args(args)?;
                r.mode = mode.map(str::parse::<ShapeMode>).transpose()?;
                return Ok(r.into());
            }
            "ellipse" => {
                let mut r = EllipseRequest::from_args(args)?;
                r.mode = merge_mode("ellipse", r.mode, mode, args)?;
                return Ok(r.into());
            }
            "circle" => {
                let mut r = CircleRequest::from_args(args)?;
                r.mode = mode.map(str::parse::<ShapeMode>).transpose()?;
                return Ok(r.into());
            }
            "arc" => {
                let mut r = ArcRequest::from_args(args)?;
                r.closure = mode.map(str::parse::<ArcMode>).transpose()?;
                return Ok(r.into());
            }
            _ => return Err(ShapeError::UnknownPrimitive { name: name.to_string() }),
        };
        if mode.is_some() {
            return Err(ShapeError::ModeNotAccepted { primitive: request.name() });
        }
        Ok(request)
    }
}

fn arity(primitive: &'static str, expected: &'static str, args: &Args) -> ShapeError {
    ShapeError::Arity {
        primitive,
        expected,
        got: args.describe(),
    }
}

/// Two corner points imply CORNERS; any other explicit mode conflicts
fn merge_mode(
    primitive: &'static str,
    implied: Option<ShapeMode>,
    given: Option<&str>,
    args: &Args,
) -> Result<Option<ShapeMode>, ShapeError> {
    let given = given.map(str::parse::<ShapeMode>).transpose()?;
    match (implied, given) {
        (Some(implied), Some(given)) if implied != given => {
            Err(arity(primitive, "2 corner points only in CORNERS mode", args))
        }
        (implied, given) => Ok(given.or(implied)),
    }
}

/// Four points given either grouped or as 8 (2D) / 12 (3D) scalars
fn four_points(primitive: &'static str, args: &Args) -> Result<[Point; 4], ShapeError> {
    args.points::<4>()
        .or_else(|| args.flat_points::<4>(2))
        .or_else(|| args.flat_points::<4>(3))
        .ok_or_else(|| arity(primitive, "4 points, 8 scalars or 12 scalars", args))
}

fn checked_all<const N: usize>(points: [Point; N]) -> Result<[Point; N], ShapeError> {
    for p in points {
        p.checked("vertex")?;
    }
    Ok(points)
}

// ============================================================================
// Straight-edged primitives
// ============================================================================

/// A single point, drawn according to the stroke cap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRequest {
    pub at: Point,
}

impl PointRequest {
    pub fn from_args(args: &Args) -> Result<Self, ShapeError> {
        let at = args
            .points::<1>()
            .or_else(|| args.flat_points::<1>(2))
            .or_else(|| args.flat_points::<1>(3))
            .ok_or_else(|| arity("point", "1 point, 2 scalars or 3 scalars", args))?;
        Ok(Self { at: at[0] })
    }
}

impl Primitive for PointRequest {
    fn name(&self) -> &'static str {
        "point"
    }

    fn build(&self, ctx: &ShapeContext, state: &RenderState) -> Result<Shape, ShapeError> {
        let at = self.at.checked("point")?;
        let weight = state.stroke.weight;
        match state.stroke.cap {
            StrokeCap::Square => Ok(Shape::new(vec![at], Topology::PointList)),
            StrokeCap::Project => SquareRequest {
                coordinate: at,
                side: weight,
                mode: Some(ShapeMode::Center),
            }
            .build(ctx, state),
            StrokeCap::Round => CircleRequest {
                coordinate: at,
                diameter: weight,
                mode: Some(ShapeMode::Center),
            }
            .build(ctx, state),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineRequest {
    pub from: Point,
    pub to: Point,
}

impl LineRequest {
    pub fn from_args(args: &Args) -> Result<Self, ShapeError> {
        let [from, to] = args
            .points::<2>()
            .or_else(|| args.flat_points::<2>(2))
            .or_else(|| args.flat_points::<2>(3))
            .ok_or_else(|| arity("line", "2 points, 4 scalars or 6 scalars", args))?;
        Ok(Self { from, to })
    }
}

impl Primitive for LineRequest {
    fn name(&self) -> &'static str {
        "line"
    }

    fn build(&self, _ctx: &ShapeContext, _state: &RenderState) -> Result<Shape, ShapeError> {
        let vertices = checked_all([self.from, self.to])?;
        Ok(Shape::new(vertices.to_vec(), Topology::LineList))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleRequest {
    pub points: [Point; 3],
}

impl TriangleRequest {
    pub fn from_args(args: &Args) -> Result<Self, ShapeError> {
        let points = args
            .points::<3>()
            .or_else(|| args.flat_points::<3>(2))
            .ok_or_else(|| arity("triangle", "3 points or 6 scalars", args))?;
        Ok(Self { points })
    }
}

impl Primitive for TriangleRequest {
    fn name(&self) -> &'static str {
        "triangle"
    }

    fn build(&self, _ctx: &ShapeContext, _state: &RenderState) -> Result<Shape, ShapeError> {
        let vertices = checked_all(self.points)?;
        Ok(Shape::new(vertices.to_vec(), Topology::TriangleList))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadRequest {
    pub points: [Point; 4],
}

impl QuadRequest {
    pub fn from_args(args: &Args) -> Result<Self, ShapeError> {
        let points = args
            .points::<4>()
            .or_else(|| args.flat_points::<4>(2))
            .ok_or_else(|| arity("quad", "4 points or 8 scalars", args))?;
        Ok(Self { points })
    }
}

impl Primitive for QuadRequest {
    fn name(&self) -> &'static str {
        "quad"
    }

    fn build(&self, _ctx: &ShapeContext, _state: &RenderState) -> Result<Shape, ShapeError> {
        let vertices = checked_all(self.points)?;
        Ok(Shape::new(vertices.to_vec(), Topology::QuadList))
    }
}

// ============================================================================
// Curves
// ============================================================================

/// Cubic bezier: start anchor, two control points, stop anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierRequest {
    pub points: [Point; 4],
}

impl BezierRequest {
    pub fn from_args(args: &Args) -> Result<Self, ShapeError> {
        Ok(Self { points: four_points("bezier", args)? })
    }
}

impl Primitive for BezierRequest {
    fn name(&self) -> &'static str {
        "bezier"
    }

    fn build(&self, ctx: &ShapeContext, _state: &RenderState) -> Result<Shape, ShapeError> {
        let points = checked_all(self.points)?;
        let vertices = sample_bezier(points, ctx.curves.bezier_detail());
        Ok(Shape::new(vertices, Topology::LineStrip))
    }
}

/// Catmull-Rom segment between the middle two of four points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveRequest {
    pub points: [Point; 4],
}

impl CurveRequest {
    pub fn from_args(args: &Args) -> Result<Self, ShapeError> {
        Ok(Self { points: four_points("curve", args)? })
    }
}

impl Primitive for CurveRequest {
    fn name(&self) -> &'static str {
        "curve"
    }

    fn build(&self, ctx: &ShapeContext, _state: &RenderState) -> Result<Shape, ShapeError> {
        let points = checked_all(self.points)?;
        let vertices = sample_curve(points, ctx.curves.curve_detail(), ctx.curves.curve_tightness());
        Ok(Shape::new(vertices, Topology::LineStrip))
    }
}

// ============================================================================
// Rectangles
// ============================================================================

/// Rectangle; `(a, b)` meaning depends on the mode.
///
/// `mode: None` uses the context's rect mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectRequest {
    pub coordinate: Point,
    pub a: f64,
    pub b: f64,
    pub mode: Option<ShapeMode>,
}

impl RectRequest {
    pub fn from_args(args: &Args) -> Result<Self, ShapeError> {
        if let Some((coordinate, [a, b])) = args.point_then_scalars::<2>() {
            return Ok(Self { coordinate, a, b, mode: None });
        }
        if let Some([x, y, a, b]) = args.scalars::<4>() {
            return Ok(Self { coordinate: Point::xy(x, y), a, b, mode: None });
        }
        if let Some([p1, p2]) = args.points::<2>() {
            return Ok(Self { coordinate: p1, a: p2.x, b: p2.y, mode: Some(ShapeMode::Corners) });
        }
        Err(arity("rect", "a point and 2 scalars, 4 scalars, or 2 corner points", args))
    }

    pub fn with_mode(mut self, mode: ShapeMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

impl Primitive for RectRequest {
    fn name(&self) -> &'static str {
        "rect"
    }

    fn build(&self, ctx: &ShapeContext, state: &RenderState) -> Result<Shape, ShapeError> {
        let mode = self.mode.unwrap_or(ctx.rect_mode());
        let extent = normalize_rect(mode, self.coordinate, self.a, self.b)?;
        QuadRequest { points: extent.corners() }.build(ctx, state)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareRequest {
    pub coordinate: Point,
    /// Side length, or half of it in RADIUS mode
    pub side: f64,
    pub mode: Option<ShapeMode>,
}

impl SquareRequest {
    pub fn from_args(args: &Args) -> Result<Self, ShapeError> {
        if let Some((coordinate, [side])) = args.point_then_scalars::<1>() {
            return Ok(Self { coordinate, side, mode: None });
        }
        if let Some([x, y, side]) = args.scalars::<3>() {
            return Ok(Self { coordinate: Point::xy(x, y), side, mode: None });
        }
        Err(arity("square", "a point and 1 scalar, or 3 scalars", args))
    }

    pub fn with_mode(mut self, mode: ShapeMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

impl Primitive for SquareRequest {
    fn name(&self) -> &'static str {
        "square"
    }

    fn build(&self, ctx: &ShapeContext, state: &RenderState) -> Result<Shape, ShapeError> {
        let mode = self.mode.unwrap_or(ctx.rect_mode());
        forbid_corners("square", mode)?;
        RectRequest {
            coordinate: self.coordinate,
            a: self.side,
            b: self.side,
            mode: Some(mode),
        }
        .build(ctx, state)
    }
}

// ============================================================================
// Ellipses and arcs
// ============================================================================

/// Full ellipse, closed as a chord
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseRequest {
    pub coordinate: Point,
    pub a: f64,
    pub b: f64,
    pub mode: Option<ShapeMode>,
}

impl EllipseRequest {
    pub fn from_args(args: &Args) -> Result<Self, ShapeError> {
        if let Some((coordinate, [a, b])) = args.point_then_scalars::<2>() {
            return Ok(Self { coordinate, a, b, mode: None });
        }
        if let Some([x, y, a, b]) = args.scalars::<4>() {
            return Ok(Self { coordinate: Point::xy(x, y), a, b, mode: None });
        }
        if let Some([p1, p2]) = args.points::<2>() {
            return Ok(Self { coordinate: p1, a: p2.x, b: p2.y, mode: Some(ShapeMode::Corners) });
        }
        Err(arity("ellipse", "a point and 2 scalars, 4 scalars, or 2 corner points", args))
    }

    pub fn with_mode(mut self, mode: ShapeMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

impl Primitive for EllipseRequest {
    fn name(&self) -> &'static str {
        "ellipse"
    }

    fn build(&self, ctx: &ShapeContext, state: &RenderState) -> Result<Shape, ShapeError> {
        ArcRequest {
            coordinate: self.coordinate,
            width: self.a,
            height: self.b,
            start: 0.0,
            stop: TAU,
            closure: Some(ArcMode::Chord),
            ellipse_mode: Some(self.mode.unwrap_or(ctx.ellipse_mode())),
        }
        .build(ctx, state)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleRequest {
    pub coordinate: Point,
    /// Diameter, or radius in RADIUS mode
    pub diameter: f64,
    pub mode: Option<ShapeMode>,
}

impl CircleRequest {
    pub fn from_args(args: &Args) -> Result<Self, ShapeError> {
        if let Some((coordinate, [diameter])) = args.point_then_scalars::<1>() {
            return Ok(Self { coordinate, diameter, mode: None });
        }
        if let Some([x, y, diameter]) = args.scalars::<3>() {
            return Ok(Self { coordinate: Point::xy(x, y), diameter, mode: None });
        }
        Err(arity("circle", "a point and 1 scalar, or 3 scalars", args))
    }

    pub fn with_mode(mut self, mode: ShapeMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

impl Primitive for CircleRequest {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn build(&self, ctx: &ShapeContext, state: &RenderState) -> Result<Shape, ShapeError> {
        let mode = self.mode.unwrap_or(ctx.ellipse_mode());
        forbid_corners("circle", mode)?;
        EllipseRequest {
            coordinate: self.coordinate,
            a: self.diameter,
            b: self.diameter,
            mode: Some(mode),
        }
        .build(ctx, state)
    }
}

/// Part of an ellipse between two angles (radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcRequest {
    pub coordinate: Point,
    pub width: f64,
    pub height: f64,
    pub start: f64,
    pub stop: f64,
    /// `None` leaves the closure unset: an open fan from the center
    pub closure: Option<ArcMode>,
    /// `None` uses the context's ellipse mode
    pub ellipse_mode: Option<ShapeMode>,
}

impl ArcRequest {
    pub fn from_args(args: &Args) -> Result<Self, ShapeError> {
        let (coordinate, [width, height, start, stop]) = args
            .point_then_scalars::<4>()
            .or_else(|| {
                args.scalars::<6>()
                    .map(|[x, y, w, h, s, e]| (Point::xy(x, y), [w, h, s, e]))
            })
            .ok_or_else(|| arity("arc", "a point and 4 scalars, or 6 scalars", args))?;
        Ok(Self {
            coordinate,
            width,
            height,
            start,
            stop,
            closure: None,
            ellipse_mode: None,
        })
    }

    pub fn with_closure(mut self, closure: ArcMode) -> Self {
        self.closure = Some(closure);
        self
    }

    pub fn with_ellipse_mode(mut self, mode: ShapeMode) -> Self {
        self.ellipse_mode = Some(mode);
        self
    }
}

impl Primitive for ArcRequest {
    fn name(&self) -> &'static str {
        "arc"
    }

    fn build(&self, ctx: &ShapeContext, state: &RenderState) -> Result<Shape, ShapeError> {
        let mode = self.ellipse_mode.unwrap_or(ctx.ellipse_mode());
        let extent = normalize_ellipse(mode, self.coordinate, self.width, self.height)?;
        let geometry = ArcGeometry {
            center: extent.center,
            radii: (extent.rx, extent.ry),
            start: self.start,
            stop: self.stop,
            mode: self.closure,
        };
        let vertices = ctx.tessellator().tessellate(&geometry, &state.transform)?;
        Ok(Shape::arc(geometry, vertices))
    }
}

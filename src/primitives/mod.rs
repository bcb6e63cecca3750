//! Primitive construction
//!
//! Constructors turn positional arguments into canonical [`Shape`]s. Every
//! primitive has two entry points on [`ShapeContext`]:
//!
//! - [`ShapeContext::build`] returns the shape and never touches the renderer
//!   beyond reading its transform and stroke.
//! - [`ShapeContext::draw`] builds and then submits the result exactly once.
//!
//! The named helpers (`rect`, `ellipse`, ...) draw. [`ShapeContext::create_shape`]
//! is the by-name registry; its shapes are hidden and never drawn.

mod context;
pub mod curves;
pub mod defaults;
mod dispatch;
pub mod normalize;
mod requests;
pub mod shapes;
pub mod tessellate;

pub use context::ShapeContext;
pub use dispatch::{Renderer, draw_shape};
pub use normalize::ShapeMode;
pub use requests::{
    ArcRequest, BezierRequest, CircleRequest, CurveRequest, EllipseRequest, LineRequest,
    PointRequest, Primitive, QuadRequest, RectRequest, RenderState, Request, SquareRequest,
    TriangleRequest,
};
pub use shapes::{ArcGeometry, ArcMode, Shape, ShapeKind, ShapeStyle, StyleValue, Topology};
pub use tessellate::{ArcAccuracy, ArcTessellator, SinCosTable};

use crate::args::Args;
use crate::errors::ShapeError;
use crate::log::debug;

impl ShapeContext {
    /// Build a shape without drawing it
    pub fn build<R: Renderer + ?Sized>(
        &self,
        renderer: &R,
        request: impl Into<Request>,
    ) -> Result<Shape, ShapeError> {
        let request = request.into();
        let state = RenderState::of(renderer);
        let shape = request.build(self, &state)?;
        debug!(
            primitive = request.name(),
            vertices = shape.vertices().len(),
            topology = ?shape.topology(),
            "built"
        );
        Ok(shape)
    }

    /// Build a shape and submit it to the renderer once.
    ///
    /// Nothing is submitted when building fails.
    pub fn draw<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        request: impl Into<Request>,
    ) -> Result<Shape, ShapeError> {
        let shape = self.build(&*renderer, request)?;
        draw_shape(renderer, &shape);
        Ok(shape)
    }

    /// Build a primitive by name.
    ///
    /// `kind: None` gives an empty shape meant to hold children. The returned
    /// shape is hidden; callers reveal it by setting [`Shape::visible`].
    pub fn create_shape<R: Renderer + ?Sized>(
        &self,
        renderer: &R,
        kind: Option<&str>,
        args: impl Into<Args>,
        mode: Option<&str>,
    ) -> Result<Shape, ShapeError> {
        let Some(kind) = kind else {
            debug!("create_shape: empty group");
            return Ok(Shape::empty().hidden());
        };
        debug!(kind, mode, "create_shape");
        let request = Request::parse(kind, &args.into(), mode)?;
        Ok(self.build(renderer, request)?.hidden())
    }
}

macro_rules! drawing_helpers {
    ($($(#[$meta:meta])* $name:ident => $request:ident;)+) => {
        impl ShapeContext {
            $(
                $(#[$meta])*
                pub fn $name<R: Renderer + ?Sized>(
                    &self,
                    renderer: &mut R,
                    args: impl Into<Args>,
                ) -> Result<Shape, ShapeError> {
                    let request = $request::from_args(&args.into())?;
                    self.draw(renderer, request)
                }
            )+
        }
    };
}

drawing_helpers! {
    /// Point drawn according to the renderer's stroke cap
    point => PointRequest;
    line => LineRequest;
    triangle => TriangleRequest;
    quad => QuadRequest;
    /// Cubic bezier sampled at the context's bezier detail
    bezier => BezierRequest;
    /// Catmull-Rom segment sampled at the context's curve detail and tightness
    curve => CurveRequest;
    /// Rectangle in the context's rect mode, unless given two corner points
    rect => RectRequest;
    square => SquareRequest;
    /// Ellipse in the context's ellipse mode, unless given two corner points
    ellipse => EllipseRequest;
    circle => CircleRequest;
    /// Arc in the context's ellipse mode with an unset closure
    arc => ArcRequest;
}

//! Shape types produced by the primitive constructors
//!
//! A [`Shape`] is a finished vertex buffer plus the topology the renderer
//! should assemble it with. Arcs keep the parameters they were tessellated
//! from; the vertices are a snapshot of the transform at construction time
//! and are never recomputed behind the caller's back.

use std::fmt;
use std::str::FromStr;

use crate::errors::ShapeError;
use crate::types::{Color, Point, StrokeCap, StrokeJoin};

/// How the renderer assembles vertices into primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    PointList,
    LineList,
    LineStrip,
    TriangleList,
    QuadList,
    TriangleFan,
    /// Closed outline that the renderer must triangulate itself
    TessellatedPolygon,
}

/// A style attribute that either inherits the renderer's current setting or
/// overrides it
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StyleValue<T> {
    #[default]
    Auto,
    Set(T),
}

impl<T> StyleValue<T> {
    /// The explicit value, or `current` when inheriting
    pub fn resolve<'a>(&'a self, current: &'a T) -> &'a T {
        match self {
            StyleValue::Auto => current,
            StyleValue::Set(v) => v,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, StyleValue::Auto)
    }
}

impl<T> From<T> for StyleValue<T> {
    fn from(v: T) -> Self {
        StyleValue::Set(v)
    }
}

/// Per-shape style overrides
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeStyle {
    pub fill: StyleValue<Color>,
    pub stroke: StyleValue<Color>,
    pub stroke_weight: StyleValue<f64>,
    pub stroke_join: StyleValue<StrokeJoin>,
    pub stroke_cap: StyleValue<StrokeCap>,
}

/// How an arc's outline is closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcMode {
    /// Just the curve
    Open,
    /// Curve plus a straight segment between its endpoints
    Chord,
    /// Curve plus two radii back to the center
    Pie,
}

impl ArcMode {
    pub fn name(self) -> &'static str {
        match self {
            ArcMode::Open => "OPEN",
            ArcMode::Chord => "CHORD",
            ArcMode::Pie => "PIE",
        }
    }
}

impl fmt::Display for ArcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArcMode {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "OPEN" => Ok(ArcMode::Open),
            "CHORD" => Ok(ArcMode::Chord),
            "PIE" => Ok(ArcMode::Pie),
            _ => Err(ShapeError::UnknownArcMode { value: s.to_string() }),
        }
    }
}

/// Parameters an arc was tessellated from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub center: Point,
    /// `(rx, ry)`
    pub radii: (f64, f64),
    /// Radians
    pub start: f64,
    /// Radians
    pub stop: f64,
    /// `None` draws a fan from the center without closing it
    pub mode: Option<ArcMode>,
}

impl ArcGeometry {
    /// Open and chord arcs are outlines; pies and unset arcs are fans
    pub fn topology(&self) -> Topology {
        match self.mode {
            Some(ArcMode::Open | ArcMode::Chord) => Topology::TessellatedPolygon,
            Some(ArcMode::Pie) | None => Topology::TriangleFan,
        }
    }
}

/// What a shape's vertices represent
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    /// Output of a straight-edged primitive or curve
    Path,
    /// A tessellated arc, ellipse or circle
    Arc(ArcGeometry),
    /// A flattened geometry buffer; drawn as a single unit
    Geometry,
}

/// A canonical shape ready for the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    vertices: Vec<Point>,
    topology: Topology,
    kind: ShapeKind,
    pub style: ShapeStyle,
    pub children: Vec<Shape>,
    pub visible: bool,
}

impl Default for Shape {
    fn default() -> Self {
        Self::empty()
    }
}

impl Shape {
    pub fn new(vertices: Vec<Point>, topology: Topology) -> Self {
        Self {
            vertices,
            topology,
            kind: ShapeKind::Path,
            style: ShapeStyle::default(),
            children: Vec::new(),
            visible: true,
        }
    }

    /// A generic shape with no vertices, to be filled with children
    pub fn empty() -> Self {
        Self::new(Vec::new(), Topology::TessellatedPolygon)
    }

    /// Wrap already tessellated arc vertices
    pub fn arc(geometry: ArcGeometry, vertices: Vec<Point>) -> Self {
        Self {
            topology: geometry.topology(),
            kind: ShapeKind::Arc(geometry),
            ..Self::new(vertices, Topology::TriangleFan)
        }
    }

    /// A flattened geometry buffer; its children are never drawn
    pub fn geometry(vertices: Vec<Point>, topology: Topology) -> Self {
        Self {
            kind: ShapeKind::Geometry,
            ..Self::new(vertices, topology)
        }
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_child(mut self, child: Shape) -> Self {
        self.children.push(child);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Arc parameters, for arcs, ellipses and circles
    pub fn arc_geometry(&self) -> Option<&ArcGeometry> {
        match &self.kind {
            ShapeKind::Arc(g) => Some(g),
            _ => None,
        }
    }

    /// Whether drawing stops at this shape instead of visiting children
    pub fn is_leaf_geometry(&self) -> bool {
        matches!(self.kind, ShapeKind::Geometry)
    }
}

//! End-to-end behaviour of the primitive constructors against a recording
//! renderer.

use std::f64::consts::{PI, TAU};

use approx::assert_relative_eq;
use glam::{DMat4, DVec3};
use sketchgeom::args;
use sketchgeom::primitives::{
    ArcMode, ArcRequest, RectRequest, Renderer, Shape, ShapeContext, ShapeMode, Topology,
};
use sketchgeom::types::{Point, Stroke, StrokeCap};
use sketchgeom::{Args, ShapeError};

/// Records every submitted shape
struct Recorder {
    transform: DMat4,
    stroke: Stroke,
    drawn: Vec<Shape>,
}

impl Recorder {
    fn new() -> Self {
        Self::scaled(1.0)
    }

    fn scaled(s: f64) -> Self {
        Self {
            transform: DMat4::from_scale(DVec3::new(s, s, 1.0)),
            stroke: Stroke::default(),
            drawn: Vec::new(),
        }
    }
}

impl Renderer for Recorder {
    fn transform_matrix(&self) -> DMat4 {
        self.transform
    }

    fn stroke(&self) -> Stroke {
        self.stroke
    }

    fn render(&mut self, shape: &Shape) {
        self.drawn.push(shape.clone());
    }
}

fn format_vertices(shape: &Shape) -> String {
    shape
        .vertices()
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn rect_corner_vertex_order() {
    let ctx = ShapeContext::new();
    let mut r = Recorder::new();
    let rect = ctx.rect(&mut r, args![10.0, 10.0, 40.0, 20.0]).unwrap();

    assert_eq!(rect.topology(), Topology::QuadList);
    insta::assert_snapshot!(format_vertices(&rect), @r"
    (10, 10, 0)
    (50, 10, 0)
    (50, 30, 0)
    (10, 30, 0)
    ");
    assert_eq!(r.drawn, vec![rect]);
}

#[test]
fn rect_modes_describe_the_same_rectangle() {
    let ctx = ShapeContext::new();
    let r = Recorder::new();
    let expected = ctx.build(&r, RectRequest::from_args(&args![10.0, 10.0, 40.0, 20.0]).unwrap());

    let cases = [
        (ShapeMode::Corners, args![10.0, 10.0, 50.0, 30.0]),
        (ShapeMode::Center, args![30.0, 20.0, 40.0, 20.0]),
        (ShapeMode::Radius, args![30.0, 20.0, 20.0, 10.0]),
    ];
    for (mode, a) in cases {
        let req = RectRequest::from_args(&a).unwrap().with_mode(mode);
        assert_eq!(ctx.build(&r, req), expected, "{mode}");
    }
}

#[test]
fn rect_from_two_corner_points() {
    let ctx = ShapeContext::new();
    let mut r = Recorder::new();
    let rect = ctx.rect(&mut r, args![(10.0, 10.0), (50.0, 30.0)]).unwrap();
    assert_eq!(rect.vertices()[0], Point::xy(10.0, 10.0));
    assert_eq!(rect.vertices()[2], Point::xy(50.0, 30.0));
}

#[test]
fn context_modes_apply_until_restored() {
    let mut ctx = ShapeContext::new();
    let mut r = Recorder::new();

    let centered = ctx.with_rect_mode(ShapeMode::Center, |ctx| {
        ctx.square(&mut r, args![0.0, 0.0, 10.0]).unwrap()
    });
    assert_eq!(centered.vertices()[0], Point::xy(-5.0, -5.0));

    let cornered = ctx.square(&mut r, args![0.0, 0.0, 10.0]).unwrap();
    assert_eq!(cornered.vertices()[0], Point::ORIGIN);
}

#[test]
fn circle_is_closed_and_bounded() {
    let ctx = ShapeContext::new();
    let mut r = Recorder::new();
    for diameter in [0.5, 10.0, 100.0, 1000.0, 10_000.0] {
        let circle = ctx.circle(&mut r, args![0.0, 0.0, diameter]).unwrap();
        let v = circle.vertices();
        // walk + stop vertex + closing vertex
        let segments = v.len() - 2;
        assert!((20..=200).contains(&segments), "d = {diameter}: {segments}");
        assert_eq!(v.first(), v.last());
        assert_eq!(circle.topology(), Topology::TessellatedPolygon);

        let radius = diameter / 2.0;
        for p in v {
            assert_relative_eq!(p.distance(Point::ORIGIN), radius, max_relative = 1e-9);
        }
    }
}

#[test]
fn circle_density_follows_transform_scale() {
    let ctx = ShapeContext::new();
    let counts: Vec<usize> = [0.01, 1.0, 100.0]
        .into_iter()
        .map(|s| {
            let mut r = Recorder::scaled(s);
            ctx.circle(&mut r, args![0.0, 0.0, 100.0]).unwrap().vertices().len()
        })
        .collect();

    assert_eq!(counts[0], 22);
    assert!(counts[0] < counts[1] && counts[1] < counts[2], "{counts:?}");
    assert_eq!(counts[2], 202);
}

#[test]
fn custom_tessellator_accuracy() {
    let ctx = ShapeContext::new()
        .with_accuracy(sketchgeom::primitives::ArcAccuracy::new(10.0, 4, 8).unwrap());
    let mut r = Recorder::scaled(100.0);
    let circle = ctx.circle(&mut r, args![0.0, 0.0, 100.0]).unwrap();
    assert_eq!(circle.vertices().len(), 8 + 2);
}

#[test]
fn arc_closures() {
    let ctx = ShapeContext::new();
    let r = Recorder::new();
    let base = ArcRequest::from_args(&args![0.0, 0.0, 20.0, 20.0, 0.0, PI / 2.0]).unwrap();

    let open = ctx.build(&r, base.with_closure(ArcMode::Open)).unwrap();
    let chord = ctx.build(&r, base.with_closure(ArcMode::Chord)).unwrap();
    let pie = ctx.build(&r, base.with_closure(ArcMode::Pie)).unwrap();
    let unset = ctx.build(&r, base).unwrap();

    assert_eq!(chord.vertices().len(), open.vertices().len() + 1);
    assert_eq!(pie.vertices().len(), open.vertices().len() + 2);
    assert_eq!(unset.vertices().len(), open.vertices().len() + 1);

    assert_eq!(pie.vertices()[0], Point::ORIGIN);
    assert_eq!(pie.vertices().last(), Some(&Point::ORIGIN));
    assert_eq!(unset.topology(), Topology::TriangleFan);
    assert_eq!(open.topology(), Topology::TessellatedPolygon);

    let first = open.vertices()[0];
    let last = *open.vertices().last().unwrap();
    assert_relative_eq!(first.x, 10.0, epsilon = 1e-9);
    assert_relative_eq!(last.y, 10.0, epsilon = 1e-9);
}

#[test]
fn empty_arc_span() {
    let ctx = ShapeContext::new();
    let mut r = Recorder::new();
    let arc = ctx.arc(&mut r, args![0.0, 0.0, 10.0, 10.0, 1.0, 1.0]).unwrap();
    assert!(arc.vertices().is_empty());
}

#[test]
fn huge_arc_span_is_one_turn() {
    let ctx = ShapeContext::new();
    let r = Recorder::new();
    let req = ArcRequest::from_args(&args![0.0, 0.0, 10.0, 10.0, 0.0, 1e300]).unwrap();
    let huge = ctx.build(&r, req).unwrap();

    let turn = ArcRequest::from_args(&args![0.0, 0.0, 10.0, 10.0, 0.0, TAU]).unwrap();
    let full = ctx.build(&r, turn).unwrap();
    assert_eq!(huge.vertices(), full.vertices());

    let moderate = ArcRequest::from_args(&args![0.0, 0.0, 10.0, 10.0, 0.0, 1e5]).unwrap();
    assert_eq!(ctx.build(&r, moderate).unwrap().vertices(), full.vertices());
}

#[test]
fn arc_in_corners_mode_uses_the_bounding_box() {
    let mut ctx = ShapeContext::new();
    ctx.set_ellipse_mode(ShapeMode::Corners);
    let mut r = Recorder::new();
    let arc = ctx.arc(&mut r, args![0.0, 0.0, 10.0, 6.0, 0.0, PI]).unwrap();
    let g = arc.arc_geometry().unwrap();
    assert_eq!(g.center, Point::xy(5.0, 3.0));
    assert_eq!(g.radii, (5.0, 3.0));

    let explicit = ArcRequest::from_args(&args![0.0, 0.0, 10.0, 6.0, 0.0, PI])
        .unwrap()
        .with_ellipse_mode(ShapeMode::Corner);
    assert_eq!(ctx.build(&r, explicit).unwrap().vertices(), arc.vertices());
}

#[test]
fn arc_keeps_z_of_center() {
    let ctx = ShapeContext::new();
    let mut r = Recorder::new();
    let arc = ctx
        .arc(&mut r, args![(0.0, 0.0, 7.0), 10.0, 10.0, 0.0, TAU])
        .unwrap();
    assert!(arc.vertices().iter().all(|p| p.z == 7.0));
}

#[test]
fn bezier_samples_include_both_anchors() {
    let mut ctx = ShapeContext::new();
    ctx.bezier_detail(8).unwrap();
    let mut r = Recorder::new();

    let flat = ctx
        .bezier(&mut r, args![0.0, 0.0, 10.0, 20.0, 30.0, 20.0, 40.0, 0.0])
        .unwrap();
    assert_eq!(flat.vertices().len(), 9);
    assert_eq!(flat.topology(), Topology::LineStrip);
    assert_relative_eq!(flat.vertices()[0].x, 0.0);
    assert_relative_eq!(flat.vertices()[8].x, 40.0, epsilon = 1e-9);
    assert_relative_eq!(flat.vertices()[8].y, 0.0, epsilon = 1e-9);

    let deep = ctx
        .bezier(
            &mut r,
            args![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0],
        )
        .unwrap();
    assert_eq!(deep.vertices().len(), 9);
    assert_relative_eq!(deep.vertices()[8].z, 3.0, epsilon = 1e-9);
    for (i, p) in deep.vertices().iter().enumerate() {
        let t = i as f64 / 8.0 * 3.0;
        assert_relative_eq!(p.z, t, epsilon = 1e-9);
    }
}

#[test]
fn curve_passes_through_middle_points() {
    let ctx = ShapeContext::new();
    let mut r = Recorder::new();
    let curve = ctx
        .curve(
            &mut r,
            args![(0.0, 0.0), (10.0, 10.0), (20.0, 10.0), (30.0, 0.0)],
        )
        .unwrap();

    let v = curve.vertices();
    assert_eq!(v.len(), 21);
    assert_relative_eq!(v[0].x, 10.0, epsilon = 1e-9);
    assert_relative_eq!(v[0].y, 10.0, epsilon = 1e-9);
    assert_relative_eq!(v[20].x, 20.0, epsilon = 1e-9);
    assert_relative_eq!(v[20].y, 10.0, epsilon = 1e-9);
}

#[test]
fn bad_arity_draws_nothing() {
    let ctx = ShapeContext::new();
    let mut r = Recorder::new();

    let cases: [(&str, Args); 7] = [
        ("line", args![0.0, 0.0, 1.0]),
        ("bezier", args![0.0, 0.0, 1.0, 1.0, 2.0]),
        ("rect", args![(0.0, 0.0), 1.0]),
        ("square", args![1.0, 2.0]),
        ("ellipse", args![(0.0, 0.0), 1.0]),
        ("circle", args![(0.0, 0.0), 1.0, 2.0]),
        ("arc", args![0.0, 0.0, 1.0, 1.0]),
    ];
    for (name, a) in cases {
        let err = match name {
            "line" => ctx.line(&mut r, a),
            "bezier" => ctx.bezier(&mut r, a),
            "rect" => ctx.rect(&mut r, a),
            "square" => ctx.square(&mut r, a),
            "ellipse" => ctx.ellipse(&mut r, a),
            "circle" => ctx.circle(&mut r, a),
            _ => ctx.arc(&mut r, a),
        }
        .unwrap_err();
        assert!(matches!(err, ShapeError::Arity { primitive, .. } if primitive == name), "{err}");
    }
    assert!(r.drawn.is_empty());
}

#[test]
fn non_finite_input_draws_nothing() {
    let ctx = ShapeContext::new();
    let mut r = Recorder::new();
    let err = ctx.line(&mut r, args![0.0, f64::NAN, 1.0, 1.0]).unwrap_err();
    assert!(matches!(err, ShapeError::InvalidValue { .. }));
    assert!(r.drawn.is_empty());
}

#[test]
fn corners_is_rejected_for_square_and_circle() {
    let mut ctx = ShapeContext::new();
    let mut r = Recorder::new();
    ctx.set_rect_mode(ShapeMode::Corners);
    ctx.set_ellipse_mode(ShapeMode::Corners);

    assert!(matches!(
        ctx.square(&mut r, args![0.0, 0.0, 5.0]),
        Err(ShapeError::UnsupportedMode { primitive: "square", .. })
    ));
    assert!(matches!(
        ctx.circle(&mut r, args![0.0, 0.0, 5.0]),
        Err(ShapeError::UnsupportedMode { primitive: "circle", .. })
    ));
    assert!(r.drawn.is_empty());

    // rect and ellipse still accept it
    assert!(ctx.rect(&mut r, args![0.0, 0.0, 5.0, 5.0]).is_ok());
    assert!(ctx.ellipse(&mut r, args![0.0, 0.0, 5.0, 5.0]).is_ok());
    assert_eq!(r.drawn.len(), 2);
}

#[test]
fn composite_primitives_draw_once() {
    let ctx = ShapeContext::new();
    let mut r = Recorder::new();
    ctx.square(&mut r, args![0.0, 0.0, 5.0]).unwrap();
    ctx.circle(&mut r, args![0.0, 0.0, 5.0]).unwrap();
    r.stroke.cap = StrokeCap::Project;
    ctx.point(&mut r, args![1.0, 1.0]).unwrap();
    assert_eq!(r.drawn.len(), 3);
}

#[test]
fn build_never_draws() {
    let ctx = ShapeContext::new();
    let r = Recorder::new();
    let req = ArcRequest::from_args(&args![0.0, 0.0, 10.0, 10.0, 0.0, PI]).unwrap();
    let shape = ctx.build(&r, req).unwrap();
    assert!(!shape.vertices().is_empty());
    assert!(r.drawn.is_empty());
}

#[test]
fn points_by_stroke_cap() {
    let ctx = ShapeContext::new();
    let mut r = Recorder::new();
    r.stroke.weight = 6.0;

    r.stroke.cap = StrokeCap::Square;
    let p = ctx.point(&mut r, args![(2.0, 3.0)]).unwrap();
    assert_eq!(p.topology(), Topology::PointList);
    assert_eq!(p.vertices(), &[Point::xy(2.0, 3.0)]);

    r.stroke.cap = StrokeCap::Project;
    let p = ctx.point(&mut r, args![2.0, 3.0]).unwrap();
    assert_eq!(p.topology(), Topology::QuadList);
    assert_eq!(p.vertices()[0], Point::xy(-1.0, 0.0));
    assert_eq!(p.vertices()[2], Point::xy(5.0, 6.0));

    r.stroke.cap = StrokeCap::Round;
    let p = ctx.point(&mut r, args![2.0, 3.0, 0.0]).unwrap();
    let arc = p.arc_geometry().unwrap();
    assert_eq!(arc.center, Point::xy(2.0, 3.0));
    assert_eq!(arc.radii, (3.0, 3.0));
}

#[test]
fn point_ignores_context_rect_mode() {
    let mut ctx = ShapeContext::new();
    ctx.set_rect_mode(ShapeMode::Corners);
    let mut r = Recorder::new();
    r.stroke.cap = StrokeCap::Project;
    r.stroke.weight = 2.0;
    let p = ctx.point(&mut r, args![0.0, 0.0]).unwrap();
    assert_eq!(p.vertices()[0], Point::xy(-1.0, -1.0));
}

#[test]
fn create_shape_by_name() {
    let ctx = ShapeContext::new();
    let r = Recorder::new();

    let rect = ctx
        .create_shape(&r, Some("rect"), args![0.0, 0.0, 4.0, 2.0], Some("CENTER"))
        .unwrap();
    assert!(!rect.visible);
    assert_eq!(rect.vertices()[0], Point::xy(-2.0, -1.0));

    let empty = ctx.create_shape(&r, None, args![], None).unwrap();
    assert!(empty.vertices().is_empty());
    assert!(!empty.visible);

    let pie = ctx
        .create_shape(&r, Some("arc"), args![0.0, 0.0, 4.0, 4.0, 0.0, PI], Some("pie"))
        .unwrap();
    assert_eq!(pie.arc_geometry().unwrap().mode, Some(ArcMode::Pie));

    assert!(matches!(
        ctx.create_shape(&r, Some("hexagon"), args![], None),
        Err(ShapeError::UnknownPrimitive { .. })
    ));
    assert!(r.drawn.is_empty());
}

#[test]
fn hidden_registry_shapes_are_skipped_when_drawn() {
    let ctx = ShapeContext::new();
    let mut r = Recorder::new();
    let group = ctx
        .create_shape(&r, None, args![], None)
        .unwrap()
        .with_child(
            ctx.create_shape(&r, Some("line"), args![0.0, 0.0, 1.0, 1.0], None)
                .unwrap(),
        );

    sketchgeom::primitives::draw_shape(&mut r, &group);
    assert!(r.drawn.is_empty());

    let mut shown = group;
    shown.visible = true;
    shown.children[0].visible = true;
    sketchgeom::primitives::draw_shape(&mut r, &shown);
    assert_eq!(r.drawn.len(), 2);
    assert_eq!(r.drawn[1].topology(), Topology::LineList);
}

#[test]
fn errors_render_with_help() {
    let ctx = ShapeContext::new();
    let mut r = Recorder::new();
    let err = ctx.triangle(&mut r, args![1.0]).unwrap_err();
    assert_eq!(err.to_string(), "unexpected arguments passed to triangle(): got (scalar)");
    let help = miette::Diagnostic::help(&err).map(|h| h.to_string());
    assert_eq!(help.as_deref(), Some("triangle() accepts 3 points or 6 scalars"));
}

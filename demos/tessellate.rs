use glam::{DMat4, DVec3};
use sketchgeom::args;
use sketchgeom::primitives::{Renderer, Shape, ShapeContext};
use sketchgeom::types::Stroke;

struct Counter {
    transform: DMat4,
    submitted: usize,
}

impl Renderer for Counter {
    fn transform_matrix(&self) -> DMat4 {
        self.transform
    }

    fn stroke(&self) -> Stroke {
        Stroke::default()
    }

    fn render(&mut self, shape: &Shape) {
        self.submitted += 1;
        println!("  {:?}: {} vertices", shape.topology(), shape.vertices().len());
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let diameter: f64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(100.0);

    let ctx = ShapeContext::new();
    for scale in [0.01, 0.1, 1.0, 10.0, 100.0] {
        let mut canvas = Counter {
            transform: DMat4::from_scale(DVec3::new(scale, scale, 1.0)),
            submitted: 0,
        };
        println!("scale {scale}:");
        if let Err(e) = ctx.circle(&mut canvas, args![0.0, 0.0, diameter]) {
            eprintln!("Error: {}", e);
        }
        if let Err(e) = ctx.bezier(&mut canvas, args![0.0, 0.0, 10.0, 20.0, 30.0, 20.0, 40.0, 0.0]) {
            eprintln!("Error: {}", e);
        }
        println!("  submitted {}", canvas.submitted);
    }
}

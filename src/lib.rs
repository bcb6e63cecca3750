//! Primitive geometry and adaptive tessellation for immediate-mode sketches.
//!
//! Positional arguments go in, canonical vertex buffers come out:
//!
//! ```
//! use glam::DMat4;
//! use sketchgeom::args;
//! use sketchgeom::primitives::{Renderer, Shape, ShapeContext, Topology};
//! use sketchgeom::types::Stroke;
//!
//! struct Canvas(Vec<Topology>);
//!
//! impl Renderer for Canvas {
//!     fn transform_matrix(&self) -> DMat4 {
//!         DMat4::IDENTITY
//!     }
//!     fn stroke(&self) -> Stroke {
//!         Stroke::default()
//!     }
//!     fn render(&mut self, shape: &Shape) {
//!         self.0.push(shape.topology());
//!     }
//! }
//!
//! let ctx = ShapeContext::new();
//! let mut canvas = Canvas(Vec::new());
//! let rect = ctx.rect(&mut canvas, args![10.0, 10.0, 40.0, 20.0]).unwrap();
//! assert_eq!(rect.vertices().len(), 4);
//! assert_eq!(canvas.0, vec![Topology::QuadList]);
//! ```

pub mod args;
pub mod errors;
pub mod log;
pub mod primitives;
pub mod types;

pub use args::{Arg, Args};
pub use errors::ShapeError;
pub use primitives::{Renderer, Shape, ShapeContext, ShapeMode};
pub use types::Point;

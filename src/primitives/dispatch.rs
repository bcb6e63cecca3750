//! Submitting shapes to a renderer

use glam::DMat4;

use super::shapes::Shape;
use crate::log::trace;
use crate::types::Stroke;

/// The backend that owns GPU buffers and draw calls.
///
/// Shape construction reads the transform and stroke settings; drawing hands
/// finished shapes to [`Renderer::render`].
pub trait Renderer {
    /// Current model/view transform
    fn transform_matrix(&self) -> DMat4;

    /// Current stroke settings
    fn stroke(&self) -> Stroke;

    /// Upload and draw one shape
    fn render(&mut self, shape: &Shape);
}

/// Draw `shape`, then its children depth-first.
///
/// Geometry buffers are drawn once without visiting children. Hidden shapes
/// are skipped along with everything under them.
pub fn draw_shape<R: Renderer + ?Sized>(renderer: &mut R, shape: &Shape) {
    if !shape.visible {
        trace!("skipping hidden shape");
        return;
    }

    trace!(
        topology = ?shape.topology(),
        vertices = shape.vertices().len(),
        children = shape.children.len(),
        "render"
    );
    renderer.render(shape);

    if shape.is_leaf_geometry() {
        return;
    }

    for child in &shape.children {
        draw_shape(renderer, child);
    }
}

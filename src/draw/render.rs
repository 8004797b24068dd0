//! Rendering helpers shared by the shape variants.

use super::shape::{BORDER_WIDTH, Shape, ShapeCore};
use crate::scene::SharedShape;
use crate::surface::Surface;

/// Renders all shapes in order onto a surface.
///
/// Shapes are drawn in the order they appear (first shape = bottom layer).
pub fn render_shapes(surface: &mut dyn Surface, shapes: &[SharedShape]) {
    for shape in shapes {
        render_shape(surface, &*shape.borrow());
    }
}

/// Renders a single shape.
pub fn render_shape(surface: &mut dyn Surface, shape: &dyn Shape) {
    shape.draw_to(surface);
}

/// Fills the current path with the core's fill color, then strokes it with
/// the border color at [`BORDER_WIDTH`].
pub(crate) fn fill_and_stroke(surface: &mut dyn Surface, core: &ShapeCore) {
    surface.fill(core.fill_color);
    surface.stroke(core.border_color, BORDER_WIDTH);
}

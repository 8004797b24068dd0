//! Shape abstraction shared by every drawable variant.

use super::color::{BLACK, Color, WHITE};
use crate::surface::Surface;

/// Line width used for every shape border.
pub const BORDER_WIDTH: f64 = 2.0;

/// Default fill for newly constructed shapes (`#FFFFFF`).
pub const DEFAULT_FILL: Color = WHITE;

/// Default border for newly constructed shapes (`#000000`).
pub const DEFAULT_BORDER: Color = BLACK;

/// Position and colors common to all shapes.
///
/// `ShapeCore` carries no geometry of its own and does not implement
/// [`Shape`], so it can never be placed in a scene by itself:
///
/// ```compile_fail
/// use drawing::draw::ShapeCore;
/// use drawing::scene::Scene;
/// use drawing::surface::RecordingSurface;
///
/// let scene = Scene::new(RecordingSurface::new(100, 100));
/// scene.add(ShapeCore::new(0.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeCore {
    /// Anchor X coordinate
    pub x: f64,
    /// Anchor Y coordinate
    pub y: f64,
    /// Interior color
    pub fill_color: Color,
    /// Outline color
    pub border_color: Color,
}

impl ShapeCore {
    /// Creates a core at `(x, y)` with the default white fill and black border.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            fill_color: DEFAULT_FILL,
            border_color: DEFAULT_BORDER,
        }
    }
}

/// A drawable entity with a position and two colors.
///
/// Implementors provide geometry through [`Shape::draw_to`]. The provided
/// `draw_to` only reports that the method is missing, so a variant that
/// forgets it is skipped during repaint instead of aborting it.
pub trait Shape {
    /// Type name used in diagnostics and by the shape registry.
    fn name(&self) -> &'static str;

    fn core(&self) -> &ShapeCore;

    fn core_mut(&mut self) -> &mut ShapeCore;

    /// Renders the shape's current geometry and colors onto `surface`.
    fn draw_to(&self, _surface: &mut dyn Surface) {
        log::error!("draw_to is not implemented for shape '{}'", self.name());
    }

    fn position(&self) -> (f64, f64) {
        let core = self.core();
        (core.x, core.y)
    }

    fn fill_color(&self) -> Color {
        self.core().fill_color
    }

    fn border_color(&self) -> Color {
        self.core().border_color
    }
}

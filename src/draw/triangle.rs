//! Isosceles triangle standing on its base.

use super::color::Color;
use super::render::fill_and_stroke;
use super::shape::{Shape, ShapeCore};
use crate::surface::Surface;

/// Triangle whose base runs from `(x, y)` to `(x + width, y)`.
///
/// The apex sits at `(x + width / 2, y - height / 2)`, so only half the
/// nominal height rises above the base line.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    pub(crate) core: ShapeCore,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Triangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            core: ShapeCore::new(x, y),
            width,
            height,
        }
    }

    /// Replaces the fill and border colors.
    pub fn with_colors(mut self, fill: Color, border: Color) -> Self {
        self.core.fill_color = fill;
        self.core.border_color = border;
        self
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the three corners: base start, base end, apex.
    pub fn vertices(&self) -> [(f64, f64); 3] {
        let ShapeCore { x, y, .. } = self.core;
        [
            (x, y),
            (x + self.width, y),
            (x + self.width / 2.0, y - self.height / 2.0),
        ]
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::new(50.0, 50.0, 50.0, 50.0)
    }
}

impl Shape for Triangle {
    fn name(&self) -> &'static str {
        "Triangle"
    }

    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn draw_to(&self, surface: &mut dyn Surface) {
        let [start, base_end, apex] = self.vertices();

        surface.begin_path();
        surface.move_to(start.0, start.1);
        surface.line_to(base_end.0, base_end.1);
        surface.line_to(apex.0, apex.1);
        surface.close_path();
        fill_and_stroke(surface, &self.core);
    }
}

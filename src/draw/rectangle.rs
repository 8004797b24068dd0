//! Axis-aligned rectangle.

use super::color::Color;
use super::render::fill_and_stroke;
use super::shape::{Shape, ShapeCore};
use crate::surface::Surface;

/// Rectangle anchored at its top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub(crate) core: ShapeCore,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Rectangle {
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
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::new(50.0, 50.0, 100.0, 50.0)
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn draw_to(&self, surface: &mut dyn Surface) {
        surface.begin_path();
        surface.rect(self.core.x, self.core.y, self.width, self.height);
        fill_and_stroke(surface, &self.core);
        surface.close_path();
    }
}

//! Full circle.

use super::color::Color;
use super::render::fill_and_stroke;
use super::shape::{Shape, ShapeCore};
use crate::surface::Surface;
use std::f64::consts::PI;

/// Circle centered on its anchor point.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub(crate) core: ShapeCore,
    pub(crate) radius: f64,
}

impl Circle {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            core: ShapeCore::new(x, y),
            radius,
        }
    }

    /// Replaces the fill and border colors.
    pub fn with_colors(mut self, fill: Color, border: Color) -> Self {
        self.core.fill_color = fill;
        self.core.border_color = border;
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(50.0, 50.0, 25.0)
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn draw_to(&self, surface: &mut dyn Surface) {
        surface.begin_path();
        surface.arc(self.core.x, self.core.y, self.radius, 0.0, 2.0 * PI);
        fill_and_stroke(surface, &self.core);
        surface.close_path();
    }
}

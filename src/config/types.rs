//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{Color, shape};
use serde::{Deserialize, Serialize};

/// Surface width used when nothing else is configured.
pub const DEFAULT_SURFACE_WIDTH: u32 = 800;

/// Surface height used when nothing else is configured.
pub const DEFAULT_SURFACE_HEIGHT: u32 = 600;

/// Drawing surface settings.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SurfaceConfig {
    /// Surface width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Surface height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Colors applied to shapes created by name.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ShapeConfig {
    /// Interior color for new shapes
    #[serde(default = "default_fill_color")]
    pub fill_color: ColorSpec,

    /// Border color for new shapes
    #[serde(default = "default_border_color")]
    pub border_color: ColorSpec,
}

impl ShapeConfig {
    pub fn fill(&self) -> Color {
        self.fill_color.to_color_or(shape::DEFAULT_FILL)
    }

    pub fn border(&self) -> Color {
        self.border_color.to_color_or(shape::DEFAULT_BORDER)
    }
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            fill_color: default_fill_color(),
            border_color: default_border_color(),
        }
    }
}

fn default_width() -> u32 {
    DEFAULT_SURFACE_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_SURFACE_HEIGHT
}

fn default_fill_color() -> ColorSpec {
    ColorSpec::Name("#FFFFFF".to_string())
}

fn default_border_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

//! Immediate-mode drawing surfaces.
//!
//! A [`Surface`] exposes the small set of 2D primitives shapes draw with:
//! clearing, path construction, filling and stroking. Paths follow canvas
//! semantics: `fill` and `stroke` leave the current path intact, and only
//! `begin_path` discards it.
//!
//! Two implementations ship with the crate:
//! - [`CairoSurface`]: raster output backed by a Cairo image surface
//! - [`RecordingSurface`]: records every primitive into a [`CommandLog`]

pub mod image;
pub mod recording;

pub use image::CairoSurface;
pub use recording::{CommandLog, DrawCommand, RecordingSurface};

use crate::draw::Color;
use std::any::Any;
use thiserror::Error;

/// Errors raised while creating or exporting a surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface pixels are not accessible: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to write surface: {0}")]
    Io(#[from] std::io::Error),

    #[error("Surface size {width}x{height} is out of range")]
    InvalidSize { width: u32, height: u32 },

    #[error("Pixel ({x}, {y}) is outside the surface")]
    OutOfBounds { x: u32, y: u32 },
}

/// Host-provided 2D drawing target.
pub trait Surface {
    /// Current width in pixels.
    fn width(&self) -> u32;

    /// Current height in pixels.
    fn height(&self) -> u32;

    /// Changes the surface dimensions. Raster surfaces lose their contents.
    fn set_size(&mut self, width: u32, height: u32);

    /// Resets the given rectangle to fully transparent.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Discards the current path.
    fn begin_path(&mut self);

    /// Closes the current sub-path back to its starting point.
    fn close_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Adds a closed axis-aligned rectangle sub-path.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Adds a clockwise circular arc (angles in radians).
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64);

    /// Fills the current path with `color`.
    fn fill(&mut self, color: Color);

    /// Strokes the current path with `color` at the given line width.
    fn stroke(&mut self, color: Color, width: f64);

    /// Allows callers to recover the concrete surface type.
    fn as_any(&self) -> &dyn Any;
}

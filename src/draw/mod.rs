//! Shape definitions and rendering primitives.
//!
//! This module defines the drawable types managed by a scene:
//! - [`Color`]: RGBA color representation with hex parsing and constants
//! - [`Shape`]: the drawable trait, with [`ShapeCore`] holding shared state
//! - [`Rectangle`], [`Circle`], [`Triangle`]: the concrete variants
//! - Rendering helpers that paint shapes onto a [`Surface`](crate::surface::Surface)

pub mod circle;
pub mod color;
pub mod rectangle;
pub mod render;
pub mod shape;
pub mod triangle;

// Re-export commonly used types at module level
pub use circle::Circle;
pub use color::{Color, ColorParseError};
pub use rectangle::Rectangle;
pub use render::{render_shape, render_shapes};
pub use shape::{BORDER_WIDTH, Shape, ShapeCore};
pub use triangle::Triangle;

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};

//! Retained-mode 2D scene manager.
//!
//! A [`Scene`] keeps an ordered list of shapes and repaints all of them onto
//! its [`Surface`](surface::Surface) whenever a shape changes or the surface
//! is resized.
//!
//! ```
//! use drawing::draw::{Circle, RED};
//! use drawing::scene::Scene;
//! use drawing::surface::RecordingSurface;
//!
//! let scene = Scene::new(RecordingSurface::new(200, 100));
//! let circle = scene.add(Circle::new(40.0, 40.0, 10.0));
//! circle.set_fill_color(RED);
//! circle.set_radius(20.0);
//! assert_eq!(scene.len(), 1);
//! ```

pub mod config;
pub mod draw;
pub mod host;
pub mod registry;
pub mod scene;
pub mod surface;

pub use config::Config;
pub use scene::{Scene, ShapeHandle};

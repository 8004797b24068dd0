//! Lazily created per-thread default scene.
//!
//! Library code takes a `&Scene` explicitly; only the outermost composition
//! point (such as the binary) should reach for the default.

use super::{Scene, ShapeHandle};
use crate::config::types::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};
use crate::draw::Shape;
use crate::surface::{CairoSurface, SurfaceError};
use log::info;
use std::cell::RefCell;

thread_local! {
    static DEFAULT_SCENE: RefCell<Option<Scene>> = const { RefCell::new(None) };
}

/// Returns this thread's default scene, creating a Cairo-backed one on first use.
pub fn default_scene() -> Result<Scene, SurfaceError> {
    DEFAULT_SCENE.with(|slot| {
        if let Some(scene) = slot.borrow().as_ref() {
            return Ok(scene.clone());
        }

        let surface = CairoSurface::new(DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT)?;
        let scene = Scene::new(surface);
        info!(
            "Created default scene ({}x{})",
            DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT
        );
        *slot.borrow_mut() = Some(scene.clone());
        Ok(scene)
    })
}

/// Installs `scene` as this thread's default.
///
/// Fails, handing the scene back, if a default already exists.
pub fn set_default_scene(scene: Scene) -> Result<(), Scene> {
    DEFAULT_SCENE.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return Err(scene);
        }
        *slot = Some(scene);
        Ok(())
    })
}

/// Registers `shape` with the default scene, creating the scene if needed.
pub fn add_to_default<T: Shape + 'static>(shape: T) -> Result<ShapeHandle<T>, SurfaceError> {
    Ok(default_scene()?.add(shape))
}

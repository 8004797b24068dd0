//! Typed handles to registered shapes.

use super::{Scene, SceneState, SharedShape};
use crate::draw::{Circle, Color, Rectangle, Shape, Triangle};
use log::debug;
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Handle to a shape registered with a [`Scene`].
///
/// Setters mutate the shape and repaint the owning scene. The scene is held
/// weakly; once it is gone, setters still mutate but nothing repaints.
///
/// Shapes built by name come back as `ShapeHandle<dyn Shape>`, which offers
/// the setters common to every shape.
pub struct ShapeHandle<T: Shape + ?Sized + 'static> {
    shape: Rc<RefCell<T>>,
    shared: SharedShape,
    scene: Weak<RefCell<SceneState>>,
}

impl<T: Shape + ?Sized + 'static> Clone for ShapeHandle<T> {
    fn clone(&self) -> Self {
        Self {
            shape: Rc::clone(&self.shape),
            shared: self.shared.clone(),
            scene: Weak::clone(&self.scene),
        }
    }
}

impl<T: Shape + ?Sized + 'static> fmt::Debug for ShapeHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeHandle")
            .field("shape", &self.shared)
            .field("registered", &self.is_registered())
            .finish()
    }
}

impl<T: Shape + 'static> ShapeHandle<T> {
    /// `shared` must point at the same allocation as `shape`.
    pub(super) fn new(shape: Rc<RefCell<T>>, shared: SharedShape, scene: &Scene) -> Self {
        Self {
            shape,
            shared,
            scene: scene.downgrade(),
        }
    }
}

impl ShapeHandle<dyn Shape> {
    pub(super) fn from_shared(shared: SharedShape, scene: &Scene) -> Self {
        Self {
            shape: Rc::clone(&shared.0),
            shared,
            scene: scene.downgrade(),
        }
    }
}

impl<T: Shape + ?Sized + 'static> ShapeHandle<T> {
    /// Borrows the shape for reading.
    pub fn get(&self) -> Ref<'_, T> {
        self.shape.borrow()
    }

    /// Returns the type-erased shared reference the scene stores.
    pub fn as_shared(&self) -> SharedShape {
        self.shared.clone()
    }

    /// The owning scene, if it is still alive.
    pub fn scene(&self) -> Option<Scene> {
        Scene::from_weak(&self.scene)
    }

    /// Whether the shape is currently part of its scene's paint order.
    pub fn is_registered(&self) -> bool {
        self.scene()
            .is_some_and(|scene| scene.contains(&self.shared))
    }

    /// Applies `f` to the shape, then repaints the owning scene.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.shape.borrow_mut());
        match self.scene() {
            Some(scene) => scene.repaint(),
            None => debug!("{} changed after its scene was dropped", self.get().name()),
        }
    }

    pub fn set_position(&self, x: f64, y: f64) {
        self.update(|shape| {
            let core = shape.core_mut();
            core.x = x;
            core.y = y;
        });
    }

    pub fn set_fill_color(&self, color: Color) {
        self.update(|shape| shape.core_mut().fill_color = color);
    }

    pub fn set_border_color(&self, color: Color) {
        self.update(|shape| shape.core_mut().border_color = color);
    }

    /// Deregisters the shape from its scene.
    ///
    /// Returns `false` if it was already removed or the scene is gone.
    pub fn remove(&self) -> bool {
        self.scene()
            .is_some_and(|scene| scene.remove_shape(&self.shared))
    }
}

impl ShapeHandle<Rectangle> {
    pub fn set_width(&self, width: f64) {
        self.update(|rect| rect.width = width);
    }

    pub fn set_height(&self, height: f64) {
        self.update(|rect| rect.height = height);
    }
}

impl ShapeHandle<Triangle> {
    pub fn set_width(&self, width: f64) {
        self.update(|triangle| triangle.width = width);
    }

    pub fn set_height(&self, height: f64) {
        self.update(|triangle| triangle.height = height);
    }
}

impl ShapeHandle<Circle> {
    pub fn set_radius(&self, radius: f64) {
        self.update(|circle| circle.radius = radius);
    }
}

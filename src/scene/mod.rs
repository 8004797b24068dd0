//! Scene: ordered shape list plus the surface it repaints.
//!
//! Every mutation (adding or removing a shape, resizing, or changing a shape
//! through its [`ShapeHandle`]) runs one full repaint inline: the surface is
//! cleared and each shape is drawn in insertion order.

mod default;
mod handle;

pub use default::{add_to_default, default_scene, set_default_scene};
pub use handle::ShapeHandle;

use crate::draw::{Shape, render_shapes};
use crate::host::Host;
use crate::surface::Surface;
use log::{debug, info};
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Read-only reference to a shape stored in a scene.
///
/// Equality is identity: two `SharedShape`s are equal only when they point
/// at the same allocation. Mutation goes through [`ShapeHandle`], which
/// repaints the owning scene.
#[derive(Clone)]
pub struct SharedShape(pub(crate) Rc<RefCell<dyn Shape>>);

impl SharedShape {
    pub(crate) fn new<T: Shape + 'static>(shape: T) -> Self {
        Self(Rc::new(RefCell::new(shape)))
    }

    /// Borrows the shape for reading.
    pub fn borrow(&self) -> Ref<'_, dyn Shape> {
        self.0.borrow()
    }

    /// Returns whether both references point at the same shape.
    pub fn ptr_eq(&self, other: &SharedShape) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for SharedShape {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for SharedShape {}

impl fmt::Debug for SharedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedShape")
            .field(&self.borrow().name())
            .finish()
    }
}

pub(crate) struct SceneState {
    surface: Box<dyn Surface>,
    shapes: Vec<SharedShape>,
    repaints: u64,
}

impl SceneState {
    fn repaint(&mut self) {
        let width = self.surface.width();
        let height = self.surface.height();
        self.surface.clear_rect(0.0, 0.0, width as f64, height as f64);
        render_shapes(self.surface.as_mut(), &self.shapes);
        self.repaints += 1;
        debug!(
            "Repainted {} shape(s) on {}x{} surface",
            self.shapes.len(),
            width,
            height
        );
    }
}

/// Repaint-driving container of shapes and their drawing surface.
///
/// `Scene` is a cheap handle; clones refer to the same scene.
#[derive(Clone)]
pub struct Scene {
    state: Rc<RefCell<SceneState>>,
}

impl Scene {
    /// Creates a scene that exclusively owns `surface` and paints it once.
    pub fn new(surface: impl Surface + 'static) -> Self {
        let scene = Self::unpainted(Box::new(surface));
        scene.repaint();
        scene
    }

    /// Creates a scene sized to the host viewport and subscribes it to the
    /// host's resize notifications.
    ///
    /// The subscription holds only a weak reference, so it lapses once every
    /// handle to the scene has been dropped.
    pub fn attach(surface: impl Surface + 'static, host: &mut dyn Host) -> Self {
        let scene = Self::unpainted(Box::new(surface));
        let (width, height) = host.viewport_size();
        scene.resize(width, height);

        let weak = Rc::downgrade(&scene.state);
        host.subscribe_resize(Box::new(move |width, height| {
            match Scene::from_weak(&weak) {
                Some(scene) => scene.resize(width, height),
                None => debug!("Ignoring resize to {width}x{height}: scene dropped"),
            }
        }));
        scene
    }

    fn unpainted(surface: Box<dyn Surface>) -> Self {
        Self {
            state: Rc::new(RefCell::new(SceneState {
                surface,
                shapes: Vec::new(),
                repaints: 0,
            })),
        }
    }

    pub(crate) fn from_weak(weak: &Weak<RefCell<SceneState>>) -> Option<Self> {
        weak.upgrade().map(|state| Self { state })
    }

    pub(crate) fn downgrade(&self) -> Weak<RefCell<SceneState>> {
        Rc::downgrade(&self.state)
    }

    /// Wraps `shape`, registers it, and returns a handle whose setters
    /// repaint this scene.
    pub fn add<T: Shape + 'static>(&self, shape: T) -> ShapeHandle<T> {
        let shape = Rc::new(RefCell::new(shape));
        let shared = SharedShape(shape.clone());
        self.add_shape(shared.clone());
        ShapeHandle::new(shape, shared, self)
    }

    /// Registers an already shared shape and returns a repainting handle to it.
    pub(crate) fn add_dyn(&self, shared: SharedShape) -> ShapeHandle<dyn Shape> {
        self.add_shape(shared.clone());
        ShapeHandle::from_shared(shared, self)
    }

    /// Appends a shape to the paint order and repaints. Always succeeds.
    pub fn add_shape(&self, shape: SharedShape) -> bool {
        {
            let mut state = self.state.borrow_mut();
            debug!(
                "Adding {} as shape #{}",
                shape.borrow().name(),
                state.shapes.len() + 1
            );
            state.shapes.push(shape);
        }
        self.repaint();
        true
    }

    /// Removes the first occurrence of `shape` (by identity) and repaints.
    ///
    /// Returns `false` without repainting when the shape is not present.
    pub fn remove_shape(&self, shape: &SharedShape) -> bool {
        let removed = {
            let mut state = self.state.borrow_mut();
            match state.shapes.iter().position(|s| s.ptr_eq(shape)) {
                Some(index) => {
                    state.shapes.remove(index);
                    true
                }
                None => false,
            }
        };

        if removed {
            debug!("Removed {}", shape.borrow().name());
            self.repaint();
        } else {
            debug!("Ignoring removal of unregistered {}", shape.borrow().name());
        }
        removed
    }

    /// Resizes the surface and repaints it.
    pub fn resize(&self, width: u32, height: u32) {
        {
            let mut state = self.state.borrow_mut();
            info!("Resizing scene surface to {}x{}", width, height);
            state.surface.set_size(width, height);
        }
        self.repaint();
    }

    /// Clears the surface and draws every shape in insertion order.
    pub fn repaint(&self) {
        self.state.borrow_mut().repaint();
    }

    /// Returns read-only references to the registered shapes in paint order.
    pub fn shapes(&self) -> Vec<SharedShape> {
        self.state.borrow().shapes.clone()
    }

    /// Returns whether `shape` (by identity) is registered.
    pub fn contains(&self, shape: &SharedShape) -> bool {
        self.state
            .borrow()
            .shapes
            .iter()
            .any(|s| s.ptr_eq(shape))
    }

    pub fn len(&self) -> usize {
        self.state.borrow().shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().shapes.is_empty()
    }

    /// Current surface dimensions.
    pub fn size(&self) -> (u32, u32) {
        let state = self.state.borrow();
        (state.surface.width(), state.surface.height())
    }

    /// Number of repaints performed since the scene was created.
    pub fn repaint_count(&self) -> u64 {
        self.state.borrow().repaints
    }

    /// Returns whether both handles refer to the same scene.
    pub fn ptr_eq(&self, other: &Scene) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Runs `f` with the concrete surface, if it is an `S`.
    pub fn with_surface_as<S: Surface + 'static, R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        let state = self.state.borrow();
        state.surface.as_any().downcast_ref::<S>().map(f)
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Scene")
            .field("width", &state.surface.width())
            .field("height", &state.surface.height())
            .field("shapes", &state.shapes.len())
            .field("repaints", &state.repaints)
            .finish()
    }
}

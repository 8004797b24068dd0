//! Name-based shape construction.
//!
//! The registry maps type names such as `"Circle"` to factories producing a
//! shape with default geometry, so callers that only know a name (command
//! lines, plugin hosts) can place shapes into a scene.

use crate::draw::{Circle, Color, Rectangle, Shape, Triangle, shape};
use crate::scene::{Scene, ShapeHandle, SharedShape};
use log::debug;
use std::collections::BTreeMap;
use thiserror::Error;

/// Name of the abstract base, which can never be constructed.
pub const ABSTRACT_SHAPE_NAME: &str = "Shape";

type ShapeFactory = Box<dyn Fn() -> SharedShape>;

/// Errors raised by [`ShapeRegistry`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("'{0}' is abstract and cannot be instantiated")]
    AbstractShape(String),

    #[error("Unknown shape type '{0}'")]
    UnknownShape(String),

    #[error("Shape type '{0}' is already registered")]
    DuplicateName(String),
}

/// Maps shape type names to factories.
pub struct ShapeRegistry {
    factories: BTreeMap<String, ShapeFactory>,
    fill_color: Color,
    border_color: Color,
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeRegistry {
    /// Creates an empty registry using the default white fill and black border.
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
            fill_color: shape::DEFAULT_FILL,
            border_color: shape::DEFAULT_BORDER,
        }
    }

    /// Creates a registry announcing `Circle`, `Rectangle` and `Triangle`.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register_builtin();
        registry
    }

    fn register_builtin(&mut self) {
        // Built-in names are distinct and never the abstract base.
        let _ = self.register("Circle", Circle::default);
        let _ = self.register("Rectangle", Rectangle::default);
        let _ = self.register("Triangle", Triangle::default);
    }

    /// Sets the colors applied to every shape the registry creates.
    pub fn with_colors(mut self, fill: Color, border: Color) -> Self {
        self.fill_color = fill;
        self.border_color = border;
        self
    }

    /// Registers a factory under `name`.
    pub fn register<T, F>(&mut self, name: &str, factory: F) -> Result<(), RegistryError>
    where
        T: Shape + 'static,
        F: Fn() -> T + 'static,
    {
        if name == ABSTRACT_SHAPE_NAME {
            return Err(RegistryError::AbstractShape(name.to_string()));
        }
        if self.factories.contains_key(name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }

        debug!("Registered shape type '{}'", name);
        self.factories.insert(
            name.to_string(),
            Box::new(move || SharedShape::new(factory())),
        );
        Ok(())
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Builds a shape by name without registering it anywhere.
    pub fn build(&self, name: &str) -> Result<SharedShape, RegistryError> {
        if name == ABSTRACT_SHAPE_NAME {
            return Err(RegistryError::AbstractShape(name.to_string()));
        }
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| RegistryError::UnknownShape(name.to_string()))?;

        let shape = factory();
        {
            let mut shape = shape.0.borrow_mut();
            let core = shape.core_mut();
            core.fill_color = self.fill_color;
            core.border_color = self.border_color;
        }
        Ok(shape)
    }

    /// Builds a shape by name and adds it to `scene`.
    ///
    /// The returned handle's setters repaint `scene`. Failures leave the
    /// scene untouched.
    pub fn create(
        &self,
        name: &str,
        scene: &Scene,
    ) -> Result<ShapeHandle<dyn Shape>, RegistryError> {
        let shape = self.build(name)?;
        Ok(scene.add_dyn(shape))
    }
}

//! Surface that records primitives instead of rasterizing them.

use super::Surface;
use crate::draw::Color;
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

/// One primitive issued against a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Resize {
        width: u32,
        height: u32,
    },
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    BeginPath,
    ClosePath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Fill {
        color: Color,
    },
    Stroke {
        color: Color,
        width: f64,
    },
}

/// Shared, cloneable view of the commands a [`RecordingSurface`] received.
///
/// The log stays readable after the surface has been moved into a scene.
#[derive(Clone, Debug, Default)]
pub struct CommandLog {
    commands: Rc<RefCell<Vec<DrawCommand>>>,
}

impl CommandLog {
    fn push(&self, command: DrawCommand) {
        self.commands.borrow_mut().push(command);
    }

    /// Returns a copy of every recorded command.
    pub fn commands(&self) -> Vec<DrawCommand> {
        self.commands.borrow().clone()
    }

    /// Drains the recorded commands.
    pub fn take(&self) -> Vec<DrawCommand> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.commands.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.borrow().is_empty()
    }

    /// Splits the recorded commands into frames, one per `ClearRect`.
    ///
    /// Commands issued before the first clear are dropped.
    pub fn frames(&self) -> Vec<Vec<DrawCommand>> {
        let mut frames: Vec<Vec<DrawCommand>> = Vec::new();
        for command in self.commands.borrow().iter() {
            match command {
                DrawCommand::ClearRect { .. } => frames.push(vec![command.clone()]),
                _ => {
                    if let Some(frame) = frames.last_mut() {
                        frame.push(command.clone());
                    }
                }
            }
        }
        frames
    }
}

/// Records primitives into a [`CommandLog`].
#[derive(Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    log: CommandLog,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            log: CommandLog::default(),
        }
    }

    /// Returns a handle to this surface's command log.
    pub fn log(&self) -> CommandLog {
        self.log.clone()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.log.push(DrawCommand::Resize { width, height });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.log.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn begin_path(&mut self) {
        self.log.push(DrawCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.log.push(DrawCommand::ClosePath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.log.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.log.push(DrawCommand::LineTo { x, y });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.log.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.log.push(DrawCommand::Arc {
            cx,
            cy,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn fill(&mut self, color: Color) {
        self.log.push(DrawCommand::Fill { color });
    }

    fn stroke(&mut self, color: Color, width: f64) {
        self.log.push(DrawCommand::Stroke { color, width });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    #[test]
    fn log_survives_surface_move() {
        let mut surface = RecordingSurface::new(10, 10);
        let log = surface.log();
        surface.begin_path();
        surface.fill(RED);

        let boxed: Box<dyn Surface> = Box::new(surface);
        drop(boxed);

        assert_eq!(
            log.commands(),
            vec![DrawCommand::BeginPath, DrawCommand::Fill { color: RED }]
        );
    }

    #[test]
    fn frames_split_on_clear() {
        let mut surface = RecordingSurface::new(10, 10);
        let log = surface.log();
        surface.move_to(0.0, 0.0);
        surface.clear_rect(0.0, 0.0, 10.0, 10.0);
        surface.begin_path();
        surface.clear_rect(0.0, 0.0, 10.0, 10.0);

        let frames = log.frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].len(), 2);
        assert_eq!(frames[1].len(), 1);
    }

    #[test]
    fn take_drains_log() {
        let mut surface = RecordingSurface::new(10, 10);
        let log = surface.log();
        surface.set_size(20, 30);

        assert_eq!(
            log.take(),
            vec![DrawCommand::Resize {
                width: 20,
                height: 30
            }]
        );
        assert!(log.is_empty());
        assert_eq!((surface.width(), surface.height()), (20, 30));
    }
}

//! Raster surface backed by a Cairo image surface.

use super::{Surface, SurfaceError};
use crate::draw::Color;
use cairo::{Context, Format, ImageSurface};
use log::{debug, warn};
use std::any::Any;
use std::fs::File;
use std::path::Path;

/// Largest dimension accepted for a raster surface.
pub const MAX_DIMENSION: u32 = 16_384;

/// ARGB32 image surface with a persistent drawing context.
pub struct CairoSurface {
    image: ImageSurface,
    ctx: Context,
    width: u32,
    height: u32,
}

impl CairoSurface {
    /// Creates a transparent surface of the given size.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let (image, ctx) = create_image(width, height)?;
        Ok(Self {
            image,
            ctx,
            width,
            height,
        })
    }

    /// Copies the current contents into a standalone image surface.
    ///
    /// The copy is not referenced by any drawing context, so its pixel data
    /// can be borrowed freely.
    pub fn snapshot(&self) -> Result<ImageSurface, SurfaceError> {
        self.image.flush();
        let (copy, ctx) = create_image(self.width, self.height)?;
        ctx.set_source_surface(&self.image, 0.0, 0.0)?;
        ctx.paint()?;
        drop(ctx);
        Ok(copy)
    }

    /// Reads one pixel as straight (non-premultiplied) RGBA bytes.
    pub fn pixel(&self, x: u32, y: u32) -> Result<[u8; 4], SurfaceError> {
        if x >= self.width || y >= self.height {
            return Err(SurfaceError::OutOfBounds { x, y });
        }

        let snapshot = self.snapshot()?;
        let stride = snapshot.stride() as usize;
        let mut pixel = [0u8; 4];
        snapshot.with_data(|data| {
            let offset = y as usize * stride + x as usize * 4;
            let raw = u32::from_ne_bytes([
                data[offset],
                data[offset + 1],
                data[offset + 2],
                data[offset + 3],
            ]);
            pixel = unpremultiply(raw);
        })?;
        Ok(pixel)
    }

    /// Encodes the current contents as PNG at `path`.
    pub fn write_png(&self, path: &Path) -> Result<(), SurfaceError> {
        let mut file = File::create(path)?;
        self.image.flush();
        self.image.write_to_png(&mut file)?;
        debug!(
            "Wrote {}x{} PNG to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}

fn create_image(width: u32, height: u32) -> Result<(ImageSurface, Context), SurfaceError> {
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(SurfaceError::InvalidSize { width, height });
    }
    let image = ImageSurface::create(Format::ARgb32, width as i32, height as i32)?;
    let ctx = Context::new(&image)?;
    Ok((image, ctx))
}

fn unpremultiply(argb: u32) -> [u8; 4] {
    let a = (argb >> 24) & 0xff;
    let channel = |shift: u32| -> u8 {
        let c = (argb >> shift) & 0xff;
        if a == 0 {
            0
        } else {
            ((c * 255 + a / 2) / a).min(255) as u8
        }
    };
    [channel(16), channel(8), channel(0), a as u8]
}

impl Surface for CairoSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_size(&mut self, width: u32, height: u32) {
        match create_image(width, height) {
            Ok((image, ctx)) => {
                self.image = image;
                self.ctx = ctx;
                self.width = width;
                self.height = height;
            }
            Err(err) => {
                warn!(
                    "Keeping {}x{} surface, resize to {}x{} failed: {}",
                    self.width, self.height, width, height, err
                );
            }
        }
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        // Clearing must not disturb a path under construction.
        let pending = self.ctx.copy_path().ok();
        self.ctx.new_path();

        self.ctx.save().ok();
        self.ctx.set_operator(cairo::Operator::Clear);
        self.ctx.rectangle(x, y, width, height);
        let _ = self.ctx.fill();
        self.ctx.restore().ok();

        if let Some(path) = pending {
            self.ctx.append_path(&path);
        }
    }

    fn begin_path(&mut self) {
        self.ctx.new_path();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.rectangle(x, y, width, height);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.ctx.arc(cx, cy, radius, start_angle, end_angle);
    }

    fn fill(&mut self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        let _ = self.ctx.fill_preserve();
    }

    fn stroke(&mut self, color: Color, width: f64) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        self.ctx.set_line_width(width);
        self.ctx.set_line_join(cairo::LineJoin::Miter);
        let _ = self.ctx.stroke_preserve();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};

    #[test]
    fn new_surface_is_transparent() {
        let surface = CairoSurface::new(8, 8).unwrap();
        assert_eq!(surface.pixel(3, 3).unwrap(), [0, 0, 0, 0]);
    }

    #[test]
    fn fill_keeps_path_for_stroke() {
        let mut surface = CairoSurface::new(20, 20).unwrap();
        surface.begin_path();
        surface.rect(5.0, 5.0, 10.0, 10.0);
        surface.fill(RED);
        surface.stroke(BLUE, 2.0);

        assert_eq!(surface.pixel(10, 10).unwrap(), [255, 0, 0, 255]);
        assert_eq!(surface.pixel(5, 10).unwrap(), [0, 0, 255, 255]);
    }

    #[test]
    fn clear_rect_erases_region() {
        let mut surface = CairoSurface::new(10, 10).unwrap();
        surface.rect(0.0, 0.0, 10.0, 10.0);
        surface.fill(RED);
        surface.clear_rect(0.0, 0.0, 5.0, 10.0);

        assert_eq!(surface.pixel(2, 2).unwrap()[3], 0);
        assert_eq!(surface.pixel(7, 2).unwrap(), [255, 0, 0, 255]);
    }

    #[test]
    fn resize_discards_contents() {
        let mut surface = CairoSurface::new(10, 10).unwrap();
        surface.rect(0.0, 0.0, 10.0, 10.0);
        surface.fill(RED);
        surface.set_size(12, 6);

        assert_eq!((surface.width(), surface.height()), (12, 6));
        assert_eq!(surface.pixel(2, 2).unwrap(), [0, 0, 0, 0]);
    }

    #[test]
    fn oversized_resize_is_ignored() {
        let mut surface = CairoSurface::new(10, 10).unwrap();
        surface.set_size(MAX_DIMENSION + 1, 10);
        assert_eq!(surface.width(), 10);
    }

    #[test]
    fn pixel_outside_bounds_is_an_error() {
        let surface = CairoSurface::new(4, 4).unwrap();
        assert!(matches!(
            surface.pixel(4, 0),
            Err(SurfaceError::OutOfBounds { x: 4, y: 0 })
        ));
    }
}

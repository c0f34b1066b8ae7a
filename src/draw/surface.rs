//! Persistent raster surface holding the committed picture.

use super::color::Color;
use super::render::{self, PenSpec};
use crate::input::Tool;
use crate::util::Point;
use cairo::{Context, Format, ImageSurface};
use log::debug;
use thiserror::Error;

/// Errors raised by Cairo while manipulating the raster surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface pixels are borrowed elsewhere: {0}")]
    Borrow(#[from] cairo::BorrowError),
}

/// The persistent drawing bitmap.
///
/// Holds no buffer until the first [`RasterSurface::ensure`] with a positive
/// viewport size. Every drawing operation is a no-op while no buffer exists,
/// which covers the window-not-yet-laid-out case.
#[derive(Debug)]
pub struct RasterSurface {
    surface: Option<ImageSurface>,
    background: Color,
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::new(super::color::WHITE)
    }
}

impl RasterSurface {
    /// Creates an unsized surface that fills with `background` once allocated.
    pub fn new(background: Color) -> Self {
        Self {
            surface: None,
            background,
        }
    }

    /// Buffer width in pixels, 0 when unallocated.
    pub fn width(&self) -> i32 {
        self.surface.as_ref().map_or(0, |s| s.width())
    }

    /// Buffer height in pixels, 0 when unallocated.
    pub fn height(&self) -> i32 {
        self.surface.as_ref().map_or(0, |s| s.height())
    }

    /// Returns true once a buffer has been allocated.
    pub fn is_available(&self) -> bool {
        self.surface.is_some()
    }

    /// Background fill color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Borrows the committed pixels, if allocated.
    pub fn image(&self) -> Option<&ImageSurface> {
        self.surface.as_ref()
    }

    /// Allocates a background-filled buffer when none exists or the size differs.
    ///
    /// Content is NOT carried across a size change; pair with
    /// [`RasterSurface::restore_after_resize`] to keep the picture.
    /// Non-positive dimensions leave the surface untouched.
    ///
    /// # Returns
    /// `true` if a new buffer was allocated
    pub fn ensure(&mut self, width: i32, height: i32) -> Result<bool, SurfaceError> {
        if width <= 0 || height <= 0 {
            debug!("Skipping surface allocation for {width}x{height} viewport");
            return Ok(false);
        }

        if self.width() == width && self.height() == height {
            return Ok(false);
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)?;
        fill(&surface, self.background)?;
        debug!("Allocated {width}x{height} raster surface");
        self.surface = Some(surface);
        Ok(true)
    }

    /// Fills the whole buffer with the background color.
    pub fn clear(&mut self) -> Result<(), SurfaceError> {
        if let Some(surface) = &self.surface {
            fill(surface, self.background)?;
        }
        Ok(())
    }

    /// Rasterizes a line or 180° arc between `a` and `b` into the buffer.
    pub fn commit_stroke(
        &mut self,
        tool: Tool,
        a: Point,
        b: Point,
        pen: &PenSpec,
    ) -> Result<(), SurfaceError> {
        let Some(surface) = &self.surface else {
            return Ok(());
        };
        let ctx = Context::new(surface)?;
        render::render_stroke(&ctx, tool, a, b, pen);
        Ok(())
    }

    /// Rasterizes one antialiased segment between consecutive pointer samples.
    pub fn commit_freehand_segment(
        &mut self,
        a: Point,
        b: Point,
        pen: &PenSpec,
    ) -> Result<(), SurfaceError> {
        let Some(surface) = &self.surface else {
            return Ok(());
        };
        let ctx = Context::new(surface)?;
        render::render_line(&ctx, a, b, pen);
        Ok(())
    }

    /// Clears the buffer and stretches `source` over it with high-quality filtering.
    ///
    /// Aspect ratio is not preserved.
    pub fn import_image(&mut self, source: &ImageSurface) -> Result<(), SurfaceError> {
        let Some(surface) = &self.surface else {
            return Ok(());
        };
        fill(surface, self.background)?;
        paint_scaled(surface, source)?;
        Ok(())
    }

    /// Puts `prior` content back after a dimension change.
    ///
    /// Matching dimensions copy pixels verbatim; otherwise `prior` is scaled to
    /// fill the buffer. `None` leaves the background fill in place.
    pub fn restore_after_resize(&mut self, prior: Option<ImageSurface>) -> Result<(), SurfaceError> {
        let (Some(surface), Some(prior)) = (&self.surface, prior) else {
            return Ok(());
        };

        if prior.width() == surface.width() && prior.height() == surface.height() {
            let ctx = Context::new(surface)?;
            ctx.set_operator(cairo::Operator::Source);
            ctx.set_source_surface(&prior, 0.0, 0.0)?;
            ctx.paint()?;
        } else {
            fill(surface, self.background)?;
            paint_scaled(surface, &prior)?;
            debug!(
                "Rescaled {}x{} content into {}x{} surface",
                prior.width(),
                prior.height(),
                surface.width(),
                surface.height()
            );
        }
        Ok(())
    }

    /// Returns an independent copy of the committed pixels.
    pub fn snapshot(&self) -> Result<Option<ImageSurface>, SurfaceError> {
        self.surface.as_ref().map(duplicate).transpose()
    }
}

/// Creates a new ARGB32 surface holding a copy of `source`.
pub fn duplicate(source: &ImageSurface) -> Result<ImageSurface, SurfaceError> {
    let copy = ImageSurface::create(Format::ARgb32, source.width(), source.height())?;
    let ctx = Context::new(&copy)?;
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_surface(source, 0.0, 0.0)?;
    ctx.paint()?;
    drop(ctx);
    Ok(copy)
}

/// Reads one pixel as straight (non-premultiplied) `[r, g, b, a]`.
///
/// Returns `None` when the coordinates are outside the surface or the pixel
/// data cannot be borrowed.
pub fn pixel_at(surface: &ImageSurface, x: i32, y: i32) -> Option<[u8; 4]> {
    if x < 0 || y < 0 || x >= surface.width() || y >= surface.height() {
        return None;
    }

    let stride = surface.stride() as usize;
    let offset = y as usize * stride + x as usize * 4;
    let mut pixel = None;
    surface
        .with_data(|data| {
            let bytes = [
                data[offset],
                data[offset + 1],
                data[offset + 2],
                data[offset + 3],
            ];
            pixel = Some(unpremultiply(u32::from_ne_bytes(bytes)));
        })
        .ok()?;
    pixel
}

/// Copies out all pixels as packed premultiplied ARGB words, row-major, stride removed.
pub fn argb_pixels(surface: &ImageSurface) -> Result<Vec<u32>, SurfaceError> {
    let width = surface.width().max(0) as usize;
    let height = surface.height().max(0) as usize;
    let stride = surface.stride() as usize;

    let mut pixels = Vec::with_capacity(width * height);
    surface.with_data(|data| {
        for row in data.chunks(stride).take(height) {
            for px in row[..width * 4].chunks_exact(4) {
                pixels.push(u32::from_ne_bytes([px[0], px[1], px[2], px[3]]));
            }
        }
    })?;
    Ok(pixels)
}

/// Converts a premultiplied ARGB word into straight `[r, g, b, a]`.
pub(crate) fn unpremultiply(argb: u32) -> [u8; 4] {
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

/// Converts straight `[r, g, b, a]` into a premultiplied ARGB word.
pub(crate) fn premultiply([r, g, b, a]: [u8; 4]) -> u32 {
    let a = a as u32;
    let scale = |c: u8| (c as u32 * a + 127) / 255;
    (a << 24) | (scale(r) << 16) | (scale(g) << 8) | scale(b)
}

fn fill(surface: &ImageSurface, color: Color) -> Result<(), SurfaceError> {
    let ctx = Context::new(surface)?;
    ctx.set_operator(cairo::Operator::Source);
    color.apply(&ctx);
    ctx.paint()?;
    Ok(())
}

/// Paints `source` stretched over the whole of `target`.
fn paint_scaled(target: &ImageSurface, source: &ImageSurface) -> Result<(), SurfaceError> {
    if source.width() <= 0 || source.height() <= 0 {
        return Ok(());
    }

    let ctx = Context::new(target)?;
    ctx.scale(
        target.width() as f64 / source.width() as f64,
        target.height() as f64 / source.height() as f64,
    );
    ctx.set_source_surface(source, 0.0, 0.0)?;

    // Pad keeps edge pixels from fading into transparency when upscaling.
    let pattern = ctx.source();
    pattern.set_filter(cairo::Filter::Best);
    pattern.set_extend(cairo::Extend::Pad);

    ctx.paint()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED, WHITE};

    fn solid(width: i32, height: i32, color: Color) -> ImageSurface {
        let surface = ImageSurface::create(Format::ARgb32, width, height).unwrap();
        fill(&surface, color).unwrap();
        surface
    }

    #[test]
    fn operations_are_noops_before_allocation() {
        let mut surface = RasterSurface::default();
        assert!(!surface.ensure(0, 100).unwrap());
        assert!(!surface.ensure(100, -5).unwrap());
        assert!(!surface.is_available());

        let pen = PenSpec::new(BLACK, 2.0);
        surface.clear().unwrap();
        surface
            .commit_stroke(Tool::Line, Point::new(0, 0), Point::new(5, 5), &pen)
            .unwrap();
        surface
            .commit_freehand_segment(Point::new(0, 0), Point::new(5, 5), &pen)
            .unwrap();
        surface.import_image(&solid(4, 4, RED)).unwrap();
        assert!(surface.snapshot().unwrap().is_none());
    }

    #[test]
    fn ensure_allocates_background_and_reallocates_on_resize() {
        let mut surface = RasterSurface::default();
        assert!(surface.ensure(20, 10).unwrap());
        assert!(!surface.ensure(20, 10).unwrap());
        assert_eq!((surface.width(), surface.height()), (20, 10));
        assert_eq!(pixel_at(surface.image().unwrap(), 19, 9).unwrap(), [255, 255, 255, 255]);

        surface
            .commit_stroke(Tool::Line, Point::new(0, 5), Point::new(20, 5), &PenSpec::new(BLACK, 4.0))
            .unwrap();
        assert!(surface.ensure(30, 10).unwrap());
        assert_eq!(pixel_at(surface.image().unwrap(), 10, 5).unwrap(), [255, 255, 255, 255]);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut surface = RasterSurface::default();
        surface.ensure(16, 16).unwrap();
        surface
            .commit_freehand_segment(Point::new(0, 0), Point::new(15, 15), &PenSpec::new(RED, 3.0))
            .unwrap();

        surface.clear().unwrap();
        let once = argb_pixels(surface.image().unwrap()).unwrap();
        surface.clear().unwrap();
        let twice = argb_pixels(surface.image().unwrap()).unwrap();

        assert_eq!(once, twice);
        assert!(once.iter().all(|&px| px == 0xffff_ffff));
    }

    #[test]
    fn import_stretches_source_over_whole_buffer() {
        let mut surface = RasterSurface::default();
        surface.ensure(40, 20).unwrap();
        surface.import_image(&solid(5, 5, RED)).unwrap();

        let image = surface.image().unwrap();
        for (x, y) in [(0, 0), (39, 0), (0, 19), (39, 19), (20, 10)] {
            assert_eq!(pixel_at(image, x, y).unwrap(), [255, 0, 0, 255], "at ({x}, {y})");
        }
    }

    #[test]
    fn restore_copies_verbatim_when_sizes_match() {
        let mut surface = RasterSurface::default();
        surface.ensure(10, 10).unwrap();
        surface
            .commit_stroke(Tool::Arc, Point::new(1, 1), Point::new(9, 9), &PenSpec::new(BLACK, 2.0))
            .unwrap();
        let backup = surface.snapshot().unwrap();
        let expected = argb_pixels(backup.as_ref().unwrap()).unwrap();

        surface.clear().unwrap();
        surface.restore_after_resize(backup).unwrap();
        assert_eq!(argb_pixels(surface.image().unwrap()).unwrap(), expected);
    }

    #[test]
    fn restore_stretches_to_new_size() {
        let mut surface = RasterSurface::default();
        surface.ensure(100, 100).unwrap();
        surface.import_image(&solid(1, 1, RED)).unwrap();
        let backup = surface.snapshot().unwrap();

        surface.ensure(200, 100).unwrap();
        surface.restore_after_resize(backup).unwrap();

        let image = surface.image().unwrap();
        assert_eq!(pixel_at(image, 50, 50).unwrap(), [255, 0, 0, 255]);
        assert_eq!(pixel_at(image, 150, 50).unwrap(), [255, 0, 0, 255]);
        assert_eq!(pixel_at(image, 199, 99).unwrap(), [255, 0, 0, 255]);
    }

    #[test]
    fn restore_without_prior_keeps_background() {
        let mut surface = RasterSurface::new(WHITE);
        surface.ensure(8, 8).unwrap();
        surface.restore_after_resize(None).unwrap();
        assert!(argb_pixels(surface.image().unwrap()).unwrap().iter().all(|&px| px == 0xffff_ffff));
    }

    #[test]
    fn snapshot_is_independent_of_later_strokes() {
        let mut surface = RasterSurface::default();
        surface.ensure(12, 12).unwrap();
        let snapshot = surface.snapshot().unwrap().unwrap();

        surface
            .commit_freehand_segment(Point::new(0, 6), Point::new(12, 6), &PenSpec::new(BLACK, 4.0))
            .unwrap();
        assert_eq!(pixel_at(&snapshot, 6, 6).unwrap(), [255, 255, 255, 255]);
        assert_ne!(pixel_at(surface.image().unwrap(), 6, 6).unwrap(), [255, 255, 255, 255]);
    }

    #[test]
    fn premultiply_round_trips_opaque_pixels() {
        let argb = premultiply([12, 34, 56, 255]);
        assert_eq!(argb, 0xff0c_2238);
        assert_eq!(unpremultiply(argb), [12, 34, 56, 255]);
        assert_eq!(unpremultiply(0), [0, 0, 0, 0]);
    }
}

//! Image file import and export.
//!
//! PNG is written with Cairo's own encoder; JPEG and BMP go through the `image`
//! crate. Decoding always goes through `image` so JPEG, PNG, and BMP sources
//! are handled alike.

use crate::draw::surface::{self, SurfaceError};
use cairo::{Format, ImageSurface};
use image::{ImageFormat, RgbImage, RgbaImage};
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading or writing image files.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Failed to access image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image could not be decoded: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Image could not be encoded: {0}")]
    Encode(#[source] image::ImageError),

    #[error("PNG write failed: {0}")]
    PngWrite(#[from] cairo::IoError),

    #[error("Image is too large: {width}x{height}")]
    TooLarge { width: u32, height: u32 },

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl From<cairo::Error> for CodecError {
    fn from(err: cairo::Error) -> Self {
        Self::Surface(SurfaceError::Cairo(err))
    }
}

/// Output format, chosen from the destination file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    /// 24-bit, flattened onto white
    Jpeg,
    Bmp,
}

impl ExportFormat {
    /// Maps `.png`, `.jpg`/`.jpeg`, and `.bmp` (case-insensitive).
    ///
    /// Anything else, including no extension, falls back to PNG.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("jpg") | Some("jpeg") => Self::Jpeg,
            Some("bmp") => Self::Bmp,
            _ => Self::Png,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Bmp => "bmp",
        }
    }
}

/// Decodes an image file into an ARGB32 surface.
pub fn load_image(path: &Path) -> Result<ImageSurface, CodecError> {
    let bytes = std::fs::read(path)?;
    let surface = decode_image(&bytes)?;
    info!(
        "Loaded {}x{} image from {}",
        surface.width(),
        surface.height(),
        path.display()
    );
    Ok(surface)
}

/// Decodes encoded image bytes (format sniffed from content).
pub fn decode_image(bytes: &[u8]) -> Result<ImageSurface, CodecError> {
    let decoded = image::load_from_memory(bytes).map_err(CodecError::Decode)?;
    rgba_to_surface(&decoded.to_rgba8())
}

/// Writes `surface` to `path` in the format implied by its extension.
///
/// # Returns
/// The format that was written
pub fn save_image(surface: &ImageSurface, path: &Path) -> Result<ExportFormat, CodecError> {
    let format = ExportFormat::from_path(path);

    match format {
        ExportFormat::Png => {
            let mut writer = BufWriter::new(File::create(path)?);
            surface.write_to_png(&mut writer)?;
        }
        ExportFormat::Jpeg => {
            let rgb = flatten_on_white(surface)?;
            rgb.save_with_format(path, ImageFormat::Jpeg)
                .map_err(CodecError::Encode)?;
        }
        ExportFormat::Bmp => {
            let rgba = surface_to_rgba(surface)?;
            rgba.save_with_format(path, ImageFormat::Bmp)
                .map_err(CodecError::Encode)?;
        }
    }

    info!(
        "Saved {}x{} {:?} image to {}",
        surface.width(),
        surface.height(),
        format,
        path.display()
    );
    Ok(format)
}

/// Copies surface pixels into a straight-alpha RGBA buffer.
pub fn surface_to_rgba(surface: &ImageSurface) -> Result<RgbaImage, CodecError> {
    let (width, height) = dimensions(surface);
    let pixels = surface::argb_pixels(surface)?;
    let raw = pixels
        .into_iter()
        .flat_map(surface::unpremultiply)
        .collect::<Vec<u8>>();
    RgbaImage::from_raw(width, height, raw).ok_or(CodecError::TooLarge { width, height })
}

/// Composites surface pixels over opaque white and drops alpha.
pub fn flatten_on_white(surface: &ImageSurface) -> Result<RgbImage, CodecError> {
    let (width, height) = dimensions(surface);
    let pixels = surface::argb_pixels(surface)?;

    // Premultiplied over white: c + 255 * (1 - a).
    let raw = pixels
        .into_iter()
        .flat_map(|argb| {
            let inverse_alpha = 255 - (argb >> 24);
            let channel = |shift: u32| (((argb >> shift) & 0xff) + inverse_alpha).min(255) as u8;
            [channel(16), channel(8), channel(0)]
        })
        .collect::<Vec<u8>>();
    debug!("Flattened {width}x{height} image onto white");
    RgbImage::from_raw(width, height, raw).ok_or(CodecError::TooLarge { width, height })
}

/// Uploads a straight-alpha RGBA buffer into a new ARGB32 surface.
pub fn rgba_to_surface(rgba: &RgbaImage) -> Result<ImageSurface, CodecError> {
    let (width, height) = rgba.dimensions();
    let too_large = || CodecError::TooLarge { width, height };
    let w = i32::try_from(width).map_err(|_| too_large())?;
    let h = i32::try_from(height).map_err(|_| too_large())?;

    let mut surface = ImageSurface::create(Format::ARgb32, w, h)?;
    let stride = surface.stride() as usize;
    {
        let mut data = surface.data().map_err(SurfaceError::from)?;
        for (y, row) in rgba.rows().enumerate() {
            let line = &mut data[y * stride..y * stride + width as usize * 4];
            for (dst, px) in line.chunks_exact_mut(4).zip(row) {
                dst.copy_from_slice(&surface::premultiply(px.0).to_ne_bytes());
            }
        }
    }
    Ok(surface)
}

fn dimensions(surface: &ImageSurface) -> (u32, u32) {
    (
        surface.width().max(0) as u32,
        surface.height().max(0) as u32,
    )
}

//! Canvas export to image files.
//!
//! The canvas is rasterised with Cairo. PNG is encoded by Cairo itself and the
//! other raster formats by the `image` crate, chosen from the file extension.
//! When the raster path fails (unsupported extension, encoder or I/O error) a
//! PostScript print stream is attempted once next to the requested path.

mod file;
mod types;

pub use file::{
    FileExportConfig, ensure_directory_exists, expand_tilde, fallback_path, generate_filename,
    with_default_extension,
};
pub use types::{ExportError, ExportFormat, ExportOutcome};

use crate::draw::{Canvas, Surface, render_background, render_shapes};
use image::{DynamicImage, ImageFormat, RgbaImage};
use log::{debug, info, warn};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Writes `canvas` to `path`, picking the format from the extension.
///
/// With `postscript_fallback` set, a failed raster export is retried once as
/// PostScript at [`fallback_path`]; the outcome reports which file was written.
pub fn export_canvas(
    canvas: &Canvas,
    path: &Path,
    postscript_fallback: bool,
) -> Result<ExportOutcome, ExportError> {
    let path = with_default_extension(path);

    let primary = match ExportFormat::from_path(&path) {
        Ok(ExportFormat::Ps) => {
            write_postscript(canvas, &path)?;
            return Ok(outcome(&path, ExportFormat::Ps, false));
        }
        Ok(format) => write_raster(canvas, &path, format).map(|()| format),
        Err(ext) => Err(ExportError::UnsupportedFormat(ext)),
    };

    let primary_err = match primary {
        Ok(format) => return Ok(outcome(&path, format, false)),
        Err(err) => err,
    };

    if !postscript_fallback {
        return Err(primary_err);
    }

    let ps_path = fallback_path(&path);
    warn!(
        "Raster export to {} failed ({primary_err}), trying PostScript at {}",
        path.display(),
        ps_path.display()
    );
    match write_postscript(canvas, &ps_path) {
        Ok(()) => Ok(outcome(&ps_path, ExportFormat::Ps, true)),
        Err(fallback) => Err(ExportError::FallbackFailed {
            primary: Box::new(primary_err),
            fallback: Box::new(fallback),
        }),
    }
}

fn outcome(path: &Path, format: ExportFormat, used_fallback: bool) -> ExportOutcome {
    info!("Drawing saved to {}", path.display());
    ExportOutcome {
        path: path.to_path_buf(),
        format,
        used_fallback,
    }
}

fn checked_size(canvas: &Canvas) -> Result<(i32, i32), ExportError> {
    let invalid = || ExportError::InvalidSize {
        width: canvas.width(),
        height: canvas.height(),
    };
    let width = i32::try_from(canvas.width()).map_err(|_| invalid())?;
    let height = i32::try_from(canvas.height()).map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok((width, height))
}

fn paint(ctx: &cairo::Context, canvas: &Canvas) {
    render_background(ctx, canvas.background());
    render_shapes(ctx, canvas.shapes());
}

fn rasterise(canvas: &Canvas) -> Result<cairo::ImageSurface, ExportError> {
    let (width, height) = checked_size(canvas)?;
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        paint(&ctx, canvas);
    }
    surface.flush();
    Ok(surface)
}

/// Copies Cairo's premultiplied native-endian ARGB pixels into straight RGBA.
fn to_rgba(surface: &mut cairo::ImageSurface) -> Result<RgbaImage, ExportError> {
    let width = surface.width() as u32;
    let height = surface.height() as u32;
    let stride = surface.stride() as usize;
    let data = surface.data()?;

    let mut image = RgbaImage::new(width, height);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let offset = y as usize * stride + x as usize * 4;
        let argb = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        let [a, r, g, b] = argb.to_be_bytes();
        let unpremultiply = |c: u8| match a {
            0 => 0,
            255 => c,
            _ => ((u16::from(c) * 255 + u16::from(a) / 2) / u16::from(a)) as u8,
        };
        pixel.0 = [unpremultiply(r), unpremultiply(g), unpremultiply(b), a];
    }
    Ok(image)
}

/// Encodes the canvas in `format` entirely in memory.
fn encode_raster(canvas: &Canvas, format: ImageFormat) -> Result<Vec<u8>, ExportError> {
    let mut surface = rasterise(canvas)?;
    let mut bytes = Vec::new();
    if format == ImageFormat::Png {
        surface.write_to_png(&mut bytes)?;
        return Ok(bytes);
    }

    let image = DynamicImage::ImageRgba8(to_rgba(&mut surface)?);
    let image = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()),
        _ => image,
    };
    image.write_to(&mut Cursor::new(&mut bytes), format)?;
    Ok(bytes)
}

/// Rasterises the canvas and writes it in a raster `format`.
///
/// The file is only created once encoding has succeeded, so a failed export
/// leaves nothing behind at `path`.
pub fn write_raster(
    canvas: &Canvas,
    path: &Path,
    format: ExportFormat,
) -> Result<(), ExportError> {
    let Some(image_format) = format.image_format() else {
        return Err(ExportError::UnsupportedFormat(format.extension().to_string()));
    };
    let bytes = encode_raster(canvas, image_format)?;
    debug!("Encoded {} bytes of {:?}", bytes.len(), image_format);
    fs::write(path, bytes)?;
    Ok(())
}

/// Writes the canvas as a single-page PostScript document.
pub fn write_postscript(canvas: &Canvas, path: &Path) -> Result<(), ExportError> {
    let (width, height) = checked_size(canvas)?;
    let surface = cairo::PsSurface::new(width as f64, height as f64, path)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        paint(&ctx, canvas);
        ctx.show_page()?;
    }
    surface.finish();
    surface.status()?;
    Ok(())
}

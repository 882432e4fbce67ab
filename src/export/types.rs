//! Data types for canvas export.

use image::ImageFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File format written by export.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Raster PNG image, encoded by Cairo
    Png,
    /// Raster JPEG image (alpha is dropped)
    Jpeg,
    /// Raster Windows bitmap
    Bmp,
    /// Raster GIF image
    Gif,
    /// Raster TIFF image
    Tiff,
    /// PostScript print stream
    Ps,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Bmp => "bmp",
            ExportFormat::Gif => "gif",
            ExportFormat::Tiff => "tiff",
            ExportFormat::Ps => "ps",
        }
    }

    /// Encoder used for raster formats; `None` for PostScript.
    pub fn image_format(self) -> Option<ImageFormat> {
        match self {
            ExportFormat::Png => Some(ImageFormat::Png),
            ExportFormat::Jpeg => Some(ImageFormat::Jpeg),
            ExportFormat::Bmp => Some(ImageFormat::Bmp),
            ExportFormat::Gif => Some(ImageFormat::Gif),
            ExportFormat::Tiff => Some(ImageFormat::Tiff),
            ExportFormat::Ps => None,
        }
    }

    /// Picks the format from a path extension.
    ///
    /// No extension means PNG. An extension with no matching encoder is
    /// returned as the error so callers can report it.
    pub fn from_path(path: &Path) -> Result<Self, String> {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return Ok(ExportFormat::Png);
        };
        let ext = ext.to_ascii_lowercase();
        if ext == "ps" || ext == "eps" {
            return Ok(ExportFormat::Ps);
        }
        match ImageFormat::from_extension(&ext) {
            Some(ImageFormat::Png) => Ok(ExportFormat::Png),
            Some(ImageFormat::Jpeg) => Ok(ExportFormat::Jpeg),
            Some(ImageFormat::Bmp) => Ok(ExportFormat::Bmp),
            Some(ImageFormat::Gif) => Ok(ExportFormat::Gif),
            Some(ImageFormat::Tiff) => Ok(ExportFormat::Tiff),
            _ => Err(ext),
        }
    }
}

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutcome {
    /// File actually written (differs from the request after a fallback).
    pub path: PathBuf,
    pub format: ExportFormat,
    /// True when the raster export failed and the PostScript fallback wrote the file.
    pub used_fallback: bool,
}

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Cairo surface data unavailable: {0}")]
    SurfaceData(#[from] cairo::BorrowError),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Invalid filename template '{0}'")]
    InvalidTemplate(String),

    #[error("Unsupported image format '.{0}'")]
    UnsupportedFormat(String),

    #[error("Canvas size {width}x{height} cannot be exported")]
    InvalidSize { width: u32, height: u32 },

    #[error("{primary}; PostScript fallback also failed: {fallback}")]
    FallbackFailed {
        primary: Box<ExportError>,
        fallback: Box<ExportError>,
    },
}

impl From<cairo::IoError> for ExportError {
    fn from(err: cairo::IoError) -> Self {
        match err {
            cairo::IoError::Io(io) => ExportError::Io(io),
            cairo::IoError::Cairo(cairo) => ExportError::Cairo(cairo),
        }
    }
}

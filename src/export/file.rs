//! File naming and writing for exported drawings.

use super::types::{ExportError, ExportFormat};
use crate::config::ExportConfig;
use chrono::Local;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Where and how exported files are named when no explicit path is given.
#[derive(Debug, Clone)]
pub struct FileExportConfig {
    /// Directory to save drawings to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
    pub format: ExportFormat,
    /// Retry as PostScript when the raster export fails.
    pub postscript_fallback: bool,
}

impl Default for FileExportConfig {
    fn default() -> Self {
        Self {
            save_directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("~"))
                .join("Easel"),
            filename_template: "drawing_%Y-%m-%d_%H%M%S".to_string(),
            format: ExportFormat::Png,
            postscript_fallback: true,
        }
    }
}

impl FileExportConfig {
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            save_directory: expand_tilde(&config.save_directory),
            filename_template: config.filename_template.clone(),
            format: config.format,
            postscript_fallback: config.postscript_fallback,
        }
    }

    /// Timestamped path inside the save directory, creating the directory.
    pub fn next_path(&self) -> Result<PathBuf, ExportError> {
        let directory = ensure_directory_exists(&self.save_directory)?;
        let filename = generate_filename(&self.filename_template, self.format.extension())?;
        Ok(directory.join(filename))
    }
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `extension` - File extension (e.g., "png")
///
/// # Errors
/// Returns [`ExportError::InvalidTemplate`] when chrono cannot format `template`.
pub fn generate_filename(template: &str, extension: &str) -> Result<String, ExportError> {
    let now = Local::now();
    let mut filename = String::new();
    write!(filename, "{}.{}", now.format(template), extension)
        .map_err(|_| ExportError::InvalidTemplate(template.to_string()))?;
    Ok(filename)
}

/// Ensure the save directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Path the PostScript fallback writes to: the same path with a `.ps` extension.
pub fn fallback_path(path: &Path) -> PathBuf {
    path.with_extension("ps")
}

/// Appends `.png` when the path has no extension.
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(ExportFormat::Png.extension())
    }
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

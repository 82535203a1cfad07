pub mod layout;
pub mod pdf;

use crate::config::Config;
use crate::error::{ImageToPdfError, Result};
use image::{ImageReader, RgbImage};
use image_to_pdf_common::ImageEntry;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::info;

/// Append `.{extension}` unless the name already ends with it (case-insensitive).
///
/// The suffix is added to the whole name, so `scan.txt` becomes `scan.txt.pdf`.
pub fn normalize_output_path(path: &Path, extension: &str) -> PathBuf {
    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let name = path.to_string_lossy().to_lowercase();
    if name.ends_with(&suffix.to_lowercase()) {
        return path.to_path_buf();
    }
    let mut with_suffix = OsString::from(path.as_os_str());
    with_suffix.push(&suffix);
    PathBuf::from(with_suffix)
}

/// Decode any supported image and drop it to 8-bit RGB without alpha.
///
/// Palette, grayscale and 16-bit sources are expanded; alpha is discarded.
pub fn decode_rgb(path: &Path) -> Result<RgbImage> {
    let open_error = |source| ImageToPdfError::ImageOpen {
        path: path.to_path_buf(),
        source,
    };
    let image = ImageReader::open(path)
        .map_err(open_error)?
        .with_guessed_format()
        .map_err(open_error)?
        .decode()
        .map_err(|source| ImageToPdfError::ImageDecode {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(image.into_rgb8())
}

/// Write every entry, in order, as one page of a PDF at `destination`.
///
/// All images are decoded before anything touches the destination, so a bad
/// source leaves no file behind. Returns the normalized path actually written.
pub fn export_document(
    entries: &[ImageEntry],
    destination: &Path,
    config: &Config,
) -> Result<PathBuf> {
    if entries.is_empty() {
        return Err(ImageToPdfError::EmptyCollection);
    }
    let output_path = normalize_output_path(destination, &config.output_extension);

    let images = entries
        .iter()
        .map(|entry| decode_rgb(entry.path()))
        .collect::<Result<Vec<_>>>()?;

    let bytes = pdf::generate_pdf(images, &config.document_title, config.page_dpi)?;
    std::fs::write(&output_path, bytes).map_err(|source| ImageToPdfError::OutputWrite {
        path: output_path.clone(),
        source,
    })?;

    info!("Saved {} pages to {}", entries.len(), output_path.display());
    Ok(output_path)
}

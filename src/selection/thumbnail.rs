use image::imageops::FilterType;
use image::ImageReader;
use image_to_pdf_common::Thumbnail;
use std::path::Path;

use crate::error::{ImageToPdfError, Result};

/// Decode `path` and scale it to fit `max_edge`×`max_edge`, keeping aspect ratio.
pub fn make_thumbnail(path: &Path, max_edge: u32) -> Result<Thumbnail> {
    let image = ImageReader::open(path)
        .map_err(|e| failed(path, e))?
        .with_guessed_format()
        .map_err(|e| failed(path, e))?
        .decode()
        .map_err(|e| failed(path, e))?;

    // small images are enlarged so every row preview has the same bounding box
    let thumb = if image.width() > max_edge || image.height() > max_edge {
        image.thumbnail(max_edge, max_edge)
    } else {
        image.resize(max_edge, max_edge, FilterType::Triangle)
    };
    let rgba = thumb.to_rgba8();

    Ok(Thumbnail {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

fn failed(path: &Path, err: impl std::fmt::Display) -> ImageToPdfError {
    ImageToPdfError::ThumbnailUnavailable {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

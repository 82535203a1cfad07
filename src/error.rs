use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageToPdfError {
    #[error("Could not read metadata of {}: {source}", .path.display())]
    MetadataUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not build a preview for {}: {reason}", .path.display())]
    ThumbnailUnavailable { path: PathBuf, reason: String },

    #[error("No images to save. Add images before saving a PDF.")]
    EmptyCollection,

    #[error("Could not open {}: {source}", .path.display())]
    ImageOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not decode {}: {source}", .path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Could not write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF generation error: {0}")]
    PdfGeneration(String),

    #[error(transparent)]
    Ordering(#[from] image_to_pdf_common::Error),
}

pub type Result<T> = std::result::Result<T, ImageToPdfError>;

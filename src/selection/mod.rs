mod metadata;
mod thumbnail;

pub use metadata::{read_created_at, read_size};
pub use thumbnail::make_thumbnail;

use crate::config::Config;
use image_to_pdf_common::{unknown_created_at, ImageEntry};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Capture metadata and a preview for one picked file.
///
/// Never fails: unreadable size becomes 0, unreadable creation time becomes the
/// epoch, and an undecodable image gets no preview.
pub fn load_entry(path: &Path, config: &Config) -> ImageEntry {
    let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let size_bytes = read_size(&path).unwrap_or_else(|e| {
        debug!("{e}");
        0
    });
    let created_at = read_created_at(&path).unwrap_or_else(|e| {
        debug!("{e}");
        unknown_created_at()
    });
    let thumbnail = match make_thumbnail(&path, config.thumbnail_size) {
        Ok(thumb) => Some(thumb),
        Err(e) => {
            debug!("{e}");
            None
        }
    };

    let entry = ImageEntry::new(path, size_bytes, created_at, thumbnail);
    if !config.is_image_extension(entry.extension()) {
        debug!("{} has an unlisted extension", entry.display_name());
    }
    entry
}

/// Build entries in the order the paths were given.
pub fn load_entries(paths: &[PathBuf], config: &Config) -> Vec<ImageEntry> {
    let entries: Vec<ImageEntry> = paths.iter().map(|p| load_entry(p, config)).collect();
    let previews = entries.iter().filter(|e| e.thumbnail().is_some()).count();
    info!("Loaded {} images ({} with preview)", entries.len(), previews);
    entries
}

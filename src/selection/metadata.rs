use chrono::{DateTime, Utc};
use std::path::Path;

use crate::error::{ImageToPdfError, Result};

pub fn read_size(path: &Path) -> Result<u64> {
    std::fs::metadata(path)
        .map(|m| m.len())
        .map_err(|source| unavailable(path, source))
}

/// Filesystem creation time. Platforms without birth time report an error.
pub fn read_created_at(path: &Path) -> Result<DateTime<Utc>> {
    std::fs::metadata(path)
        .and_then(|m| m.created())
        .map(DateTime::<Utc>::from)
        .map_err(|source| unavailable(path, source))
}

fn unavailable(path: &Path, source: std::io::Error) -> ImageToPdfError {
    ImageToPdfError::MetadataUnavailable {
        path: path.to_path_buf(),
        source,
    }
}

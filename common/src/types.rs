//! Selected image model
//!
//! - ImageEntry: one selected file and the metadata captured when it was picked
//! - Thumbnail: the small RGBA preview shown in the list
//! - OrderingMode: the rule that decides display and export order

use chrono::{DateTime, Utc};
use std::fmt;
use std::path::{Path, PathBuf};

/// RGBA preview pixels (row-major, 4 bytes per pixel)
#[derive(Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thumbnail")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// One selected image.
///
/// Every field is captured once when the entry is built and never refreshed from
/// disk, so a file that changes after selection keeps its old metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageEntry {
    path: PathBuf,
    display_name: String,
    thumbnail: Option<Thumbnail>,
    size_bytes: u64,
    created_at: DateTime<Utc>,
    extension: String,
}

impl ImageEntry {
    /// Build an entry from already-captured metadata.
    ///
    /// `display_name` and `extension` are derived from `path`.
    pub fn new(
        path: PathBuf,
        size_bytes: u64,
        created_at: DateTime<Utc>,
        thumbnail: Option<Thumbnail>,
    ) -> Self {
        let display_name = display_name_of(&path);
        let extension = extension_of(&path);
        Self {
            path,
            display_name,
            thumbnail,
            size_bytes,
            created_at,
            extension,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// `None` means the preview could not be decoded and a placeholder is shown
    pub fn thumbnail(&self) -> Option<&Thumbnail> {
        self.thumbnail.as_ref()
    }

    /// 0 when the size could not be read
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Unix epoch when the creation time could not be read
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Lowercase, with the leading dot (".png"), or empty
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

/// Sentinel used when a creation timestamp is unavailable
pub fn unknown_created_at() -> DateTime<Utc> {
    DateTime::<Utc>::from(std::time::UNIX_EPOCH)
}

fn display_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

// ============================================
// Ordering mode
// ============================================

/// Rule governing the display and export sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderingMode {
    ByName,
    ByDate,
    BySize,
    ByExtension,
    #[default]
    Manual,
}

impl OrderingMode {
    /// Selector order
    pub const ALL: [OrderingMode; 5] = [
        OrderingMode::ByName,
        OrderingMode::ByDate,
        OrderingMode::BySize,
        OrderingMode::ByExtension,
        OrderingMode::Manual,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OrderingMode::ByName => "File name",
            OrderingMode::ByDate => "Creation date",
            OrderingMode::BySize => "File size",
            OrderingMode::ByExtension => "File extension",
            OrderingMode::Manual => "Manual (drag and drop)",
        }
    }

    /// Short key name used in messages
    pub fn key_name(self) -> &'static str {
        match self {
            OrderingMode::ByName => "name",
            OrderingMode::ByDate => "date",
            OrderingMode::BySize => "size",
            OrderingMode::ByExtension => "extension",
            OrderingMode::Manual => "hand",
        }
    }

    pub fn is_automatic(self) -> bool {
        self != OrderingMode::Manual
    }
}

impl fmt::Display for OrderingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Display order of the selected images
//!
//! Manual mode keeps insertion order and accepts moves. Automatic modes rebuild
//! the whole sequence from the captured metadata every time they are applied.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::types::{ImageEntry, OrderingMode};

/// Ordered sequence of entries plus the active ordering mode
#[derive(Debug, Clone, Default)]
pub struct OrderedCollection {
    entries: Vec<ImageEntry>,
    mode: OrderingMode,
}

impl OrderedCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: OrderingMode) -> Self {
        Self {
            entries: Vec::new(),
            mode,
        }
    }

    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn mode(&self) -> OrderingMode {
        self.mode
    }

    /// Drag-and-drop is only available in manual mode
    pub fn can_reorder(&self) -> bool {
        !self.mode.is_automatic()
    }

    /// Append new entries after the existing ones, then reapply the active sort.
    pub fn append<I>(&mut self, new_entries: I)
    where
        I: IntoIterator<Item = ImageEntry>,
    {
        self.entries.extend(new_entries);
        self.resort();
    }

    /// Switch mode. Automatic modes re-sort the full collection immediately.
    pub fn set_mode(&mut self, mode: OrderingMode) {
        self.mode = mode;
        self.resort();
    }

    /// Move the entry at `from` so that it ends up at index `to`.
    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<()> {
        if self.mode.is_automatic() {
            return Err(Error::ReorderLocked(self.mode.key_name()));
        }
        let len = self.entries.len();
        for index in [from, to] {
            if index >= len {
                return Err(Error::IndexOutOfRange { index, len });
            }
        }
        if from != to {
            let entry = self.entries.remove(from);
            self.entries.insert(to, entry);
        }
        Ok(())
    }

    fn resort(&mut self) {
        if self.mode.is_automatic() {
            let current = std::mem::take(&mut self.entries);
            self.entries = sorted(current, self.mode);
        }
    }
}

/// Stable sort of `entries` by the key of `mode`. Manual returns the input as is.
pub fn sorted(mut entries: Vec<ImageEntry>, mode: OrderingMode) -> Vec<ImageEntry> {
    match mode {
        OrderingMode::ByName => entries.sort_by(|a, b| {
            compare_case_insensitive(a.display_name(), b.display_name())
        }),
        OrderingMode::ByDate => entries.sort_by(|a, b| a.created_at().cmp(&b.created_at())),
        OrderingMode::BySize => entries.sort_by(|a, b| a.size_bytes().cmp(&b.size_bytes())),
        OrderingMode::ByExtension => entries.sort_by(|a, b| {
            compare_case_insensitive(a.extension(), b.extension())
        }),
        OrderingMode::Manual => {}
    }
    entries
}

fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

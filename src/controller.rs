//! Application state and command handlers
//!
//! The window owns one `AppState` and forwards button clicks, selector changes
//! and drops to it. Native dialogs are reached through `Dialogs` so the handlers
//! run the same way under tests.

use std::path::PathBuf;

use image_to_pdf_common::{OrderedCollection, OrderingMode};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{ImageToPdfError, Result};
use crate::export::export_document;
use crate::selection::load_entries;

/// File pickers and message boxes
pub trait Dialogs {
    /// Multi-file picker filtered to `extensions`, with an "all files" fallback.
    /// `None` when cancelled.
    fn pick_images(&mut self, extensions: &[String]) -> Option<Vec<PathBuf>>;

    /// Save picker filtered to `extension`. `None` when cancelled.
    fn pick_destination(&mut self, extension: &str) -> Option<PathBuf>;

    fn warning(&mut self, title: &str, message: &str);

    fn error(&mut self, title: &str, message: &str);

    fn info(&mut self, title: &str, message: &str);
}

#[derive(Debug)]
pub enum ExportOutcome {
    /// Nothing selected; the user was warned and no dialog was opened
    Empty,
    Cancelled,
    Saved(PathBuf),
    Failed(ImageToPdfError),
}

#[derive(Debug, Default)]
pub struct AppState {
    config: Config,
    collection: OrderedCollection,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let collection = OrderedCollection::with_mode(config.initial_mode);
        Self { config, collection }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn collection(&self) -> &OrderedCollection {
        &self.collection
    }

    /// "Add images" button. Returns how many entries were added.
    pub fn select_images(&mut self, dialogs: &mut impl Dialogs) -> usize {
        let Some(paths) = dialogs.pick_images(&self.config.image_extensions) else {
            return 0;
        };
        self.add_paths(&paths)
    }

    /// Append entries for `paths`, in order, then reapply the active sort.
    pub fn add_paths(&mut self, paths: &[PathBuf]) -> usize {
        if paths.is_empty() {
            return 0;
        }
        let entries = load_entries(paths, &self.config);
        let added = entries.len();
        self.collection.append(entries);
        added
    }

    /// Ordering selector
    pub fn set_mode(&mut self, mode: OrderingMode) {
        info!("Ordering mode: {}", mode);
        self.collection.set_mode(mode);
    }

    /// Drop of a dragged entry
    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<()> {
        self.collection.move_entry(from, to)?;
        Ok(())
    }

    /// "Save as PDF" button
    pub fn export_document(&self, dialogs: &mut impl Dialogs) -> ExportOutcome {
        if self.collection.is_empty() {
            dialogs.warning("No images", &ImageToPdfError::EmptyCollection.to_string());
            return ExportOutcome::Empty;
        }

        let Some(destination) = dialogs.pick_destination(&self.config.output_extension) else {
            return ExportOutcome::Cancelled;
        };

        match export_document(self.collection.entries(), &destination, &self.config) {
            Ok(path) => {
                dialogs.info("Done", &format!("PDF saved: {}", path.display()));
                ExportOutcome::Saved(path)
            }
            Err(err) => {
                warn!("Export failed: {}", err);
                dialogs.error("Error", &format!("Could not save the PDF: {}", err));
                ExportOutcome::Failed(err)
            }
        }
    }
}

//! Image to PDF
//!
//! Selection, export and the window-independent application state behind the
//! desktop app. Ordering lives in `image_to_pdf_common`.

pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod selection;

pub use config::Config;
pub use controller::{AppState, Dialogs, ExportOutcome};
pub use error::{ImageToPdfError, Result};
pub use image_to_pdf_common::{ImageEntry, OrderedCollection, OrderingMode, Thumbnail};

//! Image to PDF common library
//!
//! Data model and ordering rules shared by the export library and the desktop app.
//! Nothing in here touches the filesystem.

pub mod error;
pub mod ordering;
pub mod types;

pub use error::{Error, Result};
pub use ordering::{sorted, OrderedCollection};
pub use types::{unknown_created_at, ImageEntry, OrderingMode, Thumbnail};

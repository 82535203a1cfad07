use std::path::PathBuf;

use image_to_pdf::Dialogs;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

/// Native pickers and message boxes
pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn pick_images(&mut self, extensions: &[String]) -> Option<Vec<PathBuf>> {
        FileDialog::new()
            .set_title("Select images")
            .add_filter("Images", extensions)
            .add_filter("All files", &["*"])
            .pick_files()
    }

    fn pick_destination(&mut self, extension: &str) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Save PDF")
            .add_filter("PDF Files", &[extension])
            .save_file()
    }

    fn warning(&mut self, title: &str, message: &str) {
        show(MessageLevel::Warning, title, message);
    }

    fn error(&mut self, title: &str, message: &str) {
        show(MessageLevel::Error, title, message);
    }

    fn info(&mut self, title: &str, message: &str) {
        show(MessageLevel::Info, title, message);
    }
}

fn show(level: MessageLevel, title: &str, message: &str) {
    let _ = MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

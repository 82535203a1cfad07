use image_to_pdf_common::OrderingMode;

/// Session settings.
///
/// Built from defaults at startup and kept in memory only; nothing is read from
/// or written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub window_title: String,
    pub window_size: [f32; 2],
    /// Longest edge of list previews (px)
    pub thumbnail_size: u32,
    /// Extensions offered by the open dialog, without the dot
    pub image_extensions: Vec<String>,
    /// Extension appended to the save path when missing, without the dot
    pub output_extension: String,
    /// Title stored in the PDF metadata
    pub document_title: String,
    /// Resolution used to turn pixels into page size. 72 gives 1 px = 1 pt.
    pub page_dpi: f32,
    pub initial_mode: OrderingMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "Image to PDF".into(),
            window_size: [800.0, 600.0],
            thumbnail_size: 64,
            image_extensions: ["png", "jpg", "jpeg", "bmp", "gif"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
            output_extension: "pdf".into(),
            document_title: "Images".into(),
            page_dpi: 72.0,
            initial_mode: OrderingMode::Manual,
        }
    }
}

impl Config {
    /// Case-insensitive check against the open dialog filter
    pub fn is_image_extension(&self, ext: &str) -> bool {
        let ext = ext.trim_start_matches('.');
        self.image_extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }
}

use crate::error::{ImageToPdfError, Result};
use crate::export::layout::PageSize;
use image::RgbImage;
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, RawImage, RawImageData, RawImageFormat,
    XObjectTransform,
};
use tracing::debug;

/// Assemble one page per image, in the given order, and return the PDF bytes.
///
/// The image is anchored at the bottom-left corner and fills the page.
pub fn generate_pdf(images: Vec<RgbImage>, title: &str, dpi: f32) -> Result<Vec<u8>> {
    if images.is_empty() {
        return Err(ImageToPdfError::PdfGeneration("document has no pages".into()));
    }

    let mut doc = PdfDocument::new(title);
    let mut pages = Vec::with_capacity(images.len());

    for (index, image) in images.into_iter().enumerate() {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(ImageToPdfError::PdfGeneration(format!(
                "page {} has an empty image",
                index + 1
            )));
        }

        let raw = RawImage {
            pixels: RawImageData::U8(image.into_raw()),
            width: width as usize,
            height: height as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let image_id = doc.add_image(&raw);

        let size = PageSize::for_image(width, height, dpi);
        debug!(
            "page {}: {}x{} px -> {:.1}x{:.1} pt",
            index + 1,
            width,
            height,
            size.width_pt(),
            size.height_pt()
        );
        let ops = vec![Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                dpi: Some(dpi),
                ..Default::default()
            },
        }];
        pages.push(PdfPage::new(Mm(size.width_mm), Mm(size.height_mm), ops));
    }

    // printpdf downsamples and recompresses large images by default
    let options = PdfSaveOptions {
        image_optimization: None,
        ..Default::default()
    };
    let mut warnings = Vec::new();
    let bytes = doc.with_pages(pages).save(&options, &mut warnings);
    for warning in &warnings {
        debug!("printpdf: {:?}", warning);
    }

    Ok(bytes)
}

//! Page geometry
//!
//! Each page is exactly the size of its image at the configured resolution.
//! At 72 DPI one pixel maps to one point.

// ============================================
// Conversion factors
// ============================================

pub const MM_PER_INCH: f32 = 25.4;
pub const PT_PER_INCH: f32 = 72.0;

/// mm → pt (1mm ≈ 2.835pt)
pub const MM_TO_PT: f32 = PT_PER_INCH / MM_PER_INCH;

// ============================================
// Page size
// ============================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_mm: f32,
    pub height_mm: f32,
}

impl PageSize {
    /// Page that holds a `width_px`×`height_px` image at `dpi`
    pub fn for_image(width_px: u32, height_px: u32, dpi: f32) -> Self {
        Self {
            width_mm: px_to_mm(width_px, dpi),
            height_mm: px_to_mm(height_px, dpi),
        }
    }

    pub fn width_pt(&self) -> f32 {
        self.width_mm * MM_TO_PT
    }

    pub fn height_pt(&self) -> f32 {
        self.height_mm * MM_TO_PT
    }
}

pub fn px_to_mm(px: u32, dpi: f32) -> f32 {
    px as f32 / dpi * MM_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_72_dpi_maps_pixel_to_point() {
        let page = PageSize::for_image(595, 842, 72.0);
        assert!((page.width_pt() - 595.0).abs() < 0.01);
        assert!((page.height_pt() - 842.0).abs() < 0.01);
    }

    #[test]
    fn test_higher_dpi_shrinks_page() {
        let page = PageSize::for_image(300, 600, 300.0);
        assert!((page.width_mm - 25.4).abs() < 0.001);
        assert!((page.height_mm - 50.8).abs() < 0.001);
    }
}

//! PDF rasterisation: open a document and render pages to `DynamicImage`
//! via pdfium.
//!
//! ## Why a scale factor, not a target width?
//!
//! PDF page geometry is expressed in points (1/72 inch), so rendering at a
//! given DPI is a uniform scale of `dpi / 72`. Scaling keeps the physical
//! resolution identical for every page regardless of page size, which is
//! what the OCR engine cares about — glyph height in pixels tracks font
//! size in points. `max_rendered_pixels` still caps the longest edge so an
//! A0 poster cannot exhaust memory.

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Bind to a pdfium shared library.
///
/// Tries a copy in the current directory first, then the system library
/// path. Binding failures surface as
/// [`ExtractError::PdfiumBindingFailed`] rather than a panic so the CLI
/// can report them like any other processing error.
pub fn bind_engine() -> Result<Pdfium, ExtractError> {
    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map(Pdfium::new)
        .map_err(|e| ExtractError::PdfiumBindingFailed(format!("{:?}", e)))
}

/// Open a PDF document, mapping pdfium load failures to typed errors.
pub fn open_document<'a>(
    pdfium: &'a Pdfium,
    pdf_path: &Path,
) -> Result<PdfDocument<'a>, ExtractError> {
    let document = pdfium.load_pdf_from_file(pdf_path, None).map_err(|e| {
        let err_str = format!("{:?}", e);
        if err_str.contains("Password") || err_str.contains("password") {
            ExtractError::PasswordProtected {
                path: pdf_path.to_path_buf(),
            }
        } else {
            ExtractError::CorruptPdf {
                path: pdf_path.to_path_buf(),
                detail: err_str,
            }
        }
    })?;

    info!("PDF loaded: {} pages", document.pages().len());
    Ok(document)
}

/// Rasterise one page (0-indexed) at the configured DPI.
pub fn render_page(
    document: &PdfDocument<'_>,
    index: usize,
    config: &ExtractionConfig,
) -> Result<DynamicImage, ExtractError> {
    let pages = document.pages();
    let page = pages
        .get(index as u16)
        .map_err(|e| ExtractError::PageRenderFailed {
            page: index + 1,
            detail: format!("{:?}", e),
        })?;

    let render_config = PdfRenderConfig::new()
        .scale_page_by_factor(config.dpi as f32 / 72.0)
        .set_maximum_width(config.max_rendered_pixels as i32)
        .set_maximum_height(config.max_rendered_pixels as i32);

    let bitmap =
        page.render_with_config(&render_config)
            .map_err(|e| ExtractError::PageRenderFailed {
                page: index + 1,
                detail: format!("{:?}", e),
            })?;

    let image = bitmap.as_image();
    debug!(
        "Rendered page {} → {}x{} px",
        index + 1,
        image.width(),
        image.height()
    );

    Ok(image)
}

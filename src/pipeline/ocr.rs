//! OCR recognition: run Tesseract over one page image.
//!
//! This stage is intentionally thin — a fresh engine instance per page
//! keeps recognition state from one page out of the next and costs little
//! next to the recognition pass itself. Initialisation failures (missing
//! traineddata for the configured language) are distinguished from
//! per-page recognition failures so the CLI can point the user at the
//! right fix.

use crate::error::ExtractError;
use tesseract::Tesseract;
use tracing::debug;

/// Recognise the text on one PNG-encoded page image.
///
/// `page_num` is 1-based and only used for error reporting.
pub fn recognize_page(
    png_bytes: &[u8],
    language: &str,
    page_num: usize,
) -> Result<String, ExtractError> {
    let engine = Tesseract::new(None, Some(language)).map_err(|e| ExtractError::OcrInitFailed {
        language: language.to_string(),
        detail: e.to_string(),
    })?;

    let text = engine
        .set_image_from_mem(png_bytes)
        .map_err(|e| ExtractError::OcrFailed {
            page: page_num,
            detail: e.to_string(),
        })?
        .recognize()
        .map_err(|e| ExtractError::OcrFailed {
            page: page_num,
            detail: e.to_string(),
        })?
        .get_text()
        .map_err(|e| ExtractError::OcrFailed {
            page: page_num,
            detail: e.to_string(),
        })?;

    debug!("Page {}: OCR produced {} chars", page_num, text.len());
    Ok(text)
}

//! Embedded text-layer extraction.
//!
//! Most born-digital PDFs carry a machine-readable text layer that is both
//! faster and more accurate than OCR. The pipeline reads it first and only
//! falls back to rasterising when the layer is absent or too thin to be
//! real content — scanned documents often contain a watermark or a page
//! number as their only "text", which must not short-circuit OCR.

use crate::error::ExtractError;
use pdfium_render::prelude::*;
use tracing::debug;

/// Minimum non-whitespace characters for a text layer to count as content.
const MIN_CONTENT_CHARS: usize = 50;

/// Minimum whitespace-separated words for a text layer to count as content.
const MIN_CONTENT_WORDS: usize = 10;

/// Read the text layer of every page, in page order.
///
/// Pages without a text layer yield empty strings; the caller decides via
/// [`has_content`] whether the document as a whole is worth keeping.
pub fn extract_text_layer(document: &PdfDocument<'_>) -> Result<Vec<String>, ExtractError> {
    let pages = document.pages();
    let mut texts = Vec::with_capacity(pages.len() as usize);

    for (index, page) in pages.iter().enumerate() {
        let text = page
            .text()
            .map(|t| t.all())
            .unwrap_or_default();
        debug!("Page {}: {} chars in text layer", index + 1, text.len());
        texts.push(text);
    }

    Ok(texts)
}

/// Decide whether extracted text is substantial enough to use.
///
/// Thresholds: at least 50 non-whitespace characters and at least 10
/// words. Below that, the "text" is typically a watermark, a bare page
/// number, or producer noise, and OCR will do better.
pub fn has_content(text: &str) -> bool {
    let clean_len = text.chars().filter(|c| !c.is_whitespace()).count();
    let word_count = text.split_whitespace().count();
    clean_len >= MIN_CONTENT_CHARS && word_count >= MIN_CONTENT_WORDS
}

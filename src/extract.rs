//! Eager (full-document) extraction entry points.
//!
//! The pipeline is a single sequential pass: pages are processed strictly
//! in document order, one at a time, and each page's raster is dropped
//! before the next page is rendered, so peak memory is one page image
//! regardless of document size. A failure on any page aborts the run —
//! there are no partial results.

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use crate::output::{ExtractionOutput, ExtractionStats, PageMode, PageText};
use crate::pipeline::{direct, encode, input, ocr, postprocess, render};
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Extract the text of a PDF file.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `path`   — Local filesystem path to a PDF
/// * `config` — Extraction configuration
///
/// # Returns
/// `Ok(ExtractionOutput)` with the assembled text (empty when every page
/// is blank) and per-page records.
///
/// # Errors
/// Returns `Err(ExtractError)` when the file is missing, unreadable, not a
/// PDF, or when any page fails to render or recognise.
pub fn extract(
    path: impl AsRef<str>,
    config: &ExtractionConfig,
) -> Result<ExtractionOutput, ExtractError> {
    let total_start = Instant::now();
    let path = path.as_ref();
    info!("Starting extraction: {}", path);

    // ── Step 1: Validate input ───────────────────────────────────────────
    let pdf_path = input::resolve_input(path)?;

    // ── Step 2: Open the document ────────────────────────────────────────
    let pdfium = render::bind_engine()?;
    let document = render::open_document(&pdfium, &pdf_path)?;
    let total_pages = document.pages().len() as usize;

    // ── Step 3: Try the embedded text layer ──────────────────────────────
    let layer_texts = if config.force_ocr {
        info!("Forced OCR mode, skipping text layer");
        None
    } else {
        let texts = direct::extract_text_layer(&document)?;
        if direct::has_content(&texts.concat()) {
            info!("Text layer has content, skipping OCR");
            Some(texts)
        } else {
            info!("Text layer missing or too thin, falling back to OCR");
            None
        }
    };
    let use_ocr = layer_texts.is_none();

    if let Some(ref cb) = config.progress_callback {
        cb.on_extraction_start(total_pages, use_ocr);
    }

    // ── Step 4: Process pages sequentially ───────────────────────────────
    let mut pages: Vec<PageText> = Vec::with_capacity(total_pages);
    let mut render_duration_ms = 0u64;
    let mut ocr_duration_ms = 0u64;

    match layer_texts {
        Some(texts) => {
            for (index, raw) in texts.into_iter().enumerate() {
                let page_num = index + 1;
                if let Some(ref cb) = config.progress_callback {
                    cb.on_page_start(page_num, total_pages);
                }
                let page_start = Instant::now();
                let text = postprocess::clean_page_text(&raw);
                let page = PageText {
                    page_num,
                    text,
                    mode: PageMode::TextLayer,
                    duration_ms: page_start.elapsed().as_millis() as u64,
                };
                if let Some(ref cb) = config.progress_callback {
                    cb.on_page_complete(page_num, total_pages, page.mode, page.text.len());
                }
                pages.push(page);
            }
        }
        None => {
            for index in 0..total_pages {
                let page_num = index + 1;
                if let Some(ref cb) = config.progress_callback {
                    cb.on_page_start(page_num, total_pages);
                }
                let page_start = Instant::now();

                let render_start = Instant::now();
                let image = render::render_page(&document, index, config)?;
                let png = encode::encode_page(&image).map_err(|source| {
                    ExtractError::PageEncodeFailed {
                        page: page_num,
                        source,
                    }
                })?;
                // The raster is no longer needed once encoded
                drop(image);
                render_duration_ms += render_start.elapsed().as_millis() as u64;

                let ocr_start = Instant::now();
                let raw = ocr::recognize_page(&png, &config.language, page_num)?;
                ocr_duration_ms += ocr_start.elapsed().as_millis() as u64;

                let text = postprocess::clean_page_text(&raw);
                debug!("Page {}: {} chars after cleanup", page_num, text.len());

                let page = PageText {
                    page_num,
                    text,
                    mode: PageMode::Ocr,
                    duration_ms: page_start.elapsed().as_millis() as u64,
                };
                if let Some(ref cb) = config.progress_callback {
                    cb.on_page_complete(page_num, total_pages, page.mode, page.text.len());
                }
                pages.push(page);
            }
        }
    }

    // ── Step 5: Assemble the final document ──────────────────────────────
    let text = assemble_document(&pages);

    // ── Step 6: Compute stats ────────────────────────────────────────────
    let blank_pages = pages.iter().filter(|p| p.is_blank()).count();
    let ocr_pages = pages
        .iter()
        .filter(|p| p.mode == PageMode::Ocr)
        .count();

    let stats = ExtractionStats {
        total_pages,
        ocr_pages,
        blank_pages,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
        render_duration_ms,
        ocr_duration_ms,
    };

    info!(
        "Extraction complete: {}/{} pages with text, {}ms total",
        total_pages - blank_pages,
        total_pages,
        stats.total_duration_ms
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_extraction_complete(total_pages, blank_pages);
    }

    Ok(ExtractionOutput { text, pages, stats })
}

/// Extract a PDF and write the text directly to a file.
///
/// Uses atomic write (temp file + rename) to prevent partial files.
pub fn extract_to_file(
    path: impl AsRef<str>,
    output_path: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<ExtractionStats, ExtractError> {
    let output = extract(path, config)?;
    let out = output_path.as_ref();

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ExtractError::OutputWriteFailed {
                path: out.to_path_buf(),
                source: e,
            })?;
        }
    }

    let tmp_path = out.with_extension("tmp");
    std::fs::write(&tmp_path, &output.text).map_err(|e| ExtractError::OutputWriteFailed {
        path: out.to_path_buf(),
        source: e,
    })?;

    std::fs::rename(&tmp_path, out).map_err(|e| ExtractError::OutputWriteFailed {
        path: out.to_path_buf(),
        source: e,
    })?;

    Ok(output.stats)
}

/// Extract text from PDF bytes in memory.
///
/// This avoids the need for the caller to create a temporary file: the
/// bytes are written to a managed [`tempfile`] that is cleaned up
/// automatically on return or panic. Recommended when PDF data comes from
/// a database or network stream rather than a file on disk.
pub fn extract_from_bytes(
    bytes: &[u8],
    config: &ExtractionConfig,
) -> Result<ExtractionOutput, ExtractError> {
    let mut tmp = tempfile::NamedTempFile::new()
        .map_err(|e| ExtractError::Internal(format!("tempfile: {e}")))?;
    input::validate_magic(bytes, tmp.path())?;
    tmp.write_all(bytes)
        .map_err(|e| ExtractError::Internal(format!("tempfile write: {e}")))?;
    let path = tmp.path().to_string_lossy().to_string();
    // `tmp` is dropped (and the file deleted) when `extract` returns
    extract(&path, config)
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Assemble the final text from per-page results.
///
/// Each non-blank page contributes `--- Page N ---\n<text>\n\n`; blank
/// pages are skipped. The joined result is trimmed so the output carries
/// no leading or trailing whitespace.
fn assemble_document(pages: &[PageText]) -> String {
    let mut full_text = String::new();

    for page in pages {
        if page.is_blank() {
            continue;
        }
        full_text.push_str(&format!("--- Page {} ---\n{}\n\n", page.page_num, page.text));
    }

    full_text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: usize, text: &str) -> PageText {
        PageText {
            page_num: n,
            text: text.to_string(),
            mode: PageMode::Ocr,
            duration_ms: 0,
        }
    }

    #[test]
    fn assembles_one_block_per_page_in_order() {
        let pages = vec![page(1, "first"), page(2, "second"), page(3, "third")];
        let out = assemble_document(&pages);
        assert_eq!(
            out,
            "--- Page 1 ---\nfirst\n\n--- Page 2 ---\nsecond\n\n--- Page 3 ---\nthird"
        );
    }

    #[test]
    fn skips_blank_pages_but_keeps_numbering() {
        let pages = vec![page(1, "first"), page(2, "   \n "), page(3, "third")];
        let out = assemble_document(&pages);
        assert!(!out.contains("--- Page 2 ---"));
        assert!(out.contains("--- Page 1 ---"));
        assert!(out.contains("--- Page 3 ---"));
        // Page numbers reflect source positions, not output positions
        assert!(out.find("--- Page 1 ---").unwrap() < out.find("--- Page 3 ---").unwrap());
    }

    #[test]
    fn all_blank_pages_yield_empty_output() {
        let pages = vec![page(1, ""), page(2, "\t\n")];
        assert_eq!(assemble_document(&pages), "");
    }

    #[test]
    fn no_pages_yield_empty_output() {
        assert_eq!(assemble_document(&[]), "");
    }

    #[test]
    fn output_has_no_edge_whitespace() {
        let pages = vec![page(1, "text")];
        let out = assemble_document(&pages);
        assert_eq!(out, out.trim());
        assert!(out.starts_with("--- Page 1 ---"));
        assert!(out.ends_with("text"));
    }

    #[test]
    fn multiline_page_text_stays_inside_its_block() {
        let pages = vec![page(1, "line one\nline two"), page(2, "next")];
        let out = assemble_document(&pages);
        assert!(out.contains("--- Page 1 ---\nline one\nline two\n\n--- Page 2 ---"));
    }
}

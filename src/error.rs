//! Error types for the pdfocr library.
//!
//! All failures are expressed as one [`ExtractError`] enum. There is no
//! non-fatal page-level error type: the extraction contract is
//! all-or-nothing, so the first page that fails to render or recognise
//! aborts the run. The CLI binary absorbs every processing error at its
//! boundary (stderr diagnostic, empty stdout, exit 0); library callers get
//! the typed error and can react to individual variants.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdfocr library.
#[derive(Debug, Error)]
pub enum ExtractError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but does not start with `%PDF`.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF '{path}' is corrupt: {detail}\nTry repairing with: qpdf --decrypt input.pdf output.pdf")]
    CorruptPdf { path: PathBuf, detail: String },

    /// PDF is encrypted; password-protected documents are not supported.
    #[error("PDF '{path}' is encrypted; password-protected documents are not supported")]
    PasswordProtected { path: PathBuf },

    /// pdfium returned an error while rasterising a specific page.
    #[error("Rasterisation failed for page {page}: {detail}")]
    PageRenderFailed { page: usize, detail: String },

    /// PNG encoding of a rendered page failed.
    #[error("Image encoding failed for page {page}: {source}")]
    PageEncodeFailed {
        page: usize,
        #[source]
        source: image::ImageError,
    },

    // ── OCR errors ────────────────────────────────────────────────────────
    /// Tesseract could not be initialised for the configured language.
    #[error("OCR engine failed to initialise for language '{language}': {detail}\nCheck that the Tesseract '{language}' traineddata is installed.")]
    OcrInitFailed { language: String, detail: String },

    /// Tesseract failed while recognising a page image.
    #[error("OCR failed for page {page}: {detail}")]
    OcrFailed { page: usize, detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output text file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error("Failed to bind to pdfium library: {0}\nInstall a pdfium shared library system-wide, or place one next to the binary.")]
    PdfiumBindingFailed(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let e = ExtractError::FileNotFound {
            path: PathBuf::from("/tmp/missing.pdf"),
        };
        assert_eq!(e.to_string(), "File not found: /tmp/missing.pdf");
    }

    #[test]
    fn not_a_pdf_display() {
        let e = ExtractError::NotAPdf {
            path: PathBuf::from("notes.txt"),
            magic: *b"hell",
        };
        let msg = e.to_string();
        assert!(msg.contains("notes.txt"), "got: {msg}");
        assert!(msg.contains("not a valid PDF"));
    }

    #[test]
    fn ocr_init_display_names_language() {
        let e = ExtractError::OcrInitFailed {
            language: "eng".into(),
            detail: "no traineddata".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("'eng'"));
        assert!(msg.contains("traineddata"));
    }

    #[test]
    fn page_render_display() {
        let e = ExtractError::PageRenderFailed {
            page: 3,
            detail: "bitmap allocation failed".into(),
        };
        assert!(e.to_string().contains("page 3"));
    }
}

//! # pdfocr
//!
//! Extract text from PDF documents, falling back to OCR for scanned pages.
//!
//! ## Why this crate?
//!
//! Born-digital PDFs carry an embedded text layer that can be read
//! directly and losslessly. Scanned PDFs carry only pixels. This crate
//! handles both with one call: it reads the text layer when it holds real
//! content, and otherwise rasterises each page via pdfium and runs
//! Tesseract OCR over it, assembling the results into one plain-text
//! document with per-page markers.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input    validate path and %PDF magic
//!  ├─ 2. Direct   read the embedded text layer; keep it if substantial
//!  ├─ 3. Render   rasterise pages at 200 DPI via pdfium (fallback path)
//!  ├─ 4. Encode   page image → in-memory PNG
//!  ├─ 5. OCR      Tesseract recognition, English, one page at a time
//!  ├─ 6. Clean    deterministic text cleanup per page
//!  └─ 7. Output   `--- Page N ---` blocks, blank pages skipped
//! ```
//!
//! Pages are processed strictly sequentially; a failure on any page aborts
//! the run with a typed [`ExtractError`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdfocr::{extract, ExtractionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ExtractionConfig::default();
//!     let output = extract("document.pdf", &config)?;
//!     println!("{}", output.text);
//!     eprintln!("{} pages, {} via OCR",
//!         output.stats.total_pages,
//!         output.stats.ocr_pages);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdfocr` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only
//! deps:
//! ```toml
//! pdfocr = { version = "0.3", default-features = false }
//! ```
//!
//! ## Runtime requirements
//!
//! The pdfium shared library must be loadable (system library or a copy
//! next to the binary), and Tesseract with the `eng` traineddata must be
//! installed.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ExtractionConfig, ExtractionConfigBuilder, DEFAULT_DPI, DEFAULT_LANGUAGE};
pub use error::ExtractError;
pub use extract::{extract, extract_from_bytes, extract_to_file};
pub use output::{ExtractionOutput, ExtractionStats, PageMode, PageText};
pub use progress::{ExtractionProgressCallback, NoopProgressCallback, ProgressCallback};

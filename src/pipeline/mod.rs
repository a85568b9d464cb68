//! Pipeline stages for PDF text extraction.
//!
//! Each submodule implements exactly one transformation step. Keeping
//! stages separate makes each independently testable and lets us swap
//! implementations (e.g. switch the OCR backend) without touching other
//! stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ direct ─────────────────────────────▶ postprocess
//! (path)    (text layer)                          (cleanup)
//!    │
//!    └────▶ render ──▶ encode ──▶ ocr ──────────▶ postprocess
//!           (pdfium)   (PNG)      (tesseract)     (cleanup)
//! ```
//!
//! 1. [`input`]  — validate the user-supplied path (existence, readability,
//!    `%PDF` magic)
//! 2. [`direct`] — read the embedded text layer; decide whether it carries
//!    enough content to skip OCR
//! 3. [`render`] — rasterise one page at the configured DPI
//! 4. [`encode`] — PNG-encode the rendered `DynamicImage` in memory
//! 5. [`ocr`]    — recognise the PNG bytes with Tesseract
//! 6. [`postprocess`] — deterministic text-cleanup rules (line endings,
//!    form feeds, blank-line collapse, invisible characters)

pub mod direct;
pub mod encode;
pub mod input;
pub mod ocr;
pub mod postprocess;
pub mod render;

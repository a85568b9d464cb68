//! Configuration for a text extraction run.
//!
//! All behaviour is controlled through [`ExtractionConfig`], built via its
//! [`ExtractionConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to share configs across calls and to diff two runs to understand
//! why their outputs differ.
//!
//! The CLI deliberately exposes none of the OCR knobs: the tool contract is
//! a fixed 200 DPI render and English recognition. The fields exist so that
//! library callers and tests can construct configs explicitly.

use crate::error::ExtractError;
use crate::progress::ProgressCallback;
use std::fmt;

/// Default rendering resolution in dots per inch.
pub const DEFAULT_DPI: u32 = 200;

/// Default Tesseract language code.
pub const DEFAULT_LANGUAGE: &str = "eng";

/// Configuration for a PDF text extraction.
///
/// Built via [`ExtractionConfig::builder()`] or using
/// [`ExtractionConfig::default()`].
///
/// # Example
/// ```rust
/// use pdfocr::ExtractionConfig;
///
/// let config = ExtractionConfig::builder()
///     .force_ocr(true)
///     .build()
///     .unwrap();
/// assert_eq!(config.dpi, 200);
/// ```
#[derive(Clone)]
pub struct ExtractionConfig {
    /// Rendering DPI used when rasterising each PDF page. Default: 200.
    ///
    /// 200 DPI keeps ten-point body text around the 20 px x-height that
    /// Tesseract's recogniser was trained on. Lower resolutions merge thin
    /// strokes; higher ones only cost memory.
    pub dpi: u32,

    /// Tesseract language code. Default: `"eng"`.
    pub language: String,

    /// Maximum rendered image dimension (width or height) in pixels.
    /// Default: 4000.
    ///
    /// A safety cap independent of DPI. A 200-DPI render of an A0 poster
    /// would produce a 6 600 × 9 300 px image; this field caps either
    /// dimension, scaling the other proportionally, so pdfium never
    /// allocates an unbounded bitmap.
    pub max_rendered_pixels: u32,

    /// Skip the embedded-text-layer attempt and go straight to OCR.
    /// Default: false.
    ///
    /// Useful for PDFs whose text layer exists but is garbage (bad producer
    /// encodings, watermark-only layers over scanned pages).
    pub force_ocr: bool,

    /// Optional per-page progress callback.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            language: DEFAULT_LANGUAGE.to_string(),
            max_rendered_pixels: 4000,
            force_ocr: false,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ExtractionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionConfig")
            .field("dpi", &self.dpi)
            .field("language", &self.language)
            .field("max_rendered_pixels", &self.max_rendered_pixels)
            .field("force_ocr", &self.force_ocr)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn callback>"),
            )
            .finish()
    }
}

impl ExtractionConfig {
    /// Create a new builder for `ExtractionConfig`.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ExtractionConfig`].
#[derive(Debug)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi;
        self
    }

    pub fn language(mut self, lang: impl Into<String>) -> Self {
        self.config.language = lang.into();
        self
    }

    pub fn max_rendered_pixels(mut self, px: u32) -> Self {
        self.config.max_rendered_pixels = px.max(100);
        self
    }

    pub fn force_ocr(mut self, v: bool) -> Self {
        self.config.force_ocr = v;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExtractionConfig, ExtractError> {
        let c = &self.config;
        if c.dpi < 72 || c.dpi > 600 {
            return Err(ExtractError::InvalidConfig(format!(
                "DPI must be 72–600, got {}",
                c.dpi
            )));
        }
        if c.language.is_empty() {
            return Err(ExtractError::InvalidConfig(
                "Language code must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_tool_contract() {
        let c = ExtractionConfig::default();
        assert_eq!(c.dpi, 200);
        assert_eq!(c.language, "eng");
        assert!(!c.force_ocr);
    }

    #[test]
    fn builder_rejects_out_of_range_dpi() {
        assert!(ExtractionConfig::builder().dpi(50).build().is_err());
        assert!(ExtractionConfig::builder().dpi(601).build().is_err());
        assert!(ExtractionConfig::builder().dpi(72).build().is_ok());
        assert!(ExtractionConfig::builder().dpi(600).build().is_ok());
    }

    #[test]
    fn builder_rejects_empty_language() {
        assert!(ExtractionConfig::builder().language("").build().is_err());
    }

    #[test]
    fn pixel_cap_has_floor() {
        let c = ExtractionConfig::builder()
            .max_rendered_pixels(1)
            .build()
            .unwrap();
        assert_eq!(c.max_rendered_pixels, 100);
    }
}

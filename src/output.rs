//! Output types returned by the extraction entry points.

use serde::{Deserialize, Serialize};

/// How the text of a page was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageMode {
    /// Read from the PDF's embedded text layer.
    TextLayer,
    /// Recognised from a rasterised page image.
    Ocr,
}

/// The cleaned text of a single page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageText {
    /// 1-based page number.
    pub page_num: usize,
    /// Cleaned page text; may be empty for blank pages.
    pub text: String,
    /// How the text was obtained.
    pub mode: PageMode,
    /// Wall-clock time spent on this page in milliseconds.
    pub duration_ms: u64,
}

impl PageText {
    /// A page is blank when its text is empty after trimming whitespace.
    /// Blank pages contribute no block to the assembled output.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Aggregate statistics for one extraction run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Pages in the source document.
    pub total_pages: usize,
    /// Pages whose text came from OCR.
    pub ocr_pages: usize,
    /// Pages skipped in the assembled output because their text was blank.
    pub blank_pages: usize,
    /// Total wall-clock time in milliseconds.
    pub total_duration_ms: u64,
    /// Time spent rasterising pages in milliseconds (zero on the text-layer path).
    pub render_duration_ms: u64,
    /// Time spent in the OCR engine in milliseconds (zero on the text-layer path).
    pub ocr_duration_ms: u64,
}

/// The complete result of an extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionOutput {
    /// The assembled text: one `--- Page N ---` block per non-blank page,
    /// leading/trailing whitespace stripped. Empty when every page is blank.
    pub text: String,
    /// Per-page records, in page order.
    pub pages: Vec<PageText>,
    /// Run statistics.
    pub stats: ExtractionStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection_trims_whitespace() {
        let page = PageText {
            page_num: 1,
            text: " \n\t \n".into(),
            mode: PageMode::Ocr,
            duration_ms: 0,
        };
        assert!(page.is_blank());

        let page = PageText {
            page_num: 2,
            text: "x".into(),
            mode: PageMode::Ocr,
            duration_ms: 0,
        };
        assert!(!page.is_blank());
    }

    #[test]
    fn page_mode_serialises_snake_case() {
        assert_eq!(
            serde_json::to_string(&PageMode::TextLayer).unwrap(),
            "\"text_layer\""
        );
        assert_eq!(serde_json::to_string(&PageMode::Ocr).unwrap(), "\"ocr\"");
    }
}

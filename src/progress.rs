//! Progress-callback trait for per-page extraction events.
//!
//! Inject an [`Arc<dyn ExtractionProgressCallback>`] via
//! [`crate::config::ExtractionConfigBuilder::progress_callback`] to receive
//! events as the pipeline works through the document. Callbacks are the
//! least-invasive integration point: callers can forward events to a
//! terminal progress bar, a log, or a database record without the library
//! knowing anything about how the host application communicates.
//!
//! Pages are processed strictly sequentially, so events arrive in page
//! order from a single thread. The trait is still `Send + Sync` so the
//! same callback can be shared with other threads of the host application.

use crate::output::PageMode;
use std::sync::Arc;

/// Called by the extraction pipeline as it processes each page.
///
/// All methods have default no-op implementations so callers only override
/// what they care about.
pub trait ExtractionProgressCallback: Send + Sync {
    /// Called once before any page is processed.
    ///
    /// `total_pages` is the page count of the document; `ocr` is true when
    /// the run is taking the rasterise-and-recognise path rather than the
    /// embedded text layer.
    fn on_extraction_start(&self, total_pages: usize, ocr: bool) {
        let _ = (total_pages, ocr);
    }

    /// Called just before a page is rendered (or its text layer is read).
    fn on_page_start(&self, page_num: usize, total_pages: usize) {
        let _ = (page_num, total_pages);
    }

    /// Called when a page's text has been extracted and cleaned.
    ///
    /// `chars` is the character count of the cleaned text (zero for blank
    /// pages).
    fn on_page_complete(&self, page_num: usize, total_pages: usize, mode: PageMode, chars: usize) {
        let _ = (page_num, total_pages, mode, chars);
    }

    /// Called once after every page has been processed.
    fn on_extraction_complete(&self, total_pages: usize, blank_pages: usize) {
        let _ = (total_pages, blank_pages);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl ExtractionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ExtractionConfig`].
pub type ProgressCallback = Arc<dyn ExtractionProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TrackingCallback {
        starts: AtomicUsize,
        completes: AtomicUsize,
        last_chars: AtomicUsize,
    }

    impl ExtractionProgressCallback for TrackingCallback {
        fn on_page_start(&self, _page_num: usize, _total_pages: usize) {
            self.starts.fetch_add(1, Ordering::SeqCst);
        }

        fn on_page_complete(
            &self,
            _page_num: usize,
            _total_pages: usize,
            _mode: PageMode,
            chars: usize,
        ) {
            self.completes.fetch_add(1, Ordering::SeqCst);
            self.last_chars.store(chars, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_extraction_start(5, true);
        cb.on_page_start(1, 5);
        cb.on_page_complete(1, 5, PageMode::Ocr, 42);
        cb.on_extraction_complete(5, 1);
    }

    #[test]
    fn tracking_callback_receives_events() {
        let tracker = TrackingCallback {
            starts: AtomicUsize::new(0),
            completes: AtomicUsize::new(0),
            last_chars: AtomicUsize::new(0),
        };

        tracker.on_page_start(1, 2);
        tracker.on_page_complete(1, 2, PageMode::TextLayer, 100);
        tracker.on_page_start(2, 2);
        tracker.on_page_complete(2, 2, PageMode::TextLayer, 250);

        assert_eq!(tracker.starts.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.completes.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.last_chars.load(Ordering::SeqCst), 250);
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: Arc<dyn ExtractionProgressCallback> = Arc::new(NoopProgressCallback);
        cb.on_extraction_start(10, false);
        cb.on_page_complete(1, 10, PageMode::TextLayer, 512);
    }
}

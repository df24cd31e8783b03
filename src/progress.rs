//! Progress-callback trait for per-page conversion events.
//!
//! Pass a `&dyn ConversionProgressCallback` to
//! [`crate::convert::convert_with`] to be told as each page's text is
//! extracted. The CLI uses this to drive its progress bar; library callers
//! that don't care pass [`NoopProgressCallback`].
//!
//! # Example
//!
//! ```rust
//! use heuristic_pdf2md::ConversionProgressCallback;
//! use std::cell::Cell;
//!
//! struct CountingCallback {
//!     lines: Cell<usize>,
//! }
//!
//! impl ConversionProgressCallback for CountingCallback {
//!     fn on_page_complete(&self, _page_num: usize, _total_pages: usize, line_count: usize) {
//!         self.lines.set(self.lines.get() + line_count);
//!     }
//! }
//! ```

/// Called by the conversion pipeline as it processes each page.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Pages are reported in document order.
pub trait ConversionProgressCallback {
    /// Called once, after the document is opened and before the first page.
    fn on_conversion_start(&self, total_pages: usize) {
        let _ = total_pages;
    }

    /// Called when a page's text was extracted and filtered.
    ///
    /// # Arguments
    /// * `page_num`    — 1-indexed page number
    /// * `total_pages` — total pages in the document
    /// * `line_count`  — non-empty lines the page kept after filtering
    fn on_page_complete(&self, page_num: usize, total_pages: usize, line_count: usize) {
        let _ = (page_num, total_pages, line_count);
    }

    /// Called when a page's text could not be extracted. The page is
    /// treated as empty.
    fn on_page_error(&self, page_num: usize, total_pages: usize, error: &str) {
        let _ = (page_num, total_pages, error);
    }

    /// Called once after all pages have been attempted.
    ///
    /// # Arguments
    /// * `total_pages`   — total pages in the document
    /// * `success_count` — pages whose text was extracted without error
    fn on_conversion_complete(&self, total_pages: usize, success_count: usize) {
        let _ = (total_pages, success_count);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl ConversionProgressCallback for NoopProgressCallback {}

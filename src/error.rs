//! Error types for the heuristic-pdf2md library.
//!
//! Two error types for two failure modes:
//!
//! * [`Pdf2MdError`] — **Fatal**: the conversion cannot proceed (missing
//!   input, unreadable PDF, pdfium not available, output not writable).
//!   Returned as `Err(Pdf2MdError)` from the `convert*` functions.
//!
//! * [`PageError`] — **Non-fatal**: text extraction failed for one page.
//!   The page contributes no lines and the conversion carries on.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the heuristic-pdf2md library.
#[derive(Debug, Error)]
pub enum Pdf2MdError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF '{path}' is corrupt: {detail}")]
    CorruptPdf { path: PathBuf, detail: String },

    /// PDF is encrypted; this tool never supplies a password.
    #[error("PDF '{path}' is encrypted and requires a password.")]
    PasswordRequired { path: PathBuf },

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
Text extraction needs a pdfium shared library. Either:\n\
  • install libpdfium system-wide, or\n\
  • set PDFIUM_LIB_PATH=/path/to/libpdfium (file or containing directory).\n"
    )]
    PdfiumBindingFailed(String),

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output Markdown file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A non-fatal error for a single page.
///
/// The page is treated as empty text; see [`crate::output::ConversionStats::failed_pages`].
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize, serde::Deserialize)]
pub enum PageError {
    /// pdfium could not load the page or its text layer.
    #[error("Page {page}: text extraction failed: {detail}")]
    ExtractionFailed { page: usize, detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let e = Pdf2MdError::FileNotFound {
            path: PathBuf::from("missing.pdf"),
        };
        assert!(e.to_string().contains("missing.pdf"));
    }

    #[test]
    fn not_a_pdf_display_shows_magic() {
        let e = Pdf2MdError::NotAPdf {
            path: PathBuf::from("notes.txt"),
            magic: *b"Hell",
        };
        let msg = e.to_string();
        assert!(msg.contains("notes.txt"), "got: {msg}");
        assert!(msg.contains("72"), "magic bytes should be listed, got: {msg}");
    }

    #[test]
    fn output_write_failed_keeps_source() {
        use std::error::Error as _;
        let e = Pdf2MdError::OutputWriteFailed {
            path: PathBuf::from("/ro/out.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert!(e.to_string().contains("/ro/out.md"));
        assert!(e.source().is_some());
    }

    #[test]
    fn page_error_display() {
        let e = PageError::ExtractionFailed {
            page: 3,
            detail: "no text layer".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("Page 3"));
        assert!(msg.contains("no text layer"));
    }

    #[test]
    fn page_error_serialises() {
        let e = PageError::ExtractionFailed {
            page: 1,
            detail: "boom".into(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("ExtractionFailed"));
    }
}

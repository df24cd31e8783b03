//! # heuristic-pdf2md
//!
//! Convert a PDF document to readable Markdown using text-layout heuristics.
//!
//! pdfium extracts the raw text of each page; everything after that is
//! line-by-line cleanup: whitespace and punctuation normalisation, footer
//! page-number removal, blank-line collapsing, heading detection and
//! bullet/numbered-list rewriting. There is no font, image, table or column
//! analysis, and no promise that the Markdown round-trips to the PDF.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input     validate the path is a readable PDF
//!  ├─ 2. Extract   raw text per page via pdfium (failed page → empty)
//!  ├─ 3. Clean     normalise lines, drop blanks and "3 / 42" footers
//!  ├─ 4. Assemble  join pages, optional `---` breaks, cap blank runs
//!  ├─ 5. Render    title + preamble, `##` headings, `-` / `1.` lists
//!  └─ 6. Output    cap blank runs at 2, single trailing newline, write
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use heuristic_pdf2md::{convert_to_file, default_output_path, ConversionOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pdf = "whitepaper.pdf";
//!     let out = default_output_path(pdf);
//!     let stats = convert_to_file(pdf, &out, &ConversionOptions::default())?;
//!     eprintln!("{} pages → {}", stats.total_pages, out.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2md` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! ## pdfium
//!
//! Extraction needs a pdfium shared library at runtime. Set
//! `PDFIUM_LIB_PATH` to the library (or its directory), or install it where
//! the system loader finds it.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionOptions, ConversionOptionsBuilder, RENDERED_MAX_BLANK_LINES};
pub use convert::{
    convert, convert_to_file, convert_with, default_output_path, render_document, write_markdown,
};
pub use error::{PageError, Pdf2MdError};
pub use output::{ConversionOutput, ConversionStats};
pub use pipeline::extract::{PdfiumExtractor, TextExtractor};
pub use progress::{ConversionProgressCallback, NoopProgressCallback};

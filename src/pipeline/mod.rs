//! Pipeline stages for PDF-to-Markdown conversion.
//!
//! Each submodule implements one transformation step over a plain
//! `Vec<String>` of lines. Stages filter, insert separators or rewrite
//! single lines; none of them reorders lines.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ extract ──▶ clean ──▶ assemble ──▶ render
//! (path)    (pdfium)    (per page) (collapse)   (markdown + collapse)
//! ```
//!
//! 1. [`input`]    — validate the user-supplied path is a readable PDF
//! 2. [`extract`]  — raw text per page via pdfium; failed pages become errors
//!    the orchestrator downgrades to empty text
//! 3. [`clean`]    — split, normalise and filter the lines of one page
//! 4. [`assemble`] — stitch pages together and bound blank-line runs
//! 5. [`heading`]  — the heading-likeness predicate used by `render`
//! 6. [`render`]   — preamble, list/heading rewriting, final spacing

pub mod assemble;
pub mod clean;
pub mod extract;
pub mod heading;
pub mod input;
pub mod render;

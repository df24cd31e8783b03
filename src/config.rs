//! Configuration for a PDF-to-Markdown conversion.
//!
//! The converter exposes exactly two knobs, both carried by
//! [`ConversionOptions`]. The struct is created once per invocation and
//! never mutated while a conversion runs.

use serde::{Deserialize, Serialize};

/// Blank-line cap applied to the rendered Markdown, independent of
/// [`ConversionOptions::max_consecutive_blank_lines`].
pub const RENDERED_MAX_BLANK_LINES: usize = 2;

/// Options for a PDF-to-Markdown conversion.
///
/// Built via [`ConversionOptions::builder()`] or
/// [`ConversionOptions::default()`].
///
/// # Example
/// ```rust
/// use heuristic_pdf2md::ConversionOptions;
///
/// let options = ConversionOptions::builder()
///     .keep_page_breaks(true)
///     .max_consecutive_blank_lines(1)
///     .build();
/// assert!(options.keep_page_breaks);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Insert a `---` rule between pages. Default: false.
    pub keep_page_breaks: bool,

    /// Longest run of blank lines kept when the pages are stitched together.
    /// Default: 2.
    ///
    /// Only governs the spacing of the extracted text. The rendered document
    /// is always capped at [`RENDERED_MAX_BLANK_LINES`]. `0` drops every
    /// blank line from the extracted text.
    pub max_consecutive_blank_lines: usize,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            keep_page_breaks: false,
            max_consecutive_blank_lines: 2,
        }
    }
}

impl ConversionOptions {
    /// Create a new builder for `ConversionOptions`.
    pub fn builder() -> ConversionOptionsBuilder {
        ConversionOptionsBuilder {
            options: Self::default(),
        }
    }
}

/// Builder for [`ConversionOptions`].
#[derive(Debug)]
pub struct ConversionOptionsBuilder {
    options: ConversionOptions,
}

impl ConversionOptionsBuilder {
    pub fn keep_page_breaks(mut self, v: bool) -> Self {
        self.options.keep_page_breaks = v;
        self
    }

    pub fn max_consecutive_blank_lines(mut self, n: usize) -> Self {
        self.options.max_consecutive_blank_lines = n;
        self
    }

    /// Finish building. No value is rejected.
    pub fn build(self) -> ConversionOptions {
        self.options
    }
}

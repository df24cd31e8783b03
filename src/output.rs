//! Conversion results.

use serde::{Deserialize, Serialize};

/// The converted document plus run statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// Final Markdown, always ending in exactly one `\n`.
    pub markdown: String,
    pub stats: ConversionStats,
}

/// Counters gathered during one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Pages reported by the PDF.
    pub total_pages: usize,
    /// Pages whose text extraction failed and were treated as empty.
    pub failed_pages: usize,
    /// Pages that contributed no lines after filtering (failed pages included).
    pub empty_pages: usize,
    /// Lines (blank lines included) after assembly and the first blank-line pass.
    pub body_lines: usize,
    /// Size of the rendered Markdown in bytes.
    pub markdown_bytes: usize,
    pub total_duration_ms: u64,
}

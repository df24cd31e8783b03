//! Page assembly and blank-line collapsing.

use crate::config::ConversionOptions;

/// Marker line inserted between pages when `keep_page_breaks` is on.
pub const PAGE_BREAK_MARKER: &str = "---";

/// Stitch the filtered lines of every page into one sequence.
///
/// Each page is followed by one blank line. With `keep_page_breaks`, every
/// page after the first is preceded by a blank line, a `---` rule and
/// another blank line.
pub fn assemble_pages(pages: &[Vec<String>], options: &ConversionOptions) -> Vec<String> {
    let mut lines = Vec::with_capacity(pages.iter().map(|p| p.len() + 4).sum());

    for (page_index, page) in pages.iter().enumerate() {
        if options.keep_page_breaks && page_index > 0 {
            lines.push(String::new());
            lines.push(PAGE_BREAK_MARKER.to_string());
            lines.push(String::new());
        }
        lines.extend(page.iter().cloned());
        lines.push(String::new());
    }

    lines
}

/// Keep at most `max_blanks` consecutive blank lines.
///
/// Non-empty lines pass through unchanged and reset the run counter.
pub fn collapse_blank_lines(lines: Vec<String>, max_blanks: usize) -> Vec<String> {
    let mut blanks = 0usize;
    lines
        .into_iter()
        .filter(|line| {
            if line.is_empty() {
                blanks += 1;
                blanks <= max_blanks
            } else {
                blanks = 0;
                true
            }
        })
        .collect()
}

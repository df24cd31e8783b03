//! Per-page line cleanup: split, normalise, filter.
//!
//! Extracted text carries typographic noise that reads badly in Markdown:
//! tabs and non-breaking spaces from justified layouts, smart quotes, two
//! flavours of dash, and `3 / 42` footers on every page. The helpers here
//! are pure `&str → String` functions so each rule can be tested alone.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_LINE_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C\x1D\x1E\x{85}\x{2028}\x{2029}]").unwrap()
});

static RE_TABS_NBSP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\t\x{A0}]+").unwrap());

static RE_MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());

static RE_PAGE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\s*/\s*\d+$").unwrap());

/// Split one page of extracted text into raw lines.
///
/// Recognises every line boundary pdfium may emit, `\r\n` counting as one.
/// A trailing boundary does not produce a final empty line.
pub fn split_page_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut lines: Vec<&str> = RE_LINE_BREAK.split(text).collect();
    if RE_LINE_BREAK
        .find_iter(text)
        .last()
        .is_some_and(|m| m.end() == text.len())
    {
        lines.pop();
    }
    lines
}

/// Normalise whitespace and punctuation in one line and trim it.
///
/// Idempotent: `clean_line(&clean_line(s)) == clean_line(s)`.
pub fn clean_line(line: &str) -> String {
    let line = line.trim_end_matches(['\n', '\r']);
    let line = RE_TABS_NBSP.replace_all(line, " ");
    let line = RE_MULTI_SPACE.replace_all(&line, " ");
    let line = line
        .replace('\u{2013}', "\u{2014}")
        .replace(['\u{2018}', '\u{2019}'], "'")
        .replace(['\u{201C}', '\u{201D}'], "\"");
    line.trim().to_string()
}

/// `true` for footer artefacts such as `3 / 42` or `1/2`.
pub fn is_page_number_artifact(line: &str) -> bool {
    RE_PAGE_NUMBER.is_match(line)
}

/// Drop blank lines and page-number artefacts from one page's cleaned lines.
pub fn filter_page_lines(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .filter(|l| !l.is_empty() && !is_page_number_artifact(l))
        .collect()
}

/// Split, clean and filter the extracted text of one page.
pub fn clean_page(text: &str) -> Vec<String> {
    filter_page_lines(split_page_lines(text).into_iter().map(clean_line).collect())
}

//! Markdown rendering of the cleaned line sequence.
//!
//! The output is a fixed preamble (title, rules, provenance note) followed
//! by the body, one input line at a time. Each body line goes through the
//! first matching rule:
//!
//! 1. blank → blank
//! 2. `•`, `-` or `*` bullet → `- item`
//! 3. `1)` or `1.` numbered item → `1. item`
//! 4. heading-like ([`looks_like_heading`]) → `## line` plus a blank line
//! 5. anything else → verbatim
//!
//! A final pass trims trailing whitespace, caps blank runs at
//! [`RENDERED_MAX_BLANK_LINES`], drops trailing blanks and ends the document
//! with exactly one newline.

use crate::config::RENDERED_MAX_BLANK_LINES;
use crate::pipeline::assemble::collapse_blank_lines;
use crate::pipeline::heading::looks_like_heading;
use once_cell::sync::Lazy;
use regex::Regex;

/// Title used when the document has no text at all.
pub const FALLBACK_TITLE: &str = "SNMUI White Paper 2026";

/// Italicised note placed under the title.
pub const PROVENANCE_NOTE: &str =
    "Converted from PDF for repo documentation. Formatting is optimized for VS Code Markdown preview.";

static RE_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\x{2022}\-\*]\s+").unwrap());

static RE_NUMBERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)[\).]\s+(.*)$").unwrap());

/// Render the cleaned, filtered and collapsed lines as a Markdown document.
pub fn render_markdown(lines: &[String]) -> String {
    let title = document_title(lines);

    let mut md: Vec<String> = vec![
        format!("# {}", title),
        String::new(),
        "---".to_string(),
        String::new(),
        format!("*{}*", PROVENANCE_NOTE),
        String::new(),
        "---".to_string(),
        String::new(),
    ];

    for line in lines {
        if line.is_empty() {
            md.push(String::new());
            continue;
        }

        if let Some(item) = normalise_list_item(line) {
            md.push(item);
            continue;
        }

        if looks_like_heading(line) {
            md.push(format!("## {}", line));
            md.push(String::new());
            continue;
        }

        md.push(line.clone());
    }

    let md: Vec<String> = md.into_iter().map(|l| l.trim_end().to_string()).collect();
    let mut md = collapse_blank_lines(md, RENDERED_MAX_BLANK_LINES);

    while md.last().is_some_and(|l| l.is_empty()) {
        md.pop();
    }

    let mut out = md.join("\n");
    out.push('\n');
    out
}

/// First non-empty line, or [`FALLBACK_TITLE`].
pub fn document_title(lines: &[String]) -> &str {
    lines
        .iter()
        .find(|l| !l.is_empty())
        .map(String::as_str)
        .unwrap_or(FALLBACK_TITLE)
}

/// Rewrite a bullet or numbered line as a Markdown list item.
///
/// Returns `None` for lines that are not list items.
pub fn normalise_list_item(line: &str) -> Option<String> {
    if let Some(m) = RE_BULLET.find(line) {
        return Some(format!("- {}", &line[m.end()..]));
    }

    RE_NUMBERED_ITEM
        .captures(line)
        .map(|caps| format!("{}. {}", &caps[1], &caps[2]))
}

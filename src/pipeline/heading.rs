//! Heading detection.
//!
//! pdfium gives us text without font sizes or weights, so "is this a
//! heading?" is answered from the line alone: length, casing, numbering and
//! trailing punctuation. False positives and negatives are expected.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_ASCII_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]").unwrap());

static RE_NUMBERED_SECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.?\d*\s+.+").unwrap());

static RE_SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.;!?]$").unwrap());

const MIN_LEN: usize = 4;
const MAX_LEN: usize = 80;
const MAX_UPPERCASE_LEN: usize = 60;
const TITLE_CASE_WORDS: std::ops::RangeInclusive<usize> = 2..=10;
const TITLE_CASE_RATIO: f64 = 0.7;

/// `true` when a cleaned, non-empty line reads like a section title.
///
/// Rules, in order:
/// 1. fewer than 4 or more than 80 characters → no
/// 2. no ASCII letter → no
/// 3. ends with `:` → yes
/// 4. numbered section such as `3.2 Overview` → yes
/// 5. all caps and at most 60 characters → yes
/// 6. 2–10 words, ≥ 70 % of the lettered words capitalised, no sentence
///    punctuation at the end → yes
/// 7. otherwise no
pub fn looks_like_heading(line: &str) -> bool {
    let len = line.chars().count();
    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return false;
    }
    if !RE_ASCII_LETTER.is_match(line) {
        return false;
    }
    if line.ends_with(':') {
        return true;
    }
    if RE_NUMBERED_SECTION.is_match(line) {
        return true;
    }
    if is_all_uppercase(line) && len <= MAX_UPPERCASE_LEN {
        return true;
    }
    is_title_case(line)
}

/// At least one cased character and no lowercase ones.
fn is_all_uppercase(line: &str) -> bool {
    let mut has_upper = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        has_upper |= c.is_uppercase();
    }
    has_upper
}

fn is_title_case(line: &str) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    if !TITLE_CASE_WORDS.contains(&words.len()) {
        return false;
    }

    let lettered: Vec<&str> = words
        .into_iter()
        .filter(|w| RE_ASCII_LETTER.is_match(w))
        .collect();
    if lettered.is_empty() {
        return false;
    }

    let capitalised = lettered
        .iter()
        .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
        .count();
    if (capitalised as f64) / (lettered.len() as f64) < TITLE_CASE_RATIO {
        return false;
    }

    !RE_SENTENCE_END.is_match(line)
}

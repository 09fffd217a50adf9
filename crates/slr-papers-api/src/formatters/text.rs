//! Text cleanup helpers shared by both paper views.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid markup tag regex"));

/// Sentences kept in the list-view abstract.
pub const SUMMARY_SENTENCES: usize = 3;

/// Longest author display string, in characters.
pub const MAX_AUTHORS_LEN: usize = 200;

const ELLIPSIS: &str = "...";

/// Strip HTML-like tags and collapse all whitespace runs to single spaces.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let stripped: Cow<'_, str> = TAG_RE.replace_all(text, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split cleaned text into sentences at `.`, `!` or `?` followed by whitespace.
///
/// The terminator stays with its sentence.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let Some(&(next_i, next)) = chars.peek() else {
            break;
        };
        if !next.is_whitespace() {
            continue;
        }

        sentences.push(&text[start..next_i]);

        // Skip the whole whitespace run
        let mut resume = text.len();
        while let Some(&(j, w)) = chars.peek() {
            if w.is_whitespace() {
                chars.next();
            } else {
                resume = j;
                break;
            }
        }
        start = resume;
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}

/// List-view abstract: the first three sentences, with `...` if more existed.
///
/// Returns `None` for an empty abstract.
#[must_use]
pub fn truncate_abstract(text: &str) -> Option<String> {
    let clean = clean_text(text);
    if clean.is_empty() {
        return None;
    }

    let sentences = split_sentences(&clean);
    if sentences.len() <= SUMMARY_SENTENCES {
        return Some(clean);
    }

    Some(format!("{}{ELLIPSIS}", sentences[..SUMMARY_SENTENCES].join(" ")))
}

/// Author display string derived from the raw authorship field.
///
/// Semicolon-delimited input is split, trimmed and rejoined with `", "`.
/// Anything else passes through. The result is capped at
/// [`MAX_AUTHORS_LEN`] characters.
#[must_use]
pub fn parse_authors(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }

    let authors = if raw.contains(';') {
        raw.split(';').map(str::trim).filter(|name| !name.is_empty()).collect::<Vec<_>>().join(", ")
    } else {
        raw.to_string()
    };

    Some(cap_chars(authors, MAX_AUTHORS_LEN))
}

fn cap_chars(text: String, max: usize) -> String {
    if text.chars().count() <= max {
        return text;
    }
    let keep = max - ELLIPSIS.len();
    let mut capped: String = text.chars().take(keep).collect();
    capped.push_str(ELLIPSIS);
    capped
}

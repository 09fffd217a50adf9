#![no_main]

use libfuzzer_sys::fuzz_target;
use slr_papers_api::formatters::{MAX_AUTHORS_LEN, clean_text, parse_authors, truncate_abstract};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let clean = clean_text(text);
    assert!(!clean.contains("  "));

    if let Some(summary) = truncate_abstract(text) {
        assert!(!summary.is_empty());
    }
    if let Some(authors) = parse_authors(text) {
        assert!(authors.chars().count() <= MAX_AUTHORS_LEN);
    }
});

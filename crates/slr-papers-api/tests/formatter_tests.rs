//! Formatter tests for the list and detail paper views.
//!
//! Covers markup cleanup, sentence truncation and author normalization.

use slr_papers_api::formatters::{
    self, FormattedPaper, MAX_AUTHORS_LEN, View, clean_text, parse_authors, split_sentences,
    truncate_abstract,
};
use slr_papers_api::models::PaperRow;

// =============================================================================
// Helper Functions
// =============================================================================

fn make_row(abstract_text: &str, authorships: Option<&str>) -> PaperRow {
    PaperRow {
        authorships: authorships.map(str::to_string),
        doi: Some("10.1000/xyz".to_string()),
        publication_year: Some(2020),
        output: Some("[{'code': 'RCT'}]".to_string()),
        ..PaperRow::new("W42", "A <b>bold</b>\n  title", abstract_text)
    }
}

// =============================================================================
// Markup Cleanup
// =============================================================================

#[test]
fn test_clean_text_strips_tags_and_whitespace() {
    assert_eq!(clean_text("<p>Hello <i>world</i></p>"), "Hello world");
    assert_eq!(clean_text("  spaced \t\n out  "), "spaced out");
    assert_eq!(clean_text("<jats:sec><jats:title>Aim</jats:title></jats:sec>"), "Aim");
}

#[test]
fn test_clean_text_keeps_comparison_operators() {
    // A lone '<' without a closing '>' is not a tag
    assert_eq!(clean_text("p < 0.05 was significant"), "p < 0.05 was significant");
}

#[test]
fn test_clean_text_empty() {
    assert_eq!(clean_text(""), "");
    assert_eq!(clean_text("<br/>"), "");
}

// =============================================================================
// Sentence Truncation
// =============================================================================

#[test]
fn test_five_sentences_keep_three_with_ellipsis() {
    let text = "One. Two! Three? Four. Five.";
    assert_eq!(truncate_abstract(text).as_deref(), Some("One. Two! Three?..."));
}

#[test]
fn test_three_sentences_unchanged() {
    let text = "One. Two. Three.";
    assert_eq!(truncate_abstract(text).as_deref(), Some("One. Two. Three."));
}

#[test]
fn test_decimal_points_do_not_split() {
    let text = "Dose was 2.5 mg. Response rate 40.1%. No deaths. Done.";
    assert_eq!(
        split_sentences(text),
        vec!["Dose was 2.5 mg.", "Response rate 40.1%.", "No deaths.", "Done."]
    );
    assert_eq!(
        truncate_abstract(text).as_deref(),
        Some("Dose was 2.5 mg. Response rate 40.1%. No deaths....")
    );
}

#[test]
fn test_truncation_runs_after_cleanup() {
    let text = "<p>One.</p>\n\n<p>Two.</p> Three.   Four.";
    assert_eq!(truncate_abstract(text).as_deref(), Some("One. Two. Three...."));
}

#[test]
fn test_unterminated_abstract() {
    let text = "No terminal punctuation here";
    assert_eq!(truncate_abstract(text).as_deref(), Some(text));
}

#[test]
fn test_empty_abstract_is_none() {
    assert_eq!(truncate_abstract(""), None);
    assert_eq!(truncate_abstract("  <p></p> "), None);
}

// =============================================================================
// Author Normalization
// =============================================================================

#[test]
fn test_semicolon_authors_rejoined() {
    assert_eq!(parse_authors("Smith J; Doe A; ").as_deref(), Some("Smith J, Doe A"));
    assert_eq!(parse_authors(";;Lee K;;").as_deref(), Some("Lee K"));
}

#[test]
fn test_plain_authors_pass_through() {
    assert_eq!(parse_authors("Smith J, Doe A").as_deref(), Some("Smith J, Doe A"));
}

#[test]
fn test_long_authors_capped() {
    let raw = "x".repeat(250);
    let authors = parse_authors(&raw).unwrap();

    assert_eq!(authors.chars().count(), MAX_AUTHORS_LEN);
    assert!(authors.ends_with("..."));
    assert_eq!(&authors[..197], &raw[..197]);
}

#[test]
fn test_exactly_max_authors_not_capped() {
    let raw = "y".repeat(MAX_AUTHORS_LEN);
    assert_eq!(parse_authors(&raw), Some(raw));
}

#[test]
fn test_multibyte_authors_capped_on_char_boundary() {
    let raw = "Müller Ö; ".repeat(40);
    let authors = parse_authors(&raw).unwrap();
    assert_eq!(authors.chars().count(), MAX_AUTHORS_LEN);
    assert!(authors.ends_with("..."));
}

#[test]
fn test_empty_authors_is_none() {
    assert_eq!(parse_authors(""), None);
}

// =============================================================================
// Views
// =============================================================================

#[test]
fn test_summary_view() {
    let row = make_row("A. B. C. D.", Some("Smith J; Doe A"));
    let summary = formatters::format_summary(&row);

    assert_eq!(summary.work_id, "W42");
    assert_eq!(summary.title, "A bold title");
    assert_eq!(summary.r#abstract.as_deref(), Some("A. B. C...."));
    assert_eq!(summary.authors.as_deref(), Some("Smith J, Doe A"));
    assert_eq!(summary.doi.as_deref(), Some("10.1000/xyz"));
    assert_eq!(summary.publication_year, Some(2020));
}

#[test]
fn test_detail_view_keeps_full_abstract_and_raw_fields() {
    let row = make_row("A. B. C. <i>D.</i>", Some("Smith J; Doe A"));
    let detail = formatters::format_detail(&row);

    assert_eq!(detail.r#abstract.as_deref(), Some("A. B. C. D."));
    assert_eq!(detail.authors.as_deref(), Some("Smith J, Doe A"));
    assert_eq!(detail.authorships.as_deref(), Some("Smith J; Doe A"));
    assert_eq!(detail.output.as_deref(), Some("[{'code': 'RCT'}]"));
}

#[test]
fn test_missing_optional_fields_are_null() {
    let row = PaperRow::new("W1", "T", "Body.");
    let json = serde_json::to_value(formatters::format_summary(&row)).unwrap();

    assert!(json["doi"].is_null());
    assert!(json["authors"].is_null());
    assert!(json["publication_year"].is_null());
}

#[test]
fn test_format_paper_dispatches_on_view() {
    let row = make_row("Only one sentence.", None);

    assert!(matches!(formatters::format_paper(&row, View::Summary), FormattedPaper::Summary(_)));
    assert!(matches!(formatters::format_paper(&row, View::Detail), FormattedPaper::Detail(_)));

    let json = serde_json::to_value(formatters::format_paper(&row, View::Detail)).unwrap();
    assert_eq!(json["output"], "[{'code': 'RCT'}]");
    assert!(json.get("Detail").is_none());
}

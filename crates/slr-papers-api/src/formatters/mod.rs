//! Paper formatting for list and detail views.
//!
//! Pure functions from a [`PaperRow`] to its display record. Both views clean
//! markup out of the title and abstract; only the summary view truncates.

mod text;

pub use text::{
    MAX_AUTHORS_LEN, SUMMARY_SENTENCES, clean_text, parse_authors, split_sentences,
    truncate_abstract,
};

use serde::Serialize;

use crate::models::{PaperDetail, PaperRow, PaperSummary};

/// Which view a paper is rendered for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    /// List entry with a shortened abstract.
    #[default]
    Summary,
    /// Full record including raw authorships and classification.
    Detail,
}

/// A formatted paper in either view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormattedPaper {
    /// List view.
    Summary(PaperSummary),
    /// Detail view.
    Detail(PaperDetail),
}

/// Format `row` for the requested view.
#[must_use]
pub fn format_paper(row: &PaperRow, view: View) -> FormattedPaper {
    match view {
        View::Summary => FormattedPaper::Summary(format_summary(row)),
        View::Detail => FormattedPaper::Detail(format_detail(row)),
    }
}

/// List-view record.
#[must_use]
pub fn format_summary(row: &PaperRow) -> PaperSummary {
    PaperSummary {
        work_id: row.work_id.clone(),
        title: clean_text(&row.title),
        r#abstract: truncate_abstract(&row.r#abstract),
        doi: non_empty(row.doi.as_deref()),
        authors: row.authorships.as_deref().and_then(parse_authors),
        publication_year: row.publication_year,
    }
}

/// Detail-view record.
#[must_use]
pub fn format_detail(row: &PaperRow) -> PaperDetail {
    PaperDetail {
        work_id: row.work_id.clone(),
        title: clean_text(&row.title),
        r#abstract: Some(clean_text(&row.r#abstract)),
        doi: non_empty(row.doi.as_deref()),
        authors: row.authorships.as_deref().and_then(parse_authors),
        publication_year: row.publication_year,
        authorships: non_empty(row.authorships.as_deref()),
        output: non_empty(row.output.as_deref()),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

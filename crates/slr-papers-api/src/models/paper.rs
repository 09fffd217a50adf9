//! Paper data models: the raw store row and its two display views.

use serde::{Deserialize, Serialize};

/// A paper row as read from the backing store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRow {
    /// Stable identifier, the only lookup key.
    pub work_id: String,

    /// Paper title, possibly containing markup.
    pub title: String,

    /// Full abstract, possibly containing markup.
    pub r#abstract: String,

    /// Digital Object Identifier.
    #[serde(default)]
    pub doi: Option<String>,

    /// Raw authorship string (often semicolon-delimited).
    #[serde(default)]
    pub authorships: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub publication_year: Option<i32>,

    /// Raw classification blob with embedded `code` / `group` entries.
    #[serde(default)]
    pub output: Option<String>,
}

impl PaperRow {
    /// Create a row with the required fields only.
    #[must_use]
    pub fn new(
        work_id: impl Into<String>,
        title: impl Into<String>,
        r#abstract: impl Into<String>,
    ) -> Self {
        Self {
            work_id: work_id.into(),
            title: title.into(),
            r#abstract: r#abstract.into(),
            ..Default::default()
        }
    }

    /// Classification blob, treating an empty or blank string as absent.
    #[must_use]
    pub fn classification_blob(&self) -> Option<&str> {
        self.output.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Paper as shown in list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperSummary {
    /// Stable identifier.
    pub work_id: String,

    /// Cleaned title.
    pub title: String,

    /// Abstract truncated to its first sentences.
    pub r#abstract: Option<String>,

    /// Digital Object Identifier.
    pub doi: Option<String>,

    /// Comma-separated author display string.
    pub authors: Option<String>,

    /// Publication year.
    pub publication_year: Option<i32>,
}

/// Paper as shown on its detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperDetail {
    /// Stable identifier.
    pub work_id: String,

    /// Cleaned title.
    pub title: String,

    /// Full cleaned abstract.
    pub r#abstract: Option<String>,

    /// Digital Object Identifier.
    pub doi: Option<String>,

    /// Comma-separated author display string.
    pub authors: Option<String>,

    /// Publication year.
    pub publication_year: Option<i32>,

    /// Raw authorship string, verbatim.
    pub authorships: Option<String>,

    /// Raw classification blob, verbatim.
    pub output: Option<String>,
}

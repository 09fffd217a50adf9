//! Tolerant scanner for the semi-structured classification blob.
//!
//! The blob looks like serialized key/value data (Python reprs or JSON), e.g.
//! `[{'code': 'RCT', 'label': ...}, {"group": "Medical Affairs"}]`. Only the
//! `code` and `group` entries matter. Either quote style is accepted on both
//! key and value, with any whitespace around the colon.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{BlobKey, Facet};

static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"['"](code|group)['"]\s*:\s*['"]([^'"]*)['"]"#)
        .expect("valid classification entry regex")
});

/// The `code` and `group` entries of one classification blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    codes: Vec<String>,
    groups: Vec<String>,
}

impl Classification {
    /// Scan a raw blob. Never fails; unrecognised content is skipped.
    #[must_use]
    pub fn parse(blob: &str) -> Self {
        let mut classification = Self::default();

        for caps in ENTRY_RE.captures_iter(blob) {
            let value = caps[2].trim();
            if value.is_empty() {
                continue;
            }
            let bucket = if &caps[1] == BlobKey::Code.as_str() {
                &mut classification.codes
            } else {
                &mut classification.groups
            };
            if !bucket.iter().any(|v| v == value) {
                bucket.push(value.to_string());
            }
        }

        classification
    }

    /// Values recorded under `key`, in first-seen order.
    #[must_use]
    pub fn values(&self, key: BlobKey) -> &[String] {
        match key {
            BlobKey::Code => &self.codes,
            BlobKey::Group => &self.groups,
        }
    }

    /// Whether the blob carries `value` under `key`.
    #[must_use]
    pub fn has(&self, key: BlobKey, value: &str) -> bool {
        self.values(key).iter().any(|v| v == value)
    }

    /// Whether the blob carries this facet's code.
    #[must_use]
    pub fn contains<F: Facet>(&self, facet: F) -> bool {
        self.has(F::CATEGORY.blob_key(), facet.code())
    }

    /// Known facets of one vocabulary, in vocabulary order.
    #[must_use]
    pub fn facets<F: Facet>(&self) -> Vec<F> {
        F::ALL.iter().copied().filter(|f| self.contains(*f)).collect()
    }

    /// True when no `code` or `group` entry was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty() && self.groups.is_empty()
    }
}

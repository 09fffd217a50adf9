//! Facet extraction and filtering.
//!
//! Each row's classification blob is scanned once into a [`Classification`]
//! (the `code` and `group` entries it carries). Facet enumeration and filter
//! membership are both answered from that record against the single
//! vocabulary in [`crate::models`], so the two can never disagree.

mod classification;

pub use classification::Classification;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{
    Facet, FacetCategory, FilterSelection, PaperRow, Phase, PharmaGroup, StudyType,
};

/// Facets found in one classification blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSet {
    /// Study types, in vocabulary order.
    pub study_types: Vec<StudyType>,
    /// Phases, in vocabulary order.
    pub phases: Vec<Phase>,
    /// Pharma groups, in vocabulary order.
    pub pharma_groups: Vec<PharmaGroup>,
}

impl FacetSet {
    /// Derive the facet set of a parsed blob.
    #[must_use]
    pub fn from_classification(classification: &Classification) -> Self {
        Self {
            study_types: classification.facets(),
            phases: classification.facets(),
            pharma_groups: classification.facets(),
        }
    }

    /// True when the blob carried no known facet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.study_types.is_empty() && self.phases.is_empty() && self.pharma_groups.is_empty()
    }
}

/// Extract the facets of one raw classification blob.
#[must_use]
pub fn extract(blob: &str) -> FacetSet {
    FacetSet::from_classification(&Classification::parse(blob))
}

/// Facet labels present across a result set. No counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Sorted, deduplicated study type labels.
    pub study_types: Vec<String>,
    /// Sorted, deduplicated phase labels.
    pub phases: Vec<String>,
    /// Sorted, deduplicated pharma group labels.
    pub pharma_groups: Vec<String>,
}

/// A selection with labels resolved to vocabulary values.
///
/// `None` means the category is unconstrained. `Some(vec![])` means labels
/// were given but none resolved, so nothing can match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ResolvedSelection {
    study_types: Option<Vec<StudyType>>,
    phases: Option<Vec<Phase>>,
    pharma_groups: Option<Vec<PharmaGroup>>,
}

impl ResolvedSelection {
    fn resolve(selection: &FilterSelection) -> Self {
        Self {
            study_types: resolve_labels(selection),
            phases: resolve_labels(selection),
            pharma_groups: resolve_labels(selection),
        }
    }

    fn matches(&self, classification: &Classification) -> bool {
        any_of(self.study_types.as_deref(), classification)
            && any_of(self.phases.as_deref(), classification)
            && any_of(self.pharma_groups.as_deref(), classification)
    }
}

fn resolve_labels<F: Facet>(selection: &FilterSelection) -> Option<Vec<F>> {
    let labels = selection.labels(F::CATEGORY);
    if labels.is_empty() {
        return None;
    }

    let resolved = labels
        .iter()
        .filter_map(|label| {
            let facet = F::from_label(label);
            if facet.is_none() {
                tracing::debug!(category = F::CATEGORY.name(), label = %label, "Unknown facet label");
            }
            facet
        })
        .collect();

    Some(resolved)
}

fn any_of<F: Facet>(wanted: Option<&[F]>, classification: &Classification) -> bool {
    wanted.is_none_or(|facets| facets.iter().any(|f| classification.contains(*f)))
}

/// Stateless facet service: enumerates facet values and filters rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacetFilter;

impl FacetFilter {
    /// Create the facet service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Union of facet labels found across `rows`.
    #[must_use]
    pub fn filter_options(&self, rows: &[PaperRow]) -> FilterOptions {
        let mut study_types = BTreeSet::new();
        let mut phases = BTreeSet::new();
        let mut pharma_groups = BTreeSet::new();

        for blob in rows.iter().filter_map(PaperRow::classification_blob) {
            let facets = extract(blob);
            study_types.extend(facets.study_types.iter().map(|f| f.label()));
            phases.extend(facets.phases.iter().map(|f| f.label()));
            pharma_groups.extend(facets.pharma_groups.iter().map(|f| f.label()));
        }

        FilterOptions {
            study_types: study_types.into_iter().map(str::to_string).collect(),
            phases: phases.into_iter().map(str::to_string).collect(),
            pharma_groups: pharma_groups.into_iter().map(str::to_string).collect(),
        }
    }

    /// Rows matching `selection`, in their original order.
    ///
    /// Within a category any selected label may match; every constrained
    /// category must match. With no constraint all rows are returned, including
    /// rows without a classification blob; otherwise such rows never match.
    #[must_use]
    pub fn apply(&self, rows: &[PaperRow], selection: &FilterSelection) -> Vec<PaperRow> {
        if selection.is_empty() {
            return rows.to_vec();
        }

        let resolved = ResolvedSelection::resolve(selection);
        let result: Vec<PaperRow> = rows
            .iter()
            .filter(|row| {
                row.classification_blob()
                    .is_some_and(|blob| resolved.matches(&Classification::parse(blob)))
            })
            .cloned()
            .collect();

        tracing::info!("Filtered {} papers from {} total", result.len(), rows.len());
        result
    }

    /// Whether a single row satisfies `selection`.
    #[must_use]
    pub fn matches(&self, row: &PaperRow, selection: &FilterSelection) -> bool {
        if selection.is_empty() {
            return true;
        }
        let resolved = ResolvedSelection::resolve(selection);
        row.classification_blob()
            .is_some_and(|blob| resolved.matches(&Classification::parse(blob)))
    }
}

/// Categories of `selection` that carry a constraint.
#[must_use]
pub fn active_categories(selection: &FilterSelection) -> Vec<FacetCategory> {
    FacetCategory::ALL
        .into_iter()
        .filter(|c| !selection.labels(*c).is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, output: Option<&str>) -> PaperRow {
        PaperRow {
            output: output.map(str::to_string),
            ..PaperRow::new(id, format!("Title {id}"), "Abstract.")
        }
    }

    fn selection(study_types: &[&str], phases: &[&str], pharma_groups: &[&str]) -> FilterSelection {
        let owned = |v: &[&str]| v.iter().map(|s| (*s).to_string()).collect();
        FilterSelection {
            study_types: owned(study_types),
            phases: owned(phases),
            pharma_groups: owned(pharma_groups),
        }
    }

    fn ids(rows: &[PaperRow]) -> Vec<&str> {
        rows.iter().map(|r| r.work_id.as_str()).collect()
    }

    #[test]
    fn test_extract_mixed_quotes() {
        let facets = extract(
            r#"[{'code': 'RCT'}, {"code" : "P3"}, {'group':"Regulatory Affairs"}]"#,
        );
        assert_eq!(facets.study_types, vec![StudyType::RandomizedControlledTrial]);
        assert_eq!(facets.phases, vec![Phase::Three]);
        assert_eq!(facets.pharma_groups, vec![PharmaGroup::RegulatoryAffairs]);
    }

    #[test]
    fn test_extract_unknown_codes_ignored() {
        let facets = extract("{'code': 'XYZ', 'group': 'Marketing'}");
        assert!(facets.is_empty());
    }

    #[test]
    fn test_filter_options_sorted_and_deduplicated() {
        let rows = vec![
            row("W1", Some("{'code': 'SR'}, {'code': 'RCT'}")),
            row("W2", Some(r#"{"code": "RCT"}, {"code": "P2"}"#)),
            row("W3", Some("{'group': 'Pharmacovigilance'}, {'group': 'Medical Affairs'}")),
            row("W4", None),
        ];

        let options = FacetFilter::new().filter_options(&rows);
        assert_eq!(
            options.study_types,
            vec!["Randomized Controlled Trial (RCT)", "Systematic Review (SR)"]
        );
        assert_eq!(options.phases, vec!["Phase II (P2)"]);
        assert_eq!(options.pharma_groups, vec!["Medical Affairs", "Pharmacovigilance"]);
    }

    #[test]
    fn test_filter_options_empty_rows() {
        let options = FacetFilter::new().filter_options(&[]);
        assert_eq!(options, FilterOptions::default());
    }

    #[test]
    fn test_apply_or_within_category() {
        let rows = vec![
            row("W1", Some("{'code': 'RCT'}")),
            row("W2", Some("{'code': 'COH'}")),
            row("W3", Some("{'code': 'MA'}")),
        ];
        let sel = selection(&["Randomized Controlled Trial (RCT)", "Cohort Study (COH)"], &[], &[]);

        let result = FacetFilter::new().apply(&rows, &sel);
        assert_eq!(ids(&result), vec!["W1", "W2"]);
    }

    #[test]
    fn test_apply_and_across_categories() {
        let rows = vec![
            row("W1", Some("{'code': 'RCT'}, {'code': 'P3'}")),
            row("W2", Some("{'code': 'RCT'}, {'code': 'P2'}")),
            row("W3", Some("{'code': 'P3'}")),
        ];
        let sel = selection(&["Randomized Controlled Trial (RCT)"], &["Phase III (P3)"], &[]);

        let result = FacetFilter::new().apply(&rows, &sel);
        assert_eq!(ids(&result), vec!["W1"]);
    }

    #[test]
    fn test_phase_label_does_not_match_prefix_phase() {
        // "Phase II" contains "Phase I"; selecting phase II must not pull in P1 rows.
        let rows = vec![row("W1", Some("{'code': 'P1'}")), row("W2", Some("{'code': 'P2'}"))];
        let sel = selection(&[], &["Phase II (P2)"], &[]);

        let result = FacetFilter::new().apply(&rows, &sel);
        assert_eq!(ids(&result), vec!["W2"]);
    }

    #[test]
    fn test_apply_empty_selection_keeps_everything() {
        let rows = vec![row("W1", Some("{'code': 'RCT'}")), row("W2", None), row("W3", Some(""))];

        let result = FacetFilter::new().apply(&rows, &FilterSelection::default());
        assert_eq!(result, rows);
    }

    #[test]
    fn test_apply_excludes_rows_without_blob() {
        let rows = vec![row("W1", Some("{'group': 'Medical Affairs'}")), row("W2", None), row("W3", Some("  "))];
        let sel = selection(&[], &[], &["Medical Affairs"]);

        let result = FacetFilter::new().apply(&rows, &sel);
        assert_eq!(ids(&result), vec!["W1"]);
    }

    #[test]
    fn test_apply_unknown_label_matches_nothing() {
        let rows = vec![row("W1", Some("{'code': 'RCT'}"))];
        let sel = selection(&["Randomised Trial"], &[], &[]);

        assert!(FacetFilter::new().apply(&rows, &sel).is_empty());
    }

    #[test]
    fn test_pharma_group_with_special_characters() {
        let rows = vec![
            row("W1", Some("{'group': 'Clinical Development / R&D'}")),
            row("W2", Some(r#"{"group": "HEOR (Health Economics)"}"#)),
        ];
        let filter = FacetFilter::new();

        let rd = filter.apply(&rows, &selection(&[], &[], &["Clinical Development / R&D"]));
        assert_eq!(ids(&rd), vec!["W1"]);

        let heor = filter.apply(&rows, &selection(&[], &[], &["HEOR (Health Economics)"]));
        assert_eq!(ids(&heor), vec!["W2"]);
    }

    #[test]
    fn test_matches_single_row() {
        let filter = FacetFilter::new();
        let r = row("W1", Some("{'code': 'CR'}"));

        assert!(filter.matches(&r, &FilterSelection::default()));
        assert!(filter.matches(&r, &selection(&["Case Report (CR)"], &[], &[])));
        assert!(!filter.matches(&r, &selection(&["Case Series (CS)"], &[], &[])));
    }

    #[test]
    fn test_active_categories() {
        let sel = selection(&[], &["Phase I (P1)"], &["Medical Affairs"]);
        assert_eq!(
            active_categories(&sel),
            vec![FacetCategory::Phases, FacetCategory::PharmaGroups]
        );
    }
}

//! Facet vocabulary: study types, trial phases and pharma groups.
//!
//! Every facet value is an enumerated code with a human-readable label. The
//! classification blob stores the code; API clients see and send the label.

use serde::{Deserialize, Serialize};

/// The three facet categories a paper can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetCategory {
    /// Study design (RCT, cohort, ...).
    StudyTypes,
    /// Clinical trial phase.
    Phases,
    /// Sponsor-side pharma function.
    PharmaGroups,
}

impl FacetCategory {
    /// All categories in response order.
    pub const ALL: [Self; 3] = [Self::StudyTypes, Self::Phases, Self::PharmaGroups];

    /// Name used in request bodies, query strings and responses.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::StudyTypes => "study_types",
            Self::Phases => "phases",
            Self::PharmaGroups => "pharma_groups",
        }
    }

    /// Blob key carrying values of this category.
    #[must_use]
    pub const fn blob_key(self) -> BlobKey {
        match self {
            Self::StudyTypes | Self::Phases => BlobKey::Code,
            Self::PharmaGroups => BlobKey::Group,
        }
    }
}

/// Keys recognised inside a classification blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlobKey {
    /// `code` entries (study types and phases).
    Code,
    /// `group` entries (pharma groups).
    Group,
}

impl BlobKey {
    /// Literal key text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Group => "group",
        }
    }
}

/// A closed set of facet values sharing one category.
pub trait Facet: Copy + Eq + Sized + 'static {
    /// Category this vocabulary belongs to.
    const CATEGORY: FacetCategory;

    /// Every value, in table order.
    const ALL: &'static [Self];

    /// Code stored in the classification blob.
    fn code(self) -> &'static str;

    /// Display label exposed through the API.
    fn label(self) -> &'static str;

    /// Look up a value by its blob code.
    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.code() == code)
    }

    /// Resolve a client-supplied label back to its value.
    ///
    /// The exact display label is accepted, as is the bare code.
    fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.label() == label)
            .or_else(|| Self::from_code(label))
    }
}

/// Study design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StudyType {
    /// Randomized controlled trial.
    RandomizedControlledTrial,
    /// Single case report.
    CaseReport,
    /// Case series.
    CaseSeries,
    /// Cross-sectional study.
    CrossSectional,
    /// Case-control study.
    CaseControl,
    /// Cohort study.
    Cohort,
    /// Systematic review.
    SystematicReview,
    /// Meta-analysis.
    MetaAnalysis,
}

impl Facet for StudyType {
    const CATEGORY: FacetCategory = FacetCategory::StudyTypes;

    const ALL: &'static [Self] = &[
        Self::RandomizedControlledTrial,
        Self::CaseReport,
        Self::CaseSeries,
        Self::CrossSectional,
        Self::CaseControl,
        Self::Cohort,
        Self::SystematicReview,
        Self::MetaAnalysis,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::RandomizedControlledTrial => "RCT",
            Self::CaseReport => "CR",
            Self::CaseSeries => "CS",
            Self::CrossSectional => "XS",
            Self::CaseControl => "CCS",
            Self::Cohort => "COH",
            Self::SystematicReview => "SR",
            Self::MetaAnalysis => "MA",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::RandomizedControlledTrial => "Randomized Controlled Trial (RCT)",
            Self::CaseReport => "Case Report (CR)",
            Self::CaseSeries => "Case Series (CS)",
            Self::CrossSectional => "Cross-Sectional Study (XS)",
            Self::CaseControl => "Case-Control Study (CCS)",
            Self::Cohort => "Cohort Study (COH)",
            Self::SystematicReview => "Systematic Review (SR)",
            Self::MetaAnalysis => "Meta-Analysis (MA)",
        }
    }
}

/// Clinical trial phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    /// Phase I.
    One,
    /// Phase II.
    Two,
    /// Phase III.
    Three,
    /// Phase IV.
    Four,
}

impl Facet for Phase {
    const CATEGORY: FacetCategory = FacetCategory::Phases;

    const ALL: &'static [Self] = &[Self::One, Self::Two, Self::Three, Self::Four];

    fn code(self) -> &'static str {
        match self {
            Self::One => "P1",
            Self::Two => "P2",
            Self::Three => "P3",
            Self::Four => "P4",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::One => "Phase I (P1)",
            Self::Two => "Phase II (P2)",
            Self::Three => "Phase III (P3)",
            Self::Four => "Phase IV (P4)",
        }
    }
}

/// Pharma function the paper is relevant to. Code and label coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PharmaGroup {
    /// Medical Affairs.
    MedicalAffairs,
    /// Commercial / Market Access.
    CommercialMarketAccess,
    /// Pharmacovigilance.
    Pharmacovigilance,
    /// Clinical Development / R&D.
    ClinicalDevelopment,
    /// Regulatory Affairs.
    RegulatoryAffairs,
    /// Health economics and outcomes research.
    Heor,
}

impl Facet for PharmaGroup {
    const CATEGORY: FacetCategory = FacetCategory::PharmaGroups;

    const ALL: &'static [Self] = &[
        Self::MedicalAffairs,
        Self::CommercialMarketAccess,
        Self::Pharmacovigilance,
        Self::ClinicalDevelopment,
        Self::RegulatoryAffairs,
        Self::Heor,
    ];

    fn code(self) -> &'static str {
        self.label()
    }

    fn label(self) -> &'static str {
        match self {
            Self::MedicalAffairs => "Medical Affairs",
            Self::CommercialMarketAccess => "Commercial/Market Access",
            Self::Pharmacovigilance => "Pharmacovigilance",
            Self::ClinicalDevelopment => "Clinical Development / R&D",
            Self::RegulatoryAffairs => "Regulatory Affairs",
            Self::Heor => "HEOR (Health Economics)",
        }
    }
}

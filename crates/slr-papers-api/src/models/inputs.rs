//! Request models for the papers endpoints.

use serde::{Deserialize, Serialize};

use super::FacetCategory;
use crate::config::defaults;
use crate::error::{ApiError, ApiResult};

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    defaults::PAGE_LIMIT
}

/// Page selection shared by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u32,

    /// Page size.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: default_page(), limit: default_limit() }
    }
}

impl PageRequest {
    /// Create a page request.
    #[must_use]
    pub const fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Check `page >= 1` and `1 <= limit <= 100`.
    pub fn validate(self) -> ApiResult<Self> {
        if self.page < 1 {
            return Err(ApiError::validation("page", "must be greater than or equal to 1"));
        }
        if self.limit < 1 || self.limit > defaults::MAX_PAGE_LIMIT {
            return Err(ApiError::validation(
                "limit",
                format!("must be between 1 and {}", defaults::MAX_PAGE_LIMIT),
            ));
        }
        Ok(self)
    }
}

/// Facet selection: display labels per category.
///
/// Empty categories impose no constraint. Serializes to the `filters_applied`
/// object, omitting empty categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Study type labels (OR within the category).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub study_types: Vec<String>,

    /// Phase labels (OR within the category).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phases: Vec<String>,

    /// Pharma group labels (OR within the category).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pharma_groups: Vec<String>,
}

impl FilterSelection {
    /// True when no category carries a constraint.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        FacetCategory::ALL.iter().all(|c| self.labels(*c).is_empty())
    }

    /// Selected labels for one category.
    #[must_use]
    pub fn labels(&self, category: FacetCategory) -> &[String] {
        match category {
            FacetCategory::StudyTypes => &self.study_types,
            FacetCategory::Phases => &self.phases,
            FacetCategory::PharmaGroups => &self.pharma_groups,
        }
    }
}

/// Body of `POST /api/papers/filter`.
///
/// Category lists may be omitted or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRequest {
    /// Study type labels.
    #[serde(default)]
    pub study_types: Option<Vec<String>>,

    /// Phase labels.
    #[serde(default)]
    pub phases: Option<Vec<String>>,

    /// Pharma group labels.
    #[serde(default)]
    pub pharma_groups: Option<Vec<String>>,

    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u32,

    /// Page size.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl FilterRequest {
    /// Facet part of the request.
    #[must_use]
    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            study_types: self.study_types.clone().unwrap_or_default(),
            phases: self.phases.clone().unwrap_or_default(),
            pharma_groups: self.pharma_groups.clone().unwrap_or_default(),
        }
    }

    /// Pagination part of the request.
    #[must_use]
    pub const fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }
}

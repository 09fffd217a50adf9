//! Data models for papers, facets and API requests.
//!
//! Response models use snake_case field names, matching the store columns.

mod enums;
mod inputs;
mod page;
mod paper;

pub use enums::{BlobKey, Facet, FacetCategory, Phase, PharmaGroup, StudyType};
pub use inputs::{FilterRequest, FilterSelection, PageRequest};
pub use page::{PaginatedResponse, Pagination, paginate};
pub use paper::{PaperDetail, PaperRow, PaperSummary};

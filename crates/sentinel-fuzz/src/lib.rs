//! Fuzzing library for slr-papers-api.
//!
//! Targets cover the classification blob scanner, the text formatters and
//! request body deserialization.
//!
//! # Usage
//!
//! ```bash
//! cd crates/sentinel-fuzz
//! cargo +nightly fuzz run fuzz_classification -- -max_total_time=60
//! ```

pub use slr_papers_api::{facets, formatters, models};

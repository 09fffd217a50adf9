#![no_main]

use libfuzzer_sys::fuzz_target;
use slr_papers_api::facets::{self, Classification};
use slr_papers_api::models::{BlobKey, Facet, StudyType};

fuzz_target!(|data: &[u8]| {
    let Ok(blob) = std::str::from_utf8(data) else {
        return;
    };

    // Scanning is total and every extracted facet must be backed by an entry
    let classification = Classification::parse(blob);
    let set = facets::extract(blob);
    for study in &set.study_types {
        assert!(classification.has(BlobKey::Code, study.code()));
    }
    assert_eq!(set.study_types, classification.facets::<StudyType>());
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use slr_papers_api::facets::FacetFilter;
use slr_papers_api::models::{FilterRequest, PaperRow};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bodies must either fail to parse or filter without panicking
    let Ok(request) = serde_json::from_slice::<FilterRequest>(data) else {
        return;
    };
    let _ = request.page_request().validate();

    let rows = vec![PaperRow {
        output: Some("[{'code': 'RCT'}, {'group': 'Medical Affairs'}]".to_string()),
        ..PaperRow::new("W1", "Title", "Abstract.")
    }];
    let _ = FacetFilter::new().apply(&rows, &request.selection());
});

//! Property-based tests for pagination and text formatting.

use proptest::prelude::*;
use slr_papers_api::formatters::{
    MAX_AUTHORS_LEN, SUMMARY_SENTENCES, clean_text, parse_authors, split_sentences,
    truncate_abstract,
};
use slr_papers_api::models::{PageRequest, Pagination, paginate};

/// Valid page requests.
fn arb_page_request() -> impl Strategy<Value = PageRequest> {
    (1u32..20, 1u32..=100).prop_map(|(page, limit)| PageRequest::new(page, limit))
}

proptest! {
    /// total_pages is ceil(total / limit) and the flags follow from it.
    #[test]
    fn pagination_block_consistent(request in arb_page_request(), total in 0usize..1000) {
        let p = Pagination::new(request, total);
        let limit = request.limit as usize;

        prop_assert_eq!(p.total_pages, total.div_ceil(limit));
        prop_assert_eq!(p.has_next, (request.page as usize) < p.total_pages);
        prop_assert_eq!(p.has_previous, request.page > 1);
        prop_assert_eq!(p.total, total);
    }

    /// A page never exceeds its limit and past-the-end pages are empty.
    #[test]
    fn page_slice_bounded(request in arb_page_request(), total in 0usize..500) {
        let items: Vec<usize> = (0..total).collect();
        let (slice, p) = paginate(&items, request);

        prop_assert!(slice.len() <= request.limit as usize);
        if request.page as usize > p.total_pages {
            prop_assert!(slice.is_empty());
        }
    }

    /// Walking every page yields the input exactly once, in order.
    #[test]
    fn pages_partition_items(limit in 1u32..=100, total in 0usize..500) {
        let items: Vec<usize> = (0..total).collect();
        let total_pages = Pagination::new(PageRequest::new(1, limit), total).total_pages;

        let mut seen = Vec::with_capacity(total);
        for page in 1..=total_pages {
            let page = u32::try_from(page).unwrap();
            let (slice, _) = paginate(&items, PageRequest::new(page, limit));
            seen.extend_from_slice(slice);
        }
        prop_assert_eq!(seen, items);
    }

    /// Only page 1..=100 limits pass validation.
    #[test]
    fn limit_validation(page in 0u32..5, limit in 0u32..200) {
        let valid = page >= 1 && (1..=100).contains(&limit);
        prop_assert_eq!(PageRequest::new(page, limit).validate().is_ok(), valid);
    }

    /// Cleaned text has no tags and no whitespace runs.
    #[test]
    fn clean_text_normalizes(text in "[a-z <>/.\t\n]{0,120}") {
        let clean = clean_text(&text);
        prop_assert!(!clean.contains("  "));
        prop_assert!(!clean.contains('\n'));
        prop_assert!(!clean.contains('\t'));
        prop_assert_eq!(clean.trim(), clean.as_str());
    }

    /// Truncated abstracts keep at most the summary sentence count.
    #[test]
    fn truncation_bounded(sentences in proptest::collection::vec("[A-Za-z]{1,10}[.!?]", 1..10)) {
        let text = sentences.join(" ");
        let truncated = truncate_abstract(&text).unwrap();

        if sentences.len() <= SUMMARY_SENTENCES {
            prop_assert_eq!(&truncated, &text);
        } else {
            let expected = format!("{}...", sentences[..SUMMARY_SENTENCES].join(" "));
            prop_assert_eq!(&truncated, &expected);
        }
        prop_assert!(split_sentences(&text).len() == sentences.len());
    }

    /// Author strings never exceed the display cap.
    #[test]
    fn authors_capped(names in proptest::collection::vec("[A-Za-zé ]{0,30}", 0..20)) {
        let raw = names.join(";");
        if let Some(authors) = parse_authors(&raw) {
            prop_assert!(authors.chars().count() <= MAX_AUTHORS_LEN);
            prop_assert!(!authors.contains(';'));
        }
    }
}

//! Property-based tests for pagination.
//!
//! These tests use proptest to verify the pagination summary and the lenient
//! query parsing across a wide range of inputs.

use chart_of_accounts::handlers::common::{parse_positive, PageRequest, Pagination};
use proptest::prelude::*;

fn page_request_strategy() -> impl Strategy<Value = PageRequest> {
    (1u64..500, 1u64..200).prop_map(|(page, limit)| PageRequest { page, limit })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn flags_follow_current_page(total in 0u64..100_000, request in page_request_strategy()) {
        let p = Pagination::new(total, request);
        prop_assert_eq!(p.has_next_page, p.current_page < p.total_pages);
        prop_assert_eq!(p.has_previous_page, p.current_page > 1);
    }

    #[test]
    fn total_pages_is_ceiling(total in 0u64..100_000, limit in 1u64..500) {
        let p = Pagination::new(total, PageRequest { page: 1, limit });
        prop_assert!(p.total_pages * limit >= total);
        if p.total_pages > 0 {
            prop_assert!((p.total_pages - 1) * limit < total);
        } else {
            prop_assert_eq!(total, 0);
        }
    }

    #[test]
    fn page_slices_cover_total(total in 0u64..5_000, limit in 1u64..100) {
        let pages = Pagination::new(total, PageRequest { page: 1, limit }).total_pages;
        let mut covered = 0u64;
        for page in 1..=pages {
            let offset = PageRequest { page, limit }.offset();
            let rows = total.saturating_sub(offset).min(limit);
            prop_assert!(rows <= limit);
            covered += rows;
        }
        prop_assert_eq!(covered, total);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn parsed_values_are_always_positive(raw in ".{0,12}") {
        prop_assert!(parse_positive(Some(raw.as_str()), 10) >= 1);
    }

    #[test]
    fn positive_integers_parse_exactly(n in 1u64..1_000_000, suffix in "[a-z.]{0,4}") {
        prop_assert_eq!(parse_positive(Some(format!("{n}{suffix}").as_str()), 10), n);
    }

    #[test]
    fn non_positive_integers_fall_back(n in 0i64..1_000_000) {
        prop_assert_eq!(parse_positive(Some(format!("-{n}").as_str()), 10), 10);
        prop_assert_eq!(parse_positive(Some("0"), 7), 7);
    }
}

//! Property-based tests for header normalization, similarity scoring and
//! mapping statistics.

use proptest::prelude::*;

use triplify_map::{MappingEngine, MatchThresholds, TemplateCatalog, similarity};
use triplify_model::ColumnKey;

fn arb_raw_header() -> impl Strategy<Value = String> {
    // Anything a CSV header cell might plausibly contain, including
    // whitespace, punctuation and non-ASCII letters.
    "[A-Za-zÀ-ÿ0-9 _::!?#()/.-]{0,24}"
}

fn arb_key() -> impl Strategy<Value = ColumnKey> {
    arb_raw_header().prop_map(|raw| ColumnKey::normalize(&raw))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn normalization_is_idempotent(raw in arb_raw_header()) {
        let once = ColumnKey::normalize(&raw);
        let twice = ColumnKey::normalize(once.as_str());
        prop_assert_eq!(&once, &twice, "re-normalizing {:?} changed it", raw);
    }

    #[test]
    fn normalized_keys_are_snake_shaped(raw in arb_raw_header()) {
        let key = ColumnKey::normalize(&raw);
        let text = key.as_str();

        prop_assert!(
            text.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
            "key {:?} contains characters outside [a-z0-9_]",
            text
        );
        prop_assert!(!text.starts_with('_'), "key {:?} starts with underscore", text);
        prop_assert!(!text.ends_with('_'), "key {:?} ends with underscore", text);
        prop_assert!(!text.contains("__"), "key {:?} has a doubled underscore", text);
    }

    #[test]
    fn similarity_is_symmetric(a in arb_key(), b in arb_key()) {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn similarity_stays_in_unit_range(a in arb_key(), b in arb_key()) {
        let score = similarity(&a, &b);
        prop_assert!(
            (0.0..=1.0).contains(&score),
            "similarity({:?}, {:?}) = {} out of range",
            a, b, score
        );
    }

    #[test]
    fn every_key_matches_itself_exactly(a in arb_key()) {
        prop_assert_eq!(similarity(&a, &a), 1.0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn statistics_always_add_up(
        headers in prop::collection::vec(arb_raw_header(), 0..12),
    ) {
        let engine = MappingEngine::new(TemplateCatalog::builtin());
        let result = engine.map_headers(&headers, None);
        let stats = result.statistics;

        prop_assert_eq!(stats.total_columns, headers.len());
        prop_assert_eq!(
            stats.mapped_columns + stats.unmapped_columns,
            stats.total_columns,
            "mapped {} + unmapped {} != total {}",
            stats.mapped_columns, stats.unmapped_columns, stats.total_columns
        );
        prop_assert!(stats.high_confidence_mappings <= stats.mapped_columns);
        prop_assert!(
            (0.0..=100.0).contains(&stats.mapping_percentage),
            "percentage {} out of range",
            stats.mapping_percentage
        );
    }

    #[test]
    fn auto_mapped_confidence_exceeds_the_accept_threshold(
        headers in prop::collection::vec(arb_raw_header(), 0..12),
    ) {
        let thresholds = MatchThresholds::default();
        let engine = MappingEngine::new(TemplateCatalog::builtin());
        let result = engine.map_headers(&headers, None);

        for (header, column) in result.mapping.iter() {
            prop_assert!(column.auto_mapped, "column {:?} was not auto mapped", header);
            prop_assert!(
                column.confidence > thresholds.accept && column.confidence <= 1.0,
                "column {:?} has confidence {} outside ({}, 1.0]",
                header, column.confidence, thresholds.accept
            );
        }
    }
}

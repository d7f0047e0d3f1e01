//! Query pipeline invariants over random corpora.

use super::common::fixed_now;
use super::strategies::{corpus_strategy, text_strategy, word_strategy};
use campus_search::inverted::unique_tokens;
use campus_search::{ParsedQuery, Query, SearchIndex};
use proptest::prelude::*;

fn index_of(corpus: Vec<campus_search::Document>) -> SearchIndex {
    let mut index = SearchIndex::new();
    index.add_documents(corpus);
    index
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every returned document contains every query term as a token.
    #[test]
    fn prop_results_contain_all_terms(
        corpus in corpus_strategy(),
        words in prop::collection::vec(word_strategy(), 1..3),
    ) {
        let index = index_of(corpus);
        let text = words.join(" ");
        let parsed = ParsedQuery::parse(&text);
        let results = index.search_at(&Query::new(text).page(1, 100), fixed_now()).unwrap();
        for hit in &results.documents {
            let tokens = unique_tokens(&hit.document.searchable_text());
            for term in &parsed.terms {
                prop_assert!(tokens.contains(term), "{} lacks {}", hit.document.id, term);
            }
        }
    }

    /// Pages of any size partition the full ranked listing.
    #[test]
    fn prop_pages_partition_results(
        corpus in corpus_strategy(),
        text in text_strategy(),
        limit in 1..5usize,
    ) {
        let index = index_of(corpus);
        let full = index.search_at(&Query::new(text.clone()).page(1, 1000), fixed_now()).unwrap();
        let expected_pages = full.total.div_ceil(limit);

        let mut paged = Vec::new();
        for page in 1..=expected_pages + 1 {
            let results = index
                .search_at(&Query::new(text.clone()).page(page, limit), fixed_now())
                .unwrap();
            prop_assert_eq!(results.total, full.total);
            prop_assert_eq!(results.total_pages, expected_pages);
            prop_assert!(results.documents.len() <= limit);
            paged.extend(results.documents.into_iter().map(|d| d.document.id));
        }
        let all: Vec<String> = full.documents.into_iter().map(|d| d.document.id).collect();
        prop_assert_eq!(paged, all);
    }

    /// No facet bucket exceeds the total, and every match has exactly one type.
    #[test]
    fn prop_facet_bounds(corpus in corpus_strategy(), text in text_strategy()) {
        let index = index_of(corpus);
        let results = index.search_at(&Query::new(text), fixed_now()).unwrap();
        for count in results
            .facets
            .location
            .values()
            .chain(results.facets.category.values())
            .chain(results.facets.kind.values())
        {
            prop_assert!(*count <= results.total);
        }
        prop_assert_eq!(results.facets.kind.values().sum::<usize>(), results.total);
    }

    /// Scores are never negative and suggestions only accompany an empty page.
    #[test]
    fn prop_scores_and_suggestions(corpus in corpus_strategy(), text in text_strategy()) {
        let index = index_of(corpus);
        let results = index.search_at(&Query::new(text), fixed_now()).unwrap();
        for hit in &results.documents {
            prop_assert!(hit.score >= 0.0);
        }
        if !results.documents.is_empty() {
            prop_assert!(results.suggestions.is_empty());
        }
        prop_assert!(results.suggestions.len() <= index.config().max_suggestions);
    }
}

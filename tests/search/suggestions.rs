//! "Did you mean" output for empty pages, and the standalone lookup.

use super::common::{build_placement_index, fixed_now, make_doc};
use campus_search::{DocType, Query, SearchIndex};

#[test]
fn test_near_miss_suggests_indexed_token() {
    let mut index = SearchIndex::new();
    index.add_document(make_doc("a", DocType::Job, "Frontend", "javascript react"));
    let results = index.search_at(&Query::new("javascrip"), fixed_now()).unwrap();
    assert!(results.documents.is_empty());
    assert!(results.suggestions.contains(&"javascript".to_string()));
}

#[test]
fn test_no_suggestions_alongside_results() {
    let index = build_placement_index();
    let results = index.search_at(&Query::new("backend"), fixed_now()).unwrap();
    assert!(!results.documents.is_empty());
    assert!(results.suggestions.is_empty());
}

#[test]
fn test_suggestions_are_capped_and_distinct() {
    let mut index = SearchIndex::new();
    for i in 0..10 {
        index.add_document(make_doc(
            &format!("d{}", i),
            DocType::Job,
            &format!("rustacean{}", i),
            "",
        ));
    }
    let results = index.search_at(&Query::new("rustacea"), fixed_now()).unwrap();
    assert_eq!(results.suggestions.len(), index.config().max_suggestions);
    let mut unique = results.suggestions.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), results.suggestions.len());
    assert!(!results.suggestions.contains(&"rustacea".to_string()));
}

#[test]
fn test_lookup_uses_first_term() {
    let index = build_placement_index();
    let suggestions = index.suggestions("distributd systms", 5);
    assert_eq!(suggestions.first().map(String::as_str), Some("distributed"));
    assert!(suggestions.len() <= 5);
    assert!(index.suggestions("", 5).is_empty());
    assert!(index.suggestions("distributd", 0).is_empty());
}

//! Facet counts span every match, not just the returned page.

use super::common::{build_placement_index, fixed_now};
use campus_search::{DocType, Filters, Query};

#[test]
fn test_facets_count_beyond_the_page() {
    let index = build_placement_index();
    let results = index
        .search_at(&Query::new("").page(1, 2), fixed_now())
        .unwrap();
    assert_eq!(results.documents.len(), 2);
    assert_eq!(results.total, 8);

    let facets = &results.facets;
    assert_eq!(facets.location.get("Remote"), Some(&2));
    assert_eq!(facets.location.get("Bangalore"), Some(&2));
    assert_eq!(facets.location.values().sum::<usize>(), 7);
    assert_eq!(facets.kind.get(&DocType::Drive), Some(&3));
    assert_eq!(facets.kind.get(&DocType::Resume), Some(&1));
    assert_eq!(facets.kind.values().sum::<usize>(), 8);
    assert_eq!(facets.category.get("Data"), Some(&3));
    assert_eq!(facets.category.get("Engineering"), Some(&3));
}

#[test]
fn test_facets_follow_filters() {
    let index = build_placement_index();
    let query = Query::new("").filters(Filters {
        location: vec!["Remote".to_string()],
        ..Filters::default()
    });
    let results = index.search_at(&query, fixed_now()).unwrap();
    assert_eq!(results.facets.location.len(), 1);
    assert_eq!(results.facets.kind.get(&DocType::Drive), Some(&1));
    assert_eq!(results.facets.kind.get(&DocType::Job), Some(&1));
}

#[test]
fn test_no_matches_no_facets() {
    let index = build_placement_index();
    let results = index
        .search_at(&Query::new("haskell"), fixed_now())
        .unwrap();
    assert!(results.facets.location.is_empty());
    assert!(results.facets.kind.is_empty());
    assert!(results.facets.category.is_empty());
}

//! Result ordering: relevance math and the explicit sort keys.

use super::common::{build_index, build_placement_index, fixed_now, ids, make_doc};
use campus_search::testing::{backend_drive, intern_drive, make_dated_doc};
use campus_search::{DocType, Query, SortField, SortOrder};

#[test]
fn test_title_match_outranks_body_match() {
    let index = build_index(vec![backend_drive(), intern_drive()]);
    let query = Query::new("backend").of_type(DocType::Drive);
    let results = index.search_at(&query, fixed_now()).unwrap();
    assert_eq!(ids(&results), vec!["d1", "d2"]);
    assert_eq!(results.documents[0].score, 2.0);
    assert_eq!(results.documents[1].score, 1.0);
}

#[test]
fn test_recent_document_ranks_higher() {
    let index = build_index(vec![
        make_dated_doc("old", "Hiring drive", "2022-01-01"),
        make_dated_doc("new", "Hiring drive", "2024-12-25"),
    ]);
    let results = index.search_at(&Query::new("hiring"), fixed_now()).unwrap();
    assert_eq!(ids(&results), vec!["new", "old"]);
    assert!(results.documents[0].score > results.documents[1].score);
    // two years old: no boost at all
    assert_eq!(results.documents[1].score, 2.0);
}

#[test]
fn test_relevance_sort_ignores_ascending_order() {
    let index = build_index(vec![backend_drive(), intern_drive()]);
    let query = Query::new("backend").sort(SortField::Relevance, SortOrder::Asc);
    let results = index.search_at(&query, fixed_now()).unwrap();
    assert_eq!(ids(&results), vec!["d1", "d2"]);
}

#[test]
fn test_equal_scores_keep_id_order() {
    let index = build_index(vec![
        make_doc("b", DocType::Job, "Role", "rust"),
        make_doc("a", DocType::Job, "Role", "rust"),
        make_doc("c", DocType::Job, "Role", "rust"),
    ]);
    let results = index.search_at(&Query::new("rust"), fixed_now()).unwrap();
    assert_eq!(ids(&results), vec!["a", "b", "c"]);
}

#[test]
fn test_sort_by_date() {
    let index = build_placement_index();
    let query = Query::new("")
        .of_type(DocType::Drive)
        .sort(SortField::Date, SortOrder::Desc);
    let results = index.search_at(&query, fixed_now()).unwrap();
    assert_eq!(ids(&results), vec!["d1", "d3", "d2"]);

    let query = Query::new("")
        .of_type(DocType::Drive)
        .sort(SortField::Date, SortOrder::Asc);
    let results = index.search_at(&query, fixed_now()).unwrap();
    assert_eq!(ids(&results), vec!["d2", "d3", "d1"]);
}

#[test]
fn test_sort_by_salary_treats_unparseable_as_zero() {
    let index = build_placement_index();
    let query = Query::new("")
        .of_type(DocType::Job)
        .sort(SortField::Salary, SortOrder::Desc);
    let results = index.search_at(&query, fixed_now()).unwrap();
    // "9,00,000" beats "TBD"
    assert_eq!(ids(&results), vec!["j1", "j2"]);

    let query = Query::new("")
        .of_type(DocType::Drive)
        .sort(SortField::Salary, SortOrder::Desc);
    let results = index.search_at(&query, fixed_now()).unwrap();
    assert_eq!(ids(&results), vec!["d3", "d1", "d2"]);
}

#[test]
fn test_sort_by_title() {
    let index = build_placement_index();
    let query = Query::new("")
        .of_type(DocType::Drive)
        .sort(SortField::Title, SortOrder::Asc);
    let results = index.search_at(&query, fixed_now()).unwrap();
    assert_eq!(ids(&results), vec!["d1", "d3", "d2"]);
}

//! Index maintenance invariants under random mutation.

use super::common::assert_index_well_formed;
use super::strategies::{corpus_strategy, document_strategy, op_strategy, Op};
use campus_search::inverted::unique_tokens;
use campus_search::SearchIndex;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn snapshot(index: &SearchIndex) -> Vec<(String, BTreeSet<String>)> {
    index
        .inverted()
        .iter()
        .map(|(term, ids)| (term.to_string(), ids.clone()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Adding a fresh document and removing it restores the token count exactly.
    #[test]
    fn prop_add_then_remove_restores_terms(
        corpus in corpus_strategy(),
        extra in document_strategy(),
    ) {
        let mut index = SearchIndex::new();
        index.add_documents(corpus);
        let mut extra = extra;
        extra.id = "fresh".to_string();

        let terms_before = index.term_count();
        let docs_before = index.len();
        index.add_document(extra);
        index.remove_document("fresh");

        prop_assert_eq!(index.term_count(), terms_before);
        prop_assert_eq!(index.len(), docs_before);
        assert_index_well_formed(&index);
    }

    /// Removing twice is the same as removing once.
    #[test]
    fn prop_remove_is_idempotent(corpus in corpus_strategy(), victim in 0..6usize) {
        let mut index = SearchIndex::new();
        index.add_documents(corpus);
        let id = format!("doc{}", victim);

        index.remove_document(&id);
        let once = snapshot(&index);
        prop_assert!(index.remove_document(&id).is_none());
        prop_assert_eq!(once, snapshot(&index));
    }

    /// Any sequence of adds, updates and removes leaves the index consistent.
    #[test]
    fn prop_random_operations_keep_index_consistent(
        ops in prop::collection::vec(op_strategy(), 0..30),
    ) {
        let mut index = SearchIndex::new();
        let mut live: BTreeSet<String> = BTreeSet::new();
        for op in ops {
            match op {
                Op::Add(doc) => {
                    live.insert(doc.id.clone());
                    index.add_document(doc);
                }
                Op::Update(doc) => {
                    live.insert(doc.id.clone());
                    index.update_document(doc);
                }
                Op::Remove(id) => {
                    live.remove(&id);
                    index.remove_document(&id);
                }
            }
            assert_index_well_formed(&index);
        }
        let stored: BTreeSet<String> = index.documents().map(|d| d.id.clone()).collect();
        prop_assert_eq!(stored, live);
    }

    /// After an update, none of the previous version's exclusive tokens point at it.
    #[test]
    fn prop_update_drops_old_tokens(old in document_strategy(), new in document_strategy()) {
        let mut new = new;
        new.id = old.id.clone();
        let old_tokens = unique_tokens(&old.searchable_text());
        let new_tokens = unique_tokens(&new.searchable_text());

        let mut index = SearchIndex::new();
        index.add_document(old.clone());
        index.update_document(new.clone());

        for token in old_tokens.difference(&new_tokens) {
            prop_assert!(index.postings(token).is_none(), "stale token {}", token);
        }
        for token in &new_tokens {
            prop_assert!(index.postings(token).is_some_and(|ids| ids.contains(&new.id)));
        }
    }

    /// Popular terms never exceed the limit and are sorted by document count.
    #[test]
    fn prop_popular_terms_sorted(corpus in corpus_strategy(), limit in 0..10usize) {
        let mut index = SearchIndex::new();
        index.add_documents(corpus);
        let top = index.popular_terms(limit);
        prop_assert!(top.len() <= limit);
        prop_assert!(top.len() <= index.term_count());
        for pair in top.windows(2) {
            prop_assert!(pair[0].doc_count >= pair[1].doc_count);
            if pair[0].doc_count == pair[1].doc_count {
                prop_assert!(pair[0].term < pair[1].term);
            }
        }
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate retrieval: which documents are even worth scoring.
//!
//! Terms combine with AND semantics. Start from every document of the requested
//! type, then intersect with each term's posting set. A term missing from the
//! index empties the candidate set immediately. Phrases are checked last, by
//! substring scan of the lowercased `title + " " + content`.

use crate::index::SearchIndex;
use crate::query::ParsedQuery;
use crate::types::{Document, TypeFilter};
use std::collections::BTreeSet;

/// Documents matching every term and phrase of `parsed`, restricted to `kind`,
/// in id order.
///
/// An empty query matches every document of the requested type.
pub fn retrieve<'a>(
    index: &'a SearchIndex,
    parsed: &ParsedQuery,
    kind: TypeFilter,
) -> Vec<&'a Document> {
    let typed = index.documents.values().filter(|doc| kind.matches(doc.kind));
    if parsed.is_empty() {
        return typed.collect();
    }

    let mut ids: BTreeSet<&str> = typed.map(|doc| doc.id.as_str()).collect();
    for term in &parsed.terms {
        match index.terms.postings(term) {
            Some(postings) => ids.retain(|id| postings.contains(*id)),
            None => ids.clear(),
        }
        if ids.is_empty() {
            return Vec::new();
        }
    }

    let mut docs: Vec<&Document> = ids
        .into_iter()
        .filter_map(|id| index.documents.get(id))
        .collect();
    if !parsed.phrases.is_empty() {
        docs.retain(|doc| {
            let text = doc.searchable_text().to_lowercase();
            parsed
                .phrases
                .iter()
                .all(|phrase| text.contains(phrase.as_str()))
        });
    }
    docs
}

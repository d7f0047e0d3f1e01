// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored candidates get ordered.
//!
//! Relevance always sorts descending. Date, title and salary honour the requested
//! order. Every sort is stable, so ties keep the document store's id order.

use crate::types::{Document, ScoredDocument, Sort, SortField, SortOrder};
use crate::utils::{date_sort_key, parse_salary};
use std::cmp::Ordering;

/// Anything that pairs a document with a relevance score can be ranked.
///
/// The pipeline ranks borrowed candidates and only clones the page it returns;
/// callers re-sorting a result page rank owned [`ScoredDocument`]s.
pub trait Ranked {
    fn document(&self) -> &Document;
    fn score(&self) -> f64;
}

impl Ranked for ScoredDocument {
    fn document(&self) -> &Document {
        &self.document
    }

    fn score(&self) -> f64 {
        self.score
    }
}

/// Compare two results under `sort`.
///
/// - `Relevance`: higher score first, regardless of `order`
/// - `Date`: missing or unparseable dates sort as the epoch
/// - `Title`: plain lexicographic comparison
/// - `Salary`: leading numeric run, unparseable as 0
pub fn compare_results<T: Ranked>(a: &T, b: &T, sort: Sort) -> Ordering {
    let (a_doc, b_doc) = (a.document(), b.document());
    let ascending = match sort.field {
        SortField::Relevance => return b.score().total_cmp(&a.score()),
        SortField::Date => {
            let a_key = date_sort_key(a_doc.metadata.date.as_deref());
            let b_key = date_sort_key(b_doc.metadata.date.as_deref());
            a_key.cmp(&b_key)
        }
        SortField::Title => a_doc.title.cmp(&b_doc.title),
        SortField::Salary => {
            let a_key = a_doc.metadata.salary.as_deref().map_or(0, parse_salary);
            let b_key = b_doc.metadata.salary.as_deref().map_or(0, parse_salary);
            a_key.cmp(&b_key)
        }
    };
    match sort.order {
        SortOrder::Asc => ascending,
        SortOrder::Desc => ascending.reverse(),
    }
}

/// Stable in-place sort.
pub fn sort_results<T: Ranked>(results: &mut [T], sort: Sort) {
    results.sort_by(|a, b| compare_results(a, b, sort));
}

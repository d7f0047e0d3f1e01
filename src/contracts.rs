// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index and the query pipeline.
//!
//! Cheap local checks that run on every mutation and every query in debug builds
//! and compile away in release (`debug_assert!`). The exhaustive audit lives in
//! `verify::check_index`; these only look at what the current operation touched.
//!
//! | Contract                 | Holds after                          |
//! |--------------------------|--------------------------------------|
//! | `check_postings_released`| `remove_document`                    |
//! | `check_page_bounds`      | pagination                           |
//! | `check_facet_bounds`     | facet aggregation                    |
//! | `check_no_suggestions`   | a non-empty page                     |

use crate::inverted::InvertedIndex;
use crate::scoring::{BODY_WEIGHT, TITLE_WEIGHT};
use crate::types::{Facets, Pagination};
use std::collections::BTreeSet;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// A title occurrence must outweigh a body occurrence, otherwise a document with
/// the term in both title and body could tie one with the term only in its body.
const _: () = {
    assert!(TITLE_WEIGHT > BODY_WEIGHT);
    assert!(BODY_WEIGHT > 0.0);
};

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// After removing `id`, none of its former tokens may still list it.
///
/// # Panics (debug builds only)
/// Panics if a posting set still holds `id`, or if a token was left with an empty set.
#[inline]
pub fn check_postings_released(terms: &InvertedIndex, id: &str, tokens: &BTreeSet<String>) {
    if cfg!(debug_assertions) {
        for token in tokens {
            if let Some(postings) = terms.postings(token) {
                debug_assert!(
                    !postings.contains(id),
                    "Contract violation: stale posting - '{}' still lists removed document '{}'",
                    token,
                    id
                );
                debug_assert!(
                    !postings.is_empty(),
                    "Contract violation: empty posting set left behind for '{}'",
                    token
                );
            }
        }
    }
}

// ============================================================================
// PIPELINE CONTRACTS
// ============================================================================

/// A page never exceeds its limit, and only the final partial page may be short.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_page_bounds(total: usize, page_len: usize, pagination: Pagination) {
    let expected = total
        .saturating_sub(pagination.offset())
        .min(pagination.limit);
    debug_assert_eq!(
        page_len, expected,
        "Contract violation: page {} of size {} over {} results has {} entries",
        pagination.page, pagination.limit, total, page_len
    );
}

/// No facet bucket can count more documents than matched.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_facet_bounds(facets: &Facets, total: usize) {
    if cfg!(debug_assertions) {
        let counts = facets
            .location
            .values()
            .chain(facets.kind.values())
            .chain(facets.category.values());
        for count in counts {
            debug_assert!(
                *count <= total,
                "Contract violation: facet count {} exceeds total {}",
                count,
                total
            );
        }
        let typed: usize = facets.kind.values().sum();
        debug_assert_eq!(
            typed, total,
            "Contract violation: every match has a type, type facet must sum to total"
        );
    }
}

/// Suggestions are only produced for an empty page.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_no_suggestions(page_len: usize, suggestions: &[String]) {
    debug_assert!(
        page_len == 0 || suggestions.is_empty(),
        "Contract violation: {} suggestions attached to a non-empty page",
        suggestions.len()
    );
}

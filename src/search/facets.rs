// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Facet counts over the full filtered match set, before pagination.

use crate::types::{Document, Facets};

/// Tally location, type and category across `docs`.
///
/// Documents without a location or category simply don't contribute a bucket
/// for that facet. Every document has a type.
pub fn compute_facets<'a>(docs: impl IntoIterator<Item = &'a Document>) -> Facets {
    let mut facets = Facets::default();
    for doc in docs {
        if let Some(location) = &doc.metadata.location {
            *facets.location.entry(location.clone()).or_insert(0) += 1;
        }
        *facets.kind.entry(doc.kind).or_insert(0) += 1;
        if let Some(category) = &doc.metadata.category {
            *facets.category.entry(category.clone()).or_insert(0) += 1;
        }
    }
    facets
}

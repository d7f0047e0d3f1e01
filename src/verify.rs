// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full-index audit.
//!
//! [`contracts`](crate::contracts) only looks at what one operation touched. This
//! module re-derives the inverted index from the stored documents and compares the
//! two, term by term. It is O(total tokens), so it belongs in tests and in the CLI's
//! load path, not on every mutation.
//!
//! | Error                | Invariant broken                                  |
//! |----------------------|---------------------------------------------------|
//! | `EmptyPostingList`   | tokens with no documents are dropped              |
//! | `UnknownDocument`    | every posting names a stored document             |
//! | `StalePosting`       | a posting's document still contains the token     |
//! | `MissingToken`       | every token of every document is indexed          |

use crate::index::SearchIndex;
use crate::inverted::unique_tokens;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// A token is present with no documents.
    #[error("term '{term}' has an empty posting set")]
    EmptyPostingList { term: String },
    /// A posting set lists an id the store doesn't hold.
    #[error("term '{term}' lists unknown document '{id}'")]
    UnknownDocument { term: String, id: String },
    /// A posting set lists a document whose text no longer yields the token.
    #[error("term '{term}' lists '{id}' but the document lacks it")]
    StalePosting { term: String, id: String },
    /// A document's token is missing from the index, or doesn't list the document.
    #[error("document '{id}' token '{token}' is not indexed")]
    MissingToken { id: String, token: String },
}

/// Check that the inverted index is exactly what re-indexing the store would produce.
///
/// Returns the first violation found, scanning terms in lexicographic order and
/// then documents in id order.
pub fn check_index(index: &SearchIndex) -> Result<(), InvariantError> {
    let expected: BTreeMap<&str, BTreeSet<String>> = index
        .documents
        .values()
        .map(|doc| (doc.id.as_str(), unique_tokens(&doc.searchable_text())))
        .collect();

    for (term, ids) in index.terms.iter() {
        if ids.is_empty() {
            return Err(InvariantError::EmptyPostingList {
                term: term.to_string(),
            });
        }
        for id in ids {
            let Some(tokens) = expected.get(id.as_str()) else {
                return Err(InvariantError::UnknownDocument {
                    term: term.to_string(),
                    id: id.clone(),
                });
            };
            if !tokens.contains(term) {
                return Err(InvariantError::StalePosting {
                    term: term.to_string(),
                    id: id.clone(),
                });
            }
        }
    }

    for (id, tokens) in &expected {
        for token in tokens {
            let listed = index
                .terms
                .postings(token)
                .is_some_and(|ids| ids.contains(*id));
            if !listed {
                return Err(InvariantError::MissingToken {
                    id: id.to_string(),
                    token: token.clone(),
                });
            }
        }
    }

    Ok(())
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The document store and its inverted index, kept in lockstep.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **TOKEN_LIVE**: a token is indexed iff some stored document's tokenized
//!    `title + " " + content` contains it. Add then remove returns the token count
//!    exactly to where it was.
//! 2. **POSTING_LIVE**: every id in every posting set names a stored document.
//! 3. **FULL_REPLACE**: re-adding an id first drops every posting of the previous
//!    version. Updates are never partial diffs.
//!
//! `verify::check_index` audits all three from scratch.
//!
//! # Concurrency
//!
//! No internal locking. Mutation takes `&mut self`, reads take `&self`, so the
//! borrow checker already serializes access within one thread. Callers sharing an
//! index across threads wrap it themselves (`RwLock<SearchIndex>` or one per worker).

use crate::config::SearchConfig;
use crate::contracts::check_postings_released;
use crate::inverted::{unique_tokens, InvertedIndex};
use crate::types::{DocType, Document, Statistics, TermFrequency};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An in-memory full-text index over placement documents.
///
/// Start empty, populate from the source of truth, and mirror every create, update
/// and delete into it. Nothing here polls or detects drift.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    pub(crate) config: SearchConfig,
    pub(crate) documents: BTreeMap<String, Document>,
    pub(crate) terms: InvertedIndex,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        SearchIndex {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Store `doc` under its id and index its title and content.
    ///
    /// An existing document with the same id is fully replaced.
    pub fn add_document(&mut self, doc: Document) {
        let tokens = unique_tokens(&doc.searchable_text());
        self.insert_tokenized(doc, tokens);
    }

    /// Add many documents in order. Later duplicates of an id win.
    ///
    /// With the `parallel` feature, tokenization runs on the rayon pool before the
    /// sequential merge; the resulting index is identical either way.
    pub fn add_documents<I>(&mut self, docs: I)
    where
        I: IntoIterator<Item = Document>,
    {
        let docs: Vec<Document> = docs.into_iter().collect();
        let count = docs.len();

        #[cfg(feature = "parallel")]
        let tokenized: Vec<(Document, BTreeSet<String>)> = docs
            .into_par_iter()
            .map(|doc| {
                let tokens = unique_tokens(&doc.searchable_text());
                (doc, tokens)
            })
            .collect();

        #[cfg(not(feature = "parallel"))]
        let tokenized: Vec<(Document, BTreeSet<String>)> = docs
            .into_iter()
            .map(|doc| {
                let tokens = unique_tokens(&doc.searchable_text());
                (doc, tokens)
            })
            .collect();

        for (doc, tokens) in tokenized {
            self.insert_tokenized(doc, tokens);
        }
        debug!(
            added = count,
            documents = self.documents.len(),
            terms = self.terms.len(),
            "bulk add complete"
        );
    }

    /// Remove a document and every posting it contributed.
    ///
    /// Returns the removed document. Unknown ids are a silent no-op, so removal is
    /// idempotent.
    pub fn remove_document(&mut self, id: &str) -> Option<Document> {
        let doc = self.documents.remove(id)?;
        let tokens = unique_tokens(&doc.searchable_text());
        self.terms.remove(id, &tokens);
        check_postings_released(&self.terms, id, &tokens);
        debug!(id, tokens = tokens.len(), "removed document");
        Some(doc)
    }

    /// Remove the stored version (if any), then add `doc`.
    pub fn update_document(&mut self, doc: Document) {
        self.remove_document(&doc.id);
        self.add_document(doc);
    }

    /// Drop every document and token.
    pub fn clear(&mut self) {
        self.documents.clear();
        self.terms.clear();
    }

    fn insert_tokenized(&mut self, doc: Document, tokens: BTreeSet<String>) {
        // INVARIANT: FULL_REPLACE
        if self.documents.contains_key(&doc.id) {
            self.remove_document(&doc.id);
        }
        self.terms.insert(&doc.id, &tokens);
        debug!(id = %doc.id, kind = %doc.kind, tokens = tokens.len(), "indexed document");
        self.documents.insert(doc.id.clone(), doc);
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.documents.contains_key(id)
    }

    /// Stored documents in id order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    /// Number of distinct indexed tokens.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Ids of documents containing `token`, which must already be normalized.
    pub fn postings(&self, token: &str) -> Option<&BTreeSet<String>> {
        self.terms.postings(token)
    }

    /// The raw token map, for auditing.
    pub fn inverted(&self) -> &InvertedIndex {
        &self.terms
    }

    // ========================================================================
    // Aggregates
    // ========================================================================

    /// The `limit` tokens present in the most documents. Ties break alphabetically.
    pub fn popular_terms(&self, limit: usize) -> Vec<TermFrequency> {
        let mut terms: Vec<TermFrequency> = self
            .terms
            .iter()
            .map(|(term, ids)| TermFrequency {
                term: term.to_string(),
                doc_count: ids.len(),
            })
            .collect();
        // vocabulary iterates alphabetically and the sort is stable
        terms.sort_by(|a, b| b.doc_count.cmp(&a.doc_count));
        terms.truncate(limit);
        terms
    }

    pub fn statistics(&self) -> Statistics {
        let mut documents_by_type: BTreeMap<DocType, usize> = BTreeMap::new();
        let mut total_length = 0usize;
        for doc in self.documents.values() {
            *documents_by_type.entry(doc.kind).or_insert(0) += 1;
            total_length += doc.title.chars().count() + doc.content.chars().count();
        }
        let average_document_length = if self.documents.is_empty() {
            0.0
        } else {
            total_length as f64 / self.documents.len() as f64
        };
        Statistics {
            total_documents: self.documents.len(),
            total_terms: self.terms.len(),
            documents_by_type,
            average_document_length,
        }
    }
}

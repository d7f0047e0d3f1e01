// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query pipeline: where the rubber meets the road.
//!
//! ```text
//! validate ─► parse ─► retrieve ─► filter ─► score ─► sort ─► facets ─► paginate ─► suggest
//! ```
//!
//! 1. **validate**: page/limit bounds and date range, the only fallible step.
//! 2. **parse**: terms plus quoted phrases ([`ParsedQuery`]).
//! 3. **retrieve**: AND-intersection of posting sets, phrase scan ([`candidates`]).
//! 4. **filter**: metadata criteria ([`FilterSet`]).
//! 5. **score** and **sort**: [`crate::scoring`].
//! 6. **facets**: counted over every match, not just the page ([`facets`]).
//! 7. **paginate**: `total_pages = ceil(total / limit)`; a page past the end is empty.
//! 8. **suggest**: only when the page is empty ([`suggest`]).
//!
//! Scores never touch the stored documents. The page is built from clones, so one
//! query cannot leak relevance into the next.

pub mod candidates;
pub mod facets;
pub mod suggest;

use crate::contracts::{check_facet_bounds, check_no_suggestions, check_page_bounds};
use crate::error::QueryError;
use crate::filter::FilterSet;
use crate::index::SearchIndex;
use crate::query::ParsedQuery;
use crate::scoring::ranking::{sort_results, Ranked};
use crate::scoring::{score_document, Relevance};
use crate::types::{Document, Pagination, Query, ScoredDocument, SearchResults, TypeFilter};
use chrono::{DateTime, Utc};
use std::time::Instant;
use tracing::{debug, trace};

use candidates::retrieve;
use facets::compute_facets;
use suggest::{suggest_alternatives, suggest_from_documents};

/// A borrowed match awaiting pagination.
struct Candidate<'a> {
    doc: &'a Document,
    relevance: Relevance,
}

impl Ranked for Candidate<'_> {
    fn document(&self) -> &Document {
        self.doc
    }

    fn score(&self) -> f64 {
        self.relevance.score
    }
}

impl SearchIndex {
    /// Run a structured query against the current contents.
    ///
    /// A query that matches nothing is not an error: it yields an empty page, zero
    /// totals and (usually) suggestions. Errors are reserved for malformed queries.
    pub fn search(&self, query: &Query) -> Result<SearchResults, QueryError> {
        self.search_at(query, Utc::now())
    }

    /// [`search`](Self::search) with an explicit clock for the recency boost.
    pub fn search_at(
        &self,
        query: &Query,
        now: DateTime<Utc>,
    ) -> Result<SearchResults, QueryError> {
        let pagination = query.validate(&self.config)?;
        let filters = FilterSet::compile(&query.filters)?;
        Ok(self.execute(query, &filters, pagination, now))
    }

    /// First page of a plain-text search, optionally restricted to one type.
    ///
    /// `limit` is clamped to the configured maximum page size; zero returns nothing.
    pub fn quick_search(
        &self,
        text: &str,
        kind: TypeFilter,
        limit: usize,
    ) -> Vec<ScoredDocument> {
        if limit == 0 {
            return Vec::new();
        }
        let query = Query::new(text).of_type(kind);
        let pagination = Pagination::new(1, limit.min(self.config.max_page_size));
        self.execute(&query, &FilterSet::default(), pagination, Utc::now())
            .documents
    }

    /// Indexed tokens resembling the first term of `text`.
    ///
    /// Scans stored documents rather than the vocabulary, so results come in
    /// document order. Returns nothing when `text` has no usable term.
    pub fn suggestions(&self, text: &str, limit: usize) -> Vec<String> {
        let parsed = ParsedQuery::parse(text);
        match parsed.terms.first() {
            Some(term) => {
                suggest_from_documents(term, self.documents.values(), &self.config, limit)
            }
            None => Vec::new(),
        }
    }

    fn execute(
        &self,
        query: &Query,
        filters: &FilterSet,
        pagination: Pagination,
        now: DateTime<Utc>,
    ) -> SearchResults {
        let started = Instant::now();
        let parsed = ParsedQuery::parse(&query.query);

        let retrieved = retrieve(self, &parsed, query.kind);
        let retrieved_count = retrieved.len();

        let mut matches: Vec<Candidate<'_>> = retrieved
            .into_iter()
            .filter(|doc| filters.matches(doc))
            .map(|doc| Candidate {
                doc,
                relevance: score_document(doc, &parsed, &self.config, now),
            })
            .collect();
        trace!(
            retrieved = retrieved_count,
            filtered = matches.len(),
            "candidates narrowed"
        );

        sort_results(&mut matches, query.sort);

        let total = matches.len();
        let facets = compute_facets(matches.iter().map(|m| m.doc));
        check_facet_bounds(&facets, total);

        let total_pages = total.div_ceil(pagination.limit);
        let documents: Vec<ScoredDocument> = matches
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.limit)
            .map(|m| ScoredDocument {
                document: m.doc.clone(),
                score: m.relevance.score,
                highlights: m.relevance.highlights,
            })
            .collect();
        check_page_bounds(total, documents.len(), pagination);

        let suggestions = if documents.is_empty() {
            suggest_alternatives(&parsed.terms, self.terms.vocabulary(), &self.config)
        } else {
            Vec::new()
        };
        check_no_suggestions(documents.len(), &suggestions);

        let search_time = started.elapsed().as_secs_f64() * 1000.0;
        debug!(
            query = %query.query,
            total,
            page = pagination.page,
            returned = documents.len(),
            suggestions = suggestions.len(),
            search_time_ms = search_time,
            "search complete"
        );

        SearchResults {
            documents,
            total,
            page: pagination.page,
            total_pages,
            facets,
            suggestions,
            search_time,
        }
    }
}

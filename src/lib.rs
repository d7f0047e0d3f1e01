// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory full-text search over campus placement records.
//!
//! Drives, students, companies, applications, jobs and resumes go into one
//! [`SearchIndex`]. Structured [`Query`]s come back as ranked, filtered, paginated
//! [`SearchResults`] with facet counts and, when nothing matches, "did you mean"
//! suggestions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────────────┐
//! │  types.rs   │────▶│   index.rs   │────▶│        search/           │
//! │ (Document,  │     │ (store +     │     │ candidates ─► filter ─►  │
//! │  Query)     │     │  inverted)   │     │ scoring ─► facets ─►     │
//! └─────────────┘     └──────────────┘     │ suggest                  │
//!        │                   │             └──────────────────────────┘
//!        ▼                   ▼                          │
//! ┌─────────────────────────────────────────────────────▼───┐
//! │  contracts.rs (debug_assert per operation)               │
//! │  verify.rs    (full re-derivation audit)                 │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use campus_search::{DocType, Document, Query, SearchIndex};
//!
//! let mut index = SearchIndex::new();
//! index.add_document(Document::new(
//!     "d1",
//!     DocType::Drive,
//!     "Backend Engineer",
//!     "Go and distributed systems",
//! ));
//!
//! let results = index.search(&Query::new("backend")).unwrap();
//! assert_eq!(results.total, 1);
//! assert_eq!(results.documents[0].document.id, "d1");
//! ```

pub mod config;
pub mod contracts;
pub mod error;
pub mod filter;
mod index;
pub mod inverted;
pub mod query;
pub mod scoring;
pub mod search;
mod types;
pub mod utils;
pub mod verify;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use config::SearchConfig;
pub use error::{ConfigError, QueryError};
pub use filter::FilterSet;
pub use index::SearchIndex;
pub use inverted::{is_stop_word, tokenize, InvertedIndex};
pub use query::{extract_phrases, ParsedQuery};
pub use scoring::ranking::{sort_results, Ranked};
pub use scoring::{score_document, Relevance};
pub use search::suggest::is_similar;
pub use types::{
    DateRange, DocType, Document, Facets, Filters, Metadata, Pagination, Query, ScoredDocument,
    SearchResults, Sort, SortField, SortOrder, Statistics, TermFrequency, TypeFilter,
};
pub use utils::normalize;
pub use verify::{check_index, InvariantError};

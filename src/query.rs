// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing and boundary validation.
//!
//! A query string yields two things: `terms`, produced by the same tokenizer the
//! index uses, and `phrases`, the double-quoted substrings kept whole. Words inside
//! a phrase are also terms, so `"machine learning"` requires both tokens *and*
//! the adjacent substring.

use crate::config::SearchConfig;
use crate::error::QueryError;
use crate::inverted::tokenize;
use crate::types::{Pagination, Query};

/// Terms and phrases extracted from free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Distinct normalized tokens in first-seen order.
    pub terms: Vec<String>,
    /// Lowercased quoted substrings, untokenized.
    pub phrases: Vec<String>,
}

impl ParsedQuery {
    pub fn parse(text: &str) -> Self {
        let mut terms: Vec<String> = Vec::new();
        for token in tokenize(text) {
            if !terms.contains(&token) {
                terms.push(token);
            }
        }
        ParsedQuery {
            terms,
            phrases: extract_phrases(text),
        }
    }

    /// Nothing to match against: every document of the requested type is a candidate.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.phrases.is_empty()
    }
}

/// Pull out `"..."` spans, lowercased but otherwise verbatim, so padding inside the
/// quotes stays part of the phrase. Blank spans and an unterminated trailing quote
/// are ignored.
pub fn extract_phrases(text: &str) -> Vec<String> {
    let segments: Vec<&str> = text.split('"').collect();
    // Segments at odd positions sit between a pair of quotes. With an odd number
    // of quotes the final odd segment has no closing quote.
    let closed = if segments.len() % 2 == 0 {
        segments.len() - 1
    } else {
        segments.len()
    };

    let mut phrases: Vec<String> = Vec::new();
    for segment in segments[..closed].iter().skip(1).step_by(2) {
        if segment.trim().is_empty() {
            continue;
        }
        let phrase = segment.to_lowercase();
        if !phrases.contains(&phrase) {
            phrases.push(phrase);
        }
    }
    phrases
}

impl Query {
    /// Check the caller contract and resolve the effective page window.
    ///
    /// Date bounds are checked separately when filters are compiled.
    pub fn validate(&self, config: &SearchConfig) -> Result<Pagination, QueryError> {
        let pagination = self
            .pagination
            .unwrap_or_else(|| Pagination::new(1, config.default_page_size));
        if pagination.page == 0 {
            return Err(QueryError::ZeroPage);
        }
        if pagination.limit == 0 {
            return Err(QueryError::ZeroLimit);
        }
        if pagination.limit > config.max_page_size {
            return Err(QueryError::LimitTooLarge {
                limit: pagination.limit,
                max: config.max_page_size,
            });
        }
        Ok(pagination)
    }
}

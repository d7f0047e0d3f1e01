// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! "Did you mean" suggestions.
//!
//! Similarity is a character-overlap heuristic, not edit distance. Two strings are
//! similar when one contains the other, or when their lengths differ by at most
//! `max_length_difference` and more than `similarity_threshold` of the shorter
//! string's characters occur somewhere in the longer one.
//!
//! It is deliberately loose: "javascrip" suggests "javascript", but so can
//! unrelated anagrams. Callers should treat the output as hints, nothing more.

use crate::config::SearchConfig;
use crate::inverted::tokenize;
use crate::types::Document;

/// Character-overlap similarity between a query term and an indexed token.
pub fn is_similar(term: &str, token: &str, config: &SearchConfig) -> bool {
    if term.contains(token) || token.contains(term) {
        return true;
    }
    let term_len = term.chars().count();
    let token_len = token.chars().count();
    if term_len.abs_diff(token_len) > config.max_length_difference {
        return false;
    }
    let (shorter, longer, shorter_len) = if term_len <= token_len {
        (term, token, term_len)
    } else {
        (token, term, token_len)
    };
    if shorter_len == 0 {
        return false;
    }
    let shared = shorter.chars().filter(|c| longer.contains(*c)).count();
    shared as f64 / shorter_len as f64 > config.similarity_threshold
}

/// Collect up to `limit` distinct candidates similar to `term`, in encounter order.
fn collect_similar<'a>(
    term: &str,
    candidates: impl IntoIterator<Item = &'a str>,
    config: &SearchConfig,
    out: &mut Vec<String>,
    limit: usize,
) {
    for candidate in candidates {
        if out.len() >= limit {
            return;
        }
        if candidate != term
            && is_similar(term, candidate, config)
            && !out.iter().any(|s| s == candidate)
        {
            out.push(candidate.to_string());
        }
    }
}

/// Alternatives for a query that produced an empty page.
///
/// Scans the index vocabulary for every query term, in term order, stopping at
/// `config.max_suggestions`.
pub fn suggest_alternatives<'a, V>(
    terms: &[String],
    vocabulary: V,
    config: &SearchConfig,
) -> Vec<String>
where
    V: Iterator<Item = &'a str> + Clone,
{
    let mut out = Vec::new();
    for term in terms {
        collect_similar(term, vocabulary.clone(), config, &mut out, config.max_suggestions);
        if out.len() >= config.max_suggestions {
            break;
        }
    }
    out
}

/// Tokens similar to `term` found in the stored documents, in document order.
pub fn suggest_from_documents<'a>(
    term: &str,
    docs: impl IntoIterator<Item = &'a Document>,
    config: &SearchConfig,
    limit: usize,
) -> Vec<String> {
    let mut out = Vec::new();
    for doc in docs {
        if out.len() >= limit {
            break;
        }
        let tokens = tokenize(&doc.searchable_text());
        collect_similar(term, tokens.iter().map(String::as_str), config, &mut out, limit);
    }
    out
}

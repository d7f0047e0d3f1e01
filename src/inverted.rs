// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenization and the token → posting-set map.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **NON_EMPTY**: every token in the map has at least one posting. Removing
//!    the last document that contains a token removes the token entirely.
//! 2. **DEDUPLICATED**: a posting set holds each document id at most once.
//! 3. **SAME_RULE**: indexing and query parsing both go through [`tokenize`],
//!    so retrieval is exact-match on normalized tokens.

use crate::utils::normalize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::LazyLock;

/// Common English function words. Too frequent to carry any signal.
const STOP_WORD_LIST: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

/// Check if a word is a stop word.
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Split text into index tokens.
///
/// 1. Lowercase, and replace anything that is not alphanumeric or whitespace with a space
/// 2. Split on whitespace runs
/// 3. Drop tokens of one character or fewer
/// 4. Drop stop words
///
/// Duplicates are kept, in text order. No stemming, no synonyms.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|word| word.chars().count() > 1 && !is_stop_word(word))
        .map(str::to_string)
        .collect()
}

/// Distinct tokens of `text`, sorted.
pub fn unique_tokens(text: &str) -> BTreeSet<String> {
    tokenize(text).into_iter().collect()
}

/// Token → set of document ids containing it.
///
/// Ordered maps keep vocabulary scans (suggestions, popular terms) deterministic.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    terms: BTreeMap<String, BTreeSet<String>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `doc_id` under every token.
    pub fn insert<'a>(&mut self, doc_id: &str, tokens: impl IntoIterator<Item = &'a String>) {
        for token in tokens {
            match self.terms.get_mut(token) {
                Some(postings) => {
                    postings.insert(doc_id.to_string());
                }
                None => {
                    self.terms
                        .insert(token.clone(), BTreeSet::from([doc_id.to_string()]));
                }
            }
        }
    }

    /// Remove `doc_id` from every token's postings, dropping tokens left empty.
    pub fn remove<'a>(&mut self, doc_id: &str, tokens: impl IntoIterator<Item = &'a String>) {
        for token in tokens {
            let now_empty = match self.terms.get_mut(token) {
                Some(postings) => {
                    postings.remove(doc_id);
                    postings.is_empty()
                }
                None => false,
            };
            // INVARIANT: NON_EMPTY
            if now_empty {
                self.terms.remove(token);
            }
        }
    }

    pub fn postings(&self, token: &str) -> Option<&BTreeSet<String>> {
        self.terms.get(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Indexed tokens in lexicographic order.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> + Clone {
        self.terms.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.terms.iter().map(|(term, ids)| (term.as_str(), ids))
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }
}

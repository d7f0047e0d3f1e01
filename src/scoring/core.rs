// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance.
//!
//! ```text
//! score = Σ_terms   occurrences(term) × (title_weight if term ∈ title else body_weight)
//!       + Σ_phrases phrase_bonus                         (if phrase ∈ title+content)
//!       + recency_weight × max(0, 1 - days_since / recency_window_days)
//! ```
//!
//! rounded to two decimals. Occurrences are raw substring counts over the lowercased
//! `title + " " + content`, not word-boundary aware: "java" counts inside "javascript".
//!
//! # Key Invariant: Title Dominance
//!
//! With equal body occurrence counts, a document that also has the term in its
//! title scores strictly higher, because `title_weight > body_weight`. The defaults
//! (2.0 vs 1.0) are asserted at compile time in `contracts`.

use crate::config::SearchConfig;
use crate::query::ParsedQuery;
use crate::types::Document;
use crate::utils::{parse_date, round2};
use chrono::{DateTime, Utc};

/// Default per-occurrence weight for terms that also appear in the title.
pub const TITLE_WEIGHT: f64 = 2.0;

/// Default per-occurrence weight for terms found only in the body.
pub const BODY_WEIGHT: f64 = 1.0;

/// Default flat bonus per matched phrase.
pub const PHRASE_BONUS: f64 = 5.0;

/// Default maximum recency boost.
pub const RECENCY_WEIGHT: f64 = 2.0;

/// Default recency decay window.
pub const RECENCY_WINDOW_DAYS: f64 = 365.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// A score plus the terms and phrases that earned it.
#[derive(Debug, Clone, PartialEq)]
pub struct Relevance {
    pub score: f64,
    /// Matched terms, then matched phrases, no duplicates.
    pub highlights: Vec<String>,
}

/// Count non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Linear recency decay. Undated, unparseable, future-dated and older-than-window
/// documents all get zero; the boost is never negative.
pub fn recency_boost(date: Option<&str>, now: DateTime<Utc>, config: &SearchConfig) -> f64 {
    let Some(date) = date.and_then(parse_date) else {
        return 0.0;
    };
    let days_since = (now - date).num_milliseconds() as f64 / MILLIS_PER_DAY;
    if days_since < 0.0 {
        return 0.0;
    }
    (1.0 - days_since / config.recency_window_days).max(0.0) * config.recency_weight
}

/// Score one candidate against a parsed query.
pub fn score_document(
    doc: &Document,
    parsed: &ParsedQuery,
    config: &SearchConfig,
    now: DateTime<Utc>,
) -> Relevance {
    let text = doc.searchable_text().to_lowercase();
    let title = doc.title.to_lowercase();
    let mut score = 0.0;
    let mut highlights: Vec<String> = Vec::new();

    for term in &parsed.terms {
        let occurrences = count_occurrences(&text, term);
        if occurrences == 0 {
            continue;
        }
        let weight = if title.contains(term.as_str()) {
            config.title_weight
        } else {
            config.body_weight
        };
        score += occurrences as f64 * weight;
        if !highlights.contains(term) {
            highlights.push(term.clone());
        }
    }

    for phrase in &parsed.phrases {
        if text.contains(phrase.as_str()) {
            score += config.phrase_bonus;
            if !highlights.contains(phrase) {
                highlights.push(phrase.clone());
            }
        }
    }

    score += recency_boost(doc.metadata.date.as_deref(), now, config);

    Relevance {
        score: round2(score),
        highlights,
    }
}

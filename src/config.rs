// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunables for scoring, suggestions and paging.
//!
//! Defaults reproduce the stock ranking: a title occurrence is worth two body
//! occurrences, a matched phrase adds five, and recency adds up to two points
//! decaying linearly over a year.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Per-occurrence weight when the term also appears in the title.
    pub title_weight: f64,
    /// Per-occurrence weight otherwise.
    pub body_weight: f64,
    pub phrase_bonus: f64,
    /// Boost for a document dated exactly now.
    pub recency_weight: f64,
    pub recency_window_days: f64,
    pub max_suggestions: usize,
    /// Shared-character ratio a similar pair must exceed.
    pub similarity_threshold: f64,
    pub max_length_difference: usize,
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            title_weight: 2.0,
            body_weight: 1.0,
            phrase_bonus: 5.0,
            recency_weight: 2.0,
            recency_window_days: 365.0,
            max_suggestions: 5,
            similarity_threshold: 0.6,
            max_length_difference: 2,
            default_page_size: 10,
            max_page_size: 1000,
        }
    }
}

impl SearchConfig {
    /// Parse and validate a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("titleWeight", self.title_weight),
            ("bodyWeight", self.body_weight),
            ("recencyWindowDays", self.recency_window_days),
        ];
        for (field, value) in weights {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {}", value),
                });
            }
        }
        for (field, value) in [
            ("phraseBonus", self.phrase_bonus),
            ("recencyWeight", self.recency_weight),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be zero or positive, got {}", value),
                });
            }
        }
        if !(0.0..1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError::Invalid {
                field: "similarityThreshold",
                reason: format!("must be in [0, 1), got {}", self.similarity_threshold),
            });
        }
        if self.default_page_size == 0 || self.max_page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "defaultPageSize",
                reason: "page sizes must be at least 1".to_string(),
            });
        }
        if self.default_page_size > self.max_page_size {
            return Err(ConfigError::Invalid {
                field: "defaultPageSize",
                reason: format!(
                    "{} exceeds maxPageSize {}",
                    self.default_page_size, self.max_page_size
                ),
            });
        }
        Ok(())
    }
}

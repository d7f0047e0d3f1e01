// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Metadata filtering.
//!
//! Every populated criterion must pass. Within a criterion any one value is enough.
//! Matching is case-insensitive substring containment, and a document missing the
//! field fails the criterion: absence is never a wildcard.

use crate::error::QueryError;
use crate::types::{DateRange, Document, Filters};
use crate::utils::{contains_ci, parse_date};
use chrono::{DateTime, Utc};

/// [`Filters`] with needles lowercased and date bounds parsed, ready to apply.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    location: Vec<String>,
    skills: Vec<String>,
    experience: Vec<String>,
    education: Vec<String>,
    salary: Vec<String>,
    category: Vec<String>,
    status: Vec<String>,
    tags: Vec<String>,
    author: Vec<String>,
    date_range: Option<Bounds>,
}

fn lowered(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
        .collect()
}

type Bounds = (Option<DateTime<Utc>>, Option<DateTime<Utc>>);

fn parse_bound(
    bound: &'static str,
    value: Option<&String>,
) -> Result<Option<DateTime<Utc>>, QueryError> {
    match value {
        None => Ok(None),
        Some(raw) => parse_date(raw)
            .map(Some)
            .ok_or_else(|| QueryError::InvalidDate {
                bound,
                value: raw.clone(),
            }),
    }
}

fn compile_range(range: &DateRange) -> Result<Bounds, QueryError> {
    let start = parse_bound("start", range.start.as_ref())?;
    let end = parse_bound("end", range.end.as_ref())?;
    if let (Some(s), Some(e)) = (start, end) {
        if s > e {
            return Err(QueryError::InvertedDateRange {
                start: s.to_rfc3339(),
                end: e.to_rfc3339(),
            });
        }
    }
    Ok((start, end))
}

/// Single-valued field: must contain at least one needle.
fn field_matches(field: Option<&String>, needles: &[String]) -> bool {
    if needles.is_empty() {
        return true;
    }
    match field {
        Some(value) => {
            let value = value.to_lowercase();
            needles.iter().any(|needle| value.contains(needle.as_str()))
        }
        None => false,
    }
}

/// List field: some element must contain at least one needle.
fn list_matches(field: &[String], needles: &[String]) -> bool {
    if needles.is_empty() {
        return true;
    }
    needles
        .iter()
        .any(|needle| field.iter().any(|item| contains_ci(item, needle)))
}

impl FilterSet {
    /// Validate and prepare filters. Fails only on an unparseable or inverted date range.
    pub fn compile(filters: &Filters) -> Result<Self, QueryError> {
        let date_range = filters.date_range.as_ref().map(compile_range).transpose()?;
        Ok(FilterSet {
            location: lowered(&filters.location),
            skills: lowered(&filters.skills),
            experience: lowered(&filters.experience),
            education: lowered(&filters.education),
            salary: lowered(&filters.salary),
            category: lowered(&filters.category),
            status: lowered(&filters.status),
            tags: lowered(&filters.tags),
            author: lowered(&filters.author),
            date_range,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.location.is_empty()
            && self.skills.is_empty()
            && self.experience.is_empty()
            && self.education.is_empty()
            && self.salary.is_empty()
            && self.category.is_empty()
            && self.status.is_empty()
            && self.tags.is_empty()
            && self.author.is_empty()
            && self.date_range.is_none()
    }

    pub fn matches(&self, doc: &Document) -> bool {
        let meta = &doc.metadata;
        field_matches(meta.location.as_ref(), &self.location)
            && list_matches(&meta.skills, &self.skills)
            && field_matches(meta.experience.as_ref(), &self.experience)
            && field_matches(meta.education.as_ref(), &self.education)
            && field_matches(meta.salary.as_ref(), &self.salary)
            && field_matches(meta.category.as_ref(), &self.category)
            && field_matches(meta.status.as_ref(), &self.status)
            && list_matches(&meta.tags, &self.tags)
            && field_matches(meta.author.as_ref(), &self.author)
            && self.date_matches(meta.date.as_deref())
    }

    fn date_matches(&self, date: Option<&str>) -> bool {
        let Some((start, end)) = self.date_range else {
            return true;
        };
        let Some(date) = date.and_then(parse_date) else {
            return false;
        };
        start.map_or(true, |s| date >= s) && end.map_or(true, |e| date <= e)
    }
}

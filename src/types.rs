// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search: documents going in, queries and results coming out.
//!
//! Everything here is plain data with serde derives. The JSON shape uses camelCase
//! field names (`dateRange`, `totalPages`, `searchTime`) and `type` for the document
//! kind, so records exported by the placement API deserialize without a mapping layer.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Document**: carries no per-query state. Scores and highlights live on
//!   [`ScoredDocument`], which wraps a *copy* of the stored document. One query's
//!   relevance can never leak into the next query's results.
//!
//! - **Pagination**: `page >= 1 ∧ limit >= 1`. Checked at the query boundary by
//!   [`Query::validate`](crate::Query::validate), never inside the pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// What kind of placement record a document was materialized from.
///
/// Closed set: the search UI scopes and facets on exactly these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    Drive,
    Student,
    Company,
    Application,
    Job,
    Resume,
}

impl DocType {
    pub const ALL: [DocType; 6] = [
        DocType::Drive,
        DocType::Student,
        DocType::Company,
        DocType::Application,
        DocType::Job,
        DocType::Resume,
    ];

    /// Convert to lowercase string representation.
    ///
    /// Matches the serde `rename_all = "lowercase"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Drive => "drive",
            DocType::Student => "student",
            DocType::Company => "company",
            DocType::Application => "application",
            DocType::Job => "job",
            DocType::Resume => "resume",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown document type '{}'", s))
    }
}

/// A scalar metadata value as exported, before it is pinned down to text.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

/// Accept a string, number or boolean for a scalar metadata field.
///
/// Spreadsheet exports write salaries and years of experience as bare numbers;
/// they are kept as their JSON text, so `1200000` becomes `"1200000"`.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<ScalarValue> = Option::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        ScalarValue::Text(text) => text,
        ScalarValue::Number(number) => number.to_string(),
        ScalarValue::Flag(flag) => flag.to_string(),
    }))
}

/// Well-known metadata fields plus an escape hatch for everything else.
///
/// The typed fields participate in filtering and faceting. `extra` is preserved
/// verbatim through serialization but the engine never looks inside it.
///
/// Scalar fields read strings, numbers and booleans alike and always hold text.
/// Arrays or objects in a scalar field are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(
        default,
        deserialize_with = "scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(
        default,
        deserialize_with = "scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    #[serde(
        default,
        deserialize_with = "scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub experience: Option<String>,
    #[serde(
        default,
        deserialize_with = "scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub education: Option<String>,
    #[serde(
        default,
        deserialize_with = "scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub salary: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`. Unparseable values count as "no date".
    #[serde(
        default,
        deserialize_with = "scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
    #[serde(
        default,
        deserialize_with = "scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub author: Option<String>,
    #[serde(
        default,
        deserialize_with = "scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
    /// Caller-specific fields, carried but never interpreted.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// The unit of indexing.
///
/// `id` is caller-assigned and stable across updates. Title and content are the
/// only indexed text; metadata is consulted by filters, facets and sorting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DocType,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        kind: DocType,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Document {
            id: id.into(),
            kind,
            title: title.into(),
            content: content.into(),
            metadata: Metadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// The text that gets tokenized and scanned: `title + " " + content`.
    pub fn searchable_text(&self) -> String {
        let mut text = String::with_capacity(self.title.len() + 1 + self.content.len());
        text.push_str(&self.title);
        text.push(' ');
        text.push_str(&self.content);
        text
    }
}

// =============================================================================
// QUERY TYPES
// =============================================================================

/// Restrict a query to one document kind, or search everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeFilter {
    #[default]
    All,
    Only(DocType),
}

impl TypeFilter {
    pub fn matches(&self, kind: DocType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => *wanted == kind,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(TypeFilter::All)
        } else {
            s.parse().map(TypeFilter::Only)
        }
    }
}

impl TryFrom<String> for TypeFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeFilter> for String {
    fn from(filter: TypeFilter) -> Self {
        match filter {
            TypeFilter::All => "all".to_string(),
            TypeFilter::Only(kind) => kind.as_str().to_string(),
        }
    }
}

impl From<DocType> for TypeFilter {
    fn from(kind: DocType) -> Self {
        TypeFilter::Only(kind)
    }
}

/// Inclusive date window. A missing bound leaves that side open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl DateRange {
    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        DateRange {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }
}

/// Metadata criteria. Empty lists are not applied.
///
/// Within one field the values are OR-ed; across fields the criteria are AND-ed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub experience: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub education: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub salary: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub author: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

impl Filters {
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
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Relevance,
    Date,
    Title,
    Salary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    #[serde(default)]
    pub field: SortField,
    #[serde(default)]
    pub order: SortOrder,
}

impl Sort {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Sort { field, order }
    }
}

/// 1-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
}

impl Pagination {
    pub fn new(page: usize, limit: usize) -> Self {
        Pagination { page, limit }
    }

    /// Start offset of this page within the sorted result list.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// A structured search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    #[serde(default)]
    pub query: String,
    #[serde(default, rename = "type")]
    pub kind: TypeFilter,
    #[serde(default)]
    pub filters: Filters,
    #[serde(default)]
    pub sort: Sort,
    /// Falls back to page 1 of `SearchConfig::default_page_size` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Query {
            query: text.into(),
            ..Query::default()
        }
    }

    pub fn of_type(mut self, kind: impl Into<TypeFilter>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    pub fn sort(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort = Sort::new(field, order);
        self
    }

    pub fn page(mut self, page: usize, limit: usize) -> Self {
        self.pagination = Some(Pagination::new(page, limit));
        self
    }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// A result copy of a stored document, annotated for this query only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredDocument {
    #[serde(flatten)]
    pub document: Document,
    pub score: f64,
    pub highlights: Vec<String>,
}

/// Value → count per facetable field, computed over the whole match set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    pub location: BTreeMap<String, usize>,
    #[serde(rename = "type")]
    pub kind: BTreeMap<DocType, usize>,
    pub category: BTreeMap<String, usize>,
}

/// One page of results plus whole-set aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub documents: Vec<ScoredDocument>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub facets: Facets,
    /// Alternative terms, only populated when the page came back empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    /// Wall-clock time spent in the pipeline, milliseconds.
    pub search_time: f64,
}

/// An indexed token and how many documents contain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermFrequency {
    pub term: String,
    pub doc_count: usize,
}

/// Point-in-time snapshot of index size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_documents: usize,
    pub total_terms: usize,
    pub documents_by_type: BTreeMap<DocType, usize>,
    /// Mean of `title + content` character counts.
    pub average_document_length: f64,
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::index::SearchIndex;
use crate::types::{DocType, Document, Metadata};
use chrono::{DateTime, Utc};

/// Create a document with empty metadata.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: &str, kind: DocType, title: &str, content: &str) -> Document {
    Document::new(id, kind, title, content)
}

/// Create a document with a location.
pub fn make_doc_at(id: &str, kind: DocType, title: &str, content: &str, location: &str) -> Document {
    make_doc(id, kind, title, content).with_metadata(Metadata {
        location: Some(location.to_string()),
        ..Metadata::default()
    })
}

/// Create a dated document.
pub fn make_dated_doc(id: &str, title: &str, date: &str) -> Document {
    make_doc(id, DocType::Drive, title, "").with_metadata(Metadata {
        date: Some(date.to_string()),
        ..Metadata::default()
    })
}

/// The remote backend drive: "backend" in the title.
pub fn backend_drive() -> Document {
    make_doc_at(
        "d1",
        DocType::Drive,
        "Backend Engineer",
        "Go and distributed systems",
        "Remote",
    )
}

/// The onsite intern drive: "backend" only in the body.
pub fn intern_drive() -> Document {
    make_doc_at("d2", DocType::Drive, "Intern", "Learn backend basics", "Onsite")
}

/// A student profile mentioning backend work.
pub fn backend_student() -> Document {
    make_doc("s1", DocType::Student, "Asha Rao", "backend projects in rust")
}

/// An index holding [`backend_drive`], [`intern_drive`] and [`backend_student`].
pub fn sample_index() -> SearchIndex {
    let mut index = SearchIndex::new();
    index.add_documents(vec![backend_drive(), intern_drive(), backend_student()]);
    index
}

/// `count` job documents `j00`, `j01`, ... all containing "engineer".
pub fn numbered_jobs(count: usize) -> Vec<Document> {
    (0..count)
        .map(|i| {
            make_doc(
                &format!("j{:02}", i),
                DocType::Job,
                &format!("Role {}", i),
                "software engineer",
            )
        })
        .collect()
}

/// A fixed clock, so recency boosts are reproducible.
pub fn fixed_now() -> DateTime<Utc> {
    // 2025-01-01T00:00:00Z
    DateTime::from_timestamp(1_735_689_600, 0).unwrap_or_default()
}

//! Shared test utilities and fixtures.

#![allow(dead_code)]

use campus_search::{check_index, DocType, Document, Metadata, SearchIndex, SearchResults};

// Re-export canonical test utilities from campus_search::testing
pub use campus_search::testing::{fixed_now, make_doc, numbered_jobs};

// ============================================================================
// CORPUS
// ============================================================================

struct Meta<'a> {
    location: Option<&'a str>,
    category: Option<&'a str>,
    date: Option<&'a str>,
    salary: Option<&'a str>,
    status: Option<&'a str>,
    skills: &'a [&'a str],
}

const NO_META: Meta<'static> = Meta {
    location: None,
    category: None,
    date: None,
    salary: None,
    status: None,
    skills: &[],
};

fn doc(id: &str, kind: DocType, title: &str, content: &str, meta: Meta<'_>) -> Document {
    Document::new(id, kind, title, content).with_metadata(Metadata {
        location: meta.location.map(str::to_string),
        category: meta.category.map(str::to_string),
        date: meta.date.map(str::to_string),
        salary: meta.salary.map(str::to_string),
        status: meta.status.map(str::to_string),
        skills: meta.skills.iter().map(|s| s.to_string()).collect(),
        ..Metadata::default()
    })
}

/// A small placement corpus covering every facet and sort key.
///
/// | id | type    | location  | category    | date       | salary    |
/// |----|---------|-----------|-------------|------------|-----------|
/// | c1 | company | Bangalore | Data        |            |           |
/// | d1 | drive   | Remote    | Engineering | 2024-12-01 | 12,00,000 |
/// | d2 | drive   | Pune      | Engineering | 2024-06-01 | 4,00,000  |
/// | d3 | drive   | Bangalore | Data        | 2024-10-15 | 15,00,000 |
/// | j1 | job     | Remote    | Engineering | 2024-11-20 | 9,00,000  |
/// | j2 | job     | Hyderabad | Data        | 2024-09-01 | TBD       |
/// | r1 | resume  |           |             |            |           |
/// | s1 | student | Chennai   |             |            |           |
pub fn placement_corpus() -> Vec<Document> {
    vec![
        doc(
            "c1",
            DocType::Company,
            "Acme Analytics",
            "Hiring data and backend engineers",
            Meta {
                location: Some("Bangalore"),
                category: Some("Data"),
                ..NO_META
            },
        ),
        doc(
            "d1",
            DocType::Drive,
            "Backend Engineer",
            "Go and distributed systems",
            Meta {
                location: Some("Remote"),
                category: Some("Engineering"),
                date: Some("2024-12-01"),
                salary: Some("12,00,000"),
                status: Some("open"),
                skills: &["Go", "Kubernetes"],
            },
        ),
        doc(
            "d2",
            DocType::Drive,
            "Intern",
            "Learn backend basics",
            Meta {
                location: Some("Pune"),
                category: Some("Engineering"),
                date: Some("2024-06-01"),
                salary: Some("4,00,000"),
                status: Some("closed"),
                skills: &[],
            },
        ),
        doc(
            "d3",
            DocType::Drive,
            "Data Scientist",
            "Machine learning and statistics",
            Meta {
                location: Some("Bangalore"),
                category: Some("Data"),
                date: Some("2024-10-15"),
                salary: Some("15,00,000"),
                status: Some("open"),
                skills: &["Python", "Machine Learning"],
            },
        ),
        doc(
            "j1",
            DocType::Job,
            "Frontend Developer",
            "React and JavaScript user interfaces",
            Meta {
                location: Some("Remote"),
                category: Some("Engineering"),
                date: Some("2024-11-20"),
                salary: Some("9,00,000"),
                status: None,
                skills: &["JavaScript", "React", "TypeScript"],
            },
        ),
        doc(
            "j2",
            DocType::Job,
            "ML Engineer",
            "learning machine models in production",
            Meta {
                location: Some("Hyderabad"),
                category: Some("Data"),
                date: Some("2024-09-01"),
                salary: Some("TBD"),
                status: None,
                skills: &["Python", "PyTorch"],
            },
        ),
        doc(
            "r1",
            DocType::Resume,
            "Asha Rao Resume",
            "Rust, Go, distributed systems internship",
            NO_META,
        ),
        doc(
            "s1",
            DocType::Student,
            "Asha Rao",
            "Backend projects in Rust and Go",
            Meta {
                location: Some("Chennai"),
                skills: &["Rust", "Go"],
                ..NO_META
            },
        ),
    ]
}

/// Index the placement corpus.
pub fn build_placement_index() -> SearchIndex {
    build_index(placement_corpus())
}

pub fn build_index(docs: Vec<Document>) -> SearchIndex {
    let mut index = SearchIndex::new();
    index.add_documents(docs);
    assert_index_well_formed(&index);
    index
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Panic with the violated invariant if the index has drifted from its store.
pub fn assert_index_well_formed(index: &SearchIndex) {
    if let Err(err) = check_index(index) {
        panic!("index invariant violated: {}", err);
    }
}

/// Ids of the returned page, in rank order.
pub fn ids(results: &SearchResults) -> Vec<&str> {
    results
        .documents
        .iter()
        .map(|d| d.document.id.as_str())
        .collect()
}

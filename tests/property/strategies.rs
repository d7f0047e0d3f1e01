//! Generators shared by the property suites.

use campus_search::{DocType, Document, Metadata};
use proptest::prelude::*;

/// Lowercase word-like strings. Stop words and single letters are fair game.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,7}").unwrap()
}

/// A short run of words, occasionally capitalized or punctuated.
pub fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (word_strategy(), any::<bool>(), prop::sample::select(vec![" ", ", ", ". ", "-"])),
        0..8,
    )
    .prop_map(|words| {
        let mut text = String::new();
        for (word, upper, sep) in words {
            if upper {
                text.push_str(&word.to_uppercase());
            } else {
                text.push_str(&word);
            }
            text.push_str(sep);
        }
        text
    })
}

pub fn kind_strategy() -> impl Strategy<Value = DocType> {
    prop::sample::select(DocType::ALL.to_vec())
}

pub fn location_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec![
        "Remote".to_string(),
        "Pune".to_string(),
        "Bangalore".to_string(),
    ]))
}

/// A document whose id is drawn from a small pool, so collisions (updates) happen.
pub fn document_strategy() -> impl Strategy<Value = Document> {
    (
        0..6usize,
        kind_strategy(),
        text_strategy(),
        text_strategy(),
        location_strategy(),
    )
        .prop_map(|(id, kind, title, content, location)| {
            Document::new(format!("doc{}", id), kind, title, content).with_metadata(Metadata {
                location,
                ..Metadata::default()
            })
        })
}

pub fn corpus_strategy() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(document_strategy(), 0..12)
}

/// One mutation against the index.
#[derive(Debug, Clone)]
pub enum Op {
    Add(Document),
    Update(Document),
    Remove(String),
}

pub fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        document_strategy().prop_map(Op::Add),
        document_strategy().prop_map(Op::Update),
        (0..6usize).prop_map(|id| Op::Remove(format!("doc{}", id))),
    ]
}

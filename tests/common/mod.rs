//! Shared test utilities and fixtures.

#![allow(dead_code)]

use findex::testing::{make_item, make_tagged_item, CourseItem};

// Re-export canonical test utilities from findex::testing
pub use findex::testing::make_engine;

/// A small catalog shaped like a real fetched snapshot: quizzes and
/// course modules across a few subjects.
pub fn catalog() -> Vec<CourseItem> {
    vec![
        make_tagged_item("alg-1", "Álgebra Linear", &["matemática", "vetores"]),
        make_tagged_item("geo-1", "Geometria Espacial", &["matemática", "sólidos"]),
        make_tagged_item("gram-1", "Gramática: crase e acentuação", &["português"]),
        make_item("hist-1", "História do Brasil Colônia"),
        make_tagged_item("quim-1", "Química Orgânica", &["funções", "vestibular"]),
    ]
}

/// Ids of the given results, in result order.
pub fn ids(hits: &[&CourseItem]) -> Vec<String> {
    hits.iter().map(|item| item.id.clone()).collect()
}

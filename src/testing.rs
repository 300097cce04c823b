//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixture records and selector tables to avoid
//! duplication between the lib tests, `tests/`, and benches.

#![doc(hidden)]

use serde::{Deserialize, Serialize};

use crate::engine::SearchEngine;
use crate::types::{FieldSelector, FieldValue};

/// A catalog entry the way the consuming UI sees it: a quiz or course
/// module fetched as part of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

pub fn item_id(item: &CourseItem) -> &str {
    &item.id
}

pub fn item_title(item: &CourseItem) -> FieldValue<'_> {
    FieldValue::Text(&item.title)
}

pub fn item_description(item: &CourseItem) -> FieldValue<'_> {
    if item.description.is_empty() {
        FieldValue::Missing
    } else {
        FieldValue::Text(&item.description)
    }
}

pub fn item_tags(item: &CourseItem) -> FieldValue<'_> {
    FieldValue::TextList(&item.tags)
}

/// The canonical selector table: title, description, tags.
pub const COURSE_FIELDS: &[FieldSelector<CourseItem>] =
    &[item_title, item_description, item_tags];

/// Create a simple test item with just an id and title.
pub fn make_item(id: &str, title: &str) -> CourseItem {
    CourseItem {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        tags: Vec::new(),
    }
}

/// Create a test item with tags.
pub fn make_tagged_item(id: &str, title: &str, tags: &[&str]) -> CourseItem {
    CourseItem {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Create a test item with a description.
pub fn make_described_item(id: &str, title: &str, description: &str) -> CourseItem {
    CourseItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tags: Vec::new(),
    }
}

/// Build an engine over the canonical selector table.
pub fn make_engine(items: Vec<CourseItem>) -> SearchEngine<CourseItem> {
    SearchEngine::new(items, item_id, COURSE_FIELDS)
}

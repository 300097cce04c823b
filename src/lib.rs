//! In-memory inverted index for free-text, multi-field filtering.
//!
//! This crate answers one question fast and deterministically: given a
//! point-in-time snapshot of records (quizzes, course modules, any value
//! with a string id) and a free-text query, which records match? A query
//! token matches by *prefix* against indexed terms, multiple tokens are
//! ANDed, and an empty query means "no filter" and returns everything.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ tokenize.rs │────▶│   index.rs   │────▶│  search.rs   │
//! │ (normalize, │     │ (build_index:│     │ (prefix match│
//! │  tokenize)  │     │  store+terms)│     │  + AND)      │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                             │                    │
//!                             ▼                    ▼
//!                     ┌─────────────────────────────────┐
//!                     │           engine.rs             │
//!                     │  (SearchEngine: owns the store  │
//!                     │   and index, exposes search)    │
//!                     └─────────────────────────────────┘
//! ```
//!
//! The engine is immutable after construction. There is no incremental
//! update: refreshing data means building a new engine from a fresh
//! snapshot. That single decision is why concurrent reads need no locks
//! and why results are reproducible call after call.
//!
//! # Usage
//!
//! ```
//! use findex::{FieldValue, SearchEngine};
//!
//! struct Quiz {
//!     id: String,
//!     title: String,
//! }
//!
//! fn quiz_id(q: &Quiz) -> &str {
//!     &q.id
//! }
//!
//! fn quiz_title(q: &Quiz) -> FieldValue<'_> {
//!     FieldValue::Text(&q.title)
//! }
//!
//! let quizzes = vec![
//!     Quiz { id: "1".into(), title: "Álgebra Linear".into() },
//!     Quiz { id: "2".into(), title: "Geometria Espacial".into() },
//! ];
//!
//! let engine = SearchEngine::new(quizzes, quiz_id, &[quiz_title]);
//!
//! let hits = engine.search("geo");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id, "2");
//! ```

// Module declarations
mod engine;
mod index;
mod search;
pub mod testing;
mod tokenize;
mod types;
pub mod verify;

// Re-exports for public API
pub use engine::SearchEngine;
pub use tokenize::{normalize, tokenize, MIN_TOKEN_CHARS};
pub use types::{DocId, FieldSelector, FieldValue, IdSelector, TermIndex};
pub use verify::{verify_index, InvariantError};

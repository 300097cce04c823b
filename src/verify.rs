//! Index invariant checking.
//!
//! The build path is supposed to uphold these invariants by construction;
//! this module is the runtime witness. Tests call
//! [`SearchEngine::verify`](crate::SearchEngine::verify) after every
//! build, so a regression in the builder shows up as a typed error naming
//! the violated invariant instead of as silently wrong search results.

use std::error::Error;
use std::fmt;

use crate::tokenize::MIN_TOKEN_CHARS;
use crate::types::{DocId, TermIndex};

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Vocabulary is not sorted strictly ascending at `position`.
    UnsortedVocabulary { position: usize },
    /// An indexed term is shorter than the tokenizer's minimum length.
    ShortTerm { term: String },
    /// A term has no postings (every indexed term must match something).
    EmptyPostingList { term: String },
    /// A posting list is not strictly ascending at `position`.
    UnsortedPostingList { term: String, position: usize },
    /// A posting references a position outside the record store.
    DanglingPosting {
        term: String,
        doc_id: DocId,
        num_records: usize,
    },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::UnsortedVocabulary { position } => {
                write!(f, "vocabulary not sorted at position {}", position)
            }
            InvariantError::ShortTerm { term } => {
                write!(
                    f,
                    "term '{}' shorter than minimum token length {}",
                    term, MIN_TOKEN_CHARS
                )
            }
            InvariantError::EmptyPostingList { term } => {
                write!(f, "posting list for '{}' is empty", term)
            }
            InvariantError::UnsortedPostingList { term, position } => {
                write!(
                    f,
                    "posting list for '{}' not strictly ascending at position {}",
                    term, position
                )
            }
            InvariantError::DanglingPosting {
                term,
                doc_id,
                num_records,
            } => {
                write!(
                    f,
                    "posting for '{}' references doc {} but only {} records are stored",
                    term,
                    doc_id.get(),
                    num_records
                )
            }
        }
    }
}

impl Error for InvariantError {}

/// Check every structural invariant of a term index against the store it
/// was built with. Returns the first violation found.
pub fn verify_index(index: &TermIndex, num_records: usize) -> Result<(), InvariantError> {
    let terms = index.terms();
    for (i, window) in terms.windows(2).enumerate() {
        if window[0] >= window[1] {
            return Err(InvariantError::UnsortedVocabulary { position: i + 1 });
        }
    }

    for (term, postings) in index.entries() {
        if term.chars().count() < MIN_TOKEN_CHARS {
            return Err(InvariantError::ShortTerm {
                term: term.to_string(),
            });
        }
        if postings.is_empty() {
            return Err(InvariantError::EmptyPostingList {
                term: term.to_string(),
            });
        }
        for (i, window) in postings.windows(2).enumerate() {
            if window[0] >= window[1] {
                return Err(InvariantError::UnsortedPostingList {
                    term: term.to_string(),
                    position: i + 1,
                });
            }
        }
        for doc_id in postings {
            if doc_id.as_usize() >= num_records {
                return Err(InvariantError::DanglingPosting {
                    term: term.to_string(),
                    doc_id: *doc_id,
                    num_records,
                });
            }
        }
    }

    Ok(())
}

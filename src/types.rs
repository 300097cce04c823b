//! The building blocks of a filter index.
//!
//! These types define how records, field selectors, and the term index fit
//! together. The invariants below are what the rest of the crate leans on;
//! `verify::verify_index` checks every one of them at runtime.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **TermIndex**: `terms.len() = postings.len()`, `terms` sorted and
//!   unique. Binary-search prefix lookup returns garbage otherwise.
//! - **Posting list**: strictly ascending `DocId`s, never empty. Ascending
//!   order is what makes intersection a linear merge and result ordering
//!   equal to construction order.
//! - **DocId**: `doc_id < records.len()`. Every posting resolves to a
//!   stored record.

use serde::{Deserialize, Serialize};

/// Type-safe record position identifier.
///
/// A `DocId` is the record's position in construction order among the
/// records that survived the store pass. Prevents accidentally mixing up a
/// posting with some other integer, and makes "order by original position"
/// a plain sort on the id itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    /// Create a new DocId, validating it's within bounds.
    #[inline]
    pub fn new(id: u32, num_records: usize) -> Option<Self> {
        if (id as usize) < num_records {
            Some(DocId(id))
        } else {
            None
        }
    }

    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl From<DocId> for usize {
    fn from(id: DocId) -> Self {
        id.0 as usize
    }
}

/// One field's contribution to the index for one record.
///
/// Selectors yield either a single string, a list of strings (tags,
/// categories), or nothing at all for records that lack the field.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    /// A single text field, e.g. a title.
    Text(&'a str),
    /// A list of text values, e.g. tags. Each element is tokenized
    /// independently.
    TextList(&'a [String]),
    /// The record has no value for this field. Contributes no tokens.
    Missing,
}

/// Accessor for a record's unique id.
///
/// An empty id is a precondition violation: the record is skipped entirely
/// at construction (neither stored nor indexed).
pub type IdSelector<R> = for<'a> fn(&'a R) -> &'a str;

/// Accessor for one indexable field of a record.
pub type FieldSelector<R> = for<'a> fn(&'a R) -> FieldValue<'a>;

/// Term index: sorted vocabulary with parallel posting lists.
///
/// The vocabulary is a plain sorted `Vec<String>` rather than a trie or
/// automaton -- for the catalog sizes this crate targets, a binary-search
/// range over a sorted vector beats the setup cost of anything fancier and
/// stays trivially debuggable.
#[derive(Debug, Clone, Default)]
pub struct TermIndex {
    /// Sorted, duplicate-free indexed terms.
    pub(crate) terms: Vec<String>,
    /// Posting list per term, parallel to `terms`. Strictly ascending.
    pub(crate) postings: Vec<Vec<DocId>>,
}

impl TermIndex {
    /// Number of distinct indexed terms.
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// The sorted vocabulary.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Iterate over `(term, posting list)` pairs in vocabulary order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[DocId])> {
        self.terms
            .iter()
            .map(String::as_str)
            .zip(self.postings.iter().map(Vec::as_slice))
    }

    /// Half-open range of vocabulary positions whose terms start with
    /// `prefix`.
    ///
    /// Terms sharing a prefix are contiguous in sorted order: within the
    /// region of terms `>= prefix`, the ones that start with it come
    /// first, so two `partition_point` calls bound the block.
    pub(crate) fn prefix_range(&self, prefix: &str) -> std::ops::Range<usize> {
        let start = self.terms.partition_point(|t| t.as_str() < prefix);
        let len = self.terms[start..].partition_point(|t| t.starts_with(prefix));
        start..start + len
    }

    /// Union of the posting lists of every term starting with `prefix`,
    /// as a sorted, duplicate-free id list.
    pub(crate) fn matching_docs(&self, prefix: &str) -> Vec<DocId> {
        let range = self.prefix_range(prefix);
        let mut docs: Vec<DocId> = Vec::new();
        for postings in &self.postings[range] {
            docs.extend_from_slice(postings);
        }
        docs.sort_unstable();
        docs.dedup();
        docs
    }
}

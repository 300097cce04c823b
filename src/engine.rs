//! The engine façade.
//!
//! [`SearchEngine`] owns the record store and term index built from one
//! snapshot and exposes `search`. It is immutable after construction:
//! there is no insert, update, or delete. Refreshing data means building
//! a new engine from a fresh snapshot, which is what makes any number of
//! concurrent `search` calls safe without a single lock.

use crate::index::build_index;
use crate::search::match_positions;
use crate::types::{FieldSelector, IdSelector, TermIndex};
use crate::verify::{verify_index, InvariantError};

/// In-memory filter engine over a point-in-time record snapshot.
///
/// Generic over the caller's record type: the engine never copies field
/// data, it only keeps tokens and positions, and hands out `&R` in
/// results.
#[derive(Debug, Clone)]
pub struct SearchEngine<R> {
    /// Surviving records in construction order. Doubles as the id →
    /// record store: a posting's `DocId` is an index into this vec.
    records: Vec<R>,
    index: TermIndex,
}

impl<R> SearchEngine<R> {
    /// Build an engine from a record snapshot.
    ///
    /// `id` yields each record's unique key; records with an empty id are
    /// skipped, and on duplicate ids the later record wins (and alone
    /// contributes postings). `fields` is the ordered list of accessors
    /// whose text gets indexed.
    pub fn new(records: Vec<R>, id: IdSelector<R>, fields: &[FieldSelector<R>]) -> Self {
        let (records, index) = build_index(records, id, fields);
        SearchEngine { records, index }
    }

    /// Filter the collection with a free-text query.
    ///
    /// A query with no usable tokens (empty, whitespace, punctuation,
    /// only short words) returns **all** records -- the no-filter state.
    /// Otherwise every query token must prefix-match some indexed term of
    /// a record for it to appear. Results always come back in original
    /// construction order, so repeated identical calls return identical
    /// sequences.
    pub fn search(&self, query: &str) -> Vec<&R> {
        match match_positions(&self.index, query) {
            None => self.records.iter().collect(),
            Some(positions) => positions
                .iter()
                // Positions always resolve under the no-dangling
                // invariant; out-of-range ids are dropped, not panicked
                // on.
                .filter_map(|p| self.records.get(p.as_usize()))
                .collect(),
        }
    }

    /// All stored records in construction order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the engine holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The underlying term index.
    pub fn index(&self) -> &TermIndex {
        &self.index
    }

    /// Check every index invariant. Cheap relative to construction; handy
    /// in tests and debug assertions.
    pub fn verify(&self) -> Result<(), InvariantError> {
        verify_index(&self.index, self.records.len())
    }
}

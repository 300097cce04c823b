//! Query matching.
//!
//! A query token matches an indexed term when the term *starts with* the
//! token, so partial words work: "geo" finds "geometria". Per-token match
//! sets are combined by intersection -- a record must satisfy every query
//! token to appear at all. No scoring, no ranking: results are a boolean
//! match set ordered by original record position.

use std::cmp::Ordering;

use crate::tokenize::tokenize;
use crate::types::{DocId, TermIndex};

/// Resolve a free-text query to matching record positions.
///
/// Returns `None` when the query has no usable tokens (empty string,
/// whitespace, punctuation, or only short words). That is the "no filter"
/// state, which the caller resolves to the full collection -- not an
/// error and not an empty result.
///
/// The returned list is sorted ascending; since `DocId` is construction
/// position, that *is* the required result order.
pub(crate) fn match_positions(index: &TermIndex, query: &str) -> Option<Vec<DocId>> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return None;
    }

    let mut matched: Option<Vec<DocId>> = None;
    for token in &tokens {
        let docs = index.matching_docs(token);
        let merged = match matched {
            None => docs,
            Some(acc) => intersect(&acc, &docs),
        };
        // One empty set empties the whole AND; no point scanning further.
        if merged.is_empty() {
            return Some(merged);
        }
        matched = Some(merged);
    }
    matched
}

/// Intersection of two sorted, duplicate-free id lists, via linear merge.
fn intersect(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

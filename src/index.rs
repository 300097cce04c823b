//! Index construction.
//!
//! Two passes over the snapshot:
//!
//! 1. **Store pass**: keep records with a usable id, applying
//!    last-write-wins on duplicate ids.
//! 2. **Indexing pass**: tokenize every selected field of each surviving
//!    record, deduplicate tokens per record, and append the record's
//!    position to each token's posting list.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTING_LIST_SORTED**: positions are visited in ascending order,
//!    so every posting list comes out strictly ascending without a sort.
//! 2. **NO_DANGLING**: postings only reference positions of stored
//!    records, because both passes walk the same `stored` vec.
//! 3. **SURVIVOR_ONLY**: a record replaced by a duplicate id contributes
//!    no postings -- indexing runs strictly after the store pass.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::tokenize::tokenize;
use crate::types::{DocId, FieldSelector, FieldValue, IdSelector, TermIndex};

/// Build the record store and term index from a snapshot.
///
/// Records with an empty id are skipped entirely: this is a defined
/// precondition violation, not a fatal error, which keeps construction
/// total over noisy input. On duplicate ids the later record wins and
/// keeps the earlier occurrence's slot, so construction order stays
/// stable under re-sends of the same snapshot.
///
/// Cost is linear in the total characters across all selected fields.
pub(crate) fn build_index<R>(
    records: Vec<R>,
    id: IdSelector<R>,
    fields: &[FieldSelector<R>],
) -> (Vec<R>, TermIndex) {
    // Store pass.
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut stored: Vec<R> = Vec::new();
    for record in records {
        let key = id(&record);
        if key.is_empty() {
            continue;
        }
        match slots.entry(key.to_string()) {
            Entry::Occupied(slot) => stored[*slot.get()] = record,
            Entry::Vacant(slot) => {
                slot.insert(stored.len());
                stored.push(record);
            }
        }
    }

    // Indexing pass over the survivors.
    let mut terms: HashMap<String, Vec<DocId>> = HashMap::new();
    for (position, record) in stored.iter().enumerate() {
        let record_tokens = collect_tokens(record, fields);
        for token in record_tokens {
            terms.entry(token).or_default().push(DocId(position as u32));
        }
    }

    // Freeze: sorted vocabulary with parallel posting lists, enabling
    // binary-search prefix ranges.
    let mut entries: Vec<(String, Vec<DocId>)> = terms.into_iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));

    let mut vocabulary = Vec::with_capacity(entries.len());
    let mut postings = Vec::with_capacity(entries.len());
    for (term, list) in entries {
        vocabulary.push(term);
        postings.push(list);
    }

    (
        stored,
        TermIndex {
            terms: vocabulary,
            postings,
        },
    )
}

/// Deduplicated token set across every selected field of one record.
///
/// A token appearing twice in one record contributes one posting, not two.
fn collect_tokens<R>(record: &R, fields: &[FieldSelector<R>]) -> HashSet<String> {
    let mut tokens = HashSet::new();
    for selector in fields {
        match selector(record) {
            FieldValue::Text(text) => tokens.extend(tokenize(text)),
            FieldValue::TextList(items) => {
                for item in items {
                    tokens.extend(tokenize(item));
                }
            }
            FieldValue::Missing => {}
        }
    }
    tokens
}

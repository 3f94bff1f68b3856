use crate::{key::Key, record::Record, sort::Comparator};

// List reducer set: ordered sequence of records, identity unique,
// order caller-controlled.

/// Upsert each payload record by identity.
///
/// Matched identities are replaced at their original position; the rest
/// are appended in payload order. The identity snapshot is taken before
/// the batch, so records appended by this batch never turn later payload
/// items into replacements. The result is sorted iff a comparator is
/// active.
pub(super) fn insert(
    mut state: Vec<Record>,
    payload: Vec<Record>,
    key_name: &str,
    sort: Option<&Comparator>,
) -> Vec<Record> {
    let existing: Vec<Key> = state.iter().map(|record| record.key(key_name)).collect();

    for record in payload {
        let key = record.key(key_name);
        match existing.iter().position(|k| *k == key) {
            Some(index) => state[index] = record,
            None => state.push(record),
        }
    }

    if let Some(sort) = sort {
        state.sort_by(|a, b| sort.cmp(a, b));
    }

    state
}

/// Full-collection overwrite: the payload records in payload order,
/// sorted iff a comparator is active. Not a merge.
pub(super) fn replace(payload: Vec<Record>, sort: Option<&Comparator>) -> Vec<Record> {
    let mut state = payload;

    if let Some(sort) = sort {
        state.sort_by(|a, b| sort.cmp(a, b));
    }

    state
}

/// Remove the first remaining element matching each payload identity.
///
/// Lookup is an identity search per item against the live sequence,
/// never a cached position. Unmatched identities are ignored.
pub(super) fn delete(mut state: Vec<Record>, payload: &[Record], key_name: &str) -> Vec<Record> {
    for record in payload {
        let key = record.key(key_name);
        if let Some(index) = state.iter().position(|r| r.key(key_name) == key) {
            state.remove(index);
        }
    }

    state
}

/// Re-sort under the resolved comparator; contents unchanged. The sort
/// is stable, so equal-comparing records keep their relative order.
pub(super) fn sort(mut state: Vec<Record>, sort: &Comparator) -> Vec<Record> {
    state.sort_by(|a, b| sort.cmp(a, b));

    state
}

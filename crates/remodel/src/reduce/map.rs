use crate::{key::Key, record::Record};
use std::collections::BTreeMap;

// Map reducer set: identity-keyed records. No ordering concepts; a
// `sort` suffix against this shape is a dispatcher-level no-op.

/// Set each payload record under its identity, overwriting existing
/// entries. All other entries are untouched.
pub(super) fn insert(
    mut state: BTreeMap<Key, Record>,
    payload: Vec<Record>,
    key_name: &str,
) -> BTreeMap<Key, Record> {
    for record in payload {
        state.insert(record.key(key_name), record);
    }

    state
}

/// Brand-new mapping containing only the payload records.
pub(super) fn replace(payload: Vec<Record>, key_name: &str) -> BTreeMap<Key, Record> {
    payload
        .into_iter()
        .map(|record| (record.key(key_name), record))
        .collect()
}

/// Remove the entry under each payload identity; absent keys are no-ops.
pub(super) fn delete(
    mut state: BTreeMap<Key, Record>,
    payload: &[Record],
    key_name: &str,
) -> BTreeMap<Key, Record> {
    for record in payload {
        state.remove(&record.key(key_name));
    }

    state
}

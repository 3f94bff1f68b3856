use crate::value::Value;

// Static (single-value) reducer set. No identity or ordering concepts
// apply; the payload is treated opaquely, raw scalars included.

/// The payload replaces the state verbatim.
pub(super) fn insert(payload: Option<&Value>) -> Value {
    payload.cloned().unwrap_or(Value::Null)
}

/// Identical to insert for this shape.
pub(super) fn replace(payload: Option<&Value>) -> Value {
    insert(payload)
}

/// Collapse to the null sentinel.
pub(super) const fn delete() -> Value {
    Value::Null
}

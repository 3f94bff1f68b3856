use crate::{key::Key, record::Record, value::Value};

///
/// Op
///
/// Operation resolved once per call from the action type suffix.
/// `Other` carries an unrecognized token; for map-shaped reducers a
/// normalization step rewrites it into the keyed upsert/remove
/// shorthand before dispatch.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) enum Op {
    Insert,
    Replace,
    Delete,
    Clear,
    Sort,
    Other(String),
}

impl Op {
    pub(super) fn parse(suffix: &str) -> Self {
        match suffix {
            "insert" => Self::Insert,
            "replace" => Self::Replace,
            "delete" => Self::Delete,
            "clear" => Self::Clear,
            "sort" => Self::Sort,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Extract the operation suffix from an action type.
///
/// Returns `None` when the action is not addressed to `namespace`:
/// wrong prefix, empty suffix, or a nested path.
pub(super) fn suffix<'a>(namespace: &str, kind: &'a str) -> Option<&'a str> {
    let rest = kind.strip_prefix(namespace)?.strip_prefix('/')?;

    (!rest.is_empty() && !rest.contains('/')).then_some(rest)
}

/// Map-shape implicit shorthand: rewrite an unknown suffix into an
/// upsert or removal addressed by the suffix token.
///
/// A single-record payload becomes an insert with the token injected as
/// its identity; an absent payload becomes a delete of that identity.
/// Anything else (a batch, a raw scalar) is not rewritten and falls
/// through to unknown-op handling.
pub(super) fn resolve_implicit(
    token: &str,
    key_name: &str,
    payload: Option<&Value>,
) -> Option<(Op, Value)> {
    let key = Key::parse_token(token);

    match payload {
        Some(Value::Record(record)) => {
            let mut record = record.clone();
            record.insert(key_name, Value::from(key));

            Some((Op::Insert, Value::Record(record)))
        }
        None => {
            let mut record = Record::new();
            record.insert(key_name, Value::from(key));

            Some((Op::Delete, Value::Record(record)))
        }
        Some(_) => None,
    }
}

use crate::{key::Key, options::Shape, record::Record, value::Value};
use serde::Serialize;
use std::collections::BTreeMap;

///
/// State
///
/// One of three shapes, selected at build time and fixed for the
/// reducer's lifetime. Every reduce call returns a brand-new value;
/// inputs are never mutated in place.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum State {
    /// Arbitrary value, replaced wholesale.
    Value(Value),
    /// Ordered sequence of records, identity unique, order significant.
    List(Vec<Record>),
    /// Identity-keyed records, order irrelevant.
    Map(BTreeMap<Key, Record>),
}

impl State {
    /// Canonical empty state for a shape: `null`, `[]`, or `{}`.
    #[must_use]
    pub const fn empty(shape: Shape) -> Self {
        match shape {
            Shape::Static => Self::Value(Value::Null),
            Shape::List => Self::List(Vec::new()),
            Shape::Map => Self::Map(BTreeMap::new()),
        }
    }

    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        if let Self::Value(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&[Record]> {
        if let Self::List(records) = self {
            Some(records.as_slice())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&BTreeMap<Key, Record>> {
        if let Self::Map(records) = self {
            Some(records)
        } else {
            None
        }
    }
}

impl From<Value> for State {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Vec<Record>> for State {
    fn from(records: Vec<Record>) -> Self {
        Self::List(records)
    }
}

impl From<BTreeMap<Key, Record>> for State {
    fn from(records: BTreeMap<Key, Record>) -> Self {
        Self::Map(records)
    }
}

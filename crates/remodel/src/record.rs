use crate::{key::Key, value::Value};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, btree_map};

///
/// Record
///
/// Open field map with one designated identity field. Field order is
/// canonical (sorted by name) and serializes identically to a plain
/// object.
///

#[repr(transparent)]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, Value>);

impl Record {
    /// Create an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Return the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the value of `field`, if present.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Set `field`, returning the previous value if any.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    /// Remove `field`, returning its value if it was present.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Builder-style `insert`.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Iterate over fields in canonical order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Extract this record's identity under the given key field.
    ///
    /// A missing field, or one holding a non-keyable value, yields
    /// `Key::Unit`.
    #[must_use]
    pub fn key(&self, field: &str) -> Key {
        self.get(field)
            .map_or(Key::Unit, |value| Key::try_from(value).unwrap_or(Key::Unit))
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build a [`Record`] from field/value pairs.
///
/// ```ignore
/// let r = record! { "id" => 3, "name" => "ada" };
/// ```
#[macro_export]
macro_rules! record {
    () => { $crate::record::Record::new() };
    ( $( $field:expr => $value:expr ),* $(,)? ) => {{
        let mut record = $crate::record::Record::new();
        $( record.insert($field, $value); )*
        record
    }};
}

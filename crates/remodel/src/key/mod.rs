
use crate::{error::KeyError, value::Value};
use derive_more::Display;
use serde::{Serialize, Serializer};

///
/// Key
///
/// Normalized record identity. Identities are integers or strings at the
/// boundary; `Unit` stands in for a missing or non-keyable identity
/// field. `Unit` keys collide with each other and never match a real
/// identity value.
///
/// Ordering is variant rank, then payload; this backs the map-shaped
/// state container.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Key {
    #[display("{_0}")]
    Int(i64),
    #[display("{_0}")]
    Text(String),
    #[display("?")]
    Unit,
}

impl Key {
    /// Parse an implicit-op token from an action type suffix.
    ///
    /// A decimal integer token addresses a numeric identity, anything
    /// else a text identity, mirroring the string keys such actions are
    /// written with on the wire.
    #[must_use]
    pub fn parse_token(token: &str) -> Self {
        token
            .parse::<i64>()
            .map_or_else(|_| Self::Text(token.to_string()), Self::Int)
    }

    #[must_use]
    pub const fn is_unit(&self) -> bool {
        matches!(self, Self::Unit)
    }
}

impl TryFrom<&Value> for Key {
    type Error = KeyError;

    fn try_from(value: &Value) -> Result<Self, KeyError> {
        match value {
            Value::Int(i) => Ok(Self::Int(*i)),
            Value::Uint(u) => i64::try_from(*u)
                .map(Self::Int)
                .map_err(|_| KeyError::OutOfRange { value: *u }),
            Value::Text(s) => Ok(Self::Text(s.clone())),
            other => Err(KeyError::NotKeyable { kind: other.kind() }),
        }
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Int(i) => Self::Int(i),
            Key::Text(s) => Self::Text(s),
            Key::Unit => Self::Null,
        }
    }
}

// Map-shaped state serializes with identity keys as JSON object keys,
// which must be strings.
impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

use crate::{sort::Comparator, value::Value};
use serde::Serialize;

///
/// Action
///
/// Dispatched message. `kind` is the wire type tag,
/// `"<namespace>/<operation>"`. The payload carries a record, a list of
/// records, or a raw value (static shape only). An attached comparator
/// overrides the configured sort for this call.
///

#[derive(Clone, Debug, Serialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,

    #[serde(skip)]
    pub sort: Option<Comparator>,
}

impl Action {
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
            sort: None,
        }
    }

    /// Attach a payload.
    #[must_use]
    pub fn with_payload(mut self, payload: impl Into<Value>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Attach a per-call comparator override.
    #[must_use]
    pub fn with_sort(mut self, sort: Comparator) -> Self {
        self.sort = Some(sort);
        self
    }

    /// The payload, with an explicit `null` treated the same as absent.
    #[must_use]
    pub fn payload_value(&self) -> Option<&Value> {
        self.payload.as_ref().filter(|value| !value.is_null())
    }
}

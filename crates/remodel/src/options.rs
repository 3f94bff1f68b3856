use crate::{sort::Comparator, state::State};

/// Key field name used when none is configured.
pub const DEFAULT_KEY_NAME: &str = "id";

///
/// Shape
///
/// State shape, chosen once per reducer.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Shape {
    #[default]
    Static,
    List,
    Map,
}

///
/// Options
///
/// Factory configuration; immutable after `build`. Only the per-call
/// comparator on an action is consulted again after construction.
///
/// `initial_state` is checked by presence, not content: an explicitly
/// configured `null` state counts as configured and wins over the
/// shape's canonical empty value.
///

#[derive(Clone, Debug)]
pub struct Options {
    pub shape: Shape,
    pub key_name: String,
    pub sort: Option<Comparator>,
    pub initial_state: Option<State>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            shape: Shape::default(),
            key_name: DEFAULT_KEY_NAME.to_string(),
            sort: None,
            initial_state: None,
        }
    }
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    #[must_use]
    pub fn with_key_name(mut self, key_name: impl Into<String>) -> Self {
        self.key_name = key_name.into();
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: Comparator) -> Self {
        self.sort = Some(sort);
        self
    }

    #[must_use]
    pub fn with_initial_state(mut self, state: impl Into<State>) -> Self {
        self.initial_state = Some(state.into());
        self
    }
}

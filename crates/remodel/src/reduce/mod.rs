mod list;
mod map;
mod op;
mod single;

#[cfg(test)]
mod tests;

use crate::{
    action::Action,
    options::{Options, Shape},
    record::Record,
    sort::{Comparator, key_sort},
    state::State,
    value::Value,
};
use op::Op;
use tracing::warn;

///
/// Reducer
///
/// A pure reducer over one namespace, produced by [`build`].
/// Configuration is fixed at construction; `reduce` is stateless between
/// calls and never fails. Invalid input degrades to returning the state
/// unchanged.
///

#[derive(Clone, Debug)]
pub struct Reducer {
    namespace: String,
    options: Options,
}

/// Build a reducer for `namespace` with the given options.
#[must_use]
pub fn build(namespace: impl Into<String>, options: Options) -> Reducer {
    Reducer {
        namespace: namespace.into(),
        options,
    }
}

impl Reducer {
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Apply one action to the current state.
    ///
    /// `None` is the uninitialized sentinel and yields the configured
    /// initial state (or the shape's canonical empty value) before any
    /// type matching. An action whose type does not carry this reducer's
    /// namespace returns the state unchanged, silently.
    #[must_use]
    pub fn reduce(&self, state: Option<State>, action: &Action) -> State {
        let Some(state) = state else {
            return self.initial_state();
        };
        let Some(suffix) = op::suffix(&self.namespace, &action.kind) else {
            return state;
        };

        let mut payload = action.payload_value().cloned();

        let parsed = Op::parse(suffix);
        let op = if let Op::Other(token) = parsed {
            let rewritten = (self.options.shape == Shape::Map)
                .then(|| op::resolve_implicit(&token, &self.options.key_name, payload.as_ref()))
                .flatten();

            match rewritten {
                Some((implicit, synthesized)) => {
                    payload = Some(synthesized);
                    implicit
                }
                None => return unrecognized(&token, action, state),
            }
        } else {
            parsed
        };

        self.apply(state, &op, payload.as_ref(), action.sort.as_ref())
    }

    fn apply(
        &self,
        state: State,
        op: &Op,
        payload: Option<&Value>,
        sort_override: Option<&Comparator>,
    ) -> State {
        let key_name = &self.options.key_name;
        // per-call override, then configured default
        let sort = sort_override.or(self.options.sort.as_ref());

        match (self.options.shape, op) {
            // clear honors the configured initial state on every shape
            (_, Op::Clear) => self.initial_state(),

            (Shape::Static, Op::Insert) => State::Value(single::insert(payload)),
            (Shape::Static, Op::Replace) => State::Value(single::replace(payload)),
            (Shape::Static, Op::Delete) => State::Value(single::delete()),
            // sort is undefined for a single value
            (Shape::Static, Op::Sort) => state,

            (Shape::List, Op::Insert) => match state {
                State::List(records) if payload.is_some() => {
                    State::List(list::insert(records, batch(payload), key_name, sort))
                }
                other => other,
            },
            (Shape::List, Op::Replace) => State::List(list::replace(batch(payload), sort)),
            (Shape::List, Op::Delete) => match state {
                State::List(records) if payload.is_some() => {
                    State::List(list::delete(records, &batch(payload), key_name))
                }
                other => other,
            },
            (Shape::List, Op::Sort) => match state {
                State::List(records) => {
                    let fallback;
                    let cmp = match sort {
                        Some(cmp) => cmp,
                        None => {
                            fallback = key_sort(key_name);
                            &fallback
                        }
                    };

                    State::List(list::sort(records, cmp))
                }
                other => other,
            },

            (Shape::Map, Op::Insert) => match state {
                State::Map(records) if payload.is_some() => {
                    State::Map(map::insert(records, batch(payload), key_name))
                }
                other => other,
            },
            (Shape::Map, Op::Replace) => State::Map(map::replace(batch(payload), key_name)),
            (Shape::Map, Op::Delete) => match state {
                State::Map(records) if payload.is_some() => {
                    State::Map(map::delete(records, &batch(payload), key_name))
                }
                other => other,
            },
            // maps have no defined order
            (Shape::Map, Op::Sort) => state,

            // rewritten or rejected before dispatch
            (_, Op::Other(_)) => state,
        }
    }

    fn initial_state(&self) -> State {
        self.options
            .initial_state
            .clone()
            .unwrap_or_else(|| State::empty(self.options.shape))
    }
}

fn batch(payload: Option<&Value>) -> Vec<Record> {
    payload.map_or_else(Vec::new, Value::to_records)
}

fn unrecognized(token: &str, action: &Action, state: State) -> State {
    warn!(
        op = token,
        action = %action.kind,
        "unrecognized reducer op; expected insert, replace, delete, clear, or sort"
    );

    state
}

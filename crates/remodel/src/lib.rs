//! remodel: a keyed state-reducer factory.
//!
//! [`build`] takes a namespace and a set of [`options::Options`] and
//! produces a pure reducer mapping `(state, action) -> state` for one of
//! three state shapes: a single value, an ordered list of keyed records,
//! or a map keyed by record identity.
//!
//! Action types follow the wire convention `"<namespace>/<operation>"`
//! with operations `insert`, `replace`, `delete`, `clear`, and `sort`.
//! Map-shaped reducers additionally accept any other suffix as an
//! implicit "upsert/remove by id" shorthand: `"users/42"` with a record
//! payload upserts the record under identity `42`, and with no payload
//! removes it.
//!
//! ```ignore
//! use remodel::prelude::*;
//!
//! let reducer = build("users", Options::new().with_shape(Shape::List));
//! let state = reducer.reduce(None, &Action::new("users/insert")
//!     .with_payload(record! { "id" => 1, "name" => "ada" }));
//! ```
//!
//! Reducers never fail: unaddressed actions and malformed input return
//! the state unchanged, and an unrecognized operation additionally emits
//! a `tracing` warning.

pub mod action;
pub mod error;
pub mod key;
pub mod options;
pub mod record;
pub mod reduce;
pub mod sort;
pub mod state;
pub mod value;

pub use reduce::{Reducer, build};

///
/// Prelude
///
/// Domain vocabulary only; helpers stay in their modules.
///

pub mod prelude {
    pub use crate::{
        action::Action,
        key::Key,
        options::{Options, Shape},
        record::Record,
        reduce::{Reducer, build},
        sort::{Comparator, key_sort},
        state::State,
        value::Value,
    };
}

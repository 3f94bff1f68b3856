use super::*;
use crate::{key::Key, record, value::Value};
use std::collections::BTreeMap;

fn list_reducer() -> Reducer {
    build(
        "test",
        Options::new().with_shape(Shape::List).with_key_name("key"),
    )
}

fn map_reducer() -> Reducer {
    build(
        "test",
        Options::new().with_shape(Shape::Map).with_key_name("key"),
    )
}

fn descending(field: &str) -> Comparator {
    let ascending = key_sort(field);
    Comparator::new(move |a, b| ascending.cmp(b, a))
}

#[test]
fn uninitialized_state_yields_shape_empty() {
    let unaddressed = Action::new("other/insert");

    assert_eq!(
        list_reducer().reduce(None, &unaddressed),
        State::List(Vec::new())
    );
    assert_eq!(
        map_reducer().reduce(None, &unaddressed),
        State::Map(BTreeMap::new())
    );
    assert_eq!(
        build("test", Options::new()).reduce(None, &unaddressed),
        State::Value(Value::Null)
    );
}

#[test]
fn uninitialized_state_yields_configured_initial_state() {
    let reducer = build(
        "test",
        Options::new()
            .with_shape(Shape::List)
            .with_initial_state(Value::Null),
    );

    assert_eq!(
        reducer.reduce(None, &Action::new("other/x")),
        State::Value(Value::Null)
    );
}

#[test]
fn unaddressed_actions_return_state_unchanged() {
    let reducer = list_reducer();
    let state = State::List(vec![record! { "key" => 1 }]);

    for kind in ["other/insert", "test", "test/", "test/a/b", "testx/insert"] {
        let next = reducer.reduce(Some(state.clone()), &Action::new(kind));
        assert_eq!(next, state, "action type {kind:?} must be ignored");
    }
}

#[test]
fn unknown_op_returns_state_unchanged() {
    let reducer = list_reducer();
    let state = State::List(vec![record! { "key" => 1 }]);

    let next = reducer.reduce(
        Some(state.clone()),
        &Action::new("test/upsert").with_payload(record! { "key" => 2 }),
    );

    assert_eq!(next, state);
}

#[test]
fn map_implicit_record_payload_is_an_upsert() {
    let reducer = map_reducer();

    let state = reducer.reduce(
        Some(State::empty(Shape::Map)),
        &Action::new("test/7").with_payload(record! { "value" => "x" }),
    );

    let expected: BTreeMap<Key, _> = [(
        Key::Int(7),
        record! { "key" => 7_i64, "value" => "x" },
    )]
    .into();
    assert_eq!(state, State::Map(expected));
}

#[test]
fn map_implicit_absent_payload_is_a_removal() {
    let reducer = map_reducer();
    let seeded = reducer.reduce(
        Some(State::empty(Shape::Map)),
        &Action::new("test/insert").with_payload(record! { "key" => "foo" }),
    );

    // explicit null payload counts as absent
    let next = reducer.reduce(
        Some(seeded),
        &Action::new("test/foo").with_payload(Value::Null),
    );

    assert_eq!(next, State::Map(BTreeMap::new()));
}

#[test]
fn map_implicit_batch_payload_falls_through_to_unknown() {
    let reducer = map_reducer();
    let state = State::Map(BTreeMap::from([(Key::Int(1), record! { "key" => 1 })]));

    let next = reducer.reduce(
        Some(state.clone()),
        &Action::new("test/7").with_payload(vec![Value::Record(record! { "key" => 7 })]),
    );

    assert_eq!(next, state);
}

#[test]
fn sort_on_map_and_static_shapes_is_a_no_op() {
    let map_state = State::Map(BTreeMap::from([(Key::Int(1), record! { "key" => 1 })]));
    assert_eq!(
        map_reducer().reduce(Some(map_state.clone()), &Action::new("test/sort")),
        map_state
    );

    let static_state = State::Value(Value::Int(5));
    assert_eq!(
        build("test", Options::new()).reduce(Some(static_state.clone()), &Action::new("test/sort")),
        static_state
    );
}

#[test]
fn clear_returns_configured_initial_state_even_if_null() {
    let reducer = build(
        "test",
        Options::new()
            .with_shape(Shape::List)
            .with_initial_state(Value::Null),
    );
    let state = State::List(vec![record! { "id" => 1 }]);

    assert_eq!(
        reducer.reduce(Some(state), &Action::new("test/clear")),
        State::Value(Value::Null)
    );
}

#[test]
fn keyed_inserts_and_deletes_without_payload_are_no_ops() {
    let state = State::List(vec![record! { "key" => 1 }]);

    for kind in ["test/insert", "test/delete"] {
        let next = list_reducer().reduce(Some(state.clone()), &Action::new(kind));
        assert_eq!(next, state, "{kind} without payload must not change state");
    }
}

#[test]
fn replace_without_payload_is_a_full_overwrite_with_nothing() {
    let state = State::List(vec![record! { "key" => 1 }]);
    let next = list_reducer().reduce(Some(state), &Action::new("test/replace"));

    assert_eq!(next, State::List(Vec::new()));
}

#[test]
fn mismatched_state_container_is_returned_unchanged() {
    // a list-shaped reducer handed map state must not invent a container
    let state = State::Map(BTreeMap::from([(Key::Int(1), record! { "key" => 1 })]));

    let next = list_reducer().reduce(
        Some(state.clone()),
        &Action::new("test/insert").with_payload(record! { "key" => 2 }),
    );

    assert_eq!(next, state);
}

#[test]
fn per_call_sort_overrides_configured_default() {
    let reducer = build(
        "test",
        Options::new()
            .with_shape(Shape::List)
            .with_key_name("key")
            .with_sort(key_sort("key")),
    );

    let state = reducer.reduce(
        Some(State::empty(Shape::List)),
        &Action::new("test/insert")
            .with_payload(vec![
                Value::Record(record! { "key" => 1 }),
                Value::Record(record! { "key" => 2 }),
            ])
            .with_sort(descending("key")),
    );

    assert_eq!(
        state,
        State::List(vec![record! { "key" => 2 }, record! { "key" => 1 }])
    );
}

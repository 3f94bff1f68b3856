use super::*;
use crate::record;
use crate::value::compare::{cmp_numeric, cmp_text};
use std::cmp::Ordering;

#[test]
fn from_impls_pick_the_expected_variant() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(-3_i32), Value::Int(-3));
    assert_eq!(Value::from(3_u64), Value::Uint(3));
    assert_eq!(Value::from(1.5), Value::Float(1.5));
    assert_eq!(Value::from("abc"), Value::Text("abc".to_string()));
    assert_eq!(
        Value::from(vec![Value::Int(1)]),
        Value::List(vec![Value::Int(1)])
    );
}

#[test]
fn to_records_normalizes_single_and_batch_payloads() {
    let record = record! { "id" => 1 };

    let single = Value::Record(record.clone());
    assert_eq!(single.to_records(), vec![record.clone()]);

    let batch = Value::List(vec![
        Value::Record(record.clone()),
        Value::Int(9), // skipped
        Value::Record(record! { "id" => 2 }),
    ]);
    assert_eq!(batch.to_records(), vec![record, record! { "id" => 2 }]);

    assert!(Value::Int(9).to_records().is_empty());
    assert!(Value::Null.to_records().is_empty());
}

#[test]
fn cmp_numeric_is_exact_for_mixed_integer_widths() {
    assert_eq!(
        cmp_numeric(&Value::Int(-1), &Value::Uint(0)),
        Some(Ordering::Less)
    );
    assert_eq!(
        cmp_numeric(&Value::Uint(u64::MAX), &Value::Int(i64::MAX)),
        Some(Ordering::Greater)
    );
    assert_eq!(
        cmp_numeric(&Value::Int(7), &Value::Uint(7)),
        Some(Ordering::Equal)
    );
    assert_eq!(
        cmp_numeric(&Value::Float(1.5), &Value::Int(2)),
        Some(Ordering::Less)
    );
}

#[test]
fn cmp_helpers_reject_mixed_kinds() {
    assert_eq!(cmp_numeric(&Value::Int(1), &Value::Text("1".into())), None);
    assert_eq!(cmp_text(&Value::Int(1), &Value::Text("1".into())), None);
    assert_eq!(
        cmp_text(&Value::Text("a".into()), &Value::Text("b".into())),
        Some(Ordering::Less)
    );
}

#[test]
fn json_round_trip_preserves_content() {
    let value = Value::Record(record! {
        "id" => 3,
        "name" => "ada",
        "tags" => vec![Value::Text("x".into()), Value::Null],
        "score" => 1.25,
    });

    let json = serde_json::Value::from(value.clone());
    assert_eq!(Value::from(json), value);
}

#[test]
fn untagged_serde_round_trip() {
    let value = Value::List(vec![
        Value::Null,
        Value::Bool(false),
        Value::Int(-2),
        Value::Text("t".into()),
        Value::Record(record! { "id" => 1 }),
    ]);

    let encoded = serde_json::to_string(&value).unwrap();
    let decoded: Value = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, value);
}

use crate::value::Value;
use std::cmp::Ordering;

/// Cross-variant numeric comparison.
///
/// Integer pairs compare exactly; any pair involving a float compares
/// through f64. Returns `None` when either side is non-numeric.
#[must_use]
pub fn cmp_numeric(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Uint(b)) => Some(cmp_int_uint(*a, *b)),
        (Value::Uint(a), Value::Int(b)) => Some(cmp_int_uint(*b, *a).reverse()),
        (a, b) if a.is_numeric() && b.is_numeric() => to_f64(a).partial_cmp(&to_f64(b)),
        _ => None,
    }
}

/// String comparison; `None` unless both sides are text.
#[must_use]
pub fn cmp_text(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn cmp_int_uint(a: i64, b: u64) -> Ordering {
    match u64::try_from(a) {
        Ok(a) => a.cmp(&b),
        Err(_) => Ordering::Less,
    }
}

#[expect(clippy::cast_precision_loss)]
fn to_f64(value: &Value) -> f64 {
    match value {
        Value::Int(i) => *i as f64,
        Value::Uint(u) => *u as f64,
        Value::Float(f) => *f,
        _ => f64::NAN,
    }
}

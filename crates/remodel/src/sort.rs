use crate::{
    record::Record,
    value::compare::{cmp_numeric, cmp_text},
};
use std::{cmp::Ordering, fmt, sync::Arc};

///
/// Comparator
///
/// Cloneable record ordering. Callers may supply any comparator; the
/// crate itself only constructs the [`key_sort`] default.
///

#[derive(Clone)]
pub struct Comparator(Arc<dyn Fn(&Record, &Record) -> Ordering + Send + Sync>);

impl Comparator {
    pub fn new(cmp: impl Fn(&Record, &Record) -> Ordering + Send + Sync + 'static) -> Self {
        Self(Arc::new(cmp))
    }

    /// Compare two records.
    #[must_use]
    pub fn cmp(&self, left: &Record, right: &Record) -> Ordering {
        (self.0)(left, right)
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Comparator(..)")
    }
}

/// Default ordering over a named field.
///
/// Numeric order when both values are numeric, string order when both
/// are text, otherwise `Equal` (stable, no reordering).
#[must_use]
pub fn key_sort(field: impl Into<String>) -> Comparator {
    let field = field.into();

    Comparator::new(move |left, right| match (left.get(&field), right.get(&field)) {
        (Some(a), Some(b)) => cmp_numeric(a, b)
            .or_else(|| cmp_text(a, b))
            .unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;
    use crate::value::Value;

    #[test]
    fn key_sort_orders_numeric_fields() {
        let cmp = key_sort("id");
        let a = record! { "id" => 1 };
        let b = record! { "id" => 2_u64 };

        assert_eq!(cmp.cmp(&a, &b), Ordering::Less);
        assert_eq!(cmp.cmp(&b, &a), Ordering::Greater);
        assert_eq!(cmp.cmp(&a, &a), Ordering::Equal);
    }

    #[test]
    fn key_sort_orders_text_fields() {
        let cmp = key_sort("id");
        let a = record! { "id" => "alpha" };
        let b = record! { "id" => "beta" };

        assert_eq!(cmp.cmp(&a, &b), Ordering::Less);
    }

    #[test]
    fn mismatched_or_missing_fields_compare_equal() {
        let cmp = key_sort("id");
        let numeric = record! { "id" => 1 };
        let text = record! { "id" => "alpha" };
        let missing = record! { "name" => "x" };
        let list = record! { "id" => vec![Value::Int(1)] };

        assert_eq!(cmp.cmp(&numeric, &text), Ordering::Equal);
        assert_eq!(cmp.cmp(&numeric, &missing), Ordering::Equal);
        assert_eq!(cmp.cmp(&list, &list), Ordering::Equal);
    }
}

use serde_json::Value;

use crate::model::Scalar;

/// Walks `keys` one object level at a time. Returns `None` when a key is missing or an
/// intermediate value is not an object; never fails.
pub fn nested_get<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .try_fold(value, |current, key| current.as_object()?.get(*key))
}

/// Same walk as [`nested_get`], with absence mapped to [`Scalar::Null`].
pub fn lookup_scalar(value: &Value, keys: &[&str]) -> Scalar {
    nested_get(value, keys).map_or(Scalar::Null, Scalar::from)
}

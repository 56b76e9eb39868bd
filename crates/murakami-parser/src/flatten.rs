use serde_json::{Map, Value};

use crate::model::{Record, Scalar};

/// Collapses a nested JSON object into a single-level [`Record`] whose keys join the path
/// from the root with `delimiter`. Only objects are descended into; arrays are leaves.
///
/// Two paths that join to the same key collide and the later one wins. Empty nested objects
/// contribute no fields.
pub fn flatten_object(object: &Map<String, Value>, delimiter: &str) -> Record {
    let mut record = Record::new();
    flatten_into(&mut record, None, object, delimiter);
    record
}

fn flatten_into(
    record: &mut Record,
    prefix: Option<&str>,
    object: &Map<String, Value>,
    delimiter: &str,
) {
    for (key, value) in object {
        let name = match prefix {
            Some(prefix) => format!("{prefix}{delimiter}{key}"),
            None => key.clone(),
        };
        match value {
            Value::Object(child) => flatten_into(record, Some(&name), child, delimiter),
            leaf => {
                record.insert(name, Scalar::from(leaf));
            }
        }
    }
}

use std::fmt;

use indexmap::map::{IntoIter, Iter, Keys};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Number, Value};

/// A single table cell. Nested JSON that reaches a record as a leaf (arrays, or objects
/// returned by a lookup) is kept as its compact JSON text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
}

impl Scalar {
    pub fn to_cell(&self) -> String {
        match self {
            Scalar::Null => String::new(),
            Scalar::Bool(value) => value.to_string(),
            Scalar::Number(value) => value.to_string(),
            Scalar::Text(value) => value.clone(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_cell())
    }
}

impl From<Value> for Scalar {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Scalar::Null,
            Value::Bool(value) => Scalar::Bool(value),
            Value::Number(value) => Scalar::Number(value),
            Value::String(value) => Scalar::Text(value),
            nested @ (Value::Array(_) | Value::Object(_)) => Scalar::Text(nested.to_string()),
        }
    }
}

impl From<&Value> for Scalar {
    fn from(value: &Value) -> Self {
        Scalar::from(value.clone())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

/// One flattened test result: field name to scalar, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Scalar>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field. Re-inserting an existing name replaces the value in place,
    /// keeping the field's original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Option<Scalar> {
        self.fields.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> Keys<'_, String, Scalar> {
        self.fields.keys()
    }

    pub fn iter(&self) -> Iter<'_, String, Scalar> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Scalar);
    type IntoIter = Iter<'a, String, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl IntoIterator for Record {
    type Item = (String, Scalar);
    type IntoIter = IntoIter<String, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::schema::ExprType;

/// Flattened schema of a document collection.
///
/// Nested objects contribute the object field itself plus one entry per
/// dotted path below it, so `{"addr": {"city": "x"}}` declares `addr` as
/// `Object` and `addr.city` as `String`. Entries keep first-seen order; that
/// order later fixes the column order of wildcard expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSchema {
    /// Map of dotted field path -> field type
    pub fields: IndexMap<String, ExprType>,
}

impl DocumentSchema {
    /// Return the type of a field path if declared.
    pub fn get(&self, name: &str) -> Option<ExprType> {
        self.fields.get(name).copied()
    }

    /// Build a schema from a single JSON object.
    pub fn infer(obj: &Map<String, Value>) -> DocumentSchema {
        let mut schema = DocumentSchema::default();
        schema.merge(obj);
        schema
    }

    /// Merge a new JSON object into the schema, promoting types where the
    /// same path shows a different shape.
    pub fn merge(&mut self, obj: &Map<String, Value>) {
        for (key, value) in obj {
            self.insert_value(key.clone(), value);
        }
    }

    fn insert_value(&mut self, path: String, value: &Value) {
        let ty = ExprType::of_value(value);
        let merged = match self.fields.get(&path) {
            Some(old) => ExprType::promote(*old, ty),
            None => ty,
        };
        self.fields.insert(path.clone(), merged);

        if let Value::Object(inner) = value {
            for (key, nested) in inner {
                self.insert_value(format!("{}.{}", path, key), nested);
            }
        }
    }
}

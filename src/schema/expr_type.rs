use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Semantic type attributed to analyzed expressions.
///
/// Collections hold schemaless JSON documents, so the type system mirrors the
/// JSON value shapes: Null, Bool, Int, Float, String, Object (nested
/// document) or Array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExprType {
    /// JSON null
    Null,
    /// JSON boolean
    Bool,
    /// Integer number
    Int,
    /// Floating-point number
    Float,
    /// String
    String,
    /// JSON object (nested document)
    Object,
    /// JSON array
    Array,
}

impl ExprType {
    /// Classify a serde_json `Value` into an `ExprType`.
    pub fn of_value(value: &Value) -> ExprType {
        match value {
            Value::Null => ExprType::Null,
            Value::Bool(_) => ExprType::Bool,
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    ExprType::Int
                } else {
                    ExprType::Float
                }
            }
            Value::String(_) => ExprType::String,
            Value::Array(_) => ExprType::Array,
            Value::Object(_) => ExprType::Object,
        }
    }

    /// Promote two types to a common representative when the same field shows
    /// different shapes across documents.
    ///
    /// Numeric types promote `Int` + `Float` -> `Float`; `Null` defers to the
    /// other side; otherwise the first-seen type is kept.
    pub fn promote(a: ExprType, b: ExprType) -> ExprType {
        use ExprType::*;
        if a == b {
            return a;
        }
        match (a, b) {
            (Int, Float) | (Float, Int) => Float,
            (Null, y) => y,
            (x, _) => x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn of_value_classifies_json_shapes() {
        assert_eq!(ExprType::of_value(&json!(null)), ExprType::Null);
        assert_eq!(ExprType::of_value(&json!(true)), ExprType::Bool);
        assert_eq!(ExprType::of_value(&json!(7)), ExprType::Int);
        assert_eq!(ExprType::of_value(&json!(7.5)), ExprType::Float);
        assert_eq!(ExprType::of_value(&json!("x")), ExprType::String);
        assert_eq!(ExprType::of_value(&json!([1, 2])), ExprType::Array);
        assert_eq!(ExprType::of_value(&json!({"a": 1})), ExprType::Object);
    }

    #[test]
    fn promote_widens_numerics_and_defers_null() {
        assert_eq!(ExprType::promote(ExprType::Int, ExprType::Float), ExprType::Float);
        assert_eq!(ExprType::promote(ExprType::Float, ExprType::Int), ExprType::Float);
        assert_eq!(ExprType::promote(ExprType::Null, ExprType::String), ExprType::String);
        assert_eq!(ExprType::promote(ExprType::String, ExprType::Null), ExprType::String);
        // conflicting non-numeric types keep the first-seen type
        assert_eq!(ExprType::promote(ExprType::Bool, ExprType::String), ExprType::Bool);
    }
}

use serde_json::{Map, Value};

use crate::{analyzer::AnalyzerError, expression::NamedExpression};

/// One output row: field name -> JSON value.
pub type Row = Map<String, Value>;

/// Adapter handing an analyzed projection to the row-execution pipeline.
///
/// Rows only flow through the full execution pipeline this adapter is wired
/// into; enumerating directly on it is not supported.
#[derive(Debug, Clone)]
pub struct CollectionQueryable {
    pub collection: String,
    pub projection: Vec<NamedExpression>,
}

impl CollectionQueryable {
    pub fn new(collection: impl Into<String>, projection: Vec<NamedExpression>) -> Self {
        Self { collection: collection.into(), projection }
    }

    pub fn enumerate(&self) -> Result<Vec<Row>, AnalyzerError> {
        Err(AnalyzerError::UnsupportedOperation("enumerate".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{expression::{named, Expression}, schema::ExprType};

    #[test]
    fn direct_enumeration_is_unsupported() {
        let projection = vec![named("age", Expression::reference("age", ExprType::Int))];
        let queryable = CollectionQueryable::new("people", projection);

        let err = queryable.enumerate().unwrap_err();
        assert_eq!(err, AnalyzerError::UnsupportedOperation("enumerate".into()));
    }
}

use std::fmt;

use crate::schema::ExprType;

/// Direct, typed read of a declared field. Carries no computation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceExpression {
    /// Dotted field path as declared in the scope.
    pub attr: String,
    pub ty: ExprType,
}

impl ReferenceExpression {
    pub fn new(attr: impl Into<String>, ty: ExprType) -> Self {
        Self { attr: attr.into(), ty }
    }
}

impl fmt::Display for ReferenceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.attr)
    }
}

use std::fmt;

use crate::{expression::Expression, schema::ExprType};

/// Typed invocation of a named operation over typed arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionExpression {
    pub name: String,
    pub args: Vec<Expression>,
    /// Return type attributed by the analyzer.
    pub ty: ExprType,
}

impl fmt::Display for FunctionExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

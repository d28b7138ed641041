use std::fmt;

use crate::{
    ast::Literal,
    expression::{FunctionExpression, ReferenceExpression},
    schema::ExprType,
};

/// A resolved, typed expression value.
///
/// Structural equality is what the reference optimizer keys on, so the whole
/// tree is `Eq + Hash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Literal(Literal),
    Reference(ReferenceExpression),
    Function(FunctionExpression),
}

impl Expression {
    pub fn reference(attr: impl Into<String>, ty: ExprType) -> Expression {
        Expression::Reference(ReferenceExpression::new(attr, ty))
    }

    pub fn type_of(&self) -> ExprType {
        match self {
            Expression::Literal(literal) => match literal {
                Literal::String(_) => ExprType::String,
                Literal::Int(_) => ExprType::Int,
                Literal::Float(_) => ExprType::Float,
                Literal::Bool(_) => ExprType::Bool,
                Literal::Null => ExprType::Null,
            },
            Expression::Reference(reference) => reference.ty,
            Expression::Function(function) => function.ty,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(literal) => write!(f, "{}", literal),
            Expression::Reference(reference) => write!(f, "{}", reference),
            Expression::Function(function) => write!(f, "{}", function),
        }
    }
}

use crate::{expression::Expression, schema::ExprType};

/// One resolved output column: a display name plus a typed expression.
///
/// `name` comes from the source text of the expression; `alias` is the
/// author-supplied name when one exists. Later clauses refer back to the
/// column by `output_name()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedExpression {
    pub name: String,
    pub expression: Expression,
    pub alias: Option<String>,
}

impl NamedExpression {
    pub fn output_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    pub fn type_of(&self) -> ExprType {
        self.expression.type_of()
    }
}

/// Shorthand constructor for an unaliased named expression.
pub fn named(name: impl Into<String>, expression: Expression) -> NamedExpression {
    NamedExpression { name: name.into(), expression, alias: None }
}

/// Shorthand constructor carrying the author-supplied alias.
pub fn named_with_alias(
    name: impl Into<String>,
    expression: Expression,
    alias: impl Into<String>,
) -> NamedExpression {
    NamedExpression { name: name.into(), expression, alias: Some(alias.into()) }
}

use std::fmt;

use crate::ast::{Literal, QualifiedName};

/// Untyped select-list AST produced by the parser.
///
/// The select analyzer dispatches on these variants. `Display` reconstructs
/// the source text of a node; unaliased output columns are named after it, so
/// rendering must be deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnresolvedExpression {
    Literal(Literal),
    /// Bare dotted path, as used in synthesized function arguments.
    QualifiedName(QualifiedName),
    /// A field reference appearing directly in the select list.
    Field(QualifiedName),
    /// `expr AS name`
    Alias {
        name: String,
        delegated: Box<UnresolvedExpression>,
    },
    /// Unqualified `*`.
    AllFields,
    /// Wildcard scoped to a nested-document path: `path.*`.
    NestedAllTupleFields { path: String },
    /// Named call with ordered arguments.
    Function {
        name: String,
        args: Vec<UnresolvedExpression>,
    },
}

impl UnresolvedExpression {
    pub fn field(name: &str) -> UnresolvedExpression {
        UnresolvedExpression::Field(QualifiedName::of(name))
    }

    pub fn alias(name: &str, delegated: UnresolvedExpression) -> UnresolvedExpression {
        UnresolvedExpression::Alias { name: name.to_string(), delegated: Box::new(delegated) }
    }

    pub fn function(name: &str, args: Vec<UnresolvedExpression>) -> UnresolvedExpression {
        UnresolvedExpression::Function { name: name.to_string(), args }
    }
}

impl fmt::Display for UnresolvedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnresolvedExpression::Literal(literal) => write!(f, "{}", literal),
            UnresolvedExpression::QualifiedName(name) => write!(f, "{}", name),
            UnresolvedExpression::Field(name) => write!(f, "{}", name),
            UnresolvedExpression::Alias { name, delegated } => write!(f, "{} AS {}", delegated, name),
            UnresolvedExpression::AllFields => write!(f, "*"),
            UnresolvedExpression::NestedAllTupleFields { path } => write!(f, "nested({}.*)", path),
            UnresolvedExpression::Function { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_field_and_qualified_paths() {
        assert_eq!(UnresolvedExpression::field("age").to_string(), "age");
        assert_eq!(UnresolvedExpression::field("addr.city").to_string(), "addr.city");
    }

    #[test]
    fn display_renders_wildcards() {
        assert_eq!(UnresolvedExpression::AllFields.to_string(), "*");
        assert_eq!(
            UnresolvedExpression::NestedAllTupleFields { path: "addr".into() }.to_string(),
            "nested(addr.*)"
        );
    }

    #[test]
    fn display_renders_function_calls_with_ordered_args() {
        let call = UnresolvedExpression::function(
            "coalesce",
            vec![
                UnresolvedExpression::field("nick"),
                UnresolvedExpression::field("name"),
            ],
        );
        assert_eq!(call.to_string(), "coalesce(nick, name)");
    }

    #[test]
    fn display_renders_alias_over_delegated_text() {
        let aliased = UnresolvedExpression::alias(
            "l",
            UnresolvedExpression::function("length", vec![UnresolvedExpression::field("name")]),
        );
        assert_eq!(aliased.to_string(), "length(name) AS l");
    }
}

use std::collections::HashMap;

use tracing::trace;

use crate::{
    analyzer::{AnalysisContext, AnalyzerError},
    expression::{Expression, FunctionExpression, NamedExpression, ReferenceExpression},
};

/// Decides what actually lands in the output for a named expression: the
/// resolved expression itself, or a reference to an equivalent expression
/// already materialized elsewhere in the statement.
///
/// One implementation per strategy; an instance is scoped to a single
/// statement's analysis pass.
pub trait ReferenceOptimizer {
    fn optimize(
        &self,
        expression: &NamedExpression,
        context: &mut AnalysisContext,
    ) -> Result<Expression, AnalyzerError>;
}

/// Passthrough: every expression is kept exactly as resolved.
#[derive(Debug, Default)]
pub struct NoopOptimizer;

impl ReferenceOptimizer for NoopOptimizer {
    fn optimize(
        &self,
        expression: &NamedExpression,
        _context: &mut AnalysisContext,
    ) -> Result<Expression, AnalyzerError> {
        Ok(expression.expression.clone())
    }
}

/// Replaces computations that an aggregation or grouping clause has already
/// materialized with typed references to those columns, so the same
/// expression is evaluated once, not once per clause.
#[derive(Debug, Default)]
pub struct ExpressionReferenceOptimizer {
    expression_map: HashMap<Expression, Expression>,
}

impl ExpressionReferenceOptimizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index previously materialized output columns by their defining
    /// expression. Lookups hit on structural equality; the replacement is a
    /// reference named by the column's output name (its alias when the
    /// author supplied one, its source text otherwise).
    pub fn with_materialized(materialized: &[NamedExpression]) -> Self {
        let mut expression_map = HashMap::new();
        for column in materialized {
            let replacement = Expression::Reference(ReferenceExpression::new(
                column.output_name(),
                column.type_of(),
            ));
            expression_map.entry(column.expression.clone()).or_insert(replacement);
        }
        Self { expression_map }
    }

    fn substitute(&self, expression: &Expression) -> Expression {
        if let Some(replacement) = self.expression_map.get(expression) {
            trace!(%expression, %replacement, "substituting materialized reference");
            return replacement.clone();
        }
        match expression {
            Expression::Function(function) => Expression::Function(FunctionExpression {
                name: function.name.clone(),
                args: function.args.iter().map(|arg| self.substitute(arg)).collect(),
                ty: function.ty,
            }),
            _ => expression.clone(),
        }
    }
}

impl ReferenceOptimizer for ExpressionReferenceOptimizer {
    fn optimize(
        &self,
        expression: &NamedExpression,
        _context: &mut AnalysisContext,
    ) -> Result<Expression, AnalyzerError> {
        Ok(self.substitute(&expression.expression))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        expression::{named, named_with_alias},
        schema::ExprType,
    };

    fn length_of_name() -> Expression {
        Expression::Function(FunctionExpression {
            name: "length".into(),
            args: vec![Expression::reference("name", ExprType::String)],
            ty: ExprType::Int,
        })
    }

    #[test]
    fn noop_returns_the_resolved_expression_unchanged() {
        let mut context = AnalysisContext::new();
        let candidate = named_with_alias("length(name)", length_of_name(), "l");

        let optimized = NoopOptimizer.optimize(&candidate, &mut context).unwrap();
        assert_eq!(optimized, length_of_name());
    }

    #[test]
    fn materialized_expression_becomes_a_reference_named_by_its_alias() {
        let materialized = vec![named_with_alias("length(name)", length_of_name(), "l")];
        let optimizer = ExpressionReferenceOptimizer::with_materialized(&materialized);

        let mut context = AnalysisContext::new();
        let candidate = named_with_alias("length(name)", length_of_name(), "l");
        let optimized = optimizer.optimize(&candidate, &mut context).unwrap();

        assert_eq!(optimized, Expression::reference("l", ExprType::Int));
    }

    #[test]
    fn materialized_without_alias_is_referenced_by_source_text() {
        let materialized = vec![named("length(name)", length_of_name())];
        let optimizer = ExpressionReferenceOptimizer::with_materialized(&materialized);

        let mut context = AnalysisContext::new();
        let candidate = named("length(name)", length_of_name());
        let optimized = optimizer.optimize(&candidate, &mut context).unwrap();

        assert_eq!(optimized, Expression::reference("length(name)", ExprType::Int));
    }

    #[test]
    fn substitution_recurses_into_function_arguments() {
        let materialized = vec![named_with_alias("length(name)", length_of_name(), "l")];
        let optimizer = ExpressionReferenceOptimizer::with_materialized(&materialized);

        // upper-level call is not materialized, but its argument is
        let outer = Expression::Function(FunctionExpression {
            name: "coalesce".into(),
            args: vec![length_of_name(), Expression::Literal(crate::ast::Literal::Int(0))],
            ty: ExprType::Int,
        });
        let mut context = AnalysisContext::new();
        let optimized =
            optimizer.optimize(&named("coalesce(length(name), 0)", outer), &mut context).unwrap();

        match optimized {
            Expression::Function(function) => {
                assert_eq!(function.args[0], Expression::reference("l", ExprType::Int));
            }
            other => panic!("expected function, got {other:?}"),
        }
    }

    #[test]
    fn unrelated_expressions_pass_through() {
        let materialized = vec![named_with_alias("length(name)", length_of_name(), "l")];
        let optimizer = ExpressionReferenceOptimizer::with_materialized(&materialized);

        let mut context = AnalysisContext::new();
        let unrelated = named("age", Expression::reference("age", ExprType::Int));
        let optimized = optimizer.optimize(&unrelated, &mut context).unwrap();
        assert_eq!(optimized, Expression::reference("age", ExprType::Int));
    }

    #[test]
    fn first_materialization_wins_on_duplicate_expressions() {
        let materialized = vec![
            named_with_alias("length(name)", length_of_name(), "first"),
            named_with_alias("length(name)", length_of_name(), "second"),
        ];
        let optimizer = ExpressionReferenceOptimizer::with_materialized(&materialized);

        let mut context = AnalysisContext::new();
        let candidate = named("length(name)", length_of_name());
        let optimized = optimizer.optimize(&candidate, &mut context).unwrap();
        assert_eq!(optimized, Expression::reference("first", ExprType::Int));
    }
}

use regex::Regex;
use tracing::{debug, trace};

use crate::{
    analyzer::{
        AnalysisContext, AnalyzerError, ExpressionAnalyzer, Namespace, ReferenceOptimizer, Symbol,
    },
    ast::{QualifiedName, UnresolvedExpression},
    expression::{named, named_with_alias, Expression, NamedExpression, ReferenceExpression},
};

/// Resolves the ordered select list into the ordered list of named output
/// expressions that planning consumes.
///
/// Items are processed left to right; one item may expand to zero, one or
/// many output columns (wildcards), and the concatenation keeps source order
/// so output column order and names are reproducible.
pub struct SelectExpressionAnalyzer<'a> {
    expression_analyzer: &'a ExpressionAnalyzer,
}

impl<'a> SelectExpressionAnalyzer<'a> {
    pub fn new(expression_analyzer: &'a ExpressionAnalyzer) -> Self {
        Self { expression_analyzer }
    }

    /// The sole entry point. Fails only by propagating collaborator failures;
    /// there is no partial-result mode.
    pub fn analyze(
        &self,
        select_list: &[UnresolvedExpression],
        context: &mut AnalysisContext,
        optimizer: &dyn ReferenceOptimizer,
    ) -> Result<Vec<NamedExpression>, AnalyzerError> {
        debug!(items = select_list.len(), "analyzing select list");
        let mut output = Vec::with_capacity(select_list.len());
        for item in select_list {
            output.extend(self.analyze_item(item, context, optimizer)?);
        }
        Ok(output)
    }

    fn analyze_item(
        &self,
        item: &UnresolvedExpression,
        context: &mut AnalysisContext,
        optimizer: &dyn ReferenceOptimizer,
    ) -> Result<Vec<NamedExpression>, AnalyzerError> {
        match item {
            UnresolvedExpression::Field(_) => self.analyze_field(item, context),
            UnresolvedExpression::Alias { name, delegated } => {
                self.analyze_alias(name, delegated, context, optimizer)
            }
            UnresolvedExpression::AllFields => self.expand_all_fields(context),
            UnresolvedExpression::NestedAllTupleFields { path } => {
                self.expand_nested_fields(path, context)
            }
            UnresolvedExpression::Literal(_)
            | UnresolvedExpression::QualifiedName(_)
            | UnresolvedExpression::Function { .. } => Err(AnalyzerError::Other(format!(
                "select item '{}' must be a field, an alias or a wildcard",
                item
            ))),
        }
    }

    fn analyze_field(
        &self,
        item: &UnresolvedExpression,
        context: &mut AnalysisContext,
    ) -> Result<Vec<NamedExpression>, AnalyzerError> {
        let resolved = self.expression_analyzer.resolve(item, context)?;
        Ok(vec![named(item.to_string(), resolved)])
    }

    /// An alias over a wildcard is expanded, not renamed: one alias name
    /// cannot label many output columns.
    ///
    /// Otherwise the optimizer sees the (source text, resolved expression,
    /// requested alias) triple; the alias is how grouping and having clauses
    /// refer back to this computation.
    fn analyze_alias(
        &self,
        name: &str,
        delegated: &UnresolvedExpression,
        context: &mut AnalysisContext,
        optimizer: &dyn ReferenceOptimizer,
    ) -> Result<Vec<NamedExpression>, AnalyzerError> {
        if matches!(
            delegated,
            UnresolvedExpression::AllFields | UnresolvedExpression::NestedAllTupleFields { .. }
        ) {
            return self.analyze_item(delegated, context, optimizer);
        }

        let resolved = self.expression_analyzer.resolve(delegated, context)?;
        let candidate = named_with_alias(delegated.to_string(), resolved, name);
        let optimized = optimizer.optimize(&candidate, context)?;
        Ok(vec![named(name, optimized)])
    }

    fn expand_all_fields(
        &self,
        context: &mut AnalysisContext,
    ) -> Result<Vec<NamedExpression>, AnalyzerError> {
        let fields = context.peek().lookup_all_fields(Namespace::FieldName);
        trace!(count = fields.len(), "expanding wildcard");
        Ok(fields
            .into_iter()
            .map(|(field_name, ty)| {
                let reference = Expression::Reference(ReferenceExpression::new(&field_name, ty));
                named(field_name, reference)
            })
            .collect())
    }

    fn expand_nested_fields(
        &self,
        path: &str,
        context: &mut AnalysisContext,
    ) -> Result<Vec<NamedExpression>, AnalyzerError> {
        let tuple_fields = context.peek().lookup_all_tuple_fields(Namespace::FieldName);

        // The bare path is resolved even though no column named exactly
        // `path` is emitted: later stages validate that every referenced
        // path was declared.
        context.peek_mut().resolve(&Symbol::field(path))?;

        // direct children only: exactly one segment below the path
        let child = Regex::new(&format!(r"^{}\.[^.]+$", regex::escape(path)))
            .map_err(|e| AnalyzerError::Other(format!("invalid nested path '{}': {}", path, e)))?;

        let mut output = Vec::new();
        for (field_name, _ty) in tuple_fields {
            if !child.is_match(&field_name) {
                continue;
            }
            let call = UnresolvedExpression::Function {
                name: "nested".to_string(),
                args: vec![UnresolvedExpression::QualifiedName(QualifiedName::of(&field_name))],
            };
            let resolved = self.expression_analyzer.resolve(&call, context)?;
            output.push(named(format!("nested({})", field_name), resolved));
        }
        trace!(path, count = output.len(), "expanded nested wildcard");
        Ok(output)
    }
}

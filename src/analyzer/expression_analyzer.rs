use crate::{
    analyzer::{AnalysisContext, AnalyzerError, Symbol, TypeInference},
    ast::{QualifiedName, UnresolvedExpression},
    expression::{Expression, FunctionExpression, ReferenceExpression},
    schema::ExprType,
};

/// Resolves one untyped expression subtree into one typed expression against
/// the context's current scope.
///
/// Wildcards never reach this analyzer: the select analyzer expands them
/// first and only hands over single-valued expressions.
#[derive(Debug, Default)]
pub struct ExpressionAnalyzer;

impl ExpressionAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(
        &self,
        expr: &UnresolvedExpression,
        context: &mut AnalysisContext,
    ) -> Result<Expression, AnalyzerError> {
        match expr {
            UnresolvedExpression::Literal(literal) => Ok(Expression::Literal(literal.clone())),
            UnresolvedExpression::Field(name) | UnresolvedExpression::QualifiedName(name) => {
                self.resolve_reference(name, context)
            }
            UnresolvedExpression::Alias { delegated, .. } => self.resolve(delegated, context),
            UnresolvedExpression::Function { name, args } => {
                self.resolve_function(name, args, context)
            }
            UnresolvedExpression::AllFields => Err(AnalyzerError::Other(
                "wildcard must be expanded before expression resolution".to_string(),
            )),
            UnresolvedExpression::NestedAllTupleFields { path } => Err(AnalyzerError::Other(
                format!("nested wildcard '{}.*' must be expanded before expression resolution", path),
            )),
        }
    }

    fn resolve_reference(
        &self,
        name: &QualifiedName,
        context: &mut AnalysisContext,
    ) -> Result<Expression, AnalyzerError> {
        let attr = name.to_string();
        let ty = context.peek_mut().resolve(&Symbol::field(attr.clone()))?;
        Ok(Expression::Reference(ReferenceExpression::new(attr, ty)))
    }

    fn resolve_function(
        &self,
        name: &str,
        args: &[UnresolvedExpression],
        context: &mut AnalysisContext,
    ) -> Result<Expression, AnalyzerError> {
        if name.eq_ignore_ascii_case("nested") {
            return self.resolve_nested(name, args, context);
        }

        // COUNT(*) counts rows, not a field: the wildcard argument is not
        // expanded and the typed call carries no arguments.
        if name.eq_ignore_ascii_case("count")
            && matches!(args, [UnresolvedExpression::AllFields])
        {
            return Ok(Expression::Function(FunctionExpression {
                name: "count".to_string(),
                args: Vec::new(),
                ty: ExprType::Int,
            }));
        }

        let mut resolved = Vec::with_capacity(args.len());
        for arg in args {
            resolved.push(self.resolve(arg, context)?);
        }
        let arg_types: Vec<ExprType> = resolved.iter().map(Expression::type_of).collect();
        let ty = TypeInference::infer_function(name, &arg_types)?;

        Ok(Expression::Function(FunctionExpression { name: name.to_string(), args: resolved, ty }))
    }

    /// `nested(path)` reads a field inside a nested document; the call types
    /// as the target field itself.
    fn resolve_nested(
        &self,
        name: &str,
        args: &[UnresolvedExpression],
        context: &mut AnalysisContext,
    ) -> Result<Expression, AnalyzerError> {
        if let [arg @ (UnresolvedExpression::QualifiedName(_) | UnresolvedExpression::Field(_))] =
            args
        {
            let reference = self.resolve(arg, context)?;
            let ty = reference.type_of();
            return Ok(Expression::Function(FunctionExpression {
                name: "nested".to_string(),
                args: vec![reference],
                ty,
            }));
        }

        let mut got = Vec::with_capacity(args.len());
        for arg in args {
            got.push(self.resolve(arg, context)?.type_of());
        }
        Err(AnalyzerError::FunctionArgMismatch {
            name: name.to_string(),
            expected: "(qualified field path)".to_string(),
            got,
        })
    }
}

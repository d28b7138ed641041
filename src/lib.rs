pub mod schema;
pub use schema::{DocumentSchema, ExprType};

pub mod ast;

pub mod expression;
pub use expression::{Expression, NamedExpression};

pub mod analyzer;
pub use analyzer::{
    AnalysisContext, AnalyzerError, ExpressionAnalyzer, SelectExpressionAnalyzer, TypeEnvironment,
};

pub mod executor;

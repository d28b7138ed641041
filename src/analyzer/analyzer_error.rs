use std::fmt::Display;

use crate::{analyzer::Symbol, schema::ExprType};

/// Semantic failures surfaced to the statement compiler.
///
/// Analysis performs no local recovery: the first failure aborts the whole
/// pass and there is no partial-result mode.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzerError {
    /// A referenced field or path is not declared in any scope.
    SymbolNotFound { symbol: Symbol },
    FunctionNotFound(String),
    FunctionArgMismatch { name: String, expected: String, got: Vec<ExprType> },
    /// Capability intentionally left unwired, e.g. direct row enumeration.
    UnsupportedOperation(String),
    Other(String),
}

impl Display for AnalyzerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyzerError::SymbolNotFound { symbol } => {
                write!(f, "{} not found in any scope", symbol)
            }
            AnalyzerError::FunctionNotFound(name) => {
                write!(f, "unknown function '{}'", name)
            }
            AnalyzerError::FunctionArgMismatch { name, expected, got } => {
                write!(f, "function '{}' expects {}, got {:?}", name, expected, got)
            }
            AnalyzerError::UnsupportedOperation(what) => {
                write!(f, "unsupported operation: {}", what)
            }
            AnalyzerError::Other(message) => write!(f, "{}", message),
        }
    }
}

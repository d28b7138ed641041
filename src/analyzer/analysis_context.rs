use crate::analyzer::{AnalyzerError, TypeEnvironment};

/// Analysis-wide state threaded by reference through every resolution call:
/// the stack of lexical scopes for the statement under analysis.
///
/// One context is owned exclusively by one statement's analysis pass; nothing
/// here is shared across statements. At least one root scope always exists.
#[derive(Debug, Default)]
pub struct AnalysisContext {
    environment: TypeEnvironment,
}

impl AnalysisContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-populated root scope.
    pub fn from_environment(environment: TypeEnvironment) -> Self {
        Self { environment }
    }

    /// The current (innermost) scope.
    pub fn peek(&self) -> &TypeEnvironment {
        &self.environment
    }

    pub fn peek_mut(&mut self) -> &mut TypeEnvironment {
        &mut self.environment
    }

    /// Open a child scope, e.g. when entering a subquery.
    pub fn push(&mut self) {
        let parent = std::mem::take(&mut self.environment);
        self.environment = TypeEnvironment::scoped(parent);
    }

    /// Close the current scope. Popping the root scope is a programming
    /// error, not a statement error.
    pub fn pop(&mut self) {
        let current = std::mem::take(&mut self.environment);
        self.environment = current.into_parent().expect("cannot pop the root scope");
    }

    /// Run `body` inside a fresh child scope; the scope is popped on every
    /// exit path, errors included, so a failed analysis cannot leak scopes
    /// into the next statement.
    pub fn scoped<T>(
        &mut self,
        body: impl FnOnce(&mut AnalysisContext) -> Result<T, AnalyzerError>,
    ) -> Result<T, AnalyzerError> {
        self.push();
        let result = body(self);
        self.pop();
        result
    }
}

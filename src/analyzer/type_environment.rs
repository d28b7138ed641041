use std::collections::HashSet;

use indexmap::IndexMap;

use crate::{
    analyzer::{AnalyzerError, Namespace, Symbol},
    schema::{DocumentSchema, ExprType},
};

/// Per-scope symbol storage: one declaration-ordered table per namespace.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    tables: IndexMap<Namespace, IndexMap<String, ExprType>>,
}

impl SymbolTable {
    pub fn store(&mut self, symbol: Symbol, ty: ExprType) {
        self.tables.entry(symbol.namespace).or_default().insert(symbol.name, ty);
    }

    pub fn lookup(&self, symbol: &Symbol) -> Option<ExprType> {
        self.tables.get(&symbol.namespace).and_then(|table| table.get(&symbol.name)).copied()
    }

    /// All declarations in a namespace, in declaration order.
    pub fn lookup_all(&self, namespace: Namespace) -> IndexMap<String, ExprType> {
        self.tables.get(&namespace).cloned().unwrap_or_default()
    }
}

/// One lexical scope in the environment stack.
///
/// `parent` is the enclosing scope: `resolve` walks innermost-to-outermost,
/// while the enumeration calls read this scope only. Within one scope a name
/// maps to at most one type.
#[derive(Debug, Clone, Default)]
pub struct TypeEnvironment {
    parent: Option<Box<TypeEnvironment>>,
    symbols: SymbolTable,
    used: HashSet<Symbol>,
}

impl TypeEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a child scope over `parent`.
    pub fn scoped(parent: TypeEnvironment) -> Self {
        Self { parent: Some(Box::new(parent)), ..Self::default() }
    }

    pub(crate) fn into_parent(self) -> Option<TypeEnvironment> {
        self.parent.map(|boxed| *boxed)
    }

    pub fn define(&mut self, symbol: Symbol, ty: ExprType) {
        self.symbols.store(symbol, ty);
    }

    /// Declare every field of a flattened document schema in this scope's
    /// field namespace, preserving the schema's order.
    pub fn define_schema(&mut self, schema: &DocumentSchema) {
        for (name, ty) in &schema.fields {
            self.define(Symbol::field(name.clone()), *ty);
        }
    }

    /// Resolve a symbol, searching this scope first and then outward.
    ///
    /// The symbol is marked as used in the scope that declares it; later
    /// stages validate that every referenced path was declared.
    pub fn resolve(&mut self, symbol: &Symbol) -> Result<ExprType, AnalyzerError> {
        let mut scope = Some(self);
        while let Some(env) = scope {
            if let Some(ty) = env.symbols.lookup(symbol) {
                env.used.insert(symbol.clone());
                return Ok(ty);
            }
            scope = env.parent.as_deref_mut();
        }
        Err(AnalyzerError::SymbolNotFound { symbol: symbol.clone() })
    }

    /// Whether a symbol has been resolved at least once in this scope or an
    /// enclosing one.
    pub fn is_used(&self, symbol: &Symbol) -> bool {
        if self.used.contains(symbol) {
            return true;
        }
        self.parent.as_ref().is_some_and(|parent| parent.is_used(symbol))
    }

    /// Every declared name in a namespace of this scope, in declaration
    /// order. Used for unqualified wildcard expansion.
    pub fn lookup_all_fields(&self, namespace: Namespace) -> IndexMap<String, ExprType> {
        self.symbols.lookup_all(namespace)
    }

    /// The subset of declared names that are paths inside nested documents
    /// (names containing a path separator). An empty result is valid.
    pub fn lookup_all_tuple_fields(&self, namespace: Namespace) -> IndexMap<String, ExprType> {
        self.symbols
            .lookup_all(namespace)
            .into_iter()
            .filter(|(name, _)| name.contains('.'))
            .collect()
    }
}

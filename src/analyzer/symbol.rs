use std::fmt;

/// Lookup namespaces. Identically spelled names in different namespaces never
/// collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    FieldName,
    FunctionName,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::FieldName => write!(f, "field"),
            Namespace::FunctionName => write!(f, "function"),
        }
    }
}

/// A namespaced identifier: the unit of declaration and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub namespace: Namespace,
    pub name: String,
}

impl Symbol {
    pub fn new(namespace: Namespace, name: impl Into<String>) -> Self {
        Self { namespace, name: name.into() }
    }

    /// Shorthand for a symbol in the field namespace.
    pub fn field(name: impl Into<String>) -> Self {
        Self::new(Namespace::FieldName, name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.namespace, self.name)
    }
}

//! Lexically scoped name-to-type bindings.

use indexmap::IndexMap;

use super::types::TypeId;

/// Stack of scopes, innermost last.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    scopes: Vec<IndexMap<String, TypeId>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(IndexMap::new());
    }

    /// Drops the innermost scope. Popping an empty stack is a no-op.
    pub fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    /// Binds `name` in the innermost scope, replacing a binding of the same
    /// name in that scope. Opens a scope first when none exists.
    pub fn define(&mut self, name: impl Into<String>, ty: TypeId) {
        if self.scopes.is_empty() {
            self.push_scope();
        }
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.into(), ty);
        }
    }

    /// Innermost binding of `name`.
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name).copied())
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Bindings of the outermost scope in definition order.
    pub fn globals(&self) -> impl Iterator<Item = (&str, TypeId)> {
        self.scopes
            .first()
            .into_iter()
            .flat_map(|scope| scope.iter().map(|(name, ty)| (name.as_str(), *ty)))
    }
}

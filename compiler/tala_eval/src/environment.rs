//! Variable scoping for the interpreter.
//!
//! An environment is a stack of scopes over an optional capture snapshot:
//!
//! ```text
//! block scopes        (pushed and popped around `{ .. }` and loop bodies)
//! call scope | module scope
//! captures            (immutable, shared with the lambda value)
//! ```
//!
//! Lookups search from the top down. Definitions always go to the top scope;
//! nothing ever writes into an enclosing scope or into the captures, so a
//! call cannot affect its caller or any other call.

use rustc_hash::FxHashMap;
use tala_ir::Name;

use crate::value::{Captures, Heap};
use crate::Value;

/// What a scope was created for.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ScopeKind {
    /// Top-level statements; `let` may rebind a name.
    Module,
    /// Parameters and `where` bindings of one lambda call. Append-only.
    Call,
    /// A block or loop body; `let` may rebind a name.
    Block,
}

/// A name was defined twice in a call scope.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct AlreadyBound(pub Name);

/// Ordered name to value mapping.
///
/// Entries keep definition order so a call scope can be inspected as the
/// sequence of parameters followed by bindings.
#[derive(Clone, Debug)]
pub struct Scope {
    kind: ScopeKind,
    entries: Vec<(Name, Value)>,
    index: FxHashMap<Name, usize>,
}

impl Scope {
    pub fn new(kind: ScopeKind) -> Self {
        Scope {
            kind,
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    /// Add a binding.
    ///
    /// In a call scope an existing name is an error; elsewhere the new value
    /// replaces the old one in place.
    pub fn define(&mut self, name: Name, value: Value) -> Result<(), AlreadyBound> {
        if let Some(&slot) = self.index.get(&name) {
            if self.kind == ScopeKind::Call {
                return Err(AlreadyBound(name));
            }
            self.entries[slot].1 = value;
            return Ok(());
        }
        self.index.insert(name, self.entries.len());
        self.entries.push((name, value));
        Ok(())
    }

    pub fn get(&self, name: Name) -> Option<&Value> {
        self.index.get(&name).map(|&slot| &self.entries[slot].1)
    }

    /// Bindings in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (Name, &Value)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The variables visible to the code being evaluated.
#[derive(Debug)]
pub struct Environment {
    captures: Option<Heap<Captures>>,
    /// Never empty: the bottom scope is the module or call scope.
    scopes: Vec<Scope>,
}

impl Environment {
    /// Environment for top-level statements.
    pub fn new() -> Self {
        Environment {
            captures: None,
            scopes: vec![Scope::new(ScopeKind::Module)],
        }
    }

    /// Fresh environment for one lambda call: the capture snapshot under an
    /// empty call scope.
    pub(crate) fn for_call(captures: Heap<Captures>) -> Self {
        Environment {
            captures: Some(captures),
            scopes: vec![Scope::new(ScopeKind::Call)],
        }
    }

    pub fn push_block(&mut self) {
        self.scopes.push(Scope::new(ScopeKind::Block));
    }

    /// Pop the innermost block scope. The bottom scope is never popped.
    pub fn pop_block(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Define a name in the innermost scope.
    pub fn define(&mut self, name: Name, value: Value) -> Result<(), AlreadyBound> {
        match self.scopes.last_mut() {
            Some(scope) => scope.define(name, value),
            None => Ok(()),
        }
    }

    pub fn lookup(&self, name: Name) -> Option<&Value> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
            .or_else(|| self.captures.as_ref().and_then(|c| c.get(&name)))
    }

    /// The module or call scope at the bottom of the stack.
    pub fn base_scope(&self) -> Option<&Scope> {
        self.scopes.first()
    }

    /// Snapshot of every visible variable, innermost binding winning.
    pub fn capture(&self) -> Captures {
        let mut snapshot = self
            .captures
            .as_ref()
            .map(|c| (**c).clone())
            .unwrap_or_default();
        for scope in &self.scopes {
            for (name, value) in scope.iter() {
                snapshot.insert(name, value.clone());
            }
        }
        snapshot
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

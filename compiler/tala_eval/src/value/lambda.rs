//! Lambda values.

use std::fmt;

use rustc_hash::FxHashMap;
use tala_ir::{ExprArena, Lambda, LambdaId, Name, SharedArena};

use super::{Heap, Value};

/// Variables a lambda captured when its `fn` expression was evaluated.
pub type Captures = FxHashMap<Name, Value>;

/// A callable lambda: the node it was created from plus its capture snapshot.
///
/// The arena handle keeps the node alive independently of the module that
/// produced it. Nothing in a `LambdaValue` is mutable, so it can be shared
/// freely between threads.
#[derive(Clone)]
pub struct LambdaValue {
    id: LambdaId,
    arena: SharedArena,
    captures: Heap<Captures>,
}

impl LambdaValue {
    pub(crate) fn new(id: LambdaId, arena: SharedArena, captures: Captures) -> Self {
        LambdaValue {
            id,
            arena,
            captures: Heap::new(captures),
        }
    }

    #[inline]
    pub fn id(&self) -> LambdaId {
        self.id
    }

    /// The lambda node.
    #[inline]
    pub fn node(&self) -> &Lambda {
        self.arena.get_lambda(self.id)
    }

    #[inline]
    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    #[inline]
    pub fn shared_arena(&self) -> &SharedArena {
        &self.arena
    }

    #[inline]
    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    /// Shared handle to the snapshot, for the bottom layer of a call environment.
    pub(crate) fn captures_handle(&self) -> Heap<Captures> {
        self.captures.clone()
    }

    /// Identity: the same node in the same arena with the same snapshot.
    pub fn same_as(&self, other: &LambdaValue) -> bool {
        self.id == other.id
            && self.arena.ptr_eq(&other.arena)
            && self.captures.ptr_eq(&other.captures)
    }
}

impl fmt::Debug for LambdaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LambdaValue")
            .field("id", &self.id)
            .field("params", &self.node().params.len())
            .field("bindings", &self.node().bindings.len())
            .field("captures", &self.captures.len())
            .finish()
    }
}

//! Stack growth for the recursive phases.
//!
//! The parser, the checker's walks and the evaluator all recurse once per
//! nesting level of the source. Wrapping each recursive step in
//! [`ensure_sufficient_stack`] moves execution onto a freshly allocated
//! segment when the current one runs low, so nesting depth is bounded by
//! memory rather than by the thread's stack size.
//!
//! On `wasm32` the guard is a plain call.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the remaining stack is
/// below the red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

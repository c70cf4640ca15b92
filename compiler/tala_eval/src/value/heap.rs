//! Shared, immutable heap payloads for runtime values.

// Arc is the implementation of Heap<T>.
#![expect(clippy::disallowed_types, reason = "Arc is the implementation of Heap<T>")]

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Reference-counted, immutable payload of a `Value`.
///
/// Construction is crate-private: outside code builds heap values through
/// the `Value` factory methods. `Arc` rather than `Rc` keeps values
/// `Send + Sync`: a lambda value and everything it captured can be
/// called from several threads at once.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether two handles share one allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt(f)
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || **self == **other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_allocation() {
        let a = Heap::new(vec![1, 2, 3]);
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert_eq!(&*b, &[1, 2, 3]);
    }

    #[test]
    fn equality_is_by_contents() {
        let a = Heap::new(String::from("sum"));
        let b = Heap::new(String::from("sum"));
        assert!(!a.ptr_eq(&b));
        assert_eq!(a, b);
    }
}

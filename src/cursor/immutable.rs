//! Read-only wrapper that narrows a cursor to `has_more`/`advance`.
//!
//! The `Immutable` wrapper is a pass-through wrapper that forwards all
//! operations to the inner cursor without any modifications. It implements
//! [`Cursor`] but never [`RemovableCursor`](super::RemovableCursor), so code
//! holding an `Immutable` cannot alter the collection behind it, even when the
//! inner cursor could.
//!
//! # Examples
//!
//! ```rust
//! use decorum::prelude::*;
//!
//! let mut items = vec![1, 2, 3];
//! let mut cursor = Immutable::new(VecCursor::new(&mut items));
//!
//! // Behaves exactly like the inner cursor
//! assert_eq!(cursor.advance().unwrap(), 1);
//! assert!(cursor.has_more().unwrap());
//! ```
//!
//! Removal is not available through the wrapper:
//!
//! ```compile_fail
//! use decorum::prelude::*;
//!
//! let mut items = vec![1, 2, 3];
//! let mut cursor = Immutable::new(VecCursor::new(&mut items));
//! cursor.advance().unwrap();
//! cursor.remove().unwrap();
//! ```

use super::Cursor;
use crate::error::Result;

/// Identity wrapper that exposes only the read/advance capability.
#[derive(Debug, Clone)]
pub struct Immutable<C> {
    inner: C,
}

impl<C> Immutable<C> {
    /// Creates a read-only wrapper around the given cursor.
    #[inline]
    pub fn new(cursor: C) -> Self {
        Self { inner: cursor }
    }

    /// Gets a shared reference to the inner cursor.
    #[inline]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwraps the inner cursor, restoring whatever capabilities it has.
    #[inline]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Cursor> Cursor for Immutable<C> {
    type Item = C::Item;

    #[inline]
    fn has_more(&self) -> Result<bool> {
        self.inner.has_more()
    }

    #[inline]
    fn advance(&mut self) -> Result<Self::Item> {
        self.inner.advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{IterOf, RemovableCursor, VecCursor};
    use crate::error::Failure;

    fn drain<C: Cursor>(mut cursor: C) -> Vec<C::Item> {
        let mut items = Vec::new();
        while cursor.has_more().unwrap() {
            items.push(cursor.advance().unwrap());
        }
        items
    }

    #[test]
    fn test_immutable_wrapper() {
        let mut cursor = Immutable::new(IterOf::new([1, 2, 3]));

        assert!(cursor.has_more().unwrap());
        assert_eq!(cursor.advance().unwrap(), 1);
        assert_eq!(cursor.advance().unwrap(), 2);
        assert_eq!(cursor.advance().unwrap(), 3);
        assert!(!cursor.has_more().unwrap());
    }

    #[test]
    fn test_immutable_matches_unwrapped() {
        let plain = drain(IterOf::new(vec!["x", "y", "z"]));
        let wrapped = drain(Immutable::new(IterOf::new(vec!["x", "y", "z"])));
        assert_eq!(plain, wrapped);
    }

    #[test]
    fn test_immutable_exhaustion() {
        let mut cursor = Immutable::new(IterOf::new(Vec::<i32>::new()));
        assert!(!cursor.has_more().unwrap());
        assert!(matches!(cursor.advance(), Err(Failure::Exhausted)));
    }

    #[test]
    fn test_immutable_leaves_collection_untouched() {
        let mut items = vec![4, 5, 6];
        {
            let cursor = Immutable::new(VecCursor::new(&mut items));
            assert_eq!(drain(cursor), vec![4, 5, 6]);
        }
        assert_eq!(items, vec![4, 5, 6]);
    }

    #[test]
    fn test_inner_cursor_keeps_its_capability() {
        let mut items = vec![1, 2];
        let mut inner = VecCursor::new(&mut items);
        inner.advance().unwrap();
        inner.remove().unwrap();

        let mut cursor = Immutable::new(inner);
        assert_eq!(cursor.advance().unwrap(), 2);
        assert!(!cursor.inner().has_more().unwrap());

        let mut inner = cursor.into_inner();
        inner.remove().unwrap();
        assert!(matches!(inner.remove(), Err(Failure::IllegalState(_))));
    }
}

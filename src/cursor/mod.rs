//! Iteration cursors and their decorators.
//!
//! A [`Cursor`] is a forward-only position over a sequence with two
//! operations: [`has_more`](Cursor::has_more), a read, and
//! [`advance`](Cursor::advance), which moves the position and yields the
//! element. Once a cursor reports no more elements it stays exhausted, and
//! advancing it fails with [`Failure::Exhausted`](crate::Failure::Exhausted).
//!
//! # Overview
//!
//! ```text
//! ┌───────────────────────────────────────────────────┐
//! │                Synced<C>                           │
//! │  lock:   SharedLock (Arc<RwLock<()>>)              │
//! │  cursor: RwLock<C>                                 │
//! └───────────────────────────────────────────────────┘
//!                         │
//!                         ▼
//! ┌───────────────────────────────────────────────────┐
//! │        Immutable<C> / Filtered<C, P> / ...         │
//! └───────────────────────────────────────────────────┘
//!                         │
//!                         ▼
//! ┌───────────────────────────────────────────────────┐
//! │        IterOf<I> / TryIterOf<I> / VecCursor        │
//! └───────────────────────────────────────────────────┘
//! ```
//!
//! # Available Decorators
//!
//! - **`Immutable`**: hides any removal capability of the wrapped cursor
//! - **`Synced`**: read/write-locked cursor that can be shared between threads
//! - **`Filtered`**: yields only the elements accepted by a predicate
//!
//! # Examples
//!
//! ```rust
//! use decorum::prelude::*;
//!
//! let mut cursor = Immutable::new(IterOf::new([1, 2, 3]));
//! assert_eq!(cursor.advance().unwrap(), 1);
//! assert_eq!(cursor.advance().unwrap(), 2);
//! assert_eq!(cursor.advance().unwrap(), 3);
//! assert!(!cursor.has_more().unwrap());
//! assert!(cursor.advance().unwrap_err().is_exhausted());
//! ```

use crate::error::Result;

mod filtered;
mod immutable;
mod lock;
mod lookahead;
mod source;
mod synced;

pub use filtered::Filtered;
pub use immutable::Immutable;
pub use lock::SharedLock;
pub use source::{IterOf, TryIterOf, VecCursor};
pub use synced::Synced;

/// A stateful, forward-only position over a sequence.
pub trait Cursor {
    /// The element type.
    type Item;

    /// Returns whether [`advance`](Cursor::advance) would yield an element.
    ///
    /// This never moves the position: calling it repeatedly returns the same
    /// answer until the next `advance`.
    fn has_more(&self) -> Result<bool>;

    /// Moves the position forward and returns the element passed over.
    ///
    /// Fails with [`Failure::Exhausted`](crate::Failure::Exhausted) when no
    /// element remains.
    fn advance(&mut self) -> Result<Self::Item>;

    /// Adapts the cursor into a standard iterator of `Result`s.
    ///
    /// The iterator ends after the last element or after the first failure.
    fn into_results(self) -> CursorIter<Self>
    where
        Self: Sized,
    {
        CursorIter::new(self)
    }
}

/// A cursor that can also remove the element it last returned from the
/// underlying collection.
///
/// [`Immutable`] never implements this trait, whatever it wraps.
pub trait RemovableCursor: Cursor {
    /// Removes the element returned by the most recent `advance`.
    ///
    /// Fails with [`Failure::IllegalState`](crate::Failure::IllegalState) if
    /// nothing has been returned yet, or if that element was already removed.
    fn remove(&mut self) -> Result<()>;
}

impl<C> Cursor for &mut C
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    #[inline]
    fn has_more(&self) -> Result<bool> {
        (**self).has_more()
    }

    #[inline]
    fn advance(&mut self) -> Result<Self::Item> {
        (**self).advance()
    }
}

impl<C> Cursor for Box<C>
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    #[inline]
    fn has_more(&self) -> Result<bool> {
        (**self).has_more()
    }

    #[inline]
    fn advance(&mut self) -> Result<Self::Item> {
        (**self).advance()
    }
}

impl<C> RemovableCursor for &mut C
where
    C: RemovableCursor + ?Sized,
{
    #[inline]
    fn remove(&mut self) -> Result<()> {
        (**self).remove()
    }
}

/// Standard [`Iterator`] over a cursor, created by [`Cursor::into_results`].
#[derive(Debug)]
pub struct CursorIter<C> {
    cursor: C,
    done: bool,
}

impl<C> CursorIter<C> {
    fn new(cursor: C) -> Self {
        Self {
            cursor,
            done: false,
        }
    }

    /// Unwraps the underlying cursor.
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = Result<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let outcome = match self.cursor.has_more() {
            Ok(true) => self.cursor.advance(),
            Ok(false) => {
                self.done = true;
                return None;
            }
            Err(failure) => Err(failure),
        };
        if outcome.is_err() {
            self.done = true;
        }
        Some(outcome)
    }
}

impl<C: Cursor> std::iter::FusedIterator for CursorIter<C> {}

//! Leaf cursors built from standard collections and iterators.

use std::iter::Fuse;

use super::lookahead::Lookahead;
use super::{Cursor, RemovableCursor};
use crate::error::{Failure, Result};

/// Cursor over any [`IntoIterator`].
///
/// `has_more` pulls at most one element ahead from the iterator; the element
/// is kept until the next `advance`.
///
/// ```rust
/// use decorum::prelude::*;
///
/// let mut cursor = IterOf::new(vec![10, 20]);
/// assert!(cursor.has_more().unwrap());
/// assert_eq!(cursor.advance().unwrap(), 10);
/// assert_eq!(cursor.advance().unwrap(), 20);
/// assert!(!cursor.has_more().unwrap());
/// ```
#[derive(Debug)]
pub struct IterOf<I: Iterator> {
    lookahead: Lookahead<Fuse<I>, I::Item>,
}

impl<I: Iterator> IterOf<I> {
    /// Creates a cursor over `items`.
    pub fn new<T>(items: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            lookahead: Lookahead::new(items.into_iter().fuse()),
        }
    }

    /// Unwraps the remaining iterator. An element already pulled ahead by
    /// `has_more` is lost.
    pub fn into_inner(self) -> Fuse<I> {
        self.lookahead.into_source()
    }
}

impl<I: Iterator> Cursor for IterOf<I> {
    type Item = I::Item;

    #[inline]
    fn has_more(&self) -> Result<bool> {
        self.lookahead.has_more(|iter| Ok(iter.next()))
    }

    #[inline]
    fn advance(&mut self) -> Result<I::Item> {
        self.lookahead.advance(|iter| Ok(iter.next()))
    }
}

/// Cursor over an iterator whose elements may themselves be failures.
///
/// A failed element is reported by `has_more` and returned by the following
/// `advance`; iteration may continue afterwards.
#[derive(Debug)]
pub struct TryIterOf<I, T> {
    lookahead: Lookahead<Fuse<I>, T>,
}

impl<I, T> TryIterOf<I, T>
where
    I: Iterator<Item = Result<T>>,
{
    /// Creates a cursor over fallible `items`.
    pub fn new<S>(items: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            lookahead: Lookahead::new(items.into_iter().fuse()),
        }
    }
}

impl<I, T> Cursor for TryIterOf<I, T>
where
    I: Iterator<Item = Result<T>>,
{
    type Item = T;

    #[inline]
    fn has_more(&self) -> Result<bool> {
        self.lookahead.has_more(|iter| iter.next().transpose())
    }

    #[inline]
    fn advance(&mut self) -> Result<T> {
        self.lookahead.advance(|iter| iter.next().transpose())
    }
}

/// Cursor over a borrowed vector that supports removing the element it last
/// returned.
///
/// ```rust
/// use decorum::prelude::*;
///
/// let mut items = vec![1, 2, 3];
/// let mut cursor = VecCursor::new(&mut items);
/// cursor.advance().unwrap();
/// cursor.advance().unwrap();
/// cursor.remove().unwrap();
/// drop(cursor);
/// assert_eq!(items, vec![1, 3]);
/// ```
#[derive(Debug)]
pub struct VecCursor<'a, T> {
    items: &'a mut Vec<T>,
    position: usize,
    last: Option<usize>,
}

impl<'a, T> VecCursor<'a, T> {
    /// Creates a cursor positioned before the first element of `items`.
    pub fn new(items: &'a mut Vec<T>) -> Self {
        Self {
            items,
            position: 0,
            last: None,
        }
    }
}

impl<T: Clone> Cursor for VecCursor<'_, T> {
    type Item = T;

    #[inline]
    fn has_more(&self) -> Result<bool> {
        Ok(self.position < self.items.len())
    }

    fn advance(&mut self) -> Result<T> {
        let Some(item) = self.items.get(self.position).cloned() else {
            #[cfg(feature = "tracing")]
            tracing::trace!(len = self.items.len(), "vec_cursor: advance past the end");
            return Err(Failure::Exhausted);
        };
        self.last = Some(self.position);
        self.position += 1;
        Ok(item)
    }
}

impl<T: Clone> RemovableCursor for VecCursor<'_, T> {
    fn remove(&mut self) -> Result<()> {
        let index = self.last.take().ok_or_else(|| {
            Failure::IllegalState("remove requires a preceding advance".into())
        })?;
        self.items.remove(index);
        self.position -= 1;
        Ok(())
    }
}

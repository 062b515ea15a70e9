//! Positional lookup over a sequence.

use super::Scalar;
use crate::cursor::Cursor;
use crate::error::Result;
use crate::sequence::Sequence;

/// Evaluates to the element at a fixed position of a sequence, or to the
/// fallback when the sequence is shorter than that.
///
/// The sequence is re-scanned from its start on every evaluation.
///
/// ```rust
/// use decorum::prelude::*;
///
/// let third = ItemAt::new(2, vec!['a', 'b', 'c'], Constant::new('?'));
/// assert_eq!(third.value().unwrap(), 'c');
///
/// let tenth = ItemAt::new(9, vec!['a', 'b', 'c'], Constant::new('?'));
/// assert_eq!(tenth.value().unwrap(), '?');
/// ```
#[derive(Debug, Clone)]
pub struct ItemAt<S, F> {
    position: usize,
    source: S,
    fallback: F,
}

impl<S, F> ItemAt<S, F>
where
    S: Sequence,
    F: Scalar<Output = S::Item>,
{
    /// Looks up `position` (zero-based) in `source`.
    pub fn new(position: usize, source: S, fallback: F) -> Self {
        Self {
            position,
            source,
            fallback,
        }
    }
}

impl<S, F> Scalar for ItemAt<S, F>
where
    S: Sequence,
    F: Scalar<Output = S::Item>,
{
    type Output = S::Item;

    fn value(&self) -> Result<S::Item> {
        let cursor = self.source.cursor()?;
        nth_or_else(cursor, self.position, &self.fallback)
    }
}

/// Advances `cursor` to `position` and returns the element there, or
/// evaluates `fallback` if the cursor runs out first.
pub(crate) fn nth_or_else<C, F>(mut cursor: C, position: usize, fallback: &F) -> Result<C::Item>
where
    C: Cursor,
    F: Scalar<Output = C::Item>,
{
    for _ in 0..position {
        if !cursor.has_more()? {
            return fallback.value();
        }
        cursor.advance()?;
    }
    if cursor.has_more()? {
        cursor.advance()
    } else {
        fallback.value()
    }
}

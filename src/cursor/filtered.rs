//! Predicate filtering over a cursor.

use super::lookahead::Lookahead;
use super::Cursor;
use crate::error::Result;

/// Yields only the elements of the inner cursor accepted by a predicate.
///
/// The predicate may fail; its failure is reported by the `has_more` or
/// `advance` call that evaluated it, and scanning resumes after the rejected
/// element on the next call.
///
/// ```rust
/// use decorum::prelude::*;
///
/// let odd = Filtered::new(IterOf::new(1..=6), |n: &i32| Ok(n % 2 == 1));
/// let items: Vec<i32> = odd.into_results().collect::<decorum::Result<_>>().unwrap();
/// assert_eq!(items, vec![1, 3, 5]);
/// ```
pub struct Filtered<C: Cursor, P> {
    lookahead: Lookahead<C, C::Item>,
    predicate: P,
}

impl<C, P> Filtered<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> Result<bool>,
{
    /// Wraps `cursor`, keeping the elements for which `predicate` holds.
    pub fn new(cursor: C, predicate: P) -> Self {
        Self {
            lookahead: Lookahead::new(cursor),
            predicate,
        }
    }
}

fn next_match<C, P>(cursor: &mut C, predicate: &P) -> Result<Option<C::Item>>
where
    C: Cursor,
    P: Fn(&C::Item) -> Result<bool>,
{
    while cursor.has_more()? {
        let item = cursor.advance()?;
        if predicate(&item)? {
            return Ok(Some(item));
        }
    }
    Ok(None)
}

impl<C, P> Cursor for Filtered<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> Result<bool>,
{
    type Item = C::Item;

    fn has_more(&self) -> Result<bool> {
        self.lookahead
            .has_more(|cursor| next_match(cursor, &self.predicate))
    }

    fn advance(&mut self) -> Result<C::Item> {
        let predicate = &self.predicate;
        self.lookahead
            .advance(|cursor| next_match(cursor, predicate))
    }
}

impl<C, P> std::fmt::Debug for Filtered<C, P>
where
    C: Cursor + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filtered")
            .field("lookahead", &self.lookahead)
            .finish_non_exhaustive()
    }
}

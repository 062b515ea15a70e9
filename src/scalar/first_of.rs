//! First element of a sequence matching a predicate.
//!
//! `FirstOf` composes three parts: a predicate, a re-scannable source, and a
//! fallback scalar evaluated when nothing matches. Each evaluation scans the
//! source from its start, strictly in order, and stops at the first match.
//!
//! # Examples
//!
//! ```rust
//! use decorum::prelude::*;
//!
//! let is_even = |n: &i32| Ok(n % 2 == 0);
//!
//! assert_eq!(FirstOf::matching(is_even, vec![1, 3, 4, 5], -1).value().unwrap(), 4);
//! assert_eq!(FirstOf::matching(is_even, vec![1, 3, 5], -1).value().unwrap(), -1);
//! assert_eq!(FirstOf::or(Vec::<i32>::new(), 7).value().unwrap(), 7);
//! ```

use super::item_at::nth_or_else;
use super::{Constant, Scalar};
use crate::cursor::Filtered;
use crate::error::Result;
use crate::sequence::Sequence;

/// Predicate that accepts every element.
#[inline]
pub fn always<T>(_: &T) -> Result<bool> {
    Ok(true)
}

/// Predicate type used by the always-true constructors.
type Always<T> = fn(&T) -> Result<bool>;

/// Searches a sequence for the first element accepted by a predicate.
///
/// # Type Parameters
///
/// - `P`: Predicate, `Fn(&Item) -> Result<bool>`
/// - `S`: Source sequence
/// - `F`: Fallback scalar
#[derive(Debug, Clone)]
pub struct FirstOf<P, S, F> {
    predicate: P,
    source: S,
    fallback: F,
}

impl<P, S, F> FirstOf<P, S, F>
where
    S: Sequence,
    P: Fn(&S::Item) -> Result<bool>,
    F: Scalar<Output = S::Item>,
{
    /// Creates a search with an explicit predicate and fallback scalar.
    pub fn new(predicate: P, source: S, fallback: F) -> Self {
        Self {
            predicate,
            source,
            fallback,
        }
    }
}

impl<P, S> FirstOf<P, S, Constant<S::Item>>
where
    S: Sequence,
    S::Item: Clone,
    P: Fn(&S::Item) -> Result<bool>,
{
    /// Creates a search whose fallback is the literal `fallback`.
    pub fn matching(predicate: P, source: S, fallback: S::Item) -> Self {
        Self::new(predicate, source, Constant::new(fallback))
    }
}

impl<S, F> FirstOf<Always<S::Item>, S, F>
where
    S: Sequence,
    F: Scalar<Output = S::Item>,
{
    /// Takes the first element unconditionally, or evaluates `fallback` when
    /// the source is empty.
    pub fn any(source: S, fallback: F) -> Self {
        Self::new(always::<S::Item>, source, fallback)
    }
}

impl<S> FirstOf<Always<S::Item>, S, Constant<S::Item>>
where
    S: Sequence,
    S::Item: Clone,
{
    /// Takes the first element unconditionally, or the literal `fallback` when
    /// the source is empty.
    pub fn or(source: S, fallback: S::Item) -> Self {
        Self::new(always::<S::Item>, source, Constant::new(fallback))
    }
}

impl<P, S, F> Scalar for FirstOf<P, S, F>
where
    S: Sequence,
    P: Fn(&S::Item) -> Result<bool>,
    F: Scalar<Output = S::Item>,
{
    type Output = S::Item;

    fn value(&self) -> Result<S::Item> {
        let matches = Filtered::new(self.source.cursor()?, &self.predicate);
        nth_or_else(matches, 0, &self.fallback)
    }
}

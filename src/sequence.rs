//! Re-scannable sources.
//!
//! A [`Sequence`] hands out a fresh [`Cursor`] positioned at its first element
//! on every call, which lets scalars such as [`FirstOf`](crate::scalar::FirstOf)
//! re-scan their source on each evaluation.

use std::iter::Cloned;
use std::slice;

use crate::cursor::{Cursor, IterOf};
use crate::error::Result;

/// A source that can be scanned from the start any number of times.
pub trait Sequence {
    /// The element type.
    type Item;

    /// The cursor type handed out by [`cursor`](Sequence::cursor).
    type Cursor<'a>: Cursor<Item = Self::Item>
    where
        Self: 'a;

    /// Opens a new cursor positioned before the first element.
    fn cursor(&self) -> Result<Self::Cursor<'_>>;
}

impl<T: Clone> Sequence for [T] {
    type Item = T;
    type Cursor<'a> = IterOf<Cloned<slice::Iter<'a, T>>> where Self: 'a;

    #[inline]
    fn cursor(&self) -> Result<Self::Cursor<'_>> {
        Ok(IterOf::new(self.iter().cloned()))
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;
    type Cursor<'a> = IterOf<Cloned<slice::Iter<'a, T>>> where Self: 'a;

    #[inline]
    fn cursor(&self) -> Result<Self::Cursor<'_>> {
        self.as_slice().cursor()
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;
    type Cursor<'a> = IterOf<Cloned<slice::Iter<'a, T>>> where Self: 'a;

    #[inline]
    fn cursor(&self) -> Result<Self::Cursor<'_>> {
        self.as_slice().cursor()
    }
}

impl<S> Sequence for &S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;
    type Cursor<'a> = S::Cursor<'a> where Self: 'a;

    #[inline]
    fn cursor(&self) -> Result<Self::Cursor<'_>> {
        (**self).cursor()
    }
}

/// A sequence backed by a cursor factory.
///
/// The factory runs once per scan and may fail, e.g. when the source must be
/// opened first.
///
/// ```rust
/// use decorum::prelude::*;
///
/// let numbers = SequenceOf::new(|| Ok(IterOf::new(1..=3)));
/// let first = FirstOf::or(&numbers, 0);
/// assert_eq!(first.value().unwrap(), 1);
/// assert_eq!(first.value().unwrap(), 1);
/// ```
#[derive(Clone)]
pub struct SequenceOf<F> {
    factory: F,
}

impl<F> SequenceOf<F> {
    /// Creates a sequence that opens cursors with `factory`.
    pub fn new<C>(factory: F) -> Self
    where
        F: Fn() -> Result<C>,
        C: Cursor,
    {
        Self { factory }
    }
}

impl<F, C> Sequence for SequenceOf<F>
where
    F: Fn() -> Result<C>,
    C: Cursor,
{
    type Item = C::Item;
    type Cursor<'a> = C where Self: 'a;

    #[inline]
    fn cursor(&self) -> Result<C> {
        (self.factory)()
    }
}

impl<F> std::fmt::Debug for SequenceOf<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceOf").finish_non_exhaustive()
    }
}

//! Thread-safe memoizing decorator.
//!
//! `Solid` has the same replay semantics as [`Sticky`](super::Sticky), but its
//! stored outcome lives in a [`OnceLock`], so one instance can be shared
//! between threads. Concurrent first evaluations block until the single
//! winning evaluation has finished; the wrapped computation runs exactly once.

use std::sync::OnceLock;

use super::Scalar;
use crate::error::Result;

/// Memoizing wrapper that may be evaluated from several threads at once.
pub struct Solid<S: Scalar> {
    origin: S,
    outcome: OnceLock<Result<S::Output>>,
}

impl<S: Scalar> Solid<S> {
    /// Creates a thread-safe memoizing wrapper around `origin`.
    #[inline]
    pub fn new(origin: S) -> Self {
        Self {
            origin,
            outcome: OnceLock::new(),
        }
    }

    /// Returns `true` once the inner scalar has been evaluated.
    #[inline]
    pub fn is_computed(&self) -> bool {
        self.outcome.get().is_some()
    }

    /// Unwraps the inner scalar, discarding any stored outcome.
    #[inline]
    pub fn into_inner(self) -> S {
        self.origin
    }
}

impl<S> Scalar for Solid<S>
where
    S: Scalar,
    S::Output: Clone,
{
    type Output = S::Output;

    fn value(&self) -> Result<S::Output> {
        self.outcome
            .get_or_init(|| {
                #[cfg(feature = "tracing")]
                tracing::trace!("solid: first evaluation");
                self.origin.value()
            })
            .clone()
    }
}

impl<S> std::fmt::Debug for Solid<S>
where
    S: Scalar + std::fmt::Debug,
    S::Output: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solid")
            .field("origin", &self.origin)
            .field("outcome", &self.outcome.get())
            .finish()
    }
}

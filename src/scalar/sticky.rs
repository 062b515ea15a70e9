//! Memoizing decorator for single-threaded use.
//!
//! `Sticky` runs the wrapped computation on its first evaluation, stores the
//! outcome, and replays it on every later evaluation. Failures are stored too:
//! a computation that failed once is never retried.
//!
//! # Examples
//!
//! ```rust
//! use decorum::prelude::*;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let sticky = Sticky::new(ScalarOf::new(|| {
//!     calls.set(calls.get() + 1);
//!     Err::<u32, _>(Failure::other("offline"))
//! }));
//!
//! assert!(sticky.value().is_err());
//! assert!(sticky.value().is_err());
//! assert_eq!(calls.get(), 1);
//! ```
//!
//! # Thread Safety
//!
//! `Sticky` holds no lock and is `!Sync`, so it cannot be evaluated from two
//! threads at once. Use [`Solid`](super::Solid) when the memoized value must be
//! shared across threads.

use std::cell::OnceCell;

use super::Scalar;
use crate::error::Result;

/// Memoizing wrapper: the inner scalar is evaluated at most once.
///
/// # Type Parameters
///
/// - `S`: Inner scalar type
///
/// The output type must be `Clone`, since every evaluation hands out its own
/// copy of the stored outcome.
pub struct Sticky<S: Scalar> {
    origin: S,
    outcome: OnceCell<Result<S::Output>>,
}

impl<S: Scalar> Sticky<S> {
    /// Creates a memoizing wrapper around `origin`.
    ///
    /// Nothing is evaluated until the first call to [`Scalar::value`].
    #[inline]
    pub fn new(origin: S) -> Self {
        Self {
            origin,
            outcome: OnceCell::new(),
        }
    }

    /// Returns `true` once the inner scalar has been evaluated.
    #[inline]
    pub fn is_computed(&self) -> bool {
        self.outcome.get().is_some()
    }

    /// Gets a reference to the inner scalar.
    #[inline]
    pub fn inner(&self) -> &S {
        &self.origin
    }

    /// Unwraps the inner scalar, discarding any stored outcome.
    #[inline]
    pub fn into_inner(self) -> S {
        self.origin
    }
}

impl<S> Scalar for Sticky<S>
where
    S: Scalar,
    S::Output: Clone,
{
    type Output = S::Output;

    /// Returns the stored outcome, evaluating the inner scalar first if needed.
    ///
    /// # Panics
    ///
    /// Panics if the inner scalar re-enters this same `Sticky` while it is
    /// being evaluated for the first time.
    fn value(&self) -> Result<S::Output> {
        if let Some(outcome) = self.outcome.get() {
            #[cfg(feature = "tracing")]
            tracing::trace!(ok = outcome.is_ok(), "sticky: replaying stored outcome");
            return outcome.clone();
        }

        #[cfg(feature = "tracing")]
        tracing::trace!("sticky: first evaluation");
        self.outcome.get_or_init(|| self.origin.value()).clone()
    }
}

impl<S> std::fmt::Debug for Sticky<S>
where
    S: Scalar + std::fmt::Debug,
    S::Output: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sticky")
            .field("origin", &self.origin)
            .field("outcome", &self.outcome.get())
            .finish()
    }
}

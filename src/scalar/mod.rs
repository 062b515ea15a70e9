//! Deferred values and their decorators.
//!
//! A [`Scalar`] is a computation that has not run yet: a single
//! "evaluate or fail" operation. Decorators in this module implement the same
//! trait as the scalar they wrap, so they can be stacked freely.
//!
//! # Available Decorators
//!
//! - **`Sticky`**: runs the wrapped computation at most once (single-threaded)
//! - **`Solid`**: like `Sticky`, but safe to share between threads
//! - **`IoChecked`**: translates every failure into an `std::io::Error`
//! - **`Unchecked`**: turns any failure into a non-recoverable panic
//! - **`NoNulls`**: fails with `Failure::Absent` when an optional result is missing
//! - **`ItemAt`** / **`FirstOf`**: positional and predicate lookups over a sequence
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
//!     Ok(calls.get() * 10)
//! }));
//!
//! assert_eq!(sticky.value().unwrap(), 10);
//! assert_eq!(sticky.value().unwrap(), 10);
//! assert_eq!(calls.get(), 1);
//! ```
//!
//! # Stacking Order
//!
//! ```text
//! Unchecked<Sticky<NoNulls<ScalarOf<F>>>>
//!    ^        ^       ^         ^
//!    |        |       |         └─ Raw computation
//!    |        |       └─ Absence check
//!    |        └─ Memoization (failures included)
//!    └─ No Result at the call site
//! ```

use std::rc::Rc;
use std::sync::Arc;

use crate::error::Result;

mod checked;
mod constant;
mod first_of;
mod item_at;
mod no_nulls;
mod solid;
mod sticky;

pub use checked::{IoChecked, Unchecked};
pub use constant::{Constant, ScalarOf};
pub use first_of::{always, FirstOf};
pub use item_at::ItemAt;
pub use no_nulls::NoNulls;
pub use solid::Solid;
pub use sticky::Sticky;

/// A deferred computation that produces a value or fails.
///
/// Each call to [`value`](Scalar::value) is independent unless a memoizing
/// decorator wraps the scalar.
pub trait Scalar {
    /// The type of the produced value.
    type Output;

    /// Evaluates the computation now.
    fn value(&self) -> Result<Self::Output>;
}

impl<S> Scalar for &S
where
    S: Scalar + ?Sized,
{
    type Output = S::Output;

    #[inline]
    fn value(&self) -> Result<Self::Output> {
        (**self).value()
    }
}

impl<S> Scalar for Box<S>
where
    S: Scalar + ?Sized,
{
    type Output = S::Output;

    #[inline]
    fn value(&self) -> Result<Self::Output> {
        (**self).value()
    }
}

impl<S> Scalar for Rc<S>
where
    S: Scalar + ?Sized,
{
    type Output = S::Output;

    #[inline]
    fn value(&self) -> Result<Self::Output> {
        (**self).value()
    }
}

impl<S> Scalar for Arc<S>
where
    S: Scalar + ?Sized,
{
    type Output = S::Output;

    #[inline]
    fn value(&self) -> Result<Self::Output> {
        (**self).value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forwarding_impls() {
        let scalar = Constant::new(5);
        assert_eq!((&scalar).value().unwrap(), 5);
        assert_eq!(Box::new(Constant::new(6)).value().unwrap(), 6);
        assert_eq!(Rc::new(Constant::new(7)).value().unwrap(), 7);
        assert_eq!(Arc::new(Constant::new(8)).value().unwrap(), 8);
    }

    #[test]
    fn test_trait_object() {
        let scalars: Vec<Box<dyn Scalar<Output = i32>>> = vec![
            Box::new(Constant::new(1)),
            Box::new(ScalarOf::new(|| Ok(2))),
        ];
        let values: Vec<i32> = scalars.iter().map(|s| s.value().unwrap()).collect();
        assert_eq!(values, vec![1, 2]);
    }
}

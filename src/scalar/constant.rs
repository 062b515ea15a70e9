//! Leaf scalars: closures and literals.

use super::Scalar;
use crate::error::Result;

/// Adapts a closure into a [`Scalar`].
///
/// The closure runs on every evaluation; wrap it in
/// [`Sticky`](super::Sticky) to run it once.
#[derive(Clone)]
pub struct ScalarOf<F> {
    func: F,
}

impl<F> ScalarOf<F> {
    /// Creates a scalar evaluating `func` on each call.
    #[inline]
    pub fn new<T>(func: F) -> Self
    where
        F: Fn() -> Result<T>,
    {
        Self { func }
    }
}

impl<F, T> Scalar for ScalarOf<F>
where
    F: Fn() -> Result<T>,
{
    type Output = T;

    #[inline]
    fn value(&self) -> Result<T> {
        (self.func)()
    }
}

impl<F> std::fmt::Debug for ScalarOf<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarOf").finish_non_exhaustive()
    }
}

/// A scalar that always yields a clone of a fixed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant<T> {
    value: T,
}

impl<T> Constant<T> {
    /// Creates a scalar for `value`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Unwraps the literal.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone> Scalar for Constant<T> {
    type Output = T;

    #[inline]
    fn value(&self) -> Result<T> {
        Ok(self.value.clone())
    }
}

impl<T> From<T> for Constant<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Failure;
    use std::cell::Cell;

    #[test]
    fn test_scalar_of_runs_every_time() {
        let calls = Cell::new(0);
        let scalar = ScalarOf::new(|| {
            calls.set(calls.get() + 1);
            Ok(calls.get())
        });

        assert_eq!(scalar.value().unwrap(), 1);
        assert_eq!(scalar.value().unwrap(), 2);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_scalar_of_propagates_failure() {
        let scalar = ScalarOf::new(|| -> Result<u8> { Err(Failure::Exhausted) });
        assert!(scalar.value().unwrap_err().is_exhausted());
    }

    #[test]
    fn test_constant() {
        let constant = Constant::from(String::from("fixed"));
        assert_eq!(constant.value().unwrap(), "fixed");
        assert_eq!(constant.value().unwrap(), "fixed");
        assert_eq!(constant.into_inner(), "fixed");
    }
}

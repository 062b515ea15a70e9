//! Failure translation decorators.
//!
//! [`IoChecked`] narrows every failure of a scalar to the I/O-class kind.
//! [`Unchecked`] goes one step further: it removes the `Result` from the call
//! site entirely and raises a non-recoverable [`Unrecoverable`] panic instead.
//!
//! ```rust
//! use decorum::prelude::*;
//! use std::io;
//!
//! let failing = ScalarOf::new(|| -> decorum::Result<u8> { Err(Failure::other("parse")) });
//! let err = IoChecked::new(&failing).io_value().unwrap_err();
//! assert_eq!(err.kind(), io::ErrorKind::Other);
//!
//! let fine = Unchecked::new(Constant::new(4));
//! assert_eq!(fine.value(), 4);
//! ```

use std::io;
use std::panic;
use std::sync::Arc;

use super::Scalar;
use crate::error::{Failure, Result, Unrecoverable};

/// Translates any failure of the inner scalar into an [`io::Error`].
///
/// - `Failure::Io` is passed through. If nothing else shares the error it is
///   returned as-is; otherwise a new error of the same [`io::ErrorKind`] is
///   built with the original as its source.
/// - Every other failure becomes an `ErrorKind::Other` error whose source is
///   the original failure.
#[derive(Debug, Clone)]
pub struct IoChecked<S> {
    origin: S,
}

impl<S: Scalar> IoChecked<S> {
    /// Wraps `origin`.
    #[inline]
    pub fn new(origin: S) -> Self {
        Self { origin }
    }

    /// Evaluates the inner scalar, reporting failures as [`io::Error`].
    pub fn io_value(&self) -> io::Result<S::Output> {
        self.origin.value().map_err(into_io)
    }
}

fn into_io(failure: Failure) -> io::Error {
    match failure {
        Failure::Io(err) => match Arc::try_unwrap(err) {
            Ok(owned) => owned,
            Err(shared) => io::Error::new(shared.kind(), Failure::Io(shared)),
        },
        other => {
            #[cfg(feature = "tracing")]
            tracing::trace!(failure = %other, "io_checked: wrapping non-I/O failure");
            io::Error::new(io::ErrorKind::Other, other)
        }
    }
}

impl<S: Scalar> Scalar for IoChecked<S> {
    type Output = S::Output;

    /// Evaluates the inner scalar; any failure comes back as `Failure::Io`.
    #[inline]
    fn value(&self) -> Result<S::Output> {
        self.io_value().map_err(Failure::from)
    }
}

/// Evaluates a scalar without a recoverable failure path.
///
/// The inner scalar is evaluated through [`IoChecked`]. On failure this
/// decorator panics with an [`Unrecoverable`] payload carrying the translated
/// [`io::Error`], which keeps the original failure as its source.
#[derive(Debug, Clone)]
pub struct Unchecked<S> {
    origin: IoChecked<S>,
}

impl<S: Scalar> Unchecked<S> {
    /// Wraps `origin`.
    #[inline]
    pub fn new(origin: S) -> Self {
        Self {
            origin: IoChecked::new(origin),
        }
    }

    /// Evaluates the inner scalar.
    ///
    /// # Panics
    ///
    /// Panics with an [`Unrecoverable`] payload if the inner scalar fails.
    /// The payload can be recovered with [`std::panic::catch_unwind`] and
    /// `downcast::<Unrecoverable>()`.
    pub fn value(&self) -> S::Output {
        self.force()
    }

    fn force(&self) -> S::Output {
        match self.origin.io_value() {
            Ok(value) => value,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(error = %err, "unchecked: raising unrecoverable failure");
                panic::panic_any(Unrecoverable::new(err))
            }
        }
    }
}

impl<S: Scalar> Scalar for Unchecked<S> {
    type Output = S::Output;

    /// Always `Ok`; failures panic instead of being returned.
    #[inline]
    fn value(&self) -> Result<S::Output> {
        Ok(self.force())
    }
}

//! Failure types shared by every decorator.
//!
//! Decorators never swallow a failure. They either forward it unchanged or
//! translate it into another kind while keeping the original reachable
//! through [`std::error::Error::source`].
//!
//! [`Failure`] is `Clone`: causes are held behind [`Arc`] so that memoizing
//! decorators can replay the very same failure on every evaluation.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::io;
use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur while evaluating a scalar or advancing a cursor.
#[derive(Debug, Error, Clone)]
pub enum Failure {
    /// An I/O-class failure.
    ///
    /// This is the recoverable kind that [`IoChecked`](crate::scalar::IoChecked)
    /// translates every other failure into.
    #[error("I/O failure: {0}")]
    Io(#[source] Arc<io::Error>),

    /// A cursor was advanced after it reported no more elements.
    #[error("no more elements in the sequence")]
    Exhausted,

    /// A dependency that was required to be present was absent.
    #[error("{0} is absent")]
    Absent(Cow<'static, str>),

    /// A cursor operation was called in a state that does not permit it.
    ///
    /// For example, removing before the first advance.
    #[error("illegal cursor state: {0}")]
    IllegalState(Cow<'static, str>),

    /// Any other failure raised by a wrapped computation.
    #[error(transparent)]
    Other(Arc<dyn StdError + Send + Sync>),
}

impl Failure {
    /// Wraps an arbitrary error as [`Failure::Other`].
    pub fn other<E>(error: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Failure::Other(Arc::from(error.into()))
    }

    /// Returns `true` for the I/O-class kind.
    pub fn is_io(&self) -> bool {
        matches!(self, Failure::Io(_))
    }

    /// Returns `true` if the failure signals cursor exhaustion.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Failure::Exhausted)
    }
}

impl From<io::Error> for Failure {
    fn from(error: io::Error) -> Self {
        Failure::Io(Arc::new(error))
    }
}

/// A non-recoverable failure.
///
/// Raised as a panic payload by [`Unchecked`](crate::scalar::Unchecked).
/// Callers are not expected to handle it inline, but it can be recovered with
/// [`std::panic::catch_unwind`] and a downcast.
#[derive(Debug, Error)]
#[error("unrecoverable failure: {source}")]
pub struct Unrecoverable {
    #[source]
    source: io::Error,
}

impl Unrecoverable {
    pub(crate) fn new(source: io::Error) -> Self {
        Self { source }
    }

    /// The I/O failure this was raised for.
    pub fn io_error(&self) -> &io::Error {
        &self.source
    }

    /// Consumes the payload and returns the underlying I/O failure.
    pub fn into_io_error(self) -> io::Error {
        self.source
    }
}

/// A specialized `Result` type for decorator operations.
pub type Result<T> = std::result::Result<T, Failure>;

//! Absence check for optional results.

use std::borrow::Cow;

use super::Scalar;
use crate::error::{Failure, Result};

/// Fails with [`Failure::Absent`] when the inner scalar yields `None`.
///
/// The label names the dependency in the failure message, e.g.
/// `"output stream is absent"`.
#[derive(Debug, Clone)]
pub struct NoNulls<S> {
    origin: S,
    label: Cow<'static, str>,
}

impl<S> NoNulls<S> {
    /// Wraps `origin`, naming what it produces as `label`.
    pub fn new(origin: S, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            origin,
            label: label.into(),
        }
    }
}

impl<S, T> Scalar for NoNulls<S>
where
    S: Scalar<Output = Option<T>>,
{
    type Output = T;

    fn value(&self) -> Result<T> {
        self.origin
            .value()?
            .ok_or_else(|| Failure::Absent(self.label.clone()))
    }
}

//! # decorum
//!
//! Composable decorators over deferred values and iteration cursors.
//!
//! Two abstractions sit at the core of this library:
//!
//! - [`Scalar`](scalar::Scalar): a deferred computation producing one value
//!   or a [`Failure`]
//! - [`Cursor`](cursor::Cursor): a forward-only position over a sequence
//!
//! Every decorator implements the same trait as the object it wraps, so
//! behaviors such as memoization, failure translation, filtering, or
//! locking stack in any order without changing the caller's interface.
//!
//! ## Example
//!
//! ```rust
//! use decorum::prelude::*;
//!
//! let config = Unchecked::new(Sticky::new(NoNulls::new(
//!     ScalarOf::new(|| Ok(Some("default".to_string()))),
//!     "configuration",
//! )));
//! assert_eq!(config.value(), "default");
//!
//! let evens = Synced::new(Filtered::new(IterOf::new(1..=6), |n: &i32| Ok(n % 2 == 0)));
//! assert_eq!(evens.advance().unwrap(), 2);
//! assert_eq!(evens.advance().unwrap(), 4);
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): emits `trace`-level events for memoization hits,
//!   failure translation, and exhausted cursors

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cursor;
pub mod error;
pub mod scalar;
pub mod sequence;

pub use error::{Failure, Result, Unrecoverable};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::cursor::{
        Cursor, CursorIter, Filtered, Immutable, IterOf, RemovableCursor, SharedLock, Synced,
        TryIterOf, VecCursor,
    };
    pub use crate::error::{Failure, Unrecoverable};
    pub use crate::scalar::{
        always, Constant, FirstOf, IoChecked, ItemAt, NoNulls, Scalar, ScalarOf, Solid, Sticky,
        Unchecked,
    };
    pub use crate::sequence::{Sequence, SequenceOf};
}

//! Thread-safe cursor decorator.
//!
//! `Synced` serializes cursor operations through a read/write lock:
//! - `has_more` holds the lock in shared mode, so concurrent checks proceed together
//! - `advance` holds it in exclusive mode, so no two callers can consume the same element
//!
//! Both guards are released on every exit path (success, failure or unwinding).
//! A thread that is advancing one cursor of a lock domain may use any other
//! cursor of that domain, so `Synced` cursors sharing one lock can be stacked.
//! Only the ordering of cursor operations is serialized; side effects inside the
//! wrapped cursor's own production logic are not protected any further.
//!
//! # Sharing a lock domain
//!
//! ```rust
//! use decorum::prelude::*;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cursor = Arc::new(Synced::new(IterOf::new(1..=4)));
//! let handles: Vec<_> = (0..2)
//!     .map(|_| {
//!         let cursor = Arc::clone(&cursor);
//!         thread::spawn(move || {
//!             let mut seen = Vec::new();
//!             while let Ok(item) = cursor.advance() {
//!                 seen.push(item);
//!             }
//!             seen
//!         })
//!     })
//!     .collect();
//!
//! let mut all: Vec<i32> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
//! all.sort();
//! assert_eq!(all, vec![1, 2, 3, 4]);
//! ```

use parking_lot::RwLock;

use super::lock::SharedLock;
use super::Cursor;
use crate::error::Result;

/// Cursor wrapper whose operations are ordered by a [`SharedLock`].
///
/// # Type Parameters
///
/// - `C`: Inner cursor type. It must be `Send + Sync` for the wrapper to be
///   shared between threads.
pub struct Synced<C> {
    lock: SharedLock,
    cursor: RwLock<C>,
}

impl<C> Synced<C> {
    /// Wraps `cursor` with a fresh lock of its own.
    pub fn new(cursor: C) -> Self {
        Self::with_lock(SharedLock::new(), cursor)
    }

    /// Wraps `cursor` with a caller-supplied lock.
    ///
    /// Every `Synced` built from clones of the same `lock` shares one lock
    /// domain.
    pub fn with_lock(lock: SharedLock, cursor: C) -> Self {
        Self {
            lock,
            cursor: RwLock::new(cursor),
        }
    }

    /// The lock guarding this cursor.
    pub fn lock(&self) -> &SharedLock {
        &self.lock
    }

    /// Unwraps the inner cursor.
    pub fn into_inner(self) -> C {
        self.cursor.into_inner()
    }
}

impl<C: Cursor> Synced<C> {
    /// Checks for more elements while holding the lock in shared mode.
    #[inline]
    pub fn has_more(&self) -> Result<bool> {
        self.shared_has_more()
    }

    /// Advances while holding the lock in exclusive mode.
    ///
    /// Takes `&self`, so one `Synced` can be advanced from several threads.
    #[inline]
    pub fn advance(&self) -> Result<C::Item> {
        self.exclusive_advance()
    }

    fn shared_has_more(&self) -> Result<bool> {
        let _domain = self.lock.read();
        // Writers of this cursor hold the domain exclusively, so this only
        // waits if the advancing thread re-enters the cursor it is advancing.
        let cursor = self.cursor.read();
        cursor.has_more()
    }

    fn exclusive_advance(&self) -> Result<C::Item> {
        let _domain = self.lock.write();
        let mut cursor = self.cursor.write();
        cursor.advance()
    }
}

impl<C: Cursor> Cursor for Synced<C> {
    type Item = C::Item;

    #[inline]
    fn has_more(&self) -> Result<bool> {
        self.shared_has_more()
    }

    #[inline]
    fn advance(&mut self) -> Result<Self::Item> {
        self.exclusive_advance()
    }
}

impl<C: Cursor> Cursor for &Synced<C> {
    type Item = C::Item;

    #[inline]
    fn has_more(&self) -> Result<bool> {
        self.shared_has_more()
    }

    #[inline]
    fn advance(&mut self) -> Result<Self::Item> {
        self.exclusive_advance()
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for Synced<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Synced")
            .field("lock", &self.lock)
            .field("cursor", &self.cursor)
            .finish()
    }
}

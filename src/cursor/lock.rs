//! Read/write lock handle that several decorators can share.

use std::fmt;
use std::sync::Arc;
use std::thread::{self, ThreadId};

use parking_lot::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Domain {
    lock: RwLock<()>,
    writer: Mutex<Option<ThreadId>>,
}

impl Domain {
    fn held_exclusively_here(&self) -> bool {
        *self.writer.lock() == Some(thread::current().id())
    }
}

/// A cloneable handle to one read/write lock.
///
/// Every clone refers to the same lock, so passing clones to several
/// [`Synced`](super::Synced) cursors puts them in one lock domain: an
/// `advance` on any of them excludes every other operation on all of them.
///
/// Exclusive holds are reentrant for the thread that owns them. While a
/// thread advances one cursor of a domain, it may read or advance any other
/// cursor of the same domain, including a `Synced` stacked inside it. Shared
/// holds may nest too, but a thread holding only a shared hold must not ask
/// for an exclusive one: upgrades wait forever.
///
/// ```rust
/// use decorum::prelude::*;
///
/// let lock = SharedLock::new();
/// let left = Synced::with_lock(lock.clone(), IterOf::new([1, 2]));
/// let right = Synced::with_lock(lock.clone(), IterOf::new([3, 4]));
/// assert!(left.lock().same_domain(right.lock()));
///
/// let stacked = Synced::with_lock(lock.clone(), Synced::with_lock(lock, IterOf::new([5])));
/// assert_eq!(stacked.advance().unwrap(), 5);
/// ```
#[derive(Clone, Default)]
pub struct SharedLock {
    domain: Arc<Domain>,
}

impl SharedLock {
    /// Creates a fresh lock, not shared with anything yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if both handles refer to the same lock.
    pub fn same_domain(&self, other: &SharedLock) -> bool {
        Arc::ptr_eq(&self.domain, &other.domain)
    }

    /// Returns `true` if the lock is currently held in any mode.
    pub fn is_locked(&self) -> bool {
        self.domain.lock.is_locked()
    }

    /// Returns `true` if the lock is currently held in exclusive mode.
    pub fn is_locked_exclusive(&self) -> bool {
        self.domain.lock.is_locked_exclusive()
    }

    pub(crate) fn read(&self) -> DomainGuard<'_> {
        if self.domain.held_exclusively_here() {
            return DomainGuard::nested(&self.domain);
        }
        DomainGuard {
            domain: &self.domain,
            _shared: Some(self.domain.lock.read_recursive()),
            _exclusive: None,
        }
    }

    pub(crate) fn write(&self) -> DomainGuard<'_> {
        if self.domain.held_exclusively_here() {
            return DomainGuard::nested(&self.domain);
        }
        let exclusive = self.domain.lock.write();
        *self.domain.writer.lock() = Some(thread::current().id());
        DomainGuard {
            domain: &self.domain,
            _shared: None,
            _exclusive: Some(exclusive),
        }
    }
}

impl fmt::Debug for SharedLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedLock")
            .field("locked", &self.is_locked())
            .field("exclusive", &self.is_locked_exclusive())
            .field("handles", &Arc::strong_count(&self.domain))
            .finish()
    }
}

/// Hold on a lock domain. A nested hold owns no guard of its own; the
/// outermost exclusive hold of the thread keeps the domain locked.
pub(crate) struct DomainGuard<'a> {
    domain: &'a Domain,
    _shared: Option<RwLockReadGuard<'a, ()>>,
    _exclusive: Option<RwLockWriteGuard<'a, ()>>,
}

impl<'a> DomainGuard<'a> {
    fn nested(domain: &'a Domain) -> Self {
        Self {
            domain,
            _shared: None,
            _exclusive: None,
        }
    }
}

impl Drop for DomainGuard<'_> {
    fn drop(&mut self) {
        // The owner is cleared while the write guard is still held.
        if self._exclusive.is_some() {
            *self.domain.writer.lock() = None;
        }
    }
}

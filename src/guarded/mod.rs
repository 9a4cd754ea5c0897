//! Reader/writer guarded values.
//!
//! Values that have no portable hardware atomic (strings, timestamps, maps)
//! live behind a reader/writer lock owned by the wrapper. Reads take the shared
//! lock and may run concurrently; writes take the exclusive lock.
//!
//! ## Callbacks
//!
//! Some wrappers accept a closure that runs *while the lock is held*
//! (`AtomicBool::set_atomically`, `AtomicBool::val_with_callback`,
//! `AtomicTime::alter`). The closure:
//!
//! - must not call back into the same instance. The lock is not reentrant and
//!   doing so deadlocks the instance permanently. This is not detected.
//! - should be short and must not block indefinitely, since every other caller
//!   of that instance waits for it.
//!
//! If a closure panics, the guard is released during unwinding and the stored
//! value is left as it was before the call. The lock does not poison, so the
//! instance stays usable.

use crate::sync::RwLock;

/// Duration wrapper.
pub mod duration;
/// Boolean wrapper.
pub mod bool;
/// Generic key/value map wrapper.
pub mod map;
/// String wrapper.
pub mod string;
/// Wall clock time wrapper.
pub mod time;

pub use self::bool::AtomicBool;
pub use duration::AtomicDuration;
pub use map::AtomicMap;
pub use string::AtomicString;
pub use time::AtomicTime;

/// Shared core of every lock-based wrapper.
///
/// Owns the value and its lock. All access goes through scoped closures, so a
/// guard never escapes and is dropped on every exit path.
pub(crate) struct Guarded<T> {
    lock: RwLock<T>,
}

impl<T> Guarded<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            lock: RwLock::new(value),
        }
    }

    /// Runs `f` under the shared lock.
    #[inline]
    pub(crate) fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.lock.read();
        f(&guard)
    }

    /// Runs `f` under the exclusive lock.
    #[inline]
    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.lock.write();
        f(&mut guard)
    }

    /// Stores `value`, returning the previous one.
    #[inline]
    pub(crate) fn replace(&self, value: T) -> T {
        self.write(|slot| core::mem::replace(slot, value))
    }

    /// Stores `value`. The previous value is dropped after the lock is released.
    #[inline]
    pub(crate) fn store(&self, value: T) {
        drop(self.replace(value));
    }

    pub(crate) fn into_inner(self) -> T {
        self.lock.into_inner()
    }
}

impl<T: Clone> Guarded<T> {
    /// Returns a copy of the current value.
    #[inline]
    pub(crate) fn load(&self) -> T {
        self.read(T::clone)
    }
}

impl<T: Default> Default for Guarded<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

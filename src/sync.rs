//! Primitive selection.
//!
//! Normal builds use `std` atomics and `parking_lot` locks. Building with
//! `RUSTFLAGS="--cfg loom"` swaps every primitive for its `loom` model so the
//! wrappers can be checked under exhaustive interleavings.

#[cfg(not(loom))]
pub(crate) use std::sync::atomic::{AtomicI32, AtomicI64, Ordering};

#[cfg(loom)]
pub(crate) use loom::sync::atomic::{AtomicI32, AtomicI64, Ordering};

#[cfg(not(loom))]
pub(crate) use parking_lot::RwLock;

#[cfg(loom)]
pub(crate) use self::loom_rwlock::RwLock;

#[cfg(loom)]
mod loom_rwlock {
    use std::sync::PoisonError;

    /// `loom` reader/writer lock with the non-poisoning surface of `parking_lot`.
    pub(crate) struct RwLock<T>(loom::sync::RwLock<T>);

    impl<T> RwLock<T> {
        pub(crate) fn new(value: T) -> Self {
            Self(loom::sync::RwLock::new(value))
        }

        pub(crate) fn read(&self) -> loom::sync::RwLockReadGuard<'_, T> {
            self.0.read().unwrap_or_else(PoisonError::into_inner)
        }

        pub(crate) fn write(&self) -> loom::sync::RwLockWriteGuard<'_, T> {
            self.0.write().unwrap_or_else(PoisonError::into_inner)
        }

        pub(crate) fn into_inner(self) -> T {
            self.0.into_inner().unwrap_or_else(PoisonError::into_inner)
        }
    }
}

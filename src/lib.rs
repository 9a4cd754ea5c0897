//! # `atomkit` - Thread-Safe Value Wrappers
//!
//! Small, independent wrappers that make a single value safe to read and modify
//! from many threads without exposing the synchronization underneath.
//!
//! ## Wrappers
//!
//! | Type              | Value                  | Strategy                |
//! |-------------------|------------------------|-------------------------|
//! | [`AtomicInt32`]   | `i32`                  | hardware atomic         |
//! | [`AtomicInt64`]   | `i64`                  | hardware atomic         |
//! | [`AtomicString`]  | `String`               | reader/writer lock      |
//! | [`AtomicBool`]    | `bool`                 | reader/writer lock      |
//! | [`AtomicTime`]    | `SystemTime`           | reader/writer lock      |
//! | [`AtomicDuration`]| `Duration`             | reader/writer lock      |
//! | [`AtomicMap`]     | `HashMap<K, V>`        | reader/writer lock      |
//!
//! ## Guarantees
//!
//! - **No torn reads**: a value is never observed half written.
//! - **Zero values are usable**: `Default` gives `0`, `""`, `false`,
//!   `UNIX_EPOCH`, `Duration::ZERO` or an empty map.
//! - **Linearizable per instance**: `swap` returns exactly the value that
//!   preceded it; no ordering is implied across different instances.
//! - **No global state**: every instance owns its own value and lock.
//!
//! The integer wrappers never block. Every other wrapper may block while
//! another thread holds a conflicting lock, with no timeout. Closures passed to
//! callback operations run under the lock and must not re-enter the same
//! instance; see [`guarded`].
//!
//! ## Example
//!
//! ```rust
//! use atomkit::{AtomicInt64, AtomicMap};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let hits = Arc::new(AtomicInt64::new(0));
//! let seen = Arc::new(AtomicMap::new());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|id| {
//!         let hits = Arc::clone(&hits);
//!         let seen = Arc::clone(&seen);
//!         thread::spawn(move || {
//!             hits.add(1);
//!             seen.set(id, true);
//!         })
//!     })
//!     .collect();
//!
//! for h in handles {
//!     h.join().unwrap();
//! }
//!
//! assert_eq!(hits.val(), 4);
//! assert_eq!(seen.len(), 4);
//! assert_eq!(seen.get(&2), Some(true));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

/// Emits a `trace!` event for an operation that runs a caller closure under a
/// lock. Expands to nothing without the `tracing` feature.
macro_rules! trace_callback {
    ($wrapper:literal, $op:literal) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "atomkit",
            wrapper = $wrapper,
            op = $op,
            "running callback under lock"
        );
    };
}

pub mod atomic;
pub mod guarded;
mod sync;

pub use atomic::{AtomicInt32, AtomicInt64};
pub use guarded::{AtomicBool, AtomicDuration, AtomicMap, AtomicString, AtomicTime};

// The lock-free wrappers add nothing to the integer they hold.
#[cfg(not(loom))]
const _: () = {
    use core::mem;

    assert!(mem::size_of::<AtomicInt32>() == mem::size_of::<i32>());
    assert!(mem::align_of::<AtomicInt32>() == mem::align_of::<core::sync::atomic::AtomicI32>());
    assert!(mem::size_of::<AtomicInt64>() == mem::size_of::<i64>());
    assert!(mem::align_of::<AtomicInt64>() == mem::align_of::<core::sync::atomic::AtomicI64>());
};

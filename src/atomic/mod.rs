//! Lock-free signed integers.
//!
//! Both types are thin wrappers over the hardware atomic of the same width.
//! Every operation uses `SeqCst`, so all operations on one instance form a
//! single total order that agrees with real time.
//!
//! Important:
//! - Nothing here ever blocks. `add`, `set` and `swap` are single atomic
//!   instructions (or an LL/SC loop on architectures without native RMW).
//! - Overflow wraps in two's complement, matching `fetch_add`.

/// Generates a lock-free integer wrapper.
///
/// * `$name` - the public wrapper type
/// * `$inner` - the atomic it stores (resolved through `crate::sync`)
/// * `$value` - the integer type
macro_rules! impl_atomic_int {
    ($name:ident, $inner:ident, $value:ty) => {
        #[doc = concat!("A `", stringify!($value), "` that can be read and modified atomically from any thread.")]
        ///
        /// The zero value (`Default`) holds `0`.
        #[repr(transparent)]
        pub struct $name {
            inner: $crate::sync::$inner,
        }

        impl $name {
            /// Creates a new wrapper holding `value`.
            #[cfg(not(loom))]
            #[inline]
            pub const fn new(value: $value) -> Self {
                Self {
                    inner: $crate::sync::$inner::new(value),
                }
            }

            /// Creates a new wrapper holding `value`.
            #[cfg(loom)]
            #[inline]
            pub fn new(value: $value) -> Self {
                Self {
                    inner: $crate::sync::$inner::new(value),
                }
            }

            /// Atomically adds `delta` (which may be negative) and returns the
            /// resulting value.
            #[inline]
            pub fn add(&self, delta: $value) -> $value {
                self.inner
                    .fetch_add(delta, $crate::sync::Ordering::SeqCst)
                    .wrapping_add(delta)
            }

            /// Returns the current value.
            #[inline]
            pub fn val(&self) -> $value {
                self.inner.load($crate::sync::Ordering::SeqCst)
            }

            /// Replaces the current value.
            #[inline]
            pub fn set(&self, value: $value) {
                self.inner.store(value, $crate::sync::Ordering::SeqCst);
            }

            /// Replaces the current value, returning the one it held immediately before.
            #[inline]
            pub fn swap(&self, value: $value) -> $value {
                self.inner.swap(value, $crate::sync::Ordering::SeqCst)
            }

            /// Consumes the wrapper, returning the stored value.
            #[inline]
            pub fn into_inner(self) -> $value {
                self.val()
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new(0)
            }
        }

        impl From<$value> for $name {
            #[inline]
            fn from(value: $value) -> Self {
                Self::new(value)
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.val()).finish()
            }
        }
    };
}

/// 32-bit signed integer.
pub mod i32;
/// 64-bit signed integer.
pub mod i64;

pub use self::i32::AtomicInt32;
pub use self::i64::AtomicInt64;

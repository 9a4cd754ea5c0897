use super::Guarded;
use core::fmt;
use std::time::SystemTime;

/// A wall clock instant that can be read and modified from any thread.
///
/// The zero value (`Default`) holds [`SystemTime::UNIX_EPOCH`].
///
/// [`alter`](Self::alter) is the read-modify-write primitive: its closure runs
/// under the exclusive lock and must not call back into the same instance.
pub struct AtomicTime {
    inner: Guarded<SystemTime>,
}

impl AtomicTime {
    /// Creates a new wrapper holding `value`.
    pub fn new(value: SystemTime) -> Self {
        Self {
            inner: Guarded::new(value),
        }
    }

    /// Creates a new wrapper holding the current wall clock time.
    pub fn now() -> Self {
        Self::new(SystemTime::now())
    }

    /// Returns the current value.
    pub fn val(&self) -> SystemTime {
        self.inner.load()
    }

    /// Replaces the current value.
    pub fn set(&self, value: SystemTime) {
        self.alter(|_| value);
    }

    /// Replaces the current value, returning the one it held immediately before.
    pub fn swap(&self, value: SystemTime) -> SystemTime {
        self.inner.replace(value)
    }

    /// Stores `f(current)` under the exclusive lock and returns it.
    ///
    /// If `f` panics the value is left unchanged.
    ///
    /// ```rust
    /// use atomkit::AtomicTime;
    /// use std::time::{Duration, SystemTime};
    ///
    /// let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
    /// let at = AtomicTime::new(t0);
    /// assert_eq!(at.alter(|t| t + Duration::from_secs(3)), t0 + Duration::from_secs(3));
    /// ```
    pub fn alter<F>(&self, f: F) -> SystemTime
    where
        F: FnOnce(SystemTime) -> SystemTime,
    {
        trace_callback!("AtomicTime", "alter");
        self.inner.write(|value| {
            *value = f(*value);
            *value
        })
    }

    /// Consumes the wrapper, returning the stored instant.
    pub fn into_inner(self) -> SystemTime {
        self.inner.into_inner()
    }
}

impl Default for AtomicTime {
    fn default() -> Self {
        Self::new(SystemTime::UNIX_EPOCH)
    }
}

impl From<SystemTime> for AtomicTime {
    fn from(value: SystemTime) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicTime").field(&self.val()).finish()
    }
}

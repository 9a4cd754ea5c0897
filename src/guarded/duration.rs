use super::Guarded;
use core::fmt;
use std::time::Duration;

/// A [`Duration`] that can be read and replaced from any thread.
///
/// Same locking discipline as [`AtomicString`](super::AtomicString). The zero
/// value (`Default`) holds [`Duration::ZERO`].
#[derive(Default)]
pub struct AtomicDuration {
    inner: Guarded<Duration>,
}

impl AtomicDuration {
    /// Creates a new wrapper holding `value`.
    pub fn new(value: Duration) -> Self {
        Self {
            inner: Guarded::new(value),
        }
    }

    /// Returns the current value.
    pub fn val(&self) -> Duration {
        self.inner.load()
    }

    /// Replaces the current value.
    pub fn set(&self, value: Duration) {
        self.inner.store(value);
    }

    /// Replaces the current value, returning the one it held immediately before.
    pub fn swap(&self, value: Duration) -> Duration {
        self.inner.replace(value)
    }

    /// Consumes the wrapper, returning the stored duration.
    pub fn into_inner(self) -> Duration {
        self.inner.into_inner()
    }
}

impl From<Duration> for AtomicDuration {
    fn from(value: Duration) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicDuration").field(&self.val()).finish()
    }
}

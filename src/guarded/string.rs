use super::Guarded;
use core::fmt;

/// A `String` that can be read and replaced from any thread.
///
/// `val` takes the shared lock and returns a copy; `set` and `swap` take the
/// exclusive lock. The zero value (`Default`) holds `""`.
#[derive(Default)]
pub struct AtomicString {
    inner: Guarded<String>,
}

impl AtomicString {
    /// Creates a new wrapper holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: Guarded::new(value.into()),
        }
    }

    /// Returns a copy of the current value.
    pub fn val(&self) -> String {
        self.inner.load()
    }

    /// Replaces the current value.
    pub fn set(&self, value: impl Into<String>) {
        self.inner.store(value.into());
    }

    /// Replaces the current value, returning the one it held immediately before.
    pub fn swap(&self, value: impl Into<String>) -> String {
        self.inner.replace(value.into())
    }

    /// Consumes the wrapper, returning the stored string.
    pub fn into_inner(self) -> String {
        self.inner.into_inner()
    }
}

impl From<String> for AtomicString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for AtomicString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicString").field(&self.val()).finish()
    }
}

use super::Guarded;
use core::fmt;

/// A `bool` that can be read and modified from any thread, with closure-based
/// read-modify-write and read-with-side-effect operations.
///
/// The zero value (`Default`) holds `false`.
///
/// # Deadlocks
///
/// The closures given to [`set_atomically`](Self::set_atomically) and
/// [`val_with_callback`](Self::val_with_callback) run while this instance's
/// lock is held. Calling any method of the same instance from inside them
/// deadlocks.
#[derive(Default)]
pub struct AtomicBool {
    inner: Guarded<bool>,
}

impl AtomicBool {
    /// Creates a new wrapper holding `value`.
    pub fn new(value: bool) -> Self {
        Self {
            inner: Guarded::new(value),
        }
    }

    /// Returns the current value.
    pub fn val(&self) -> bool {
        self.inner.load()
    }

    /// Replaces the current value.
    pub fn set(&self, value: bool) {
        self.inner.store(value);
    }

    /// Replaces the current value, returning the one it held immediately before.
    pub fn swap(&self, value: bool) -> bool {
        self.inner.replace(value)
    }

    /// Replaces the current value with `f(current)` under the exclusive lock.
    ///
    /// No other thread can observe or change the value between the read and
    /// the write. If `f` panics the value is left unchanged.
    ///
    /// ```rust
    /// use atomkit::AtomicBool;
    ///
    /// let flag = AtomicBool::new(false);
    /// flag.set_atomically(|old| !old);
    /// assert!(flag.val());
    /// ```
    pub fn set_atomically<F>(&self, f: F)
    where
        F: FnOnce(bool) -> bool,
    {
        trace_callback!("AtomicBool", "set_atomically");
        self.inner.write(|value| *value = f(*value));
    }

    /// Runs `f` with the current value under the shared lock and returns its
    /// result.
    ///
    /// The value cannot change while `f` runs. An error from `f` is returned
    /// as is; the stored value is never modified by this call.
    ///
    /// ```rust
    /// use atomkit::AtomicBool;
    ///
    /// let ready = AtomicBool::new(false);
    /// let r: Result<(), &str> = ready.val_with_callback(|v| if v { Ok(()) } else { Err("not ready") });
    /// assert_eq!(r, Err("not ready"));
    /// ```
    pub fn val_with_callback<F, R, E>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(bool) -> Result<R, E>,
    {
        trace_callback!("AtomicBool", "val_with_callback");
        self.inner.read(|value| f(*value))
    }

    /// Consumes the wrapper, returning the stored value.
    pub fn into_inner(self) -> bool {
        self.inner.into_inner()
    }
}

impl From<bool> for AtomicBool {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicBool").field(&self.val()).finish()
    }
}

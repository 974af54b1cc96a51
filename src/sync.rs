//! Lock used by shared in-process state.

/// Interior-mutable cell that serializes access through a closure.
///
/// Backed by `std::sync::Mutex` with poisoning ignored, or by a spin lock
/// without `std`.
#[derive(Debug)]
pub struct Shared<T> {
    #[cfg(feature = "std")]
    inner: std::sync::Mutex<T>,
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    inner: spin::Mutex<T>,
}

impl<T> Shared<T> {
    pub const fn new(value: T) -> Self {
        Self {
            #[cfg(feature = "std")]
            inner: std::sync::Mutex::new(value),
            #[cfg(all(not(feature = "std"), feature = "alloc"))]
            inner: spin::Mutex::new(value),
        }
    }

    /// Runs `f` with exclusive access to the value.
    #[cfg(feature = "std")]
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut guard)
    }

    /// Runs `f` with exclusive access to the value.
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

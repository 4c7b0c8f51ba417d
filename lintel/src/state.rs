use std::sync::{Arc, RwLock};

/// Shared component state with interior mutability.
///
/// `State<T>` uses `Arc<RwLock<T>>` internally, making it cheap to clone and
/// safe to move into handler closures and timer tasks. Components keep their
/// ground truth here and hand clones to the handlers they register.
///
/// A panic inside a caller-supplied closure poisons the lock; reads and writes
/// after that keep working on the value as it was left.
///
/// # Example
///
/// ```ignore
/// let count = State::new(0);
/// let handle = count.clone();
/// registry.register("inc", "on_click", Arc::new(move |_: &EventData| {
///     handle.update(|c| *c += 1);
/// }));
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Borrow the current value for the duration of `f`
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Update the value using a closure, returning what the closure returns
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        match self.inner.write() {
            Ok(mut guard) => f(&mut guard),
            Err(poisoned) => {
                log::warn!("State lock poisoned by an earlier panic; recovering");
                f(&mut poisoned.into_inner())
            }
        }
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

use std::cell::{Cell, RefCell};

/// A handle to one piece of component state.
///
/// The core operations only ever read and replace whole values through this, so the
/// frontend can back it with reactive signals and the tests with plain cells.
pub trait Store<T> {
    fn get(&self) -> T;
    fn set(&self, value: T);

    fn update(&self, f: impl FnOnce(&mut T)) {
        let mut value = self.get();
        f(&mut value);
        self.set(value);
    }
}

impl<T: Clone> Store<T> for RefCell<T> {
    fn get(&self) -> T {
        self.borrow().clone()
    }

    fn set(&self, value: T) {
        *self.borrow_mut() = value;
    }
}

impl<T, S: Store<T> + ?Sized> Store<T> for &S {
    fn get(&self) -> T {
        (**self).get()
    }

    fn set(&self, value: T) {
        (**self).set(value)
    }
}

/// Numbers each request in a sequence so late responses can be recognised.
#[derive(Default, Debug)]
pub struct Generation(Cell<u64>);

impl Generation {
    pub fn advance(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

/// Runs the closure when dropped, including when the owning future is cancelled.
pub struct OnDrop<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> OnDrop<F> {
    pub fn new(f: F) -> Self {
        OnDrop(Some(f))
    }
}

impl<F: FnOnce()> Drop for OnDrop<F> {
    fn drop(&mut self) {
        if let Some(f) = self.0.take() {
            f();
        }
    }
}

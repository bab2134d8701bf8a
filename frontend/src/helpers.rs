use fridge_dashboard::Store;
use sycamore::prelude::*;

/// Lets the core operations read and replace a signal.
///
/// Reads are untracked: operations run inside spawned futures, not effects.
#[derive(Clone, Copy)]
pub struct SignalStore<'a, T>(pub &'a Signal<T>);

impl<T: Clone> Store<T> for SignalStore<'_, T> {
    fn get(&self) -> T {
        (*self.0.get_untracked()).clone()
    }

    fn set(&self, value: T) {
        self.0.set(value);
    }
}

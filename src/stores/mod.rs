//! Observable UI state containers.
//!
//! DESIGN
//! ======
//! A [`Store`] is a writable value with any number of subscribers, backed by
//! a `tokio::sync::watch` channel. Writes replace the record and wake every
//! subscriber; readers always see the latest value.

pub mod modal;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use tokio::sync::watch;

pub use modal::{LessonNumber, ModalState, ModalStores};

/// Writable, observable value.
#[derive(Clone, Debug)]
pub struct Store<T> {
    tx: watch::Sender<T>,
}

impl<T> Store<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Replace the current value.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Mutate the current value in place.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Receiver that is notified on every subsequent write.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone> Store<T> {
    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

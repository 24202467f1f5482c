use std::{cell::RefCell, rc::Rc};

use leptos::prelude::*;

/// Shared mutable state an async flow can read and update between awaits.
///
/// Components hand in their `RwSignal`s, tests hand in `Rc<RefCell<_>>`.
pub trait StateCell<T>: Clone + 'static {
    fn read_cell<R>(&self, f: impl FnOnce(&T) -> R) -> R;
    /// `None` once the owner of the cell has been torn down.
    fn try_read_cell<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
    fn write_cell(&self, f: impl FnOnce(&mut T));
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn read_cell<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.with_untracked(f)
    }

    fn try_read_cell<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn write_cell(&self, f: impl FnOnce(&mut T)) {
        self.update(f)
    }
}

impl<T: 'static> StateCell<T> for Rc<RefCell<T>> {
    fn read_cell<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }

    fn try_read_cell<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn write_cell(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut())
    }
}

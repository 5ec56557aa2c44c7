//! Shared write slots for interpolation targets.
//!
//! A `Target<T>` is the slot an interpolating scene writes through while it
//! is active. The slot is shared, not owned: the caller keeps a clone to read
//! results (and to seed the value a lazily-capturing scene starts from). The
//! sequencer never frees or replaces the slot.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct Target<T>(Rc<RefCell<T>>);

impl<T> Target<T> {
    pub fn new(value: T) -> Self {
        Target(Rc::new(RefCell::new(value)))
    }

    /// Overwrite the slot.
    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }

    /// Read the slot through a borrow, without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow())
    }
}

impl<T: Clone> Target<T> {
    /// Copy the current value out of the slot.
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }
}

impl<T> Clone for Target<T> {
    fn clone(&self) -> Self {
        Target(Rc::clone(&self.0))
    }
}

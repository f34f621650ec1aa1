pub mod action;
pub mod snapshot;

use std::cell::{RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::warn;

/// A reversible unit of work tracked by [`crate::history::History`]
///
/// Operations never fail: the receiver methods they call are infallible, and a
/// receiver that has already been dropped turns every call into a no-op.
pub trait Operation: fmt::Debug {
    /// Perform the action the first time
    fn apply(&self);

    /// Undo the effect of the most recent apply/reapply
    fn revert(&self);

    /// Perform the action again after it was reverted
    fn reapply(&self);

    /// Short label for logs and history listings
    fn describe(&self) -> String {
        "operation".to_string()
    }
}

impl<O: Operation + ?Sized> Operation for Box<O> {
    fn apply(&self) {
        (**self).apply()
    }

    fn revert(&self) {
        (**self).revert()
    }

    fn reapply(&self) {
        (**self).reapply()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Non-owning handle to the object an operation mutates.
/// The caller keeps the `Rc`; operations only hold this weak side.
pub struct Receiver<T> {
    inner: Weak<RefCell<T>>,
}

impl<T> Receiver<T> {
    pub fn new(target: &Rc<RefCell<T>>) -> Self {
        Self { inner: Rc::downgrade(target) }
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Run `f` against the receiver if it still exists and nobody else is
    /// borrowing it
    pub fn with<R>(&self, f: impl FnOnce(RefMut<'_, T>) -> R) -> Option<R> {
        let receiver = std::any::type_name::<T>();
        let Some(target) = self.inner.upgrade() else {
            warn!(receiver, "receiver dropped, skipping");
            return None;
        };
        let result = match target.try_borrow_mut() {
            Ok(guard) => Some(f(guard)),
            Err(_) => {
                warn!(receiver, "receiver busy, skipping");
                None
            }
        };
        result
    }
}

impl<T> Clone for Receiver<T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<T> fmt::Debug for Receiver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Receiver")
            .field("type", &std::any::type_name::<T>())
            .field("alive", &self.is_alive())
            .finish()
    }
}

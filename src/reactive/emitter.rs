//! Fire-and-forget notification channel.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::observable::{Subscribers, Subscription};

/// Synchronous event emitter.
///
/// Unlike [`Observable`](super::Observable) it holds no value: every
/// [`emit`](Emitter::emit) reaches every live listener, in registration order,
/// whether or not the payload repeats.
pub struct Emitter<T> {
    listeners: Rc<RefCell<Subscribers<T>>>,
}

impl<T> Clone for Emitter<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Rc::clone(&self.listeners),
        }
    }
}

impl<T: 'static> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.listeners.borrow().count())
            .finish()
    }
}

impl<T: 'static> Emitter<T> {
    pub fn new() -> Self {
        Self {
            listeners: Rc::new(RefCell::new(Subscribers::new())),
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        self.listeners.borrow_mut().add(listener)
    }

    pub fn emit(&self, event: &T) {
        let listeners = self.listeners.borrow_mut().live();
        for listener in listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().count()
    }
}

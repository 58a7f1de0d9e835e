//! Version-tracked shared values with change notification.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = dyn Fn(&T);

/// Ordered list of weakly held callbacks.
///
/// The strong side lives in the [`Subscription`] returned to the caller, so
/// dropping the subscription is enough to stop delivery.
pub(super) struct Subscribers<T> {
    entries: Vec<Weak<Callback<T>>>,
}

impl<T: 'static> Subscribers<T> {
    pub(super) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(super) fn add(&mut self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: Rc<Callback<T>> = Rc::new(callback);
        self.entries.push(Rc::downgrade(&strong));
        Subscription {
            _callback: Box::new(strong),
        }
    }

    /// Live callbacks in registration order. Prunes dead entries.
    pub(super) fn live(&mut self) -> Vec<Rc<Callback<T>>> {
        self.entries.retain(|weak| weak.strong_count() > 0);
        self.entries.iter().filter_map(Weak::upgrade).collect()
    }

    pub(super) fn count(&self) -> usize {
        self.entries
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

/// Keeps a callback registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    _callback: Box<dyn Any>,
}

impl Subscription {
    /// Explicitly unsubscribe.
    pub fn unsubscribe(self) {}
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

struct ObservableInner<T> {
    value: T,
    version: u64,
    subscribers: Subscribers<T>,
}

/// A shared, single-threaded value that notifies subscribers when it changes.
///
/// Cloning an `Observable` yields another handle to the same value.
///
/// # Invariants
///
/// 1. `version` increments exactly once per mutation that changes the value.
/// 2. Setting a value equal to the current one is a no-op. `NaN` over `NaN`
///    counts as equal.
/// 3. Subscribers run in registration order, after the internal borrow is
///    released, so a callback may read or write observables re-entrantly.
pub struct Observable<T> {
    inner: Rc<RefCell<ObservableInner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ObservableInner {
                value,
                version: 0,
                subscribers: Subscribers::new(),
            })),
        }
    }

    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Replace the value, notifying subscribers if it changed.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if same_value(&inner.value, &value) {
                return;
            }
            inner.value = value;
            inner.version += 1;
        }
        self.notify();
    }

    /// Mutate in place; notifies only if the result differs.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut next = self.get();
        f(&mut next);
        self.set(next);
    }

    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        self.inner.borrow_mut().subscribers.add(callback)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.count()
    }

    fn notify(&self) {
        let (value, callbacks) = {
            let mut inner = self.inner.borrow_mut();
            let callbacks = inner.subscribers.live();
            (inner.value.clone(), callbacks)
        };
        for callback in callbacks {
            callback(&value);
        }
    }
}

/// Equality that also treats two self-unequal values (`NaN`) as the same.
#[allow(clippy::eq_op)]
fn same_value<T: PartialEq>(current: &T, next: &T) -> bool {
    current == next || (current != current && next != next)
}

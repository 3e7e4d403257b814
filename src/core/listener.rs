//! Listener registration and notification.
//!
//! Listeners are zero-argument callbacks invoked once per completed dispatch.
//! The registry behaves like a set keyed on callback identity: registering the
//! same `Rc` twice yields a single registration.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Observer callback invoked after every dispatch.
pub type Listener = Rc<dyn Fn()>;

/// Identifier of one registration inside a [`Listeners`] registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
struct ListenerSet {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl ListenerSet {
    fn position_of(&self, listener: &Listener) -> Option<usize> {
        let target = Rc::as_ptr(listener) as *const ();
        self.entries
            .iter()
            .position(|(_, existing)| Rc::as_ptr(existing) as *const () == target)
    }

    fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }
}

/// Shared registry of listeners.
///
/// Cloning produces another handle to the same registry.
#[derive(Clone, Default)]
pub struct Listeners {
    inner: Rc<RefCell<ListenerSet>>,
}

impl Listeners {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener and return its unsubscribe handle.
    ///
    /// Registering a listener that is already present (same `Rc`) does not
    /// add a second entry; the returned handle refers to the existing one.
    pub fn add(&self, listener: Listener) -> Subscription {
        let mut set = self.inner.borrow_mut();
        let id = match set.position_of(&listener) {
            Some(index) => set.entries[index].0,
            None => {
                let id = ListenerId(set.next_id);
                set.next_id += 1;
                set.entries.push((id, listener));
                id
            }
        };

        Subscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Check whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    /// Invoke every registered listener once, returning how many ran.
    ///
    /// Works from a snapshot so listeners may subscribe, unsubscribe or
    /// dispatch while the pass runs. A listener removed mid-pass is skipped
    /// if its turn has not come yet; one added mid-pass waits for the next pass.
    pub fn notify(&self) -> usize {
        let snapshot: Vec<(ListenerId, Listener)> = self.inner.borrow().entries.clone();

        let mut notified = 0;
        for (id, listener) in snapshot {
            if !self.inner.borrow().contains(id) {
                continue;
            }
            listener();
            notified += 1;
        }
        notified
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.len())
            .finish()
    }
}

/// Handle returned by listener registration.
///
/// Dropping the handle leaves the listener registered; call
/// [`Subscription::unsubscribe`] to remove it.
#[derive(Clone, Debug)]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<RefCell<ListenerSet>>,
}

impl Subscription {
    /// Identifier of the underlying registration.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Remove the listener. Calling this again is a no-op.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().remove(self.id);
        }
    }

    /// Check whether the listener is still registered.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().contains(self.id))
    }
}

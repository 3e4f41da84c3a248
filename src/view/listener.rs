//! Scoped global key listeners.
//!
//! A component that wants a key while it is active subscribes and keeps the
//! returned [`Subscription`]. Dropping the subscription removes the listener,
//! so closing or tearing down the component always releases it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crossterm::event::KeyCode;

/// Identifies one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(ListenerId, KeyCode)>,
}

/// Registry of active key listeners. Cloning shares the same registry.
#[derive(Debug, Clone, Default)]
pub struct KeyListeners {
    inner: Rc<RefCell<Registry>>,
}

impl KeyListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register interest in `key` until the returned guard is dropped.
    pub fn subscribe(&self, key: KeyCode) -> Subscription {
        let mut registry = self.inner.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push((id, key));
        tracing::trace!(?id, ?key, "Key listener added");

        Subscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Listeners registered for `key`, in subscription order.
    pub fn dispatch(&self, key: KeyCode) -> Vec<ListenerId> {
        self.inner
            .borrow()
            .listeners
            .iter()
            .filter(|(_, k)| *k == key)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Guard for a registered listener.
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
            tracing::trace!(id = ?self.id, "Key listener removed");
        }
    }
}

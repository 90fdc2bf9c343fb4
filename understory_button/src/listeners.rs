// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered, duplicate-suppressing registry of fire listeners.
//!
//! Listeners are identified by the [`Rc`] that holds them: adding the same `Rc` twice
//! is a no-op, and removing an `Rc` that was never added is a no-op.
//!
//! Dispatch always runs over a [`Listeners::snapshot`], never over the live registry,
//! so a listener that adds or removes listeners while firing only affects later rounds.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_button::{Listener, Listeners};
//!
//! let count = Rc::new(Cell::new(0));
//! let sink = Rc::clone(&count);
//! let listener: Listener = Rc::new(move || sink.set(sink.get() + 1));
//!
//! let mut listeners = Listeners::new();
//! assert!(listeners.add(&listener));
//! assert!(!listeners.add(&listener));
//! listeners.snapshot().dispatch();
//! assert_eq!(count.get(), 1);
//! ```

use alloc::rc::Rc;
use core::fmt;

use smallvec::SmallVec;

/// A zero-argument callback run each time a button fires.
pub type Listener = Rc<dyn Fn()>;

const INLINE_LISTENERS: usize = 4;

/// Registry of [`Listener`]s in registration order.
#[derive(Clone, Default)]
pub struct Listeners {
    entries: SmallVec<[Listener; INLINE_LISTENERS]>,
}

impl Listeners {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `listener` unless it is already registered. Returns whether it was added.
    pub fn add(&mut self, listener: &Listener) -> bool {
        if self.contains(listener) {
            return false;
        }
        self.entries.push(Rc::clone(listener));
        true
    }

    /// Removes `listener` if registered. Returns whether it was removed.
    pub fn remove(&mut self, listener: &Listener) -> bool {
        if let Some(idx) = self.position_of(listener) {
            self.entries.remove(idx);
            true
        } else {
            false
        }
    }

    /// Returns `true` if `listener` is registered.
    #[must_use]
    pub fn contains(&self, listener: &Listener) -> bool {
        self.position_of(listener).is_some()
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every listener.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Copies the current registry for dispatch.
    #[must_use]
    pub fn snapshot(&self) -> ListenerSnapshot {
        ListenerSnapshot {
            entries: self.entries.clone(),
        }
    }

    fn position_of(&self, listener: &Listener) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| Rc::ptr_eq(entry, listener))
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .finish()
    }
}

/// An owned copy of a [`Listeners`] registry, detached from later changes.
#[derive(Clone)]
pub struct ListenerSnapshot {
    entries: SmallVec<[Listener; INLINE_LISTENERS]>,
}

impl ListenerSnapshot {
    /// Invokes every listener in registration order.
    pub fn dispatch(&self) {
        for listener in &self.entries {
            listener();
        }
    }

    /// Number of listeners captured.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ListenerSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSnapshot")
            .field("len", &self.entries.len())
            .finish()
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed callback registries shared by properties and button models.

use alloc::rc::Rc;
use core::cell::{Cell, RefCell};
use core::fmt;

use smallvec::SmallVec;

/// Handle returned when registering an observer; pass it back to unregister.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

impl ObserverId {
    /// Returns the raw id. Ids are unique per registry, not globally.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Inline capacity for observer lists; most values have one or two observers.
const INLINE_OBSERVERS: usize = 2;

/// Copy of a registry taken before dispatch.
pub(crate) type ObserverSnapshot<F> = SmallVec<[Rc<F>; INLINE_OBSERVERS]>;

/// Registry of callbacks keyed by [`ObserverId`], mutable through `&self`.
///
/// No borrow is held while callbacks run: callers dispatch over a [`snapshot`],
/// so a callback may register or unregister observers on the same registry.
///
/// [`snapshot`]: Observers::snapshot
pub(crate) struct Observers<F: ?Sized> {
    entries: RefCell<SmallVec<[(ObserverId, Rc<F>); INLINE_OBSERVERS]>>,
    next_id: Cell<u64>,
}

impl<F: ?Sized> Observers<F> {
    pub(crate) fn new() -> Self {
        Self {
            entries: RefCell::new(SmallVec::new()),
            next_id: Cell::new(0),
        }
    }

    pub(crate) fn insert(&self, callback: Rc<F>) -> ObserverId {
        let id = ObserverId(self.next_id.get());
        self.next_id.set(id.0.wrapping_add(1));
        self.entries.borrow_mut().push((id, callback));
        id
    }

    pub(crate) fn remove(&self, id: ObserverId) -> bool {
        let mut entries = self.entries.borrow_mut();
        if let Some(idx) = entries.iter().position(|(entry, _)| *entry == id) {
            entries.remove(idx);
            true
        } else {
            false
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub(crate) fn snapshot(&self) -> ObserverSnapshot<F> {
        self.entries
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect()
    }
}

impl<F: ?Sized> fmt::Debug for Observers<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.len())
            .field("next_id", &self.next_id.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Callback = dyn Fn() -> u32;

    #[test]
    fn ids_are_unique_and_removal_is_idempotent() {
        let observers = Observers::<Callback>::new();
        let a = observers.insert(Rc::new(|| 1));
        let b = observers.insert(Rc::new(|| 2));
        assert_ne!(a, b);
        assert_eq!(observers.len(), 2);

        assert!(observers.remove(a));
        assert!(!observers.remove(a));
        assert_eq!(observers.len(), 1);
    }

    #[test]
    fn snapshot_keeps_registration_order() {
        let observers = Observers::<Callback>::new();
        observers.insert(Rc::new(|| 1));
        observers.insert(Rc::new(|| 2));
        observers.insert(Rc::new(|| 3));
        let values: SmallVec<[u32; 3]> = observers.snapshot().iter().map(|f| f()).collect();
        assert_eq!(values.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn snapshot_is_detached_from_later_mutation() {
        let observers = Observers::<Callback>::new();
        let first = observers.insert(Rc::new(|| 1));
        let snapshot = observers.snapshot();
        observers.remove(first);
        observers.insert(Rc::new(|| 9));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0](), 1);
    }
}

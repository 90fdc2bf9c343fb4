// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Application-owned observable values that buttons bind to.
//!
//! A [`SharedProperty`] is a cheap-to-clone handle: every clone reads and writes the
//! same value. Toggle buttons flip it between two values; all members of a radio group
//! share one property and each writes its own value into it, which is what makes the
//! group mutually exclusive without any coordinator.
//!
//! ```
//! use core::cell::Cell;
//! use std::rc::Rc;
//! use understory_button::SharedProperty;
//!
//! let property = SharedProperty::new(1_u8);
//! let seen = Rc::new(Cell::new(0));
//! let sink = Rc::clone(&seen);
//! property.observe(move |_old, new| sink.set(*new));
//!
//! let alias = property.clone();
//! assert!(alias.set(5));
//! assert!(!alias.set(5)); // unchanged values do not notify
//! assert_eq!(property.get(), 5);
//! assert_eq!(seen.get(), 5);
//! ```

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt::{self, Debug};

use crate::error::BindingError;
use crate::observer::{ObserverId, Observers};

/// Callback invoked with the old and new value after a property changes.
pub type PropertyObserver<T> = Rc<dyn Fn(&T, &T)>;

struct PropertyInner<T> {
    value: RefCell<T>,
    valid_values: Option<Vec<T>>,
    observers: Observers<dyn Fn(&T, &T)>,
    /// Bumped on every change.
    generation: Cell<u64>,
}

/// A single-threaded observable value shared between the application and its widgets.
pub struct SharedProperty<T> {
    inner: Rc<PropertyInner<T>>,
}

impl<T> Clone for SharedProperty<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> SharedProperty<T> {
    /// Unregisters an observer. Returns `false` if it was not registered.
    pub fn unobserve(&self, id: ObserverId) -> bool {
        self.inner.observers.remove(id)
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.inner.observers.len()
    }

    /// The legal values of this property, if it was created with a domain.
    #[must_use]
    pub fn valid_values(&self) -> Option<&[T]> {
        self.inner.valid_values.as_deref()
    }

    /// Returns `true` if both handles refer to the same property.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Runs `f` with a reference to the current value.
    ///
    /// `f` must not set this property.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }
}

impl<T> SharedProperty<T>
where
    T: Clone + PartialEq + Debug + 'static,
{
    /// Creates a property holding `value`, accepting any value of `T`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self::build(value, None)
    }

    /// Creates a property restricted to `valid_values`.
    ///
    /// Fails if `value` is not one of them.
    pub fn with_valid_values<I>(value: T, valid_values: I) -> Result<Self, BindingError>
    where
        I: IntoIterator<Item = T>,
    {
        let valid_values: Vec<T> = valid_values.into_iter().collect();
        if !valid_values.contains(&value) {
            return Err(BindingError::invalid_value(&value));
        }
        Ok(Self::build(value, Some(valid_values)))
    }

    fn build(value: T, valid_values: Option<Vec<T>>) -> Self {
        Self {
            inner: Rc::new(PropertyInner {
                value: RefCell::new(value),
                valid_values,
                observers: Observers::new(),
                generation: Cell::new(0),
            }),
        }
    }

    /// Returns a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Returns `true` if the current value equals `value`.
    #[must_use]
    pub fn is(&self, value: &T) -> bool {
        *self.inner.value.borrow() == *value
    }

    /// Returns `true` if `value` is legal for this property.
    #[must_use]
    pub fn is_valid(&self, value: &T) -> bool {
        self.inner
            .valid_values
            .as_ref()
            .is_none_or(|valid| valid.contains(value))
    }

    /// Sets the value, notifying observers if it changed.
    ///
    /// Returns whether the value changed. Values outside the property's domain are
    /// rejected and leave the property untouched.
    ///
    /// # Panics (debug only)
    ///
    /// Panics in debug builds if `value` is outside the property's valid values.
    pub fn set(&self, value: T) -> bool {
        let valid = self.is_valid(&value);
        debug_assert!(valid, "{value:?} is not one of the property's valid values");
        if !valid {
            log::error!("rejected {value:?}: not one of the property's valid values");
            return false;
        }
        self.replace(value)
    }

    /// Sets the value, reporting an error instead of asserting on invalid values.
    pub fn try_set(&self, value: T) -> Result<bool, BindingError> {
        if self.is_valid(&value) {
            Ok(self.replace(value))
        } else {
            Err(BindingError::invalid_value(&value))
        }
    }

    /// Registers `observer` to run after every change.
    pub fn observe(&self, observer: impl Fn(&T, &T) + 'static) -> ObserverId {
        let observer: PropertyObserver<T> = Rc::new(observer);
        self.inner.observers.insert(observer)
    }

    fn replace(&self, value: T) -> bool {
        let old = {
            let mut slot = self.inner.value.borrow_mut();
            if *slot == value {
                return false;
            }
            core::mem::replace(&mut *slot, value.clone())
        };
        let generation = self.inner.generation.get().wrapping_add(1);
        self.inner.generation.set(generation);
        for observer in self.inner.observers.snapshot() {
            // Superseded by a write from an observer, which notified everyone itself.
            if self.inner.generation.get() != generation {
                break;
            }
            observer(&old, &value);
        }
        true
    }
}

impl<T: Debug> Debug for SharedProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedProperty")
            .field("value", &self.inner.value)
            .field("valid_values", &self.inner.valid_values)
            .field("observers", &self.inner.observers)
            .field("generation", &self.inner.generation.get())
            .finish()
    }
}

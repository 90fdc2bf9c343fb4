// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What a button is bound to, and what firing writes into it.

use core::cell::Cell;
use core::fmt::Debug;

use crate::error::BindingError;
use crate::property::SharedProperty;

/// The variant of a [`ButtonModel`](crate::ButtonModel), as seen from outside.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BindingKind {
    /// Plain push button: firing only notifies listeners.
    Push,
    /// Flips a property between two values on each fire.
    Toggle,
    /// Flips a property on press, and back only on a later full press and release.
    StickyToggle,
    /// Writes its own value into a property shared by a radio group.
    GroupMember,
    /// Holds a property "on" for as long as the press lasts.
    Momentary,
}

/// The toggled-state strategy composed into every button.
#[derive(Debug)]
pub(crate) enum Toggled<T> {
    None,
    Toggle {
        property: SharedProperty<T>,
        value_a: T,
        value_b: T,
    },
    Sticky {
        property: SharedProperty<T>,
        value_a: T,
        value_b: T,
        /// `false` between the press that toggled to `value_b` and its release.
        ready_to_release_up: Cell<bool>,
    },
    GroupMember {
        property: SharedProperty<T>,
        value: T,
    },
    Momentary {
        property: SharedProperty<T>,
        value_off: T,
        value_on: T,
    },
}

impl<T> Toggled<T> {
    pub(crate) fn property(&self) -> Option<&SharedProperty<T>> {
        match self {
            Self::None => None,
            Self::Toggle { property, .. }
            | Self::Sticky { property, .. }
            | Self::GroupMember { property, .. }
            | Self::Momentary { property, .. } => Some(property),
        }
    }

    pub(crate) fn kind(&self) -> BindingKind {
        match self {
            Self::None => BindingKind::Push,
            Self::Toggle { .. } => BindingKind::Toggle,
            Self::Sticky { .. } => BindingKind::StickyToggle,
            Self::GroupMember { .. } => BindingKind::GroupMember,
            Self::Momentary { .. } => BindingKind::Momentary,
        }
    }
}

impl<T> Toggled<T>
where
    T: Clone + PartialEq + Debug + 'static,
{
    pub(crate) fn toggle(
        property: &SharedProperty<T>,
        value_a: T,
        value_b: T,
    ) -> Result<Self, BindingError> {
        check_two_values(property, &value_a, &value_b)?;
        Ok(Self::Toggle {
            property: property.clone(),
            value_a,
            value_b,
        })
    }

    pub(crate) fn sticky(
        property: &SharedProperty<T>,
        value_a: T,
        value_b: T,
    ) -> Result<Self, BindingError> {
        check_two_values(property, &value_a, &value_b)?;
        Ok(Self::Sticky {
            property: property.clone(),
            value_a,
            value_b,
            ready_to_release_up: Cell::new(true),
        })
    }

    pub(crate) fn group_member(property: &SharedProperty<T>, value: T) -> Result<Self, BindingError> {
        if !property.is_valid(&value) {
            return Err(BindingError::member_outside_domain(&value));
        }
        Ok(Self::GroupMember {
            property: property.clone(),
            value,
        })
    }

    pub(crate) fn momentary(
        property: &SharedProperty<T>,
        value_off: T,
        value_on: T,
    ) -> Result<Self, BindingError> {
        check_two_values(property, &value_off, &value_on)?;
        Ok(Self::Momentary {
            property: property.clone(),
            value_off,
            value_on,
        })
    }

    /// Whether the bound value is in the "on"/selected position.
    pub(crate) fn is_toggled(&self) -> bool {
        match self {
            Self::None => false,
            Self::Toggle {
                property, value_b, ..
            }
            | Self::Sticky {
                property, value_b, ..
            } => property.is(value_b),
            Self::GroupMember { property, value } => property.is(value),
            Self::Momentary {
                property, value_on, ..
            } => property.is(value_on),
        }
    }

    /// Writes the effect of one fire into the bound property.
    ///
    /// Momentary bindings are handled by the model, which brackets listeners between
    /// the "on" and "off" writes.
    pub(crate) fn apply_fire(&self) {
        match self {
            Self::None | Self::Momentary { .. } => {}
            Self::Toggle {
                property,
                value_a,
                value_b,
            }
            | Self::Sticky {
                property,
                value_a,
                value_b,
                ..
            } => {
                let next = if property.is(value_a) {
                    value_b
                } else {
                    value_a
                };
                property.set(next.clone());
            }
            // Never reads the property back: a member is not un-selected by firing itself.
            Self::GroupMember { property, value } => {
                property.set(value.clone());
            }
        }
    }
}

fn check_two_values<T>(property: &SharedProperty<T>, a: &T, b: &T) -> Result<(), BindingError>
where
    T: Clone + PartialEq + Debug + 'static,
{
    if a == b {
        return Err(BindingError::identical_values(a));
    }
    for value in [a, b] {
        if !property.is_valid(value) {
            return Err(BindingError::invalid_value(value));
        }
    }
    if !property.is(a) && !property.is(b) {
        return Err(BindingError::current_value_outside_binding(&property.get()));
    }
    Ok(())
}

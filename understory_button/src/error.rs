// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration errors.

use alloc::format;
use alloc::string::String;
use core::fmt::Debug;

/// A button or property was configured so that its selection invariant cannot hold.
///
/// These are programmer errors and are reported when the model is constructed, never
/// later during interaction. Values are rendered with their `Debug` representation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    /// A two-valued binding was given the same value twice.
    #[error("a two-valued binding needs two distinct values, got {value} for both")]
    IdenticalValues {
        /// The repeated value.
        value: String,
    },
    /// The bound property currently holds neither of the binding's two values.
    #[error("bound property holds {value}, which is neither of the button's two values")]
    CurrentValueOutsideBinding {
        /// The property's current value.
        value: String,
    },
    /// A group member's value is not a legal value of the shared property.
    #[error("group member value {value} is not a legal value of the shared property")]
    MemberOutsideDomain {
        /// The member's value.
        value: String,
    },
    /// A value was rejected by a property's set of valid values.
    #[error("{value} is not one of the property's valid values")]
    InvalidValue {
        /// The rejected value.
        value: String,
    },
    /// Hold-to-repeat was configured with a zero interval.
    #[error("hold-to-repeat interval must be non-zero")]
    ZeroRepeatInterval,
}

impl BindingError {
    pub(crate) fn identical_values(value: &impl Debug) -> Self {
        Self::IdenticalValues {
            value: format!("{value:?}"),
        }
    }

    pub(crate) fn current_value_outside_binding(value: &impl Debug) -> Self {
        Self::CurrentValueOutsideBinding {
            value: format!("{value:?}"),
        }
    }

    pub(crate) fn member_outside_domain(value: &impl Debug) -> Self {
        Self::MemberOutsideDomain {
            value: format!("{value:?}"),
        }
    }

    pub(crate) fn invalid_value(value: &impl Debug) -> Self {
        Self::InvalidValue {
            value: format!("{value:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_render_values_with_debug() {
        let err = BindingError::current_value_outside_binding(&"maybe");
        assert_eq!(
            err.to_string(),
            "bound property holds \"maybe\", which is neither of the button's two values"
        );
        assert_eq!(
            BindingError::identical_values(&3).to_string(),
            "a two-valued binding needs two distinct values, got 3 for both"
        );
    }

    #[test]
    fn zero_interval_message() {
        assert_eq!(
            BindingError::ZeroRepeatInterval.to_string(),
            "hold-to-repeat interval must be non-zero"
        );
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The named interaction state a renderer draws a button in.
//!
//! [`InteractionState::derive`] is the one defining expression for the state. It is a
//! pure function of four flags; nothing stores the result as a source of truth.
//!
//! Several flags can be true at once, so the rules are checked in priority order:
//!
//! | # | Condition                          | State             |
//! |---|------------------------------------|-------------------|
//! | 1 | `!enabled && toggled`              | `DisabledPressed` |
//! | 2 | `!enabled`                         | `Disabled`        |
//! | 3 | `hovered && !(pressed \|\| toggled)` | `Over`            |
//! | 4 | `hovered && (pressed \|\| toggled)`  | `Pressed`         |
//! | 5 | `toggled`                          | `Pressed`         |
//! | 6 | otherwise                          | `Idle`            |
//!
//! ```
//! use understory_button::InteractionState;
//!
//! assert_eq!(InteractionState::derive(true, true, true, false), InteractionState::Pressed);
//! // Dragged off while still held: drawn as idle.
//! assert_eq!(InteractionState::derive(false, true, true, false), InteractionState::Idle);
//! assert_eq!(InteractionState::derive(true, true, false, false), InteractionState::Disabled);
//! ```

use core::fmt;

/// How a button should currently look.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionState {
    /// Neither hovered nor pressed.
    #[default]
    Idle,
    /// Hovered but not pressed.
    Over,
    /// Pressed while hovered, or toggled on.
    Pressed,
    /// Disabled and not toggled on.
    Disabled,
    /// Disabled while toggled on.
    DisabledPressed,
}

impl InteractionState {
    /// Every state, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Idle,
        Self::Over,
        Self::Pressed,
        Self::Disabled,
        Self::DisabledPressed,
    ];

    /// Derives the state from the four interaction flags.
    ///
    /// `toggled` is always `false` for plain push buttons.
    #[must_use]
    pub const fn derive(hovered: bool, pressed: bool, enabled: bool, toggled: bool) -> Self {
        if !enabled {
            if toggled {
                Self::DisabledPressed
            } else {
                Self::Disabled
            }
        } else if hovered {
            if pressed || toggled {
                Self::Pressed
            } else {
                Self::Over
            }
        } else if toggled {
            Self::Pressed
        } else {
            Self::Idle
        }
    }

    /// Returns `true` for the states drawn in the "down" position.
    #[must_use]
    pub const fn looks_pressed(self) -> bool {
        matches!(self, Self::Pressed | Self::DisabledPressed)
    }

    /// Returns `true` for [`InteractionState::Over`].
    #[must_use]
    pub const fn looks_over(self) -> bool {
        matches!(self, Self::Over)
    }

    /// Returns `true` for the disabled states.
    #[must_use]
    pub const fn is_disabled(self) -> bool {
        matches!(self, Self::Disabled | Self::DisabledPressed)
    }

    /// The kebab-case name of the state.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Over => "over",
            Self::Pressed => "pressed",
            Self::Disabled => "disabled",
            Self::DisabledPressed => "disabled-pressed",
        }
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four inputs to [`InteractionState::derive`], bundled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct InteractionFlags {
    /// Some pointer owns hover.
    pub hovered: bool,
    /// Some pointer owns the press.
    pub pressed: bool,
    /// The button reacts to input.
    pub enabled: bool,
    /// The bound value is in its "on"/selected position.
    pub toggled: bool,
}

impl InteractionFlags {
    /// Derives the [`InteractionState`] for these flags.
    #[must_use]
    pub const fn state(self) -> InteractionState {
        InteractionState::derive(self.hovered, self.pressed, self.enabled, self.toggled)
    }
}

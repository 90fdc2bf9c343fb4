// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_button --heading-base-level=0

//! Understory Button: interaction models for pointer-driven buttons.
//!
//! This crate turns targeted pointer events into two outputs that button widgets need:
//! a named [`InteractionState`] to draw, and *fires*, the moments the button's action
//! should run. It does no rendering, layout or hit testing.
//!
//! Every variant is the same [`ButtonModel`] composed with a different binding:
//!
//! - **Push** ([`PushButtonModel`]): fires listeners on a tap.
//! - **Toggle** ([`ToggleButtonModel`]): flips a two-valued [`SharedProperty`].
//! - **Sticky toggle** ([`StickyToggleButtonModel`]): latches on press; a full press and
//!   release toggles exactly once.
//! - **Radio group member** ([`RadioButtonGroupMemberModel`]): writes its own value into a
//!   property shared by the whole group, so at most one member is ever selected.
//! - **Momentary** ([`MomentaryButtonModel`]): holds a property "on" while pressed.
//!
//! Pointer ownership comes from `understory_event_state`: of several concurrent pointers,
//! only the first to arrive can hover or press a given button.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use kurbo::Point;
//! use understory_button::{InteractionState, Listener, PushButtonModel};
//!
//! let button = PushButtonModel::<u32>::new();
//! let clicks = Rc::new(Cell::new(0));
//! let sink = Rc::clone(&clicks);
//! let listener: Listener = Rc::new(move || sink.set(sink.get() + 1));
//! button.add_listener(&listener);
//!
//! let at = Point::new(8.0, 8.0);
//! button.on_enter(1);
//! assert_eq!(button.interaction_state(), InteractionState::Over);
//! button.on_down(1, at);
//! assert_eq!(button.interaction_state(), InteractionState::Pressed);
//! button.on_up(1);
//! assert_eq!(clicks.get(), 1);
//!
//! // Dragging off before releasing does not fire.
//! button.on_down(1, at);
//! button.on_exit(1);
//! button.on_up(1);
//! assert_eq!(clicks.get(), 1);
//! ```
//!
//! ## Radio groups
//!
//! ```rust
//! use kurbo::Point;
//! use understory_button::{ButtonOptions, RadioButtonGroupMemberModel, SharedProperty};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Shape { Circle, Square }
//!
//! let selected = SharedProperty::new(Shape::Circle);
//! let circle: RadioButtonGroupMemberModel<u32, Shape> =
//!     RadioButtonGroupMemberModel::group_member(&selected, Shape::Circle, ButtonOptions::new())?;
//! let square: RadioButtonGroupMemberModel<u32, Shape> =
//!     RadioButtonGroupMemberModel::group_member(&selected, Shape::Square, ButtonOptions::new())?;
//!
//! square.fire();
//! assert!(square.is_toggled());
//! assert!(!circle.is_toggled());
//! # Ok::<(), understory_button::BindingError>(())
//! ```
//!
//! ## Logging
//!
//! The crate reports through the [`log`] facade: ignored pointer events at `trace`,
//! presses, releases and fires at `debug`. It never installs a logger.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binding;
mod error;
pub mod listeners;
mod model;
mod observer;
mod options;
pub mod property;
pub mod state;

pub use binding::BindingKind;
pub use error::BindingError;
pub use listeners::{Listener, ListenerSnapshot, Listeners};
pub use model::{
    ButtonModel, MomentaryButtonModel, PushButtonModel, RadioButtonGroupMemberModel,
    StateObserver, StickyToggleButtonModel, ToggleButtonModel, WeakButtonModel,
};
pub use observer::ObserverId;
pub use options::{ButtonOptions, HoldRepeat};
pub use property::{PropertyObserver, SharedProperty};
pub use state::{InteractionFlags, InteractionState};

pub use understory_event_state::ownership::{PointerOwnership, Release};
pub use understory_event_state::pointer::{PointerEvent, PointerEventKind, PointerId};

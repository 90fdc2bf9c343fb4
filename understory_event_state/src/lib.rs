// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: per-widget pointer state for UI interactions.
//!
//! This crate turns a raw stream of pointer contact events into the small amount of
//! state a widget needs to react to them:
//!
//! - [`pointer`]: the event vocabulary (`enter`, `exit`, `down`, `up`, `cancel`)
//! - [`ownership`]: single-owner hover/press tracking that locks out concurrent pointers
//!
//! ## Design Philosophy
//!
//! - **Minimal and focused**: track exactly who hovers and who presses, nothing else
//! - **Generic**: accept application-specific pointer identity types
//! - **Integration-friendly**: events arrive already hit-tested and targeted; this crate
//!   never looks at geometry beyond recording where a press started
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::Point;
//! use understory_event_state::ownership::{PointerOwnership, Release, Transition};
//! use understory_event_state::pointer::PointerEvent;
//!
//! let mut ownership = PointerOwnership::new();
//! let at = Point::new(3.0, 4.0);
//!
//! // Two fingers land on the same widget; the first one wins.
//! assert_eq!(ownership.handle(&PointerEvent::enter(1_u32, at)), Transition::Entered);
//! assert_eq!(ownership.handle(&PointerEvent::enter(2, at)), Transition::Ignored);
//! assert_eq!(ownership.handle(&PointerEvent::down(2, at)), Transition::Ignored);
//!
//! assert_eq!(ownership.handle(&PointerEvent::down(1, at)), Transition::Pressed);
//! assert_eq!(
//!     ownership.handle(&PointerEvent::up(1, at)),
//!     Transition::Released(Release { over: true })
//! );
//! ```
//!
//! Higher layers (see `understory_button`) decide what a release means; this crate
//! only reports whether the releasing pointer was still over the widget.
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod ownership;
pub mod pointer;

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-owner pointer tracking for one widget.
//!
//! A widget touched by several pointers at once (multi-touch, or a mouse plus a pen)
//! still needs one unambiguous answer to "is it hovered?" and "is it pressed?".
//! [`PointerOwnership`] records at most one *hovering* pointer and at most one
//! *pressing* pointer. Every other concurrent pointer is inert against this widget
//! until the owner lets go.
//!
//! ## Rules
//!
//! - `enter(p)` claims hover only if nobody owns it. While a press is held, only the
//!   pressing pointer may reclaim hover after dragging off.
//! - `exit(p)` releases hover only if `p` owns it.
//! - `down(p)` is accepted if `p` owns hover, or if nobody owns hover (touch contacts
//!   enter and press at the same time), and no press is already held. Accepting a
//!   first-contact press also claims hover.
//! - `up(p)` releases the press only if `p` owns it. The returned [`Release`] says
//!   whether `p` was still over the widget.
//! - `cancel(p)` behaves like `up(p)` followed by `exit(p)`.
//!
//! Events that do not match these rules are protocol noise and are ignored.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::ownership::{PointerOwnership, Release};
//!
//! let mut ownership = PointerOwnership::new();
//! let at = Point::new(5.0, 5.0);
//!
//! assert!(ownership.on_enter(1_u32));
//! assert!(!ownership.on_enter(2)); // hover is already owned
//! assert!(!ownership.on_down(2, at)); // so pointer 2 cannot press
//! assert!(ownership.on_down(1, at));
//! assert_eq!(ownership.on_up(1), Some(Release { over: true }));
//! assert!(!ownership.is_pressed());
//! ```
//!
//! Disabling a widget is not this type's concern: contact is a physical fact and is
//! tracked regardless of whether the widget currently reacts to it.

use core::fmt::Debug;

use kurbo::Point;

use crate::pointer::{PointerEvent, PointerEventKind};

/// Outcome of releasing an accepted press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Release {
    /// `true` if the releasing pointer still owned hover when it was released.
    pub over: bool,
}

/// What a single event did to a [`PointerOwnership`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The event did not change ownership.
    Ignored,
    /// The pointer claimed hover.
    Entered,
    /// The pointer released hover.
    Exited,
    /// The pointer claimed the press.
    Pressed,
    /// The pointer released the press.
    Released(Release),
    /// The pointer's hover and/or press were dropped without a release.
    Canceled,
}

impl Transition {
    /// Returns `true` unless the event was ignored.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Tracks which single pointer hovers and which single pointer presses a widget.
#[derive(Clone, Debug)]
pub struct PointerOwnership<P> {
    hovering: Option<P>,
    pressing: Option<P>,
    press_position: Option<Point>,
}

impl<P> Default for PointerOwnership<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> PointerOwnership<P> {
    /// Creates a tracker with no hovering or pressing pointer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hovering: None,
            pressing: None,
            press_position: None,
        }
    }

    /// The pointer currently owning hover, if any.
    #[must_use]
    pub fn hovering(&self) -> Option<&P> {
        self.hovering.as_ref()
    }

    /// The pointer currently owning the press, if any.
    #[must_use]
    pub fn pressing(&self) -> Option<&P> {
        self.pressing.as_ref()
    }

    /// Returns `true` while some pointer owns hover.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovering.is_some()
    }

    /// Returns `true` while some pointer owns the press.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressing.is_some()
    }

    /// Where the currently held press started.
    #[must_use]
    pub fn press_position(&self) -> Option<Point> {
        self.press_position
    }

    /// Forgets every pointer.
    ///
    /// Only meant for embedders that rebuild a widget's event source wholesale; normal
    /// gestures end through [`PointerOwnership::on_up`] or
    /// [`PointerOwnership::on_cancel`].
    pub fn reset(&mut self) {
        self.hovering = None;
        self.pressing = None;
        self.press_position = None;
    }
}

impl<P> PointerOwnership<P>
where
    P: Copy + PartialEq + Debug,
{
    /// Returns `true` if `pointer` owns hover.
    #[must_use]
    pub fn is_hovered_by(&self, pointer: &P) -> bool {
        self.hovering.as_ref() == Some(pointer)
    }

    /// Returns `true` if `pointer` owns the press.
    #[must_use]
    pub fn is_pressed_by(&self, pointer: &P) -> bool {
        self.pressing.as_ref() == Some(pointer)
    }

    /// Handles a pointer entering the widget. Returns `true` if it claimed hover.
    pub fn on_enter(&mut self, pointer: P) -> bool {
        if self.hovering.is_some() {
            log::trace!("enter from {pointer:?} ignored: hover already owned");
            return false;
        }
        if let Some(pressing) = self.pressing
            && pressing != pointer
        {
            log::trace!("enter from {pointer:?} ignored: press held by {pressing:?}");
            return false;
        }
        self.hovering = Some(pointer);
        true
    }

    /// Handles a pointer leaving the widget. Returns `true` if it released hover.
    pub fn on_exit(&mut self, pointer: P) -> bool {
        if self.is_hovered_by(&pointer) {
            self.hovering = None;
            true
        } else {
            log::trace!("exit from {pointer:?} ignored: not the hovering pointer");
            false
        }
    }

    /// Handles a pointer press. Returns `true` if it claimed the press.
    pub fn on_down(&mut self, pointer: P, position: Point) -> bool {
        if let Some(pressing) = self.pressing {
            log::trace!("down from {pointer:?} ignored: press held by {pressing:?}");
            return false;
        }
        match self.hovering {
            Some(hovering) if hovering != pointer => {
                log::trace!("down from {pointer:?} ignored: hover owned by {hovering:?}");
                return false;
            }
            Some(_) => {}
            // First contact: touch pointers enter and press together.
            None => self.hovering = Some(pointer),
        }
        self.pressing = Some(pointer);
        self.press_position = Some(position);
        true
    }

    /// Previews what [`PointerOwnership::on_up`] would report for `pointer`
    /// without clearing anything.
    ///
    /// This lets callers act on a release while the press is still visible.
    #[must_use]
    pub fn release_of(&self, pointer: &P) -> Option<Release> {
        self.is_pressed_by(pointer).then(|| Release {
            over: self.is_hovered_by(pointer),
        })
    }

    /// Handles a pointer release. Returns the release if `pointer` owned the press.
    pub fn on_up(&mut self, pointer: P) -> Option<Release> {
        let Some(release) = self.release_of(&pointer) else {
            log::trace!("up from {pointer:?} ignored: not the pressing pointer");
            return None;
        };
        self.pressing = None;
        self.press_position = None;
        Some(release)
    }

    /// Handles a contact that vanished without an `up`.
    ///
    /// Equivalent to an `up` followed by an `exit`, except that the caller should
    /// treat the press as aborted. Returns `true` if anything was dropped.
    pub fn on_cancel(&mut self, pointer: P) -> bool {
        let pressed = self.on_up(pointer).is_some();
        let hovered = self.on_exit(pointer);
        pressed || hovered
    }

    /// Applies a [`PointerEvent`] and reports what changed.
    pub fn handle(&mut self, event: &PointerEvent<P>) -> Transition {
        let pointer = event.pointer;
        match event.kind {
            PointerEventKind::Enter => {
                if self.on_enter(pointer) {
                    Transition::Entered
                } else {
                    Transition::Ignored
                }
            }
            PointerEventKind::Exit => {
                if self.on_exit(pointer) {
                    Transition::Exited
                } else {
                    Transition::Ignored
                }
            }
            PointerEventKind::Down => {
                if self.on_down(pointer, event.position) {
                    Transition::Pressed
                } else {
                    Transition::Ignored
                }
            }
            PointerEventKind::Up => self
                .on_up(pointer)
                .map_or(Transition::Ignored, Transition::Released),
            PointerEventKind::Cancel => {
                if self.on_cancel(pointer) {
                    Transition::Canceled
                } else {
                    Transition::Ignored
                }
            }
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer contact events targeted at a single widget.
//!
//! Events arrive already hit-tested: the upstream event source decided which widget a
//! contact belongs to and delivers `enter → down → up → exit` (or subsets, with
//! repeated `down`/`up`) for each pointer. A [`PointerEventKind::Cancel`] stands in for
//! a contact that was forcibly removed without reporting `up`.
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::pointer::{PointerEvent, PointerEventKind};
//!
//! let event = PointerEvent::down(7_u32, Point::new(4.0, 2.0));
//! assert_eq!(event.kind, PointerEventKind::Down);
//! assert_eq!(event.pointer, 7);
//! ```

use core::fmt;
use core::num::NonZeroU64;

use kurbo::Point;

/// Pointer identifier for one physical contact (mouse, or one touch/pen contact).
///
/// Every API in this crate is generic over the identity type; this alias is a
/// convenient default for embedders without their own ids.
pub type PointerId = NonZeroU64;

/// The kind of contact change a [`PointerEvent`] reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// The pointer moved over the widget.
    Enter,
    /// The pointer moved off the widget.
    Exit,
    /// The pointer was pressed while targeting the widget.
    Down,
    /// The pointer was released.
    Up,
    /// The contact was removed without a matching `Up` (for example, touch cancel).
    Cancel,
}

impl fmt::Display for PointerEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Enter => "enter",
            Self::Exit => "exit",
            Self::Down => "down",
            Self::Up => "up",
            Self::Cancel => "cancel",
        })
    }
}

/// A single pointer contact event delivered to one widget.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent<P> {
    /// Identity of the contact.
    pub pointer: P,
    /// What happened.
    pub kind: PointerEventKind,
    /// Screen-space position of the contact when the event was produced.
    pub position: Point,
}

impl<P> PointerEvent<P> {
    /// Creates an event of the given kind.
    #[must_use]
    pub const fn new(pointer: P, kind: PointerEventKind, position: Point) -> Self {
        Self {
            pointer,
            kind,
            position,
        }
    }

    /// Creates an [`PointerEventKind::Enter`] event.
    #[must_use]
    pub const fn enter(pointer: P, position: Point) -> Self {
        Self::new(pointer, PointerEventKind::Enter, position)
    }

    /// Creates an [`PointerEventKind::Exit`] event.
    #[must_use]
    pub const fn exit(pointer: P, position: Point) -> Self {
        Self::new(pointer, PointerEventKind::Exit, position)
    }

    /// Creates a [`PointerEventKind::Down`] event.
    #[must_use]
    pub const fn down(pointer: P, position: Point) -> Self {
        Self::new(pointer, PointerEventKind::Down, position)
    }

    /// Creates an [`PointerEventKind::Up`] event.
    #[must_use]
    pub const fn up(pointer: P, position: Point) -> Self {
        Self::new(pointer, PointerEventKind::Up, position)
    }

    /// Creates a [`PointerEventKind::Cancel`] event.
    #[must_use]
    pub const fn cancel(pointer: P, position: Point) -> Self {
        Self::new(pointer, PointerEventKind::Cancel, position)
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sticky toggles latch on press and release on a later full gesture.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Point;
use understory_button::{
    BindingKind, ButtonOptions, InteractionState, Listener, SharedProperty,
    StickyToggleButtonModel,
};

const AT: Point = Point::new(2.0, 2.0);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Latch {
    Open,
    Held,
}

fn sticky() -> (SharedProperty<Latch>, StickyToggleButtonModel<u32, Latch>) {
    let property = SharedProperty::new(Latch::Open);
    let button = StickyToggleButtonModel::sticky_toggle(
        &property,
        Latch::Open,
        Latch::Held,
        ButtonOptions::new(),
    )
    .unwrap();
    (property, button)
}

fn tap(button: &StickyToggleButtonModel<u32, Latch>) {
    button.on_enter(1);
    button.on_down(1, AT);
    button.on_up(1);
    button.on_exit(1);
}

#[test]
fn press_latches_immediately() {
    let (property, button) = sticky();
    assert_eq!(button.binding_kind(), BindingKind::StickyToggle);
    button.on_enter(1);
    button.on_down(1, AT);
    assert_eq!(property.get(), Latch::Held);
    // The release of the latching press leaves it held.
    button.on_up(1);
    assert_eq!(property.get(), Latch::Held);
    assert_eq!(button.interaction_state(), InteractionState::Pressed);
}

#[test]
fn every_full_gesture_toggles_exactly_once() {
    for taps in 1..=6 {
        let (property, button) = sticky();
        for _ in 0..taps {
            tap(&button);
        }
        let expected = if taps % 2 == 1 {
            Latch::Held
        } else {
            Latch::Open
        };
        assert_eq!(property.get(), expected, "after {taps} taps");
    }
}

#[test]
fn second_gesture_releases_on_up_not_on_down() {
    let (property, button) = sticky();
    tap(&button);
    button.on_enter(1);
    button.on_down(1, AT);
    assert_eq!(property.get(), Latch::Held);
    button.on_up(1);
    assert_eq!(property.get(), Latch::Open);
}

#[test]
fn releasing_off_the_button_primes_the_next_gesture() {
    let (property, button) = sticky();
    button.on_enter(1);
    button.on_down(1, AT);
    button.on_exit(1);
    button.on_up(1);
    assert_eq!(property.get(), Latch::Held);

    tap(&button);
    assert_eq!(property.get(), Latch::Open);
}

#[test]
fn dragging_off_a_releasing_gesture_keeps_it_held() {
    let (property, button) = sticky();
    tap(&button);
    button.on_enter(1);
    button.on_down(1, AT);
    button.on_exit(1);
    button.on_up(1);
    assert_eq!(property.get(), Latch::Held);
}

#[test]
fn rapid_reentry_during_the_latching_press() {
    let (property, button) = sticky();
    button.on_enter(1);
    button.on_down(1, AT);
    button.on_exit(1);
    button.on_enter(1);
    button.on_up(1);
    assert_eq!(property.get(), Latch::Held);

    tap(&button);
    assert_eq!(property.get(), Latch::Open);
}

#[test]
fn reenabling_mid_press_rearms_the_release() {
    let (property, button) = sticky();
    button.on_enter(1);
    button.on_down(1, AT);
    button.set_enabled(false);
    assert_eq!(button.interaction_state(), InteractionState::DisabledPressed);
    button.set_enabled(true);
    button.on_up(1);
    assert_eq!(property.get(), Latch::Open);
}

#[test]
fn disabled_press_does_not_latch() {
    let (property, button) = sticky();
    button.set_enabled(false);
    tap(&button);
    button.set_enabled(true);
    assert_eq!(property.get(), Latch::Open);
}

#[test]
fn listeners_run_once_per_toggle() {
    let (_property, button) = sticky();
    let fires = Rc::new(Cell::new(0));
    let sink = Rc::clone(&fires);
    let listener: Listener = Rc::new(move || sink.set(sink.get() + 1));
    button.add_listener(&listener);

    button.on_enter(1);
    button.on_down(1, AT);
    assert_eq!(fires.get(), 1);
    button.on_up(1);
    assert_eq!(fires.get(), 1);
    button.on_down(1, AT);
    assert_eq!(fires.get(), 1);
    button.on_up(1);
    assert_eq!(fires.get(), 2);
}

#[test]
fn second_pointer_cannot_release_the_latch() {
    let (property, button) = sticky();
    button.on_enter(1);
    button.on_down(1, AT);
    assert!(!button.on_enter(2));
    assert!(!button.on_down(2, AT));
    assert!(!button.on_up(2));
    assert_eq!(property.get(), Latch::Held);
    assert!(button.pointer_state().is_pressed_by(&1));
}

#[test]
fn cancel_keeps_the_latch_and_rearms() {
    let (property, button) = sticky();
    button.on_enter(1);
    button.on_down(1, AT);
    button.on_cancel(1);
    assert_eq!(property.get(), Latch::Held);

    tap(&button);
    assert_eq!(property.get(), Latch::Open);
}

#[test]
fn keyboard_fire_flips_either_way() {
    let (property, button) = sticky();
    button.fire();
    assert_eq!(property.get(), Latch::Held);
    button.fire();
    assert_eq!(property.get(), Latch::Open);
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radio group members sharing one selection property.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::Point;
use understory_button::{
    BindingError, BindingKind, ButtonOptions, InteractionState, RadioButtonGroupMemberModel,
    SharedProperty,
};

const AT: Point = Point::new(4.0, 4.0);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Channel {
    Red,
    Green,
    Blue,
}

type Member = RadioButtonGroupMemberModel<u32, Channel>;

fn group() -> (SharedProperty<Channel>, [Member; 3]) {
    let selected = SharedProperty::with_valid_values(
        Channel::Red,
        [Channel::Red, Channel::Green, Channel::Blue],
    )
    .unwrap();
    let members = [Channel::Red, Channel::Green, Channel::Blue]
        .map(|value| Member::group_member(&selected, value, ButtonOptions::new()).unwrap());
    (selected, members)
}

fn toggled_count(members: &[Member]) -> usize {
    members.iter().filter(|m| m.is_toggled()).count()
}

#[test]
fn exactly_one_member_is_selected() {
    let (selected, members) = group();
    assert_eq!(members[0].binding_kind(), BindingKind::GroupMember);
    assert_eq!(toggled_count(&members), 1);
    assert!(members[0].is_toggled());

    members[2].fire();
    assert_eq!(selected.get(), Channel::Blue);
    assert_eq!(toggled_count(&members), 1);
    assert!(members[2].is_toggled());

    members[1].fire();
    assert_eq!(selected.get(), Channel::Green);
    assert_eq!(toggled_count(&members), 1);
}

#[test]
fn no_two_members_are_ever_selected_at_once() {
    let (selected, members) = group();
    let weak = members.each_ref().map(Member::downgrade);
    let worst = Rc::new(Cell::new(0));
    let sink = Rc::clone(&worst);
    selected.observe(move |_, _| {
        let count = weak
            .iter()
            .filter_map(|m| m.upgrade())
            .filter(|m| m.is_toggled())
            .count();
        sink.set(sink.get().max(count));
    });

    for member in members.iter().chain(members.iter().rev()) {
        member.fire();
    }
    assert_eq!(worst.get(), 1);
}

#[test]
fn firing_the_selected_member_keeps_it_selected() {
    let (selected, members) = group();
    let writes = Rc::new(Cell::new(0));
    let sink = Rc::clone(&writes);
    selected.observe(move |_, _| sink.set(sink.get() + 1));

    members[0].fire();
    members[0].fire();
    assert_eq!(selected.get(), Channel::Red);
    assert_eq!(writes.get(), 0);
}

#[test]
fn tapping_a_member_selects_it() {
    let (selected, members) = group();
    let blue = &members[2];
    blue.on_enter(1);
    blue.on_down(1, AT);
    assert_eq!(selected.get(), Channel::Red);
    blue.on_up(1);
    assert_eq!(selected.get(), Channel::Blue);
}

#[test]
fn dragging_off_a_member_does_not_select_it() {
    let (selected, members) = group();
    let green = &members[1];
    green.on_enter(1);
    green.on_down(1, AT);
    green.on_exit(1);
    green.on_up(1);
    assert_eq!(selected.get(), Channel::Red);
}

#[test]
fn member_outside_the_domain_is_rejected() {
    let selected = SharedProperty::with_valid_values(1_u8, [1, 2]).unwrap();
    let err = RadioButtonGroupMemberModel::<u32, u8>::group_member(
        &selected,
        3,
        ButtonOptions::new(),
    )
    .unwrap_err();
    assert_eq!(err, BindingError::MemberOutsideDomain { value: "3".into() });
    assert_eq!(
        err.to_string(),
        "group member value 3 is not a legal value of the shared property"
    );
}

#[test]
fn siblings_observe_losing_the_selection() {
    let (_selected, members) = group();
    let red_states = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&red_states);
    members[0].observe_state(move |state| sink.borrow_mut().push(state));
    let blue_states = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&blue_states);
    members[2].observe_state(move |state| sink.borrow_mut().push(state));

    assert_eq!(members[0].interaction_state(), InteractionState::Pressed);
    members[2].fire();
    assert_eq!(*red_states.borrow(), [InteractionState::Idle]);
    assert_eq!(*blue_states.borrow(), [InteractionState::Pressed]);
}

#[test]
fn disabled_member_cannot_be_selected() {
    let (selected, members) = group();
    members[1].set_enabled(false);
    members[1].fire();
    members[1].on_enter(1);
    members[1].on_down(1, AT);
    members[1].on_up(1);
    assert_eq!(selected.get(), Channel::Red);
    assert_eq!(members[1].interaction_state(), InteractionState::Disabled);
}

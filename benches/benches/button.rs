// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_event_state` + `understory_button`.

use core::time::Duration;
use std::cell::Cell;
use std::rc::Rc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;

use understory_button::{
    ButtonOptions, HoldRepeat, InteractionState, Listener, PushButtonModel,
    RadioButtonGroupMemberModel, SharedProperty, ToggleButtonModel,
};
use understory_event_state::ownership::PointerOwnership;
use understory_event_state::pointer::PointerEvent;

const AT: Point = Point::new(10.0, 10.0);

fn counting_listener() -> (Rc<Cell<u64>>, Listener) {
    let count = Rc::new(Cell::new(0_u64));
    let sink = Rc::clone(&count);
    (count, Rc::new(move || sink.set(sink.get() + 1)))
}

fn bench_button(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_state/ownership");

    group.bench_function("tap", |b| {
        let mut pointers = PointerOwnership::<u32>::new();
        b.iter(|| {
            pointers.on_enter(black_box(1));
            pointers.on_down(1, AT);
            black_box(pointers.on_up(1));
            pointers.on_exit(1);
        });
    });

    group.bench_function("contended", |b| {
        let mut pointers = PointerOwnership::<u32>::new();
        b.iter(|| {
            pointers.on_enter(1);
            pointers.on_down(1, AT);
            for other in 2..10 {
                black_box(pointers.on_enter(other));
                black_box(pointers.on_down(other, AT));
            }
            let _ = pointers.on_up(1);
            pointers.on_exit(1);
        });
    });

    group.finish();

    let mut group = c.benchmark_group("button/gesture");

    group.bench_function("push_tap", |b| {
        let button = PushButtonModel::<u32>::new();
        let (count, listener) = counting_listener();
        button.add_listener(&listener);
        b.iter(|| {
            button.on_enter(1);
            button.on_down(1, AT);
            button.on_up(1);
            button.on_exit(1);
        });
        black_box(count.get());
    });

    group.bench_function("push_tap/events", |b| {
        let button = PushButtonModel::<u32>::new();
        let pointer = 1;
        let events = [
            PointerEvent::enter(pointer, AT),
            PointerEvent::down(pointer, AT),
            PointerEvent::up(pointer, AT),
            PointerEvent::exit(pointer, AT),
        ];
        b.iter(|| {
            for event in &events {
                black_box(button.handle(event));
            }
        });
    });

    group.bench_function("toggle_tap", |b| {
        let property = SharedProperty::new(false);
        let button: ToggleButtonModel<u32, bool> =
            ToggleButtonModel::toggle(&property, false, true, ButtonOptions::new())
                .expect("distinct values");
        b.iter(|| {
            button.on_enter(1);
            button.on_down(1, AT);
            button.on_up(1);
            button.on_exit(1);
        });
        black_box(property.get());
    });

    for members in [2_u32, 8, 32] {
        group.bench_function(BenchmarkId::new("radio_select", members), |b| {
            let selected = SharedProperty::new(0_u32);
            let buttons: Vec<RadioButtonGroupMemberModel<u32, u32>> = (0..members)
                .map(|value| {
                    RadioButtonGroupMemberModel::group_member(
                        &selected,
                        value,
                        ButtonOptions::new(),
                    )
                    .expect("unrestricted property")
                })
                .collect();
            let mut next = 0;
            b.iter(|| {
                next = (next + 1) % buttons.len();
                buttons[next].fire();
            });
            black_box(selected.get());
        });
    }

    group.finish();

    let mut group = c.benchmark_group("button/hold_repeat");

    group.bench_function("step_16ms", |b| {
        let options = ButtonOptions::new().with_fire_on_hold(HoldRepeat::default());
        let button = PushButtonModel::<u32>::push(options).expect("non-zero interval");
        let (count, listener) = counting_listener();
        button.add_listener(&listener);
        button.on_enter(1);
        button.on_down(1, AT);
        b.iter(|| black_box(button.step(Duration::from_millis(16))));
        black_box(count.get());
    });

    group.finish();

    let mut group = c.benchmark_group("button/state");

    group.bench_function("derive_all", |b| {
        b.iter(|| {
            let mut pressed = 0;
            for bits in 0_u8..16 {
                let state = InteractionState::derive(
                    bits & 1 != 0,
                    bits & 2 != 0,
                    bits & 4 != 0,
                    bits & 8 != 0,
                );
                pressed += u32::from(black_box(state).looks_pressed());
            }
            pressed
        });
    });

    group.finish();
}

criterion_group!(benches, bench_button);
criterion_main!(benches);

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The button interaction model shared by every button variant.
//!
//! A [`ButtonModel`] owns one widget's pointer ownership record, its enabled flag,
//! its fire listeners and a binding strategy (see [`BindingKind`]). Pointer events go
//! in, and two things come out:
//!
//! - the [`InteractionState`] the widget should be drawn in, always recomputed from
//!   the current flags and observable through [`ButtonModel::observe_state`];
//! - *fires*: invocations of the registered listeners, plus whatever the binding
//!   writes into its bound property.
//!
//! ## Fire policy
//!
//! | Binding | Fires |
//! |---|---|
//! | push, toggle, group member | on release while still over (or on press with `fire_on_down`) |
//! | sticky toggle | on press when at `value_a`; on a later release over the button when at `value_b` |
//! | momentary | switches "on" when pressed and "off" when the press ends |
//!
//! Disabled buttons keep tracking physical contact but never fire.
//!
//! ## Re-entrancy
//!
//! `ButtonModel` is a cheap handle around shared state and every method takes `&self`.
//! Listeners may capture a clone (or a [`WeakButtonModel`]) and call back into the
//! model, including adding and removing listeners while a fire is being dispatched.

use alloc::rc::{Rc, Weak};
use core::cell::{Cell, RefCell};
use core::fmt::{self, Debug};
use core::time::Duration;

use kurbo::Point;
use understory_event_state::ownership::{PointerOwnership, Release};
use understory_event_state::pointer::{PointerEvent, PointerEventKind};

use crate::binding::{BindingKind, Toggled};
use crate::error::BindingError;
use crate::listeners::{Listener, Listeners};
use crate::observer::{ObserverId, Observers};
use crate::options::{ButtonOptions, HoldTimer};
use crate::property::SharedProperty;
use crate::state::{InteractionFlags, InteractionState};

/// Callback invoked with the new [`InteractionState`] whenever it changes.
pub type StateObserver = Rc<dyn Fn(InteractionState)>;

/// A push button: firing only notifies listeners.
pub type PushButtonModel<P> = ButtonModel<P, ()>;
/// A button that flips a two-valued property on each fire.
pub type ToggleButtonModel<P, T> = ButtonModel<P, T>;
/// A latching button: press toggles immediately, one full gesture toggles once.
pub type StickyToggleButtonModel<P, T> = ButtonModel<P, T>;
/// One member of a radio group sharing a single selection property.
pub type RadioButtonGroupMemberModel<P, T> = ButtonModel<P, T>;
/// A button that holds its property "on" only while pressed.
pub type MomentaryButtonModel<P, T> = ButtonModel<P, T>;

struct ButtonInner<P, T> {
    pointers: RefCell<PointerOwnership<P>>,
    enabled: Cell<bool>,
    firing: Cell<bool>,
    listeners: RefCell<Listeners>,
    binding: Toggled<T>,
    options: ButtonOptions,
    hold: Cell<Option<HoldTimer>>,
    state_observers: Observers<dyn Fn(InteractionState)>,
    /// Last state handed to observers; used only to detect changes.
    published: Cell<InteractionState>,
    /// Bumped on every publish, so an outer dispatch can tell it was superseded.
    publish_generation: Cell<u64>,
    /// Bumped on every accepted press.
    press_generation: Cell<u64>,
    property_observer: Cell<Option<ObserverId>>,
}

/// Interaction model for one button widget.
pub struct ButtonModel<P, T = ()> {
    inner: Rc<ButtonInner<P, T>>,
}

/// A non-owning handle to a [`ButtonModel`].
pub struct WeakButtonModel<P, T = ()> {
    inner: Weak<ButtonInner<P, T>>,
}

impl<P, T> Clone for ButtonModel<P, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<P, T> Clone for WeakButtonModel<P, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<P, T> WeakButtonModel<P, T> {
    /// Returns the model if it has not been dropped.
    #[must_use]
    pub fn upgrade(&self) -> Option<ButtonModel<P, T>> {
        self.inner.upgrade().map(|inner| ButtonModel { inner })
    }
}

impl<P, T> Drop for ButtonInner<P, T> {
    fn drop(&mut self) {
        if let (Some(id), Some(property)) = (self.property_observer.get(), self.binding.property())
        {
            property.unobserve(id);
        }
    }
}

impl<P> ButtonModel<P, ()>
where
    P: Copy + PartialEq + Debug + 'static,
{
    /// Creates an enabled push button that fires on release.
    #[must_use]
    pub fn new() -> Self {
        Self::build(Toggled::None, ButtonOptions::default())
    }

    /// Creates a push button with the given options.
    pub fn push(options: ButtonOptions) -> Result<Self, BindingError> {
        Self::with_binding(Toggled::None, options)
    }
}

impl<P> Default for ButtonModel<P, ()>
where
    P: Copy + PartialEq + Debug + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P, T> ButtonModel<P, T>
where
    P: Copy + PartialEq + Debug + 'static,
    T: Clone + PartialEq + Debug + 'static,
{
    /// Creates a toggle button flipping `property` between `value_a` and `value_b`.
    ///
    /// The button looks toggled while the property holds `value_b`. Fails if the two
    /// values are equal or the property currently holds neither.
    pub fn toggle(
        property: &SharedProperty<T>,
        value_a: T,
        value_b: T,
        options: ButtonOptions,
    ) -> Result<Self, BindingError> {
        Self::with_binding(Toggled::toggle(property, value_a, value_b)?, options)
    }

    /// Creates a sticky toggle button over `property`.
    ///
    /// Pressing at `value_a` switches to `value_b` immediately. The release of that same
    /// press does not switch back; a later press and release over the button does.
    pub fn sticky_toggle(
        property: &SharedProperty<T>,
        value_a: T,
        value_b: T,
        options: ButtonOptions,
    ) -> Result<Self, BindingError> {
        Self::with_binding(Toggled::sticky(property, value_a, value_b)?, options)
    }

    /// Creates a radio group member that selects `value` in the shared `property`.
    ///
    /// Fails if `property` has a domain that does not include `value`.
    pub fn group_member(
        property: &SharedProperty<T>,
        value: T,
        options: ButtonOptions,
    ) -> Result<Self, BindingError> {
        Self::with_binding(Toggled::group_member(property, value)?, options)
    }

    /// Creates a momentary button that holds `property` at `value_on` while pressed.
    pub fn momentary(
        property: &SharedProperty<T>,
        value_off: T,
        value_on: T,
        options: ButtonOptions,
    ) -> Result<Self, BindingError> {
        Self::with_binding(Toggled::momentary(property, value_off, value_on)?, options)
    }

    fn with_binding(binding: Toggled<T>, options: ButtonOptions) -> Result<Self, BindingError> {
        options.validate()?;
        Ok(Self::build(binding, options))
    }

    fn build(binding: Toggled<T>, options: ButtonOptions) -> Self {
        let inner = Rc::new(ButtonInner {
            pointers: RefCell::new(PointerOwnership::new()),
            enabled: Cell::new(options.enabled),
            firing: Cell::new(false),
            listeners: RefCell::new(Listeners::new()),
            binding,
            options,
            hold: Cell::new(None),
            state_observers: Observers::new(),
            published: Cell::new(InteractionState::Idle),
            publish_generation: Cell::new(0),
            press_generation: Cell::new(0),
            property_observer: Cell::new(None),
        });
        inner.published.set(inner.state());

        if let Some(property) = inner.binding.property() {
            let weak = Rc::downgrade(&inner);
            let id = property.observe(move |_, _| {
                if let Some(inner) = weak.upgrade() {
                    inner.publish_state();
                }
            });
            inner.property_observer.set(Some(id));
        }
        Self { inner }
    }

    // -------------------------------------------------------------------------
    // Pointer input
    // -------------------------------------------------------------------------

    /// Routes a targeted pointer event to the matching handler.
    ///
    /// Returns `true` if the event changed pointer ownership.
    pub fn handle(&self, event: &PointerEvent<P>) -> bool {
        match event.kind {
            PointerEventKind::Enter => self.on_enter(event.pointer),
            PointerEventKind::Exit => self.on_exit(event.pointer),
            PointerEventKind::Down => self.on_down(event.pointer, event.position),
            PointerEventKind::Up => self.on_up(event.pointer),
            PointerEventKind::Cancel => self.on_cancel(event.pointer),
        }
    }

    /// A pointer moved over the button.
    pub fn on_enter(&self, pointer: P) -> bool {
        let accepted = self.inner.pointers.borrow_mut().on_enter(pointer);
        if accepted {
            self.inner.publish_state();
        }
        accepted
    }

    /// A pointer moved off the button.
    pub fn on_exit(&self, pointer: P) -> bool {
        let accepted = self.inner.pointers.borrow_mut().on_exit(pointer);
        if accepted {
            self.inner.publish_state();
        }
        accepted
    }

    /// A pointer was pressed on the button.
    pub fn on_down(&self, pointer: P, position: Point) -> bool {
        let accepted = self.inner.pointers.borrow_mut().on_down(pointer, position);
        if accepted {
            log::debug!("press by {pointer:?} accepted");
            let press = self.inner.press_generation.get();
            self.inner.press_generation.set(press.wrapping_add(1));
            self.inner.publish_state();
            self.inner.pressed();
        }
        accepted
    }

    /// A pointer was released.
    ///
    /// If the release fires, listeners run before the press is cleared, so they still
    /// observe [`ButtonModel::is_down`] as `true`.
    pub fn on_up(&self, pointer: P) -> bool {
        let release = self.inner.pointers.borrow().release_of(&pointer);
        let Some(release) = release else {
            log::trace!("up from {pointer:?} ignored: not the pressing pointer");
            return false;
        };
        let press = self.inner.press_generation.get();
        self.inner.released(release);
        // A listener may already have ended this press, or started a new one.
        if self.inner.press_generation.get() == press {
            let _ = self.inner.pointers.borrow_mut().on_up(pointer);
        }
        log::debug!("press by {pointer:?} released (over: {})", release.over);
        self.inner.publish_state();
        true
    }

    /// A pointer contact vanished without an `up`. The press, if any, is aborted
    /// without firing.
    pub fn on_cancel(&self, pointer: P) -> bool {
        let was_pressing = self.inner.pointers.borrow().is_pressed_by(&pointer);
        let changed = self.inner.pointers.borrow_mut().on_cancel(pointer);
        if was_pressing {
            log::debug!("press by {pointer:?} canceled");
            self.inner.aborted();
        }
        if changed {
            self.inner.publish_state();
        }
        changed
    }

    /// Aborts the current press, if any, without firing. Hover is kept.
    pub fn interrupt(&self) {
        let pressing = self.inner.pointers.borrow().pressing().copied();
        if let Some(pointer) = pressing {
            let _ = self.inner.pointers.borrow_mut().on_up(pointer);
            log::debug!("press by {pointer:?} interrupted");
            self.inner.aborted();
            self.inner.publish_state();
        }
    }

    /// Advances the hold-to-repeat clock and fires any repeats that fell due.
    ///
    /// Repeats only fire while the press is still over the button and the button is
    /// enabled. Returns the number of repeats fired.
    pub fn step(&self, dt: Duration) -> u32 {
        let Some(mut timer) = self.inner.hold.get() else {
            return 0;
        };
        let due = timer.advance(dt);
        if due > 0 && self.inner.repeat_active() {
            timer.mark_fired();
        }
        self.inner.hold.set(Some(timer));

        // Listeners may disable the button, drag it off or end the press.
        let press = self.inner.press_generation.get();
        let mut fired = 0;
        while fired < due
            && self.inner.press_generation.get() == press
            && self.inner.hold.get().is_some()
            && self.inner.repeat_active()
        {
            self.inner.fire();
            fired += 1;
        }
        fired
    }

    // -------------------------------------------------------------------------
    // Application surface
    // -------------------------------------------------------------------------

    /// Fires the button as if it had been activated, bypassing pointer tracking.
    ///
    /// This is the entry point for keyboard and accessibility activation. Does nothing
    /// while the button is disabled.
    pub fn fire(&self) {
        if self.inner.enabled.get() {
            self.inner.fire();
        } else {
            log::trace!("fire ignored: button disabled");
        }
    }

    /// Enables or disables the button.
    ///
    /// Pointer contact is kept either way; re-enabling resumes from it.
    pub fn set_enabled(&self, enabled: bool) {
        if self.inner.enabled.replace(enabled) == enabled {
            return;
        }
        log::debug!("button {}", if enabled { "enabled" } else { "disabled" });
        match &self.inner.binding {
            Toggled::Sticky {
                ready_to_release_up,
                ..
            } if enabled => ready_to_release_up.set(true),
            Toggled::Momentary {
                property,
                value_off,
                ..
            } if !enabled => {
                property.set(value_off.clone());
            }
            _ => {}
        }
        self.inner.publish_state();
    }

    /// Registers `listener` to run on every fire. Duplicate registrations are ignored.
    pub fn add_listener(&self, listener: &Listener) -> bool {
        self.inner.listeners.borrow_mut().add(listener)
    }

    /// Unregisters `listener`. Removing an absent listener is a no-op.
    pub fn remove_listener(&self, listener: &Listener) -> bool {
        self.inner.listeners.borrow_mut().remove(listener)
    }

    /// Returns `true` if `listener` is registered.
    #[must_use]
    pub fn has_listener(&self, listener: &Listener) -> bool {
        self.inner.listeners.borrow().contains(listener)
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Registers `observer` to run whenever the derived [`InteractionState`] changes.
    pub fn observe_state(&self, observer: impl Fn(InteractionState) + 'static) -> ObserverId {
        let observer: StateObserver = Rc::new(observer);
        self.inner.state_observers.insert(observer)
    }

    /// Unregisters a state observer.
    pub fn unobserve_state(&self, id: ObserverId) -> bool {
        self.inner.state_observers.remove(id)
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// The state the button should be drawn in, recomputed from the current flags.
    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.inner.state()
    }

    /// The four flags the interaction state is derived from.
    #[must_use]
    pub fn flags(&self) -> InteractionFlags {
        self.inner.flags()
    }

    /// Whether the button reacts to input.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.inner.enabled.get()
    }

    /// Whether some pointer is over the button.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.inner.pointers.borrow().is_hovered()
    }

    /// Whether some pointer is pressing the button.
    #[must_use]
    pub fn is_down(&self) -> bool {
        self.inner.pointers.borrow().is_pressed()
    }

    /// Whether the bound value is in its "on"/selected position. Always `false` for
    /// push buttons.
    #[must_use]
    pub fn is_toggled(&self) -> bool {
        self.inner.binding.is_toggled()
    }

    /// Whether listeners are currently being dispatched.
    #[must_use]
    pub fn is_firing(&self) -> bool {
        self.inner.firing.get()
    }

    /// A copy of the pointer ownership record.
    #[must_use]
    pub fn pointer_state(&self) -> PointerOwnership<P> {
        self.inner.pointers.borrow().clone()
    }

    /// Where the current press started, if the button is pressed.
    #[must_use]
    pub fn press_position(&self) -> Option<Point> {
        self.inner.pointers.borrow().press_position()
    }

    /// The button's variant.
    #[must_use]
    pub fn binding_kind(&self) -> BindingKind {
        self.inner.binding.kind()
    }

    /// The bound property, for every variant except push buttons.
    #[must_use]
    pub fn property(&self) -> Option<SharedProperty<T>> {
        self.inner.binding.property().cloned()
    }

    /// The options the button was created with.
    #[must_use]
    pub fn options(&self) -> ButtonOptions {
        self.inner.options
    }

    /// Returns a non-owning handle, for listeners that refer back to their button.
    #[must_use]
    pub fn downgrade(&self) -> WeakButtonModel<P, T> {
        WeakButtonModel {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Returns `true` if both handles refer to the same button.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<P, T> ButtonInner<P, T>
where
    P: Copy + PartialEq + Debug + 'static,
    T: Clone + PartialEq + Debug + 'static,
{
    fn flags(&self) -> InteractionFlags {
        let pointers = self.pointers.borrow();
        InteractionFlags {
            hovered: pointers.is_hovered(),
            pressed: pointers.is_pressed(),
            enabled: self.enabled.get(),
            toggled: self.binding.is_toggled(),
        }
    }

    fn state(&self) -> InteractionState {
        self.flags().state()
    }

    /// Whether a held press should produce repeats right now.
    fn repeat_active(&self) -> bool {
        self.enabled.get() && {
            let pointers = self.pointers.borrow();
            pointers.pressing().is_some_and(|p| pointers.is_hovered_by(p))
        }
    }

    fn publish_state(&self) {
        let state = self.state();
        if self.published.replace(state) == state {
            return;
        }
        let generation = self.publish_generation.get().wrapping_add(1);
        self.publish_generation.set(generation);
        for observer in self.state_observers.snapshot() {
            // An observer changed the state again; the nested publish has told everyone.
            if self.publish_generation.get() != generation {
                break;
            }
            observer(state);
        }
    }

    /// Runs the effect of one fire, then the listeners.
    fn fire(&self) {
        match &self.binding {
            Toggled::Momentary {
                property,
                value_off,
                value_on,
            } => {
                property.set(value_on.clone());
                self.notify_listeners();
                property.set(value_off.clone());
            }
            binding => {
                binding.apply_fire();
                self.notify_listeners();
            }
        }
    }

    fn notify_listeners(&self) {
        let was_firing = self.firing.replace(true);
        if was_firing {
            log::warn!("button fired re-entrantly from one of its own listeners");
        }
        let snapshot = self.listeners.borrow().snapshot();
        log::debug!("firing {} listener(s)", snapshot.len());
        snapshot.dispatch();
        self.firing.set(was_firing);
    }

    /// A press was accepted.
    fn pressed(&self) {
        self.hold.set(None);
        if !self.enabled.get() {
            return;
        }
        match &self.binding {
            Toggled::Sticky {
                property,
                value_a,
                ready_to_release_up,
                ..
            } => {
                if property.is(value_a) {
                    log::debug!("sticky toggle latched on press");
                    ready_to_release_up.set(false);
                    self.fire();
                }
            }
            Toggled::Momentary {
                property, value_on, ..
            } => {
                property.set(value_on.clone());
                self.notify_listeners();
            }
            _ => {
                if let Some(repeat) = self.options.fire_on_hold {
                    self.hold.set(Some(HoldTimer::start(repeat)));
                }
                if self.options.fire_on_down {
                    self.fire();
                }
            }
        }
    }

    /// The pressing pointer was released; the press is still recorded.
    fn released(&self, release: Release) {
        let hold = self.hold.take();
        if !self.enabled.get() {
            return;
        }
        match &self.binding {
            Toggled::Sticky {
                property,
                value_b,
                ready_to_release_up,
                ..
            } => {
                if !release.over {
                    // Left while down: prime the next gesture instead of ignoring it.
                    ready_to_release_up.set(true);
                } else if property.is(value_b) {
                    if ready_to_release_up.get() {
                        log::debug!("sticky toggle released");
                        self.fire();
                    }
                    ready_to_release_up.set(true);
                }
            }
            Toggled::Momentary {
                property,
                value_off,
                ..
            } => {
                property.set(value_off.clone());
            }
            _ => {
                let repeated = hold.is_some_and(|timer| timer.has_fired());
                if release.over && !self.options.fire_on_down && !repeated {
                    self.fire();
                }
            }
        }
    }

    /// The press ended without a release (cancel or interrupt).
    fn aborted(&self) {
        self.hold.set(None);
        match &self.binding {
            Toggled::Sticky {
                ready_to_release_up,
                ..
            } => ready_to_release_up.set(true),
            Toggled::Momentary {
                property,
                value_off,
                ..
            } => {
                property.set(value_off.clone());
            }
            _ => {}
        }
    }
}

impl<P: Debug, T: Debug> Debug for ButtonModel<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = &self.inner;
        f.debug_struct("ButtonModel")
            .field("pointers", &inner.pointers)
            .field("enabled", &inner.enabled.get())
            .field("firing", &inner.firing.get())
            .field("listeners", &inner.listeners)
            .field("binding", &inner.binding)
            .field("options", &inner.options)
            .field("hold", &inner.hold.get())
            .field("state_observers", &inner.state_observers)
            .finish_non_exhaustive()
    }
}

impl<P, T> Debug for WeakButtonModel<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakButtonModel")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

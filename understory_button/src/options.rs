// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Button configuration.
//!
//! ```
//! use core::time::Duration;
//! use understory_button::{ButtonOptions, HoldRepeat};
//!
//! let options = ButtonOptions::new()
//!     .with_fire_on_hold(HoldRepeat::new(Duration::from_millis(300), Duration::from_millis(50)));
//! assert!(!options.fire_on_down);
//! assert!(options.validate().is_ok());
//! ```

use core::time::Duration;

use crate::error::BindingError;

/// Delay and repeat interval for firing while a button is held.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HoldRepeat {
    /// Time from press to the first repeat.
    pub delay: Duration,
    /// Time between subsequent repeats.
    pub interval: Duration,
}

impl HoldRepeat {
    /// Default time from press to the first repeat.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(400);
    /// Default time between repeats.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

    /// Creates a repeat configuration.
    #[must_use]
    pub const fn new(delay: Duration, interval: Duration) -> Self {
        Self { delay, interval }
    }
}

impl Default for HoldRepeat {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY, Self::DEFAULT_INTERVAL)
    }
}

/// Options shared by every button variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ButtonOptions {
    /// Fire as soon as a press is accepted instead of on release.
    ///
    /// Ignored by sticky-toggle and momentary buttons, which react to both edges.
    pub fire_on_down: bool,
    /// Keep firing while the button is held, driven by `ButtonModel::step`.
    ///
    /// Ignored by sticky-toggle and momentary buttons.
    pub fire_on_hold: Option<HoldRepeat>,
    /// Whether the button starts enabled.
    pub enabled: bool,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            fire_on_down: false,
            fire_on_hold: None,
            enabled: true,
        }
    }
}

impl ButtonOptions {
    /// Options for a tap-to-activate button that starts enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets [`ButtonOptions::fire_on_down`].
    #[must_use]
    pub fn with_fire_on_down(mut self, fire_on_down: bool) -> Self {
        self.fire_on_down = fire_on_down;
        self
    }

    /// Enables hold-to-repeat.
    #[must_use]
    pub fn with_fire_on_hold(mut self, repeat: HoldRepeat) -> Self {
        self.fire_on_hold = Some(repeat);
        self
    }

    /// Sets the initial enabled state.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Checks the options for values that cannot work.
    pub fn validate(&self) -> Result<(), BindingError> {
        match self.fire_on_hold {
            Some(repeat) if repeat.interval.is_zero() => Err(BindingError::ZeroRepeatInterval),
            _ => Ok(()),
        }
    }
}

/// Countdown for hold-to-repeat, advanced explicitly by the embedder's clock.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct HoldTimer {
    repeat: HoldRepeat,
    until_next: Duration,
    fired: bool,
}

impl HoldTimer {
    pub(crate) fn start(repeat: HoldRepeat) -> Self {
        Self {
            repeat,
            until_next: repeat.delay,
            fired: false,
        }
    }

    /// Advances by `dt` and returns how many repeats fell due.
    ///
    /// The interval must be non-zero; see [`ButtonOptions::validate`].
    pub(crate) fn advance(&mut self, dt: Duration) -> u32 {
        let Some(past) = dt.checked_sub(self.until_next) else {
            self.until_next -= dt;
            return 0;
        };
        let interval = self.repeat.interval.as_nanos().max(1);
        let past = past.as_nanos();
        let extra = past / interval;
        self.until_next = self.repeat.interval - duration_from_nanos(past % interval);
        u32::try_from(extra.saturating_add(1)).unwrap_or(u32::MAX)
    }

    pub(crate) fn mark_fired(&mut self) {
        self.fired = true;
    }

    /// Whether any repeat fired during this press.
    pub(crate) fn has_fired(&self) -> bool {
        self.fired
    }
}

fn duration_from_nanos(nanos: u128) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "a remainder below one billion fits in u32"
    )]
    let subsec = (nanos % NANOS_PER_SEC) as u32;
    Duration::new(secs, subsec)
}

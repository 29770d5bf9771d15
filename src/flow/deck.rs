// SPDX-License-Identifier: MPL-2.0
//! Cursor and auto-advance machinery for the framework guide deck.
//!
//! The deck is a passive tour: unlike the wizard there is no forward gate,
//! and free jumping via digit keys and progress dots is allowed. The only
//! invariant is that the cursor stays inside `0..slide_count` after every
//! transition; out-of-range requests (stale digit keys) are silently ignored.
//!
//! The auto-advance countdown is owned here rather than by a detached timer
//! task: the machine records when the current slide was armed and the owning
//! component asks `fire_if_due` on each periodic tick. Cancellation is
//! therefore synchronous by construction: dropping the tick subscription,
//! changing the cursor, or disabling the flag all make a stale fire
//! impossible.

use crate::catalog::SlideDuration;
use std::time::Instant;

/// Outcome of a requested deck transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The cursor moved to the given slide index.
    Moved(usize),
    /// Advancing past the last slide: the tour is finished.
    Completed,
    /// The request was out of range and was ignored.
    Ignored,
}

/// Auto-advance countdown state.
///
/// `armed_at` is the instant the current slide started counting; `None`
/// while auto-advance is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvance {
    enabled: bool,
    armed_at: Option<Instant>,
}

impl AutoAdvance {
    fn disabled() -> Self {
        Self {
            enabled: false,
            armed_at: None,
        }
    }

    /// Whether the countdown is running.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Fraction of the given duration already elapsed, in `0.0..=1.0`.
    /// Returns zero while disabled. Used by the progress indicator.
    #[must_use]
    pub fn progress(&self, now: Instant, duration: SlideDuration) -> f32 {
        match self.armed_at {
            Some(armed) if self.enabled => {
                let elapsed = now.saturating_duration_since(armed).as_secs_f32();
                (elapsed / duration.as_duration().as_secs_f32()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }
}

/// Bounds-checked cursor over a fixed slide deck, plus the auto-advance
/// sub-machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckMachine {
    cursor: usize,
    slide_count: usize,
    auto_advance: AutoAdvance,
}

impl DeckMachine {
    /// Creates a machine over `slide_count` slides with the cursor at 0 and
    /// auto-advance off.
    ///
    /// `slide_count` must be at least 1; the catalog loader rejects empty
    /// decks before a machine is ever constructed.
    #[must_use]
    pub fn new(slide_count: usize) -> Self {
        debug_assert!(slide_count > 0, "deck must have at least one slide");
        Self {
            cursor: 0,
            slide_count: slide_count.max(1),
            auto_advance: AutoAdvance::disabled(),
        }
    }

    /// Current slide index, always in `0..slide_count`.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of slides in the deck.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Whether the cursor is on the last slide.
    #[must_use]
    pub fn is_at_last(&self) -> bool {
        self.cursor + 1 == self.slide_count
    }

    /// Read-only view of the auto-advance state.
    #[must_use]
    pub fn auto_advance(&self) -> &AutoAdvance {
        &self.auto_advance
    }

    /// Advances one slide; at the last slide, reports completion without
    /// moving and stops the countdown.
    pub fn next(&mut self, now: Instant) -> Step {
        if self.is_at_last() {
            // A finished tour must not keep re-firing completion on every
            // subsequent tick.
            self.auto_advance.enabled = false;
            self.auto_advance.armed_at = None;
            return Step::Completed;
        }
        self.cursor += 1;
        self.rearm(now);
        Step::Moved(self.cursor)
    }

    /// Retreats one slide; a no-op at the first slide.
    pub fn previous(&mut self, now: Instant) -> Step {
        if self.cursor == 0 {
            return Step::Ignored;
        }
        self.cursor -= 1;
        self.rearm(now);
        Step::Moved(self.cursor)
    }

    /// Jumps to an absolute slide index if it is in range, otherwise ignores
    /// the request.
    pub fn go_to(&mut self, index: usize, now: Instant) -> Step {
        if index >= self.slide_count {
            return Step::Ignored;
        }
        if index == self.cursor {
            return Step::Ignored;
        }
        self.cursor = index;
        self.rearm(now);
        Step::Moved(self.cursor)
    }

    /// Turns the countdown on, arming it for the current slide. Idempotent:
    /// enabling an already-enabled machine does not reset the countdown.
    pub fn enable_auto_advance(&mut self, now: Instant) {
        if !self.auto_advance.enabled {
            self.auto_advance.enabled = true;
            self.auto_advance.armed_at = Some(now);
        }
    }

    /// Turns the countdown off. Idempotent.
    pub fn disable_auto_advance(&mut self) {
        self.auto_advance.enabled = false;
        self.auto_advance.armed_at = None;
    }

    /// Toggles the countdown, returning the new enabled state.
    pub fn toggle_auto_advance(&mut self, now: Instant) -> bool {
        if self.auto_advance.enabled {
            self.disable_auto_advance();
        } else {
            self.enable_auto_advance(now);
        }
        self.auto_advance.enabled
    }

    /// Advances if the current slide's countdown has elapsed.
    ///
    /// Called on every periodic tick while the countdown runs. `duration` is
    /// the resolved duration of the slide the cursor is on. Returns
    /// `Step::Ignored` while disabled or not yet due.
    pub fn fire_if_due(&mut self, now: Instant, duration: SlideDuration) -> Step {
        let Some(armed_at) = self.auto_advance.armed_at else {
            return Step::Ignored;
        };
        if !self.auto_advance.enabled {
            return Step::Ignored;
        }
        if now.saturating_duration_since(armed_at) < duration.as_duration() {
            return Step::Ignored;
        }
        self.next(now)
    }

    fn rearm(&mut self, now: Instant) {
        if self.auto_advance.enabled {
            self.auto_advance.armed_at = Some(now);
        }
    }
}

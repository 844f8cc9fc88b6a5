// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-toast enter/exit state machine.
//!
//! ```text
//! Entering --(duration elapsed)--> Steady --(remove)--> Exiting --(duration elapsed)--> Purged
//!     \_____________________________(remove)___________/
//! ```
//!
//! Durations are measured from the timestamp at which a phase was entered.
//! Timestamps are host-supplied milliseconds from any monotonic clock.

/// Lifecycle phase of a toast.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Enter animation is running.
    Entering,
    /// Fully shown and at rest.
    Steady,
    /// Exit animation is running; the toast is still painted.
    Exiting,
    /// Exit finished. The record is removed from the registry.
    Purged,
}

impl Phase {
    /// Returns `true` if a toast in this phase should be painted.
    #[must_use]
    pub const fn is_live(self) -> bool {
        !matches!(self, Self::Purged)
    }

    /// Returns `true` for the timed phases.
    #[must_use]
    pub const fn is_animating(self) -> bool {
        matches!(self, Self::Entering | Self::Exiting)
    }
}

/// Timed state machine driving one toast's animation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    phase: Phase,
    since: u64,
    duration: u64,
}

impl Transition {
    /// Starts in [`Phase::Entering`] at `now`.
    ///
    /// `duration` is used for both the enter and the exit animation and is
    /// raised to at least one millisecond.
    #[must_use]
    pub fn new(now: u64, duration: u64) -> Self {
        Self {
            phase: Phase::Entering,
            since: now,
            duration: duration.max(1),
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Timestamp at which the current phase began.
    #[must_use]
    pub const fn since(&self) -> u64 {
        self.since
    }

    /// Animation duration in milliseconds.
    #[must_use]
    pub const fn duration(&self) -> u64 {
        self.duration
    }

    /// Progress through the current timed phase, from `0.0` to `1.0`.
    ///
    /// [`Phase::Steady`] and [`Phase::Purged`] report `1.0`.
    #[must_use]
    pub fn progress(&self, now: u64) -> f64 {
        if !self.phase.is_animating() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.since);
        (elapsed as f64 / self.duration as f64).min(1.0)
    }

    /// Requests the exit animation.
    ///
    /// Returns `true` if the phase changed. Removing a toast that is already
    /// exiting or purged is a no-op, so repeated removals are idempotent.
    pub fn begin_exit(&mut self, now: u64) -> bool {
        match self.phase {
            Phase::Entering | Phase::Steady => {
                self.phase = Phase::Exiting;
                self.since = now;
                true
            }
            Phase::Exiting | Phase::Purged => false,
        }
    }

    /// Advances timed phases whose duration has elapsed by `now`.
    ///
    /// Returns the new phase if it changed. At most one step is taken per
    /// call; an exit always waits its full duration from when it was
    /// requested.
    pub fn advance(&mut self, now: u64) -> Option<Phase> {
        if !self.phase.is_animating() || now.saturating_sub(self.since) < self.duration {
            return None;
        }
        let next = match self.phase {
            Phase::Entering => Phase::Steady,
            Phase::Exiting => Phase::Purged,
            Phase::Steady | Phase::Purged => return None,
        };
        self.phase = next;
        self.since += self.duration;
        Some(next)
    }
}

//! Simulated time model.
//!
//! # Design
//!
//! Time is continuous: a `SimTime` is a number of simulated seconds since the
//! start of the run, stored as `f64`.  Event times are produced by adding
//! exponential variates to the current time, so there is no fixed tick.
//!
//! `SimClock` owns the current time and only ever moves forward, and only
//! when the engine processes an event.

use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute point in simulated time, in seconds since the start of the run.
///
/// Values produced by the engine are always finite and non-negative, so the
/// `PartialOrd` derive behaves as a total order in practice.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Seconds as a raw `f64`.
    #[inline]
    pub fn secs(self) -> f64 {
        self.0
    }

    /// Seconds elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        debug_assert!(earlier <= self, "{earlier} is after {self}");
        self.0 - earlier.0
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.3}s", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The engine's simulated clock.
///
/// Monotonically non-decreasing; advanced only by
/// [`advance_to`](SimClock::advance_to) when an event is processed.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    now: SimTime,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current simulated time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Jump to the time of the event being processed.
    ///
    /// # Panics
    /// Panics in debug mode if `t` lies before the current time.
    #[inline]
    pub fn advance_to(&mut self, t: SimTime) {
        debug_assert!(t >= self.now, "clock moved backwards: {} -> {}", self.now, t);
        self.now = t;
    }

    /// Rewind to time zero for a fresh run.
    #[inline]
    pub fn reset(&mut self) {
        self.now = SimTime::ZERO;
    }

    /// `true` once the clock has reached `horizon` (inclusive).
    #[inline]
    pub fn reached(&self, horizon: SimTime) -> bool {
        self.now >= horizon
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.now.0.max(0.0);
        let minutes = (secs / 60.0).floor() as u64;
        write!(f, "{} ({}m {:06.3}s)", self.now, minutes, secs - minutes as f64 * 60.0)
    }
}

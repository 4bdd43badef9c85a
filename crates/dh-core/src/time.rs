//! Simulation time model.
//!
//! # Design
//!
//! A `Tick` counts frames.  Unlike a fixed-resolution clock, frames may
//! carry different deltas (a renderer drives the sim at whatever rate it
//! manages), so `SimClock` accumulates elapsed seconds separately:
//!
//!   elapsed_secs = Σ dt over all advanced frames
//!
//! Elapsed time is kept in `f64` so that spawn deadlines stay exact over long
//! runs; per-frame deltas handed to drones are `f32`.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current frame and the simulated seconds elapsed so far.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The frame about to be (or being) processed.
    pub current_tick: Tick,
    /// Simulated seconds since the clock was created.
    pub elapsed_secs: f64,
    /// Delta of the most recently advanced frame.
    pub last_dt: f32,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the current frame, which lasted `dt` seconds.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.elapsed_secs += f64::from(dt);
        self.last_dt = dt;
    }

    /// Break elapsed time into (minutes, seconds, milliseconds).
    pub fn elapsed_msm(&self) -> (u64, u32, u32) {
        let total_ms = (self.elapsed_secs.max(0.0) * 1_000.0).round() as u64;
        let minutes = total_ms / 60_000;
        let secs = ((total_ms % 60_000) / 1_000) as u32;
        let ms = (total_ms % 1_000) as u32;
        (minutes, secs, ms)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, s, ms) = self.elapsed_msm();
        write!(f, "{} ({:02}:{:02}.{:03})", self.current_tick, m, s, ms)
    }
}

//! Periodic resource spawning.

use dh_core::{DEFAULT_SPAWN_RATE, SimRng, Vec3, parse_spawn_rate};

/// Fires once every `1 / rate` simulated seconds.
///
/// At most one resource is spawned per expiry, and the next deadline is
/// measured from the moment of firing, so a long frame does not cause a
/// burst of catch-up spawns.
#[derive(Clone, Debug)]
pub struct SpawnTimer {
    rate:     f32,
    next_due: f64,
}

impl SpawnTimer {
    /// A timer at `rate` per second, first due one interval after `now`.
    pub fn new(rate: f32, now: f64) -> Self {
        let mut timer = Self { rate: DEFAULT_SPAWN_RATE, next_due: now };
        timer.set_rate(rate, now);
        timer
    }

    /// Spawns per second currently in effect.
    #[inline]
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Seconds between spawns.
    #[inline]
    pub fn interval(&self) -> f64 {
        1.0 / f64::from(self.rate)
    }

    /// Simulated second of the next spawn.
    #[inline]
    pub fn next_due(&self) -> f64 {
        self.next_due
    }

    /// Change the rate (non-positive or non-finite falls back to the
    /// default) and re-arm from `now`.
    pub fn set_rate(&mut self, rate: f32, now: f64) {
        self.rate = if rate.is_finite() && rate > 0.0 { rate } else { DEFAULT_SPAWN_RATE };
        self.rearm(now);
    }

    /// Parse user-entered text as the new rate and re-arm from `now`.
    pub fn set_rate_text(&mut self, text: &str, now: f64) {
        self.set_rate(parse_spawn_rate(text), now);
    }

    /// Schedule the next spawn one interval after `now`.
    #[inline]
    pub fn rearm(&mut self, now: f64) {
        self.next_due = now + self.interval();
    }

    /// If the deadline has passed, re-arm and return `true`.
    pub fn poll(&mut self, now: f64) -> bool {
        if now >= self.next_due {
            self.rearm(now);
            true
        } else {
            false
        }
    }
}

/// Where new resources may appear: a flat disc of `radius` around `center`
/// at `height`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpawnZone {
    pub center: Vec3,
    pub radius: f32,
    pub height: f32,
}

impl SpawnZone {
    pub fn sample(&self, rng: &mut SimRng) -> Vec3 {
        rng.point_near(self.center, self.radius, self.height)
    }
}

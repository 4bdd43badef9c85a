//! Top-level simulation configuration.

use crate::{DhError, DhResult};

/// Resources per second used whenever the configured rate is unusable.
pub const DEFAULT_SPAWN_RATE: f32 = 1.0;

/// Parse a spawn rate typed by a user.
///
/// Anything that is not a finite number greater than zero falls back to
/// [`DEFAULT_SPAWN_RATE`]; this never fails.
pub fn parse_spawn_rate(text: &str) -> f32 {
    match text.trim().parse::<f32>() {
        Ok(rate) if rate.is_finite() && rate > 0.0 => rate,
        _ => DEFAULT_SPAWN_RATE,
    }
}

/// Simulation configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// `SimBuilder`.  With the `serde` feature every field is optional in the
/// file and falls back to [`SimConfig::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Frame delta used by `run` / `run_ticks`, in seconds.
    pub frame_dt_secs: f32,

    /// Frames simulated by `run`.
    pub total_ticks: u64,

    /// Drones created per faction on every (re)start.
    pub drones_per_faction: usize,

    /// Travel speed in units per second applied to every new drone.
    pub move_speed: f32,

    /// Seconds a drone dwells on a resource before picking it up.
    pub collection_time: f32,

    /// Resources spawned per second.  Non-positive values behave as
    /// [`DEFAULT_SPAWN_RATE`].
    pub spawn_rate: f32,

    /// Whether drones publish a path line toward their current goal.
    pub show_path: bool,

    /// Drones spawn within this distance of their base; resources within
    /// twice this distance of the origin.
    pub spawn_radius: f32,

    /// Drones closer than this repel each other.
    pub avoidance_radius: f32,

    /// Height of the layer drones and resources are spawned on.
    pub spawn_height: f32,

    /// Emit an observer snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                  42,
            frame_dt_secs:         1.0 / 60.0,
            total_ticks:           3_600,
            drones_per_faction:    5,
            move_speed:            5.0,
            collection_time:       2.0,
            spawn_rate:            DEFAULT_SPAWN_RATE,
            show_path:             false,
            spawn_radius:          5.0,
            avoidance_radius:      2.0,
            spawn_height:          1.0,
            output_interval_ticks: 60,
        }
    }
}

impl SimConfig {
    /// The effective spawn rate after fallback.
    #[inline]
    pub fn effective_spawn_rate(&self) -> f32 {
        if self.spawn_rate.is_finite() && self.spawn_rate > 0.0 {
            self.spawn_rate
        } else {
            DEFAULT_SPAWN_RATE
        }
    }

    /// Reject values the tick loop cannot work with.
    ///
    /// Drone count and speed are not checked; zero drones is a valid (if
    /// dull) simulation.
    pub fn validate(&self) -> DhResult<()> {
        if !(self.frame_dt_secs.is_finite() && self.frame_dt_secs > 0.0) {
            return Err(DhError::Config(format!(
                "frame_dt_secs must be a positive number, got {}",
                self.frame_dt_secs
            )));
        }
        for (name, value) in [
            ("spawn_radius", self.spawn_radius),
            ("avoidance_radius", self.avoidance_radius),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(DhError::Config(format!("{name} must be >= 0, got {value}")));
            }
        }
        if !self.collection_time.is_finite() {
            return Err(DhError::Config("collection_time must be finite".into()));
        }
        Ok(())
    }
}

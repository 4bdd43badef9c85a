//! Read-only simulation state passed to every behavior callback.

use dh_agent::DroneStore;
use dh_core::Tick;
use dh_directory::Directory;

/// A read-only snapshot of the simulation for one drone's decision.
///
/// Rebuilt by dh-sim for every drone, so it always reflects the intents
/// already applied for lower-numbered drones in the same tick.
pub struct SimContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Length of this frame in seconds.
    pub dt: f32,

    /// Simulated seconds elapsed before this frame.
    pub now: f64,

    /// Every drone's SoA state.
    pub drones: &'a DroneStore,

    /// Resources, factions, scores and the spatial queries.
    pub directory: &'a Directory,
}

impl<'a> SimContext<'a> {
    #[inline]
    pub fn new(
        tick:      Tick,
        dt:        f32,
        now:       f64,
        drones:    &'a DroneStore,
        directory: &'a Directory,
    ) -> Self {
        Self { tick, dt, now, drones, directory }
    }
}

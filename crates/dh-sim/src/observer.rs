//! Simulation observer trait for progress reporting and data collection.

use dh_agent::{DroneState, DroneStore};
use dh_core::Tick;
use dh_directory::{Directory, ScoreLine};
use dh_effects::PopEffect;

/// Aggregate counts reported at the end of every tick.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSummary {
    pub tick:         Tick,
    /// Simulated seconds at the end of the tick.
    pub elapsed_secs: f64,

    // ── Drones per state ──────────────────────────────────────────────────
    pub searching:  usize,
    pub moving:     usize,
    pub collecting: usize,
    pub returning:  usize,
    pub delivering: usize,
    /// Drones currently holding a resource.
    pub carrying:   usize,

    // ── Resources ─────────────────────────────────────────────────────────
    /// Resources present in the registry (available or carried).
    pub resources:  usize,
    /// Of those, resources nobody has picked up yet.
    pub available:  usize,
    /// Resources spawned this tick.
    pub spawned:    usize,
    /// Successful deliveries this tick.
    pub deliveries: usize,

    /// Pop effects still running after this tick.
    pub active_effects: usize,
}

impl TickSummary {
    /// Per-state drone counts in [`DroneState::ALL`] order.
    pub fn state_counts(&self) -> [(DroneState, usize); 5] {
        [
            (DroneState::Searching, self.searching),
            (DroneState::MovingToResource, self.moving),
            (DroneState::Collecting, self.collecting),
            (DroneState::ReturningToBase, self.returning),
            (DroneState::Delivering, self.delivering),
        ]
    }
}

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop
/// and the restart lifecycle.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — score printer
///
/// ```rust,ignore
/// struct ScorePrinter;
///
/// impl SimObserver for ScorePrinter {
///     fn on_scores(&mut self, tick: Tick, lines: &[ScoreLine]) {
///         for line in lines {
///             println!("{tick}: {line}");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any drone steps.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with aggregate counts.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called whenever the score display changes: after each delivery and
    /// after every restart.
    fn on_scores(&mut self, _tick: Tick, _lines: &[ScoreLine]) {}

    fn on_effect_spawned(&mut self, _tick: Tick, _effect: &PopEffect) {}

    fn on_effect_finished(&mut self, _tick: Tick, _effect: &PopEffect) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// Provides read-only access to the full drone and directory state so
    /// that output writers can record a snapshot without the sim needing to
    /// know about any specific output format.
    fn on_snapshot(
        &mut self,
        _tick:      Tick,
        _drones:    &DroneStore,
        _directory: &Directory,
    ) {}

    /// Called after a restart has rebuilt the population.
    fn on_restart(&mut self, _tick: Tick, _drone_count: usize) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

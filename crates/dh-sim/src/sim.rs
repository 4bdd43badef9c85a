//! The `Sim` struct and its tick loop.

use tracing::{info, trace};

use dh_agent::{DroneState, DroneStore, DroneStoreBuilder};
use dh_behavior::{BehaviorModel, Intent, SimContext};
use dh_core::{DroneId, SimClock, SimConfig, SimRng, Tick};
use dh_directory::Directory;
use dh_effects::{EffectKind, EffectScheduler};

use crate::{SimObserver, TickSummary};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<B>` holds all simulation state and drives the tick loop:
///
/// 1. **Drones** (sequential, ascending `DroneId`): build a fresh
///    [`SimContext`], call [`BehaviorModel::step`], apply the intents.
///    - `Claim` / `Release`  → set or clear the target (and cargo).
///    - `Steer`              → write position and orientation.
///    - `PickUp`             → deactivate the resource, start carrying,
///      fire a collection effect.
///    - `Deliver`            → score through the directory, fire a
///      delivery effect at the base.
/// 2. **Spawn**: the directory's timer adds at most one resource.
/// 3. **Effects**: advance and report finished pop effects.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel> {
    /// Current settings.  The setters below keep this in sync with the live
    /// population so a restart reproduces them.
    pub config: SimConfig,

    /// Simulation clock.  Keeps running across restarts.
    pub clock: SimClock,

    /// Drone state (SoA arrays).  Behavior models read this through
    /// `SimContext`.
    pub drones: DroneStore,

    /// Factions, resources, scores and the spawn timer.
    pub directory: Directory,

    /// Running pop effects.
    pub effects: EffectScheduler,

    /// The behavior model.  Called once per drone per tick.
    pub behavior: B,

    /// Draws drone spawn positions.
    pub(crate) drone_rng: SimRng,

    /// Draws resource spawn positions.  Separate from `drone_rng` so changing
    /// the population size does not shift where resources appear.
    pub(crate) resource_rng: SimRng,
}

impl<B: BehaviorModel> Sim<B> {
    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Destroy every drone and resource, zero the scores, and respawn
    /// `config.drones_per_faction` drones around each base.
    ///
    /// Running pop effects are left to finish.
    pub fn restart<O: SimObserver>(&mut self, observer: &mut O) {
        self.reset_world();
        let tick = self.clock.current_tick;
        observer.on_restart(tick, self.drones.count);
        observer.on_scores(tick, &self.directory.score_lines());
    }

    /// Rebuild the world without notifying anyone.  Used for the first
    /// start and by [`restart`][Self::restart].
    pub(crate) fn reset_world(&mut self) {
        self.directory.reset(self.clock.elapsed_secs);
        self.drones = DroneStoreBuilder::new(self.config.drones_per_faction)
            .move_speed(self.config.move_speed)
            .show_path(self.config.show_path)
            .spawn_radius(self.config.spawn_radius)
            .spawn_height(self.config.spawn_height)
            .build(&self.directory.factions, &mut self.drone_rng);

        info!(
            drones   = self.drones.count,
            factions = self.directory.factions.len(),
            tick     = self.clock.current_tick.0,
            "simulation restarted"
        );
    }

    // ── Settings ──────────────────────────────────────────────────────────

    /// Change the per-faction population.  Takes effect through an
    /// immediate restart.
    pub fn set_drones_per_faction<O: SimObserver>(&mut self, n: usize, observer: &mut O) {
        self.config.drones_per_faction = n;
        self.restart(observer);
    }

    /// Set the travel speed of every live drone, and of drones spawned by
    /// later restarts.
    pub fn set_move_speed(&mut self, speed: f32) {
        self.config.move_speed = speed;
        self.drones.set_move_speed_all(speed);
    }

    /// Toggle the path overlay on every live drone.  Existing paths update
    /// on each drone's next travel step.
    pub fn set_show_path(&mut self, show: bool) {
        self.config.show_path = show;
        self.drones.set_show_path_all(show);
    }

    /// Apply a spawn-rate edit.  Unparseable or non-positive text falls back
    /// to one resource per second; the timer is re-armed from now.
    pub fn set_spawn_rate_text(&mut self, text: &str) {
        let now = self.clock.elapsed_secs;
        self.directory.spawn_timer.set_rate_text(text, now);
        self.config.spawn_rate = self.directory.spawn_timer.rate();
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Run until `config.total_ticks` ticks have been processed in total,
    /// using `config.frame_dt_secs` per tick.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        let end = Tick(self.config.total_ticks);
        let dt = self.config.frame_dt_secs;
        while self.clock.current_tick < end {
            self.step(dt, observer);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks at `config.frame_dt_secs` (ignores
    /// `total_ticks`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        let dt = self.config.frame_dt_secs;
        for _ in 0..n {
            self.step(dt, observer);
        }
    }

    /// Process one tick lasting `dt` seconds.
    pub fn step<O: SimObserver>(&mut self, dt: f32, observer: &mut O) -> TickSummary {
        let tick = self.clock.current_tick;
        let now = self.clock.elapsed_secs;
        observer.on_tick_start(tick);

        // ── Phase 1: drones, one at a time ────────────────────────────────
        let mut deliveries = 0;
        for i in 0..self.drones.count {
            let drone = DroneId(i as u32);
            let intents = {
                let ctx = SimContext::new(tick, dt, now, &self.drones, &self.directory);
                self.behavior.step(drone, &ctx)
            };
            deliveries += self.apply_intents(drone, intents, tick, observer);
        }

        // ── Phase 2: resource spawning ────────────────────────────────────
        let spawned = usize::from(self.directory.tick_spawn(now, &mut self.resource_rng).is_some());

        // ── Phase 3: effects ──────────────────────────────────────────────
        for effect in self.effects.advance(dt) {
            observer.on_effect_finished(tick, &effect);
        }

        // ── Phase 4: report ───────────────────────────────────────────────
        self.clock.advance(dt);
        let summary = self.summarize(tick, spawned, deliveries);
        observer.on_tick_end(&summary);

        let interval = self.config.output_interval_ticks;
        if interval > 0 && tick.0.is_multiple_of(interval) {
            observer.on_snapshot(tick, &self.drones, &self.directory);
        }

        summary
    }

    // ── Apply phase ───────────────────────────────────────────────────────

    /// Apply one drone's intents in order.  Returns the number of successful
    /// deliveries.
    fn apply_intents<O: SimObserver>(
        &mut self,
        drone:    DroneId,
        intents:  Vec<Intent>,
        tick:     Tick,
        observer: &mut O,
    ) -> usize {
        let i = drone.index();
        let mut deliveries = 0;

        for intent in intents {
            match intent {
                Intent::Claim(resource) => {
                    self.drones.target[i] = Some(resource);
                }

                Intent::Release => {
                    self.drones.target[i] = None;
                    self.drones.has_resource[i] = false;
                }

                Intent::Steer { position, orientation } => {
                    self.drones.position[i] = position;
                    self.drones.orientation[i] = orientation;
                }

                Intent::Transition(state) => {
                    let from = self.drones.state[i];
                    if from != state {
                        trace!(%drone, %from, to = %state, "state transition");
                    }
                    self.drones.state[i] = state;
                }

                Intent::SetTimer(secs) => {
                    self.drones.collection_timer[i] = secs;
                }

                // ── PickUp: resource goes inert, drone starts carrying ─────
                Intent::PickUp(resource) => {
                    let Some(position) = self.directory.resource_position(resource) else {
                        continue;
                    };
                    self.directory.deactivate(resource);
                    self.drones.has_resource[i] = true;
                    let id = self.effects.spawn(EffectKind::Collection, position);
                    if let Some(effect) = self.effects.get(id) {
                        observer.on_effect_spawned(tick, effect);
                    }
                }

                // ── Deliver: score once; a stale resource is a no-op ───────
                Intent::Deliver(resource) => {
                    let faction = self.drones.faction[i];
                    if let Some(delivery) = self.directory.resource_collected(resource, faction) {
                        deliveries += 1;
                        let id = self.effects.spawn(EffectKind::Delivery, delivery.base);
                        if let Some(effect) = self.effects.get(id) {
                            observer.on_effect_spawned(tick, effect);
                        }
                        observer.on_scores(tick, &self.directory.score_lines());
                    }
                }

                Intent::Path(path) => {
                    self.drones.path[i] = path;
                }
            }
        }
        deliveries
    }

    fn summarize(&self, tick: Tick, spawned: usize, deliveries: usize) -> TickSummary {
        let count = |s| self.drones.count_in_state(s);
        TickSummary {
            tick,
            elapsed_secs:   self.clock.elapsed_secs,
            searching:      count(DroneState::Searching),
            moving:         count(DroneState::MovingToResource),
            collecting:     count(DroneState::Collecting),
            returning:      count(DroneState::ReturningToBase),
            delivering:     count(DroneState::Delivering),
            carrying:       self.drones.carrying(),
            resources:      self.directory.resources.len(),
            available:      self.directory.resources.available_count(),
            spawned,
            deliveries,
            active_effects: self.effects.len(),
        }
    }
}

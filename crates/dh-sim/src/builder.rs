//! Fluent builder for constructing a [`Sim`].

use dh_agent::DroneStore;
use dh_behavior::BehaviorModel;
use dh_core::{Faction, SimClock, SimConfig, SimRng};
use dh_directory::Directory;
use dh_effects::EffectScheduler;

use crate::{Sim, SimResult};

/// Offset mixed into the seed of the resource-position RNG.
const RESOURCE_RNG_OFFSET: u64 = 1;

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — frame delta, population, speeds, radii, spawn rate, …
/// - `Vec<Faction>` — at least one; drones are spawned around each base
/// - `B: BehaviorModel` — the behavior implementation
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default            |
/// |----------------|--------------------|
/// | `.seed(s)`     | `config.seed`      |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, factions, HarvestBehavior::default())
///     .seed(7)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<B: BehaviorModel> {
    config:   SimConfig,
    factions: Vec<Faction>,
    behavior: B,
}

impl<B: BehaviorModel> SimBuilder<B> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, factions: Vec<Faction>, behavior: B) -> Self {
        Self { config, factions, behavior }
    }

    /// Override `config.seed`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Validate inputs, spawn the first population, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<B>> {
        let directory = Directory::new(self.factions, &self.config)?;

        let mut drone_rng = SimRng::new(self.config.seed);
        let resource_rng = drone_rng.child(RESOURCE_RNG_OFFSET);

        let mut sim = Sim {
            config:    self.config,
            clock:     SimClock::new(),
            drones:    DroneStore::new(),
            directory,
            effects:   EffectScheduler::new(),
            behavior:  self.behavior,
            drone_rng,
            resource_rng,
        };
        sim.reset_world();
        Ok(sim)
    }
}

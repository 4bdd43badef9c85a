//! The `Directory` facade.

use tracing::debug;

use dh_agent::DroneStore;
use dh_core::{DroneId, Faction, FactionId, ResourceId, SimConfig, SimRng, Vec3};

use crate::queries::{avoidance_force, nearest_unclaimed};
use crate::{
    DirectoryError, DirectoryResult, ResourceRegistry, ScoreLine, Scoreboard, SpawnTimer,
    SpawnZone,
};

/// Outcome of a successful delivery, used to drive the score display and
/// the delivery pop at the base.
#[derive(Clone, Debug, PartialEq)]
pub struct Delivery {
    pub resource: ResourceId,
    pub faction:  FactionId,
    /// The faction's base, where the delivery effect plays.
    pub base:     Vec3,
    /// The faction's score after this delivery.
    pub score:    u32,
}

/// Shared world state that drones query but never own.
pub struct Directory {
    /// Faction identities, indexed by `FactionId`.
    pub factions:         Vec<Faction>,
    pub scores:           Scoreboard,
    pub resources:        ResourceRegistry,
    pub spawn_timer:      SpawnTimer,
    pub spawn_zone:       SpawnZone,
    pub avoidance_radius: f32,
}

impl Directory {
    /// Build a directory for `factions` using the radii and spawn rate in
    /// `config`.  The spawn timer is armed relative to time 0.
    pub fn new(factions: Vec<Faction>, config: &SimConfig) -> DirectoryResult<Self> {
        if factions.is_empty() {
            return Err(DirectoryError::NoFactions);
        }
        if factions.len() >= FactionId::INVALID.index() {
            return Err(DirectoryError::TooManyFactions(factions.len()));
        }
        config.validate()?;

        let scores = Scoreboard::new(factions.len());
        Ok(Self {
            factions,
            scores,
            resources:        ResourceRegistry::new(),
            spawn_timer:      SpawnTimer::new(config.effective_spawn_rate(), 0.0),
            spawn_zone:       SpawnZone {
                center: Vec3::ZERO,
                radius: config.spawn_radius * 2.0,
                height: config.spawn_height,
            },
            avoidance_radius: config.avoidance_radius,
        })
    }

    // ── Faction lookup ────────────────────────────────────────────────────

    #[inline]
    pub fn faction(&self, id: FactionId) -> Option<&Faction> {
        self.factions.get(id.index())
    }

    #[inline]
    pub fn base_of(&self, id: FactionId) -> Option<Vec3> {
        self.faction(id).map(|f| f.base)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Nearest resource nobody has claimed, as seen from `position`.
    ///
    /// `faction` does not narrow the search: a claim by any faction's drone
    /// takes a resource out of consideration for everyone.
    pub fn find_nearest_resource(
        &self,
        drones:   &DroneStore,
        position: Vec3,
        _faction: FactionId,
    ) -> Option<ResourceId> {
        nearest_unclaimed(&self.resources, drones, position)
    }

    /// Averaged repulsion from drones within the avoidance radius.
    pub fn avoidance_force(&self, drones: &DroneStore, position: Vec3, excluding: DroneId) -> Vec3 {
        avoidance_force(drones, position, excluding, self.avoidance_radius)
    }

    /// Position of a resource that is still present (active or carried).
    #[inline]
    pub fn resource_position(&self, id: ResourceId) -> Option<Vec3> {
        self.resources.get(id).map(|r| r.position)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Mark a resource as picked up.  Returns `false` if it no longer exists.
    pub fn deactivate(&mut self, id: ResourceId) -> bool {
        self.resources.deactivate(id)
    }

    /// A drone of `faction` has brought `resource` home.
    ///
    /// If the resource is still present it is destroyed and the faction
    /// scores a point.  Otherwise this is a silent no-op, which makes a
    /// repeated notification harmless.
    pub fn resource_collected(&mut self, resource: ResourceId, faction: FactionId) -> Option<Delivery> {
        let base = self.base_of(faction)?;
        self.resources.remove(resource)?;
        let score = self.scores.increment(faction);
        debug!(%resource, %faction, score, "resource delivered");
        Some(Delivery { resource, faction, base, score })
    }

    /// Spawn a resource at an explicit position.
    pub fn spawn_resource_at(&mut self, position: Vec3) -> ResourceId {
        let id = self.resources.spawn(position);
        debug!(%id, x = position.x, z = position.z, "resource spawned");
        id
    }

    /// Advance the spawn timer to `now`, spawning one resource if it is due.
    pub fn tick_spawn(&mut self, now: f64, rng: &mut SimRng) -> Option<ResourceId> {
        if !self.spawn_timer.poll(now) {
            return None;
        }
        let position = self.spawn_zone.sample(rng);
        Some(self.spawn_resource_at(position))
    }

    /// Destroy all resources, zero every score and re-arm the spawn timer.
    pub fn reset(&mut self, now: f64) {
        self.resources.clear();
        self.scores.reset();
        self.spawn_timer.rearm(now);
    }

    /// Current score display lines.
    pub fn score_lines(&self) -> Vec<ScoreLine> {
        self.scores.lines(&self.factions)
    }
}

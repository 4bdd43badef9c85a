//! Core drone storage: `DroneStore` (SoA data).
//!
//! Every `Vec` field has exactly `count` elements and the `DroneId` value is
//! the index into all of them:
//!
//! ```ignore
//! let pos = store.position[drone.index()];
//! ```
//!
//! Ids are dense and only valid until the next restart, which rebuilds the
//! whole store.  Nothing outside the simulation should hold on to them
//! across a restart.

use dh_core::{DroneId, FactionId, Quat, ResourceId, Vec3};

use crate::{DroneState, PathLine};

/// Initial values for one drone appended with [`DroneStore::push_drone`].
#[derive(Copy, Clone, Debug)]
pub struct DroneSpawn {
    pub faction:    FactionId,
    pub position:   Vec3,
    pub move_speed: f32,
    pub show_path:  bool,
}

/// Structure-of-Arrays storage for all drone state.
#[derive(Clone, Debug, Default)]
pub struct DroneStore {
    /// Number of drones.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Transform ─────────────────────────────────────────────────────────
    pub position:    Vec<Vec3>,
    /// Visual heading.  Smoothed, so it lags the direction of travel.
    pub orientation: Vec<Quat>,

    // ── Membership & claim ────────────────────────────────────────────────
    pub faction: Vec<FactionId>,
    /// The resource this drone has claimed.  Non-owning; resolve through
    /// the directory's registry before use.
    pub target:  Vec<Option<ResourceId>>,

    // ── Behavior ──────────────────────────────────────────────────────────
    pub state:            Vec<DroneState>,
    pub has_resource:     Vec<bool>,
    /// Seconds of dwell left while `Collecting`.
    pub collection_timer: Vec<f32>,

    // ── Per-drone settings ────────────────────────────────────────────────
    pub move_speed: Vec<f32>,
    pub show_path:  Vec<bool>,
    /// Current path overlay, `None` when hidden or idle.
    pub path:       Vec<Option<PathLine>>,
}

impl DroneStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            count:            0,
            position:         Vec::with_capacity(n),
            orientation:      Vec::with_capacity(n),
            faction:          Vec::with_capacity(n),
            target:           Vec::with_capacity(n),
            state:            Vec::with_capacity(n),
            has_resource:     Vec::with_capacity(n),
            collection_timer: Vec::with_capacity(n),
            move_speed:       Vec::with_capacity(n),
            show_path:        Vec::with_capacity(n),
            path:             Vec::with_capacity(n),
        }
    }

    /// `true` if there are no drones.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `DroneId`s in ascending index order.
    pub fn drone_ids(&self) -> impl Iterator<Item = DroneId> + '_ {
        (0..self.count as u32).map(DroneId)
    }

    /// `true` if `id` refers to a live drone.
    #[inline]
    pub fn contains(&self, id: DroneId) -> bool {
        id.index() < self.count
    }

    /// Append a drone in `Searching` state, facing `+Z`.
    pub fn push_drone(&mut self, spawn: DroneSpawn) -> DroneId {
        let id = DroneId(self.count as u32);
        self.position.push(spawn.position);
        self.orientation.push(Quat::IDENTITY);
        self.faction.push(spawn.faction);
        self.target.push(None);
        self.state.push(DroneState::Searching);
        self.has_resource.push(false);
        self.collection_timer.push(0.0);
        self.move_speed.push(spawn.move_speed);
        self.show_path.push(spawn.show_path);
        self.path.push(None);
        self.count += 1;
        id
    }

    /// Destroy every drone.
    pub fn clear(&mut self) {
        self.position.clear();
        self.orientation.clear();
        self.faction.clear();
        self.target.clear();
        self.state.clear();
        self.has_resource.clear();
        self.collection_timer.clear();
        self.move_speed.clear();
        self.show_path.clear();
        self.path.clear();
        self.count = 0;
    }

    // ── Claims ────────────────────────────────────────────────────────────

    /// `true` if any drone currently targets `resource`.  O(drones).
    #[inline]
    pub fn is_claimed(&self, resource: ResourceId) -> bool {
        self.target.iter().any(|t| *t == Some(resource))
    }

    // ── Bulk setters ──────────────────────────────────────────────────────

    pub fn set_move_speed_all(&mut self, speed: f32) {
        self.move_speed.fill(speed);
    }

    pub fn set_show_path_all(&mut self, show: bool) {
        self.show_path.fill(show);
    }

    // ── Aggregates ────────────────────────────────────────────────────────

    /// Number of drones currently in `state`.
    pub fn count_in_state(&self, state: DroneState) -> usize {
        self.state.iter().filter(|s| **s == state).count()
    }

    /// Number of drones carrying a resource.
    pub fn carrying(&self) -> usize {
        self.has_resource.iter().filter(|h| **h).count()
    }

    /// Drones belonging to `faction`.
    pub fn members(&self, faction: FactionId) -> impl Iterator<Item = DroneId> + '_ {
        self.faction
            .iter()
            .enumerate()
            .filter(move |(_, f)| **f == faction)
            .map(|(i, _)| DroneId(i as u32))
    }
}

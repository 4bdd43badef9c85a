//! Fluent builder that populates a `DroneStore` for a set of factions.
//!
//! # Usage
//!
//! ```rust
//! use dh_agent::DroneStoreBuilder;
//! use dh_core::{Color, Faction, SimRng, Vec3};
//!
//! let factions = vec![
//!     Faction::new("Red", Color::RED, Vec3::new(-10.0, 0.0, 0.0)),
//!     Faction::new("Blue", Color::BLUE, Vec3::new(10.0, 0.0, 0.0)),
//! ];
//! let mut rng = SimRng::new(42);
//!
//! let store = DroneStoreBuilder::new(4)
//!     .move_speed(5.0)
//!     .spawn_radius(5.0)
//!     .build(&factions, &mut rng);
//!
//! assert_eq!(store.count, 8);
//! ```

use dh_core::{Faction, FactionId, SimRng};

use crate::{DroneSpawn, DroneStore};

/// Fluent builder for [`DroneStore`].
///
/// Drones are laid out faction by faction: all of faction 0's drones come
/// first, then faction 1's, and so on.
pub struct DroneStoreBuilder {
    per_faction:  usize,
    move_speed:   f32,
    show_path:    bool,
    spawn_radius: f32,
    spawn_height: f32,
}

impl DroneStoreBuilder {
    /// Create a builder for `per_faction` drones in every faction.
    pub fn new(per_faction: usize) -> Self {
        Self {
            per_faction,
            move_speed:   5.0,
            show_path:    false,
            spawn_radius: 5.0,
            spawn_height: 1.0,
        }
    }

    pub fn move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    pub fn show_path(mut self, show: bool) -> Self {
        self.show_path = show;
        self
    }

    /// Drones appear within this distance of their faction's base.
    pub fn spawn_radius(mut self, radius: f32) -> Self {
        self.spawn_radius = radius;
        self
    }

    pub fn spawn_height(mut self, height: f32) -> Self {
        self.spawn_height = height;
        self
    }

    /// Spawn the population, drawing positions from `rng`.
    pub fn build(self, factions: &[Faction], rng: &mut SimRng) -> DroneStore {
        let mut store = DroneStore::with_capacity(factions.len() * self.per_faction);
        for (i, faction) in factions.iter().enumerate() {
            for _ in 0..self.per_faction {
                let position = rng.point_near(faction.base, self.spawn_radius, self.spawn_height);
                store.push_drone(DroneSpawn {
                    faction:    FactionId(i as u16),
                    position,
                    move_speed: self.move_speed,
                    show_path:  self.show_path,
                });
            }
        }
        store
    }
}

//! `dh-core` — foundational types for the drone harvest simulation.
//!
//! This crate is a dependency of every other `dh-*` crate.  It has no `dh-*`
//! dependencies and few external ones (`glam`, `rand`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `DroneId`, `ResourceId`, `FactionId`, `EffectId`      |
//! | [`space`]       | `Vec3`/`Quat` re-exports, steering helpers            |
//! | [`faction`]     | `Faction` value type, `Color`                         |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`rng`]         | `SimRng` (seeded, deterministic)                      |
//! | [`config`]      | `SimConfig`, `parse_spawn_rate`                       |
//! | [`error`]       | `DhError`, `DhResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod faction;
pub mod ids;
pub mod rng;
pub mod space;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DEFAULT_SPAWN_RATE, SimConfig, parse_spawn_rate};
pub use error::{DhError, DhResult};
pub use faction::{Color, Faction};
pub use ids::{DroneId, EffectId, FactionId, ResourceId};
pub use rng::SimRng;
pub use space::{Quat, Vec3};
pub use time::{SimClock, Tick};

//! `dh-directory` — the simulation directory.
//!
//! Owns everything drones share: the registry of spawned resources, the
//! faction table with its scoreboard, and the spawn timer.  Drones are
//! stored separately (`dh_agent::DroneStore`) and passed by reference into
//! the queries that need them, so a drone can be mutated while the
//! directory is borrowed immutably.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`registry`]    | `Resource`, `ResourceRegistry` (spawn-ordered arena)      |
//! | [`queries`]     | `nearest_unclaimed`, `avoidance_force`                    |
//! | [`scoreboard`]  | `Scoreboard`, `ScoreLine`                                 |
//! | [`spawner`]     | `SpawnTimer`, `SpawnZone`                                 |
//! | [`directory`]   | `Directory` facade, `Delivery`                            |
//! | [`error`]       | `DirectoryError`, `DirectoryResult<T>`                    |
//!
//! # Scaling
//!
//! Both queries are plain linear scans recomputed on every call; the
//! nearest-resource search is O(resources × drones).  That is fine for a
//! few hundred objects and is the first thing to revisit beyond that.

pub mod directory;
pub mod error;
pub mod queries;
pub mod registry;
pub mod scoreboard;
pub mod spawner;


pub use directory::{Delivery, Directory};
pub use error::{DirectoryError, DirectoryResult};
pub use queries::{avoidance_force, nearest_unclaimed};
pub use registry::{Resource, ResourceRegistry};
pub use scoreboard::{ScoreLine, Scoreboard};
pub use spawner::{SpawnTimer, SpawnZone};

//! `dh-agent` — Structure-of-Arrays drone storage.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`state`]     | `DroneState` (the five behavior states), `PathLine`       |
//! | [`store`]     | `DroneStore` (SoA arrays indexed by `DroneId`)            |
//! | [`builder`]   | `DroneStoreBuilder` (spawns a full population per faction) |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.   |

pub mod builder;
pub mod state;
pub mod store;


pub use builder::DroneStoreBuilder;
pub use state::{DroneState, PathLine};
pub use store::{DroneSpawn, DroneStore};

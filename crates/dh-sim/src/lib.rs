//! `dh-sim` — tick loop orchestrator for the drone harvest simulation.
//!
//! # Tick loop
//!
//! ```text
//! for each tick:
//!   ① Drones   — for each DroneId in ascending order:
//!                  build SimContext, call BehaviorModel::step,
//!                  apply the returned intents immediately
//!   ② Spawn    — the directory's spawn timer may add one resource
//!   ③ Effects  — advance pop effects; report the finished ones
//!   ④ Report   — on_tick_end(TickSummary), on_snapshot every
//!                config.output_interval_ticks
//! ```
//!
//! Applying each drone's intents before the next drone runs is what keeps
//! claims exclusive: a resource claimed in ① is invisible to every later
//! search in the same tick.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dh_behavior::HarvestBehavior;
//! use dh_core::{Color, Faction, SimConfig, Vec3};
//! use dh_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::default();
//! let factions = vec![
//!     Faction::new("Red", Color::RED, Vec3::new(-20.0, 0.0, 0.0)),
//!     Faction::new("Blue", Color::BLUE, Vec3::new(20.0, 0.0, 0.0)),
//! ];
//! let behavior = HarvestBehavior::from_config(&config);
//! let mut sim = SimBuilder::new(config, factions, behavior).build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use sim::Sim;

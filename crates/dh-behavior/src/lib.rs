//! `dh-behavior` — drone behavior model trait and intent types.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`intent`]  | `Intent` enum (claim, steer, transition, pick up, deliver, …)   |
//! | [`context`] | `SimContext<'a>` — read-only view handed to each drone          |
//! | [`model`]   | `BehaviorModel` trait                                           |
//! | [`harvest`] | `HarvestBehavior` — the search/collect/deliver state machine    |
//! | [`noop`]    | `NoopBehavior` — placeholder that never produces intents        |
//!
//! # Design notes
//!
//! A behavior never mutates anything.  For each drone the simulation loop
//! builds a fresh [`SimContext`], asks the model for that drone's intents,
//! and applies them before moving on to the next drone.  Because the apply
//! step runs between drones, a resource claimed by drone 3 is already
//! claimed when drone 4 searches, and no two drones can end up targeting
//! the same resource.

pub mod context;
pub mod harvest;
pub mod intent;
pub mod model;
pub mod noop;

#[cfg(test)]
mod tests;

pub use context::SimContext;
pub use harvest::HarvestBehavior;
pub use intent::Intent;
pub use model::BehaviorModel;
pub use noop::NoopBehavior;

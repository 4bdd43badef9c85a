//! The `BehaviorModel` trait — the main extension point for drone logic.

use dh_core::DroneId;

use crate::{Intent, SimContext};

/// Pluggable drone behavior.
///
/// Called once per drone per tick with a read-only [`SimContext`].  All
/// per-drone state lives in `DroneStore` (read through `ctx.drones`), not
/// in the model, so a single model instance drives the whole population.
///
/// # Example
///
/// ```rust,ignore
/// struct Hover;
///
/// impl BehaviorModel for Hover {
///     fn step(&self, drone: DroneId, ctx: &SimContext<'_>) -> Vec<Intent> {
///         let i = drone.index();
///         vec![Intent::Steer {
///             position:    ctx.drones.position[i],
///             orientation: ctx.drones.orientation[i],
///         }]
///     }
/// }
/// ```
pub trait BehaviorModel: Send + Sync + 'static {
    /// Decide what `drone` does this tick.
    ///
    /// An empty `Vec` leaves the drone untouched.
    fn step(&self, drone: DroneId, ctx: &SimContext<'_>) -> Vec<Intent>;
}

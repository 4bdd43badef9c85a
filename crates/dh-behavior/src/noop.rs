//! A no-op behavior model — drones never act.

use dh_core::DroneId;

use crate::{BehaviorModel, Intent, SimContext};

/// A [`BehaviorModel`] that always returns an empty intent list.
///
/// Useful in tests or for parked populations that only occupy space (they
/// still repel other drones).
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn step(&self, _drone: DroneId, _ctx: &SimContext<'_>) -> Vec<Intent> {
        vec![]
    }
}

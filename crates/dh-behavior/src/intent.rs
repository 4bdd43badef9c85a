//! Drone intents — the changes a drone asks for during its step.

use dh_agent::{DroneState, PathLine};
use dh_core::{Quat, ResourceId, Vec3};

/// A change that a drone wants applied to itself or the directory.
///
/// Intents are produced by [`BehaviorModel::step`][crate::BehaviorModel::step]
/// and applied in order by dh-sim before the next drone steps.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Take `resource` as the current target.
    Claim(ResourceId),

    /// Drop the current target and any carried resource.
    Release,

    /// New transform after this frame's movement.
    Steer {
        position:    Vec3,
        orientation: Quat,
    },

    /// Switch to another behavior state.
    Transition(DroneState),

    /// Overwrite the collection countdown.
    SetTimer(f32),

    /// Finish collecting: deactivate `resource`, start carrying it and play
    /// the collection effect.
    PickUp(ResourceId),

    /// Hand `resource` to the directory at the faction's base.
    Deliver(ResourceId),

    /// Replace the path overlay (`None` clears it).
    Path(Option<PathLine>),
}

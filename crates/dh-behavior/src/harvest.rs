//! `HarvestBehavior` — the search → collect → deliver loop.
//!
//! | State              | Each tick                                                | Exit when                          |
//! |--------------------|----------------------------------------------------------|------------------------------------|
//! | `Searching`        | look for the nearest unclaimed resource                  | one is found → `MovingToResource`  |
//! | `MovingToResource` | steer toward the target                                  | within 0.5 → `Collecting`          |
//! | `Collecting`       | count the timer down                                     | timer ≤ 0 → `ReturningToBase`      |
//! | `ReturningToBase`  | steer toward the faction base                            | within 1.0 → `Delivering`          |
//! | `Delivering`       | hand the resource to the directory                       | immediately → `Searching`          |

use dh_agent::{DroneState, PathLine};
use dh_core::space::{direction_to, turn_towards};
use dh_core::{DroneId, Quat, SimConfig, Vec3};

use crate::{BehaviorModel, Intent, SimContext};

/// Weight of the avoidance force relative to the unit goal direction.
pub const AVOIDANCE_WEIGHT: f32 = 5.0;

/// Slerp factor per second used when turning toward the travel direction.
pub const TURN_RATE: f32 = 5.0;

/// Distance at which a drone counts as having reached its resource.
pub const RESOURCE_ARRIVAL_DISTANCE: f32 = 0.5;

/// Distance at which a drone counts as having reached its base.
pub const BASE_ARRIVAL_DISTANCE: f32 = 1.0;

/// The harvesting state machine shared by every drone.
#[derive(Clone, Debug)]
pub struct HarvestBehavior {
    /// Seconds a drone dwells at a resource before picking it up.
    pub collection_time: f32,
}

impl HarvestBehavior {
    pub fn new(collection_time: f32) -> Self {
        Self { collection_time }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.collection_time)
    }
}

impl Default for HarvestBehavior {
    fn default() -> Self {
        Self::new(2.0)
    }
}

/// One frame of travel toward `goal`.
struct Step {
    position:    Vec3,
    orientation: Quat,
    remaining:   f32,
}

/// Move `drone` one frame toward `goal`, blending in the avoidance force.
///
/// The orientation only turns when there is somewhere to go; a drone whose
/// goal and avoidance cancel out keeps its heading and stays put.
fn travel(drone: DroneId, goal: Vec3, ctx: &SimContext<'_>) -> Step {
    let i = drone.index();
    let position = ctx.drones.position[i];

    let avoidance = ctx.directory.avoidance_force(ctx.drones, position, drone);
    let desired = (direction_to(position, goal) + avoidance * AVOIDANCE_WEIGHT).normalize_or_zero();

    let mut orientation = ctx.drones.orientation[i];
    if desired != Vec3::ZERO {
        orientation = turn_towards(orientation, desired, ctx.dt * TURN_RATE);
    }

    let position = position + desired * ctx.drones.move_speed[i] * ctx.dt;
    Step { position, orientation, remaining: position.distance(goal) }
}

impl HarvestBehavior {
    fn path(&self, drone: DroneId, step: &Step, goal: Vec3, ctx: &SimContext<'_>) -> Intent {
        if ctx.drones.show_path[drone.index()] {
            Intent::Path(Some(PathLine { from: step.position, to: goal }))
        } else {
            Intent::Path(None)
        }
    }

    fn search(&self, drone: DroneId, ctx: &SimContext<'_>) -> Vec<Intent> {
        let i = drone.index();
        let mut out = Vec::new();
        if ctx.drones.path[i].is_some() {
            out.push(Intent::Path(None));
        }
        let found = ctx.directory.find_nearest_resource(
            ctx.drones,
            ctx.drones.position[i],
            ctx.drones.faction[i],
        );
        if let Some(resource) = found {
            out.push(Intent::Claim(resource));
            out.push(Intent::Transition(DroneState::MovingToResource));
        }
        out
    }

    fn move_to_resource(&self, drone: DroneId, ctx: &SimContext<'_>) -> Vec<Intent> {
        let target = ctx.drones.target[drone.index()]
            .and_then(|id| ctx.directory.resource_position(id));
        let Some(goal) = target else {
            // Target vanished or was never set: start over.
            return vec![
                Intent::Release,
                Intent::Path(None),
                Intent::Transition(DroneState::Searching),
            ];
        };

        let step = travel(drone, goal, ctx);
        let mut out = vec![
            Intent::Steer { position: step.position, orientation: step.orientation },
            self.path(drone, &step, goal, ctx),
        ];
        if step.remaining < RESOURCE_ARRIVAL_DISTANCE {
            out.push(Intent::SetTimer(self.collection_time));
            out.push(Intent::Transition(DroneState::Collecting));
        }
        out
    }

    fn collect(&self, drone: DroneId, ctx: &SimContext<'_>) -> Vec<Intent> {
        let i = drone.index();
        let timer = ctx.drones.collection_timer[i] - ctx.dt;
        if timer > 0.0 {
            return vec![Intent::SetTimer(timer)];
        }

        let present = ctx.drones.target[i].filter(|&id| ctx.directory.resources.contains(id));
        match present {
            Some(resource) => vec![
                Intent::SetTimer(timer),
                Intent::PickUp(resource),
                Intent::Transition(DroneState::ReturningToBase),
            ],
            // Nothing left to pick up: fly home empty-handed.
            None => vec![
                Intent::SetTimer(timer),
                Intent::Release,
                Intent::Transition(DroneState::ReturningToBase),
            ],
        }
    }

    fn return_to_base(&self, drone: DroneId, ctx: &SimContext<'_>) -> Vec<Intent> {
        let Some(base) = ctx.directory.base_of(ctx.drones.faction[drone.index()]) else {
            return vec![
                Intent::Release,
                Intent::Path(None),
                Intent::Transition(DroneState::Searching),
            ];
        };

        let step = travel(drone, base, ctx);
        let mut out = vec![
            Intent::Steer { position: step.position, orientation: step.orientation },
            self.path(drone, &step, base, ctx),
        ];
        if step.remaining < BASE_ARRIVAL_DISTANCE {
            out.push(Intent::Transition(DroneState::Delivering));
        }
        out
    }

    fn deliver(&self, drone: DroneId, ctx: &SimContext<'_>) -> Vec<Intent> {
        let i = drone.index();
        let mut out = Vec::with_capacity(3);
        if ctx.drones.has_resource[i] {
            if let Some(resource) = ctx.drones.target[i] {
                out.push(Intent::Deliver(resource));
            }
        }
        out.push(Intent::Release);
        out.push(Intent::Transition(DroneState::Searching));
        out
    }
}

impl BehaviorModel for HarvestBehavior {
    fn step(&self, drone: DroneId, ctx: &SimContext<'_>) -> Vec<Intent> {
        match ctx.drones.state[drone.index()] {
            DroneState::Searching        => self.search(drone, ctx),
            DroneState::MovingToResource => self.move_to_resource(drone, ctx),
            DroneState::Collecting       => self.collect(drone, ctx),
            DroneState::ReturningToBase  => self.return_to_base(drone, ctx),
            DroneState::Delivering       => self.deliver(drone, ctx),
        }
    }
}

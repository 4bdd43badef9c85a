//! Spatial queries over the shared world state.

use dh_agent::DroneStore;
use dh_core::{DroneId, ResourceId, Vec3};

use crate::ResourceRegistry;

/// The closest active resource to `position` that no drone has claimed.
///
/// Scans in spawn order with a strict less-than, so among equally distant
/// candidates the earliest-spawned wins.  Every candidate costs a scan of
/// all drone claims, giving O(resources × drones) per call.
pub fn nearest_unclaimed(
    resources: &ResourceRegistry,
    drones:    &DroneStore,
    position:  Vec3,
) -> Option<ResourceId> {
    let mut nearest = None;
    let mut min_distance = f32::MAX;

    for resource in resources.available() {
        if drones.is_claimed(resource.id) {
            continue;
        }
        let dist = position.distance(resource.position);
        if dist < min_distance {
            min_distance = dist;
            nearest = Some(resource.id);
        }
    }

    nearest
}

/// Local repulsion from every drone other than `excluding` that is closer
/// than `radius`.
///
/// Each neighbour contributes `unit(position − other) × (radius − d) / radius`
/// (strength 1 on contact, 0 at the boundary) and the contributions are
/// averaged.  A neighbour sitting exactly on `position` has no defined
/// "away", so it pushes along `+X` at full strength.
pub fn avoidance_force(
    drones:    &DroneStore,
    position:  Vec3,
    excluding: DroneId,
    radius:    f32,
) -> Vec3 {
    if radius <= 0.0 {
        return Vec3::ZERO;
    }

    let mut offset = Vec3::ZERO;
    let mut count = 0u32;

    for (i, &other) in drones.position.iter().enumerate() {
        if i == excluding.index() {
            continue;
        }
        let dist = position.distance(other);
        if dist < radius {
            let strength = (radius - dist) / radius;
            let away = match (position - other).try_normalize() {
                Some(dir) => dir,
                None => Vec3::X,
            };
            offset += away * strength;
            count += 1;
        }
    }

    if count > 0 {
        offset /= count as f32;
    }
    offset
}

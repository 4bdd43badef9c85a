//! Unit tests for dh-behavior.

use dh_agent::{DroneSpawn, DroneState, DroneStore, PathLine};
use dh_core::{Color, DroneId, Faction, FactionId, Quat, SimConfig, Tick, Vec3};
use dh_directory::Directory;

use crate::{BehaviorModel, HarvestBehavior, Intent, NoopBehavior, SimContext};

// ── Helpers ───────────────────────────────────────────────────────────────────

const RED_BASE: Vec3 = Vec3::new(-10.0, 0.0, 0.0);

fn directory() -> Directory {
    let factions = vec![
        Faction::new("Red", Color::RED, RED_BASE),
        Faction::new("Blue", Color::BLUE, Vec3::new(10.0, 0.0, 0.0)),
    ];
    Directory::new(factions, &SimConfig::default()).expect("valid directory")
}

fn drone_at(store: &mut DroneStore, position: Vec3) -> DroneId {
    store.push_drone(DroneSpawn {
        faction: FactionId(0),
        position,
        move_speed: 5.0,
        show_path: false,
    })
}

fn step(drones: &DroneStore, dir: &Directory, drone: DroneId, dt: f32) -> Vec<Intent> {
    let ctx = SimContext::new(Tick(1), dt, 0.0, drones, dir);
    HarvestBehavior::new(2.0).step(drone, &ctx)
}

fn steer_of(intents: &[Intent]) -> Option<(Vec3, Quat)> {
    intents.iter().find_map(|i| match i {
        Intent::Steer { position, orientation } => Some((*position, *orientation)),
        _ => None,
    })
}

// ── Searching ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod searching {
    use super::*;

    #[test]
    fn claims_the_nearest_resource() {
        let mut dir = directory();
        dir.spawn_resource_at(Vec3::new(3.0, 0.0, 0.0));
        let near = dir.spawn_resource_at(Vec3::new(1.0, 0.0, 0.0));
        dir.spawn_resource_at(Vec3::new(5.0, 0.0, 0.0));

        let mut drones = DroneStore::new();
        let d = drone_at(&mut drones, Vec3::ZERO);

        assert_eq!(
            step(&drones, &dir, d, 0.1),
            vec![Intent::Claim(near), Intent::Transition(DroneState::MovingToResource)]
        );
    }

    #[test]
    fn nothing_available_keeps_searching() {
        let dir = directory();
        let mut drones = DroneStore::new();
        let d = drone_at(&mut drones, Vec3::ZERO);
        assert!(step(&drones, &dir, d, 0.1).is_empty());
    }

    #[test]
    fn skips_resources_claimed_by_other_drones() {
        let mut dir = directory();
        let near = dir.spawn_resource_at(Vec3::new(1.0, 0.0, 0.0));
        let far = dir.spawn_resource_at(Vec3::new(4.0, 0.0, 0.0));

        let mut drones = DroneStore::new();
        let a = drone_at(&mut drones, Vec3::new(0.0, 0.0, 50.0));
        let b = drone_at(&mut drones, Vec3::ZERO);
        drones.target[a.index()] = Some(near);
        drones.state[a.index()] = DroneState::MovingToResource;

        assert_eq!(step(&drones, &dir, b, 0.1)[0], Intent::Claim(far));
    }

    #[test]
    fn stale_path_is_cleared() {
        let dir = directory();
        let mut drones = DroneStore::new();
        let d = drone_at(&mut drones, Vec3::ZERO);
        drones.path[0] = Some(PathLine { from: Vec3::ZERO, to: Vec3::X });
        assert_eq!(step(&drones, &dir, d, 0.1), vec![Intent::Path(None)]);
    }
}

// ── Moving to resource ────────────────────────────────────────────────────────

#[cfg(test)]
mod moving {
    use super::*;

    fn moving_toward(dir: &mut Directory, goal: Vec3) -> (DroneStore, DroneId) {
        let id = dir.spawn_resource_at(goal);
        let mut drones = DroneStore::new();
        let d = drone_at(&mut drones, Vec3::ZERO);
        drones.target[0] = Some(id);
        drones.state[0] = DroneState::MovingToResource;
        (drones, d)
    }

    #[test]
    fn advances_speed_times_dt() {
        let mut dir = directory();
        let (drones, d) = moving_toward(&mut dir, Vec3::new(10.0, 0.0, 0.0));

        let intents = step(&drones, &dir, d, 0.1);
        let (position, _) = steer_of(&intents).expect("steer intent");
        assert!((position.x - 0.5).abs() < 1e-5);
        assert!(position.z.abs() < 1e-6);
        assert!(!intents.iter().any(|i| matches!(i, Intent::Transition(_))));
    }

    #[test]
    fn turns_toward_travel_direction() {
        let mut dir = directory();
        let (drones, d) = moving_toward(&mut dir, Vec3::new(10.0, 0.0, 0.0));

        let (_, orientation) = steer_of(&step(&drones, &dir, d, 0.1)).expect("steer intent");
        let facing = orientation * Vec3::Z;
        assert!(facing.x > 0.0, "should start turning toward +X, got {facing}");
        assert!(facing.x < 1.0 - 1e-3, "turn is smoothed, not instant");
    }

    #[test]
    fn arrives_within_half_a_unit() {
        let mut dir = directory();
        let (drones, d) = moving_toward(&mut dir, Vec3::new(0.55, 0.0, 0.0));

        let intents = step(&drones, &dir, d, 0.1);
        assert!(intents.contains(&Intent::SetTimer(2.0)));
        assert_eq!(intents.last(), Some(&Intent::Transition(DroneState::Collecting)));
    }

    #[test]
    fn standing_on_the_target_keeps_heading() {
        let mut dir = directory();
        let (drones, d) = moving_toward(&mut dir, Vec3::ZERO);

        let intents = step(&drones, &dir, d, 0.1);
        let (position, orientation) = steer_of(&intents).expect("steer intent");
        assert_eq!(position, Vec3::ZERO);
        assert_eq!(orientation, Quat::IDENTITY);
        assert_eq!(intents.last(), Some(&Intent::Transition(DroneState::Collecting)));
    }

    #[test]
    fn vanished_target_returns_to_searching() {
        let mut dir = directory();
        let (drones, d) = moving_toward(&mut dir, Vec3::new(10.0, 0.0, 0.0));
        dir.reset(0.0);

        assert_eq!(
            step(&drones, &dir, d, 0.1),
            vec![
                Intent::Release,
                Intent::Path(None),
                Intent::Transition(DroneState::Searching),
            ]
        );
    }

    #[test]
    fn path_follows_show_path_flag() {
        let mut dir = directory();
        let goal = Vec3::new(10.0, 0.0, 0.0);
        let (mut drones, d) = moving_toward(&mut dir, goal);

        assert!(step(&drones, &dir, d, 0.1).contains(&Intent::Path(None)));

        drones.show_path[0] = true;
        let intents = step(&drones, &dir, d, 0.1);
        let (position, _) = steer_of(&intents).expect("steer intent");
        assert!(intents.contains(&Intent::Path(Some(PathLine { from: position, to: goal }))));
    }

    #[test]
    fn neighbours_push_the_drone_aside() {
        let mut dir = directory();
        let (mut drones, d) = moving_toward(&mut dir, Vec3::new(10.0, 0.0, 0.0));
        drone_at(&mut drones, Vec3::new(0.0, 0.0, 1.0));

        let (position, _) = steer_of(&step(&drones, &dir, d, 0.1)).expect("steer intent");
        assert!(position.z < 0.0, "should veer away from the neighbour at +Z");
        assert!((position.length() - 0.5).abs() < 1e-4, "speed is unchanged");
    }
}

// ── Collecting ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod collecting {
    use super::*;

    fn collecting(dir: &mut Directory, timer: f32) -> (DroneStore, DroneId, dh_core::ResourceId) {
        let id = dir.spawn_resource_at(Vec3::ZERO);
        let mut drones = DroneStore::new();
        let d = drone_at(&mut drones, Vec3::ZERO);
        drones.target[0] = Some(id);
        drones.state[0] = DroneState::Collecting;
        drones.collection_timer[0] = timer;
        (drones, d, id)
    }

    #[test]
    fn counts_down() {
        let mut dir = directory();
        let (drones, d, _) = collecting(&mut dir, 1.0);
        assert_eq!(step(&drones, &dir, d, 0.25), vec![Intent::SetTimer(0.75)]);
    }

    #[test]
    fn expiry_picks_up_and_heads_home() {
        let mut dir = directory();
        let (drones, d, id) = collecting(&mut dir, 0.1);

        let intents = step(&drones, &dir, d, 0.25);
        assert!(intents.contains(&Intent::PickUp(id)));
        assert_eq!(intents.last(), Some(&Intent::Transition(DroneState::ReturningToBase)));
    }

    #[test]
    fn vanished_resource_heads_home_empty_handed() {
        let mut dir = directory();
        let (drones, d, _) = collecting(&mut dir, 0.1);
        dir.reset(0.0);

        let intents = step(&drones, &dir, d, 0.25);
        assert!(!intents.iter().any(|i| matches!(i, Intent::PickUp(_))));
        assert!(intents.contains(&Intent::Release));
        assert_eq!(intents.last(), Some(&Intent::Transition(DroneState::ReturningToBase)));
    }

    #[test]
    fn drone_does_not_move_while_collecting() {
        let mut dir = directory();
        let (drones, d, _) = collecting(&mut dir, 1.0);
        assert!(steer_of(&step(&drones, &dir, d, 0.25)).is_none());
    }
}

// ── Returning & delivering ────────────────────────────────────────────────────

#[cfg(test)]
mod returning {
    use super::*;

    #[test]
    fn steers_toward_own_base() {
        let dir = directory();
        let mut drones = DroneStore::new();
        let d = drone_at(&mut drones, Vec3::ZERO);
        drones.state[0] = DroneState::ReturningToBase;

        let (position, _) = steer_of(&step(&drones, &dir, d, 0.1)).expect("steer intent");
        assert!((position.x + 0.5).abs() < 1e-5);
    }

    #[test]
    fn arrives_within_one_unit() {
        let dir = directory();
        let mut drones = DroneStore::new();
        let d = drone_at(&mut drones, RED_BASE + Vec3::new(1.2, 0.0, 0.0));
        drones.state[0] = DroneState::ReturningToBase;

        let intents = step(&drones, &dir, d, 0.1);
        assert_eq!(intents.last(), Some(&Intent::Transition(DroneState::Delivering)));
    }

    #[test]
    fn delivering_hands_over_the_cargo() {
        let mut dir = directory();
        let id = dir.spawn_resource_at(Vec3::ZERO);
        let mut drones = DroneStore::new();
        let d = drone_at(&mut drones, RED_BASE);
        drones.state[0] = DroneState::Delivering;
        drones.target[0] = Some(id);
        drones.has_resource[0] = true;

        assert_eq!(
            step(&drones, &dir, d, 0.1),
            vec![
                Intent::Deliver(id),
                Intent::Release,
                Intent::Transition(DroneState::Searching),
            ]
        );
    }

    #[test]
    fn delivering_empty_handed_just_resets() {
        let dir = directory();
        let mut drones = DroneStore::new();
        let d = drone_at(&mut drones, RED_BASE);
        drones.state[0] = DroneState::Delivering;

        assert_eq!(
            step(&drones, &dir, d, 0.1),
            vec![Intent::Release, Intent::Transition(DroneState::Searching)]
        );
    }
}

// ── NoopBehavior ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod noop {
    use super::*;

    #[test]
    fn never_acts() {
        let dir = directory();
        let mut drones = DroneStore::new();
        let d = drone_at(&mut drones, Vec3::ZERO);
        let ctx = SimContext::new(Tick(0), 0.1, 0.0, &drones, &dir);
        assert!(NoopBehavior.step(d, &ctx).is_empty());
    }
}

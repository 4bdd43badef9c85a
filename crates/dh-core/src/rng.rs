//! Deterministic simulation-level RNG.
//!
//! Every random draw in the simulation (drone placement on restart, resource
//! spawn positions) goes through one `SimRng` seeded from
//! `SimConfig::seed`, so a run is fully reproducible from its seed.  Drones
//! themselves make no random decisions.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Vec3;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded `SmallRng` wrapper with the geometric samplers the sim needs.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Uniform point inside the unit ball (rejection sampling).
    pub fn inside_unit_sphere(&mut self) -> Vec3 {
        loop {
            let p = Vec3::new(
                self.0.gen_range(-1.0..=1.0),
                self.0.gen_range(-1.0..=1.0),
                self.0.gen_range(-1.0..=1.0),
            );
            if p.length_squared() <= 1.0 {
                return p;
            }
        }
    }

    /// `center + inside_unit_sphere() * radius`, with `y` pinned to `height`.
    ///
    /// Everything in the sim lives on a flat layer, so the vertical
    /// component of the sample is discarded.
    pub fn point_near(&mut self, center: Vec3, radius: f32, height: f32) -> Vec3 {
        let mut p = center + self.inside_unit_sphere() * radius;
        p.y = height;
        p
    }
}

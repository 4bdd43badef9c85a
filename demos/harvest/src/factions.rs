//! Faction layout for the demo arena.

use std::f32::consts::TAU;

use dh_core::{Color, Faction, Vec3};

/// Names and colours handed out in order.
const PALETTE: [(&str, Color); 4] = [
    ("Red", Color::RED),
    ("Blue", Color::BLUE),
    ("Green", Color::GREEN),
    ("Yellow", Color::YELLOW),
];

pub const MAX_FACTIONS: usize = PALETTE.len();

/// `count` factions with bases evenly spaced on a ring of `radius` around
/// the resource field.  Two factions face each other across the X axis.
pub fn ring(count: usize, radius: f32) -> Vec<Faction> {
    PALETTE
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, &(name, color))| {
            let angle = TAU * i as f32 / count as f32 + TAU / 2.0;
            let base = Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);
            Faction::new(name, color, base)
        })
        .collect()
}

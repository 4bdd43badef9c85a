//! Faction identity.
//!
//! A faction is pure identity: name, display colour and base position.  The
//! running score is owned elsewhere (the directory's scoreboard) so that a
//! `Faction` can be freely cloned and shared by every drone that belongs
//! to it.

use std::fmt;

use crate::Vec3;

/// An RGBA colour with components in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED:    Color = Color::rgb(1.0, 0.0, 0.0);
    pub const BLUE:   Color = Color::rgb(0.0, 0.0, 1.0);
    pub const GREEN:  Color = Color::rgb(0.0, 1.0, 0.0);
    pub const YELLOW: Color = Color::rgb(1.0, 0.92, 0.016);
    pub const WHITE:  Color = Color::rgb(1.0, 1.0, 1.0);

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// `#rrggbb` hex form (alpha dropped), handy for terminals and CSV.
    pub fn to_hex(self) -> String {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", c(self.r), c(self.g), c(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// A team of drones sharing a base and a score.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Faction {
    pub name:  String,
    pub color: Color,
    /// Where this faction's drones deliver resources.
    pub base:  Vec3,
}

impl Faction {
    pub fn new(name: impl Into<String>, color: Color, base: Vec3) -> Self {
        Self { name: name.into(), color, base }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

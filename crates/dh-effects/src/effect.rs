//! Effect kinds and the per-effect animation state.

use dh_core::{Color, EffectId, Vec3};

/// What triggered an effect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    /// A drone finished picking up a resource.
    Collection,
    /// A resource reached its faction's base.
    Delivery,
}

impl EffectKind {
    /// Seconds the effect takes to grow to full size.
    pub fn duration(self) -> f32 {
        match self {
            EffectKind::Collection => 0.3,
            EffectKind::Delivery => 0.5,
        }
    }

    #[inline]
    pub fn color(self) -> Color {
        Color::YELLOW
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EffectKind::Collection => "collection",
            EffectKind::Delivery => "delivery",
        }
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sphere that grows in place and then disappears.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopEffect {
    pub id:       EffectId,
    pub kind:     EffectKind,
    pub position: Vec3,
    /// Seconds since spawn.
    pub elapsed:  f32,
    pub duration: f32,
}

impl PopEffect {
    pub fn new(id: EffectId, kind: EffectKind, position: Vec3) -> Self {
        Self { id, kind, position, elapsed: 0.0, duration: kind.duration() }
    }

    /// Uniform scale, `0` at spawn rising linearly to `1` at the end.
    pub fn scale(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

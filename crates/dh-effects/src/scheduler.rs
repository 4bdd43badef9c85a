//! `EffectScheduler` — owns every running effect and advances them per tick.

use dh_core::{EffectId, Vec3};

use crate::{EffectKind, PopEffect};

/// The set of live pop effects.
///
/// Effects are kept in spawn order.  Ids keep counting across the whole
/// run and are never reused.
#[derive(Clone, Debug, Default)]
pub struct EffectScheduler {
    active:  Vec<PopEffect>,
    next_id: u64,
}

impl EffectScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new effect at `position`.
    pub fn spawn(&mut self, kind: EffectKind, position: Vec3) -> EffectId {
        let id = EffectId(self.next_id);
        self.next_id += 1;
        self.active.push(PopEffect::new(id, kind, position));
        id
    }

    /// Advance every effect by `dt` seconds.
    ///
    /// Effects that reach their duration are removed and returned in spawn
    /// order.  Returns an empty `Vec` (no allocation) when nothing finished.
    pub fn advance(&mut self, dt: f32) -> Vec<PopEffect> {
        let mut finished = Vec::new();
        self.active.retain_mut(|effect| {
            effect.elapsed += dt;
            if effect.is_finished() {
                finished.push(effect.clone());
                false
            } else {
                true
            }
        });
        finished
    }

    pub fn get(&self, id: EffectId) -> Option<&PopEffect> {
        self.active.iter().find(|e| e.id == id)
    }

    /// Live effects in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &PopEffect> + '_ {
        self.active.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

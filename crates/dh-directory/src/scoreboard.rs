//! Per-faction collection counters.

use std::fmt;

use dh_core::{Color, Faction, FactionId};

/// One faction's entry on the score display: `"name: count"` in its colour.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreLine {
    pub faction: FactionId,
    pub name:    String,
    pub count:   u32,
    pub color:   Color,
}

impl fmt::Display for ScoreLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.count)
    }
}

/// Resources delivered per faction, indexed by `FactionId`.
///
/// Counters only ever go up; [`reset`](Self::reset) is the sole way back
/// to zero and is called on a full restart.
#[derive(Clone, Debug, Default)]
pub struct Scoreboard {
    counts: Vec<u32>,
}

impl Scoreboard {
    pub fn new(faction_count: usize) -> Self {
        Self { counts: vec![0; faction_count] }
    }

    /// Add one delivery for `faction` and return its new total.
    ///
    /// Unknown factions are ignored and report 0.
    pub fn increment(&mut self, faction: FactionId) -> u32 {
        match self.counts.get_mut(faction.index()) {
            Some(c) => {
                *c += 1;
                *c
            }
            None => 0,
        }
    }

    pub fn get(&self, faction: FactionId) -> u32 {
        self.counts.get(faction.index()).copied().unwrap_or(0)
    }

    pub fn reset(&mut self) {
        self.counts.fill(0);
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Display lines for every faction, in faction order.
    pub fn lines(&self, factions: &[Faction]) -> Vec<ScoreLine> {
        factions
            .iter()
            .enumerate()
            .map(|(i, f)| ScoreLine {
                faction: FactionId(i as u16),
                name:    f.name.clone(),
                count:   self.counts.get(i).copied().unwrap_or(0),
                color:   f.color,
            })
            .collect()
    }
}

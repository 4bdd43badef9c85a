//! Plain data row types written by output backends.

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub elapsed_secs:   f64,
    pub searching:      u64,
    pub moving:         u64,
    pub collecting:     u64,
    pub returning:      u64,
    pub delivering:     u64,
    pub carrying:       u64,
    pub resources:      u64,
    pub available:      u64,
    pub spawned:        u64,
    pub deliveries:     u64,
    pub active_effects: u64,
}

/// One faction's score at the moment it was reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactionScoreRow {
    pub tick:       u64,
    pub faction_id: u16,
    pub name:       String,
    pub score:      u32,
    /// `#RRGGBB` display colour.
    pub color:      String,
}

/// A snapshot of one drone at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DroneSnapshotRow {
    pub drone_id:     u32,
    pub tick:         u64,
    pub faction_id:   u16,
    pub state:        &'static str,
    pub x:            f32,
    pub y:            f32,
    pub z:            f32,
    pub has_resource: bool,
    /// Claimed resource, if any.
    pub target:       Option<u64>,
}

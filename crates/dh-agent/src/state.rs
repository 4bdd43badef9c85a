//! Per-drone discrete state.

use std::fmt;

use dh_core::Vec3;

/// Where a drone is in its harvest loop.
///
/// The loop is `Searching → MovingToResource → Collecting → ReturningToBase
/// → Delivering → Searching`; there is no terminal state.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DroneState {
    /// Looking for the nearest unclaimed resource (initial state).
    #[default]
    Searching,
    /// Flying toward the claimed resource.
    MovingToResource,
    /// Hovering over the resource while the collection timer runs down.
    Collecting,
    /// Flying home, usually carrying a resource.
    ReturningToBase,
    /// At the base; hands the resource over this tick.
    Delivering,
}

impl DroneState {
    pub const ALL: [DroneState; 5] = [
        DroneState::Searching,
        DroneState::MovingToResource,
        DroneState::Collecting,
        DroneState::ReturningToBase,
        DroneState::Delivering,
    ];

    /// `true` for the two states that steer through the world.
    #[inline]
    pub fn is_travelling(self) -> bool {
        matches!(self, DroneState::MovingToResource | DroneState::ReturningToBase)
    }

    /// Label used in CSV columns and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            DroneState::Searching        => "searching",
            DroneState::MovingToResource => "moving_to_resource",
            DroneState::Collecting       => "collecting",
            DroneState::ReturningToBase  => "returning_to_base",
            DroneState::Delivering       => "delivering",
        }
    }
}

impl fmt::Display for DroneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-point line from a drone to its current goal, for path overlays.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathLine {
    pub from: Vec3,
    pub to:   Vec3,
}

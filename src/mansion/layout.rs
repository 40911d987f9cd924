//! Mansion geometry: rooms, doors, and hiding spots

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::types::RoomId;

/// Axis-aligned room volume
///
/// Containment only considers the x/z footprint; the mansion has no
/// stacked rooms, so height never disambiguates anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    /// Center of the room
    pub position: Vec3,
    /// Full extents: width x height x depth
    pub size: Vec3,
}

impl Room {
    pub fn new(name: &str, position: Vec3, size: Vec3) -> Self {
        Self {
            name: name.to_string(),
            position,
            size,
        }
    }

    /// x/z containment test against the room footprint (y ignored)
    pub fn contains(&self, pos: Vec3) -> bool {
        let half_w = self.size.x / 2.0;
        let half_d = self.size.z / 2.0;

        pos.x >= self.position.x - half_w
            && pos.x <= self.position.x + half_w
            && pos.z >= self.position.z - half_d
            && pos.z <= self.position.z + half_d
    }
}

/// Doorway between two rooms
///
/// Locked doors start with `open == false` and are opened by completing
/// the task that holds their key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Door {
    pub position: Vec3,
    pub open: bool,
    pub connects: [RoomId; 2],
}

impl Door {
    pub fn new(position: Vec3, open: bool, a: RoomId, b: RoomId) -> Self {
        Self {
            position,
            open,
            connects: [a, b],
        }
    }
}

/// Category of furniture the player can hide in or behind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HidingSpotKind {
    Closet,
    UnderDesk,
    UnderBed,
    BehindFurniture,
}

/// A fixed location that conceals the player from visual detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HidingSpot {
    pub position: Vec3,
    /// How close the player must be to use the spot
    pub radius: f32,
    pub kind: HidingSpotKind,
}

impl HidingSpot {
    pub fn new(position: Vec3, radius: f32, kind: HidingSpotKind) -> Self {
        Self {
            position,
            radius,
            kind,
        }
    }
}

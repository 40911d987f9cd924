//! Cyclic patrol routes through the mansion

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Ordered, cyclic sequence of patrol waypoints
///
/// Immutable after construction. An empty route is legal; the monster
/// simply holds position while patrolling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatrolRoute {
    waypoints: Vec<Vec3>,
}

impl PatrolRoute {
    pub fn new(waypoints: Vec<Vec3>) -> Self {
        Self { waypoints }
    }

    pub fn empty() -> Self {
        Self {
            waypoints: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn waypoint(&self, index: usize) -> Option<Vec3> {
        self.waypoints.get(index).copied()
    }

    /// Successor of `index`, wrapping back to the first waypoint
    pub fn next_index(&self, index: usize) -> usize {
        if self.waypoints.is_empty() {
            0
        } else {
            (index + 1) % self.waypoints.len()
        }
    }

    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }
}

//! Player proxy: the slice of player state the simulation core owns
//!
//! Movement, camera, and input belong to the host. The core consumes a
//! read-only snapshot of position and hiding/sprint state each tick, and
//! owns only the health and stamina dynamics.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Starting and maximum health
pub const MAX_HEALTH: f32 = 100.0;
/// Starting and maximum stamina
pub const MAX_STAMINA: f32 = 100.0;
/// Stamina recovered per second while not sprinting
pub const STAMINA_REGEN_RATE: f32 = 15.0;
/// Stamina spent per second while sprinting
pub const STAMINA_DRAIN_RATE: f32 = 20.0;
/// Minimum stamina required to start or keep sprinting
pub const SPRINT_STAMINA_FLOOR: f32 = 10.0;

/// Immutable per-tick view of the host-controlled player
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub position: Vec3,
    pub hiding: bool,
    /// Horizontal movement speed, used by the hearing model
    pub speed: f32,
    pub sprinting: bool,
}

/// Health and stamina bookkeeping for the player
#[derive(Debug, Clone)]
pub struct Player {
    health: f32,
    stamina: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            health: MAX_HEALTH,
            stamina: MAX_STAMINA,
        }
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn stamina(&self) -> f32 {
        self.stamina
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Can the player sustain a sprint right now?
    pub fn can_sprint(&self) -> bool {
        self.stamina > SPRINT_STAMINA_FLOOR
    }

    /// Drain stamina while sprinting in the open, regenerate otherwise
    pub fn update_stamina(&mut self, dt: f32, sprinting: bool, hiding: bool) {
        if sprinting && !hiding {
            self.stamina = (self.stamina - STAMINA_DRAIN_RATE * dt).max(0.0);
        } else {
            self.stamina = (self.stamina + STAMINA_REGEN_RATE * dt).min(MAX_STAMINA);
        }
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
    }

    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount).min(MAX_HEALTH);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

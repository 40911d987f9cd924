//! Simulation configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other.

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};

/// Configuration for the stealth simulation
///
/// These values have been tuned so an unhurried player can finish the task
/// chain while the monster remains a credible threat. Changing them will
/// affect pacing and how punishing detection is.
///
/// Every field has a serde default, so a TOML override file only needs to
/// name the values it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === PERCEPTION ===
    /// How far the monster can see an unhidden player (world units)
    ///
    /// Sight also requires the player to be inside the vision cone.
    /// Larger values make open rooms much more dangerous.
    pub detection_radius: f32,

    /// Full width of the vision cone in degrees
    ///
    /// A player is seen when the angle between the facing reference axis
    /// and the direction to the player is within half this value.
    pub vision_angle_deg: f32,

    /// How far the monster can hear a running player (world units)
    ///
    /// Within 30% of this radius the player is audible regardless of
    /// speed, so standing next to the monster is never safe.
    pub hearing_radius: f32,

    /// Player speed above which movement counts as running
    ///
    /// Sits between the player's walk speed (5.0 in the reference host)
    /// and a sneaking pace, so walking normally is already audible.
    pub hearing_run_threshold: f32,

    // === MOVEMENT ===
    /// Monster movement speed while patrolling or searching (units/sec)
    pub move_speed: f32,

    /// Monster movement speed while chasing (units/sec)
    ///
    /// Deliberately faster than the player's walk speed and slower than a
    /// sprint, so escape requires stamina or a hiding spot.
    pub chase_speed: f32,

    /// Seconds the monster lingers at each patrol waypoint
    pub patrol_wait_time: f32,

    /// Seconds of fruitless searching before the monster gives up
    ///
    /// On expiry the monster returns to PATROL and its alertness resets.
    pub search_duration: f32,

    /// Distance at which a chase becomes an attack (world units)
    ///
    /// Leaving ATTACK requires 1.5x this distance, which gives the
    /// transition hysteresis and stops flickering at the boundary.
    pub attack_radius: f32,

    // === ENCOUNTER ===
    /// Damage per second while the monster is in contact with an
    /// unhidden player
    ///
    /// At the default rate (30.0) a full-health player survives just over
    /// three seconds of contact.
    pub damage_rate: f32,

    /// Distance within which the player can complete the current task
    pub interaction_radius: f32,

    // === TICKING ===
    /// Upper bound applied to the host-supplied delta time (seconds)
    ///
    /// Bounds integration error when the host frame stalls; a 2 second
    /// hitch still advances the simulation by at most this much.
    pub max_delta_time: f32,

    /// Seed for the simulation's RNG
    ///
    /// The only randomness source in the core; the same seed reproduces
    /// the exact sequence of random patrol points.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            detection_radius: 15.0,
            vision_angle_deg: 60.0,
            hearing_radius: 20.0,
            hearing_run_threshold: 4.0,
            move_speed: 3.0,
            chase_speed: 6.0,
            patrol_wait_time: 3.0,
            search_duration: 10.0,
            attack_radius: 2.0,
            damage_rate: 30.0,
            interaction_radius: 2.5,
            max_delta_time: 0.1,
            seed: 12345,
        }
    }
}

impl SimulationConfig {
    /// Check that every tunable is in its sane range
    pub fn validate(&self) -> Result<()> {
        fn positive(field: &'static str, value: f32) -> Result<()> {
            if value > 0.0 {
                Ok(())
            } else {
                Err(GameError::InvalidConfig {
                    field,
                    value,
                    reason: "must be positive",
                })
            }
        }

        positive("detection_radius", self.detection_radius)?;
        positive("hearing_radius", self.hearing_radius)?;
        positive("move_speed", self.move_speed)?;
        positive("chase_speed", self.chase_speed)?;
        positive("patrol_wait_time", self.patrol_wait_time)?;
        positive("search_duration", self.search_duration)?;
        positive("attack_radius", self.attack_radius)?;
        positive("interaction_radius", self.interaction_radius)?;
        positive("max_delta_time", self.max_delta_time)?;

        if self.hearing_run_threshold < 0.0 {
            return Err(GameError::InvalidConfig {
                field: "hearing_run_threshold",
                value: self.hearing_run_threshold,
                reason: "must be non-negative",
            });
        }
        if self.damage_rate < 0.0 {
            return Err(GameError::InvalidConfig {
                field: "damage_rate",
                value: self.damage_rate,
                reason: "must be non-negative",
            });
        }
        if !(self.vision_angle_deg > 0.0 && self.vision_angle_deg <= 180.0) {
            return Err(GameError::InvalidConfig {
                field: "vision_angle_deg",
                value: self.vision_angle_deg,
                reason: "must be in (0, 180]",
            });
        }

        Ok(())
    }

    /// Parse a config from TOML text; absent fields keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config override file from disk
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = SimulationConfig::from_toml_str("detection_radius = 25.0").unwrap();
        assert_eq!(config.detection_radius, 25.0);
        assert_eq!(config.hearing_radius, 20.0);
        assert_eq!(config.seed, 12345);
    }

    #[test]
    fn rejects_non_positive_radius() {
        let err = SimulationConfig::from_toml_str("attack_radius = 0.0").unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidConfig {
                field: "attack_radius",
                ..
            }
        ));
    }

    #[test]
    fn rejects_wide_vision_angle() {
        let mut config = SimulationConfig::default();
        config.vision_angle_deg = 360.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(SimulationConfig::from_toml_str("detection_radius = ").is_err());
    }
}

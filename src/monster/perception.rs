//! Sight and hearing predicates for the monster

use glam::Vec3;

use crate::core::config::SimulationConfig;

/// Visual detection test
///
/// A hiding player is never seen. Otherwise the player must be within
/// the detection radius and inside the vision cone.
///
/// The cone is measured against the world +Z axis rather than the
/// monster's travel direction, so it does not rotate as the monster
/// turns. This matches the shipped behavior and is kept deliberately;
/// whether to track a real forward vector is a gameplay decision, not a
/// porting one.
pub fn can_see(
    monster_pos: Vec3,
    player_pos: Vec3,
    player_hiding: bool,
    config: &SimulationConfig,
) -> bool {
    if player_hiding {
        return false;
    }

    let to_player = player_pos - monster_pos;
    if to_player.length() > config.detection_radius {
        return false;
    }

    let dir = to_player.normalize_or_zero();
    let angle_deg = dir.z.clamp(-1.0, 1.0).acos().to_degrees();

    angle_deg < config.vision_angle_deg / 2.0
}

/// Auditory detection test
///
/// A running player is audible anywhere inside the hearing radius; any
/// player is audible within 30% of it, so hugging the monster in a
/// crouch still gives them away.
pub fn can_hear(
    monster_pos: Vec3,
    player_pos: Vec3,
    player_speed: f32,
    config: &SimulationConfig,
) -> bool {
    let distance = monster_pos.distance(player_pos);

    if player_speed > config.hearing_run_threshold && distance < config.hearing_radius {
        return true;
    }

    distance < config.hearing_radius * 0.3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimulationConfig {
        SimulationConfig::default()
    }

    #[test]
    fn hiding_player_is_invisible() {
        // Directly ahead, point blank
        assert!(!can_see(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 1.0),
            true,
            &config()
        ));
    }

    #[test]
    fn sees_player_ahead_within_radius() {
        assert!(can_see(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 10.0),
            false,
            &config()
        ));
    }

    #[test]
    fn detection_radius_bounds_sight() {
        assert!(!can_see(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 15.1),
            false,
            &config()
        ));
    }

    #[test]
    fn cone_excludes_player_to_the_side() {
        // 90 degrees off the reference axis
        assert!(!can_see(
            Vec3::ZERO,
            Vec3::new(10.0, 0.0, 0.0),
            false,
            &config()
        ));
        // Behind the reference axis
        assert!(!can_see(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -10.0),
            false,
            &config()
        ));
    }

    #[test]
    fn cone_edge_at_half_angle() {
        // 29 degrees off +Z: inside a 60-degree cone
        let inside = Vec3::new(29f32.to_radians().sin(), 0.0, 29f32.to_radians().cos()) * 10.0;
        assert!(can_see(Vec3::ZERO, inside, false, &config()));

        // 31 degrees off +Z: outside
        let outside = Vec3::new(31f32.to_radians().sin(), 0.0, 31f32.to_radians().cos()) * 10.0;
        assert!(!can_see(Vec3::ZERO, outside, false, &config()));
    }

    #[test]
    fn cone_does_not_rotate_with_monster() {
        // Same offset, different monster positions: identical result,
        // because the reference axis is fixed.
        let offset = Vec3::new(0.0, 0.0, 5.0);
        for monster_pos in [Vec3::ZERO, Vec3::new(40.0, 1.0, 40.0)] {
            assert!(can_see(monster_pos, monster_pos + offset, false, &config()));
        }
    }

    #[test]
    fn hears_running_player_at_range() {
        assert!(can_hear(Vec3::ZERO, Vec3::new(0.0, 0.0, 18.0), 5.0, &config()));
        assert!(!can_hear(Vec3::ZERO, Vec3::new(0.0, 0.0, 21.0), 5.0, &config()));
    }

    #[test]
    fn slow_player_is_quiet_at_range() {
        assert!(!can_hear(Vec3::ZERO, Vec3::new(0.0, 0.0, 18.0), 2.0, &config()));
    }

    #[test]
    fn close_range_is_always_audible() {
        // Within 30% of the 20-unit hearing radius
        assert!(can_hear(Vec3::ZERO, Vec3::new(0.0, 0.0, 5.9), 0.0, &config()));
        assert!(!can_hear(Vec3::ZERO, Vec3::new(0.0, 0.0, 6.1), 0.0, &config()));
    }
}

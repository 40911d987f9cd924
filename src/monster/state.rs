//! Monster behavior states and the transition table
//!
//! All state changes funnel through [`transition`], so the edge set
//! lives in exactly one place; movement code never changes state.

use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonsterState {
    Patrol,
    Search,
    Chase,
    Attack,
    Idle,
}

impl std::fmt::Display for MonsterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Patrol => "PATROL",
            Self::Search => "SEARCH",
            Self::Chase => "CHASE",
            Self::Attack => "ATTACK",
            Self::Idle => "IDLE",
        };
        f.write_str(name)
    }
}

/// Everything the transition table is allowed to look at for one tick
#[derive(Debug, Clone, Copy)]
pub struct Stimulus {
    pub sees_player: bool,
    pub hears_player: bool,
    pub player_hiding: bool,
    pub distance_to_player: f32,
    /// Has the current search been running longer than `search_duration`?
    pub search_expired: bool,
}

/// The transition table
///
/// | From   | Trigger                        | To     |
/// |--------|--------------------------------|--------|
/// | PATROL | sees and not hiding            | CHASE  |
/// | PATROL | hears                          | SEARCH |
/// | SEARCH | sees and not hiding            | CHASE  |
/// | SEARCH | search timer expired           | PATROL |
/// | CHASE  | neither sees nor hears         | SEARCH |
/// | CHASE  | distance < attack radius       | ATTACK |
/// | ATTACK | distance > attack radius * 1.5 | CHASE  |
///
/// Attack entry and exit use different distances, so values between
/// them never flip the state back and forth. IDLE has no edges.
pub fn transition(
    current: MonsterState,
    stimulus: &Stimulus,
    config: &SimulationConfig,
) -> MonsterState {
    use MonsterState::*;

    match current {
        Patrol => {
            if stimulus.sees_player && !stimulus.player_hiding {
                Chase
            } else if stimulus.hears_player {
                Search
            } else {
                Patrol
            }
        }
        Search => {
            if stimulus.sees_player && !stimulus.player_hiding {
                Chase
            } else if stimulus.search_expired {
                Patrol
            } else {
                Search
            }
        }
        Chase => {
            if !stimulus.sees_player && !stimulus.hears_player {
                Search
            } else if stimulus.distance_to_player < config.attack_radius {
                Attack
            } else {
                Chase
            }
        }
        Attack => {
            if stimulus.distance_to_player > config.attack_radius * 1.5 {
                Chase
            } else {
                Attack
            }
        }
        Idle => Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use MonsterState::*;

    fn quiet(distance: f32) -> Stimulus {
        Stimulus {
            sees_player: false,
            hears_player: false,
            player_hiding: false,
            distance_to_player: distance,
            search_expired: false,
        }
    }

    fn config() -> SimulationConfig {
        SimulationConfig::default()
    }

    #[test]
    fn patrol_to_chase_on_sight() {
        let stimulus = Stimulus {
            sees_player: true,
            ..quiet(10.0)
        };
        assert_eq!(transition(Patrol, &stimulus, &config()), Chase);
    }

    #[test]
    fn patrol_to_search_on_sound() {
        let stimulus = Stimulus {
            hears_player: true,
            ..quiet(10.0)
        };
        assert_eq!(transition(Patrol, &stimulus, &config()), Search);
    }

    #[test]
    fn sight_beats_sound_from_patrol() {
        let stimulus = Stimulus {
            sees_player: true,
            hears_player: true,
            ..quiet(10.0)
        };
        assert_eq!(transition(Patrol, &stimulus, &config()), Chase);
    }

    #[test]
    fn search_returns_to_patrol_on_expiry() {
        let stimulus = Stimulus {
            search_expired: true,
            ..quiet(10.0)
        };
        assert_eq!(transition(Search, &stimulus, &config()), Patrol);
    }

    #[test]
    fn search_to_chase_on_sight_even_if_expired() {
        let stimulus = Stimulus {
            sees_player: true,
            search_expired: true,
            ..quiet(10.0)
        };
        assert_eq!(transition(Search, &stimulus, &config()), Chase);
    }

    #[test]
    fn chase_to_search_when_contact_lost() {
        assert_eq!(transition(Chase, &quiet(10.0), &config()), Search);
    }

    #[test]
    fn chase_to_attack_at_close_range() {
        let stimulus = Stimulus {
            sees_player: true,
            ..quiet(1.5)
        };
        assert_eq!(transition(Chase, &stimulus, &config()), Attack);
    }

    #[test]
    fn attack_hysteresis_band_holds_state() {
        // 2.5 is above attack entry (2.0) and below attack exit (3.0)
        let seen = Stimulus {
            sees_player: true,
            ..quiet(2.5)
        };
        assert_eq!(transition(Chase, &seen, &config()), Chase);
        assert_eq!(transition(Attack, &seen, &config()), Attack);
    }

    #[test]
    fn attack_to_chase_past_release_distance() {
        let stimulus = Stimulus {
            sees_player: true,
            ..quiet(3.1)
        };
        assert_eq!(transition(Attack, &stimulus, &config()), Chase);
    }

    #[test]
    fn idle_has_no_edges() {
        let noisy = Stimulus {
            sees_player: true,
            hears_player: true,
            player_hiding: false,
            distance_to_player: 0.5,
            search_expired: true,
        };
        assert_eq!(transition(Idle, &noisy, &config()), Idle);
    }

    #[test]
    fn no_state_changes_without_stimulus() {
        for state in [Patrol, Search, Idle] {
            assert_eq!(transition(state, &quiet(50.0), &config()), state);
        }
    }
}

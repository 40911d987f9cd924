//! The monster: perception-driven finite-state adversary
//!
//! Per tick the monster perceives the player, runs one transition
//! through the table in [`state`], picks a velocity for its current
//! state, and integrates its position. It never touches the player;
//! damage is the encounter resolver's job.

pub mod perception;
pub mod state;

use glam::Vec3;

use crate::core::config::SimulationConfig;
use crate::mansion::PatrolRoute;
use crate::player::PlayerSnapshot;

pub use state::{MonsterState, Stimulus};

/// Distance at which a movement target counts as reached
const ARRIVAL_RADIUS: f32 = 2.0;
/// Alertness gained per second while the player is seen or heard
const ALERTNESS_RISE_RATE: f32 = 0.5;
/// Alertness lost per second, every tick, in every state
const ALERTNESS_DECAY_RATE: f32 = 0.1;

/// Result of one monster tick
#[derive(Debug, Clone, Copy)]
pub struct MonsterUpdate {
    /// `(from, to)` when this tick changed state
    pub state_change: Option<(MonsterState, MonsterState)>,
}

#[derive(Debug, Clone)]
pub struct Monster {
    position: Vec3,
    velocity: Vec3,
    state: MonsterState,
    previous_state: MonsterState,
    /// How worked up the monster is, in [0, 1]
    alertness: f32,
    last_known_player_pos: Vec3,
    route: PatrolRoute,
    patrol_index: usize,
    patrol_wait_timer: f32,
    search_timer: f32,
}

impl Monster {
    pub fn new(start: Vec3, route: PatrolRoute) -> Self {
        Self {
            position: start,
            velocity: Vec3::ZERO,
            state: MonsterState::Patrol,
            previous_state: MonsterState::Patrol,
            alertness: 0.0,
            last_known_player_pos: Vec3::ZERO,
            route,
            patrol_index: 0,
            patrol_wait_timer: 0.0,
            search_timer: 0.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn state(&self) -> MonsterState {
        self.state
    }

    pub fn previous_state(&self) -> MonsterState {
        self.previous_state
    }

    pub fn alertness(&self) -> f32 {
        self.alertness
    }

    pub fn last_known_player_pos(&self) -> Vec3 {
        self.last_known_player_pos
    }

    pub fn distance_to(&self, pos: Vec3) -> f32 {
        self.position.distance(pos)
    }

    /// Advance the monster by one tick against an immutable player snapshot
    pub fn update(
        &mut self,
        dt: f32,
        player: &PlayerSnapshot,
        config: &SimulationConfig,
    ) -> MonsterUpdate {
        let sees = perception::can_see(self.position, player.position, player.hiding, config);
        let hears = perception::can_hear(self.position, player.position, player.speed, config);
        let distance = self.distance_to(player.position);

        if sees || hears {
            self.alertness = (self.alertness + ALERTNESS_RISE_RATE * dt).min(1.0);
            self.last_known_player_pos = player.position;
        }

        if self.state == MonsterState::Search {
            self.search_timer += dt;
        }

        let stimulus = Stimulus {
            sees_player: sees,
            hears_player: hears,
            player_hiding: player.hiding,
            distance_to_player: distance,
            search_expired: self.search_timer > config.search_duration,
        };

        let next = state::transition(self.state, &stimulus, config);
        let state_change = if next != self.state {
            self.apply_transition(next);
            Some((self.previous_state, next))
        } else {
            None
        };

        match self.state {
            MonsterState::Patrol => self.patrol(dt, config),
            MonsterState::Search => self.search(config),
            MonsterState::Chase => self.chase(player.position, config),
            MonsterState::Attack => self.velocity = Vec3::ZERO,
            MonsterState::Idle => {}
        }

        self.position += self.velocity * dt;

        self.alertness = (self.alertness - ALERTNESS_DECAY_RATE * dt).max(0.0);

        MonsterUpdate { state_change }
    }

    fn apply_transition(&mut self, next: MonsterState) {
        self.previous_state = self.state;

        // A fresh search or chase starts its clock over
        if matches!(next, MonsterState::Search | MonsterState::Chase) {
            self.search_timer = 0.0;
        }
        // Giving up a search means calming down completely
        if self.state == MonsterState::Search && next == MonsterState::Patrol {
            self.alertness = 0.0;
        }

        self.state = next;
    }

    /// Walk the cyclic route, lingering at each waypoint
    fn patrol(&mut self, dt: f32, config: &SimulationConfig) {
        let Some(target) = self.route.waypoint(self.patrol_index) else {
            // No route authored: hold position
            self.velocity = Vec3::ZERO;
            return;
        };

        if self.position.distance(target) < ARRIVAL_RADIUS {
            self.velocity = Vec3::ZERO;
            self.patrol_wait_timer += dt;

            if self.patrol_wait_timer > config.patrol_wait_time {
                self.patrol_wait_timer = 0.0;
                self.patrol_index = self.route.next_index(self.patrol_index);
            }
        } else {
            self.move_toward(target, config.move_speed);
        }
    }

    /// Investigate the last place the player was perceived
    fn search(&mut self, config: &SimulationConfig) {
        if self.position.distance(self.last_known_player_pos) < ARRIVAL_RADIUS {
            // Nothing there; stand and let the search timer run out
            self.velocity = Vec3::ZERO;
        } else {
            self.move_toward(self.last_known_player_pos, config.move_speed);
        }
    }

    fn chase(&mut self, player_pos: Vec3, config: &SimulationConfig) {
        self.move_toward(player_pos, config.chase_speed);
        self.last_known_player_pos = player_pos;
    }

    /// Head straight for `target` at `speed`; direct line, no pathing
    fn move_toward(&mut self, target: Vec3, speed: f32) {
        self.velocity = (target - self.position).normalize_or_zero() * speed;
    }
}

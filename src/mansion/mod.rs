//! Static mansion data and spatial queries
//!
//! The mansion is pure geometry: rooms, doors, hiding spots, and the
//! monster's patrol route. Nothing here moves on its own; the only
//! runtime mutation is doors being unlocked by completed tasks.

pub mod layout;
pub mod patrol;

use glam::Vec3;
use rand::Rng;

use crate::core::error::{GameError, Result};
use crate::core::types::{DoorId, RoomId};

pub use layout::{Door, HidingSpot, HidingSpotKind, Room};
pub use patrol::PatrolRoute;

#[derive(Debug, Clone)]
pub struct Mansion {
    rooms: Vec<Room>,
    doors: Vec<Door>,
    hiding_spots: Vec<HidingSpot>,
    patrol_route: PatrolRoute,
}

impl Mansion {
    /// Build a mansion from authored data, checking referential integrity
    pub fn new(
        rooms: Vec<Room>,
        doors: Vec<Door>,
        hiding_spots: Vec<HidingSpot>,
        patrol_route: PatrolRoute,
    ) -> Result<Self> {
        for (i, door) in doors.iter().enumerate() {
            for room in door.connects {
                if room.0 >= rooms.len() {
                    return Err(GameError::InvalidLayout {
                        door: DoorId(i),
                        room,
                    });
                }
            }
        }

        Ok(Self {
            rooms,
            doors,
            hiding_spots,
            patrol_route,
        })
    }

    /// The hand-authored mansion the game ships with: nine rooms, five
    /// doors (study and basement locked), seven hiding spots, and an
    /// eight-point patrol loop
    pub fn standard() -> Self {
        let rooms = vec![
            Room::new(
                "Entrance Hall",
                Vec3::new(10.0, 0.0, 10.0),
                Vec3::new(15.0, 5.0, 15.0),
            ),
            Room::new("Study", Vec3::new(30.0, 0.0, 15.0), Vec3::new(12.0, 5.0, 10.0)),
            Room::new(
                "Library",
                Vec3::new(25.0, 0.0, 30.0),
                Vec3::new(10.0, 5.0, 12.0),
            ),
            Room::new(
                "Master Bedroom",
                Vec3::new(45.0, 0.0, 35.0),
                Vec3::new(14.0, 5.0, 14.0),
            ),
            Room::new(
                "Kitchen",
                Vec3::new(10.0, 0.0, 35.0),
                Vec3::new(12.0, 5.0, 10.0),
            ),
            Room::new(
                "Dining Room",
                Vec3::new(15.0, 0.0, 50.0),
                Vec3::new(16.0, 5.0, 12.0),
            ),
            Room::new(
                "Basement Laboratory",
                Vec3::new(20.0, -5.0, 55.0),
                Vec3::new(20.0, 4.0, 15.0),
            ),
            Room::new(
                "Hallway",
                Vec3::new(18.0, 0.0, 20.0),
                Vec3::new(6.0, 5.0, 15.0),
            ),
            Room::new(
                "Upstairs Hallway",
                Vec3::new(35.0, 0.0, 25.0),
                Vec3::new(8.0, 5.0, 18.0),
            ),
        ];

        let doors = vec![
            Door::new(Vec3::new(17.0, 1.5, 15.0), true, RoomId(0), RoomId(7)),
            // Study door, locked until the player finds the key
            Door::new(Vec3::new(25.0, 1.5, 17.0), false, RoomId(7), RoomId(1)),
            Door::new(Vec3::new(20.0, 1.5, 27.0), true, RoomId(7), RoomId(2)),
            // Basement door, locked until the player finds the key
            Door::new(Vec3::new(20.0, 0.5, 48.0), false, RoomId(5), RoomId(6)),
            Door::new(Vec3::new(38.0, 1.5, 35.0), true, RoomId(8), RoomId(3)),
        ];

        let hiding_spots = vec![
            HidingSpot::new(Vec3::new(8.0, 1.0, 8.0), 1.5, HidingSpotKind::Closet),
            HidingSpot::new(Vec3::new(32.0, 0.5, 20.0), 1.2, HidingSpotKind::UnderDesk),
            HidingSpot::new(
                Vec3::new(23.0, 1.0, 33.0),
                1.5,
                HidingSpotKind::BehindFurniture,
            ),
            HidingSpot::new(Vec3::new(47.0, 0.3, 37.0), 1.8, HidingSpotKind::UnderBed),
            HidingSpot::new(Vec3::new(43.0, 1.0, 40.0), 1.5, HidingSpotKind::Closet),
            HidingSpot::new(
                Vec3::new(12.0, 0.8, 37.0),
                1.3,
                HidingSpotKind::BehindFurniture,
            ),
            HidingSpot::new(
                Vec3::new(18.0, -4.5, 52.0),
                1.4,
                HidingSpotKind::BehindFurniture,
            ),
        ];

        let patrol_route = PatrolRoute::new(vec![
            Vec3::new(10.0, 1.0, 10.0), // Entrance
            Vec3::new(18.0, 1.0, 20.0), // Hallway
            Vec3::new(25.0, 1.0, 30.0), // Library
            Vec3::new(35.0, 1.0, 25.0), // Upstairs hallway
            Vec3::new(45.0, 1.0, 35.0), // Bedroom
            Vec3::new(35.0, 1.0, 35.0), // Back past the hallway
            Vec3::new(15.0, 1.0, 50.0), // Dining room
            Vec3::new(10.0, 1.0, 35.0), // Kitchen
        ]);

        Self {
            rooms,
            doors,
            hiding_spots,
            patrol_route,
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn hiding_spots(&self) -> &[HidingSpot] {
        &self.hiding_spots
    }

    pub fn patrol_route(&self) -> &PatrolRoute {
        &self.patrol_route
    }

    /// Is `pos` inside the given room's footprint?
    pub fn is_in_room(&self, pos: Vec3, room: RoomId) -> bool {
        self.rooms.get(room.0).is_some_and(|r| r.contains(pos))
    }

    /// First room whose footprint contains `pos`
    ///
    /// Rooms overlap slightly where hallways meet them; the authored
    /// ordering decides which one wins.
    pub fn room_containing(&self, pos: Vec3) -> Option<(RoomId, &Room)> {
        self.rooms
            .iter()
            .enumerate()
            .find(|(_, room)| room.contains(pos))
            .map(|(i, room)| (RoomId(i), room))
    }

    /// Nearest hiding spot strictly closer than `max_distance`
    ///
    /// Linear scan; on equal distances the first spot in authored order
    /// wins, which keeps results deterministic.
    pub fn nearest_hiding_spot(&self, pos: Vec3, max_distance: f32) -> Option<&HidingSpot> {
        let mut nearest = None;
        let mut nearest_dist = max_distance;

        for spot in &self.hiding_spots {
            let dist = spot.position.distance(pos);
            if dist < nearest_dist {
                nearest_dist = dist;
                nearest = Some(spot);
            }
        }

        nearest
    }

    /// Center of a uniformly random room, used to seed alternate patrols
    pub fn random_patrol_point<R: Rng>(&self, rng: &mut R) -> Vec3 {
        if self.rooms.is_empty() {
            return Vec3::ZERO;
        }
        let index = rng.gen_range(0..self.rooms.len());
        self.rooms[index].position
    }

    pub fn door_open(&self, door: DoorId) -> bool {
        self.doors.get(door.0).is_some_and(|d| d.open)
    }

    pub fn set_door_open(&mut self, door: DoorId, open: bool) {
        if let Some(d) = self.doors.get_mut(door.0) {
            d.open = open;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn standard_layout_shape() {
        let mansion = Mansion::standard();
        assert_eq!(mansion.rooms().len(), 9);
        assert_eq!(mansion.doors().len(), 5);
        assert_eq!(mansion.hiding_spots().len(), 7);
        assert_eq!(mansion.patrol_route().len(), 8);
    }

    #[test]
    fn study_and_basement_start_locked() {
        let mansion = Mansion::standard();
        assert!(mansion.door_open(DoorId(0)));
        assert!(!mansion.door_open(DoorId(1)));
        assert!(!mansion.door_open(DoorId(3)));
    }

    #[test]
    fn rejects_door_to_missing_room() {
        let rooms = vec![Room::new(
            "Only Room",
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 5.0, 10.0),
        )];
        let doors = vec![Door::new(Vec3::ZERO, true, RoomId(0), RoomId(3))];

        let err = Mansion::new(rooms, doors, Vec::new(), PatrolRoute::empty()).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidLayout {
                door: DoorId(0),
                room: RoomId(3)
            }
        ));
    }

    #[test]
    fn entrance_hall_containment() {
        let mansion = Mansion::standard();
        assert!(mansion.is_in_room(Vec3::new(10.0, 0.0, 10.0), RoomId(0)));
        assert!(!mansion.is_in_room(Vec3::new(30.0, 0.0, 15.0), RoomId(0)));

        let (id, room) = mansion.room_containing(Vec3::new(30.0, 0.0, 15.0)).unwrap();
        assert_eq!(id, RoomId(1));
        assert_eq!(room.name, "Study");
    }

    #[test]
    fn nearest_spot_respects_bound() {
        // Spots at distances 5.0, 1.8, 3.0 from the query point
        let spots = vec![
            HidingSpot::new(Vec3::new(5.0, 0.0, 0.0), 1.5, HidingSpotKind::Closet),
            HidingSpot::new(Vec3::new(0.0, 0.0, 1.8), 1.5, HidingSpotKind::UnderBed),
            HidingSpot::new(Vec3::new(3.0, 0.0, 0.0), 1.5, HidingSpotKind::UnderDesk),
        ];
        let mansion =
            Mansion::new(Vec::new(), Vec::new(), spots, PatrolRoute::empty()).unwrap();

        let found = mansion.nearest_hiding_spot(Vec3::ZERO, 2.0).unwrap();
        assert_eq!(found.kind, HidingSpotKind::UnderBed);

        // All spots farther than the bound
        assert!(mansion.nearest_hiding_spot(Vec3::ZERO, 1.0).is_none());
    }

    #[test]
    fn nearest_spot_tie_keeps_first() {
        let spots = vec![
            HidingSpot::new(Vec3::new(2.0, 0.0, 0.0), 1.5, HidingSpotKind::Closet),
            HidingSpot::new(Vec3::new(-2.0, 0.0, 0.0), 1.5, HidingSpotKind::UnderBed),
        ];
        let mansion =
            Mansion::new(Vec::new(), Vec::new(), spots, PatrolRoute::empty()).unwrap();

        let found = mansion.nearest_hiding_spot(Vec3::ZERO, 10.0).unwrap();
        assert_eq!(found.kind, HidingSpotKind::Closet);
    }

    #[test]
    fn empty_spot_list_finds_nothing() {
        let mansion =
            Mansion::new(Vec::new(), Vec::new(), Vec::new(), PatrolRoute::empty()).unwrap();
        assert!(mansion.nearest_hiding_spot(Vec3::ZERO, 100.0).is_none());
    }

    #[test]
    fn random_patrol_point_is_seed_deterministic() {
        let mansion = Mansion::standard();

        let mut rng_a = ChaCha8Rng::seed_from_u64(7);
        let mut rng_b = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let a = mansion.random_patrol_point(&mut rng_a);
            let b = mansion.random_patrol_point(&mut rng_b);
            assert_eq!(a, b);
            // Always a real room center
            assert!(mansion.rooms().iter().any(|r| r.position == a));
        }
    }
}

use crate::constants::{MIN_LEVELS, MIN_ROOMS_PER_LEVEL};
use crate::gen::LabyrinthError;
use std::fmt;

#[derive(Ord, PartialOrd, PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct RoomId {
    pub level: u32,
    pub index: u32,
}

impl RoomId {
    pub fn new(level: u32, index: u32) -> Self {
        RoomId { level, index }
    }

    /// Room (0, 0), where every walk through the labyrinth starts.
    pub fn origin() -> Self {
        RoomId::new(0, 0)
    }

    /// The room with `index` on the level lying on the far side of `self` as
    /// seen from `from_level`. `None` below level 0.
    pub fn reflected(&self, from_level: u32, index: u32) -> Option<RoomId> {
        (2 * self.level)
            .checked_sub(from_level)
            .map(|level| RoomId::new(level, index))
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.level, self.index)
    }
}

/// Grid shape: `levels` stacked levels, each a ring of `rooms_per_level - 1`
/// rooms around a central hub.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct Dimensions {
    levels: u32,
    rooms_per_level: u32,
}

impl Dimensions {
    pub fn new(levels: u32, rooms_per_level: u32) -> Result<Self, LabyrinthError> {
        if levels < MIN_LEVELS || rooms_per_level < MIN_ROOMS_PER_LEVEL {
            return Err(LabyrinthError::InvalidParameters {
                levels,
                rooms_per_level,
            });
        }
        Ok(Dimensions {
            levels,
            rooms_per_level,
        })
    }

    #[inline]
    pub fn levels(&self) -> u32 {
        self.levels
    }

    #[inline]
    pub fn rooms_per_level(&self) -> u32 {
        self.rooms_per_level
    }

    #[inline]
    pub fn hub_index(&self) -> u32 {
        self.rooms_per_level - 1
    }

    #[inline]
    pub fn ring_size(&self) -> u32 {
        self.rooms_per_level - 1
    }

    #[inline]
    pub fn room_count(&self) -> usize {
        self.levels as usize * self.rooms_per_level as usize
    }

    pub fn is_hub(&self, room: &RoomId) -> bool {
        room.index == self.hub_index()
    }

    pub fn contains(&self, room: &RoomId) -> bool {
        room.level < self.levels && room.index < self.rooms_per_level
    }

    /// Hub of the top level, the starting point of the far-room search.
    pub fn last_hub(&self) -> RoomId {
        RoomId::new(self.levels - 1, self.hub_index())
    }

    /// All rooms, level by level.
    pub fn rooms(&self) -> impl Iterator<Item = RoomId> {
        let rooms_per_level = self.rooms_per_level;
        (0..self.levels)
            .flat_map(move |level| (0..rooms_per_level).map(move |index| RoomId::new(level, index)))
    }

    /// Level-major position of `room`, used as its initial label.
    pub fn position(&self, room: &RoomId) -> usize {
        room.level as usize * self.rooms_per_level as usize + room.index as usize
    }

    pub fn possible_neighbours_on_level(&self, room: &RoomId, level: u32) -> Vec<RoomId> {
        let ring_size = self.ring_size();
        if self.is_hub(room) {
            return (0..ring_size)
                .map(|index| RoomId::new(level, index))
                .collect();
        }
        vec![
            RoomId::new(level, (room.index + 1) % ring_size),
            RoomId::new(level, (room.index + ring_size - 1) % ring_size),
            RoomId::new(level, self.hub_index()),
        ]
    }

    /// Rooms on the levels directly below and above `room` that a passage from
    /// `room` could reach. Independent of the current connections.
    pub fn possible_neighbours(&self, room: &RoomId) -> Vec<RoomId> {
        let mut result = Vec::new();
        if room.level > 0 {
            result.extend(self.possible_neighbours_on_level(room, room.level - 1));
        }
        if room.level < self.levels - 1 {
            result.extend(self.possible_neighbours_on_level(room, room.level + 1));
        }
        result
    }

    pub fn is_possible_neighbour(&self, room0: &RoomId, room1: &RoomId) -> bool {
        self.possible_neighbours(room0).contains(room1)
    }
}

use crate::room::RoomId;
use crate::room_connection::{ConnectionSet, RoomConnection};
use std::fmt;

/// An existing passage that would cross, or fold back onto, a new passage
/// between `room1` and `room2`.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Conflict {
    // 4  2
    //  \/
    //  /\
    // 1  3
    Crossing { room3: RoomId, room4: RoomId },
    // 3
    //  \
    //   1
    //  /
    // 2
    InwardFold { room1: RoomId, room3: RoomId },
    // 3
    //  \
    //   2
    //  /
    // 1
    OutwardFold { room2: RoomId, room3: RoomId },
}

impl Conflict {
    pub fn kind(&self) -> u8 {
        match self {
            Conflict::Crossing { .. } => 1,
            Conflict::InwardFold { .. } => 2,
            Conflict::OutwardFold { .. } => 3,
        }
    }

    /// The passage that has to go before the new one can be dug.
    pub fn blocking_connection(&self) -> RoomConnection {
        match *self {
            Conflict::Crossing { room3, room4 } => RoomConnection::new(room3, room4),
            Conflict::InwardFold { room1, room3 } => RoomConnection::new(room1, room3),
            Conflict::OutwardFold { room2, room3 } => RoomConnection::new(room2, room3),
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let connection = self.blocking_connection();
        write!(
            f,
            "Type {} conflict: {} to {}",
            self.kind(),
            connection.room0_id,
            connection.room1_id
        )
    }
}

fn crossing(connections: &ConnectionSet, room1: &RoomId, room2: &RoomId) -> Option<Conflict> {
    let room3 = RoomId::new(room2.level, room1.index);
    let room4 = RoomId::new(room1.level, room2.index);
    connections
        .contains(&room3, &room4)
        .then_some(Conflict::Crossing { room3, room4 })
}

fn inward_fold(connections: &ConnectionSet, room1: &RoomId, room2: &RoomId) -> Option<Conflict> {
    let room3 = room1.reflected(room2.level, room2.index)?;
    connections
        .contains(room1, &room3)
        .then_some(Conflict::InwardFold {
            room1: *room1,
            room3,
        })
}

fn outward_fold(connections: &ConnectionSet, room1: &RoomId, room2: &RoomId) -> Option<Conflict> {
    let room3 = room2.reflected(room1.level, room1.index)?;
    connections
        .contains(room2, &room3)
        .then_some(Conflict::OutwardFold {
            room2: *room2,
            room3,
        })
}

/// Whether digging `room1` to `room2` would cross or fold onto an existing
/// passage. The rooms must be on adjacent levels.
pub fn has_conflict(connections: &ConnectionSet, room1: &RoomId, room2: &RoomId) -> bool {
    crossing(connections, room1, room2).is_some()
        || inward_fold(connections, room1, room2).is_some()
        || outward_fold(connections, room1, room2).is_some()
}

/// Every conflict standing between `room1` and `room2`, by type.
pub fn find_conflicts(connections: &ConnectionSet, room1: &RoomId, room2: &RoomId) -> Vec<Conflict> {
    [
        crossing(connections, room1, room2),
        inward_fold(connections, room1, room2),
        outward_fold(connections, room1, room2),
    ]
    .into_iter()
    .flatten()
    .collect()
}

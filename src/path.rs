use crate::gen::LabyrinthError;
use crate::room::RoomId;
use crate::room_connection::ConnectionSet;
use pathfinding::prelude::{bfs, bfs_reach};

/// Read access to the passages of a labyrinth, finished or still being dug.
pub trait Connections {
    fn neighbors(&self, room: &RoomId) -> &[RoomId];

    fn contains_room(&self, room: &RoomId) -> bool;
}

impl Connections for ConnectionSet {
    fn neighbors(&self, room: &RoomId) -> &[RoomId] {
        ConnectionSet::neighbors(self, room)
    }

    fn contains_room(&self, room: &RoomId) -> bool {
        ConnectionSet::contains_room(self, room)
    }
}

/// Breadth-first path from `from` to `to`, both ends included.
///
/// With `to = None` the whole reachable part is explored and the path to the
/// room dequeued last is returned. That room is only a heuristic stand-in for
/// the farthest room from `from`.
pub fn shortest_path<C>(
    connections: &C,
    from: RoomId,
    to: Option<RoomId>,
) -> Result<Vec<RoomId>, LabyrinthError>
where
    C: Connections + ?Sized,
{
    if !connections.contains_room(&from) {
        return Err(LabyrinthError::UnknownRoom(from));
    }
    let target = match to {
        Some(to) => to,
        None => bfs_reach(from, |room| connections.neighbors(room).to_vec())
            .last()
            .unwrap_or(from),
    };
    bfs(
        &from,
        |room| connections.neighbors(room).iter().copied(),
        |room| *room == target,
    )
    .ok_or(LabyrinthError::NoPath { from, to: target })
}

/// Two-pass breadth-first estimate of the longest shortest path: the far end of
/// a search from `start`, searched from again. Exact on trees, an
/// approximation once the labyrinth has cycles.
pub fn approximate_diameter<C>(connections: &C, start: RoomId) -> Result<Vec<RoomId>, LabyrinthError>
where
    C: Connections + ?Sized,
{
    let first = shortest_path(connections, start, None)?;
    let far_end = first.last().copied().unwrap_or(start);
    shortest_path(connections, far_end, None)
}

/// Number of moves between two rooms.
pub fn distance<C>(connections: &C, from: RoomId, to: RoomId) -> Result<usize, LabyrinthError>
where
    C: Connections + ?Sized,
{
    Ok(shortest_path(connections, from, Some(to))?.len() - 1)
}

use crate::room::{Dimensions, RoomId};
use std::collections::BTreeMap;

/// An undirected passage between two rooms, stored with the smaller room first
/// so that both orientations compare and hash alike.
#[derive(Ord, PartialOrd, PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct RoomConnection {
    pub room0_id: RoomId,
    pub room1_id: RoomId,
}

impl RoomConnection {
    pub fn new(room0_id: RoomId, room1_id: RoomId) -> Self {
        if room0_id <= room1_id {
            return RoomConnection { room0_id, room1_id };
        }
        RoomConnection {
            room0_id: room1_id,
            room1_id: room0_id,
        }
    }

    pub fn contains(&self, room: &RoomId) -> bool {
        self.room0_id == *room || self.room1_id == *room
    }
}

/// Adjacency lists of the labyrinth. Every edge is stored in both directions
/// and each list keeps the order in which passages were dug.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionSet {
    connections: BTreeMap<RoomId, Vec<RoomId>>,
}

impl ConnectionSet {
    pub fn new(dimensions: &Dimensions) -> Self {
        ConnectionSet {
            connections: dimensions.rooms().map(|room| (room, Vec::new())).collect(),
        }
    }

    pub fn neighbors(&self, room: &RoomId) -> &[RoomId] {
        self.connections
            .get(room)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains_room(&self, room: &RoomId) -> bool {
        self.connections.contains_key(room)
    }

    pub fn contains(&self, room0: &RoomId, room1: &RoomId) -> bool {
        self.neighbors(room0).contains(room1)
    }

    pub fn connect(&mut self, room0: RoomId, room1: RoomId) {
        debug_assert_ne!(room0, room1, "self loop at {room0}");
        debug_assert!(!self.contains(&room0, &room1), "{room0} to {room1} already exists");
        self.connections.entry(room0).or_default().push(room1);
        self.connections.entry(room1).or_default().push(room0);
    }

    /// Removes the passage in both directions. Returns false if there was none.
    pub fn disconnect(&mut self, room0: &RoomId, room1: &RoomId) -> bool {
        let removed = Self::remove_one(&mut self.connections, room0, room1);
        Self::remove_one(&mut self.connections, room1, room0) && removed
    }

    fn remove_one(
        connections: &mut BTreeMap<RoomId, Vec<RoomId>>,
        from: &RoomId,
        to: &RoomId,
    ) -> bool {
        let Some(neighbors) = connections.get_mut(from) else {
            return false;
        };
        let Some(index) = neighbors.iter().position(|room| room == to) else {
            return false;
        };
        neighbors.remove(index);
        true
    }

    pub fn rooms(&self) -> impl Iterator<Item = &RoomId> {
        self.connections.keys()
    }

    /// Each undirected edge once, in room order.
    pub fn edges(&self) -> impl Iterator<Item = RoomConnection> + '_ {
        self.connections.iter().flat_map(|(room, neighbors)| {
            neighbors
                .iter()
                .filter(move |other| *room < **other)
                .map(move |other| RoomConnection::new(*room, *other))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.connections.values().map(Vec::len).sum::<usize>() / 2
    }
}

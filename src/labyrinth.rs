use crate::gen::LabyrinthError;
use crate::path::{approximate_diameter, shortest_path, Connections};
use crate::room::{Dimensions, RoomId};
use crate::room_connection::{ConnectionSet, RoomConnection};

/// A finished, fully connected labyrinth. Nothing changes after generation, so
/// it can be shared freely between readers.
#[derive(Debug, Clone)]
pub struct Labyrinth {
    dimensions: Dimensions,
    connections: ConnectionSet,
    goal_room: RoomId,
    longest_path: Vec<RoomId>,
    path_to_goal: Vec<RoomId>,
    refactor_count: u32,
    extra_connections: Vec<RoomConnection>,
}

impl Labyrinth {
    pub(crate) fn new(
        dimensions: Dimensions,
        connections: ConnectionSet,
        refactor_count: u32,
        extra_connections: Vec<RoomConnection>,
    ) -> Result<Self, LabyrinthError> {
        let longest_path = approximate_diameter(&connections, dimensions.last_hub())?;
        let goal_room = longest_path
            .last()
            .copied()
            .unwrap_or_else(|| dimensions.last_hub());
        log::info!("The longest path contains {} rooms.", longest_path.len());

        let path_to_goal = shortest_path(&connections, RoomId::origin(), Some(goal_room))?;
        log::info!(
            "The path from room {} to the goal {goal_room} contains {} rooms.",
            RoomId::origin(),
            path_to_goal.len()
        );

        Ok(Labyrinth {
            dimensions,
            connections,
            goal_room,
            longest_path,
            path_to_goal,
            refactor_count,
            extra_connections,
        })
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn rooms(&self) -> impl Iterator<Item = RoomId> {
        self.dimensions.rooms()
    }

    /// Rooms one passage away, in the order the passages were dug. Empty for a
    /// room outside the labyrinth.
    pub fn neighbors(&self, room: &RoomId) -> &[RoomId] {
        self.connections.neighbors(room)
    }

    pub fn edges(&self) -> impl Iterator<Item = RoomConnection> + '_ {
        self.connections.edges()
    }

    pub fn shortest_path(
        &self,
        from: RoomId,
        to: Option<RoomId>,
    ) -> Result<Vec<RoomId>, LabyrinthError> {
        shortest_path(&self.connections, from, to)
    }

    /// The room at the far end of [`longest_path`](Self::longest_path); where
    /// the goal of a game is placed.
    pub fn goal_room(&self) -> RoomId {
        self.goal_room
    }

    /// Heuristic longest path, found by two breadth-first searches starting at
    /// the hub of the top level.
    pub fn longest_path(&self) -> &[RoomId] {
        &self.longest_path
    }

    /// Shortest path from room (0, 0) to the goal.
    pub fn path_to_goal(&self) -> &[RoomId] {
        &self.path_to_goal
    }

    pub fn refactor_count(&self) -> u32 {
        self.refactor_count
    }

    pub fn extra_connections(&self) -> &[RoomConnection] {
        &self.extra_connections
    }
}

impl Connections for Labyrinth {
    fn neighbors(&self, room: &RoomId) -> &[RoomId] {
        Labyrinth::neighbors(self, room)
    }

    fn contains_room(&self, room: &RoomId) -> bool {
        self.dimensions.contains(room)
    }
}

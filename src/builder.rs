use crate::conflict::{find_conflicts, has_conflict};
use crate::gen::LabyrinthError;
use crate::labyrinth::Labyrinth;
use crate::random_set::{take_random, RandomSet};
use crate::room::{Dimensions, RoomId};
use crate::room_connection::{ConnectionSet, RoomConnection};
use crate::room_labels::RoomLabels;
use rand::prelude::SliceRandom;
use rand::Rng;

/// Outcome of one iteration of [`LabyrinthBuilder::step`].
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum GrowthStep {
    /// A passage joined two blobs.
    Connected(RoomConnection),
    /// Every candidate of the room was rejected; it left the open set.
    Exhausted(RoomId),
    /// The open set was empty and a refactor forced this passage.
    Refactored(RoomConnection),
}

/// Digs passages between randomly chosen neighbouring rooms until every room
/// belongs to a single blob, refactoring when no legal passage is left.
#[derive(Debug, Clone)]
pub struct LabyrinthBuilder {
    dimensions: Dimensions,
    connections: ConnectionSet,
    labels: RoomLabels,
    open_set: RandomSet<RoomId>,
    number_of_different_labels: usize,
    refactor_count: u32,
    max_refactor_attempts: u32,
    extra_connections: Vec<RoomConnection>,
}

impl LabyrinthBuilder {
    pub fn new(dimensions: Dimensions, max_refactor_attempts: u32) -> Self {
        LabyrinthBuilder {
            dimensions,
            connections: ConnectionSet::new(&dimensions),
            labels: RoomLabels::new(&dimensions),
            open_set: dimensions.rooms().collect(),
            number_of_different_labels: dimensions.room_count(),
            refactor_count: 0,
            max_refactor_attempts,
            extra_connections: Vec::new(),
        }
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn connections(&self) -> &ConnectionSet {
        &self.connections
    }

    pub fn labels(&self) -> &RoomLabels {
        &self.labels
    }

    pub fn open_set(&self) -> &RandomSet<RoomId> {
        &self.open_set
    }

    pub fn number_of_different_labels(&self) -> usize {
        self.number_of_different_labels
    }

    pub fn refactor_count(&self) -> u32 {
        self.refactor_count
    }

    pub fn extra_connections(&self) -> &[RoomConnection] {
        &self.extra_connections
    }

    pub fn is_single_blob(&self) -> bool {
        self.number_of_different_labels <= 1
    }

    /// Runs [`step`](Self::step) until the labyrinth is a single blob.
    pub fn grow<R>(&mut self, rng: &mut R) -> Result<(), LabyrinthError>
    where
        R: Rng + ?Sized,
    {
        while !self.is_single_blob() {
            self.step(rng)?;
        }
        Ok(())
    }

    pub fn step<R>(&mut self, rng: &mut R) -> Result<GrowthStep, LabyrinthError>
    where
        R: Rng + ?Sized,
    {
        let Some(room1) = self.open_set.choose(rng) else {
            return self.refactor(rng).map(GrowthStep::Refactored);
        };

        let mut possible_neighbours = self.dimensions.possible_neighbours(&room1);
        while let Some(room2) = take_random(&mut possible_neighbours, rng) {
            if !self.labels.same_label(&room1, &room2)
                && !has_conflict(&self.connections, &room1, &room2)
            {
                self.connect(room1, room2)?;
                self.number_of_different_labels -= 1;
                log::debug!("{room1} to {room2}");
                return Ok(GrowthStep::Connected(RoomConnection::new(room1, room2)));
            }
        }

        log::trace!("{room1} has no possible neighbour left");
        self.open_set.remove(&room1);
        Ok(GrowthStep::Exhausted(room1))
    }

    /// Joins two blobs that no legal passage can join any more: removes the
    /// passages standing in the way of a pair of neighbouring rooms with
    /// different labels, reopens every room of the split blobs, and connects
    /// the pair.
    pub fn refactor<R>(&mut self, rng: &mut R) -> Result<RoomConnection, LabyrinthError>
    where
        R: Rng + ?Sized,
    {
        if self.refactor_count >= self.max_refactor_attempts {
            return Err(LabyrinthError::RefactorLimitExceeded {
                attempts: self.refactor_count,
            });
        }
        self.refactor_count += 1;

        let (room1, room2) = self.find_possible_neighbours_with_different_labels(rng)?;
        log::info!(
            "Refactoring ({}/{}): {room1} to {room2}",
            self.refactor_count,
            self.max_refactor_attempts
        );

        self.dig_through(room1, room2)
    }

    /// Removes every passage in conflict with `room1` to `room2`, gives both
    /// ends of each removed passage a fresh label and reopens their blobs, then
    /// digs the passage.
    fn dig_through(&mut self, room1: RoomId, room2: RoomId) -> Result<RoomConnection, LabyrinthError> {
        for conflict in find_conflicts(&self.connections, &room1, &room2) {
            log::debug!("Found a {conflict}");
            let RoomConnection { room0_id, room1_id } = conflict.blocking_connection();
            if !self.connections.disconnect(&room0_id, &room1_id) {
                return Err(LabyrinthError::InternalConsistency(format!(
                    "{conflict} names a passage that does not exist"
                )));
            }
            for room in [room0_id, room1_id] {
                let label = self.labels.find_unused_label();
                self.labels
                    .propagate_label(&self.connections, room, label, Some(&mut self.open_set));
            }
        }

        self.connect(room1, room2)?;
        self.number_of_different_labels = self.labels.count_distinct_labels();
        Ok(RoomConnection::new(room1, room2))
    }

    fn find_possible_neighbours_with_different_labels<R>(
        &self,
        rng: &mut R,
    ) -> Result<(RoomId, RoomId), LabyrinthError>
    where
        R: Rng + ?Sized,
    {
        let mut rooms = self.dimensions.rooms().collect::<Vec<_>>();
        rooms.shuffle(rng);

        for room1 in rooms {
            let mut possible_neighbours = self.dimensions.possible_neighbours(&room1);
            possible_neighbours.shuffle(rng);
            if let Some(room2) = possible_neighbours
                .into_iter()
                .find(|room2| !self.labels.same_label(&room1, room2))
            {
                return Ok((room1, room2));
            }
        }

        Err(LabyrinthError::InternalConsistency(
            "unable to find possible neighbours with different labels".to_string(),
        ))
    }

    /// Digs a passage and merges the blobs of its ends.
    fn connect(&mut self, room1: RoomId, room2: RoomId) -> Result<(), LabyrinthError> {
        let (Some(label1), Some(label2)) = (self.labels.label(&room1), self.labels.label(&room2))
        else {
            return Err(LabyrinthError::InternalConsistency(format!(
                "{room1} or {room2} has no label"
            )));
        };
        self.connections.connect(room1, room2);
        self.labels.merge_labels(label1, label2);
        Ok(())
    }

    /// Adds up to `requested` passages between rooms already in the same blob,
    /// each free of conflicts when dug. Returns how many were added.
    pub fn add_extra_connections<R>(&mut self, requested: usize, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        self.open_set = self.dimensions.rooms().collect();
        let mut added = 0;

        while added < requested {
            let Some(room1) = self.open_set.choose(rng) else {
                break;
            };
            let mut possible_neighbours = self.dimensions.possible_neighbours(&room1);
            let mut room2 = None;
            while let Some(candidate) = take_random(&mut possible_neighbours, rng) {
                if !self.connections.contains(&room1, &candidate)
                    && !has_conflict(&self.connections, &room1, &candidate)
                {
                    room2 = Some(candidate);
                    break;
                }
            }

            let Some(room2) = room2 else {
                self.open_set.remove(&room1);
                continue;
            };
            self.connections.connect(room1, room2);
            self.extra_connections.push(RoomConnection::new(room1, room2));
            log::debug!("Extra connection added: {room1} to {room2}.");
            added += 1;
        }

        log::info!("{requested} extra connection(s) requested; {added} added.");
        added
    }

    /// Relabels from the origin and fails unless that reaches every room.
    pub fn check_single_component(&mut self) -> Result<(), LabyrinthError> {
        let label = self.labels.find_unused_label();
        self.labels
            .propagate_label(&self.connections, RoomId::origin(), label, None);

        let blobs = self.labels.count_distinct_labels();
        if blobs > 1 {
            return Err(LabyrinthError::InternalConsistency(format!(
                "the labyrinth is in at least {blobs} separate blobs"
            )));
        }
        self.number_of_different_labels = blobs;
        log::info!("The labyrinth is a single blob.");
        Ok(())
    }

    pub fn finish(self) -> Result<Labyrinth, LabyrinthError> {
        Labyrinth::new(
            self.dimensions,
            self.connections,
            self.refactor_count,
            self.extra_connections,
        )
    }
}

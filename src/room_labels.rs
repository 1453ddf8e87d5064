//! Connected-component ("blob") labels of the rooms.

use crate::random_set::RandomSet;
use crate::room::{Dimensions, RoomId};
use crate::room_connection::ConnectionSet;
use std::collections::{HashMap, HashSet};

pub type Label = u32;

#[derive(Debug, Clone, Default)]
pub struct RoomLabels {
    labels: HashMap<RoomId, Label>,
}

impl RoomLabels {
    /// Every room starts in a blob of its own, labelled by its position.
    pub fn new(dimensions: &Dimensions) -> Self {
        RoomLabels {
            labels: dimensions
                .rooms()
                .map(|room| (room, dimensions.position(&room) as Label))
                .collect(),
        }
    }

    pub fn label(&self, room: &RoomId) -> Option<Label> {
        self.labels.get(room).copied()
    }

    pub fn same_label(&self, room0: &RoomId, room1: &RoomId) -> bool {
        match (self.label(room0), self.label(room1)) {
            (Some(label0), Some(label1)) => label0 == label1,
            _ => false,
        }
    }

    /// Smallest label no room carries.
    pub fn find_unused_label(&self) -> Label {
        let used = self.labels.values().copied().collect::<HashSet<_>>();
        let mut label = 0;
        while used.contains(&label) {
            label += 1;
        }
        label
    }

    /// Flood-fills `label` over every room reachable from `start`. Visited rooms
    /// are added to `open_set` when one is given. Returns the number of rooms
    /// relabelled.
    pub fn propagate_label(
        &mut self,
        connections: &ConnectionSet,
        start: RoomId,
        label: Label,
        mut open_set: Option<&mut RandomSet<RoomId>>,
    ) -> usize {
        let mut stack = vec![start];
        let mut visited = HashSet::from([start]);

        while let Some(room) = stack.pop() {
            self.labels.insert(room, label);
            if let Some(open_set) = open_set.as_deref_mut() {
                open_set.insert(room);
            }
            for next in connections.neighbors(&room) {
                if visited.insert(*next) {
                    stack.push(*next);
                }
            }
        }
        visited.len()
    }

    /// Joins two blobs; the smaller label survives.
    pub fn merge_labels(&mut self, label0: Label, label1: Label) {
        let (keep, replace) = (label0.min(label1), label0.max(label1));
        for label in self.labels.values_mut() {
            if *label == replace {
                *label = keep;
            }
        }
    }

    pub fn count_distinct_labels(&self) -> usize {
        self.labels.values().collect::<HashSet<_>>().len()
    }
}

use labyrinth_generator::conflict::has_conflict;
use labyrinth_generator::room_connection::ConnectionSet;
use labyrinth_generator::{
    generate, generate_labyrinth, generate_labyrinth_with_rng, Labyrinth, LabyrinthConfig,
    LabyrinthError, RoomId,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn connection_set(labyrinth: &Labyrinth) -> ConnectionSet {
    let mut connections = ConnectionSet::new(labyrinth.dimensions());
    for edge in labyrinth.edges() {
        connections.connect(edge.room0_id, edge.room1_id);
    }
    connections
}

fn check_labyrinth(labyrinth: &Labyrinth) -> Result<(), TestCaseError> {
    let dimensions = labyrinth.dimensions();
    for room in labyrinth.rooms() {
        for other in labyrinth.neighbors(&room) {
            prop_assert_ne!(room, *other);
            prop_assert_eq!(room.level.abs_diff(other.level), 1);
            prop_assert!(dimensions.is_possible_neighbour(&room, other));
            prop_assert!(labyrinth.neighbors(other).contains(&room));
        }
        prop_assert!(labyrinth.shortest_path(RoomId::origin(), Some(room)).is_ok());
    }

    let connections = connection_set(labyrinth);
    for edge in labyrinth.edges() {
        let mut others = connections.clone();
        others.disconnect(&edge.room0_id, &edge.room1_id);
        prop_assert!(!has_conflict(&others, &edge.room0_id, &edge.room1_id));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn reference_size_stays_within_refactor_limit(seed in any::<u64>()) {
        let labyrinth = generate_labyrinth(LabyrinthConfig {
            seed: Some(seed),
            ..Default::default()
        });
        prop_assert!(labyrinth.is_ok(), "seed {} failed: {:?}", seed, labyrinth.as_ref().err());
        let labyrinth = labyrinth.unwrap();
        prop_assert!(labyrinth.refactor_count() <= 100);
        prop_assert_eq!(labyrinth.edges().count(), 104);
        check_labyrinth(&labyrinth)?;
    }

    #[test]
    fn generated_labyrinths_are_valid(
        seed in any::<u64>(),
        levels in 3u32..8,
        rooms_per_level in 4u32..9,
    ) {
        let labyrinth = generate_labyrinth(LabyrinthConfig {
            levels,
            rooms_per_level,
            seed: Some(seed),
            ..Default::default()
        }).unwrap();
        prop_assert_eq!(labyrinth.edges().count(), (levels * rooms_per_level - 1) as usize);
        check_labyrinth(&labyrinth)?;
    }

    #[test]
    fn extra_connections_keep_labyrinth_valid(seed in any::<u64>(), extra in 1usize..10) {
        let labyrinth = generate_labyrinth(LabyrinthConfig {
            levels: 6,
            rooms_per_level: 7,
            extra_connections: extra,
            seed: Some(seed),
            ..Default::default()
        }).unwrap();
        let added = labyrinth.extra_connections().len();
        prop_assert!(added <= extra);
        prop_assert_eq!(labyrinth.edges().count(), 41 + added);
        check_labyrinth(&labyrinth)?;
    }

    #[test]
    fn path_lengths_are_symmetric(
        seed in any::<u64>(),
        a in (0u32..5, 0u32..6),
        b in (0u32..5, 0u32..6),
    ) {
        let labyrinth = generate_labyrinth(LabyrinthConfig {
            levels: 5,
            rooms_per_level: 6,
            seed: Some(seed),
            ..Default::default()
        }).unwrap();
        let a = RoomId::new(a.0, a.1);
        let b = RoomId::new(b.0, b.1);
        let forward = labyrinth.shortest_path(a, Some(b)).unwrap();
        let backward = labyrinth.shortest_path(b, Some(a)).unwrap();
        prop_assert_eq!(forward.len(), backward.len());
        prop_assert_eq!(forward.first(), Some(&a));
        prop_assert_eq!(forward.last(), Some(&b));
        prop_assert_eq!(&forward, &labyrinth.shortest_path(a, Some(b)).unwrap());
    }
}

#[test]
fn small_labyrinth_paths() {
    let labyrinth = generate_labyrinth(LabyrinthConfig {
        levels: 3,
        rooms_per_level: 4,
        seed: Some(9),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(labyrinth.rooms().count(), 12);
    assert_eq!(labyrinth.edges().count(), 11);

    let target = RoomId::new(1, 0);
    let path = labyrinth.shortest_path(RoomId::origin(), Some(target)).unwrap();
    assert_eq!(path.first(), Some(&RoomId::origin()));
    assert_eq!(path.last(), Some(&target));
    for step in path.windows(2) {
        assert!(labyrinth.neighbors(&step[0]).contains(&step[1]));
    }

    let room = RoomId::new(2, 3);
    assert_eq!(labyrinth.shortest_path(room, Some(room)).unwrap(), vec![room]);
}

#[test]
fn goal_is_the_far_end_of_the_longest_path() {
    let labyrinth = generate_labyrinth(LabyrinthConfig {
        seed: Some(4),
        ..Default::default()
    })
    .unwrap();
    let goal = labyrinth.goal_room();
    assert_eq!(labyrinth.longest_path().last(), Some(&goal));
    assert_eq!(labyrinth.path_to_goal().first(), Some(&RoomId::origin()));
    assert_eq!(labyrinth.path_to_goal().last(), Some(&goal));
    assert_eq!(
        labyrinth.shortest_path(RoomId::origin(), Some(goal)).unwrap(),
        labyrinth.path_to_goal()
    );
}

#[test]
fn injected_rng_is_deterministic() {
    let config = || LabyrinthConfig {
        levels: 4,
        rooms_per_level: 5,
        ..Default::default()
    };
    let first = generate_labyrinth_with_rng(config(), &mut StdRng::seed_from_u64(77)).unwrap();
    let second = generate_labyrinth_with_rng(config(), &mut StdRng::seed_from_u64(77)).unwrap();
    for room in first.rooms() {
        assert_eq!(first.neighbors(&room), second.neighbors(&room));
    }
    assert_eq!(first.longest_path(), second.longest_path());
}

#[test]
fn rejects_undersized_grids() {
    assert!(matches!(
        generate(1, 4),
        Err(LabyrinthError::InvalidParameters {
            levels: 1,
            rooms_per_level: 4
        })
    ));
    assert!(matches!(
        generate(5, 2),
        Err(LabyrinthError::InvalidParameters { .. })
    ));
}

#[test]
fn rooms_outside_the_grid() {
    let labyrinth = generate(3, 5).unwrap();
    let outside = RoomId::new(3, 0);
    assert!(labyrinth.neighbors(&outside).is_empty());
    assert!(matches!(
        labyrinth.shortest_path(outside, Some(RoomId::origin())),
        Err(LabyrinthError::UnknownRoom(room)) if room == outside
    ));
    assert!(matches!(
        labyrinth.shortest_path(RoomId::origin(), Some(outside)),
        Err(LabyrinthError::NoPath { .. })
    ));
}
